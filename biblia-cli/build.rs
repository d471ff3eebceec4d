use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["blocks-treeviz", "blocks-json", "lines-classify"];

fn path_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let to = Arg::new("to")
        .long("to")
        .short('t')
        .value_parser(["html", "json", "markdown", "treeviz"]);
    let output = Arg::new("output")
        .long("output")
        .short('o')
        .value_hint(ValueHint::FilePath);

    let mut cmd = Command::new("biblia")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read and render books of the biblia text")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("index")
                .long("index")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("read")
                .arg(Arg::new("book").required(true).index(1))
                .arg(to.clone())
                .arg(output.clone()),
        )
        .subcommand(
            Command::new("books")
                .arg(Arg::new("testament").long("testament").value_parser(["old", "new", "at", "nt"]))
                .arg(Arg::new("search").long("search").short('s'))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("convert")
                .arg(path_arg("input", "Input file path"))
                .arg(to)
                .arg(Arg::new("title").long("title"))
                .arg(output),
        )
        .subcommand(
            Command::new("inspect")
                .arg(path_arg("path", "Path to the text file"))
                .arg(
                    Arg::new("transform")
                        .index(2)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        )),
                ),
        )
        .subcommand(Command::new("generate-css"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "biblia", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "biblia", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "biblia", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
