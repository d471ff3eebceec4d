// Command-line interface for biblia
//
// This binary reads books out of the biblia corpus and renders them, and also
// parses standalone text files in the same format.
//
// Reading needs two files: the corpus text and the range index that maps each
// book to its lines. Their paths come from the configuration (biblia.toml or
// --config) and can be overridden with --corpus and --index.
//
// Usage:
//  biblia <book> [--to <format>] [--output <file>]              - Read a book (default)
//  biblia read <book> [--to <format>] [--output <file>]         - Same as above (explicit)
//  biblia books [--testament old|new] [--search <term>] [--json] - List books
//  biblia convert <input> [--to <format>] [--title <t>] [-o <file>] - Render a standalone file
//  biblia inspect <path> [<transform>]                          - Show parser stages
//  biblia generate-css                                          - Print the baseline CSS
//  biblia --list-formats                                        - List output formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  biblia Rute --to html --extra-theme dark --extra-font-size 24

mod transforms;

use biblia_babel::corpus::{BookEntry, BookIndex, Corpus, Testament};
use biblia_babel::parser::parse_book;
use biblia_babel::publish::{publish, PublishArtifact, PublishSpec};
use biblia_babel::{BookDocument, FormatRegistry};
use biblia_config::{BibliaConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["read", "books", "convert", "inspect", "generate-css", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn format_arg() -> Arg {
    Arg::new("to")
        .long("to")
        .short('t')
        .help("Output format (html, markdown, json, treeviz)")
        .long_help(
            "Output format.\n\n\
            If not specified, the format is detected from the --output file\n\
            extension. `read` falls back to html.",
        )
        .value_hint(ValueHint::Other)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("biblia")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read and render books of the biblia text")
        .long_about(
            "biblia reads books out of the biblia corpus and renders them.\n\n\
            Commands:\n  \
            - read:    Render one book (default command)\n  \
            - books:   List the books of the range index\n  \
            - convert: Render a standalone file in the same text format\n  \
            - inspect: View parser stages (line kinds, blocks)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            biblia Rute                              # Rute as HTML (stdout)\n  \
            biblia Rute --to markdown -o rute.md     # Rute as Markdown file\n  \
            biblia Rute --extra-theme dark           # Dark HTML page\n  \
            biblia books --testament new             # New Testament books\n  \
            biblia inspect rute.md lines-classify    # How each line was read",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a biblia.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .value_name("PATH")
                .help("Corpus text file (overrides corpus.text)")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("index")
                .long("index")
                .value_name("PATH")
                .help("Range index file (overrides corpus.index)")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("read")
                .about("Render a book of the corpus (default command)")
                .arg(
                    Arg::new("book")
                        .help("Book name, exactly as in the range index")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::Other),
                )
                .arg(format_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("books")
                .about("List the books of the range index")
                .arg(
                    Arg::new("testament")
                        .long("testament")
                        .help("Only list books of one testament (old/at, new/nt)")
                        .value_parser(["old", "new", "at", "nt"]),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .short('s')
                        .help("Only list books whose name contains this text (case-insensitive)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the books as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a standalone file written in the biblia text format")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(format_arg())
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Book title (defaults to the input file name)"),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect parser stages for a text file")
                .long_about(
                    "View how the parser reads a file.\n\n\
                    Transforms:\n  \
                    - blocks-treeviz:  Blocks as a tree (default)\n  \
                    - blocks-json:     Blocks as JSON\n  \
                    - lines-classify:  Kind of every source line\n\n\
                    Extra Parameters:\n  \
                    --extra-hide-verses   Show verse lists without their verses",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the text file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'blocks-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the default CSS used for HTML export")
                .long_about(
                    "Outputs the baseline CSS used when rendering to HTML.\n\n\
                    Save it, edit it, and pass it back with --extra-css-path\n\
                    or convert.html.custom_css to extend the default styles.",
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "read"
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "read".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("verbose") {
        init_tracing();
    }

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    if let Some(path) = matches.get_one::<String>("corpus") {
        config.corpus.text = path.into();
    }
    if let Some(path) = matches.get_one::<String>("index") {
        config.corpus.index = path.into();
    }
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("read", sub_matches)) => {
            let book = required_arg(sub_matches, "book");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = resolve_format(sub_matches, output, Some("html"));
            handle_read_command(book, &to, output, &extra_params, &config);
        }
        Some(("books", sub_matches)) => {
            let testament = sub_matches
                .get_one::<String>("testament")
                .and_then(|name| Testament::from_name(name));
            let search = sub_matches.get_one::<String>("search").map(|s| s.as_str());
            handle_books_command(testament, search, sub_matches.get_flag("json"), &config);
        }
        Some(("convert", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let title = sub_matches.get_one::<String>("title").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = resolve_format(sub_matches, output, None);
            handle_convert_command(input, &to, title, output, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = required_arg(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("generate-css", _)) => {
            print!("{}", biblia_babel::formats::get_default_css());
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Filter for `--verbose`: `RUST_LOG` directives when set and valid, `debug` otherwise.
fn verbose_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("debug"))
}

fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(verbose_filter(directives.as_deref()))
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {err}");
    }
    tracing::debug!("Verbose mode enabled");
}

fn required_arg<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing argument '{name}'");
            std::process::exit(1);
        }
    }
}

/// The explicit --to, else the format matching the output file extension,
/// else `fallback`.
fn resolve_format(
    matches: &clap::ArgMatches,
    output: Option<&str>,
    fallback: Option<&str>,
) -> String {
    if let Some(to) = matches.get_one::<String>("to") {
        return to.clone();
    }
    let detected = output.and_then(|path| FormatRegistry::default().detect_format_from_filename(path));
    match detected.or_else(|| fallback.map(str::to_string)) {
        Some(format) => format,
        None => {
            eprintln!("Error: Could not detect the output format");
            eprintln!("Please specify --to explicitly");
            std::process::exit(1);
        }
    }
}

/// Handle the read command
fn handle_read_command(
    book: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &BibliaConfig,
) {
    let index = load_index(config);
    let corpus = Corpus::load(&config.corpus.text).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let doc = corpus.read_book(&index, book).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        let suggestions: Vec<&str> = index.search(book).map(|b| b.name.as_str()).collect();
        if !suggestions.is_empty() {
            eprintln!("Did you mean: {}", suggestions.join(", "));
        }
        std::process::exit(1);
    });

    write_document(&doc, to, output, extra_params, config);
}

/// Handle the books command
fn handle_books_command(
    testament: Option<Testament>,
    search: Option<&str>,
    json: bool,
    config: &BibliaConfig,
) {
    let index = load_index(config);
    let books: Vec<&BookEntry> = index
        .search(search.unwrap_or(""))
        .filter(|book| testament.map_or(true, |t| book.testament == t))
        .collect();
    tracing::debug!(count = books.len(), "Listing books");

    if json {
        match serde_json::to_string_pretty(&books) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("Serialization error: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    for book in books {
        println!("{}", book.name);
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: &str,
    title: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &BibliaConfig,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });
    let title = title
        .map(str::to_string)
        .unwrap_or_else(|| title_from_path(input));

    let doc = parse_book(&source, &title);
    write_document(&doc, to, output, extra_params, config);
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &BibliaConfig,
) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let params = build_inspect_params(config, extra_params);
    let output =
        transforms::execute_transform(&source, &title_from_path(path), transform, &params)
            .unwrap_or_else(|e| {
                eprintln!("Execution error: {e}");
                std::process::exit(1);
            });

    print!("{output}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Output formats:");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {name:<10} {description}");
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

/// Serialize a parsed book and print it or write it to `output`.
fn write_document(
    doc: &BookDocument,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &BibliaConfig,
) {
    let registry = FormatRegistry::default();
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    }
    tracing::debug!(format = to, blocks = doc.blocks.len(), "Rendering book");

    let mut spec = PublishSpec::new(doc, to)
        .with_options(format_params_from_config(config, to))
        .with_options(extra_params.clone());
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    match publish(spec) {
        Ok(PublishArtifact::InMemory(text)) => print!("{text}"),
        Ok(PublishArtifact::File(path)) => {
            tracing::debug!(path = %path.display(), "Wrote output");
        }
        Err(e) => {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        }
    }
}

fn load_index(config: &BibliaConfig) -> BookIndex {
    BookIndex::load(&config.corpus.index).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn title_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn load_cli_config(explicit_path: Option<&str>) -> BibliaConfig {
    let loader = Loader::new().with_optional_file("biblia.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut BibliaConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("hide-verses") {
        config.inspect.hide_verses = parse_bool_arg("hide-verses", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["theme"]) {
        config.convert.html.theme = raw;
    }

    if let Some(raw) = take_override(extra_params, &["font-size", "font_size"]) {
        config.convert.html.font_size = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid font size '{raw}' for --extra-font-size");
            std::process::exit(1);
        });
    }

    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.convert.html.custom_css = Some(path.into());
    }
}

/// Options a format receives from the configuration before any extras.
fn format_params_from_config(config: &BibliaConfig, format: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    match format {
        "html" => {
            let html = &config.convert.html;
            params.insert("theme".to_string(), html.theme().name().to_string());
            params.insert("font-size".to_string(), html.font_size.to_string());
            if let Some(css_path) = &html.custom_css {
                params.insert(
                    "css-path".to_string(),
                    css_path.to_string_lossy().into_owned(),
                );
            }
        }
        "treeviz" if config.inspect.hide_verses => {
            params.insert("hide-verses".to_string(), "true".to_string());
        }
        _ => {}
    }
    params
}

fn build_inspect_params(
    config: &BibliaConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert(
        "hide-verses".to_string(),
        config.inspect.hide_verses.to_string(),
    );

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
