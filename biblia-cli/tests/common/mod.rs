use std::fs;
use std::path::Path;

pub const INDEX: &str = "\
| Livro | Linhas |
|-------|--------|
| Introdução | 1-1 |
| Rute | 2-6 |
| Epístola De São Judas | 7-9 |
";

pub const CORPUS: &str = "\
Texto de abertura.
## Capítulo 1
Noemi e Rute - 1 Nos dias em que os juízes julgavam 2 E o nome deste homem era Elimeleque
3 E morreu Elimeleque
## Capítulo 2
1 Tinha Noemi um parente
## Capítulo 1
Saudação - 1 Judas, servo de Jesus Cristo
2 Misericórdia, e paz
";

/// Write `biblia.md` and `range.md` into `dir`, the default config paths.
pub fn write_corpus(dir: &Path) {
    fs::write(dir.join("biblia.md"), CORPUS).unwrap();
    fs::write(dir.join("range.md"), INDEX).unwrap();
}
