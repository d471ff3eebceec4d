//! Shared fixtures for the integration tests.

use biblia_babel::{Block, BookDocument};

/// A small book in the corpus text format, touching every line kind.
pub const RUTE: &str = "\
<!-- Rute -->
## Capítulo 1
Noemi e Rute - 1 Nos dias em que os juízes julgavam 2 E o nome deste homem era Elimeleque
3 E morreu Elimeleque, marido de Noemi

Rute decide ficar -
4 Os quais tomaram para si mulheres moabitas
Notas do tradutor sobre o capítulo.
5 E morreram também ambos
## Capítulo 2
1 Tinha Noemi um parente
";

pub fn rute_blocks() -> Vec<Block> {
    vec![
        Block::chapter_title("Capítulo 1"),
        Block::section_title("Noemi e Rute"),
        Block::verse_list([
            "Nos dias em que os juízes julgavam",
            "E o nome deste homem era Elimeleque",
            "E morreu Elimeleque, marido de Noemi",
        ]),
        Block::section_title("Rute decide ficar"),
        Block::verse_list(["Os quais tomaram para si mulheres moabitas"]),
        Block::paragraph("Notas do tradutor sobre o capítulo."),
        Block::verse_list(["E morreram também ambos"]),
        Block::chapter_title("Capítulo 2"),
        Block::verse_list(["Tinha Noemi um parente"]),
    ]
}

pub fn rute_document() -> BookDocument {
    BookDocument::new("Rute", rute_blocks())
}
