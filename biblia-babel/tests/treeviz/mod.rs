//! Treeviz output for a whole book

use crate::common::rute_document;
use biblia_babel::formats::treeviz::to_treeviz_str;
use insta::assert_snapshot;

#[test]
fn test_book_tree() {
    assert_snapshot!(to_treeviz_str(&rute_document()), @r###"
    ⧉ Rute (9 blocks, 6 verses)
    ├─ § Capítulo 1
    ├─ ⊤ Noemi e Rute
    ├─ ☰ 3 verses
    │ ├─ • Nos dias em que os juízes jul…
    │ ├─ • E o nome deste homem era Elim…
    │ └─ • E morreu Elimeleque, marido d…
    ├─ ⊤ Rute decide ficar
    ├─ ☰ 1 verse
    │ └─ • Os quais tomaram para si mulh…
    ├─ ¶ Notas do tradutor sobre o cap…
    ├─ ☰ 1 verse
    │ └─ • E morreram também ambos
    ├─ § Capítulo 2
    └─ ☰ 1 verse
      └─ • Tinha Noemi um parente
    "###);
}
