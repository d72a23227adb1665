//! Tagalog to English book names, used to name chapter files.
use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref BOOKS: HashMap<&'static str, &'static str> = [
        ("Mateo", "Matthew"),
        ("Marcos", "Mark"),
        ("Lucas", "Luke"),
        ("Juan", "John"),
        ("Mga Gawa", "Acts"),
        ("Roma", "Romans"),
        ("Corinto", "Corinthians"),
        ("Galata", "Galatians"),
        ("Efeso", "Ephesians"),
        ("Filipos", "Philippians"),
        ("Coloso", "Colossians"),
        ("Tesalonica", "Thessalonians"),
        ("Timoteo", "Timothy"),
        ("Tito", "Titus"),
        ("Filemon", "Philemon"),
        ("Hebreo", "Hebrews"),
        ("Santiago", "James"),
        ("Pedro", "Peter"),
        ("Judas", "Jude"),
        ("Pahayag", "Revelation"),
    ]
    .into_iter()
    .collect();
}

/// English name of a book, if known.
pub fn translate(name: &str) -> Option<&'static str> {
    BOOKS.get(name).copied()
}

/// Build a file name from a chapter heading such as `1 Corinto 13`.
///
/// Heading words are concatenated without separator, book names being translated
/// (two-word names included): `1 Corinto 13` gives `1Corinthians13`.
pub fn file_name(heading: &str) -> String {
    let words: Vec<&str> = heading.split_whitespace().collect();
    let mut name = String::new();
    let mut idx = 0;

    while idx < words.len() {
        if let Some(pair) = words.get(idx..idx + 2) {
            if let Some(book) = translate(&pair.join(" ")) {
                name.push_str(book);
                idx += 2;
                continue;
            }
        }
        name.push_str(translate(words[idx]).unwrap_or(words[idx]));
        idx += 1;
    }

    name
}
