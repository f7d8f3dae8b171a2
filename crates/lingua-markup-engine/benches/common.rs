// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use lingua_markup_engine::{LessonData, VocabularyEntry};

#[allow(dead_code)]
pub fn generate_lesson(entries: usize) -> LessonData {
    let vocabulary = (0..entries)
        .map(|i| {
            VocabularyEntry::new(format!("palabra {i}"), "pa-[LA]-bra", format!("word {i}"))
                .with_example(format!("Esta es la **palabra** número {i}."))
        })
        .collect();

    LessonData {
        title: "Lección de prueba".into(),
        vocabulary,
        important: vec!["Recuerda el acento en [LA]".into(); entries / 4 + 1],
        grammar: vec!["El sustantivo es **femenino**".into(); entries / 4 + 1],
        cultural_notes: vec!["Se usa en todo el mundo hispano".into(); entries / 4 + 1],
    }
}

#[allow(dead_code)]
pub fn generate_tutor_reply(paragraphs: usize) -> String {
    let base = "¡Muy bien! **Gracias** es una palabra muy importante\n\n📚 FORMAS DE DAR LAS GRACIAS\n\n**Gracias** → Thanks\nPronunciación: [GRA-sias]\n\n• **Muchas gracias** = Thank you very much\n— De nada.\n\n";
    base.repeat(paragraphs)
}

#[allow(dead_code)]
pub fn generate_delimiter_soup(size: usize) -> String {
    "** [ ]] **[ → = == • - — ".repeat(size)
}
