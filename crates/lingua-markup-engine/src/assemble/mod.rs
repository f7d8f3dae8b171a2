//! # Markup Template Assembler
//!
//! The encode direction: structured lesson data in, lesson markup out.
//!
//! Every emitted line is built so that the line classifier puts it back in the
//! intended category:
//!
//! - the title is a bold Plain line
//! - section headers use a keyword that resolves to their own category
//! - vocabulary entries are `**term** → translation` pairs, followed by a
//!   Pronunciation line when a guide is present
//! - examples are Dialogue lines, notes are Bullet lines
//!
//! Values are collapsed to one line and have separators defused where a stray
//! `→` or `=` would change the classification. Empty sections are left out.

mod sanitize;

use serde::{Deserialize, Serialize};

use crate::parsing::{
    SectionCategory, SectionKeywords, default_keywords,
    lines::kinds::{Bullet, Dialogue, Separator},
};

/// Structured lesson content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LessonData {
    pub title: String,
    pub vocabulary: Vec<VocabularyEntry>,
    pub important: Vec<String>,
    pub grammar: Vec<String>,
    #[serde(alias = "cultural_notes")]
    pub cultural_notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyEntry {
    pub term: String,
    /// Guide with `[stressed]` syllables, e.g. `[GRA-sias]`. May be empty.
    pub pronunciation: String,
    pub translation: String,
    pub example: Option<String>,
}

impl VocabularyEntry {
    pub fn new(
        term: impl Into<String>,
        pronunciation: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            pronunciation: pronunciation.into(),
            translation: translation.into(),
            example: None,
        }
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Assembles lessons using a shared keyword table for header text.
#[derive(Debug, Clone, Copy)]
pub struct TemplateAssembler<'k> {
    keywords: &'k SectionKeywords,
}

impl Default for TemplateAssembler<'static> {
    fn default() -> Self {
        Self::new(default_keywords())
    }
}

impl<'k> TemplateAssembler<'k> {
    pub fn new(keywords: &'k SectionKeywords) -> Self {
        Self { keywords }
    }

    pub fn assemble(&self, lesson: &LessonData) -> String {
        let mut blocks: Vec<Vec<String>> = Vec::new();

        let title = sanitize::single_line(&lesson.title);
        if !title.is_empty() {
            blocks.push(vec![format!(
                "**{}**",
                sanitize::defuse_separators(&title)
            )]);
        }

        if !lesson.vocabulary.is_empty() {
            blocks.push(vec![self.header(SectionCategory::Vocabulary)]);
            blocks.extend(lesson.vocabulary.iter().map(vocabulary_lines));
        }

        let examples: Vec<String> = lesson
            .vocabulary
            .iter()
            .filter_map(|entry| entry.example.as_deref())
            .map(sanitize::single_line)
            .filter(|example| !example.is_empty())
            .map(|example| format!("{}{example}", Dialogue::RENDERED))
            .collect();
        self.push_section(&mut blocks, SectionCategory::Example, examples);

        for (category, notes) in [
            (SectionCategory::Important, &lesson.important),
            (SectionCategory::Grammar, &lesson.grammar),
            (SectionCategory::Cultural, &lesson.cultural_notes),
        ] {
            let bullets = notes
                .iter()
                .map(|note| sanitize::single_line(note))
                .filter(|note| !note.is_empty())
                .map(|note| format!("{} {note}", Bullet::MARKERS[0]))
                .collect();
            self.push_section(&mut blocks, category, bullets);
        }

        let mut out = blocks
            .iter()
            .map(|block| block.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push('\n');
        out
    }

    fn push_section(
        &self,
        blocks: &mut Vec<Vec<String>>,
        category: SectionCategory,
        lines: Vec<String>,
    ) {
        if lines.is_empty() {
            return;
        }
        let mut block = Vec::with_capacity(lines.len() + 1);
        block.push(self.header(category));
        block.extend(lines);
        blocks.push(block);
    }

    fn header(&self, category: SectionCategory) -> String {
        let keyword = match self.keywords.heading_for(category) {
            Some(keyword) => keyword.to_owned(),
            None => {
                log::warn!("no keyword resolves to {category:?}, header will not classify");
                format!("{category:?}").to_uppercase()
            }
        };
        format!("{} {keyword}", category.glyph())
    }
}

fn vocabulary_lines(entry: &VocabularyEntry) -> Vec<String> {
    let term = sanitize::single_line(&entry.term);
    let translation = sanitize::single_line(&entry.translation);
    let mut lines = vec![format!(
        "**{}**{}{translation}",
        sanitize::defuse_arrow(&term),
        Separator::Arrow.padded()
    )];

    let guide = sanitize::single_line(&entry.pronunciation);
    if !guide.is_empty() {
        lines.push(format!(
            "Pronunciación: {}",
            sanitize::defuse_separators(&guide)
        ));
    }
    lines
}

/// Assembles a lesson with the built-in keyword table.
pub fn assemble(lesson: &LessonData) -> String {
    TemplateAssembler::default().assemble(lesson)
}
