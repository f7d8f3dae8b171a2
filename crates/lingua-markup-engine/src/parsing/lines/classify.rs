use super::kinds::{Bullet, Dialogue, Header, PronunciationLabel, Separator};
use crate::parsing::{keywords::SectionCategory, keywords::SectionKeywords, segment::Spacing};

/// Classification of a single line with its stripped payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming.
    Blank,
    /// A section header. `spacing` is decided here from the category.
    Header {
        glyph: &'static str,
        category: SectionCategory,
        spacing: Spacing,
        text: &'a str,
    },
    Bullet {
        marker: char,
        text: &'a str,
    },
    Dialogue {
        marker: char,
        text: &'a str,
    },
    TranslationPair {
        separator: Separator,
        source: &'a str,
        target: &'a str,
    },
    Pronunciation {
        /// The label as written, without the colon.
        label: &'a str,
        guide: &'a str,
    },
    Plain {
        text: &'a str,
    },
}

impl LineClass<'_> {
    /// Gap after the line.
    pub fn spacing_after(&self) -> Spacing {
        match self {
            LineClass::Blank | LineClass::Pronunciation { .. } => Spacing::Medium,
            LineClass::Header { spacing, .. } => *spacing,
            LineClass::Bullet { .. }
            | LineClass::Dialogue { .. }
            | LineClass::TranslationPair { .. }
            | LineClass::Plain { .. } => Spacing::Small,
        }
    }
}

/// Classifies individual lines against a shared keyword table.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'k> {
    keywords: &'k SectionKeywords,
}

impl<'k> LineClassifier<'k> {
    pub fn new(keywords: &'k SectionKeywords) -> Self {
        Self { keywords }
    }

    /// Classifies a line into a [`LineClass`]. The line need not be trimmed.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim();

        if line.is_empty() {
            return LineClass::Blank;
        }
        if let Some((glyph, text)) = Header::strip_glyph(line) {
            let category = self.keywords.resolve(text);
            return LineClass::Header {
                glyph,
                category,
                spacing: category.spacing_after(),
                text,
            };
        }
        if let Some((marker, text)) = Bullet::strip(line) {
            return LineClass::Bullet { marker, text };
        }
        if let Some((marker, text)) = Dialogue::strip(line) {
            return LineClass::Dialogue { marker, text };
        }
        if let Some((separator, source, target)) = Separator::split(line) {
            return LineClass::TranslationPair {
                separator,
                source,
                target,
            };
        }
        if let Some((label, guide)) = PronunciationLabel::split(line) {
            return LineClass::Pronunciation { label, guide };
        }
        LineClass::Plain { text: line }
    }
}
