//! # Section Keyword Table
//!
//! Resolves header text to a [`SectionCategory`] by case-sensitive substring
//! match. Categories are checked in table order and the first hit wins, so
//! `EJEMPLO IMPORTANTE` is `Important` with the built-in table.
//!
//! The table is read-only once built. [`default_keywords`] hands out a
//! process-wide instance; callers that need more authoring languages build
//! their own with [`SectionKeywords::with_keywords`] and share it by reference.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::segment::Spacing;
use crate::style::ContentType;

/// The semantic grouping a header line resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionCategory {
    Vocabulary,
    Important,
    Example,
    Grammar,
    Cultural,
    Warning,
    /// Fallback for headers with no recognised keyword.
    Heading,
}

impl SectionCategory {
    pub const fn content_type(self) -> ContentType {
        match self {
            SectionCategory::Vocabulary => ContentType::Vocabulary,
            SectionCategory::Important => ContentType::Important,
            SectionCategory::Example => ContentType::Example,
            SectionCategory::Grammar => ContentType::Grammar,
            SectionCategory::Cultural => ContentType::Cultural,
            SectionCategory::Warning => ContentType::Warning,
            SectionCategory::Heading => ContentType::Heading,
        }
    }

    /// Inverse of [`SectionCategory::content_type`].
    pub const fn from_content_type(ty: ContentType) -> Option<Self> {
        match ty {
            ContentType::Vocabulary => Some(SectionCategory::Vocabulary),
            ContentType::Important => Some(SectionCategory::Important),
            ContentType::Example => Some(SectionCategory::Example),
            ContentType::Grammar => Some(SectionCategory::Grammar),
            ContentType::Cultural => Some(SectionCategory::Cultural),
            ContentType::Warning => Some(SectionCategory::Warning),
            ContentType::Heading => Some(SectionCategory::Heading),
            _ => None,
        }
    }

    /// Gap after a header of this category.
    pub const fn spacing_after(self) -> Spacing {
        match self {
            SectionCategory::Vocabulary
            | SectionCategory::Grammar
            | SectionCategory::Important
            | SectionCategory::Heading => Spacing::Medium,
            SectionCategory::Example | SectionCategory::Cultural | SectionCategory::Warning => {
                Spacing::Small
            }
        }
    }

    /// The header glyph authored lessons use for this category.
    pub const fn glyph(self) -> &'static str {
        match self {
            SectionCategory::Vocabulary => "📚",
            SectionCategory::Important => "🎯",
            SectionCategory::Example => "💡",
            SectionCategory::Grammar => "📖",
            SectionCategory::Cultural => "🌍",
            SectionCategory::Warning => "⚠️",
            SectionCategory::Heading => "✨",
        }
    }
}

/// Ordered mapping from category to keyword substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionKeywords {
    entries: Vec<(SectionCategory, Vec<String>)>,
}

impl Default for SectionKeywords {
    fn default() -> Self {
        Self::empty()
            .with_keywords(SectionCategory::Vocabulary, ["VOCABULARIO", "VOCABULARY"])
            .with_keywords(SectionCategory::Important, ["IMPORTANTE", "IMPORTANT"])
            .with_keywords(SectionCategory::Example, ["EJEMPLO", "EXAMPLE"])
            .with_keywords(SectionCategory::Grammar, ["GRAMÁTICA", "GRAMMAR"])
            .with_keywords(SectionCategory::Cultural, ["CULTURAL", "CULTURA"])
            .with_keywords(SectionCategory::Warning, ["ADVERTENCIA", "WARNING"])
    }
}

impl SectionKeywords {
    /// A table with no keywords: every header resolves to `Heading`.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder form of [`SectionKeywords::extend`].
    #[must_use]
    pub fn with_keywords<I, S>(mut self, category: SectionCategory, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(category, keywords);
        self
    }

    /// Appends keyword variants to `category`.
    ///
    /// New variants go after existing ones and a category keeps its position
    /// in the resolution order. Variants are trimmed, since header text is
    /// matched after trimming, and empty ones are skipped since they would
    /// match every header.
    pub fn extend<I, S>(&mut self, category: SectionCategory, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let idx = match self.entries.iter().position(|(c, _)| *c == category) {
            Some(idx) => idx,
            None => {
                self.entries.push((category, Vec::new()));
                self.entries.len() - 1
            }
        };
        let list = &mut self.entries[idx].1;
        for kw in keywords {
            let kw: String = kw.into();
            let kw = kw.trim().to_owned();
            if kw.is_empty() {
                log::debug!("ignoring empty keyword for {category:?}");
                continue;
            }
            if !list.contains(&kw) {
                list.push(kw);
            }
        }
    }

    /// The keyword variants configured for `category`, in match order.
    pub fn keywords(&self, category: SectionCategory) -> &[String] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, kws)| kws.as_slice())
            .unwrap_or(&[])
    }

    /// Resolves header text to a category, defaulting to `Heading`.
    pub fn resolve(&self, header: &str) -> SectionCategory {
        for (category, keywords) in &self.entries {
            if keywords.iter().any(|kw| header.contains(kw.as_str())) {
                return *category;
            }
        }
        log::trace!("no section keyword in {header:?}, using heading");
        SectionCategory::Heading
    }

    /// First keyword of `category` that resolves back to `category`.
    ///
    /// Used when writing headers so that the emitted text classifies as
    /// intended even if another category's keyword is a substring of it.
    pub fn heading_for(&self, category: SectionCategory) -> Option<&str> {
        self.keywords(category)
            .iter()
            .map(String::as_str)
            .find(|kw| self.resolve(kw) == category)
    }
}

/// The built-in keyword table, constructed on first use.
pub fn default_keywords() -> &'static SectionKeywords {
    static DEFAULT: OnceLock<SectionKeywords> = OnceLock::new();
    DEFAULT.get_or_init(SectionKeywords::default)
}
