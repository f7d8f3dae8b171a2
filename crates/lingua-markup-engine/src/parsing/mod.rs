//! # Lesson Markup Parsing
//!
//! Turns lesson bodies, tutor replies and chat messages into an ordered
//! stream of [`Segment`]s.
//!
//! ## Pipeline
//!
//! 1. **Line classification** (`lines`): each line becomes a `LineClass`
//!    holding its payload and marker facts
//! 2. **Inline scanning** (`inline`): payloads are split into bold, stressed
//!    and plain runs
//! 3. **Assembly** (`builder`): `SegmentBuilder` orders the runs, adds marker
//!    segments and attaches line breaks and spacing
//!
//! One linear pass over lines, one linear pass over each line's chars. Every
//! input yields a stream; malformed markup degrades to plain text.

pub mod builder;
pub mod inline;
pub mod keywords;
pub mod lines;
pub mod outline;
pub mod segment;

#[cfg(test)]
mod tests;

pub use builder::SegmentBuilder;
pub use keywords::{SectionCategory, SectionKeywords, default_keywords};
pub use lines::{LineClass, LineClassifier};
pub use outline::{SectionLines, SectionOutline};
pub use segment::{Segment, Spacing};

/// Parses markup with a shared keyword table.
#[derive(Debug, Clone, Copy)]
pub struct LessonParser<'k> {
    classifier: LineClassifier<'k>,
}

impl Default for LessonParser<'static> {
    fn default() -> Self {
        Self::new(default_keywords())
    }
}

impl<'k> LessonParser<'k> {
    pub fn new(keywords: &'k SectionKeywords) -> Self {
        Self {
            classifier: LineClassifier::new(keywords),
        }
    }

    pub fn parse(&self, text: &str) -> Vec<Segment> {
        let mut builder = SegmentBuilder::new();
        for line in text.lines() {
            builder.push(&self.classifier.classify(line));
        }
        builder.finish()
    }
}

/// Parses markup with the built-in keyword table.
pub fn parse(text: &str) -> Vec<Segment> {
    LessonParser::default().parse(text)
}
