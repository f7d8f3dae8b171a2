//! Lesson markup engine.
//!
//! - [`parsing`]: markup text to a typed, styled [`Segment`] stream
//! - [`assemble`]: structured lesson data to markup text
//! - [`style`]: the content type to style record table
//! - [`extract`] and [`render`]: helpers over text and streams

pub mod assemble;
pub mod extract;
pub mod parsing;
pub mod render;
pub mod style;

pub use assemble::{LessonData, TemplateAssembler, VocabularyEntry, assemble};
pub use extract::{ExtractedTerm, extract_vocabulary};
pub use parsing::{
    LessonParser, SectionCategory, SectionKeywords, SectionOutline, Segment, Spacing, parse,
};
pub use render::render_plain;
pub use style::{BackgroundKey, ColorKey, ContentType, FontScale, StyleRecord};
