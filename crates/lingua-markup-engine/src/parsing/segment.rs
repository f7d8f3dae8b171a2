use serde::{Deserialize, Serialize};

use crate::style::ContentType;

/// Vertical gap requested after a segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    #[default]
    None,
    Small,
    Medium,
    Large,
}

/// One styled, typed unit of output text with its layout directives.
///
/// Only the last segment of a logical line carries `new_line`. Empty `text`
/// is reserved for spacing markers (see [`Segment::spacer`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    pub content_type: ContentType,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub new_line: bool,
    pub spacing_after: Spacing,
}

impl Segment {
    /// Creates a segment whose emphasis flags come from the type's style record.
    pub fn new(text: impl Into<String>, content_type: ContentType) -> Self {
        let style = content_type.style();
        Self {
            text: text.into(),
            content_type,
            bold: style.default_bold,
            italic: style.default_italic,
            underline: false,
            new_line: false,
            spacing_after: Spacing::None,
        }
    }

    /// A text-less line break carrying only a spacing directive.
    pub fn spacer(spacing: Spacing) -> Self {
        Self {
            new_line: true,
            spacing_after: spacing,
            ..Self::new(String::new(), ContentType::Normal)
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// True for spacing-only markers.
    pub fn is_spacer(&self) -> bool {
        self.text.is_empty()
    }
}
