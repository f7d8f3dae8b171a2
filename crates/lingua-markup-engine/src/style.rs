//! # Style Resolver
//!
//! Maps every [`ContentType`] to an immutable [`StyleRecord`].
//!
//! The mapping is an exhaustive `match`, so adding a content type without a
//! style entry is a compile error rather than a silent fallback. Records hold
//! semantic keys only ([`ColorKey`], [`BackgroundKey`], [`FontScale`]); turning
//! those into concrete colours is the renderer's job.

use serde::{Deserialize, Serialize};

/// The semantic role of a rendered segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Normal,
    Spanish,
    Translation,
    Pronunciation,
    Stressed,
    Vocabulary,
    Grammar,
    Cultural,
    Example,
    Important,
    Warning,
    Heading,
    Subheading,
    Bullet,
    Emoji,
    /// Secondary text such as the "Pronunciación:" label.
    Muted,
}

impl ContentType {
    /// Every content type, in declaration order.
    pub const ALL: [ContentType; 16] = [
        ContentType::Normal,
        ContentType::Spanish,
        ContentType::Translation,
        ContentType::Pronunciation,
        ContentType::Stressed,
        ContentType::Vocabulary,
        ContentType::Grammar,
        ContentType::Cultural,
        ContentType::Example,
        ContentType::Important,
        ContentType::Warning,
        ContentType::Heading,
        ContentType::Subheading,
        ContentType::Bullet,
        ContentType::Emoji,
        ContentType::Muted,
    ];

    /// Returns the style record for this content type.
    pub const fn style(self) -> StyleRecord {
        use BackgroundKey as Bg;
        use ColorKey as C;
        use FontScale as F;

        match self {
            ContentType::Normal => StyleRecord::new(C::Text, false, false, Bg::None, F::Normal),
            ContentType::Spanish => {
                StyleRecord::new(C::Spanish, false, false, Bg::Spanish, F::Normal)
            }
            ContentType::Translation => {
                StyleRecord::new(C::Translation, false, false, Bg::None, F::Normal)
            }
            ContentType::Pronunciation => {
                StyleRecord::new(C::Pronunciation, false, false, Bg::None, F::Normal)
            }
            ContentType::Stressed => {
                StyleRecord::new(C::Stressed, true, false, Bg::Stressed, F::Normal)
            }
            ContentType::Vocabulary => {
                StyleRecord::new(C::Vocabulary, true, false, Bg::None, F::Normal)
            }
            ContentType::Grammar => StyleRecord::new(C::Grammar, true, false, Bg::None, F::Normal),
            ContentType::Cultural => {
                StyleRecord::new(C::Cultural, true, false, Bg::None, F::Normal)
            }
            ContentType::Example => {
                StyleRecord::new(C::Example, true, false, Bg::Example, F::Normal)
            }
            ContentType::Important => {
                StyleRecord::new(C::Important, true, false, Bg::Important, F::Normal)
            }
            ContentType::Warning => StyleRecord::new(C::Warning, true, false, Bg::None, F::Normal),
            ContentType::Heading => StyleRecord::new(C::Spanish, true, false, Bg::None, F::Larger),
            ContentType::Subheading => {
                StyleRecord::new(C::Highlight, true, false, Bg::None, F::Large)
            }
            ContentType::Bullet => StyleRecord::new(C::Text, false, false, Bg::None, F::Normal),
            ContentType::Emoji => StyleRecord::new(C::Highlight, true, false, Bg::None, F::Normal),
            ContentType::Muted => StyleRecord::new(C::Muted, false, true, Bg::None, F::Normal),
        }
    }

    /// The type `**bold**` runs take inside a context of this type.
    ///
    /// Bold words in ordinary prose are Spanish terms; everywhere else the
    /// emphasis keeps the surrounding type.
    pub const fn emphasized(self) -> ContentType {
        match self {
            ContentType::Normal => ContentType::Spanish,
            other => other,
        }
    }
}

/// Immutable presentation hints for one content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    pub color_key: ColorKey,
    pub default_bold: bool,
    pub default_italic: bool,
    pub background_key: BackgroundKey,
    pub font_scale: FontScale,
}

impl StyleRecord {
    const fn new(
        color_key: ColorKey,
        default_bold: bool,
        default_italic: bool,
        background_key: BackgroundKey,
        font_scale: FontScale,
    ) -> Self {
        Self {
            color_key,
            default_bold,
            default_italic,
            background_key,
            font_scale,
        }
    }
}

/// Semantic foreground colour slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Text,
    Muted,
    Highlight,
    Spanish,
    Translation,
    Pronunciation,
    Stressed,
    Vocabulary,
    Grammar,
    Cultural,
    Example,
    Important,
    Warning,
}

/// Semantic background slot. `None` means transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKey {
    None,
    Spanish,
    Stressed,
    Important,
    Example,
}

/// Relative text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontScale {
    Normal,
    Large,
    Larger,
}

impl FontScale {
    /// Multiplier relative to body text.
    pub const fn factor(self) -> f32 {
        match self {
            FontScale::Normal => 1.0,
            FontScale::Large => 1.1,
            FontScale::Larger => 1.2,
        }
    }
}
