//! Concrete terminal colours for the semantic style keys.
//!
//! `lesson` follows the lesson formatter: every content type has its own hue
//! and the highlighted types get a tint blended over the dark page colour.
//! `arena` follows the chat arena, which shares hues between types and draws
//! no backgrounds.

use lingua_markup_config::Palette;
use lingua_markup_engine::{BackgroundKey, ColorKey, Segment};
use ratatui::style::{Color, Modifier, Style};

const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

pub fn foreground(palette: Palette, key: ColorKey) -> Color {
    match palette {
        Palette::Lesson => match key {
            ColorKey::Text => hex(0xE5E7EB),
            ColorKey::Muted => hex(0x9CA3AF),
            ColorKey::Highlight => hex(0xFFFFFF),
            ColorKey::Spanish => hex(0xFBBF24),
            ColorKey::Translation => hex(0x60A5FA),
            ColorKey::Pronunciation => hex(0xF97316),
            ColorKey::Stressed => hex(0xEF4444),
            ColorKey::Vocabulary => hex(0x34D399),
            ColorKey::Grammar => hex(0xA78BFA),
            ColorKey::Cultural => hex(0xF472B6),
            ColorKey::Example => hex(0x22D3EE),
            ColorKey::Important => hex(0xFCD34D),
            ColorKey::Warning => hex(0xF87171),
        },
        Palette::Arena => match key {
            ColorKey::Text | ColorKey::Pronunciation => hex(0xE5E7EB),
            ColorKey::Muted => hex(0x9CA3AF),
            ColorKey::Highlight => hex(0xFFFFFF),
            ColorKey::Spanish | ColorKey::Vocabulary => hex(0xFBBF24),
            ColorKey::Translation => hex(0x60A5FA),
            ColorKey::Stressed => hex(0xF97316),
            ColorKey::Grammar => hex(0xA78BFA),
            ColorKey::Cultural => hex(0xF472B6),
            ColorKey::Example => hex(0x34D399),
            ColorKey::Important | ColorKey::Warning => hex(0xEF4444),
        },
    }
}

/// Background tint, already blended over the `#111827` page colour.
pub fn background(palette: Palette, key: BackgroundKey) -> Option<Color> {
    match (palette, key) {
        (Palette::Arena, _) | (Palette::Lesson, BackgroundKey::None) => None,
        (Palette::Lesson, BackgroundKey::Spanish) => Some(Color::Rgb(52, 49, 39)),
        (Palette::Lesson, BackgroundKey::Stressed) => Some(Color::Rgb(63, 42, 36)),
        (Palette::Lesson, BackgroundKey::Important) => Some(Color::Rgb(40, 43, 43)),
        (Palette::Lesson, BackgroundKey::Example) => Some(Color::Rgb(19, 43, 59)),
    }
}

/// Full terminal style for one segment.
pub fn segment_style(palette: Palette, segment: &Segment) -> Style {
    let record = segment.content_type.style();
    let mut style = Style::default().fg(foreground(palette, record.color_key));
    if let Some(bg) = background(palette, record.background_key) {
        style = style.bg(bg);
    }
    for (on, modifier) in [
        (segment.bold, Modifier::BOLD),
        (segment.italic, Modifier::ITALIC),
        (segment.underline, Modifier::UNDERLINED),
    ] {
        if on {
            style = style.add_modifier(modifier);
        }
    }
    style
}
