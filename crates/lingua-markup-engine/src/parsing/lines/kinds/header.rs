/// Section header marker: one allow-listed glyph at the start of a line.
pub struct Header;

impl Header {
    /// Recognised section glyphs. `⚠️` precedes the bare `⚠` so the
    /// variation selector is consumed with it.
    pub const GLYPHS: &'static [&'static str] = &[
        "📚", "🎯", "💡", "🌍", "📖", "⚠\u{fe0f}", "⚠", "✨", "🔥", "👑",
    ];

    /// Emoji presentation selector that may trail any glyph.
    const VARIATION_SELECTOR: char = '\u{fe0f}';

    /// Returns the glyph and the header text (glyph, an optional variation
    /// selector and the following space removed).
    pub fn strip_glyph(line: &str) -> Option<(&'static str, &str)> {
        Self::GLYPHS.iter().find_map(|glyph| {
            let rest = line.strip_prefix(*glyph)?;
            let rest = rest.strip_prefix(Self::VARIATION_SELECTOR).unwrap_or(rest);
            Some((*glyph, rest.strip_prefix(' ').unwrap_or(rest).trim()))
        })
    }
}
