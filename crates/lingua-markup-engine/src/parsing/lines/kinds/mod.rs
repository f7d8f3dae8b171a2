//! # Line Kinds
//!
//! Line-level constructs that own their syntax markers. The classifier asks
//! these types whether a line matches; it never hardcodes `•` or `→` itself.
//!
//! - **`Header`**: allow-listed section glyphs
//! - **`Bullet`**: `•`, `-`, `*` followed by a space
//! - **`Dialogue`**: `—` (or `-`) followed by a space
//! - **`Separator`**: `→` or a lone `=` splitting a translation pair
//! - **`PronunciationLabel`**: `Pronunciación:` / `Pronunciation:`, any case

pub mod bullet;
pub mod dialogue;
pub mod header;
pub mod pronunciation;
pub mod translation;

pub use bullet::Bullet;
pub use dialogue::Dialogue;
pub use header::Header;
pub use pronunciation::PronunciationLabel;
pub use translation::Separator;

/// Splits `line` into a marker char and payload when the line starts with
/// one of `markers` followed by a space.
fn strip_marker<'a>(line: &'a str, markers: &[char]) -> Option<(char, &'a str)> {
    let mut chars = line.chars();
    let marker = chars.next().filter(|c| markers.contains(c))?;
    let rest = chars.as_str().strip_prefix(' ')?;
    Some((marker, rest.trim()))
}
