//! Flattening a segment stream back to readable text.

use crate::parsing::Segment;

/// Concatenates segment text, one output line per logical line.
///
/// Spacing markers become empty lines. Inline markup is already gone from the
/// stream, so the result reads as the lesson does on screen without styling.
pub fn render_plain(segments: &[Segment]) -> String {
    let mut out = String::new();
    for line in segments.split_inclusive(|s| s.new_line) {
        for seg in line {
            out.push_str(&seg.text);
        }
        out.push('\n');
    }
    out
}
