/// The label that opens a pronunciation guide line.
pub struct PronunciationLabel;

impl PronunciationLabel {
    /// Accepted labels, lowercase. Matching ignores case.
    pub const LABELS: [&'static str; 2] = ["pronunciación:", "pronunciation:"];

    /// Returns the label as written (without the colon) and the guide after it.
    pub fn split(line: &str) -> Option<(&str, &str)> {
        Self::LABELS.iter().find_map(|label| {
            let end = prefix_len_ignore_case(line, label)?;
            let written = line[..end].strip_suffix(':')?;
            Some((written.trim(), line[end..].trim()))
        })
    }
}

/// Byte length of the prefix of `s` matching `prefix` case-insensitively.
fn prefix_len_ignore_case(s: &str, prefix: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let mut end = 0;
    for expected in prefix.chars() {
        let (idx, c) = chars.next()?;
        if !c.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end = idx + c.len_utf8();
    }
    Some(end)
}
