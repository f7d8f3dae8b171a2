/// Separator between the two halves of a translation pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Arrow,
    Equals,
}

impl Separator {
    pub const fn as_char(self) -> char {
        match self {
            Separator::Arrow => '→',
            Separator::Equals => '=',
        }
    }

    /// The separator as rendered between the halves.
    pub const fn padded(self) -> &'static str {
        match self {
            Separator::Arrow => " → ",
            Separator::Equals => " = ",
        }
    }

    /// Finds the separator of a translation line.
    ///
    /// `→` wins over `=`. An `=` only counts when the line has no `==`.
    pub fn find(line: &str) -> Option<(Separator, usize)> {
        if let Some(idx) = line.find(Separator::Arrow.as_char()) {
            return Some((Separator::Arrow, idx));
        }
        if line.contains("==") {
            return None;
        }
        line.find(Separator::Equals.as_char())
            .map(|idx| (Separator::Equals, idx))
    }

    /// Splits a line on its first separator into trimmed halves.
    pub fn split(line: &str) -> Option<(Separator, &str, &str)> {
        let (sep, idx) = Self::find(line)?;
        let source = &line[..idx];
        let target = &line[idx + sep.as_char().len_utf8()..];
        Some((sep, source.trim(), target.trim()))
    }
}
