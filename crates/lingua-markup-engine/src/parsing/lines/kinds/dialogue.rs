/// Dialogue line marker.
///
/// `-` is listed for completeness but bullets are classified first, so a
/// `- ` line is always a bullet.
pub struct Dialogue;

impl Dialogue {
    pub const MARKERS: [char; 2] = ['—', '-'];

    pub const RENDERED: &'static str = "— ";

    pub fn strip(line: &str) -> Option<(char, &str)> {
        super::strip_marker(line, &Self::MARKERS)
    }
}
