/// Bullet list marker.
pub struct Bullet;

impl Bullet {
    pub const MARKERS: [char; 3] = ['•', '-', '*'];

    /// The marker text emitted in place of whichever glyph the author used.
    pub const RENDERED: &'static str = "  • ";

    pub fn strip(line: &str) -> Option<(char, &str)> {
        super::strip_marker(line, &Self::MARKERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_markers_need_a_space() {
        assert_eq!(Bullet::strip("• uno"), Some(('•', "uno")));
        assert_eq!(Bullet::strip("- dos"), Some(('-', "dos")));
        assert_eq!(Bullet::strip("* tres"), Some(('*', "tres")));
        assert_eq!(Bullet::strip("•uno"), None);
        assert_eq!(Bullet::strip("-5 grados"), None);
    }

    #[test]
    fn bold_opener_is_not_a_bullet() {
        assert_eq!(Bullet::strip("**Hola** amigo"), None);
        assert_eq!(Bullet::strip("* **Hola**"), Some(('*', "**Hola**")));
    }
}
