/// `[stressed]` syllable marking.
pub struct Stress;

impl Stress {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
}
