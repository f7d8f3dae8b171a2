/// `**bold**` emphasis.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static str = "**";
}
