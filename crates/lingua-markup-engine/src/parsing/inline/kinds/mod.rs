//! Inline delimiters. The scanner uses these constants and never spells
//! `**` or `[` itself.

pub mod emphasis;
pub mod stress;

pub use emphasis::Emphasis;
pub use stress::Stress;
