//! Value clean-up applied before values are written into markup lines.

use std::borrow::Cow;

use crate::parsing::lines::Separator;

/// ASCII stand-in for `→` inside values.
const ARROW_STAND_IN: &str = "->";
/// Fullwidth equals sign, which the classifier does not treat as a separator.
const EQUALS_STAND_IN: &str = "\u{ff1d}";

/// Trims every physical line of `value` and joins the non-empty ones with a
/// single space, so a value never spills onto a second markup line.
pub fn single_line(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces `→` so the value cannot introduce a translation separator.
pub fn defuse_arrow(value: &str) -> Cow<'_, str> {
    let arrow = Separator::Arrow.as_char();
    if value.contains(arrow) {
        log::debug!("defusing {arrow:?} in {value:?}");
        Cow::Owned(value.replace(arrow, ARROW_STAND_IN))
    } else {
        Cow::Borrowed(value)
    }
}

/// Replaces both translation separators.
pub fn defuse_separators(value: &str) -> Cow<'_, str> {
    let equals = Separator::Equals.as_char();
    match defuse_arrow(value) {
        value if value.contains(equals) => {
            log::debug!("defusing {equals:?} in {value:?}");
            Cow::Owned(value.replace(equals, EQUALS_STAND_IN))
        }
        value => value,
    }
}
