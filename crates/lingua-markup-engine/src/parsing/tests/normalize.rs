use crate::parsing::segment::{Segment, Spacing};

/// Renders a stream one segment per line for inline snapshots.
///
/// Format: `Type "text" [bold] [italic] [underline] [nl] [+spacing]`
pub fn normalize(segments: &[Segment]) -> String {
    segments.iter().map(describe).collect::<Vec<_>>().join("\n")
}

fn describe(seg: &Segment) -> String {
    let mut out = format!("{:?} {:?}", seg.content_type, seg.text);
    for (on, flag) in [
        (seg.bold, "bold"),
        (seg.italic, "italic"),
        (seg.underline, "underline"),
        (seg.new_line, "nl"),
    ] {
        if on {
            out.push(' ');
            out.push_str(flag);
        }
    }
    let spacing = match seg.spacing_after {
        Spacing::None => None,
        Spacing::Small => Some("small"),
        Spacing::Medium => Some("medium"),
        Spacing::Large => Some("large"),
    };
    if let Some(spacing) = spacing {
        out.push_str(" +");
        out.push_str(spacing);
    }
    out
}
