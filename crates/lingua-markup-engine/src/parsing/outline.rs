use serde::Serialize;

use super::{keywords::SectionCategory, segment::Segment};
use crate::style::ContentType;

/// Content lines per section of a parsed stream.
///
/// Blank lines and headers are not counted. Lines before the first header
/// count as preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionOutline {
    pub preamble: usize,
    pub sections: Vec<SectionLines>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionLines {
    pub category: SectionCategory,
    pub title: String,
    pub lines: usize,
}

impl SectionOutline {
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut outline = Self::default();

        for line in segments.split_inclusive(|s| s.new_line) {
            let Some(first) = line.first() else {
                continue;
            };
            if line.len() == 1 && first.is_spacer() {
                continue;
            }
            if first.content_type == ContentType::Emoji {
                let rest = &line[1..];
                let category = rest
                    .iter()
                    .find_map(|s| SectionCategory::from_content_type(s.content_type))
                    .unwrap_or(SectionCategory::Heading);
                outline.sections.push(SectionLines {
                    category,
                    title: rest.iter().map(|s| s.text.as_str()).collect(),
                    lines: 0,
                });
                continue;
            }
            match outline.sections.last_mut() {
                Some(section) => section.lines += 1,
                None => outline.preamble += 1,
            }
        }

        outline
    }

    /// Total content lines across every section of `category`.
    pub fn lines_in(&self, category: SectionCategory) -> usize {
        self.sections
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.lines)
            .sum()
    }
}
