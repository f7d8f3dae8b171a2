use super::{
    inline::{scan_inline, scan_pronunciation},
    lines::{
        LineClass,
        kinds::{Bullet, Dialogue},
    },
    segment::{Segment, Spacing},
};
use crate::style::ContentType;

/// Turns classified lines into the segment stream, one line at a time.
#[derive(Debug, Default)]
pub struct SegmentBuilder {
    out: Vec<Segment>,
}

impl SegmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the segments for one classified line.
    pub fn push(&mut self, class: &LineClass<'_>) {
        let start = self.out.len();

        match *class {
            LineClass::Blank => {
                self.out.push(Segment::spacer(Spacing::Medium));
                return;
            }
            LineClass::Header {
                glyph,
                category,
                text,
                ..
            } => {
                self.out
                    .push(Segment::new(format!("{glyph} "), ContentType::Emoji).bold());
                // Every run keeps the category type so the section survives
                // in the stream; stressed runs stay underlined.
                let ty = category.content_type();
                self.out.extend(scan_inline(text, ty).into_iter().map(|seg| Segment {
                    content_type: ty,
                    bold: true,
                    ..seg
                }));
            }
            LineClass::Bullet { text, .. } => {
                self.out
                    .push(Segment::new(Bullet::RENDERED, ContentType::Bullet));
                self.out.extend(scan_inline(text, ContentType::Normal));
            }
            LineClass::Dialogue { text, .. } => {
                self.out
                    .push(Segment::new(Dialogue::RENDERED, ContentType::Spanish).bold());
                self.out.extend(scan_inline(text, ContentType::Normal));
            }
            LineClass::TranslationPair {
                separator,
                source,
                target,
            } => {
                self.out.extend(scan_inline(source, ContentType::Spanish));
                self.out
                    .push(Segment::new(separator.padded(), ContentType::Normal));
                self.out.extend(scan_inline(target, ContentType::Translation));
            }
            LineClass::Pronunciation { label, guide } => {
                self.out
                    .push(Segment::new(format!("{label}: "), ContentType::Muted));
                self.out.extend(scan_pronunciation(guide));
            }
            LineClass::Plain { text } => {
                self.out.extend(scan_inline(text, ContentType::Normal));
            }
        }

        self.end_line(start, class.spacing_after());
    }

    /// Puts the line break on the line's last segment, or emits a spacer
    /// when the line produced no text at all.
    fn end_line(&mut self, start: usize, spacing: Spacing) {
        if self.out.len() > start
            && let Some(last) = self.out.last_mut()
        {
            last.new_line = true;
            last.spacing_after = spacing;
        } else {
            log::debug!("line produced no text, emitting spacer");
            self.out.push(Segment::spacer(spacing));
        }
    }

    pub fn finish(self) -> Vec<Segment> {
        self.out
    }
}
