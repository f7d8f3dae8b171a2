use super::{
    cursor::Cursor,
    kinds::{Emphasis, Stress},
};
use crate::{parsing::segment::Segment, style::ContentType};

/// Scans a payload for `**bold**` and `[stressed]` spans.
///
/// Unmarked runs take `default`; bold runs take `default.emphasized()` and
/// are forced bold; stressed runs are always [`ContentType::Stressed`], bold
/// and underlined. No segment carries layout directives.
pub fn scan_inline(payload: &str, default: ContentType) -> Vec<Segment> {
    Scanner::new(default, true).run(payload)
}

/// Restricted scan for pronunciation guides: only `[stressed]` spans are
/// recognised and `**` is ordinary text.
pub fn scan_pronunciation(guide: &str) -> Vec<Segment> {
    Scanner::new(ContentType::Pronunciation, false).run(guide)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Plain,
    Bold,
    Stressed,
}

struct Scanner {
    default: ContentType,
    emphasis: bool,
    state: State,
    /// Unmarked text not yet emitted. Held back while a span is open so an
    /// unterminated span can fold back into it.
    plain: String,
    /// Text captured since the current span opened.
    span: String,
    out: Vec<Segment>,
}

impl Scanner {
    fn new(default: ContentType, emphasis: bool) -> Self {
        Self {
            default,
            emphasis,
            state: State::Plain,
            plain: String::new(),
            span: String::new(),
            out: Vec::new(),
        }
    }

    fn run(mut self, s: &str) -> Vec<Segment> {
        let mut cur = Cursor::new(s);

        while !cur.eof() {
            match self.state {
                State::Plain => {
                    if self.emphasis && cur.eat(Emphasis::DELIM) {
                        self.state = State::Bold;
                    } else if cur.peek() == Some(Stress::OPEN) {
                        cur.bump();
                        self.state = State::Stressed;
                    } else if let Some(c) = cur.bump() {
                        self.plain.push(c);
                    }
                }
                State::Bold => {
                    if cur.eat(Emphasis::DELIM) {
                        self.close();
                    } else if let Some(c) = cur.bump() {
                        self.span.push(c);
                    }
                }
                State::Stressed => {
                    if cur.peek() == Some(Stress::CLOSE) {
                        cur.bump();
                        self.close();
                    } else if let Some(c) = cur.bump() {
                        self.span.push(c);
                    }
                }
            }
        }

        self.finish()
    }

    /// Emits the span that just closed, preceded by any pending plain text.
    fn close(&mut self) {
        let closed = std::mem::replace(&mut self.state, State::Plain);
        let text = std::mem::take(&mut self.span);
        if text.is_empty() {
            log::trace!("dropping empty {closed:?} span");
            return;
        }

        self.flush_plain();
        let seg = match closed {
            State::Bold => Segment::new(text, self.default.emphasized()).bold(),
            State::Stressed => Segment::new(text, ContentType::Stressed)
                .bold()
                .underline(),
            State::Plain => Segment::new(text, self.default),
        };
        self.out.push(seg);
    }

    fn flush_plain(&mut self) {
        if !self.plain.is_empty() {
            let text = std::mem::take(&mut self.plain);
            self.out.push(Segment::new(text, self.default));
        }
    }

    fn finish(mut self) -> Vec<Segment> {
        match self.state {
            State::Plain => {}
            State::Bold => {
                log::debug!("unterminated {:?} kept as text", Emphasis::DELIM);
                self.plain.push_str(Emphasis::DELIM);
                self.plain.push_str(&self.span);
            }
            State::Stressed => {
                log::debug!("unterminated {:?} kept as text", Stress::OPEN);
                self.plain.push(Stress::OPEN);
                self.plain.push_str(&self.span);
            }
        }
        self.flush_plain();
        self.out
    }
}
