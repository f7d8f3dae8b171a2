//! Vocabulary extraction from free tutor text.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::parsing::lines::kinds::PronunciationLabel;

/// A `**term** → translation` pair found in running text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedTerm {
    pub term: String,
    pub translation: String,
    /// Guide from the next non-blank line, when that line is a pronunciation line.
    pub pronunciation: Option<String>,
}

fn term_regex() -> &'static Regex {
    static TERM_REGEX: OnceLock<Regex> = OnceLock::new();
    TERM_REGEX.get_or_init(|| {
        Regex::new(r"\*\*([^*]+)\*\*\s*→\s*(.+)").expect("Invalid vocabulary regex")
    })
}

/// Collects every bolded term with an arrow translation, in text order.
///
/// At most one term per line. Lines that do not match are skipped.
pub fn extract_vocabulary(text: &str) -> Vec<ExtractedTerm> {
    let lines: Vec<&str> = text.lines().collect();
    let mut terms = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(caps) = term_regex().captures(line) else {
            continue;
        };
        let term = caps[1].trim();
        let translation = caps[2].trim();
        if term.is_empty() || translation.is_empty() {
            continue;
        }

        let pronunciation = lines[idx + 1..]
            .iter()
            .map(|next| next.trim())
            .find(|next| !next.is_empty())
            .and_then(PronunciationLabel::split)
            .map(|(_, guide)| guide)
            .filter(|guide| !guide.is_empty())
            .map(str::to_owned);

        terms.push(ExtractedTerm {
            term: term.to_owned(),
            translation: translation.to_owned(),
            pronunciation,
        });
    }

    log::debug!("extracted {} vocabulary terms", terms.len());
    terms
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn finds_terms_with_following_pronunciation() {
        let text = "\
¡Muy bien!

**Gracias** → Thanks

Pronunciación: [GRA-sias]
**De nada** → You're welcome
Eso es todo.";

        assert_eq!(
            extract_vocabulary(text),
            vec![
                ExtractedTerm {
                    term: "Gracias".into(),
                    translation: "Thanks".into(),
                    pronunciation: Some("[GRA-sias]".into()),
                },
                ExtractedTerm {
                    term: "De nada".into(),
                    translation: "You're welcome".into(),
                    pronunciation: None,
                },
            ]
        );
    }

    #[test]
    fn term_may_follow_other_text() {
        let terms = extract_vocabulary("• Di **por favor** → please, siempre");
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].term, "por favor");
        assert_eq!(terms[0].translation, "please, siempre");
    }

    #[test]
    fn nothing_to_extract() {
        assert!(extract_vocabulary("").is_empty());
        assert!(extract_vocabulary("**Hola** = Hello\nHola → Hello").is_empty());
        assert!(extract_vocabulary("**  ** → x").is_empty());
    }
}
