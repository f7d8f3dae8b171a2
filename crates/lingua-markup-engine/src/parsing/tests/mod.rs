//! Parser-level tests.
//!
//! Segment streams are compared as inline `insta` snapshots, one segment per
//! line (see `normalize`), and every parse is run through `invariants::check`.

mod normalize;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    LessonParser, SectionCategory, SectionKeywords, SectionOutline, Segment, parse,
};
use crate::style::ContentType;

fn snap(text: &str) -> String {
    let segments = parse(text);
    invariants::check(&segments);
    normalize::normalize(&segments)
}

#[test]
fn translation_pair_with_bold_source() {
    assert_snapshot!(snap("**Hola** → Hello"), @r#"
    Spanish "Hola" bold
    Normal " → "
    Translation "Hello" nl +small
    "#);
}

#[test]
fn vocabulary_header() {
    assert_snapshot!(snap("📚 VOCABULARIO"), @r#"
    Emoji "📚 " bold
    Vocabulary "VOCABULARIO" bold nl +medium
    "#);
}

#[test]
fn bullet_with_inline_bold() {
    assert_snapshot!(snap("• Some **bold** word"), @r#"
    Bullet "  • "
    Normal "Some "
    Spanish "bold" bold
    Normal " word" nl +small
    "#);
}

#[test]
fn pronunciation_with_stressed_syllables() {
    assert_snapshot!(snap("Pronunciación: [KO-mo] es-[TAS]"), @r#"
    Muted "Pronunciación: " italic
    Stressed "KO-mo" bold underline
    Pronunciation " es-"
    Stressed "TAS" bold underline nl +medium
    "#);
}

#[test]
fn unterminated_bold_is_plain_text() {
    assert_snapshot!(snap("**unterminated bold"), @r#"Normal "**unterminated bold" nl +small"#);
}

#[test]
fn tutor_reply() {
    let reply = "\
¡Muy bien! **Gracias** es una palabra muy importante

📚 FORMAS DE DAR LAS GRACIAS

**Gracias** → Thanks
Pronunciación: [GRA-sias]

💡 EJEMPLO EN CONTEXTO
— De nada.
";
    assert_snapshot!(snap(reply), @r#"
    Normal "¡Muy bien! "
    Spanish "Gracias" bold
    Normal " es una palabra muy importante" nl +small
    Normal "" nl +medium
    Emoji "📚 " bold
    Heading "FORMAS DE DAR LAS GRACIAS" bold nl +medium
    Normal "" nl +medium
    Spanish "Gracias" bold
    Normal " → "
    Translation "Thanks" nl +small
    Muted "Pronunciación: " italic
    Stressed "GRA-sias" bold underline nl +medium
    Normal "" nl +medium
    Emoji "💡 " bold
    Example "EJEMPLO EN CONTEXTO" bold nl +small
    Spanish "— " bold
    Normal "De nada." nl +small
    "#);
}

#[test]
fn bracketed_header_keeps_its_section() {
    let segments = parse("📚 [VOCABULARIO]\n**Hola** → Hello");
    invariants::check(&segments);
    assert_snapshot!(normalize::normalize(&segments), @r#"
    Emoji "📚 " bold
    Vocabulary "VOCABULARIO" bold underline nl +medium
    Spanish "Hola" bold
    Normal " → "
    Translation "Hello" nl +small
    "#);

    let outline = SectionOutline::from_segments(&segments);
    assert_eq!(outline.sections[0].category, SectionCategory::Vocabulary);
    assert_eq!(outline.lines_in(SectionCategory::Vocabulary), 1);
}

#[test]
fn variation_selector_stays_out_of_header_text() {
    let segments = parse("📖\u{fe0f} GRAMÁTICA");
    assert_eq!(segments[0].text, "📖 ");
    assert_eq!(segments[1].text, "GRAMÁTICA");
    assert_eq!(segments[1].content_type, ContentType::Grammar);
}

#[test]
fn equals_separator() {
    assert_snapshot!(snap("uno = [U-no]"), @r#"
    Spanish "uno"
    Normal " = "
    Stressed "U-no" bold underline nl +small
    "#);
}

#[test]
fn empty_input_yields_empty_stream() {
    assert!(parse("").is_empty());
}

#[test]
fn trailing_newline_adds_no_blank_marker() {
    assert_eq!(parse("hola\n"), parse("hola"));
    assert_eq!(parse("hola\n").len(), 1);
}

#[test]
fn crlf_lines_match_lf_lines() {
    assert_eq!(
        parse("📖 GRAMÁTICA\r\n\r\n**Tú estás** → You are\r\n"),
        parse("📖 GRAMÁTICA\n\n**Tú estás** → You are\n")
    );
}

#[test]
fn parse_is_referentially_transparent() {
    let text = "🎯 IMPORTANTE\n• **usted** [US-ted]\n";
    assert_eq!(parse(text), parse(text));
}

#[test]
fn custom_keyword_table() {
    let keywords = SectionKeywords::default()
        .with_keywords(SectionCategory::Vocabulary, ["VOCABULAIRE"]);
    let parser = LessonParser::new(&keywords);

    let segments = parser.parse("📚 VOCABULAIRE");
    assert_eq!(segments[1].content_type, ContentType::Vocabulary);

    let segments = parse("📚 VOCABULAIRE");
    assert_eq!(segments[1].content_type, ContentType::Heading);
}

#[rstest]
#[case("**")]
#[case("[")]
#[case("]")]
#[case("*")]
#[case("- ")]
#[case("•")]
#[case("→")]
#[case("=")]
#[case("==")]
#[case(":")]
#[case("Pronunciación:")]
#[case("📚")]
#[case("⚠\u{fe0f}")]
#[case("\n\n\n")]
#[case("** [ ** ] [[ ]] ****")]
#[case("— **[")]
#[case("a → b → c = d")]
#[case("Pronunciation: **[x")]
#[case("\u{fe0f}\u{200d}")]
fn degenerate_inputs_still_parse(#[case] input: &str) {
    let segments = parse(input);
    invariants::check(&segments);
}

/// Pseudo-random strings over the markup alphabet.
#[test]
fn generated_inputs_satisfy_invariants() {
    const ALPHABET: &[&str] = &[
        "*", "**", "[", "]", "→", "=", " ", "\n", "•", "-", "—", "📚", "🎯", "a", "ñ",
        "Pronunciación:", "VOCABULARIO",
    ];

    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..500 {
        let mut input = String::new();
        for _ in 0..24 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            input.push_str(ALPHABET[(seed % ALPHABET.len() as u64) as usize]);
        }
        let segments = parse(&input);
        invariants::check(&segments);
        assert_eq!(
            segments.iter().filter(|s| s.new_line).count(),
            input.lines().count(),
            "one line break per source line for {input:?}"
        );
    }
}

#[test]
fn stressed_segments_are_always_bold_and_underlined() {
    let segments = parse("Pronunciación: [a]\n[b] = [c]\n• [d]");
    let stressed: Vec<&Segment> = segments
        .iter()
        .filter(|s| s.content_type == ContentType::Stressed)
        .collect();
    assert_eq!(stressed.len(), 4);
    assert!(stressed.iter().all(|s| s.bold && s.underline));
}
