//! Integration tests for the tokenizer

use edict_parser::TokenCursor;

fn tokens(input: &str) -> Vec<String> {
    TokenCursor::new(input).map(|t| t.into_owned()).collect()
}

#[test]
fn splits_on_any_whitespace() {
    assert_eq!(tokens("  give\tzz   10\nsilver "), ["give", "zz", "10", "silver"]);
}

#[test]
fn quotes_group_words() {
    assert_eq!(tokens(r#"name unit "Dark Riders""#), ["name", "unit", "Dark Riders"]);
    assert_eq!(tokens("name unit 'Hill Folk' now"), ["name", "unit", "Hill Folk", "now"]);
}

#[test]
fn escapes() {
    assert_eq!(tokens(r#"say "he said \"hi\"""#), ["say", r#"he said "hi""#]);
    assert_eq!(tokens(r"a\ b c"), ["a b", "c"]);
}

#[test]
fn unterminated_quote_runs_to_end() {
    assert_eq!(tokens(r#"name "Open ended"#), ["name", "Open ended"]);
}

#[test]
fn rest_follows_position() {
    let mut cursor = TokenCursor::new("give zz 10 silver");
    cursor.next_token();
    assert_eq!(cursor.rest().trim_start(), "zz 10 silver");
    assert_eq!(cursor.peek_token().as_deref(), Some("zz"));
    cursor.reset();
    assert_eq!(cursor.position(), 0);
}

#[test]
fn resume_snaps_to_char_boundary() {
    let input = "zähle eins";
    let mut cursor = TokenCursor::resume(input, 2);
    assert!(input.is_char_boundary(cursor.position()));
    assert!(cursor.next_token().is_some());
}
