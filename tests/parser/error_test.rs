//! エラーケースのパーサーテスト

use super::*;
use pretty_assertions::assert_eq;
use shell_arith::LexerError;
use test_case::test_case;

fn unexpected(expected: &str, found: &str, pos: usize) -> ParserError {
    ParserError::UnexpectedToken {
        expected: expected.to_string(),
        found: found.to_string(),
        pos,
    }
}

#[test_case("", unexpected("expression", "end of input", 0) ; "empty input")]
#[test_case("1 +", unexpected("expression", "end of input", 3) ; "missing right operand")]
#[test_case(")", unexpected("expression", "')'", 0) ; "stray paren")]
#[test_case("(1", unexpected("')'", "end of input", 2) ; "unclosed paren")]
#[test_case("a[1", unexpected("']'", "end of input", 3) ; "unclosed subscript")]
#[test_case("a ? b", unexpected("':'", "end of input", 5) ; "missing colon")]
#[test_case("1 2", unexpected("end of input", "2", 2) ; "trailing number")]
#[test_case("a b", unexpected("end of input", "'b'", 2) ; "trailing name")]
#[test_case("a in b", unexpected("end of input", "'in'", 2) ; "in is not an operator")]
#[test_case("* 2", unexpected("expression", "'*'", 0) ; "binary operator first")]
fn test_unexpected_token(source: &str, expected: ParserError) {
    assert_eq!(assert_parse_error(source), expected);
}

#[test]
fn test_lexical_error_is_wrapped() {
    assert_eq!(
        assert_parse_error("1abc"),
        ParserError::Lexical(LexerError::IdentifierAfterNumber { pos: 1 })
    );
    assert_eq!(
        assert_parse_error("a + #"),
        ParserError::Lexical(LexerError::UnexpectedCharacter { ch: '#', pos: 4 })
    );
}

#[test]
fn test_error_positions() {
    for source in ["1 +", "a ? b", "-x ** y", "1 = 2", "1abc"] {
        let error = assert_parse_error(source);
        assert!(error.pos() <= source.len(), "{}: {:?}", source, error);
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        assert_parse_error("(1").to_string(),
        "unexpected token end of input at offset 2, expected ')'"
    );
    assert_eq!(
        assert_parse_error("1abc").to_string(),
        "identifier directly after number at offset 1"
    );
}

#[test]
fn test_deep_parentheses_are_an_error() {
    let source = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    assert_eq!(
        assert_parse_error(&source),
        ParserError::NestingTooDeep {
            pos: shell_arith::parser::MAX_NESTING_DEPTH,
        }
    );
}

#[test]
fn test_moderate_nesting_parses() {
    let depth = shell_arith::parser::MAX_NESTING_DEPTH / 2;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(assert_parse_success(&source).is_parenthesized());
}

#[test_case(format!("{}x", "- ".repeat(1000)) ; "prefix operators")]
#[test_case(format!("{}2", "2 ** ".repeat(1000)) ; "exponent chain")]
#[test_case(format!("{}1", "a = ".repeat(1000)) ; "assignment chain")]
#[test_case(format!("a{}", "[a".repeat(1000)) ; "subscripts")]
fn test_deep_chains_are_an_error(source: String) {
    assert!(
        matches!(assert_parse_error(&source), ParserError::NestingTooDeep { .. }),
        "{}",
        &source[..20]
    );
}
