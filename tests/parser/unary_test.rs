//! 単項演算と更新演算のテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("-a * b", "(* (- a) b)" ; "negation binds tighter")]
#[test_case("!a && b", "(&& (! a) b)" ; "logical not")]
#[test_case("~a | b", "(| (~ a) b)" ; "bitwise not")]
#[test_case("typeof a + 1", "(+ (typeof a) 1)" ; "typeof")]
#[test_case("void 0", "(void 0)" ; "void")]
#[test_case("- -a", "(- (- a))" ; "nested")]
#[test_case("+a[0]", "(+ a[0])" ; "subscript binds tighter")]
fn test_prefix_unary(source: &str, expected: &str) {
    assert_eq!(parse_sexp(source), expected);
}

#[test_case("a++", "(a ++)" ; "postfix increment")]
#[test_case("a--", "(a --)" ; "postfix decrement")]
#[test_case("++a", "(++ a)" ; "prefix increment")]
#[test_case("a++ + ++b", "(+ (a ++) (++ b))" ; "mixed")]
#[test_case("--a[i]", "(-- a[i])" ; "member operand")]
fn test_update(source: &str, expected: &str) {
    assert_eq!(parse_sexp(source), expected);
}

#[test]
fn test_update_node_flags() {
    let Expression::Update(postfix) = assert_parse_success("i++") else {
        panic!("Expected update expression");
    };
    assert!(!postfix.prefix);
    assert_eq!(postfix.operator, UpdateOperator::Increment);
    assert_eq!(postfix.span.range(), 0..3);

    let Expression::Unary(unary) = assert_parse_success("-x") else {
        panic!("Expected unary expression");
    };
    assert!(unary.prefix);
    assert_eq!(unary.extra.parenthesized_argument, Some(false));
}

#[test]
fn test_invalid_update_targets() {
    assert_eq!(
        assert_parse_error("1++"),
        ParserError::InvalidAssignmentTarget {
            context: "postfix operation".to_string(),
            pos: 0,
        }
    );
    assert_eq!(
        assert_parse_error("++1"),
        ParserError::InvalidAssignmentTarget {
            context: "prefix operation".to_string(),
            pos: 2,
        }
    );
}

#[test]
fn test_unparenthesized_unary_base_of_exponent() {
    assert_eq!(
        assert_parse_error("-x ** y"),
        ParserError::AmbiguousExponentiation { pos: 1 }
    );
    assert_eq!(
        assert_parse_error("a + !b ** 2"),
        ParserError::AmbiguousExponentiation { pos: 5 }
    );
}

#[test]
fn test_parenthesized_unary_base_of_exponent() {
    assert_eq!(parse_sexp("(-x) ** y"), "(** (- x) y)");
    assert_eq!(parse_sexp("-(x ** y)"), "(- (** x y))");
    // 括弧で始まる添字アクセスは曖昧ではない
    assert_eq!(parse_sexp("-(a)[0] ** 2"), "(** (- a[0]) 2)");
}

#[test]
fn test_parenthesized_operand_alone_is_still_ambiguous() {
    assert_eq!(
        assert_parse_error("-(x) ** y"),
        ParserError::AmbiguousExponentiation { pos: 2 }
    );
}

#[test]
fn test_update_is_not_unary_for_exponent() {
    assert_eq!(parse_sexp("++a ** 2"), "(** (++ a) 2)");
}
