//! 演算子の優先順位と結合性のテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("2 + 3 * 4", "(+ 2 (* 3 4))" ; "multiplication binds tighter")]
#[test_case("2 * 3 + 4", "(+ (* 2 3) 4)" ; "multiplication on the left")]
#[test_case("8 / 2 / 2", "(/ (/ 8 2) 2)" ; "division is left associative")]
#[test_case("7 - 8 % 3", "(- 7 (% 8 3))" ; "modulo")]
#[test_case("(2 + 3) * 4", "(* (+ 2 3) 4)" ; "parentheses")]
#[test_case("a << b + c", "(<< a (+ b c))" ; "shift below additive")]
#[test_case("a < b << c", "(< a (<< b c))" ; "relational below shift")]
#[test_case("a == b < c", "(== a (< b c))" ; "equality below relational")]
#[test_case("a & b == c", "(& a (== b c))" ; "bitwise and below equality")]
#[test_case("a | b ^ c & d", "(| a (^ b (& c d)))" ; "bitwise ladder")]
#[test_case("a || b && c", "(|| a (&& b c))" ; "and binds tighter than or")]
#[test_case("a && b | c", "(&& a (| b c))" ; "bitwise or above logical and")]
fn test_binary_precedence(source: &str, expected: &str) {
    assert_eq!(parse_sexp(source), expected);
}

#[test]
fn test_exponent_is_right_associative() {
    assert_eq!(parse_sexp("2 ** 3 ** 2"), "(** 2 (** 3 2))");
}

#[test]
fn test_exponent_shares_multiplicative_level() {
    // `**` は `*` と同じ優先順位で、右辺だけが右結合になる
    assert_eq!(parse_sexp("2 ** 3 * 4"), "(** 2 (* 3 4))");
    assert_eq!(parse_sexp("2 * 3 ** 4"), "(** (* 2 3) 4)");
}

#[test]
fn test_logical_and_binary_nodes() {
    let expr = assert_parse_success("a || b + c");
    let Expression::Logical(logical) = expr else {
        panic!("Expected logical expression");
    };
    assert_eq!(logical.operator, LogicalOperator::Or);
    assert!(matches!(*logical.right, Expression::Binary(_)));
}

#[test]
fn test_sequence() {
    let expr = assert_parse_success("42, 43, 44");
    let Expression::Sequence(seq) = expr else {
        panic!("Expected sequence expression");
    };
    assert_eq!(seq.expressions.len(), 3);
    assert_eq!(seq.span.range(), 0..10);
}

#[test]
fn test_sequence_binds_loosest() {
    assert_eq!(parse_sexp("a = 1, b = 2"), "(, (= a 1) (= b 2))");
}

#[test_case("a ? b : c", "(? a b c)" ; "simple")]
#[test_case("a ? b : c ? d : e", "(? a b (? c d e))" ; "nested in alternate")]
#[test_case("a ? b = 1 : c", "(? a (= b 1) c)" ; "assignment in consequent")]
#[test_case("a || b ? c : d", "(? (|| a b) c d)" ; "test is a full binary chain")]
fn test_conditional(source: &str, expected: &str) {
    assert_eq!(parse_sexp(source), expected);
}

#[test]
fn test_subscripts() {
    assert_eq!(parse_sexp("a[i][j + 1]"), "a[i][(+ j 1)]");

    let expr = assert_parse_success("a[0]");
    let Expression::Member(member) = expr else {
        panic!("Expected member expression");
    };
    assert!(member.computed);
    assert_eq!(member.span.range(), 0..4);
}

#[test]
fn test_parenthesized_node_is_marked() {
    let expr = assert_parse_success("(a + b)");
    assert!(expr.is_parenthesized());
    assert_eq!(expr.extra().paren_start, Some(0));
    // 括弧はスパンに含まれない
    assert_eq!(expr.span().range(), 1..6);
}
