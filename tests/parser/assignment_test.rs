//! 代入式と代入先の検証のテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(parse_sexp("a = b = c"), "(= a (= b c))");
}

#[test_case("a += b * 2", "(+= a (* b 2))" ; "add assign")]
#[test_case("a **= 2", "(**= a 2)" ; "exponent assign")]
#[test_case("a >>>= 1", "(>>>= a 1)" ; "unsigned shift assign")]
#[test_case("a[i] = 1", "(= a[i] 1)" ; "member target")]
#[test_case("a = b ? c : d", "(= a (? b c d))" ; "conditional value")]
fn test_assignment(source: &str, expected: &str) {
    assert_eq!(parse_sexp(source), expected);
}

#[test]
fn test_assignment_node() {
    let expr = assert_parse_success("x |= 4");
    let Expression::Assignment(assign) = expr else {
        panic!("Expected assignment expression");
    };
    assert_eq!(assign.operator, AssignmentOperator::BitOrAssign);
    assert_eq!(assign.span.range(), 0..6);
}

#[test_case("1 = 2", 0 ; "literal")]
#[test_case("a + b = c", 0 ; "binary")]
#[test_case("x = (1) = 2", 5 ; "parenthesized literal")]
#[test_case("-a += 1", 0 ; "unary with compound operator")]
fn test_invalid_assignment_target(source: &str, pos: usize) {
    assert_eq!(
        assert_parse_error(source),
        ParserError::InvalidAssignmentTarget {
            context: "assignment expression".to_string(),
            pos,
        }
    );
}
