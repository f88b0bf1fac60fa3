//! ASTのJSON表現のテスト

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_parenthesized_literal_json() {
    let expr = assert_parse_success("-(1)");
    assert_eq!(
        serde_json::to_value(&expr).unwrap(),
        json!({
            "type": "UnaryExpression",
            "start": 0,
            "end": 4,
            "loc": { "start": { "line": 1, "column": 0 }, "end": { "line": 1, "column": 4 } },
            "operator": "-",
            "prefix": true,
            "argument": {
                "type": "NumericLiteral",
                "start": 2,
                "end": 3,
                "loc": { "start": { "line": 1, "column": 2 }, "end": { "line": 1, "column": 3 } },
                "value": 1,
                "extra": { "parenthesized": true, "parenStart": 1, "raw": "1", "rawValue": 1 }
            },
            "extra": { "parenthesizedArgument": false }
        })
    );
}

#[test]
fn test_raw_literal_text_is_kept() {
    let Expression::NumericLiteral(lit) = assert_parse_success("0x1F") else {
        panic!("Expected numeric literal");
    };
    assert_eq!(lit.extra.raw.as_deref(), Some("0x1F"));
    assert_eq!(lit.value, shell_arith::lexer::Number::Int(31));
}

#[test]
fn test_multiline_locations() {
    let expr = assert_parse_success("a +\n  b");
    let span = expr.span();
    assert_eq!(span.range(), 0..7);
    assert_eq!(span.loc.start, LineColumn { line: 1, column: 0 });
    assert_eq!(span.loc.end, LineColumn { line: 2, column: 3 });
}

#[test]
fn test_json_round_trip_keeps_tree() {
    let expr = assert_parse_success("a[i] += b ? 1 : 2");
    let text = serde_json::to_string(&expr).unwrap();
    let back: Expression = serde_json::from_str(&text).unwrap();
    assert_eq!(back, expr);
}
