//! オプションと文脈フラグによって挙動が変わる構文のテスト

use super::*;
use pretty_assertions::assert_eq;
use shell_arith::parser::TokenStream;
use shell_arith::{Parser, ParserContext};

fn parse_in(source: &str, context: ParserContext) -> ParseResult<Expression> {
    let cursor = TokenStream::new(source, &Options::default())?;
    Parser::new(cursor, context).parse_to_end()
}

#[test]
fn test_delete_local_in_strict_mode() {
    let strict = Options::default().with_strict(true);
    assert_eq!(
        parse_expression("delete x", &strict),
        Err(ParserError::DeleteLocalInStrict { pos: 0 })
    );
    assert_eq!(
        parse_expression("1 + delete x", &strict),
        Err(ParserError::DeleteLocalInStrict { pos: 4 })
    );
}

#[test]
fn test_delete_member_in_strict_mode() {
    let strict = Options::default().with_strict(true);
    assert!(parse_expression("delete a[0]", &strict).is_ok());
}

#[test]
fn test_delete_local_in_sloppy_mode() {
    assert_eq!(parse_sexp("delete x"), "(delete x)");
}

#[test]
fn test_module_code_is_strict() {
    let module = Options::default().with_module(true);
    assert_eq!(
        parse_expression("delete x", &module),
        Err(ParserError::DeleteLocalInStrict { pos: 0 })
    );
}

#[test]
fn test_yield_in_generator() {
    let context = ParserContext {
        in_generator: true,
        ..ParserContext::default()
    };
    assert_eq!(
        parse_in("yield", context),
        Err(ParserError::Unsupported {
            feature: "yield expression".to_string(),
            pos: 0,
        })
    );
    assert_eq!(
        parse_in("a = yield", context),
        Err(ParserError::Unsupported {
            feature: "yield expression".to_string(),
            pos: 4,
        })
    );
}

#[test]
fn test_yield_outside_generator() {
    assert_eq!(
        assert_parse_error("yield"),
        ParserError::UnexpectedToken {
            expected: "expression".to_string(),
            found: "'yield'".to_string(),
            pos: 0,
        }
    );
}

#[test]
fn test_arrow_function_is_unsupported() {
    for (source, pos) in [("x => 1", 2), ("(a) => 1", 4), ("b = c => 1", 6)] {
        assert_eq!(
            assert_parse_error(source),
            ParserError::Unsupported {
                feature: "arrow function".to_string(),
                pos,
            },
            "{}",
            source
        );
    }
}

#[test]
fn test_arrow_after_operator_is_a_trailing_token() {
    assert_eq!(
        assert_parse_error("1 + x => 2"),
        ParserError::UnexpectedToken {
            expected: "end of input".to_string(),
            found: "'=>'".to_string(),
            pos: 6,
        }
    );
}

#[test]
fn test_line_break_before_postfix() {
    // 文の区切りが無い文法では改行を挟んでも後置演算子になる
    assert_eq!(
        assert_parse_error("a\n++b"),
        ParserError::UnexpectedToken {
            expected: "end of input".to_string(),
            found: "'b'".to_string(),
            pos: 4,
        }
    );

    let context = ParserContext {
        statement_terminators: true,
        ..ParserContext::default()
    };
    let cursor = TokenStream::new("a\n++b", &Options::default()).unwrap();
    let mut parser = Parser::new(cursor, context);
    let expr = parser.parse_expression().unwrap();
    assert_eq!(sexp(&expr), "a");
}
