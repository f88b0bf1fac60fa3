//! パーサーテストの共通モジュール
//!
//! パーサーテストで使用する共通のヘルパー関数を定義する。

use shell_arith::ast::*;
use shell_arith::{parse_expression, Options, ParseResult, ParserError};

/// ソースコードを解析してASTを取得するヘルパー関数
pub fn parse_source(source: &str) -> ParseResult<Expression> {
    parse_expression(source, &Options::default())
}

/// 解析に成功することを確認するヘルパー関数
pub fn assert_parse_success(source: &str) -> Expression {
    parse_source(source).expect("Parsing should succeed")
}

/// 解析に失敗することを確認し、エラーを返すヘルパー関数
pub fn assert_parse_error(source: &str) -> ParserError {
    parse_source(source).expect_err("Parsing should fail")
}

/// 式の木構造をS式の文字列に変換する
///
/// 括弧は木の形だけを表し、ソース上の括弧は反映しない。
pub fn sexp(expr: &Expression) -> String {
    match expr {
        Expression::NumericLiteral(lit) => lit.value.to_string(),
        Expression::Identifier(ident) => ident.name.clone(),
        Expression::Member(member) => format!("{}[{}]", sexp(&member.object), sexp(&member.property)),
        Expression::Sequence(seq) => {
            let items: Vec<_> = seq.expressions.iter().map(sexp).collect();
            format!("(, {})", items.join(" "))
        }
        Expression::Assignment(assign) => {
            format!("({} {} {})", assign.operator, sexp(&assign.left), sexp(&assign.right))
        }
        Expression::Conditional(cond) => format!(
            "(? {} {} {})",
            sexp(&cond.test),
            sexp(&cond.consequent),
            sexp(&cond.alternate)
        ),
        Expression::Logical(logical) => {
            format!("({} {} {})", logical.operator, sexp(&logical.left), sexp(&logical.right))
        }
        Expression::Binary(binary) => {
            format!("({} {} {})", binary.operator, sexp(&binary.left), sexp(&binary.right))
        }
        Expression::Unary(unary) => format!("({} {})", unary.operator, sexp(&unary.argument)),
        Expression::Update(update) if update.prefix => {
            format!("({} {})", update.operator, sexp(&update.argument))
        }
        Expression::Update(update) => format!("({} {})", sexp(&update.argument), update.operator),
    }
}

/// ソースを解析してS式に変換する
pub fn parse_sexp(source: &str) -> String {
    sexp(&assert_parse_success(source))
}

// サブモジュールの宣言
#[cfg(test)]
mod assignment_test;
#[cfg(test)]
mod context_test;
#[cfg(test)]
mod error_test;
#[cfg(test)]
mod json_test;
#[cfg(test)]
mod precedence_test;
#[cfg(test)]
mod unary_test;
