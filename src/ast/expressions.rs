//! 式の定義

use serde::{Deserialize, Serialize};

use super::{
    AssignmentOperator, BinaryOperator, Extra, LogicalOperator, Span, UnaryOperator,
    UpdateOperator,
};
use crate::lexer::Number;

/// 式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    #[serde(rename = "NumericLiteral")]
    NumericLiteral(NumericLiteral),
    #[serde(rename = "Identifier")]
    Identifier(Identifier),
    #[serde(rename = "MemberExpression")]
    Member(MemberExpression),
    #[serde(rename = "SequenceExpression")]
    Sequence(SequenceExpression),
    #[serde(rename = "AssignmentExpression")]
    Assignment(AssignmentExpression),
    #[serde(rename = "ConditionalExpression")]
    Conditional(ConditionalExpression),
    #[serde(rename = "LogicalExpression")]
    Logical(LogicalExpression),
    #[serde(rename = "BinaryExpression")]
    Binary(BinaryExpression),
    #[serde(rename = "UnaryExpression")]
    Unary(UnaryExpression),
    #[serde(rename = "UpdateExpression")]
    Update(UpdateExpression),
}

/// 数値リテラル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericLiteral {
    pub value: Number,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

/// 識別子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

/// 添字アクセス（`a[i]`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    pub computed: bool,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

/// カンマ区切りの式の列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceExpression {
    pub expressions: Vec<Expression>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

/// 代入式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentExpression {
    pub operator: AssignmentOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

/// 三項演算子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

/// 論理式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalExpression {
    pub left: Box<Expression>,
    pub operator: LogicalOperator,
    pub right: Box<Expression>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

/// 二項演算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

/// 単項演算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub prefix: bool,
    pub argument: Box<Expression>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

/// 前置・後置のインクリメント／デクリメント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpression {
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub argument: Box<Expression>,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

impl Expression {
    /// Get the span of this expression
    pub fn span(&self) -> Span {
        match self {
            Expression::NumericLiteral(e) => e.span,
            Expression::Identifier(e) => e.span,
            Expression::Member(e) => e.span,
            Expression::Sequence(e) => e.span,
            Expression::Assignment(e) => e.span,
            Expression::Conditional(e) => e.span,
            Expression::Logical(e) => e.span,
            Expression::Binary(e) => e.span,
            Expression::Unary(e) => e.span,
            Expression::Update(e) => e.span,
        }
    }

    pub fn extra(&self) -> &Extra {
        match self {
            Expression::NumericLiteral(e) => &e.extra,
            Expression::Identifier(e) => &e.extra,
            Expression::Member(e) => &e.extra,
            Expression::Sequence(e) => &e.extra,
            Expression::Assignment(e) => &e.extra,
            Expression::Conditional(e) => &e.extra,
            Expression::Logical(e) => &e.extra,
            Expression::Binary(e) => &e.extra,
            Expression::Unary(e) => &e.extra,
            Expression::Update(e) => &e.extra,
        }
    }

    pub fn extra_mut(&mut self) -> &mut Extra {
        match self {
            Expression::NumericLiteral(e) => &mut e.extra,
            Expression::Identifier(e) => &mut e.extra,
            Expression::Member(e) => &mut e.extra,
            Expression::Sequence(e) => &mut e.extra,
            Expression::Assignment(e) => &mut e.extra,
            Expression::Conditional(e) => &mut e.extra,
            Expression::Logical(e) => &mut e.extra,
            Expression::Binary(e) => &mut e.extra,
            Expression::Unary(e) => &mut e.extra,
            Expression::Update(e) => &mut e.extra,
        }
    }

    /// Node type name as it appears in the serialized tree.
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::NumericLiteral(_) => "NumericLiteral",
            Expression::Identifier(_) => "Identifier",
            Expression::Member(_) => "MemberExpression",
            Expression::Sequence(_) => "SequenceExpression",
            Expression::Assignment(_) => "AssignmentExpression",
            Expression::Conditional(_) => "ConditionalExpression",
            Expression::Logical(_) => "LogicalExpression",
            Expression::Binary(_) => "BinaryExpression",
            Expression::Unary(_) => "UnaryExpression",
            Expression::Update(_) => "UpdateExpression",
        }
    }

    pub fn is_parenthesized(&self) -> bool {
        self.extra().parenthesized
    }
}
