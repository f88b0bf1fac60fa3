//! 式の解析モジュール
//!
//! 結合の弱い規則から順に、各規則が一段強い規則へ委譲する。
//! 各モジュールは `impl Parser` ブロックで1つの段を担当する。

// サブモジュール
mod assign_expr;
mod binary_expr;
mod conditional_expr;
mod sequence_expr;
mod subscript_expr;
mod unary_expr;
