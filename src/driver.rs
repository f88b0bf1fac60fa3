//! 字句解析・構文解析の入口とソース管理
//!
//! このモジュールは、1つのソースを codespan-reporting のファイル
//! データベースに登録し、エラーを診断として表示する機能を提供します。

use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{Buffer, ColorChoice, StandardStream, WriteColor};
use log::info;
use std::fs;
use std::path::Path;

use crate::ast::Expression;
use crate::error::{ArithError, ArithResult, DiagnosticError};
use crate::lexer::{LexResult, Token, Tokenizer};
use crate::options::Options;
use crate::parser::{ParseResult, Parser};

/// 入力全体をトークン列に変換する（末尾の `eof` を含む）
pub fn tokenize(input: &str, options: &Options) -> LexResult<Vec<Token>> {
    Tokenizer::new(input, options).collect()
}

/// 入力全体を1つの式として解析する
pub fn parse_expression(input: &str, options: &Options) -> ParseResult<Expression> {
    Parser::from_source(input, options)?.parse_to_end()
}

/// 解析対象のソースとその設定
pub struct Session {
    pub source_name: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
    pub options: Options,
}

impl Session {
    /// ファイルからセッションを作成
    pub fn from_file<P: AsRef<Path>>(path: P, options: Options) -> ArithResult<Self> {
        let name = path.as_ref().display().to_string();
        let source = fs::read_to_string(path.as_ref())
            .map_err(|e| ArithError::Io(format!("failed to read {}: {}", name, e)))?;
        info!("loaded {} ({} bytes)", name, source.len());
        Ok(Self::from_string(name, source, options))
    }

    /// 文字列からセッションを作成
    pub fn from_string(name: impl Into<String>, source: impl Into<String>, options: Options) -> Self {
        let source_name = name.into();
        let source = source.into();
        let mut files = SimpleFiles::new();
        let file_id = files.add(source_name.clone(), source.clone());

        Self {
            source_name,
            source,
            files,
            file_id,
            options,
        }
    }

    pub fn tokenize(&self) -> ArithResult<Vec<Token>> {
        Ok(tokenize(&self.source, &self.options)?)
    }

    pub fn parse(&self) -> ArithResult<Expression> {
        Ok(parse_expression(&self.source, &self.options)?)
    }

    /// エラーをこのソースに対する診断へ変換
    pub fn diagnostic(&self, error: &ArithError) -> Diagnostic<usize> {
        DiagnosticError::new(error.clone(), self.file_id).to_diagnostic(&self.source)
    }

    /// 診断を標準エラー出力に表示
    pub fn report(&self, error: &ArithError) -> ArithResult<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let mut lock = writer.lock();
        self.emit(&mut lock, error)
    }

    /// 診断を色無しの文字列として描画
    pub fn render(&self, error: &ArithError) -> ArithResult<String> {
        let mut buffer = Buffer::no_color();
        self.emit(&mut buffer, error)?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }

    fn emit(&self, writer: &mut dyn WriteColor, error: &ArithError) -> ArithResult<()> {
        let config = codespan_reporting::term::Config::default();
        codespan_reporting::term::emit(writer, &config, &self.files, &self.diagnostic(error))
            .map_err(|e| ArithError::Io(format!("failed to emit diagnostic: {}", e)))
    }
}
