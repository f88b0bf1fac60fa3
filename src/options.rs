//! Configuration shared by the tokenizer, the parser and the CLI.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Optional syntax extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Plugin {
    /// The `::` function-bind token.
    FunctionBind,
}

/// Options for one tokenize or parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Module code: rejects `<!--` comments and implies strict mode.
    pub module: bool,
    pub strict: bool,
    pub plugins: IndexSet<Plugin>,
}

impl Options {
    pub fn has_plugin(&self, plugin: Plugin) -> bool {
        self.plugins.contains(&plugin)
    }

    pub fn with_module(mut self, module: bool) -> Self {
        self.module = module;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        self.plugins.insert(plugin);
        self
    }
}

/// Context flags read by the expression parser. The parser never changes
/// them; a surrounding grammar sets them up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserContext {
    pub strict: bool,
    pub in_generator: bool,
    /// Whether the surrounding grammar terminates statements, which makes a
    /// line break before `++`/`--` end the expression.
    pub statement_terminators: bool,
}

impl From<&Options> for ParserContext {
    fn from(options: &Options) -> Self {
        Self {
            strict: options.strict || options.module,
            in_generator: false,
            statement_terminators: false,
        }
    }
}
