use crate::progress::ProgressMode;
use std::path::PathBuf;

pub const DEFAULT_GRAMMAR: &str = "Generic.g4";
pub const DEFAULT_OUTPUT_DIR: &str = "parser";
pub const DEFAULT_LANGUAGE: &str = "Cpp";
pub const DEFAULT_TOOL: &str = "antlr4";
pub const DEFAULT_FALLBACK_TOOL: &str = "antlr";

/// Everything a regeneration run depends on. The defaults reproduce the historical hard-coded
/// invocation 'antlr4 -Dlanguage=Cpp Generic.g4 -o parser', with 'antlr' as the fallback.
#[derive(Clone, Debug)]
pub struct RegenConfig {
    pub grammar_path: PathBuf,

    /// Deleted recursively and recreated empty before the grammar compiler runs.
    pub output_dir: PathBuf,

    /// Passed to the grammar compiler as '-Dlanguage=<value>'.
    pub target_language: String,

    pub primary_tool: String,
    pub fallback_tool: String,

    pub progress: ProgressMode,
}

impl Default for RegenConfig {
    fn default() -> Self {
        Self {
            grammar_path: DEFAULT_GRAMMAR.into(),
            output_dir: DEFAULT_OUTPUT_DIR.into(),
            target_language: DEFAULT_LANGUAGE.to_owned(),
            primary_tool: DEFAULT_TOOL.to_owned(),
            fallback_tool: DEFAULT_FALLBACK_TOOL.to_owned(),
            progress: ProgressMode::Hidden,
        }
    }
}
