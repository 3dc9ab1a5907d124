mod tool;

pub mod finders;

pub use tool::{display_cmd, EnvVarKind, Strategy, Tool, ToolFinder};
