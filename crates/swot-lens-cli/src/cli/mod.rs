//! CLI subcommand implementations for the `swot-lens` binary.

pub mod analyze_cmd;
pub mod hash_cmd;
pub mod login;
pub mod output;
pub mod repl;
pub mod repl_commands;
pub mod repl_complete;
pub mod repl_progress;
