//! CLI commands

mod build_code;
mod bump;
mod completions;
mod init;
mod parse;
mod prompter;
mod show;

pub use build_code::BuildCodeCommand;
pub use bump::{BumpCommand, BumpKind};
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use parse::ParseCommand;
pub use show::ShowCommand;
