//! Shell completions

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::{generate, generate_to, Shell};
use tracing::info;

use crate::cli::output;
use crate::cli::Cli;

const BIN_NAME: &str = "relkit";

/// Generate shell completions
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script into this directory under the shell's conventional
    /// file name (`relkit.bash`, `_relkit`, ...) instead of stdout
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, dir = ?self.dir, "executing completions command");

        match &self.dir {
            Some(dir) => {
                let path = self.write_to_dir(dir)?;
                if !cli.quiet {
                    output::success(&format!(
                        "Wrote {} completions to {}",
                        self.shell,
                        output::path_style().apply_to(path.display())
                    ));
                }
            }
            None => self.write(&mut std::io::stdout()),
        }
        Ok(())
    }

    fn write(&self, out: &mut dyn Write) {
        generate(self.shell, &mut Cli::command(), BIN_NAME, out);
    }

    fn write_to_dir(&self, dir: &std::path::Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        Ok(generate_to(self.shell, &mut Cli::command(), BIN_NAME, dir)?)
    }
}
