//! Terminal prompts for decisions the calculators cannot make

use dialoguer::{Confirm, Input};
use tracing::debug;

use relkit_core::error::{RelkitError, Result};
use relkit_versioning::ReleasePrompter;

/// Asks on the terminal with `dialoguer`
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl ReleasePrompter for DialoguerPrompter {
    fn confirm(&self, question: &str) -> Result<bool> {
        debug!(question, "prompting for confirmation");
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact_opt()
            .map_err(|e| RelkitError::other(format!("prompt failed: {}", e)))?
            .ok_or(RelkitError::Cancelled)
    }

    fn prompt_integer(&self, question: &str) -> Result<u64> {
        debug!(question, "prompting for integer");
        Input::<u64>::new()
            .with_prompt(question)
            .interact_text()
            .map_err(|e| RelkitError::other(format!("prompt failed: {}", e)))
    }
}
