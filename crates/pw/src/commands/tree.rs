//! `pw tree` command implementation.

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl TreeArgs {
    /// Print the navigation tree in its authored JSON shape.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let loaded = self.source.load()?;
        let json = serde_json::to_string_pretty(&loaded.tree)?;
        Output::new().data(&json)?;
        Ok(())
    }
}
