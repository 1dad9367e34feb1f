//! `pw icon` command implementation.

use clap::Args;
use pw_nav::render_network_icon;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the icon command.
#[derive(Args)]
pub(crate) struct IconArgs {
    /// CSS class for the `<svg>` element.
    #[arg(long)]
    class: Option<String>,
}

impl IconArgs {
    /// Print the network icon SVG.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        Output::new().data(&render_network_icon(self.class.as_deref()))?;
        Ok(())
    }
}
