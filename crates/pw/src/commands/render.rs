//! `pw render` command implementation.

use clap::{Args, ValueEnum};
use pw_nav::{SectionSnapshot, build_sidebar, render_navigation, render_sidebar};

use super::{Loaded, SectionArgs, SourceArgs};
use crate::error::CliError;
use crate::output::Output;

/// Output format for the rendered navigation.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum Format {
    /// Navigation list inside `<nav>`.
    #[default]
    Html,
    /// Full sidebar with logo.
    Sidebar,
    /// Resolved view model as JSON.
    Json,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    sections: SectionArgs,

    /// Path of the displayed page.
    #[arg(short, long)]
    path: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = self.source.load()?;
        let sections = self.sections.load()?;

        if !loaded.tree.contains_path(&self.path) {
            output.warning(&format!("No navigation entry links to {}", self.path));
        }

        output.data(&render(&loaded, &sections, &self.path, self.format)?)?;
        Ok(())
    }
}

/// Render the loaded navigation for `path` in the requested format.
fn render(
    loaded: &Loaded,
    sections: &SectionSnapshot,
    path: &str,
    format: Format,
) -> Result<String, CliError> {
    tracing::info!(path, format = ?format, "Rendering navigation");

    let rendered = match format {
        Format::Html => render_navigation(&loaded.tree, path, sections, &loaded.metrics),
        Format::Sidebar => render_sidebar(
            &loaded.site,
            &loaded.tree,
            path,
            sections,
            &loaded.metrics,
        ),
        Format::Json => {
            let items = build_sidebar(&loaded.tree, path, sections, &loaded.metrics);
            serde_json::to_string_pretty(&items)?
        }
    };
    Ok(rendered)
}
