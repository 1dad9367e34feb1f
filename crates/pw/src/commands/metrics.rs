//! `pw metrics` command implementation.

use clap::Args;
use pw_nav::{Highlight, SidebarItem, build_sidebar};
use serde::Serialize;

use super::{SectionArgs, SourceArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the metrics command.
#[derive(Args)]
pub(crate) struct MetricsArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    sections: SectionArgs,

    /// Path of the displayed page.
    #[arg(short, long)]
    path: String,
}

/// Highlight geometry of one active group.
#[derive(Debug, PartialEq, Serialize)]
struct GroupHighlight<'a> {
    group: &'a str,
    #[serde(flatten)]
    highlight: Highlight,
}

impl MetricsArgs {
    /// Print highlight geometry for every active group as JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let loaded = self.source.load()?;
        let sections = self.sections.load()?;

        let items = build_sidebar(&loaded.tree, &self.path, &sections, &loaded.metrics);
        let mut highlights = Vec::new();
        collect_highlights(&items, &mut highlights);
        tracing::info!(path = %self.path, groups = highlights.len(), "Computed highlights");

        Output::new().data(&serde_json::to_string_pretty(&highlights)?)?;
        Ok(())
    }
}

fn collect_highlights<'a>(items: &'a [SidebarItem], out: &mut Vec<GroupHighlight<'a>>) {
    for item in items {
        if let SidebarItem::Group(group) = item {
            if let Some(highlight) = group.highlight {
                out.push(GroupHighlight {
                    group: &group.title,
                    highlight,
                });
            }
            collect_highlights(&group.items, out);
        }
    }
}
