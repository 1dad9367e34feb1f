//! CLI command implementations.

pub(crate) mod icon;
pub(crate) mod metrics;
pub(crate) mod render;
pub(crate) mod tree;

use std::path::PathBuf;

use clap::Args;
use pw_config::{CliSettings, Config};
use pw_nav::{LayoutMetrics, NavigationTree, SectionSnapshot, SiteInfo};

use crate::error::CliError;

pub(crate) use icon::IconArgs;
pub(crate) use metrics::MetricsArgs;
pub(crate) use render::RenderArgs;
pub(crate) use tree::TreeArgs;

/// Configuration and navigation source arguments shared by commands.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover pw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation JSON file (overrides config).
    #[arg(short, long, env = "PW_NAVIGATION")]
    navigation: Option<PathBuf>,

    /// Root font size in pixels (overrides config).
    #[arg(long)]
    root_font_size: Option<f32>,
}

/// Everything a command needs to render.
pub(crate) struct Loaded {
    pub(crate) site: SiteInfo,
    pub(crate) tree: NavigationTree,
    pub(crate) metrics: LayoutMetrics,
}

impl SourceArgs {
    /// Load configuration and the navigation tree it points at.
    pub(crate) fn load(&self) -> Result<Loaded, CliError> {
        let cli_settings = CliSettings {
            navigation_file: self.navigation.clone(),
            root_font_size: self.root_font_size,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let tree = match &config.navigation_resolved.file {
            Some(path) => NavigationTree::load(path)?,
            None => NavigationTree::builtin(),
        };
        let metrics = LayoutMetrics::from_rem(
            config.layout.root_font_size,
            config.layout.row_height,
            config.layout.marker_offset,
        );
        let site = SiteInfo {
            title: config.site.title,
            lang: config.site.lang,
            dir: config.site.dir,
        };

        Ok(Loaded {
            site,
            tree,
            metrics,
        })
    }
}

/// Arguments describing the displayed document's sections.
#[derive(Args)]
pub(crate) struct SectionArgs {
    /// Section snapshot JSON file (`{"sections": [...], "visibleSections": [...]}`).
    #[arg(short, long)]
    sections: Option<PathBuf>,

    /// Visible section ids, top to bottom (overrides the snapshot file).
    #[arg(long, value_delimiter = ',')]
    visible: Option<Vec<String>>,
}

impl SectionArgs {
    /// Load the section snapshot, empty when no file is given.
    pub(crate) fn load(&self) -> Result<SectionSnapshot, CliError> {
        let snapshot = match &self.sections {
            Some(path) => SectionSnapshot::load(path)?,
            None => SectionSnapshot::default(),
        };
        Ok(match &self.visible {
            Some(ids) => snapshot.with_visible(ids.iter().cloned()),
            None => snapshot,
        })
    }
}
