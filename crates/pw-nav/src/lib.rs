//! Sidebar navigation for the messenger wiki.
//!
//! This crate provides:
//! - [`NavigationTree`]: the hand-authored site map of groups and links
//! - Path matching against the current route ([`matcher`])
//! - Highlight geometry for the active group ([`LayoutMetrics`])
//! - [`SectionStore`]: the in-page section list of the displayed document
//! - Sidebar rendering to a view model and to HTML ([`build_sidebar`], [`render_html`])
//! - Site chrome: logo and decorative network icon ([`render_logo`], [`render_network_icon`])
//!
//! # Quick Start
//!
//! ```
//! use pw_nav::{LayoutMetrics, NavigationTree, SectionSnapshot, render_navigation};
//!
//! let tree = NavigationTree::builtin();
//! let sections = SectionSnapshot::default();
//! let html = render_navigation(&tree, "/why", &sections, &LayoutMetrics::default());
//!
//! assert!(html.contains(r#"aria-current="page""#));
//! ```

mod chrome;
mod entry;
mod error;
mod layout;
pub mod matcher;
mod render;
mod sections;

pub use chrome::{SiteInfo, render_logo, render_network_icon, render_sidebar};
pub use entry::{NavEntry, NavigationTree};
pub use error::LoadError;
pub use layout::{
    DEFAULT_ROOT_FONT_SIZE, Highlight, LayoutMetrics, MARKER_OFFSET_REM, ROW_HEIGHT_REM,
    active_link_index, first_visible_section_index, rem_to_px,
};
pub use render::{
    SectionLink, SidebarGroup, SidebarItem, SidebarLink, build_sidebar, render_html,
    render_navigation,
};
pub use sections::{SectionEntry, SectionSnapshot, SectionSource, SectionStore};
