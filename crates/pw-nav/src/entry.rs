//! Navigation tree data.
//!
//! The tree is authored as a JSON array of entries, each either a link
//! `{"title", "href"}` or a group `{"title", "links": [...]}`. Groups nest
//! arbitrarily. An entry whose `links` list is missing or empty is a link.
//!
//! # Example
//!
//! ```
//! use pw_nav::{NavEntry, NavigationTree};
//!
//! let tree = NavigationTree::from_json(
//!     r#"[{"title": "Intro", "links": [{"title": "Why", "href": "/why"}]}]"#,
//! ).unwrap();
//!
//! assert_eq!(tree.entries().len(), 1);
//! assert!(matches!(tree.entries()[0], NavEntry::Group { .. }));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, read_json};

/// Node in the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry", into = "RawEntry")]
pub enum NavEntry {
    /// Single destination. Without a path it renders as an inert heading.
    Link {
        title: String,
        path: Option<String>,
    },
    /// Titled group of nested entries.
    Group {
        title: String,
        children: Vec<NavEntry>,
    },
}

impl NavEntry {
    /// Create a link entry.
    pub fn link(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Link {
            title: title.into(),
            path: Some(path.into()),
        }
    }

    /// Create a group entry.
    pub fn group(title: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self::Group {
            title: title.into(),
            children,
        }
    }

    /// Display title.
    pub fn title(&self) -> &str {
        match self {
            Self::Link { title, .. } | Self::Group { title, .. } => title,
        }
    }

    /// Destination path. Groups have none.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Link { path, .. } => path.as_deref(),
            Self::Group { .. } => None,
        }
    }

    /// Nested entries. Links have none.
    pub fn children(&self) -> &[NavEntry] {
        match self {
            Self::Link { .. } => &[],
            Self::Group { children, .. } => children,
        }
    }
}

/// Entry shape as authored in navigation files.
#[derive(Serialize, Deserialize)]
struct RawEntry {
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    links: Vec<RawEntry>,
}

impl From<RawEntry> for NavEntry {
    fn from(raw: RawEntry) -> Self {
        if raw.links.is_empty() {
            Self::Link {
                title: raw.title,
                path: raw.href,
            }
        } else {
            Self::Group {
                title: raw.title,
                children: raw.links.into_iter().map(Self::from).collect(),
            }
        }
    }
}

impl From<NavEntry> for RawEntry {
    fn from(entry: NavEntry) -> Self {
        match entry {
            NavEntry::Link { title, path } => Self {
                title,
                href: path,
                links: Vec::new(),
            },
            NavEntry::Group { title, children } => Self {
                title,
                href: None,
                links: children.into_iter().map(Self::from).collect(),
            },
        }
    }
}

/// Ordered forest of navigation entries.
///
/// Entry order is the rendered order. The tree is never mutated after
/// construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationTree {
    entries: Vec<NavEntry>,
}

impl NavigationTree {
    /// Create a tree from top-level entries.
    #[must_use]
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self { entries }
    }

    /// Top-level entries in authored order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Whether any entry at any depth links to `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        fn walk(entries: &[NavEntry], path: &str) -> bool {
            entries
                .iter()
                .any(|entry| entry.path() == Some(path) || walk(entry.children(), path))
        }
        walk(&self.entries, path)
    }

    /// Parse a tree from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a tree from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let tree: Self = read_json(path)?;
        tracing::info!(path = %path.display(), entries = tree.entries.len(), "Loaded navigation");
        Ok(tree)
    }

    /// The messenger wiki site map.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            NavEntry::group(
                "مقدمه",
                vec![
                    NavEntry::link("پیامرسان آزاد؟", "/why-open-messenger"),
                    NavEntry::link("چرا؟!", "/why"),
                    NavEntry::link("استانداردها", "/standard"),
                    NavEntry::link("پیامرسان‌ها", "/messengers"),
                    NavEntry::link("وضعیت فعلی", "/latest-situation"),
                ],
            ),
            NavEntry::group(
                "راهکار‌ها",
                vec![
                    NavEntry::link("ماتریکس", "/protocols/matrix"),
                    NavEntry::link("XMPP", "/protocols/xmpp"),
                    NavEntry::link("SimpleXChat", "/protocols/simplex-chat"),
                    NavEntry::link("Nostr", "/protocols/nostr"),
                ],
            ),
            NavEntry::group(
                "آموزش‌ها",
                vec![NavEntry::link(
                    "راه‌اندازی سرور ماتریکس",
                    "/guides/matrix-server",
                )],
            ),
            NavEntry::link("پسگفتار", "/credits"),
        ])
    }
}
