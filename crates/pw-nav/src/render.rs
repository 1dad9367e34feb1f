//! Sidebar rendering.
//!
//! Rendering happens in two passes. [`build_sidebar`] walks the
//! [`NavigationTree`] and resolves everything that depends on the current
//! path and the section snapshot into a [`SidebarItem`] view model.
//! [`render_html`] turns that model into markup. Nothing is cached between
//! renders; every call derives the active state from scratch.
//!
//! Rules applied while walking:
//! - A group is active when one of its direct children links to the current
//!   path. Only an active group carries a [`Highlight`].
//! - The active child of a group lists the document sections beneath it as
//!   `path#id` anchor links.
//! - Entries without children render as single links, or as inert headings
//!   when they have no path either.
//! - Authored order is kept everywhere.

use std::fmt::Write;

use serde::Serialize;

use crate::entry::{NavEntry, NavigationTree};
use crate::layout::{Highlight, LayoutMetrics};
use crate::matcher::{group_is_active, is_active};
use crate::sections::SectionSource;

/// Rendered navigation entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SidebarItem {
    Group(SidebarGroup),
    Link(SidebarLink),
}

/// Rendered group with its children.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SidebarGroup {
    pub title: String,
    /// True when a direct child links to the current path.
    pub active: bool,
    /// Highlight geometry, present only for active groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
    pub items: Vec<SidebarItem>,
}

/// Rendered link.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SidebarLink {
    pub title: String,
    /// Link target. `None` renders an inert heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub active: bool,
    /// Section anchors of the displayed document, only under the active link.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionLink>,
}

/// Anchor link to a section of the displayed document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionLink {
    pub title: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

struct BuildContext<'a, S: ?Sized> {
    current_path: &'a str,
    sections: &'a S,
    metrics: &'a LayoutMetrics,
}

/// Resolve the navigation tree against the current path and sections.
pub fn build_sidebar<S: SectionSource + ?Sized>(
    tree: &NavigationTree,
    current_path: &str,
    sections: &S,
    metrics: &LayoutMetrics,
) -> Vec<SidebarItem> {
    tracing::debug!(path = current_path, "Building sidebar");

    let ctx = BuildContext {
        current_path,
        sections,
        metrics,
    };
    tree.entries()
        .iter()
        .map(|entry| build_item(entry, &ctx, false))
        .collect()
}

/// Build one entry. `in_group` enables section sub-links on the active link.
fn build_item<S: SectionSource + ?Sized>(
    entry: &NavEntry,
    ctx: &BuildContext<'_, S>,
    in_group: bool,
) -> SidebarItem {
    match entry {
        NavEntry::Group { title, children } if !children.is_empty() => {
            SidebarItem::Group(build_group(title, children, ctx))
        }
        NavEntry::Group { title, .. } => SidebarItem::Link(SidebarLink {
            title: title.clone(),
            href: None,
            active: false,
            sections: Vec::new(),
        }),
        NavEntry::Link { title, path } => {
            let active = is_active(entry, ctx.current_path);
            let sections = match path {
                Some(path) if active && in_group => section_links(path, ctx.sections),
                _ => Vec::new(),
            };
            SidebarItem::Link(SidebarLink {
                title: title.clone(),
                href: path.clone(),
                active,
                sections,
            })
        }
    }
}

fn build_group<S: SectionSource + ?Sized>(
    title: &str,
    children: &[NavEntry],
    ctx: &BuildContext<'_, S>,
) -> SidebarGroup {
    let active = group_is_active(children, ctx.current_path);
    let highlight =
        active.then(|| ctx.metrics.highlight(children, ctx.current_path, ctx.sections));

    SidebarGroup {
        title: title.to_owned(),
        active,
        highlight,
        items: children
            .iter()
            .map(|child| build_item(child, ctx, true))
            .collect(),
    }
}

fn section_links<S: SectionSource + ?Sized>(path: &str, sections: &S) -> Vec<SectionLink> {
    sections
        .sections()
        .iter()
        .map(|section| SectionLink {
            title: section.title.clone(),
            href: format!("{path}#{}", section.id),
            tag: section.tag.clone(),
        })
        .collect()
}

const HEADING_CLASSES: &str = "text-xs font-semibold text-zinc-900 dark:text-white";
const LINK_BASE_CLASSES: &str = "flex justify-between gap-2 py-1 pl-3 text-sm transition";
const LINK_ACTIVE_CLASSES: &str = "text-zinc-900 dark:text-white";
const LINK_INACTIVE_CLASSES: &str =
    "text-zinc-600 hover:text-zinc-900 dark:text-zinc-400 dark:hover:text-white";
const TAG_CLASSES: &str = "rounded-lg px-1.5 font-mono text-[0.625rem] font-semibold leading-6 \
                           ring-1 ring-inset text-zinc-500 ring-zinc-200 bg-zinc-50 \
                           dark:text-zinc-400 dark:ring-zinc-500/20 dark:bg-zinc-400/10";

/// Render the sidebar view model as a nested list.
pub fn render_html(items: &[SidebarItem]) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<ul role=\"list\">\n");
    for (index, item) in items.iter().enumerate() {
        let first = if index == 0 { " md:mt-0" } else { "" };
        match item {
            SidebarItem::Group(group) => {
                let _ = writeln!(html, "<li class=\"relative mt-6{first}\">");
                render_group(&mut html, group);
                html.push_str("</li>\n");
            }
            SidebarItem::Link(link) => {
                html.push_str("<li>\n");
                let _ = write!(html, "<h2 class=\"{HEADING_CLASSES} mt-2{first}\">");
                render_link(&mut html, link);
                html.push_str("</h2>\n</li>\n");
            }
        }
    }
    html.push_str("</ul>\n");
    html
}

/// Resolve and render the navigation tree inside a `<nav>` element.
pub fn render_navigation<S: SectionSource + ?Sized>(
    tree: &NavigationTree,
    current_path: &str,
    sections: &S,
    metrics: &LayoutMetrics,
) -> String {
    let items = build_sidebar(tree, current_path, sections, metrics);
    format!("<nav>\n{}</nav>\n", render_html(&items))
}

fn render_group(html: &mut String, group: &SidebarGroup) {
    let _ = writeln!(html, "<h2 class=\"{HEADING_CLASSES}\">{}</h2>", escape(&group.title));
    html.push_str("<div class=\"relative mt-3 pr-2\">\n");

    if let Some(highlight) = &group.highlight {
        let _ = writeln!(
            html,
            "<div class=\"absolute inset-x-0 top-0 bg-zinc-800/2.5 dark:bg-white/2.5\" \
             style=\"border-radius: 8px; height: {}px; top: {}px\"></div>",
            highlight.height, highlight.top,
        );
    }
    html.push_str(
        "<div class=\"absolute inset-y-0 right-2 w-px bg-zinc-900/10 dark:bg-white/5\"></div>\n",
    );
    if let Some(highlight) = &group.highlight {
        let _ = writeln!(
            html,
            "<div class=\"absolute right-2 h-6 w-px bg-purple-500\" style=\"top: {}px\"></div>",
            highlight.marker_top,
        );
    }

    html.push_str("<ul role=\"list\" class=\"border-l border-transparent\">\n");
    for item in &group.items {
        html.push_str("<li class=\"relative\">\n");
        match item {
            SidebarItem::Group(nested) => render_group(html, nested),
            SidebarItem::Link(link) => {
                render_link(html, link);
                html.push('\n');
                render_section_links(html, &link.sections);
            }
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n</div>\n");
}

fn render_section_links(html: &mut String, sections: &[SectionLink]) {
    if sections.is_empty() {
        return;
    }
    html.push_str("<ul role=\"list\">\n");
    for section in sections {
        html.push_str("<li>");
        let link = SidebarLink {
            title: section.title.clone(),
            href: Some(section.href.clone()),
            active: false,
            sections: Vec::new(),
        };
        render_link_with_tag(html, &link, true, section.tag.as_deref());
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}

fn render_link(html: &mut String, link: &SidebarLink) {
    render_link_with_tag(html, link, false, None);
}

fn render_link_with_tag(html: &mut String, link: &SidebarLink, is_anchor: bool, tag: Option<&str>) {
    let padding = if is_anchor { "pr-7" } else { "pr-4" };
    let state = if link.active {
        LINK_ACTIVE_CLASSES
    } else {
        LINK_INACTIVE_CLASSES
    };

    match &link.href {
        Some(href) => {
            let current = if link.active {
                " aria-current=\"page\""
            } else {
                ""
            };
            let _ = write!(
                html,
                "<a href=\"{}\"{current} class=\"{LINK_BASE_CLASSES} {padding} {state}\">",
                escape(href),
            );
        }
        None => {
            let _ = write!(html, "<span class=\"{LINK_BASE_CLASSES} {padding} {state}\">");
        }
    }

    let _ = write!(html, "<span class=\"truncate\">{}</span>", escape(&link.title));
    if let Some(tag) = tag {
        let _ = write!(html, "<span class=\"{TAG_CLASSES}\">{}</span>", escape(tag));
    }

    html.push_str(if link.href.is_some() { "</a>" } else { "</span>" });
}

/// Escape HTML special characters.
pub(crate) fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{SectionEntry, SectionSnapshot};
    use pretty_assertions::assert_eq;

    fn sample_tree() -> NavigationTree {
        NavigationTree::new(vec![
            NavEntry::group(
                "X",
                vec![NavEntry::link("A", "/a"), NavEntry::link("B", "/b")],
            ),
            NavEntry::group("Y", vec![NavEntry::link("C", "/c")]),
            NavEntry::link("Credits", "/credits"),
        ])
    }

    fn sample_sections() -> SectionSnapshot {
        SectionSnapshot::new(vec![
            SectionEntry::new("s1", "One"),
            SectionEntry::new("s2", "Two").with_tag("new"),
            SectionEntry::new("s3", "Three"),
        ])
        .with_visible(["s2"])
    }

    fn build(tree: &NavigationTree, path: &str, sections: &SectionSnapshot) -> Vec<SidebarItem> {
        build_sidebar(tree, path, sections, &LayoutMetrics::default())
    }

    fn group(item: &SidebarItem) -> &SidebarGroup {
        match item {
            SidebarItem::Group(group) => group,
            SidebarItem::Link(link) => panic!("expected group, got link {}", link.title),
        }
    }

    fn link(item: &SidebarItem) -> &SidebarLink {
        match item {
            SidebarItem::Link(link) => link,
            SidebarItem::Group(group) => panic!("expected link, got group {}", group.title),
        }
    }

    fn collect_active_links<'a>(items: &'a [SidebarItem], out: &mut Vec<&'a SidebarLink>) {
        for item in items {
            match item {
                SidebarItem::Group(group) => collect_active_links(&group.items, out),
                SidebarItem::Link(link) if link.active => out.push(link),
                SidebarItem::Link(_) => {}
            }
        }
    }

    #[test]
    fn test_single_active_leaf_matches_path() {
        let tree = sample_tree();
        let sections = sample_sections();

        for path in ["/a", "/b", "/c", "/credits"] {
            let items = build(&tree, path, &sections);
            let mut active = Vec::new();
            collect_active_links(&items, &mut active);

            assert_eq!(active.len(), 1, "path {path}");
            assert_eq!(active[0].href.as_deref(), Some(path));
        }
    }

    #[test]
    fn test_unmatched_path_activates_nothing() {
        let items = build(&sample_tree(), "/nowhere", &sample_sections());

        let mut active = Vec::new();
        collect_active_links(&items, &mut active);
        assert!(active.is_empty());
        assert!(!group(&items[0]).active);
        assert!(group(&items[0]).highlight.is_none());
        assert!(!group(&items[1]).active);
        assert!(group(&items[1]).highlight.is_none());
    }

    #[test]
    fn test_order_preserved() {
        let items = build(&sample_tree(), "/a", &SectionSnapshot::default());

        let titles: Vec<_> = items
            .iter()
            .map(|item| match item {
                SidebarItem::Group(group) => group.title.as_str(),
                SidebarItem::Link(link) => link.title.as_str(),
            })
            .collect();
        assert_eq!(titles, vec!["X", "Y", "Credits"]);

        let children: Vec<_> = group(&items[0])
            .items
            .iter()
            .map(|item| link(item).title.as_str())
            .collect();
        assert_eq!(children, vec!["A", "B"]);
    }

    #[test]
    fn test_active_group_gets_highlight() {
        let items = build(&sample_tree(), "/b", &sample_sections());

        let x = group(&items[0]);
        assert!(x.active);
        assert_eq!(
            x.highlight,
            Some(Highlight {
                top: 32.0 + 2.0 * 32.0,
                height: 32.0,
                marker_top: 36.0,
            })
        );
        assert!(!group(&items[1]).active);
    }

    #[test]
    fn test_active_link_lists_sections() {
        let items = build(&sample_tree(), "/b", &sample_sections());

        let x = group(&items[0]);
        assert!(link(&x.items[0]).sections.is_empty());
        assert_eq!(
            link(&x.items[1]).sections,
            vec![
                SectionLink {
                    title: "One".to_owned(),
                    href: "/b#s1".to_owned(),
                    tag: None,
                },
                SectionLink {
                    title: "Two".to_owned(),
                    href: "/b#s2".to_owned(),
                    tag: Some("new".to_owned()),
                },
                SectionLink {
                    title: "Three".to_owned(),
                    href: "/b#s3".to_owned(),
                    tag: None,
                },
            ]
        );
    }

    #[test]
    fn test_active_link_without_sections_has_no_sublist() {
        let items = build(&sample_tree(), "/b", &SectionSnapshot::default());

        let b = link(&group(&items[0]).items[1]);
        assert!(b.active);
        assert!(b.sections.is_empty());
    }

    #[test]
    fn test_top_level_link_active_without_sections() {
        let items = build(&sample_tree(), "/credits", &sample_sections());

        let credits = link(&items[2]);
        assert!(credits.active);
        assert!(credits.sections.is_empty());
    }

    #[test]
    fn test_empty_group_renders_as_inert_heading() {
        let tree = NavigationTree::new(vec![NavEntry::group("Empty", Vec::new())]);

        let items = build(&tree, "/", &SectionSnapshot::default());

        assert_eq!(
            items,
            vec![SidebarItem::Link(SidebarLink {
                title: "Empty".to_owned(),
                href: None,
                active: false,
                sections: Vec::new(),
            })]
        );
    }

    #[test]
    fn test_empty_links_renders_like_plain_link() {
        let with_empty =
            NavigationTree::from_json(r#"[{"title": "C", "href": "/c", "links": []}]"#).unwrap();
        let plain = NavigationTree::from_json(r#"[{"title": "C", "href": "/c"}]"#).unwrap();
        let sections = SectionSnapshot::default();

        assert_eq!(
            build(&with_empty, "/c", &sections),
            build(&plain, "/c", &sections)
        );
    }

    #[test]
    fn test_nested_group_applies_rule_per_level() {
        let tree = NavigationTree::new(vec![NavEntry::group(
            "Outer",
            vec![
                NavEntry::link("Top", "/top"),
                NavEntry::group("Inner", vec![NavEntry::link("Deep", "/deep")]),
            ],
        )]);

        let items = build(&tree, "/deep", &sample_sections());

        let outer = group(&items[0]);
        assert!(!outer.active);
        assert!(outer.highlight.is_none());
        let inner = group(&outer.items[1]);
        assert!(inner.active);
        assert!(inner.highlight.is_some());
        let deep = link(&inner.items[0]);
        assert!(deep.active);
        assert_eq!(deep.sections.len(), 3);
    }

    #[test]
    fn test_render_html_nested_group() {
        let tree = NavigationTree::new(vec![NavEntry::group(
            "Outer",
            vec![
                NavEntry::link("Top", "/top"),
                NavEntry::group("Inner", vec![NavEntry::link("Deep", "/deep")]),
            ],
        )]);

        let html = render_navigation(&tree, "/deep", &sample_sections(), &LayoutMetrics::default());

        let outer = html.find(">Outer</h2>").unwrap();
        let inner = html.find(">Inner</h2>").unwrap();
        assert!(outer < inner);
        // Only the inner group is active, so it alone draws a highlight and marker
        let highlight = html
            .find("style=\"border-radius: 8px; height: 32px; top: 64px\"")
            .unwrap();
        let marker = html.find("bg-purple-500\" style=\"top: 4px\"").unwrap();
        assert!(inner < highlight && highlight < marker);
        assert_eq!(html.matches("border-radius: 8px").count(), 1);
        assert_eq!(html.matches("bg-purple-500").count(), 1);
        assert_eq!(html.matches("absolute inset-y-0 right-2 w-px").count(), 2);
        assert!(html.contains("<a href=\"/deep\" aria-current=\"page\""));
        assert!(html.contains("href=\"/deep#s2\""));
    }

    #[test]
    fn test_render_html_marks_current_page() {
        let html = render_navigation(
            &sample_tree(),
            "/b",
            &SectionSnapshot::default(),
            &LayoutMetrics::default(),
        );

        assert!(html.starts_with("<nav>\n<ul role=\"list\">"));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains("<a href=\"/b\" aria-current=\"page\""));
        assert!(!html.contains("<a href=\"/a\" aria-current"));
    }

    #[test]
    fn test_render_html_highlight_styles() {
        let html = render_navigation(
            &sample_tree(),
            "/b",
            &sample_sections(),
            &LayoutMetrics::default(),
        );

        assert!(html.contains("style=\"border-radius: 8px; height: 32px; top: 96px\""));
        assert!(html.contains("bg-purple-500\" style=\"top: 36px\""));
        assert_eq!(html.matches("bg-purple-500").count(), 1);
        // Vertical rule rendered for every group
        assert_eq!(html.matches("inset-y-0 right-2 w-px").count(), 2);
    }

    #[test]
    fn test_render_html_section_links() {
        let html = render_navigation(
            &sample_tree(),
            "/b",
            &sample_sections(),
            &LayoutMetrics::default(),
        );

        assert!(html.contains("<a href=\"/b#s1\""));
        assert!(html.contains("<a href=\"/b#s2\""));
        assert!(html.contains(">new</span>"));
        assert!(html.contains("pr-7"));
    }

    #[test]
    fn test_render_html_no_highlight_when_inactive() {
        let html = render_navigation(
            &sample_tree(),
            "/missing",
            &sample_sections(),
            &LayoutMetrics::default(),
        );

        assert!(!html.contains("aria-current"));
        assert!(!html.contains("bg-purple-500"));
        assert!(!html.contains("border-radius"));
        assert!(!html.contains("#s1"));
    }

    #[test]
    fn test_render_html_single_link_heading() {
        let html = render_navigation(
            &sample_tree(),
            "/credits",
            &SectionSnapshot::default(),
            &LayoutMetrics::default(),
        );

        assert!(html.contains(
            "<h2 class=\"text-xs font-semibold text-zinc-900 dark:text-white mt-2\">\
             <a href=\"/credits\" aria-current=\"page\""
        ));
    }

    #[test]
    fn test_render_html_first_item_resets_margin() {
        let html = render_html(&build(&sample_tree(), "/", &SectionSnapshot::default()));

        assert!(html.contains("<li class=\"relative mt-6 md:mt-0\">"));
        assert_eq!(html.matches("md:mt-0").count(), 1);
    }

    #[test]
    fn test_render_html_inert_heading_has_no_anchor() {
        let tree = NavigationTree::new(vec![NavEntry::Link {
            title: "Soon".to_owned(),
            path: None,
        }]);

        let html = render_navigation(
            &tree,
            "/",
            &SectionSnapshot::default(),
            &LayoutMetrics::default(),
        );

        assert!(!html.contains("<a "));
        assert!(html.contains("<span class=\"truncate\">Soon</span>"));
    }

    #[test]
    fn test_render_html_escapes_text() {
        let tree = NavigationTree::new(vec![NavEntry::link("<b>&</b>", "/x?a=\"1\"")]);

        let html = render_navigation(
            &tree,
            "/",
            &SectionSnapshot::default(),
            &LayoutMetrics::default(),
        );

        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(html.contains("href=\"/x?a=&quot;1&quot;\""));
    }

    #[test]
    fn test_sidebar_serialization() {
        let items = build(&sample_tree(), "/b", &SectionSnapshot::default());

        let json = serde_json::to_value(&items).unwrap();

        assert_eq!(json[0]["kind"], "group");
        assert_eq!(json[0]["highlight"]["markerTop"], 36.0);
        assert_eq!(json[0]["items"][1]["kind"], "link");
        assert_eq!(json[0]["items"][1]["active"], true);
        assert!(json[1].get("highlight").is_none());
        assert_eq!(json[2]["href"], "/credits");
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a&b"), "a&amp;b");
        assert_eq!(escape("it's"), "it&#x27;s");
    }
}
