//! Site chrome around the navigation: logo, decorative icon, sidebar shell.

use std::fmt::Write;

use crate::entry::NavigationTree;
use crate::layout::LayoutMetrics;
use crate::render::{escape, render_navigation};
use crate::sections::SectionSource;

/// Site identity shown in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    /// Wordmark text.
    pub title: String,
    /// Document language.
    pub lang: String,
    /// Text direction, `rtl` or `ltr`.
    pub dir: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "پیامرسان.ویکی".to_owned(),
            lang: "fa".to_owned(),
            dir: "rtl".to_owned(),
        }
    }
}

/// Render the site wordmark.
pub fn render_logo(title: &str) -> String {
    format!(
        "<span class=\"font-display flex w-full flex-row items-center text-xl font-bold \
         text-slate-900 dark:text-zinc-100 md:items-baseline md:text-2xl\">\
         <span class=\"gradientText leading-loose tracking-tight text-center w-full\">{}</span>\
         </span>",
        escape(title)
    )
}

// Three nodes, each drawn as a ring of four quarter arcs.
const ICON_ARCS: [&str; 12] = [
    "M179.99,250.01c0,35.879-29.111,64.99-64.98,64.99",
    "M115.01,315C79.102,315,50,285.889,50,250.01",
    "M50,250.01c0-35.898,29.102-65,65.01-65",
    "M115.01,185.01c35.869,0,64.98,29.102,64.98,65",
    "M450,400c0,35.879-29.141,65-65.02,65",
    "M384.98,465c-35.869,0-65.01-29.121-65.01-65",
    "M319.971,400c0-35.898,29.141-65.01,65.01-65.01",
    "M384.98,334.99c35.879,0,65.02,29.111,65.02,65.01",
    "M450,100.02c0,35.879-29.141,64.99-65.02,64.99",
    "M384.98,165.01c-35.869,0-65.01-29.111-65.01-64.99",
    "M319.971,100.02c0-35.898,29.141-65.02,65.01-65.02",
    "M384.98,35C420.859,35,450,64.121,450,100.02",
];

// Edges from the left node to the two right nodes.
const ICON_LINES: [(f32, f32, f32, f32); 2] = [
    (172.471, 214.98, 324.971, 128.76),
    (326.855, 365.449, 174.326, 279.209),
];

const ICON_STROKE: &str = "stroke=\"#130B7A\" stroke-linecap=\"round\" \
                           stroke-linejoin=\"round\" stroke-miterlimit=\"2.6131\" \
                           stroke-width=\"10\"";

/// Render the decorative network icon as inline SVG.
pub fn render_network_icon(class: Option<&str>) -> String {
    let mut svg = String::with_capacity(2048);
    svg.push_str("<svg viewBox=\"0 0 500 500\" width=\"500\" height=\"500\" aria-hidden=\"true\"");
    if let Some(class) = class {
        let _ = write!(svg, " class=\"{}\"", escape(class));
    }
    svg.push_str(">\n<g>\n");
    for d in ICON_ARCS {
        let _ = writeln!(svg, "<path d=\"{d}\" fill=\"none\" {ICON_STROKE}/>");
    }
    for (x1, y1, x2, y2) in ICON_LINES {
        let _ = writeln!(
            svg,
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" fill=\"none\" {ICON_STROKE}/>"
        );
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Render the full sidebar: logo link above the navigation tree.
pub fn render_sidebar<S: SectionSource + ?Sized>(
    site: &SiteInfo,
    tree: &NavigationTree,
    current_path: &str,
    sections: &S,
    metrics: &LayoutMetrics,
) -> String {
    let mut html = String::with_capacity(8192);
    let _ = writeln!(
        html,
        "<aside lang=\"{}\" dir=\"{}\" class=\"contents lg:pointer-events-none lg:fixed \
         lg:inset-0 lg:z-40 lg:flex\">",
        escape(&site.lang),
        escape(&site.dir),
    );
    html.push_str(
        "<div class=\"contents lg:pointer-events-auto lg:block lg:w-72 lg:overflow-y-auto \
         lg:border-l lg:border-zinc-900/10 lg:px-6 lg:pb-8 lg:pt-4 xl:w-80\">\n",
    );
    let _ = writeln!(
        html,
        "<a href=\"/\" aria-label=\"{}\" class=\"hidden lg:flex\">{}</a>",
        escape(&site.title),
        render_logo(&site.title),
    );
    html.push_str(&render_navigation(tree, current_path, sections, metrics));
    html.push_str("</div>\n</aside>\n");
    html
}
