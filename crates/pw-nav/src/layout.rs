//! Highlight geometry for the active navigation group.
//!
//! Every navigation row has the same height, so positions reduce to row
//! counts multiplied by [`LayoutMetrics::unit_height`]. The highlight spans
//! the rows of the visible sections under the active link; the marker sits
//! beside the active link itself.

use serde::Serialize;

use crate::entry::NavEntry;
use crate::matcher::active_index;
use crate::sections::{SectionEntry, SectionSource};

/// Browser default root font size in pixels.
pub const DEFAULT_ROOT_FONT_SIZE: f32 = 16.0;

/// Height of one navigation row in rem.
pub const ROW_HEIGHT_REM: f32 = 2.0;

/// Offset of the active marker from the top of its row in rem.
pub const MARKER_OFFSET_REM: f32 = 0.25;

/// Convert rem to pixels for the given root font size.
pub fn rem_to_px(rem: f32, root_font_size: f32) -> f32 {
    rem * root_font_size
}

/// Computed position of the highlight region and active marker, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub top: f32,
    pub height: f32,
    pub marker_top: f32,
}

/// Row-based layout constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Height of one navigation row.
    pub unit_height: f32,
    /// Distance from the top of the active row to the marker.
    pub marker_offset: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::from_rem(DEFAULT_ROOT_FONT_SIZE, ROW_HEIGHT_REM, MARKER_OFFSET_REM)
    }
}

impl LayoutMetrics {
    /// Build metrics from rem values.
    #[must_use]
    pub fn from_rem(root_font_size: f32, row_height: f32, marker_offset: f32) -> Self {
        Self {
            unit_height: rem_to_px(row_height, root_font_size),
            marker_offset: rem_to_px(marker_offset, root_font_size),
        }
    }

    /// Height covering the visible sections, never less than one row.
    pub fn highlight_height(&self, visible_count: usize) -> f32 {
        rows(visible_count.max(1)) * self.unit_height
    }

    /// Top of the highlight region.
    pub fn highlight_top(&self, active_link_index: usize, first_visible_index: usize) -> f32 {
        rows(active_link_index) * self.unit_height + rows(first_visible_index) * self.unit_height
    }

    /// Top of the marker beside the active link.
    pub fn active_marker_top(&self, active_link_index: usize) -> f32 {
        self.marker_offset + rows(active_link_index) * self.unit_height
    }

    /// Full highlight geometry for a group's links.
    pub fn highlight<S: SectionSource + ?Sized>(
        &self,
        links: &[NavEntry],
        current_path: &str,
        sections: &S,
    ) -> Highlight {
        let active = active_link_index(links, current_path);
        let visible = sections.visible_sections();
        let first_visible = first_visible_section_index(sections.sections(), visible);

        Highlight {
            top: self.highlight_top(active, first_visible),
            height: self.highlight_height(visible.len()),
            marker_top: self.active_marker_top(active),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn rows(count: usize) -> f32 {
    count as f32
}

/// Index of the link matching `current_path`, or 0 when none matches.
pub fn active_link_index(links: &[NavEntry], current_path: &str) -> usize {
    active_index(links, current_path).unwrap_or(0)
}

/// Position of the first visible section in `[top of page] + sections`.
///
/// Index 0 is the top of the page, returned when nothing is visible or the
/// first visible id is not among `sections`. The result never exceeds
/// `sections.len()`.
pub fn first_visible_section_index(sections: &[SectionEntry], visible: &[String]) -> usize {
    let Some(first) = visible.first() else {
        return 0;
    };
    sections
        .iter()
        .position(|section| section.id == *first)
        .map_or(0, |index| index + 1)
}
