//! Matching navigation entries against the current route.
//!
//! A path either matches an entry exactly or it does not. There is no
//! prefix matching and no normalization of trailing slashes.

use crate::entry::NavEntry;

/// Whether `entry` links to `current_path`.
///
/// Groups and links without a path never match.
pub fn is_active(entry: &NavEntry, current_path: &str) -> bool {
    entry.path() == Some(current_path)
}

/// Index of the first sibling linking to `current_path`.
pub fn active_index(siblings: &[NavEntry], current_path: &str) -> Option<usize> {
    siblings
        .iter()
        .position(|entry| is_active(entry, current_path))
}

/// Whether a group with these direct children is active.
///
/// Only direct children are inspected. A match on a grandchild does not
/// activate the group.
pub fn group_is_active(children: &[NavEntry], current_path: &str) -> bool {
    active_index(children, current_path).is_some()
}
