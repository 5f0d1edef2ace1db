//! Path resolution from the root of the tree
//!
//! Paths are split on `/` with no normalization, so a leading `/` yields an
//! empty first segment that never matches and the lookup fails.

use tracing::{debug, trace};

use crate::error::{ListingError, Result};

use super::node::{Node, Tree};

/// Path meaning "list the root's entries".
pub const CURRENT_DIR: &str = ".";

/// Where a path landed, and how it must be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The current-directory path: root entries go through the full pipeline.
    Root(&'a [Node]),
    /// A two-segment path: the target is printed on its own.
    Entry(&'a Node),
    /// Any other segment count: the target's children are printed as stored.
    Children(&'a Node),
}

/// Resolve `path` against `tree`.
pub fn resolve<'a>(tree: &'a Tree, path: &str) -> Result<Resolution<'a>> {
    if path == CURRENT_DIR {
        return Ok(Resolution::Root(tree.entries()));
    }

    let segments: Vec<&str> = path.split('/').collect();
    let target = walk(tree, &segments).ok_or_else(|| {
        debug!(path, "path did not resolve");
        ListingError::path_not_found(path)
    })?;

    debug!(path, segments = segments.len(), target = target.name.as_str(), "resolved path");
    if segments.len() == 2 {
        Ok(Resolution::Entry(target))
    } else {
        Ok(Resolution::Children(target))
    }
}

fn walk<'a>(tree: &'a Tree, segments: &[&str]) -> Option<&'a Node> {
    let (first, rest) = segments.split_first()?;
    let mut current = tree.child(first)?;
    for segment in rest {
        trace!(segment, parent = current.name.as_str(), "descending");
        current = current.child(segment)?;
    }
    Some(current)
}
