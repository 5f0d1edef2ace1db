//! Listing pipeline
//!
//! Turns a resolved path into the ordered entries to print. Only the
//! current-directory listing is filtered and ordered; explicit paths are
//! printed as stored in the tree.

mod config;
mod filter;
mod order;

pub use config::{KindFilter, ListingConfig};
pub use filter::{IgnoreSet, keep_kind, keep_visible};
pub use order::apply_order;

use tracing::debug;

use crate::error::Result;
use crate::tree::{Node, Resolution, Tree, resolve};

/// Resolve `path` in `tree` and return the entries to print, in order.
pub fn list<'a>(tree: &'a Tree, path: &str, config: &ListingConfig) -> Result<Vec<&'a Node>> {
    let entries = match resolve(tree, path)? {
        Resolution::Root(entries) => root_listing(entries, config),
        Resolution::Entry(node) => vec![node],
        Resolution::Children(node) => match node.children() {
            Some(children) => children.iter().collect(),
            // A file reached by a path that asks for children lists itself.
            None => vec![node],
        },
    };
    debug!(path, count = entries.len(), "listing ready");
    Ok(entries)
}

/// Full filter and order pipeline over the root entries.
pub fn root_listing<'a>(entries: &'a [Node], config: &ListingConfig) -> Vec<&'a Node> {
    let ignore = IgnoreSet::new(&config.ignore_patterns);
    let mut kept: Vec<&Node> = entries
        .iter()
        .filter(|n| keep_visible(n, config.show_all))
        .filter(|n| ignore.is_empty() || !ignore.is_ignored(&n.name))
        .filter(|n| config.kind_filter.is_none_or(|kind| keep_kind(n, kind)))
        .collect();
    apply_order(&mut kept, config.sort_by_time, config.reverse);
    kept
}
