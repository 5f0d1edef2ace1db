//! Entry filters for the root listing

use glob::Pattern;
use tracing::warn;

use crate::tree::Node;

use super::config::KindFilter;

/// Hidden-entry filter: dot-prefixed names are shown only with `show_all`.
pub fn keep_visible(node: &Node, show_all: bool) -> bool {
    show_all || !node.is_hidden()
}

/// Kind filter.
///
/// `File` keeps everything: `--filter file` has never narrowed the listing
/// and existing output depends on it. Build with `corrected-listing` to make
/// it keep files only.
#[cfg(not(feature = "corrected-listing"))]
pub fn keep_kind(node: &Node, filter: KindFilter) -> bool {
    match filter {
        KindFilter::Dir => node.is_dir(),
        KindFilter::File => true,
    }
}

/// Kind filter.
#[cfg(feature = "corrected-listing")]
pub fn keep_kind(node: &Node, filter: KindFilter) -> bool {
    match filter {
        KindFilter::Dir => node.is_dir(),
        KindFilter::File => !node.is_dir(),
    }
}

/// Compiled `--ignore` patterns.
#[derive(Debug, Default)]
pub struct IgnoreSet {
    patterns: Vec<(String, Option<Pattern>)>,
}

impl IgnoreSet {
    /// Compile patterns. An invalid glob still matches its literal text.
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .map(|raw| {
                let compiled = Pattern::new(raw)
                    .map_err(|e| warn!(pattern = %raw, error = %e, "invalid ignore pattern"))
                    .ok();
                (raw.clone(), compiled)
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|(raw, compiled)| {
            raw == name || compiled.as_ref().is_some_and(|p| p.matches(name))
        })
    }
}
