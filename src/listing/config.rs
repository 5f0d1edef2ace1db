//! Configuration for the listing pipeline

use clap::ValueEnum;

/// Restrict a listing to one kind of entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    /// Regular files
    File,
    /// Directories
    Dir,
}

/// Options that shape the root listing.
///
/// Only the current-directory listing honors these; explicit paths are
/// printed as stored.
#[derive(Debug, Clone, Default)]
pub struct ListingConfig {
    /// Include entries whose name starts with `.`
    pub show_all: bool,
    pub kind_filter: Option<KindFilter>,
    /// Glob patterns; matching names are left out
    pub ignore_patterns: Vec<String>,
    pub sort_by_time: bool,
    pub reverse: bool,
}
