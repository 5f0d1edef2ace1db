//! jls - `ls` over a filesystem tree described in a JSON file

pub mod error;
pub mod listing;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{ListingError, Result};
pub use listing::{KindFilter, ListingConfig, list};
pub use logging::init_logging;
pub use output::{ListingFormatter, OutputConfig, print_error, report_error};
pub use tree::{DEFAULT_INPUT, Node, NodeKind, Resolution, Tree, load_tree, resolve};
