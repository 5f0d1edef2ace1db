//! In-memory filesystem tree
//!
//! - `node` - `Node`/`Tree` types, deserialized from the JSON description
//! - `loader` - reading the description from disk
//! - `resolver` - walking a `/`-separated path from the root

mod loader;
mod node;
mod resolver;

pub use loader::{DEFAULT_INPUT, input_path, load_tree, read_tree};
pub use node::{Node, NodeKind, Tree};
pub use resolver::{CURRENT_DIR, Resolution, resolve};
