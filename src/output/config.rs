//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// One line per entry with permissions, size and modification time
    pub long_format: bool,
    pub use_color: bool,
}
