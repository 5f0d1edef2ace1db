//! Listing output
//!
//! - `config` - Output configuration types
//! - `utils` - Time and name rendering helpers
//! - `formatter` - Long and short listing formats
//! - `report` - User-facing error messages

mod config;
mod formatter;
mod report;
mod utils;

pub use config::OutputConfig;
pub use formatter::ListingFormatter;
pub use report::{print_error, report_error};
pub use utils::{TIME_FORMAT, display_name, format_time};
