//! Listing formatter
//!
//! `ListingFormatter` renders entries either into a string or to stdout with
//! colors. Long format is one line per entry; short format is each name
//! followed by a single space, with no closing newline.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::error::Result;
use crate::tree::Node;

use super::config::OutputConfig;
use super::utils::{display_name, format_time};

/// Formatter for a resolved listing.
pub struct ListingFormatter {
    config: OutputConfig,
}

impl ListingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render entries without colors.
    pub fn format(&self, entries: &[&Node]) -> Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write_entries(&mut out, entries)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    pub fn print(&self, entries: &[&Node]) -> Result<()> {
        // `use_color` already accounts for the terminal and environment.
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_entries(&mut stdout, entries)?;
        stdout.flush()?;
        Ok(())
    }

    pub fn write_entries<W: WriteColor>(&self, out: &mut W, entries: &[&Node]) -> Result<()> {
        for node in entries {
            if self.config.long_format {
                self.write_long(out, node)?;
            } else {
                self.write_name(out, node, &node.name)?;
                write!(out, " ")?;
            }
        }
        Ok(())
    }

    fn write_long<W: WriteColor>(&self, out: &mut W, node: &Node) -> Result<()> {
        let modified = format_time(node.time_modified)?;
        write!(out, "{} {} {} ", node.permissions, node.size, modified)?;
        self.write_name(out, node, display_name(&node.name))?;
        writeln!(out)?;
        Ok(())
    }

    /// Write a name, in bold blue for directories when colors are on.
    fn write_name<W: WriteColor>(&self, out: &mut W, node: &Node, name: &str) -> Result<()> {
        if node.is_dir() && self.config.use_color {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}", name)?;
            out.reset()?;
        } else {
            write!(out, "{}", name)?;
        }
        Ok(())
    }
}
