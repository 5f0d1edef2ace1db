//! Error reporting for the listing command

use std::io::{self, Write};

use crate::error::ListingError;

/// Write the user-facing message for `err`, e.g.
/// `error: cannot access 'x': No such file or directory`.
pub fn report_error<W: Write>(out: &mut W, err: &ListingError) -> io::Result<()> {
    writeln!(out, "error: {}", err)?;
    out.flush()
}

/// Report to stdout, where the listing itself would have gone.
pub fn print_error(err: &ListingError) -> io::Result<()> {
    report_error(&mut io::stdout().lock(), err)
}
