//! Terminal output utilities.

use std::io;

use console::{Style, Term};

/// Terminal output formatter.
///
/// Rendered documents go to stdout; diagnostics go to stderr.
pub(crate) struct Output {
    out: Term,
    err: Term,
    red: Style,
    yellow: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            red: Style::new().red(),
            yellow: Style::new().yellow(),
        }
    }

    /// Write command output to stdout.
    pub(crate) fn data(&self, content: &str) -> io::Result<()> {
        self.out.write_str(content)?;
        if !content.ends_with('\n') {
            self.out.write_line("")?;
        }
        self.out.flush()
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.err.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }
}
