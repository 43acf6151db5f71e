//! Colored terminal output utilities.
//!
//! Status lines go to stderr; command results (page lists, JSON) go to
//! stdout so they can be piped.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    status: Term,
    results: Term,
    ok: Style,
    warn: Style,
    fail: Style,
    muted: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            results: Term::stdout(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
            muted: Style::new().dim(),
            heading: Style::new().cyan().bold(),
        }
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.status.write_line(&style.apply_to(msg).to_string());
    }

    /// Plain status line.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.styled(&self.ok, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.styled(&self.warn, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.fail, msg);
    }

    /// Section heading (cyan bold).
    pub(crate) fn heading(&self, msg: &str) {
        self.styled(&self.heading, msg);
    }

    /// One validated project: green id, dimmed details.
    pub(crate) fn project_ok(&self, id: &str, details: &str) {
        let line = format!(
            "{} {}",
            self.ok.apply_to(format!("✓ {id}")),
            self.muted.apply_to(details)
        );
        let _ = self.status.write_line(&line);
    }

    /// Command result line on stdout.
    pub(crate) fn result(&self, msg: &str) {
        let _ = self.results.write_line(msg);
    }

    /// Command result with dimmed trailing details.
    pub(crate) fn result_with_details(&self, msg: &str, details: &str) {
        self.result(&format!("{msg}  {}", self.muted.apply_to(details)));
    }
}
