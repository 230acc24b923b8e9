//! Terminal confirmations and notifications.

use std::io::{self, BufRead, Write};

use backoffice_admin::Dialog;

/// Prompts on stderr and reads `y`/`yes` from stdin.
#[derive(Debug, Clone, Copy)]
pub struct TerminalDialog {
    assume_yes: bool,
}

impl TerminalDialog {
    /// With `assume_yes`, every prompt is confirmed without reading stdin.
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Dialog for TerminalDialog {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            tracing::debug!(message, "Confirmed by --yes");
            return true;
        }

        let mut stderr = io::stderr().lock();
        if write!(stderr, "{message} [y/N] ").and_then(|()| stderr.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }

    fn notify(&self, title: &str, message: &str) {
        if let Err(error) = writeln!(io::stderr().lock(), "{title} {message}") {
            tracing::debug!(%error, title, "Notification not shown");
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
