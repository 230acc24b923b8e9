//! Confirm-and-notify port.
//!
//! The dashboard never draws dialogs itself. Destructive and mode-changing
//! actions ask a [`Dialog`] first, and finished actions report back through
//! it. The CLI prompts on the terminal; tests script the answers.

use std::cell::RefCell;
use std::collections::VecDeque;

/// Confirmation and notification capability supplied by the front end.
pub trait Dialog {
    /// Ask the user to confirm `message`. `false` cancels the action.
    fn confirm(&self, message: &str) -> bool;

    /// Tell the user an action finished.
    fn notify(&self, title: &str, message: &str);
}

/// Confirms everything and reports notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Dialog for AutoConfirm {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!(message, "Auto-confirmed");
        true
    }

    fn notify(&self, title: &str, message: &str) {
        tracing::info!(title, message, "Notification");
    }
}

/// A dialog with pre-recorded answers that remembers what it was asked.
///
/// Once the scripted answers run out every further confirmation is declined.
#[derive(Debug, Default)]
pub struct ScriptedDialog {
    answers: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<String>>,
    notifications: RefCell<Vec<(String, String)>>,
}

impl ScriptedDialog {
    /// Create a dialog that answers confirmations in order.
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Queue another answer.
    pub fn push_answer(&self, answer: bool) {
        self.answers.borrow_mut().push_back(answer);
    }

    /// Every confirmation message shown so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Every `(title, message)` notification shown so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<(String, String)> {
        self.notifications.borrow().clone()
    }
}

impl Dialog for ScriptedDialog {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_owned());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }

    fn notify(&self, title: &str, message: &str) {
        self.notifications
            .borrow_mut()
            .push((title.to_owned(), message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_then_declines() {
        let dialog = ScriptedDialog::new([true, false]);
        assert!(dialog.confirm("first"));
        assert!(!dialog.confirm("second"));
        assert!(!dialog.confirm("third"));
        assert_eq!(dialog.prompts(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_records_notifications() {
        let dialog = ScriptedDialog::default();
        dialog.notify("Added", "New user has been added.");
        assert_eq!(
            dialog.notifications(),
            vec![("Added".to_owned(), "New user has been added.".to_owned())]
        );
    }
}
