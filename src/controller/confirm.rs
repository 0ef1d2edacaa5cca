//! Confirmation capability injected into the list view

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::models::Employee;

/// Ask the user a yes/no question, blocking until answered
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Native modal dialog
pub struct DialogConfirm {
    title: String,
}

impl DialogConfirm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Confirm for DialogConfirm {
    fn confirm(&self, message: &str) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(self.title.as_str())
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(answer, MessageDialogResult::Yes)
    }
}

pub fn delete_prompt(employee: &Employee) -> String {
    format!("Are you sure you want to delete {}?", employee.name)
}
