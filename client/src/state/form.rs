//! Inline alert + busy state shared by form pages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;

/// What a form page shows under its fields.
///
/// At most one of `error` / `success` is non-empty. Starting a new
/// submission dismisses whatever alert was showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub error: String,
    pub success: String,
    pub busy: bool,
}

impl FormStatus {
    /// Mark a submission in flight. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error.clear();
        self.success.clear();
        true
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.success.clear();
        self.busy = false;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.success = message.into();
        self.error.clear();
        self.busy = false;
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }
}

/// [`FormStatus::begin`] on a signal.
pub fn begin_submit(status: RwSignal<FormStatus>) -> bool {
    let mut started = false;
    status.update(|s| started = s.begin());
    started
}
