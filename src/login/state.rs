//! Form state and its transitions.
//!
//! Fields are private: the only way to change a [`FormState`] is through the
//! transition methods below, which keep `submitting` and `error_message`
//! consistent with each other.

/// Shown when either field is left empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both email and password";

/// Shown for every authentication failure, whatever the cause.
pub const LOGIN_FAILED_MESSAGE: &str = "Failed to log in. Please check your credentials.";

/// In-memory fields backing one login view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    email: String,
    password: String,
    error_message: String,
    submitting: bool,
}

impl FormState {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Empty when no error is shown.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub(crate) fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// Both fields must be non-empty. Whitespace counts as content.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    /// Start of every submit attempt.
    pub(crate) fn begin_attempt(&mut self) {
        self.error_message.clear();
    }

    pub(crate) fn reject(&mut self) {
        self.error_message = MISSING_FIELDS_MESSAGE.to_string();
        self.submitting = false;
    }

    pub(crate) fn start_submitting(&mut self) {
        self.submitting = true;
    }

    pub(crate) fn succeed(&mut self) {
        self.submitting = false;
    }

    /// Inputs are left as typed.
    pub(crate) fn fail(&mut self) {
        self.error_message = LOGIN_FAILED_MESSAGE.to_string();
        self.submitting = false;
    }
}

/// Where the view sits in the submit flow.
///
/// `Idle → Validating → (Error | Submitting) → (Success | Error)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    /// Terminal: the view navigated away.
    Success,
    /// Message shown; behaves like `Idle` for the next attempt.
    Error,
}
