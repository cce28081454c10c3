//! Submission state for the login form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Shown when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unknown error occurred.";

/// Progress of the current login attempt.
///
/// Exactly one variant holds at a time. Submitting replaces whatever was
/// displayed before, and an in-flight attempt always resolves to either
/// `Succeeded` or `Failed`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    /// Build the failed state, substituting the generic message when the
    /// error text is empty.
    pub fn failed(message: &str) -> Self {
        if message.trim().is_empty() {
            Self::Failed(GENERIC_FAILURE_MESSAGE.to_owned())
        } else {
            Self::Failed(message.to_owned())
        }
    }

    /// Whether a login attempt is currently in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the last attempt completed successfully.
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Display message for the last failure, if any.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }
}
