use super::*;

// =============================================================
// Defaults and transitions
// =============================================================

#[test]
fn default_state_is_idle() {
    assert_eq!(SubmissionState::default(), SubmissionState::Idle);
}

#[test]
fn failed_keeps_server_message() {
    assert_eq!(
        SubmissionState::failed("Invalid credentials"),
        SubmissionState::Failed("Invalid credentials".to_owned())
    );
}

#[test]
fn failed_with_blank_message_uses_generic_fallback() {
    assert_eq!(
        SubmissionState::failed("   "),
        SubmissionState::Failed(GENERIC_FAILURE_MESSAGE.to_owned())
    );
}

// =============================================================
// Predicates
// =============================================================

#[test]
fn only_submitting_reports_in_flight() {
    assert!(SubmissionState::Submitting.is_submitting());
    assert!(!SubmissionState::Idle.is_submitting());
    assert!(!SubmissionState::Succeeded.is_submitting());
    assert!(!SubmissionState::failed("nope").is_submitting());
}

#[test]
fn only_succeeded_reports_success() {
    assert!(SubmissionState::Succeeded.succeeded());
    assert!(!SubmissionState::Idle.succeeded());
    assert!(!SubmissionState::Submitting.succeeded());
    assert!(!SubmissionState::failed("nope").succeeded());
}

#[test]
fn error_message_only_for_failed() {
    assert_eq!(
        SubmissionState::failed("nope").error_message(),
        Some("nope".to_owned())
    );
    assert_eq!(SubmissionState::Idle.error_message(), None);
    assert_eq!(SubmissionState::Submitting.error_message(), None);
    assert_eq!(SubmissionState::Succeeded.error_message(), None);
}
