use super::*;

#[test]
fn validation_errors_keep_their_titles() {
    let err = ApiError::from(ValidationError::PasswordMismatch);
    assert_eq!(err.notice(), ("Password Mismatch", "Passwords do not match. Please try again.".to_owned()));
}

#[test]
fn generate_errors_keep_their_titles() {
    let err = ApiError::from(GenerateError::EmptyPrompt);
    assert_eq!(err.title(), "Empty Prompt");
}

#[test]
fn biometric_failure_suggests_passcode() {
    let (title, description) = ApiError::BiometricFailed.notice();
    assert_eq!(title, "Authentication Failed");
    assert!(description.contains("passcode"));
}

#[test]
fn same_plan_names_tier() {
    assert_eq!(ApiError::SamePlan(PlanTier::Pro).to_string(), "You are already on the Pro plan.");
}

#[test]
fn storage_errors_pass_through() {
    let err = ApiError::from(StorageError::Unavailable);
    assert_eq!(err.notice(), ("Storage Error", "local storage is not available".to_owned()));
}
