use storyboard::user::{AuthProvider, User};

use super::*;

fn user() -> User {
    User::mock_login("me@x.io", 0)
}

#[test]
fn default_is_signed_out_on_login_screen() {
    let state = SessionState::default();
    assert!(!state.is_signed_in());
    assert_eq!(state.screen, AuthScreen::Login);
    assert_eq!(state.plan(), PlanTier::Free);
}

#[test]
fn sign_in_then_out() {
    let mut state = SessionState { busy: true, screen: AuthScreen::Signup, ..SessionState::default() };
    state.sign_in(user());
    assert!(state.is_signed_in());
    assert!(!state.busy);
    state.sign_out();
    assert!(!state.is_signed_in());
    assert_eq!(state.screen, AuthScreen::Login);
}

#[test]
fn pending_account_needs_confirmation() {
    let mut state = SessionState::default();
    let returning = User::from_identity(AuthProvider::Google, AuthProvider::Google.identity(1), 1);
    state.hold_pending(returning.clone());
    assert!(!state.is_signed_in());
    assert!(state.confirm_pending());
    assert_eq!(state.user, Some(returning));
    assert!(!state.confirm_pending());
}

#[test]
fn cancel_pending_keeps_signed_out() {
    let mut state = SessionState::default();
    state.hold_pending(user());
    state.cancel_pending();
    assert!(state.pending.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn select_plan_changes_gate_input() {
    let mut state = SessionState::default();
    state.select_plan(PlanTier::Pro);
    assert_eq!(state.plan(), PlanTier::Free);
    state.sign_in(user());
    state.select_plan(PlanTier::Enterprise);
    assert_eq!(state.plan(), PlanTier::Enterprise);
}

#[test]
fn apply_user_ignored_when_signed_out() {
    let mut state = SessionState::default();
    state.apply_user(user());
    assert!(state.user.is_none());
    state.sign_in(user());
    let mut renamed = user();
    renamed.name = "New".to_owned();
    state.apply_user(renamed);
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("New"));
}
