//! Signed-in user and the auth screens shown before sign-in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use storyboard::plan::PlanTier;
use storyboard::user::User;

/// Which pre-auth form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthScreen {
    #[default]
    Login,
    Signup,
    Reset,
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub screen: AuthScreen,
    /// Returning social account waiting on biometric or passcode.
    pub pending: Option<User>,
    pub busy: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Plan of the signed-in user; free when signed out.
    #[must_use]
    pub fn plan(&self) -> PlanTier {
        self.user.as_ref().map_or(PlanTier::Free, |u| u.plan)
    }

    pub fn show(&mut self, screen: AuthScreen) {
        self.screen = screen;
        self.busy = false;
    }

    pub fn sign_in(&mut self, user: User) {
        leptos::logging::log!("session: signed in {}", user.id);
        self.user = Some(user);
        self.pending = None;
        self.busy = false;
    }

    /// Clears everything, back to the login form.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }

    pub fn hold_pending(&mut self, user: User) {
        self.pending = Some(user);
        self.busy = false;
    }

    /// Promote the pending account after a successful second factor.
    pub fn confirm_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(user) => {
                self.sign_in(user);
                true
            }
            None => false,
        }
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Replace the user record, e.g. after a profile save. Ignored when signed out.
    pub fn apply_user(&mut self, user: User) {
        if self.user.is_some() {
            self.user = Some(user);
        }
    }

    pub fn select_plan(&mut self, plan: PlanTier) {
        if let Some(user) = self.user.as_mut() {
            user.plan = plan;
        }
    }
}
