//! Local UI chrome state: active view, toasts, dialogs, theme.
//!
//! DESIGN
//! ======
//! View switching goes through [`UiState::request_view`], which applies the
//! plan gate. A denied view lands on the subscription screen with a
//! destructive toast rather than an error.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use storyboard::plan::{PlanTier, View, ViewDecision, gate};

use crate::net::error::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub view: View,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
    pub dark_mode: bool,
    pub profile_open: bool,
    pub notifications_open: bool,
}

impl UiState {
    #[must_use]
    pub fn with_dark(dark_mode: bool) -> Self {
        Self { dark_mode, ..Self::default() }
    }

    /// Switch views through the plan gate. Returns the decision so callers
    /// can react to a redirect.
    pub fn request_view(&mut self, plan: PlanTier, view: View) -> ViewDecision {
        let decision = gate(plan, view);
        self.view = decision.target();
        if let ViewDecision::Redirected { requested } = decision {
            leptos::logging::log!("ui: {} denied on {} plan", requested.slug(), plan.slug());
            self.push_error("Premium Feature", "This feature requires a Pro or Enterprise plan.");
        }
        decision
    }

    /// Queue a toast; returns its id for dismissal.
    pub fn push_toast(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title.into(), description.into(), ToastVariant::Default)
    }

    pub fn push_error(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title.into(), description.into(), ToastVariant::Destructive)
    }

    /// Destructive toast for a failed call.
    pub fn push_failure(&mut self, err: &ApiError) -> u64 {
        let (title, description) = err.notice();
        leptos::logging::warn!("{title}: {description}");
        self.push_error(title, description)
    }

    fn push(&mut self, title: String, description: String, variant: ToastVariant) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast { id, title, description, variant });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Back to the landing view with dialogs closed, as after sign-out.
    pub fn reset(&mut self) {
        self.view = View::Dashboard;
        self.profile_open = false;
        self.notifications_open = false;
    }
}
