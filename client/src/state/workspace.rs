//! Every per-user context bundled together.
//!
//! Signing out reseeds all of them at once so nothing from one account's
//! session (usage counters, read notifications, invites, connections, a
//! pending upgrade) is visible to the next account signed in on the tab.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use leptos::prelude::*;

use super::editor::EditorState;
use super::integrations::IntegrationState;
use super::notifications::NotificationState;
use super::session::SessionState;
use super::subscription::SubscriptionState;
use super::team::TeamState;
use super::ui::UiState;
use super::usage::UsageState;

/// Storyboard the collaboration panel is attached to.
pub const ACTIVE_STORYBOARD: &str = "sb-1";

#[derive(Clone, Copy)]
pub struct Workspace {
    pub session: RwSignal<SessionState>,
    pub ui: RwSignal<UiState>,
    pub editor: RwSignal<EditorState>,
    pub notifications: RwSignal<NotificationState>,
    pub usage: RwSignal<UsageState>,
    pub team: RwSignal<TeamState>,
    pub integrations: RwSignal<IntegrationState>,
    pub subscription: RwSignal<SubscriptionState>,
}

impl Workspace {
    /// Fresh signed-out state.
    #[must_use]
    pub fn new(now_ms: i64, dark_mode: bool) -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            ui: RwSignal::new(UiState::with_dark(dark_mode)),
            editor: RwSignal::new(EditorState::default()),
            notifications: RwSignal::new(NotificationState::seeded(now_ms)),
            usage: RwSignal::new(UsageState::default()),
            team: RwSignal::new(TeamState::seeded(ACTIVE_STORYBOARD, now_ms)),
            integrations: RwSignal::new(IntegrationState::default()),
            subscription: RwSignal::new(SubscriptionState::default()),
        }
    }

    /// Provide each signal as its own context.
    pub fn provide(self) {
        provide_context(self.session);
        provide_context(self.ui);
        provide_context(self.editor);
        provide_context(self.notifications);
        provide_context(self.usage);
        provide_context(self.team);
        provide_context(self.integrations);
        provide_context(self.subscription);
    }

    /// Collect the contexts installed by [`Workspace::provide`].
    #[must_use]
    pub fn expect() -> Self {
        Self {
            session: expect_context(),
            ui: expect_context(),
            editor: expect_context(),
            notifications: expect_context(),
            usage: expect_context(),
            team: expect_context(),
            integrations: expect_context(),
            subscription: expect_context(),
        }
    }

    /// Clear the user and reseed every per-user panel. The frame list is
    /// emptied; the theme and queued toasts are kept.
    pub fn sign_out(self, now_ms: i64) {
        self.session.update(SessionState::sign_out);
        self.editor.update(|e| {
            *e = EditorState::default();
            e.frames.clear();
        });
        self.notifications.set(NotificationState::seeded(now_ms));
        self.usage.set(UsageState::default());
        self.team.set(TeamState::seeded(ACTIVE_STORYBOARD, now_ms));
        self.integrations.set(IntegrationState::default());
        self.subscription.set(SubscriptionState::default());
        self.ui.update(UiState::reset);
        leptos::logging::log!("workspace: signed out, panels reseeded");
    }
}
