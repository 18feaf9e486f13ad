//! Notification center state.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use storyboard::notification::{NotificationAction, NotificationFeed, NotificationKind, NotificationSettings, NotificationTab};

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub feed: NotificationFeed,
    pub tab: NotificationTab,
    pub settings: NotificationSettings,
    pub settings_open: bool,
}

impl NotificationState {
    #[must_use]
    pub fn seeded(now_ms: i64) -> Self {
        Self { feed: NotificationFeed::seed(now_ms), ..Self::default() }
    }

    /// One realtime tick. Muted collaboration alerts suppress injection.
    pub fn tick(&mut self, roll: f64, now_ms: i64) -> bool {
        if !self.settings.allows(NotificationKind::Collaboration) {
            return false;
        }
        self.feed.inject_realtime(roll, now_ms)
    }

    pub fn activate(&mut self, id: &str) -> Option<NotificationAction> {
        self.feed.take_action(id)
    }
}
