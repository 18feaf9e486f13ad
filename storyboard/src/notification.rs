//! Notification feed.
//!
//! Timestamps are stored as epoch milliseconds and rendered relative to the
//! caller's clock. The feed is newest first: the real-time generator
//! prepends.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::REALTIME_NOTIFICATION_ROLL;
use crate::plan::PlanTier;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Collaboration,
    System,
    Billing,
    Feature,
    Security,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 5] = [
        NotificationKind::Collaboration,
        NotificationKind::System,
        NotificationKind::Billing,
        NotificationKind::Feature,
        NotificationKind::Security,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Collaboration => "collaboration",
            Self::System => "system",
            Self::Billing => "billing",
            Self::Feature => "feature",
            Self::Security => "security",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// What a notification points at, when anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NotificationTarget {
    Storyboard { storyboard_id: String, frame_id: Option<String> },
    Invitation { storyboard_id: String, inviter_id: String },
    Download { storyboard_id: String, url: String },
    Usage { used: u64, limit: u64, plan: PlanTier },
    Feature { slug: String },
    Device { device: String, location: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at_ms: i64,
    pub read: bool,
    pub actionable: bool,
    pub priority: Priority,
    pub target: Option<NotificationTarget>,
}

/// Filter tabs in the notification panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationTab {
    #[default]
    All,
    Unread,
    Kind(NotificationKind),
}

impl NotificationTab {
    #[must_use]
    pub fn matches(self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.read,
            Self::Kind(kind) => notification.kind == kind,
        }
    }
}

/// Follow-up triggered by a notification's "View" button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationAction {
    OpenStoryboard(String),
    Download(String),
    OpenSubscription,
    None,
}

impl NotificationAction {
    /// Toast title and description announcing the action.
    #[must_use]
    pub fn notice(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::OpenStoryboard(_) => Some(("Opening Storyboard", "Navigating to the storyboard...")),
            Self::Download(_) => Some(("Download Started", "Your file download has started.")),
            Self::OpenSubscription => Some(("Opening Subscription", "Redirecting to subscription management...")),
            Self::None => None,
        }
    }
}

#[must_use]
pub fn action_for(notification: &Notification) -> NotificationAction {
    match (notification.kind, &notification.target) {
        (
            NotificationKind::Collaboration,
            Some(
                NotificationTarget::Storyboard { storyboard_id, .. }
                | NotificationTarget::Invitation { storyboard_id, .. },
            ),
        ) => NotificationAction::OpenStoryboard(storyboard_id.clone()),
        (NotificationKind::System, Some(NotificationTarget::Download { url, .. })) => {
            NotificationAction::Download(url.clone())
        }
        (NotificationKind::Billing, _) => NotificationAction::OpenSubscription,
        _ => NotificationAction::None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    created_at_ms: i64,
    read: bool,
    actionable: bool,
    priority: Priority,
    target: NotificationTarget,
) -> Notification {
    Notification {
        id: id.to_owned(),
        kind,
        title: title.to_owned(),
        message: message.to_owned(),
        created_at_ms,
        read,
        actionable,
        priority,
        target: Some(target),
    }
}

impl NotificationFeed {
    /// The six notifications a fresh session starts with, aged relative to `now_ms`.
    #[must_use]
    pub fn seed(now_ms: i64) -> Self {
        use NotificationKind::{Billing, Collaboration, Feature, Security, System};
        let items = vec![
            seeded(
                "notif-1",
                Collaboration,
                "New Comment on Blue Horizon",
                "Sarah Miller commented on Frame 3: 'The lighting looks perfect here!'",
                now_ms - 2 * MINUTE_MS,
                false,
                true,
                Priority::Medium,
                NotificationTarget::Storyboard { storyboard_id: "sb-1".into(), frame_id: Some("frame-3".into()) },
            ),
            seeded(
                "notif-2",
                System,
                "Storyboard Export Complete",
                "Your 'Product Launch Story' has been exported successfully.",
                now_ms - HOUR_MS,
                false,
                true,
                Priority::Low,
                NotificationTarget::Download {
                    storyboard_id: "sb-2".into(),
                    url: "https://example.com/download".into(),
                },
            ),
            seeded(
                "notif-3",
                Billing,
                "Usage Limit Warning",
                "You've used 8/10 storyboards this month. Consider upgrading to Pro.",
                now_ms - 3 * HOUR_MS,
                true,
                true,
                Priority::High,
                NotificationTarget::Usage { used: 8, limit: 10, plan: PlanTier::Free },
            ),
            seeded(
                "notif-4",
                Collaboration,
                "Team Invitation",
                "John Davis invited you to collaborate on 'Customer Journey Map'",
                now_ms - DAY_MS,
                false,
                true,
                Priority::Medium,
                NotificationTarget::Invitation { storyboard_id: "sb-3".into(), inviter_id: "user-2".into() },
            ),
            seeded(
                "notif-5",
                Feature,
                "New Feature: AI Voice Narration",
                "Generate voice narration for your storyboards with our new AI feature!",
                now_ms - 2 * DAY_MS,
                true,
                false,
                Priority::Low,
                NotificationTarget::Feature { slug: "ai-voice-narration".into() },
            ),
            seeded(
                "notif-6",
                Security,
                "New Login Detected",
                "We detected a new login from Chrome on Windows. Was this you?",
                now_ms - 3 * DAY_MS,
                true,
                true,
                Priority::High,
                NotificationTarget::Device { device: "Chrome on Windows".into(), location: "New York, US".into() },
            ),
        ];
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    #[must_use]
    pub fn filtered(&self, tab: NotificationTab) -> Vec<&Notification> {
        self.items.iter().filter(|n| tab.matches(n)).collect()
    }

    /// Returns whether the notification existed and was unread.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn dismiss(&mut self, id: &str) -> Option<Notification> {
        let index = self.items.iter().position(|n| n.id == id)?;
        Some(self.items.remove(index))
    }

    /// Resolve a notification's action and mark it read.
    pub fn take_action(&mut self, id: &str) -> Option<NotificationAction> {
        let action = action_for(self.get(id)?);
        self.mark_read(id);
        Some(action)
    }

    /// Simulated push: prepends a collaboration update when `roll` clears the
    /// threshold. Returns whether one was added.
    pub fn inject_realtime(&mut self, roll: f64, now_ms: i64) -> bool {
        if roll <= REALTIME_NOTIFICATION_ROLL {
            return false;
        }
        let notification = Notification {
            id: format!("notif-{}", Uuid::new_v4()),
            kind: NotificationKind::Collaboration,
            title: "Real-time Update".to_owned(),
            message: "Someone just made changes to your storyboard!".to_owned(),
            created_at_ms: now_ms,
            read: false,
            actionable: true,
            priority: Priority::Medium,
            target: None,
        };
        self.items.insert(0, notification);
        true
    }
}

/// Delivery toggles from the notification settings dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub collaboration: bool,
    pub system: bool,
    pub billing: bool,
    pub feature: bool,
    pub security: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { email: true, push: true, collaboration: true, system: true, billing: true, feature: false, security: true }
    }
}

impl NotificationSettings {
    #[must_use]
    pub fn allows(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Collaboration => self.collaboration,
            NotificationKind::System => self.system,
            NotificationKind::Billing => self.billing,
            NotificationKind::Feature => self.feature,
            NotificationKind::Security => self.security,
        }
    }

    pub fn set(&mut self, kind: NotificationKind, enabled: bool) {
        let slot = match kind {
            NotificationKind::Collaboration => &mut self.collaboration,
            NotificationKind::System => &mut self.system,
            NotificationKind::Billing => &mut self.billing,
            NotificationKind::Feature => &mut self.feature,
            NotificationKind::Security => &mut self.security,
        };
        *slot = enabled;
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {unit} ago") } else { format!("{n} {unit}s ago") }
}

/// Human label for an age, e.g. "Just now", "2 minutes ago", "1 day ago".
#[must_use]
pub fn relative_label(created_at_ms: i64, now_ms: i64) -> String {
    let age = now_ms.saturating_sub(created_at_ms);
    if age < MINUTE_MS {
        "Just now".to_owned()
    } else if age < HOUR_MS {
        plural(age / MINUTE_MS, "minute")
    } else if age < DAY_MS {
        plural(age / HOUR_MS, "hour")
    } else {
        plural(age / DAY_MS, "day")
    }
}
