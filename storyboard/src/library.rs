//! Dashboard library: the user's storyboards, aggregate analytics, and
//! share links.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use serde::{Deserialize, Serialize};

use crate::consts::{EDITOR_SHARE_BASE_URL, EXPORT_BASE_URL, SHARE_BASE_URL};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoryboardStatus {
    Completed,
    Draft,
    InReview,
}

impl StoryboardStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Draft => "draft",
            Self::InReview => "in-review",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryboardSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub frames: u32,
    /// ISO-8601 calendar dates.
    pub created_on: &'static str,
    pub updated_on: &'static str,
    pub status: StoryboardStatus,
    pub views: u64,
    pub shares: u64,
    pub collaborators: u32,
    pub public: bool,
}

impl StoryboardSummary {
    #[must_use]
    pub fn thumbnail(&self) -> String {
        let label = self.title.split_whitespace().take(2).collect::<Vec<_>>().join("+");
        format!("/placeholder.svg?height=120&width=160&text={label}")
    }
}

#[must_use]
pub fn library() -> Vec<StoryboardSummary> {
    vec![
        StoryboardSummary {
            id: "sb-1",
            title: "Blue Horizon Campaign",
            description: "Data solutions marketing storyboard",
            frames: 6,
            created_on: "2024-01-15",
            updated_on: "2024-01-16",
            status: StoryboardStatus::Completed,
            views: 245,
            shares: 12,
            collaborators: 3,
            public: true,
        },
        StoryboardSummary {
            id: "sb-2",
            title: "Product Launch Story",
            description: "New product introduction sequence",
            frames: 8,
            created_on: "2024-01-10",
            updated_on: "2024-01-14",
            status: StoryboardStatus::Draft,
            views: 89,
            shares: 3,
            collaborators: 1,
            public: false,
        },
        StoryboardSummary {
            id: "sb-3",
            title: "Customer Journey Map",
            description: "User experience visualization",
            frames: 12,
            created_on: "2024-01-08",
            updated_on: "2024-01-12",
            status: StoryboardStatus::InReview,
            views: 156,
            shares: 8,
            collaborators: 5,
            public: true,
        },
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analytics {
    pub total_storyboards: u32,
    pub total_views: u64,
    pub total_shares: u64,
    pub total_collaborators: u32,
    pub monthly_growth_percent: u32,
    pub popular_storyboard: &'static str,
}

impl Analytics {
    #[must_use]
    pub fn seed() -> Self {
        Self {
            total_storyboards: 15,
            total_views: 1247,
            total_shares: 89,
            total_collaborators: 12,
            monthly_growth_percent: 23,
            popular_storyboard: "Blue Horizon Campaign",
        }
    }
}

/// Public link for a library storyboard.
#[must_use]
pub fn share_link(storyboard_id: &str) -> String {
    format!("{SHARE_BASE_URL}/{storyboard_id}")
}

/// Link copied from the editor's share button.
#[must_use]
pub fn editor_share_link(token: &str) -> String {
    format!("{EDITOR_SHARE_BASE_URL}/{token}")
}

#[must_use]
pub fn export_link(token: &str) -> String {
    format!("{EXPORT_BASE_URL}/{token}.pdf")
}

/// Thousands separators for dashboard counters: `1247` renders `1,247`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
