//! Usage quotas and their warning thresholds.
//!
//! DESIGN
//! ======
//! Quotas are plain counters against an optional cap. Status is derived, never
//! stored, so the warning badges can't drift from the numbers they describe.

#[cfg(test)]
#[path = "usage_test.rs"]
mod usage_test;

use serde::{Deserialize, Serialize};

use crate::consts::USAGE_ACTIVITY_ROLL;
use crate::plan::PlanTier;

/// Cap on a quota.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Limit {
    Capped(u64),
    Unlimited,
}

/// Derived severity of a quota.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageStatus {
    Normal,
    /// At least 75% consumed.
    Warning,
    /// At least 90% consumed.
    Critical,
    /// Fully consumed.
    Exceeded,
    Unlimited,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub used: u64,
    pub limit: Limit,
}

impl Quota {
    #[must_use]
    pub const fn capped(used: u64, limit: u64) -> Self {
        Self { used, limit: Limit::Capped(limit) }
    }

    #[must_use]
    pub const fn unlimited(used: u64) -> Self {
        Self { used, limit: Limit::Unlimited }
    }

    /// Share of the cap consumed, in percent, clamped to 100. Unlimited
    /// quotas report 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        match self.limit {
            Limit::Unlimited => 0.0,
            Limit::Capped(0) => 100.0,
            Limit::Capped(limit) => (self.used as f64 / limit as f64 * 100.0).min(100.0),
        }
    }

    #[must_use]
    pub fn status(&self) -> UsageStatus {
        if self.limit == Limit::Unlimited {
            return UsageStatus::Unlimited;
        }
        let pct = self.percentage();
        if pct >= 100.0 {
            UsageStatus::Exceeded
        } else if pct >= 90.0 {
            UsageStatus::Critical
        } else if pct >= 75.0 {
            UsageStatus::Warning
        } else {
            UsageStatus::Normal
        }
    }

    /// True once a capped quota has no headroom left.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        match self.limit {
            Limit::Capped(limit) => self.used >= limit,
            Limit::Unlimited => false,
        }
    }

    /// Increment by one without passing the cap.
    fn bump_capped(&mut self) {
        self.used = match self.limit {
            Limit::Capped(limit) => (self.used + 1).min(limit),
            Limit::Unlimited => self.used + 1,
        };
    }
}

/// Tracked usage dimensions shown on the usage screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageItem {
    Storyboards,
    AiGenerations,
    TeamMembers,
    Exports,
}

impl UsageItem {
    pub const ALL: [UsageItem; 4] = [
        UsageItem::Storyboards,
        UsageItem::AiGenerations,
        UsageItem::TeamMembers,
        UsageItem::Exports,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Storyboards => "Storyboards Created",
            Self::AiGenerations => "AI Generations",
            Self::TeamMembers => "Team Members",
            Self::Exports => "Exports",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Storyboards => "Monthly storyboard creation limit",
            Self::AiGenerations => "AI-powered content generations",
            Self::TeamMembers => "Collaborative team size",
            Self::Exports => "Monthly export downloads",
        }
    }
}

/// Usage counters for the current billing period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLimits {
    pub storyboards: Quota,
    pub ai_generations: Quota,
    pub team_members: Quota,
    pub exports: Quota,
    /// Storage in megabytes.
    pub storage_mb: Quota,
}

impl Default for UsageLimits {
    fn default() -> Self {
        Self::for_plan(PlanTier::Free)
    }
}

impl UsageLimits {
    /// Mock usage figures for a tier.
    #[must_use]
    pub fn for_plan(plan: PlanTier) -> Self {
        match plan {
            PlanTier::Free => Self {
                storyboards: Quota::capped(3, 5),
                ai_generations: Quota::capped(45, 50),
                team_members: Quota::capped(1, 1),
                exports: Quota::capped(8, 10),
                storage_mb: Quota::capped(125, 500),
            },
            PlanTier::Pro => Self {
                storyboards: Quota::unlimited(23),
                ai_generations: Quota::capped(234, 500),
                team_members: Quota::capped(3, 5),
                exports: Quota::unlimited(45),
                storage_mb: Quota::capped(2340, 10_000),
            },
            PlanTier::Enterprise => Self {
                storyboards: Quota::unlimited(156),
                ai_generations: Quota::unlimited(1234),
                team_members: Quota::unlimited(12),
                exports: Quota::unlimited(234),
                storage_mb: Quota::capped(15_600, 100_000),
            },
        }
    }

    #[must_use]
    pub fn quota(&self, item: UsageItem) -> &Quota {
        match item {
            UsageItem::Storyboards => &self.storyboards,
            UsageItem::AiGenerations => &self.ai_generations,
            UsageItem::TeamMembers => &self.team_members,
            UsageItem::Exports => &self.exports,
        }
    }

    /// Items in the critical band (90% to just under 100%).
    #[must_use]
    pub fn critical(&self) -> Vec<UsageItem> {
        self.items_with(UsageStatus::Critical)
    }

    /// Items that have hit their cap.
    #[must_use]
    pub fn exceeded(&self) -> Vec<UsageItem> {
        self.items_with(UsageStatus::Exceeded)
    }

    fn items_with(&self, status: UsageStatus) -> Vec<UsageItem> {
        UsageItem::ALL
            .into_iter()
            .filter(|item| self.quota(*item).status() == status)
            .collect()
    }

    /// One tick of the background activity simulator. Records a synthetic AI
    /// generation when `roll` clears the threshold; never passes the cap.
    ///
    /// Returns true when a generation was recorded.
    pub fn simulate_activity(&mut self, roll: f64) -> bool {
        if roll <= USAGE_ACTIVITY_ROLL {
            return false;
        }
        self.ai_generations.bump_capped();
        true
    }

    /// Account for a completed storyboard generation of `frames` frames.
    pub fn record_generation(&mut self, frames: u32) {
        self.storyboards.used += 1;
        self.ai_generations.used += u64::from(frames);
    }

    pub fn record_export(&mut self) {
        self.exports.used += 1;
    }
}

/// Human-readable storage size; 1000 MB and above render in GB.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_storage(mb: u64) -> String {
    if mb >= 1000 {
        format!("{:.1} GB", mb as f64 / 1000.0)
    } else {
        format!("{mb} MB")
    }
}
