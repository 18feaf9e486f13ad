//! Plan tiers and the view gate.
//!
//! The capability table is static: a tier maps to the set of views it may
//! open, and any request outside that set is redirected to the subscription
//! view. There is no negotiation and no server round trip.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use serde::{Deserialize, Serialize};

use crate::consts::{FREE_MAX_FRAMES, PAID_MAX_FRAMES};

/// Subscription tier of the session user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
    Enterprise,
}

/// Top-level screens of the signed-in application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Generator,
    Collaboration,
    Integrations,
    Subscription,
    Usage,
    Settings,
}

const FREE_VIEWS: &[View] = &[
    View::Dashboard,
    View::Generator,
    View::Integrations,
    View::Subscription,
    View::Settings,
];

const PAID_VIEWS: &[View] = &[
    View::Dashboard,
    View::Generator,
    View::Collaboration,
    View::Integrations,
    View::Subscription,
    View::Usage,
    View::Settings,
];

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Free, PlanTier::Pro, PlanTier::Enterprise];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.slug() == raw)
    }

    /// Views reachable on this tier.
    #[must_use]
    pub fn permitted_views(self) -> &'static [View] {
        match self {
            Self::Free => FREE_VIEWS,
            Self::Pro | Self::Enterprise => PAID_VIEWS,
        }
    }

    #[must_use]
    pub fn permits(self, view: View) -> bool {
        self.permitted_views().contains(&view)
    }

    /// Largest frame count a single generation may request.
    #[must_use]
    pub fn max_frames(self) -> u32 {
        match self {
            Self::Free => FREE_MAX_FRAMES,
            Self::Pro | Self::Enterprise => PAID_MAX_FRAMES,
        }
    }

    /// Whether premium integrations may be connected on this tier.
    #[must_use]
    pub fn includes_premium_integrations(self) -> bool {
        !matches!(self, Self::Free)
    }
}

impl View {
    pub const ALL: [View; 7] = [
        View::Dashboard,
        View::Generator,
        View::Collaboration,
        View::Integrations,
        View::Subscription,
        View::Usage,
        View::Settings,
    ];

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Generator => "Create",
            Self::Collaboration => "Collaborate",
            Self::Integrations => "Integrations",
            Self::Subscription => "Upgrade",
            Self::Usage => "Usage",
            Self::Settings => "Settings",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Generator => "generator",
            Self::Collaboration => "collaboration",
            Self::Integrations => "integrations",
            Self::Subscription => "subscription",
            Self::Usage => "usage",
            Self::Settings => "settings",
        }
    }
}

/// Outcome of asking to switch to a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewDecision {
    /// The requested view may be shown.
    Granted(View),
    /// The plan does not include `requested`; the subscription view is shown
    /// instead.
    Redirected { requested: View },
}

impl ViewDecision {
    /// The view that ends up on screen.
    #[must_use]
    pub fn target(self) -> View {
        match self {
            Self::Granted(view) => view,
            Self::Redirected { .. } => View::Subscription,
        }
    }

    #[must_use]
    pub fn is_redirect(self) -> bool {
        matches!(self, Self::Redirected { .. })
    }
}

/// Resolve a view request against the capability table.
#[must_use]
pub fn gate(plan: PlanTier, view: View) -> ViewDecision {
    if plan.permits(view) {
        ViewDecision::Granted(view)
    } else {
        ViewDecision::Redirected { requested: view }
    }
}
