//! Third-party integrations catalog and the user's connections.

#[cfg(test)]
#[path = "integration_test.rs"]
mod integration_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::plan::PlanTier;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Storage,
    Communication,
    Design,
    Video,
    Productivity,
    Automation,
    Developer,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Storage,
        Category::Communication,
        Category::Design,
        Category::Video,
        Category::Productivity,
        Category::Automation,
        Category::Developer,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Storage => "Cloud Storage",
            Self::Communication => "Communication",
            Self::Design => "Design Tools",
            Self::Video => "Video Platforms",
            Self::Productivity => "Productivity",
            Self::Automation => "Automation",
            Self::Developer => "Developer Tools",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Integration {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub premium: bool,
    pub features: [&'static str; 3],
    pub setup_required: bool,
}

const CATALOG: [Integration; 10] = [
    Integration {
        id: "google-drive",
        name: "Google Drive",
        description: "Store and sync your storyboards with Google Drive",
        category: Category::Storage,
        premium: false,
        features: ["Auto-sync", "Backup", "File sharing"],
        setup_required: true,
    },
    Integration {
        id: "dropbox",
        name: "Dropbox",
        description: "Backup and share storyboards via Dropbox",
        category: Category::Storage,
        premium: false,
        features: ["Cloud storage", "Team folders", "Version history"],
        setup_required: false,
    },
    Integration {
        id: "slack",
        name: "Slack",
        description: "Share storyboards and get notifications in Slack",
        category: Category::Communication,
        premium: false,
        features: ["Instant sharing", "Team notifications", "Progress updates"],
        setup_required: true,
    },
    Integration {
        id: "figma",
        name: "Figma",
        description: "Import designs and export storyboards to Figma",
        category: Category::Design,
        premium: true,
        features: ["Design import", "Asset sync", "Collaborative editing"],
        setup_required: true,
    },
    Integration {
        id: "adobe-creative",
        name: "Adobe Creative Suite",
        description: "Seamless integration with Photoshop, Illustrator, and After Effects",
        category: Category::Design,
        premium: true,
        features: ["Asset import", "Layer sync", "Creative Cloud libraries"],
        setup_required: true,
    },
    Integration {
        id: "youtube",
        name: "YouTube",
        description: "Export storyboards as video content for YouTube",
        category: Category::Video,
        premium: false,
        features: ["Video export", "Thumbnail generation", "Direct upload"],
        setup_required: true,
    },
    Integration {
        id: "vimeo",
        name: "Vimeo",
        description: "Professional video hosting and sharing",
        category: Category::Video,
        premium: true,
        features: ["HD export", "Privacy controls", "Analytics"],
        setup_required: true,
    },
    Integration {
        id: "notion",
        name: "Notion",
        description: "Embed storyboards in your Notion workspace",
        category: Category::Productivity,
        premium: false,
        features: ["Embed widgets", "Database sync", "Team collaboration"],
        setup_required: false,
    },
    Integration {
        id: "zapier",
        name: "Zapier",
        description: "Automate workflows with 5000+ apps",
        category: Category::Automation,
        premium: true,
        features: ["Custom workflows", "Trigger actions", "Multi-app automation"],
        setup_required: true,
    },
    Integration {
        id: "webhooks",
        name: "Custom Webhooks",
        description: "Build custom integrations with webhooks",
        category: Category::Developer,
        premium: true,
        features: ["Real-time events", "Custom endpoints", "API access"],
        setup_required: true,
    },
];

#[must_use]
pub fn catalog() -> &'static [Integration] {
    &CATALOG
}

#[must_use]
pub fn find(id: &str) -> Option<&'static Integration> {
    CATALOG.iter().find(|i| i.id == id)
}

/// Next step after the user clicks "Connect".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectPlan {
    /// No configuration; connect after the simulated round trip.
    Immediate(&'static Integration),
    /// Show the setup dialog first.
    NeedsSetup(&'static Integration),
}

impl ConnectPlan {
    #[must_use]
    pub fn integration(self) -> &'static Integration {
        match self {
            Self::Immediate(i) | Self::NeedsSetup(i) => i,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntegrationError {
    #[error("No integration named {0}.")]
    Unknown(String),
    #[error("This integration requires a Pro or Enterprise plan.")]
    PremiumRequired,
    #[error("{0} is already connected.")]
    AlreadyConnected(&'static str),
}

impl IntegrationError {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "Unknown Integration",
            Self::PremiumRequired => "Premium Feature",
            Self::AlreadyConnected(_) => "Already Connected",
        }
    }
}

/// The set of connected integration ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationHub {
    connected: BTreeSet<String>,
}

impl Default for IntegrationHub {
    fn default() -> Self {
        Self::seed()
    }
}

impl IntegrationHub {
    /// Dropbox and Notion start connected.
    #[must_use]
    pub fn seed() -> Self {
        Self { connected: ["dropbox", "notion"].into_iter().map(str::to_owned).collect() }
    }

    #[must_use]
    pub fn is_connected(&self, id: &str) -> bool {
        self.connected.contains(id)
    }

    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.connected.len()
    }

    /// Catalog entries in one category, or all of them.
    #[must_use]
    pub fn filtered(category: Option<Category>) -> Vec<&'static Integration> {
        CATALOG.iter().filter(|i| category.is_none_or(|c| i.category == c)).collect()
    }

    /// Decide how a connect request proceeds without changing anything.
    ///
    /// # Errors
    ///
    /// Unknown id, premium entry on a plan without premium integrations, or
    /// an integration that is already connected.
    pub fn begin_connect(&self, id: &str, plan: PlanTier) -> Result<ConnectPlan, IntegrationError> {
        let integration = find(id).ok_or_else(|| IntegrationError::Unknown(id.to_owned()))?;
        if integration.premium && !plan.includes_premium_integrations() {
            return Err(IntegrationError::PremiumRequired);
        }
        if self.is_connected(id) {
            return Err(IntegrationError::AlreadyConnected(integration.name));
        }
        Ok(if integration.setup_required {
            ConnectPlan::NeedsSetup(integration)
        } else {
            ConnectPlan::Immediate(integration)
        })
    }

    /// Returns false if it was already connected.
    pub fn mark_connected(&mut self, integration: &Integration) -> bool {
        self.connected.insert(integration.id.to_owned())
    }

    pub fn disconnect(&mut self, id: &str) -> bool {
        self.connected.remove(id)
    }
}
