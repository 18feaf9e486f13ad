//! The signed-in user record.
//!
//! The same struct is what gets persisted under `user_<email>` by the social
//! login flow, so field names serialize in camelCase.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

use crate::generate::StylePreset;
use crate::plan::PlanTier;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.slug() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub default_style: StylePreset,
    pub theme: Theme,
    pub auto_save: bool,
    pub notifications: bool,
    #[serde(default)]
    pub biometric_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_style: StylePreset::Cinematic,
            theme: Theme::Light,
            auto_save: true,
            notifications: true,
            biometric_enabled: false,
        }
    }
}

/// Lifetime counters carried on the user record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCounters {
    pub storyboards: u64,
    pub ai_generations: u64,
    pub team_members: u64,
}

/// Identity providers offered on the login screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,
    Github,
    Twitter,
    Apple,
}

/// What a provider hands back after the simulated OAuth redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderIdentity {
    pub id: String,
    pub email: &'static str,
    pub name: &'static str,
    pub avatar: String,
}

impl AuthProvider {
    pub const ALL: [AuthProvider; 4] =
        [AuthProvider::Google, AuthProvider::Github, AuthProvider::Twitter, AuthProvider::Apple];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::Apple => "apple",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Github => "GitHub",
            Self::Twitter => "Twitter",
            Self::Apple => "Apple",
        }
    }

    /// The fixed account each provider resolves to.
    #[must_use]
    pub fn identity(self, now_ms: i64) -> ProviderIdentity {
        let (email, name, initials) = match self {
            Self::Google => ("user@gmail.com", "Google User", "GU"),
            Self::Github => ("user@github.com", "GitHub User", "GH"),
            Self::Twitter => ("user@twitter.com", "Twitter User", "TU"),
            Self::Apple => ("user@icloud.com", "Apple User", "AU"),
        };
        ProviderIdentity { id: format!("{}_{now_ms}", self.slug()), email, name, avatar: avatar_for(initials) }
    }
}

/// Placeholder avatar rendering the given initials.
#[must_use]
pub fn avatar_for(initials: &str) -> String {
    format!("/placeholder.svg?height=40&width=40&text={initials}")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[serde(default)]
    pub provider: Option<AuthProvider>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub plan: PlanTier,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub usage: UsageCounters,
    pub created_at_ms: i64,
    #[serde(default)]
    pub last_login_ms: Option<i64>,
}

impl User {
    /// Account returned by the mocked email/password login.
    #[must_use]
    pub fn mock_login(email: &str, now_ms: i64) -> Self {
        Self {
            id: "user-123".to_owned(),
            name: "Creative User".to_owned(),
            email: email.to_owned(),
            avatar: avatar_for("CU"),
            provider: None,
            verified: false,
            plan: PlanTier::Free,
            preferences: Preferences::default(),
            usage: UsageCounters::default(),
            created_at_ms: now_ms,
            last_login_ms: Some(now_ms),
        }
    }

    /// Account created by the signup form.
    #[must_use]
    pub fn registered(name: &str, email: &str, style: StylePreset, now_ms: i64) -> Self {
        let initial: String = name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default();
        Self {
            id: format!("user-{now_ms}"),
            name: name.to_owned(),
            email: email.to_owned(),
            avatar: avatar_for(&initial),
            provider: None,
            verified: false,
            plan: PlanTier::Free,
            preferences: Preferences { default_style: style, ..Preferences::default() },
            usage: UsageCounters::default(),
            created_at_ms: now_ms,
            last_login_ms: Some(now_ms),
        }
    }

    /// First-time account for a social identity: free plan, zeroed counters.
    #[must_use]
    pub fn from_identity(provider: AuthProvider, identity: ProviderIdentity, now_ms: i64) -> Self {
        Self {
            id: identity.id,
            name: identity.name.to_owned(),
            email: identity.email.to_owned(),
            avatar: identity.avatar,
            provider: Some(provider),
            verified: true,
            plan: PlanTier::Free,
            preferences: Preferences::default(),
            usage: UsageCounters::default(),
            created_at_ms: now_ms,
            last_login_ms: Some(now_ms),
        }
    }

    /// Initials shown in the avatar fallback, at most two letters.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn apply_profile(&mut self, update: &ProfileUpdate) {
        update.name.trim().clone_into(&mut self.name);
        update.email.trim().clone_into(&mut self.email);
        self.preferences = update.preferences.clone();
    }
}

/// Edits from the profile dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
}

impl ProfileUpdate {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self { name: user.name.clone(), email: user.email.clone(), preferences: user.preferences.clone() }
    }
}
