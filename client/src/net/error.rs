//! Errors surfaced by the mocked API, each mapped to a toast.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use storyboard::generate::GenerateError;
use storyboard::plan::PlanTier;
use storyboard::validate::ValidationError;

use crate::util::storage::StorageError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("Biometric authentication failed. Please try passcode.")]
    BiometricFailed,
    #[error("You are already on the {} plan.", .0.label())]
    SamePlan(PlanTier),
    #[error("Add at least one frame before exporting.")]
    EmptyExport,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Toast heading; the `Display` text is the description.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.title(),
            Self::Generate(e) => e.title(),
            Self::BiometricFailed => "Authentication Failed",
            Self::SamePlan(_) => "Current Plan",
            Self::EmptyExport => "Nothing to Export",
            Self::Storage(_) => "Storage Error",
        }
    }

    #[must_use]
    pub fn notice(&self) -> (&'static str, String) {
        (self.title(), self.to_string())
    }
}
