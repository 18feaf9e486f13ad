//! Storyboard generation requests.
//!
//! Validation runs before any simulated latency so a rejected prompt never
//! touches the current frame list. Minting is deterministic apart from the
//! frame ids.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BLANK_CAPTION, DEFAULT_FRAME_COUNT};
use crate::frame::{Frame, FrameId, placeholder_image};
use crate::plan::PlanTier;
use crate::usage::Quota;

/// Visual style applied to a generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    #[default]
    Cinematic,
    Anime,
    Comic,
    Realistic,
    Fantasy,
    Noir,
}

impl StylePreset {
    pub const ALL: [StylePreset; 6] = [
        StylePreset::Cinematic,
        StylePreset::Anime,
        StylePreset::Comic,
        StylePreset::Realistic,
        StylePreset::Fantasy,
        StylePreset::Noir,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Cinematic => "cinematic",
            Self::Anime => "anime",
            Self::Comic => "comic",
            Self::Realistic => "realistic",
            Self::Fantasy => "fantasy",
            Self::Noir => "noir",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cinematic => "Cinematic",
            Self::Anime => "Anime",
            Self::Comic => "Comic",
            Self::Realistic => "Realistic",
            Self::Fantasy => "Fantasy",
            Self::Noir => "Noir",
        }
    }

    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.slug() == raw)
    }
}

/// Reasons a generation request is rejected before it starts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("Please enter a story prompt to generate a storyboard.")]
    EmptyPrompt,
    #[error("You've reached your monthly limit. Upgrade to continue creating.")]
    UsageLimitReached,
}

impl GenerateError {
    /// Short heading for the rejection notice.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::EmptyPrompt => "Empty Prompt",
            Self::UsageLimitReached => "Usage Limit Reached",
        }
    }
}

/// Generator form input as the user left it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub count: u32,
    pub style: StylePreset,
    pub auto_caption: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            count: DEFAULT_FRAME_COUNT,
            style: StylePreset::default(),
            auto_caption: true,
        }
    }
}

/// A request that passed validation. Only constructible through
/// [`GenerationRequest::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidGeneration {
    prompt: String,
    count: u32,
    style: StylePreset,
    auto_caption: bool,
}

impl ValidGeneration {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn style(&self) -> StylePreset {
        self.style
    }
}

impl GenerationRequest {
    /// Check the request against the session's plan and storyboard quota.
    ///
    /// The prompt is checked first, so an empty prompt is always reported as
    /// such. The frame count is clamped into `1..=plan.max_frames()`.
    ///
    /// # Errors
    ///
    /// [`GenerateError::EmptyPrompt`] for a blank prompt;
    /// [`GenerateError::UsageLimitReached`] when a free plan has used up its
    /// storyboard quota.
    pub fn validate(&self, plan: PlanTier, storyboards: &Quota) -> Result<ValidGeneration, GenerateError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(GenerateError::EmptyPrompt);
        }
        if plan == PlanTier::Free && storyboards.is_exhausted() {
            return Err(GenerateError::UsageLimitReached);
        }
        Ok(ValidGeneration {
            prompt: prompt.to_owned(),
            count: self.count.clamp(1, plan.max_frames()),
            style: self.style,
            auto_caption: self.auto_caption,
        })
    }
}

/// Fabricate the frames for a validated request: exactly `count` frames, each
/// with a freshly minted id.
#[must_use]
pub fn mint_frames(request: &ValidGeneration) -> Vec<Frame> {
    (1..=request.count)
        .map(|n| Frame {
            id: FrameId::mint(),
            image_url: placeholder_image(&format!("Frame {n}")),
            caption: if request.auto_caption {
                format!("Generated scene {n} based on \"{}\"", request.prompt)
            } else {
                BLANK_CAPTION.to_owned()
            },
        })
        .collect()
}
