//! Shared constants for the storyboard crate.

// ── Mocked latency ──────────────────────────────────────────────

/// Simulated round trip for email/password login.
pub const LOGIN_LATENCY_MS: u64 = 1500;

/// Simulated round trip for account creation.
pub const SIGNUP_LATENCY_MS: u64 = 2000;

/// Simulated round trip for a password reset request.
pub const RESET_LATENCY_MS: u64 = 1500;

/// Simulated OAuth redirect and callback.
pub const SOCIAL_LOGIN_LATENCY_MS: u64 = 2000;

/// Simulated platform biometric prompt.
pub const BIOMETRIC_LATENCY_MS: u64 = 1500;

/// Simulated AI storyboard generation.
pub const GENERATE_LATENCY_MS: u64 = 2000;

/// Simulated export preparation.
pub const EXPORT_LATENCY_MS: u64 = 1500;

/// Simulated payment processing for a plan change.
pub const UPGRADE_LATENCY_MS: u64 = 2000;

/// Simulated invitation email dispatch.
pub const INVITE_LATENCY_MS: u64 = 1000;

/// Simulated handshake for integrations without a setup step.
pub const CONNECT_LATENCY_MS: u64 = 1000;

/// Simulated profile save.
pub const PROFILE_LATENCY_MS: u64 = 1000;

// ── Simulated probabilities ─────────────────────────────────────

/// Rolls at or below this value fail the mocked biometric check (90% success).
pub const BIOMETRIC_FAILURE_ROLL: f64 = 0.1;

/// Rolls above this value inject a realtime notification (5% per tick).
pub const REALTIME_NOTIFICATION_ROLL: f64 = 0.95;

/// Rolls above this value record one synthetic AI generation (10% per tick).
pub const USAGE_ACTIVITY_ROLL: f64 = 0.9;

// ── Background intervals ────────────────────────────────────────

/// Tick period of the notification center's realtime simulator.
pub const NOTIFICATION_TICK_MS: u64 = 5000;

/// Tick period of the usage tracker's activity simulator.
pub const USAGE_TICK_MS: u64 = 10_000;

/// How long a toast stays on screen before it is dismissed.
pub const TOAST_TTL_MS: u64 = 4000;

// ── Frames ──────────────────────────────────────────────────────

/// Default number of frames requested by the generator.
pub const DEFAULT_FRAME_COUNT: u32 = 3;

/// Upper bound on frames per generation for the free plan.
pub const FREE_MAX_FRAMES: u32 = 5;

/// Upper bound on frames per generation for paid plans.
pub const PAID_MAX_FRAMES: u32 = 15;

/// Caption given to frames that have not been written yet.
pub const BLANK_CAPTION: &str = "Add a caption for this scene";

// ── Validation ──────────────────────────────────────────────────

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Exact number of digits in a fallback passcode.
pub const PASSCODE_LEN: usize = 6;

// ── Storage ─────────────────────────────────────────────────────

/// Key prefix for social-login user records in browser storage.
pub const USER_STORAGE_PREFIX: &str = "user_";

/// Browser storage key for the dark mode preference.
pub const DARK_MODE_STORAGE_KEY: &str = "storyvision_dark";

// ── Links ───────────────────────────────────────────────────────

/// Base URL for dashboard share links.
pub const SHARE_BASE_URL: &str = "https://storyvision.ai/share";

/// Base URL for links created from inside the editor.
pub const EDITOR_SHARE_BASE_URL: &str = "https://storyboard.ai/share";

/// Base URL for mocked export downloads.
pub const EXPORT_BASE_URL: &str = "https://storyvision.ai/exports";
