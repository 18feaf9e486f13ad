//! Mocked API calls.
//!
//! Each call validates synchronously and returns at once on failure, then
//! waits its fixed latency, then fabricates a result. There is no in-flight
//! tracking: overlapping calls complete independently and whichever result
//! the caller applies last wins.
//!
//! Clock readings and dice rolls are parameters so tests pin them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::logging::log;

use storyboard::consts::{
    BIOMETRIC_FAILURE_ROLL, BIOMETRIC_LATENCY_MS, CONNECT_LATENCY_MS, EXPORT_LATENCY_MS, GENERATE_LATENCY_MS,
    INVITE_LATENCY_MS, LOGIN_LATENCY_MS, PROFILE_LATENCY_MS, RESET_LATENCY_MS, SIGNUP_LATENCY_MS,
    SOCIAL_LOGIN_LATENCY_MS, UPGRADE_LATENCY_MS, USER_STORAGE_PREFIX,
};
use storyboard::frame::Frame;
use storyboard::generate::{ValidGeneration, mint_frames};
use storyboard::integration::Integration;
use storyboard::library::export_link;
use storyboard::plan::PlanTier;
use storyboard::team::Collaborator;
use storyboard::user::{AuthProvider, ProfileUpdate, User};
use storyboard::validate::{InviteForm, LoginForm, ResetForm, SignupForm, validate_passcode};

use super::error::ApiError;
use crate::util::storage::{KeyValueStore, load_json, save_json};
use crate::util::timer::sleep_ms;

/// Result of a social sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SocialOutcome {
    /// First visit: the account was created and persisted. Signs in at once.
    Created(User),
    /// Known account: must pass biometric or passcode before signing in.
    Returning(User),
}

/// Confirmation for a finished export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
    pub url: String,
    pub frame_count: usize,
}

/// Storage key for a social account's persisted record.
#[must_use]
pub fn user_storage_key(email: &str) -> String {
    format!("{USER_STORAGE_PREFIX}{email}")
}

/// Email/password sign-in.
///
/// # Errors
///
/// Form validation failures.
pub async fn login(form: &LoginForm, now_ms: i64) -> Result<User, ApiError> {
    form.validate()?;
    sleep_ms(LOGIN_LATENCY_MS).await;
    log!("api: login {}", form.email.trim());
    Ok(User::mock_login(form.email.trim(), now_ms))
}

/// # Errors
///
/// Form validation failures.
pub async fn signup(form: &SignupForm, now_ms: i64) -> Result<User, ApiError> {
    form.validate()?;
    sleep_ms(SIGNUP_LATENCY_MS).await;
    log!("api: signup {}", form.email.trim());
    Ok(User::registered(form.name.trim(), form.email.trim(), form.preferred_style, now_ms))
}

/// # Errors
///
/// Form validation failures.
pub async fn request_password_reset(form: &ResetForm) -> Result<(), ApiError> {
    form.validate()?;
    sleep_ms(RESET_LATENCY_MS).await;
    log!("api: reset link for {}", form.email.trim());
    Ok(())
}

/// Simulated OAuth round trip. The provider always resolves to its fixed
/// identity; the store decides whether that identity is new.
///
/// # Errors
///
/// Storage failures while looking up or persisting the account.
pub async fn social_login(provider: AuthProvider, store: &impl KeyValueStore, now_ms: i64) -> Result<SocialOutcome, ApiError> {
    sleep_ms(SOCIAL_LOGIN_LATENCY_MS).await;
    let identity = provider.identity(now_ms);
    let key = user_storage_key(identity.email);
    if let Some(mut existing) = load_json::<User>(store, &key)? {
        existing.last_login_ms = Some(now_ms);
        log!("api: social login {} returning", provider.slug());
        return Ok(SocialOutcome::Returning(existing));
    }
    let user = User::from_identity(provider, identity, now_ms);
    save_json(store, &key, &user)?;
    log!("api: social login {} created {}", provider.slug(), user.id);
    Ok(SocialOutcome::Created(user))
}

/// # Errors
///
/// [`ApiError::BiometricFailed`] when `roll` does not clear the failure
/// threshold.
pub async fn verify_biometric(roll: f64) -> Result<(), ApiError> {
    sleep_ms(BIOMETRIC_LATENCY_MS).await;
    if roll > BIOMETRIC_FAILURE_ROLL {
        Ok(())
    } else {
        Err(ApiError::BiometricFailed)
    }
}

/// Passcode fallback. Any six digits pass; there is no latency.
///
/// # Errors
///
/// Anything other than six ASCII digits.
pub fn verify_passcode(code: &str) -> Result<(), ApiError> {
    validate_passcode(code.trim())?;
    Ok(())
}

/// # Errors
///
/// Never fails once validated; the `Result` keeps the backend seam.
pub async fn generate_storyboard(request: &ValidGeneration) -> Result<Vec<Frame>, ApiError> {
    sleep_ms(GENERATE_LATENCY_MS).await;
    let frames = mint_frames(request);
    log!("api: generated {} frames ({})", frames.len(), request.style().slug());
    Ok(frames)
}

/// # Errors
///
/// [`ApiError::EmptyExport`] when there are no frames.
pub async fn export_storyboard(frames: &[Frame], now_ms: i64) -> Result<ExportReceipt, ApiError> {
    if frames.is_empty() {
        return Err(ApiError::EmptyExport);
    }
    sleep_ms(EXPORT_LATENCY_MS).await;
    let token = format!("storyboard-{now_ms}");
    Ok(ExportReceipt { file_name: format!("{token}.pdf"), url: export_link(&token), frame_count: frames.len() })
}

/// Simulated payment. Returns the tier now in effect.
///
/// # Errors
///
/// [`ApiError::SamePlan`] when `target` is the current tier.
pub async fn upgrade_plan(current: PlanTier, target: PlanTier) -> Result<PlanTier, ApiError> {
    if current == target {
        return Err(ApiError::SamePlan(target));
    }
    sleep_ms(UPGRADE_LATENCY_MS).await;
    log!("api: plan {} -> {}", current.slug(), target.slug());
    Ok(target)
}

/// # Errors
///
/// Form validation failures.
pub async fn invite_collaborator(form: &InviteForm, now_ms: i64) -> Result<Collaborator, ApiError> {
    form.validate()?;
    sleep_ms(INVITE_LATENCY_MS).await;
    log!("api: invited {} as {}", form.email.trim(), form.role.slug());
    Ok(Collaborator::invited(form, now_ms))
}

/// # Errors
///
/// Never fails; plan and duplicate checks happen before the call.
pub async fn connect_integration(integration: &Integration) -> Result<(), ApiError> {
    sleep_ms(CONNECT_LATENCY_MS).await;
    log!("api: connected {}", integration.id);
    Ok(())
}

/// # Errors
///
/// Profile validation failures.
pub async fn save_profile(user: &User, update: &ProfileUpdate) -> Result<User, ApiError> {
    update.validate()?;
    sleep_ms(PROFILE_LATENCY_MS).await;
    let mut saved = user.clone();
    saved.apply_profile(update);
    Ok(saved)
}
