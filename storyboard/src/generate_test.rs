use std::collections::HashSet;

use super::*;

fn request(prompt: &str, count: u32) -> GenerationRequest {
    GenerationRequest { prompt: prompt.to_owned(), count, ..GenerationRequest::default() }
}

fn roomy() -> Quota {
    Quota::capped(0, 5)
}

// =============================================================
// validate
// =============================================================

#[test]
fn empty_prompt_is_rejected() {
    assert_eq!(request("", 3).validate(PlanTier::Pro, &roomy()), Err(GenerateError::EmptyPrompt));
    assert_eq!(request("   \n", 3).validate(PlanTier::Pro, &roomy()), Err(GenerateError::EmptyPrompt));
}

#[test]
fn empty_prompt_wins_over_usage_limit() {
    let spent = Quota::capped(5, 5);
    assert_eq!(request("", 3).validate(PlanTier::Free, &spent), Err(GenerateError::EmptyPrompt));
}

#[test]
fn free_plan_with_spent_quota_is_rejected() {
    let spent = Quota::capped(5, 5);
    assert_eq!(
        request("A heist", 3).validate(PlanTier::Free, &spent),
        Err(GenerateError::UsageLimitReached)
    );
}

#[test]
fn paid_plan_ignores_storyboard_quota() {
    let spent = Quota::capped(5, 5);
    assert!(request("A heist", 3).validate(PlanTier::Pro, &spent).is_ok());
}

#[test]
fn count_is_clamped_to_plan_limit() {
    let free = request("x", 12).validate(PlanTier::Free, &roomy()).unwrap();
    assert_eq!(free.count(), 5);
    let pro = request("x", 12).validate(PlanTier::Pro, &roomy()).unwrap();
    assert_eq!(pro.count(), 12);
    let zero = request("x", 0).validate(PlanTier::Pro, &roomy()).unwrap();
    assert_eq!(zero.count(), 1);
}

#[test]
fn prompt_is_trimmed() {
    let valid = request("  sunrise over Lisbon ", 2).validate(PlanTier::Free, &roomy()).unwrap();
    assert_eq!(valid.prompt(), "sunrise over Lisbon");
}

// =============================================================
// mint_frames
// =============================================================

#[test]
fn mint_produces_exact_count_with_unique_ids() {
    let valid = request("robots", 15).validate(PlanTier::Enterprise, &roomy()).unwrap();
    let frames = mint_frames(&valid);
    assert_eq!(frames.len(), 15);
    let ids: HashSet<_> = frames.iter().map(|f| f.id.clone()).collect();
    assert_eq!(ids.len(), 15);
}

#[test]
fn minted_captions_reference_prompt() {
    let valid = request("robots", 2).validate(PlanTier::Free, &roomy()).unwrap();
    let frames = mint_frames(&valid);
    assert_eq!(frames[0].caption, "Generated scene 1 based on \"robots\"");
    assert_eq!(frames[1].caption, "Generated scene 2 based on \"robots\"");
    assert!(frames[1].image_url.ends_with("text=Frame+2"));
}

#[test]
fn auto_caption_off_leaves_blank_captions() {
    let mut req = request("robots", 2);
    req.auto_caption = false;
    let frames = mint_frames(&req.validate(PlanTier::Free, &roomy()).unwrap());
    assert!(frames.iter().all(|f| f.caption == BLANK_CAPTION));
}

// =============================================================
// StylePreset
// =============================================================

#[test]
fn style_slug_roundtrip() {
    for style in StylePreset::ALL {
        assert_eq!(StylePreset::from_slug(style.slug()), Some(style));
    }
    assert_eq!(StylePreset::default(), StylePreset::Cinematic);
}

#[test]
fn error_titles() {
    assert_eq!(GenerateError::EmptyPrompt.title(), "Empty Prompt");
    assert_eq!(
        GenerateError::UsageLimitReached.to_string(),
        "You've reached your monthly limit. Upgrade to continue creating."
    );
}
