#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Quota
// =============================================================

#[test]
fn percentage_is_clamped_and_zero_for_unlimited() {
    assert_eq!(Quota::capped(5, 10).percentage(), 50.0);
    assert_eq!(Quota::capped(20, 10).percentage(), 100.0);
    assert_eq!(Quota::unlimited(999).percentage(), 0.0);
    assert_eq!(Quota::capped(0, 0).percentage(), 100.0);
}

#[test]
fn status_thresholds() {
    assert_eq!(Quota::capped(74, 100).status(), UsageStatus::Normal);
    assert_eq!(Quota::capped(75, 100).status(), UsageStatus::Warning);
    assert_eq!(Quota::capped(90, 100).status(), UsageStatus::Critical);
    assert_eq!(Quota::capped(100, 100).status(), UsageStatus::Exceeded);
    assert_eq!(Quota::unlimited(5).status(), UsageStatus::Unlimited);
}

#[test]
fn exhausted_only_for_capped_quotas() {
    assert!(Quota::capped(5, 5).is_exhausted());
    assert!(!Quota::capped(4, 5).is_exhausted());
    assert!(!Quota::unlimited(1_000_000).is_exhausted());
}

// =============================================================
// UsageLimits
// =============================================================

#[test]
fn free_seed_flags_critical_and_exceeded_items() {
    let usage = UsageLimits::for_plan(PlanTier::Free);
    assert_eq!(usage.critical(), vec![UsageItem::AiGenerations]);
    assert_eq!(usage.exceeded(), vec![UsageItem::TeamMembers]);
}

#[test]
fn enterprise_seed_has_no_alerts() {
    let usage = UsageLimits::for_plan(PlanTier::Enterprise);
    assert!(usage.critical().is_empty());
    assert!(usage.exceeded().is_empty());
}

#[test]
fn simulate_activity_respects_threshold() {
    let mut usage = UsageLimits::for_plan(PlanTier::Pro);
    assert!(!usage.simulate_activity(0.9));
    assert_eq!(usage.ai_generations.used, 234);
    assert!(usage.simulate_activity(0.95));
    assert_eq!(usage.ai_generations.used, 235);
}

#[test]
fn simulate_activity_never_passes_cap() {
    let mut usage = UsageLimits::for_plan(PlanTier::Free);
    for _ in 0..20 {
        usage.simulate_activity(0.99);
    }
    assert_eq!(usage.ai_generations.used, 50);
}

#[test]
fn simulate_activity_grows_unlimited_quota() {
    let mut usage = UsageLimits::for_plan(PlanTier::Enterprise);
    usage.simulate_activity(0.99);
    assert_eq!(usage.ai_generations.used, 1235);
}

#[test]
fn record_generation_counts_storyboard_and_frames() {
    let mut usage = UsageLimits::for_plan(PlanTier::Free);
    usage.record_generation(4);
    assert_eq!(usage.storyboards.used, 4);
    assert_eq!(usage.ai_generations.used, 49);
}

#[test]
fn format_storage_switches_to_gb() {
    assert_eq!(format_storage(125), "125 MB");
    assert_eq!(format_storage(2340), "2.3 GB");
    assert_eq!(format_storage(1000), "1.0 GB");
}
