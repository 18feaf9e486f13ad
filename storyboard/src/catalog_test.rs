use super::*;

#[test]
fn catalog_is_ordered_by_tier() {
    let tiers: Vec<_> = catalog().iter().map(|o| o.tier).collect();
    assert_eq!(tiers, PlanTier::ALL.to_vec());
}

#[test]
fn offer_lookup_matches_tier() {
    for tier in PlanTier::ALL {
        assert_eq!(offer(tier).tier, tier);
    }
    assert!(offer(PlanTier::Pro).popular);
    assert!(!offer(PlanTier::Enterprise).popular);
}

#[test]
fn price_follows_cycle() {
    let pro = offer(PlanTier::Pro);
    assert_eq!(pro.price(BillingCycle::Monthly), 19);
    assert_eq!(pro.price(BillingCycle::Yearly), 190);
    assert_eq!(BillingCycle::Yearly.suffix(), "/year");
}

#[test]
fn yearly_discount_is_rounded() {
    // 228 -> 190 saves 16.67%, 588 -> 490 saves 16.67%.
    assert_eq!(offer(PlanTier::Pro).yearly_discount(), 17);
    assert_eq!(offer(PlanTier::Enterprise).yearly_discount(), 17);
    assert_eq!(yearly_discount_percent(10, 60), 50);
    assert_eq!(yearly_discount_percent(10, 119), 1);
}

#[test]
fn free_plan_has_no_discount() {
    assert_eq!(offer(PlanTier::Free).yearly_discount(), 0);
    assert_eq!(yearly_discount_percent(0, 0), 0);
}

#[test]
fn only_free_has_limitations() {
    assert_eq!(offer(PlanTier::Free).limitations.len(), 4);
    assert!(offer(PlanTier::Pro).limitations.is_empty());
    assert!(offer(PlanTier::Enterprise).limitations.is_empty());
}
