use super::*;

#[test]
fn catalog_has_ten_unique_entries() {
    let ids: BTreeSet<_> = catalog().iter().map(|i| i.id).collect();
    assert_eq!(ids.len(), 10);
    let premium: Vec<_> = catalog().iter().filter(|i| i.premium).map(|i| i.id).collect();
    assert_eq!(premium, ["figma", "adobe-creative", "vimeo", "zapier", "webhooks"]);
}

#[test]
fn filtered_by_category() {
    assert_eq!(IntegrationHub::filtered(None).len(), 10);
    let video: Vec<_> = IntegrationHub::filtered(Some(Category::Video)).iter().map(|i| i.id).collect();
    assert_eq!(video, ["youtube", "vimeo"]);
    for category in Category::ALL {
        assert!(!IntegrationHub::filtered(Some(category)).is_empty(), "{category:?}");
    }
}

#[test]
fn seed_connects_dropbox_and_notion() {
    let hub = IntegrationHub::seed();
    assert!(hub.is_connected("dropbox"));
    assert!(hub.is_connected("notion"));
    assert_eq!(hub.connected_count(), 2);
}

#[test]
fn premium_requires_paid_plan() {
    let hub = IntegrationHub::seed();
    assert_eq!(hub.begin_connect("figma", PlanTier::Free), Err(IntegrationError::PremiumRequired));
    let plan = hub.begin_connect("figma", PlanTier::Pro).unwrap();
    assert!(matches!(plan, ConnectPlan::NeedsSetup(i) if i.id == "figma"));
}

#[test]
fn setup_flag_chooses_path() {
    let mut hub = IntegrationHub::seed();
    hub.disconnect("dropbox");
    assert!(matches!(hub.begin_connect("dropbox", PlanTier::Free), Ok(ConnectPlan::Immediate(_))));
    assert!(matches!(hub.begin_connect("slack", PlanTier::Free), Ok(ConnectPlan::NeedsSetup(_))));
}

#[test]
fn unknown_and_duplicate_are_rejected() {
    let hub = IntegrationHub::seed();
    assert_eq!(hub.begin_connect("myspace", PlanTier::Enterprise), Err(IntegrationError::Unknown("myspace".into())));
    assert_eq!(hub.begin_connect("notion", PlanTier::Free), Err(IntegrationError::AlreadyConnected("Notion")));
    assert_eq!(IntegrationError::PremiumRequired.title(), "Premium Feature");
}

#[test]
fn connect_then_disconnect() {
    let mut hub = IntegrationHub::seed();
    let plan = hub.begin_connect("slack", PlanTier::Free).unwrap();
    assert!(hub.mark_connected(plan.integration()));
    assert!(!hub.mark_connected(plan.integration()));
    assert!(hub.is_connected("slack"));
    assert!(hub.disconnect("slack"));
    assert!(!hub.disconnect("slack"));
}
