use super::*;

#[test]
fn library_seed() {
    let items = library();
    let ids: Vec<_> = items.iter().map(|s| s.id).collect();
    assert_eq!(ids, ["sb-1", "sb-2", "sb-3"]);
    assert_eq!(items[2].status, StoryboardStatus::InReview);
    assert_eq!(items[2].status.label(), "in-review");
    assert!(!items[1].public);
}

#[test]
fn thumbnail_uses_title_words() {
    let items = library();
    assert_eq!(items[0].thumbnail(), "/placeholder.svg?height=120&width=160&text=Blue+Horizon");
    assert_eq!(items[2].thumbnail(), "/placeholder.svg?height=120&width=160&text=Customer+Journey");
}

#[test]
fn analytics_seed() {
    let analytics = Analytics::seed();
    assert_eq!(analytics.total_views, 1247);
    assert_eq!(analytics.monthly_growth_percent, 23);
}

#[test]
fn links() {
    assert_eq!(share_link("sb-1"), "https://storyvision.ai/share/sb-1");
    assert_eq!(editor_share_link("abc123"), "https://storyboard.ai/share/abc123");
    assert_eq!(export_link("xyz"), "https://storyvision.ai/exports/xyz.pdf");
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1247), "1,247");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn status_serializes_kebab_case() {
    assert_eq!(serde_json::to_string(&StoryboardStatus::InReview).unwrap(), "\"in-review\"");
}
