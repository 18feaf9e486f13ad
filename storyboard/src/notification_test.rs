use super::*;

const NOW: i64 = 1_700_000_000_000;

// =============================================================
// Seed
// =============================================================

#[test]
fn seed_has_six_newest_first() {
    let feed = NotificationFeed::seed(NOW);
    assert_eq!(feed.len(), 6);
    let ages: Vec<_> = feed.filtered(NotificationTab::All).iter().map(|n| n.created_at_ms).collect();
    assert!(ages.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(feed.unread_count(), 3);
}

#[test]
fn seed_labels_match_mock_ages() {
    let feed = NotificationFeed::seed(NOW);
    let labels: Vec<_> =
        feed.filtered(NotificationTab::All).iter().map(|n| relative_label(n.created_at_ms, NOW)).collect();
    assert_eq!(labels, ["2 minutes ago", "1 hour ago", "3 hours ago", "1 day ago", "2 days ago", "3 days ago"]);
}

// =============================================================
// Filtering and read state
// =============================================================

#[test]
fn tabs_filter_by_read_and_kind() {
    let feed = NotificationFeed::seed(NOW);
    assert_eq!(feed.filtered(NotificationTab::Unread).len(), 3);
    let collab = feed.filtered(NotificationTab::Kind(NotificationKind::Collaboration));
    assert_eq!(collab.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), ["notif-1", "notif-4"]);
    assert_eq!(feed.filtered(NotificationTab::Kind(NotificationKind::Security)).len(), 1);
}

#[test]
fn mark_read_is_idempotent() {
    let mut feed = NotificationFeed::seed(NOW);
    assert!(feed.mark_read("notif-1"));
    assert!(!feed.mark_read("notif-1"));
    assert!(!feed.mark_read("missing"));
    assert_eq!(feed.unread_count(), 2);
}

#[test]
fn mark_all_read_clears_badge() {
    let mut feed = NotificationFeed::seed(NOW);
    feed.mark_all_read();
    assert_eq!(feed.unread_count(), 0);
    assert!(feed.filtered(NotificationTab::Unread).is_empty());
}

#[test]
fn dismiss_removes_only_target() {
    let mut feed = NotificationFeed::seed(NOW);
    let gone = feed.dismiss("notif-3").unwrap();
    assert_eq!(gone.title, "Usage Limit Warning");
    assert_eq!(feed.len(), 5);
    assert!(feed.get("notif-3").is_none());
    assert!(feed.dismiss("notif-3").is_none());
}

// =============================================================
// Actions
// =============================================================

#[test]
fn actions_follow_kind_and_target() {
    let feed = NotificationFeed::seed(NOW);
    let action = |id: &str| action_for(feed.get(id).unwrap());
    assert_eq!(action("notif-1"), NotificationAction::OpenStoryboard("sb-1".into()));
    assert_eq!(action("notif-2"), NotificationAction::Download("https://example.com/download".into()));
    assert_eq!(action("notif-3"), NotificationAction::OpenSubscription);
    assert_eq!(action("notif-4"), NotificationAction::OpenStoryboard("sb-3".into()));
    assert_eq!(action("notif-6"), NotificationAction::None);
}

#[test]
fn take_action_marks_read() {
    let mut feed = NotificationFeed::seed(NOW);
    let action = feed.take_action("notif-2").unwrap();
    assert_eq!(action.notice(), Some(("Download Started", "Your file download has started.")));
    assert!(feed.get("notif-2").unwrap().read);
    assert!(feed.take_action("missing").is_none());
}

// =============================================================
// Real-time injection
// =============================================================

#[test]
fn realtime_needs_high_roll() {
    let mut feed = NotificationFeed::seed(NOW);
    assert!(!feed.inject_realtime(0.95, NOW));
    assert!(!feed.inject_realtime(0.2, NOW));
    assert_eq!(feed.len(), 6);
}

#[test]
fn realtime_prepends_unread_collaboration() {
    let mut feed = NotificationFeed::seed(NOW);
    assert!(feed.inject_realtime(0.99, NOW + 5));
    let first = feed.filtered(NotificationTab::All)[0].clone();
    assert!(first.id.starts_with("notif-"));
    assert_eq!(first.created_at_ms, NOW + 5);
    assert_eq!(first.title, "Real-time Update");
    assert_eq!(first.kind, NotificationKind::Collaboration);
    assert!(!first.read);
    assert_eq!(feed.unread_count(), 4);
    assert_eq!(action_for(&first), NotificationAction::None);
}

#[test]
fn same_millisecond_injections_stay_distinct() {
    let mut feed = NotificationFeed::seed(NOW);
    assert!(feed.inject_realtime(0.99, NOW));
    assert!(feed.inject_realtime(0.99, NOW));
    let newest = feed.filtered(NotificationTab::All)[0].id.clone();
    let older = feed.filtered(NotificationTab::All)[1].id.clone();
    assert_ne!(newest, older);

    assert!(feed.mark_read(&newest));
    assert!(feed.dismiss(&newest).is_some());
    assert_eq!(feed.len(), 7);
    assert!(!feed.get(&older).is_some_and(|n| n.read));
}

// =============================================================
// Settings and labels
// =============================================================

#[test]
fn settings_default_mutes_feature_only() {
    let mut settings = NotificationSettings::default();
    for kind in NotificationKind::ALL {
        assert_eq!(settings.allows(kind), kind != NotificationKind::Feature);
    }
    settings.set(NotificationKind::Billing, false);
    assert!(!settings.allows(NotificationKind::Billing));
}

#[test]
fn relative_label_boundaries() {
    assert_eq!(relative_label(NOW, NOW), "Just now");
    assert_eq!(relative_label(NOW + 1000, NOW), "Just now");
    assert_eq!(relative_label(NOW - 59_999, NOW), "Just now");
    assert_eq!(relative_label(NOW - 60_000, NOW), "1 minute ago");
    assert_eq!(relative_label(NOW - 90 * 60_000, NOW), "1 hour ago");
    assert_eq!(relative_label(NOW - 5 * 86_400_000, NOW), "5 days ago");
}
