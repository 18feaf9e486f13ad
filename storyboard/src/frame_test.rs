use super::*;

fn id(raw: &str) -> FrameId {
    FrameId::from(raw)
}

fn snapshot(list: &FrameList) -> Vec<Frame> {
    list.iter().cloned().collect()
}

// =============================================================
// Seed
// =============================================================

#[test]
fn seed_has_six_frames_in_order() {
    let list = FrameList::seed();
    let ids: Vec<String> = list.ids().iter().map(ToString::to_string).collect();
    assert_eq!(ids, ["frame-1", "frame-2", "frame-3", "frame-4", "frame-5", "frame-6"]);
}

#[test]
fn seed_images_are_placeholders() {
    let list = FrameList::seed();
    assert!(list.iter().all(|f| f.image_url.starts_with("/placeholder.svg?")));
    assert_eq!(
        list.get(&id("frame-1")).map(|f| f.image_url.as_str()),
        Some("/placeholder.svg?height=300&width=400&text=Ocean+Horizon")
    );
}

// =============================================================
// add / remove / caption
// =============================================================

#[test]
fn add_frame_appends_blank_with_unique_id() {
    let mut list = FrameList::seed();
    let first = list.add_frame();
    let second = list.add_frame();
    assert_ne!(first, second);
    assert_eq!(list.len(), 8);
    assert_eq!(list.position(&first), Some(6));
    assert_eq!(list.position(&second), Some(7));
    let added = list.get(&first).unwrap();
    assert_eq!(added.caption, BLANK_CAPTION);
    assert!(added.id.as_str().starts_with("frame-"));
}

#[test]
fn remove_frame_preserves_relative_order() {
    let mut list = FrameList::seed();
    let removed = list.remove_frame(&id("frame-3")).unwrap();
    assert_eq!(removed.id, id("frame-3"));
    let ids: Vec<String> = list.ids().iter().map(ToString::to_string).collect();
    assert_eq!(ids, ["frame-1", "frame-2", "frame-4", "frame-5", "frame-6"]);
}

#[test]
fn remove_then_caption_touches_only_target() {
    let mut list = FrameList::seed();
    list.remove_frame(&id("frame-3"));
    let before = snapshot(&list);

    assert!(list.update_caption(&id("frame-1"), "New caption"));

    let after = snapshot(&list);
    assert_eq!(after.len(), 5);
    assert_eq!(after[0].caption, "New caption");
    assert_eq!(after[0].image_url, before[0].image_url);
    assert_eq!(&after[1..], &before[1..]);
}

#[test]
fn remove_missing_id_is_noop() {
    let mut list = FrameList::seed();
    let before = list.clone();
    assert!(list.remove_frame(&id("frame-99")).is_none());
    assert_eq!(list, before);
}

#[test]
fn update_caption_missing_id_is_noop() {
    let mut list = FrameList::seed();
    let before = list.clone();
    assert!(!list.update_caption(&id("nope"), "x"));
    assert_eq!(list, before);
}

#[test]
fn mixed_edits_keep_untargeted_frames_intact() {
    let mut list = FrameList::seed();
    let original = snapshot(&list);

    let added = list.add_frame();
    list.update_caption(&added, "Closing shot");
    list.remove_frame(&id("frame-2"));
    list.update_caption(&id("frame-5"), "Hero walks in");

    for frame in original.iter().filter(|f| f.id != id("frame-2") && f.id != id("frame-5")) {
        assert_eq!(list.get(&frame.id), Some(frame));
    }
    let hero = list.get(&id("frame-5")).unwrap();
    assert_eq!(hero.image_url, original[4].image_url);
}

// =============================================================
// regenerate
// =============================================================

#[test]
fn regenerate_changes_only_image() {
    let mut list = FrameList::seed();
    let before = snapshot(&list);
    assert!(list.regenerate_frame(&id("frame-4")));
    let after = snapshot(&list);

    assert_eq!(after[3].id, before[3].id);
    assert_eq!(after[3].caption, before[3].caption);
    assert_ne!(after[3].image_url, before[3].image_url);
    assert!(after[3].image_url.contains("text=Regenerated+"));
    for i in [0, 1, 2, 4, 5] {
        assert_eq!(after[i], before[i]);
    }
}

#[test]
fn regenerate_missing_id_is_noop() {
    let mut list = FrameList::seed();
    let before = list.clone();
    assert!(!list.regenerate_frame(&id("frame-0")));
    assert_eq!(list, before);
}

// =============================================================
// reorder
// =============================================================

#[test]
fn reorder_moves_forward_and_shifts_others_back() {
    let mut list = FrameList::seed();
    assert!(list.reorder(0, Some(3)));
    let ids: Vec<String> = list.ids().iter().map(ToString::to_string).collect();
    assert_eq!(ids, ["frame-2", "frame-3", "frame-4", "frame-1", "frame-5", "frame-6"]);
}

#[test]
fn reorder_moves_backward_and_shifts_others_forward() {
    let mut list = FrameList::seed();
    assert!(list.reorder(5, Some(1)));
    let ids: Vec<String> = list.ids().iter().map(ToString::to_string).collect();
    assert_eq!(ids, ["frame-1", "frame-6", "frame-2", "frame-3", "frame-4", "frame-5"]);
}

#[test]
fn reorder_is_a_permutation_for_every_pair() {
    let seed = FrameList::seed();
    let mut expected_ids = seed.ids();
    expected_ids.sort();
    for i in 0..seed.len() {
        for j in 0..seed.len() {
            let mut list = seed.clone();
            list.reorder(i, Some(j));
            let mut ids = list.ids();
            assert_eq!(list.as_slice()[j], seed.as_slice()[i]);
            ids.sort();
            assert_eq!(ids, expected_ids);
        }
    }
}

#[test]
fn reorder_without_destination_is_noop() {
    let mut list = FrameList::seed();
    let before = list.clone();
    assert!(!list.reorder(2, None));
    assert!(!list.reorder(2, None));
    assert_eq!(list, before);
}

#[test]
fn reorder_out_of_range_is_noop() {
    let mut list = FrameList::seed();
    let before = list.clone();
    assert!(!list.reorder(6, Some(0)));
    assert!(!list.reorder(0, Some(6)));
    assert_eq!(list, before);
}

// =============================================================
// replace / serde
// =============================================================

#[test]
fn replace_all_discards_prior_frames() {
    let mut list = FrameList::seed();
    list.replace_all(vec![Frame::blank()]);
    assert_eq!(list.len(), 1);
    assert!(list.get(&id("frame-1")).is_none());
}

#[test]
fn frame_serializes_with_camel_case_image_url() {
    let list = FrameList::seed();
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json[0]["id"], "frame-1");
    assert!(json[0]["imageUrl"].as_str().is_some());
}
