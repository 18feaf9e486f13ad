use storyboard::frame::Frame;

use super::*;

fn ids(state: &EditorState) -> Vec<String> {
    state.frames.iter().map(|f| f.id.as_str().to_owned()).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn starts_with_sample_frames_on_create_tab() {
    let state = EditorState::default();
    assert_eq!(state.frames.len(), 6);
    assert_eq!(state.tab, EditorTab::Create);
    assert!(!state.generating);
    assert_eq!(state.request.count, 3);
}

#[test]
fn for_style_sets_preferred_style() {
    assert_eq!(EditorState::for_style(StylePreset::Noir).request.style, StylePreset::Noir);
}

// =============================================================
// Generation
// =============================================================

#[test]
fn generation_replaces_list_and_switches_tab() {
    let mut state = EditorState::default();
    let ticket = state.begin_generation();
    assert!(state.generating);
    state.finish_generation(ticket, vec![Frame::blank(), Frame::blank()]);
    assert_eq!(state.frames.len(), 2);
    assert!(!state.generating);
    assert_eq!(state.tab, EditorTab::Edit);
}

#[test]
fn overlapping_generations_last_completion_wins() {
    let mut state = EditorState::default();
    let first = state.begin_generation();
    let second = state.begin_generation();

    let late = vec![Frame::blank()];
    let early = vec![Frame::blank(), Frame::blank(), Frame::blank()];

    state.finish_generation(second, early);
    assert!(!state.generating);
    state.finish_generation(first, late.clone());
    assert_eq!(state.frames.as_slice(), late.as_slice());
}

#[test]
fn stale_completion_keeps_spinner_for_latest() {
    let mut state = EditorState::default();
    let first = state.begin_generation();
    let _second = state.begin_generation();
    state.finish_generation(first, vec![Frame::blank()]);
    assert!(state.generating);
}

#[test]
fn abort_clears_spinner_only_for_latest() {
    let mut state = EditorState::default();
    let first = state.begin_generation();
    let second = state.begin_generation();
    state.abort_generation(first);
    assert!(state.generating);
    state.abort_generation(second);
    assert!(!state.generating);
    assert_eq!(state.frames.len(), 6);
}

// =============================================================
// Drag and drop
// =============================================================

#[test]
fn drop_moves_frame_forward() {
    let mut state = EditorState::default();
    state.drag_start(0);
    state.drag_enter(2);
    assert_eq!(state.drag_over, Some(2));
    assert!(state.drop_on(2));
    assert_eq!(ids(&state), ["frame-2", "frame-3", "frame-1", "frame-4", "frame-5", "frame-6"]);
    assert_eq!(state.dragging(), None);
    assert_eq!(state.drag_over, None);
}

#[test]
fn drop_without_drag_is_noop() {
    let mut state = EditorState::default();
    assert!(!state.drop_on(3));
    assert_eq!(ids(&state)[0], "frame-1");
}

#[test]
fn cancel_leaves_order_untouched() {
    let mut state = EditorState::default();
    let before = ids(&state);
    state.drag_start(4);
    state.drag_enter(1);
    state.drag_cancel();
    assert_eq!(ids(&state), before);
    assert_eq!(state.dragging(), None);
}

#[test]
fn drag_start_out_of_range_is_ignored() {
    let mut state = EditorState::default();
    state.drag_start(42);
    assert_eq!(state.dragging(), None);
    state.drag_enter(1);
    assert_eq!(state.drag_over, None);
}

#[test]
fn removing_frame_clears_drag() {
    let mut state = EditorState::default();
    state.drag_start(1);
    state.remove_frame(&FrameId::from("frame-2"));
    assert_eq!(state.dragging(), None);
    assert_eq!(state.frames.len(), 5);
}

#[test]
fn load_example_restores_seed() {
    let mut state = EditorState::default();
    state.frames.clear();
    state.load_example();
    assert_eq!(state.frames.len(), 6);
    assert_eq!(state.tab, EditorTab::Edit);
}

#[test]
fn share_token_is_eight_hex_chars() {
    let token = new_share_token();
    assert_eq!(token.len(), 8);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}
