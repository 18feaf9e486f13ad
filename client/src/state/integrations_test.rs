use storyboard::integration::{ConnectPlan, find};
use storyboard::plan::PlanTier;

use super::*;

#[test]
fn connecting_set_tracks_in_flight_ids() {
    let mut state = IntegrationState::default();
    state.connecting.push("slack");
    state.connecting.push("figma");
    assert!(state.is_connecting("slack"));

    state.finish_connecting("slack");

    assert!(!state.is_connecting("slack"));
    assert!(state.is_connecting("figma"));
}

#[test]
fn setup_dialog_flow_connects_after_close() {
    let mut state = IntegrationState::default();
    let Ok(ConnectPlan::NeedsSetup(slack)) = state.hub.begin_connect("slack", PlanTier::Free) else {
        panic!("slack needs setup");
    };
    state.setup = Some(slack);
    state.setup_key = "xoxb-123".to_owned();

    state.close_setup();
    assert!(state.hub.mark_connected(slack));

    assert!(state.setup.is_none());
    assert!(state.setup_key.is_empty());
    assert!(state.hub.is_connected("slack"));
}

#[test]
fn disconnecting_a_seeded_integration_reopens_immediate_connect() {
    let mut state = IntegrationState::default();
    assert!(state.hub.disconnect("dropbox"));
    let plan = state.hub.begin_connect("dropbox", PlanTier::Free);
    assert_eq!(plan, Ok(ConnectPlan::Immediate(find("dropbox").unwrap())));
}
