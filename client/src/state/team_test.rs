use storyboard::team::Role;

use super::*;

const NOW: i64 = 1_700_000_000_000;

#[test]
fn seeded_team_starts_with_closed_invite() {
    let state = TeamState::seeded("sb-1", NOW);
    assert_eq!(state.team.storyboard_id, "sb-1");
    assert!(!state.team.collaborators().is_empty());
    assert!(!state.invite_open);
    assert!(state.comment_draft.is_empty());
}

#[test]
fn close_invite_resets_the_form() {
    let mut state = TeamState::seeded("sb-1", NOW);
    state.invite_open = true;
    state.inviting = true;
    state.invite.email = "new@example.com".to_owned();
    state.invite.role = Role::Admin;

    state.close_invite();

    assert!(!state.invite_open);
    assert!(!state.inviting);
    assert!(state.invite.email.is_empty());
    assert_eq!(state.invite.role, Role::Viewer);
}
