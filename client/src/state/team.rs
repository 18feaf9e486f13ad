//! Collaboration panel state.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use storyboard::team::Team;
use storyboard::validate::InviteForm;

#[derive(Clone, Debug, Default)]
pub struct TeamState {
    pub team: Team,
    pub invite: InviteForm,
    pub invite_open: bool,
    pub inviting: bool,
    pub comment_draft: String,
}

impl TeamState {
    #[must_use]
    pub fn seeded(storyboard_id: &str, now_ms: i64) -> Self {
        Self { team: Team::seed(storyboard_id, now_ms), ..Self::default() }
    }

    pub fn close_invite(&mut self) {
        self.invite = InviteForm::default();
        self.invite_open = false;
        self.inviting = false;
    }
}
