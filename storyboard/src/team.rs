//! Collaborators and frame comments for one storyboard.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use serde::{Deserialize, Serialize};

use crate::frame::FrameId;
use crate::notification::relative_label;
use crate::user::avatar_for;
use crate::validate::InviteForm;

const MINUTE_MS: i64 = 60_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Viewer,
    Editor,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    View,
    Edit,
    Comment,
    Manage,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Viewer, Role::Editor, Role::Admin];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.slug() == raw)
    }

    /// Derived, never stored: changing a role changes its permissions.
    #[must_use]
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Self::Viewer => &[Permission::View, Permission::Comment],
            Self::Editor => &[Permission::View, Permission::Edit, Permission::Comment],
            Self::Admin => &[Permission::View, Permission::Edit, Permission::Comment, Permission::Manage],
        }
    }

    #[must_use]
    pub fn can(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Online,
    Offline,
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: Role,
    pub status: MemberStatus,
    pub last_active_ms: Option<i64>,
}

impl Collaborator {
    /// Pending member for an invitation. The display name is the local part
    /// of the email until they accept.
    #[must_use]
    pub fn invited(invite: &InviteForm, now_ms: i64) -> Self {
        let email = invite.email.trim();
        let name = email.split('@').next().unwrap_or(email);
        let initial: String = email.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default();
        Self {
            id: format!("user-{now_ms}"),
            name: name.to_owned(),
            email: email.to_owned(),
            avatar: avatar_for(&initial),
            role: invite.role,
            status: MemberStatus::Pending,
            last_active_ms: None,
        }
    }

    #[must_use]
    pub fn activity_label(&self, now_ms: i64) -> String {
        match (self.status, self.last_active_ms) {
            (MemberStatus::Pending, _) | (_, None) => "Invitation sent".to_owned(),
            (_, Some(at)) => relative_label(at, now_ms),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub frame_id: FrameId,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub created_at_ms: i64,
    pub resolved: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("{0} is already a member of this storyboard.")]
    AlreadyMember(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub storyboard_id: String,
    collaborators: Vec<Collaborator>,
    comments: Vec<Comment>,
}

fn member(id: &str, name: &str, initials: &str, role: Role, status: MemberStatus, last_active_ms: i64) -> Collaborator {
    let first = name.split_whitespace().next().unwrap_or(name).to_lowercase();
    Collaborator {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{first}@company.com"),
        avatar: avatar_for(initials),
        role,
        status,
        last_active_ms: Some(last_active_ms),
    }
}

fn comment(id: &str, frame: &str, author: &str, initials: &str, content: &str, at: i64, resolved: bool) -> Comment {
    Comment {
        id: id.to_owned(),
        frame_id: FrameId::from(frame),
        author: author.to_owned(),
        avatar: format!("/placeholder.svg?height=32&width=32&text={initials}"),
        content: content.to_owned(),
        created_at_ms: at,
        resolved,
    }
}

impl Team {
    /// Three collaborators and three comments, aged relative to `now_ms`.
    #[must_use]
    pub fn seed(storyboard_id: impl Into<String>, now_ms: i64) -> Self {
        let collaborators = vec![
            member("user-1", "Sarah Miller", "SM", Role::Editor, MemberStatus::Online, now_ms - 2 * MINUTE_MS),
            member("user-2", "John Davis", "JD", Role::Viewer, MemberStatus::Offline, now_ms - 60 * MINUTE_MS),
            member("user-3", "Emily Wilson", "EW", Role::Admin, MemberStatus::Online, now_ms),
        ];
        let comments = vec![
            comment(
                "comment-1",
                "frame-1",
                "Sarah Miller",
                "SM",
                "I think we should adjust the lighting in this scene to make it more dramatic.",
                now_ms - 120 * MINUTE_MS,
                false,
            ),
            comment(
                "comment-2",
                "frame-3",
                "John Davis",
                "JD",
                "The transition here feels a bit abrupt. Maybe we can add a smoother fade?",
                now_ms - 60 * MINUTE_MS,
                true,
            ),
            comment(
                "comment-3",
                "frame-5",
                "Emily Wilson",
                "EW",
                "Love the composition here! This really captures the emotion we're going for.",
                now_ms - 30 * MINUTE_MS,
                false,
            ),
        ];
        Self { storyboard_id: storyboard_id.into(), collaborators, comments }
    }

    #[must_use]
    pub fn collaborators(&self) -> &[Collaborator] {
        &self.collaborators
    }

    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    #[must_use]
    pub fn collaborator(&self, id: &str) -> Option<&Collaborator> {
        self.collaborators.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn is_member(&self, email: &str) -> bool {
        let email = email.trim();
        self.collaborators.iter().any(|c| c.email.eq_ignore_ascii_case(email))
    }

    /// Append an invited member.
    ///
    /// # Errors
    ///
    /// [`TeamError::AlreadyMember`] when the email (case-insensitive) is
    /// already on the team.
    pub fn admit(&mut self, collaborator: Collaborator) -> Result<&Collaborator, TeamError> {
        if self.is_member(&collaborator.email) {
            return Err(TeamError::AlreadyMember(collaborator.email));
        }
        self.collaborators.push(collaborator);
        Ok(&self.collaborators[self.collaborators.len() - 1])
    }

    pub fn change_role(&mut self, id: &str, role: Role) -> bool {
        match self.collaborators.iter_mut().find(|c| c.id == id) {
            Some(c) => {
                c.role = role;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Collaborator> {
        let index = self.collaborators.iter().position(|c| c.id == id)?;
        Some(self.collaborators.remove(index))
    }

    /// Prepend a comment. Whitespace-only text is ignored.
    pub fn add_comment(
        &mut self,
        frame_id: FrameId,
        author: &str,
        avatar: &str,
        text: &str,
        now_ms: i64,
    ) -> Option<&Comment> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }
        self.comments.insert(
            0,
            Comment {
                id: format!("comment-{now_ms}"),
                frame_id,
                author: author.to_owned(),
                avatar: avatar.to_owned(),
                content: content.to_owned(),
                created_at_ms: now_ms,
                resolved: false,
            },
        );
        self.comments.first()
    }

    pub fn toggle_resolved(&mut self, id: &str) -> Option<bool> {
        let comment = self.comments.iter_mut().find(|c| c.id == id)?;
        comment.resolved = !comment.resolved;
        Some(comment.resolved)
    }

    #[must_use]
    pub fn open_comment_count(&self) -> usize {
        self.comments.iter().filter(|c| !c.resolved).count()
    }
}
