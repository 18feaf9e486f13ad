use super::*;

const NOW: i64 = 1_700_000_000_000;

fn invite(email: &str, role: Role) -> InviteForm {
    InviteForm { email: email.to_owned(), role }
}

#[test]
fn permissions_grow_with_role() {
    assert_eq!(Role::Viewer.permissions(), [Permission::View, Permission::Comment]);
    assert!(Role::Editor.can(Permission::Edit));
    assert!(!Role::Editor.can(Permission::Manage));
    assert!(Role::Admin.can(Permission::Manage));
    for role in Role::ALL {
        assert_eq!(Role::from_slug(role.slug()), Some(role));
    }
}

#[test]
fn seed_matches_mock_team() {
    let team = Team::seed("sb-1", NOW);
    let names: Vec<_> = team.collaborators().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Sarah Miller", "John Davis", "Emily Wilson"]);
    assert_eq!(team.collaborators()[0].email, "sarah@company.com");
    assert_eq!(team.collaborators()[2].role, Role::Admin);
    assert_eq!(team.collaborators()[0].activity_label(NOW), "2 minutes ago");
    assert_eq!(team.collaborators()[2].activity_label(NOW), "Just now");
    assert_eq!(team.open_comment_count(), 2);
}

#[test]
fn admit_adds_pending_member() {
    let mut team = Team::seed("sb-1", NOW);
    let added = team.admit(Collaborator::invited(&invite("kai@studio.io", Role::Editor), NOW)).unwrap().clone();
    assert_eq!(added.id, format!("user-{NOW}"));
    assert_eq!(added.name, "kai");
    assert_eq!(added.status, MemberStatus::Pending);
    assert_eq!(added.role, Role::Editor);
    assert!(added.avatar.ends_with("text=K"));
    assert_eq!(added.activity_label(NOW), "Invitation sent");
    assert_eq!(team.collaborators().len(), 4);
    assert_eq!(team.collaborators().last(), Some(&added));
}

#[test]
fn admit_rejects_existing_email() {
    let mut team = Team::seed("sb-1", NOW);
    assert!(team.is_member(" Sarah@Company.com "));
    let err = team.admit(Collaborator::invited(&invite("Sarah@Company.com", Role::Viewer), NOW)).unwrap_err();
    assert_eq!(err, TeamError::AlreadyMember("Sarah@Company.com".into()));
    assert_eq!(team.collaborators().len(), 3);
}

#[test]
fn change_role_and_remove() {
    let mut team = Team::seed("sb-1", NOW);
    assert!(team.change_role("user-2", Role::Editor));
    assert_eq!(team.collaborator("user-2").unwrap().role, Role::Editor);
    assert!(!team.change_role("nobody", Role::Admin));
    assert_eq!(team.remove("user-1").unwrap().name, "Sarah Miller");
    assert!(team.remove("user-1").is_none());
    assert_eq!(team.collaborators().len(), 2);
}

#[test]
fn comments_prepend_and_ignore_blank() {
    let mut team = Team::seed("sb-1", NOW);
    assert!(team.add_comment(FrameId::from("frame-2"), "Me", "/a.svg", "   ", NOW).is_none());
    assert_eq!(team.comments().len(), 3);
    let added = team.add_comment(FrameId::from("frame-2"), "Me", "/a.svg", " Nice pacing ", NOW).unwrap().clone();
    assert_eq!(added.content, "Nice pacing");
    assert_eq!(team.comments()[0], added);
    assert_eq!(team.open_comment_count(), 3);
}

#[test]
fn toggle_resolved_flips() {
    let mut team = Team::seed("sb-1", NOW);
    assert_eq!(team.toggle_resolved("comment-2"), Some(false));
    assert_eq!(team.toggle_resolved("comment-2"), Some(true));
    assert_eq!(team.toggle_resolved("missing"), None);
}
