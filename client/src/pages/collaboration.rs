//! Team members, roles, invitations, and frame comments for the active
//! storyboard.

use leptos::prelude::*;

use storyboard::frame::FrameId;
use storyboard::notification::relative_label;
use storyboard::team::{Collaborator, Comment, MemberStatus, Permission, Role};

use crate::net::api;
use crate::state::editor::EditorState;
use crate::state::session::SessionState;
use crate::state::team::TeamState;
use crate::state::ui::UiState;
use crate::util::clock::now_ms;

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Viewer => "Viewer",
        Role::Editor => "Editor",
        Role::Admin => "Admin",
    }
}

fn permission_label(permission: Permission) -> &'static str {
    match permission {
        Permission::View => "view",
        Permission::Edit => "edit",
        Permission::Comment => "comment",
        Permission::Manage => "manage",
    }
}

fn status_label(status: MemberStatus) -> &'static str {
    match status {
        MemberStatus::Online => "Online",
        MemberStatus::Offline => "Offline",
        MemberStatus::Pending => "Pending",
    }
}

#[component]
pub fn CollaborationPage() -> impl IntoView {
    let team = expect_context::<RwSignal<TeamState>>();

    let members = move || team.with(|t| t.team.collaborators().to_vec());
    let comments = move || team.with(|t| t.team.comments().to_vec());

    view! {
        <div class="collaboration-page">
            <header class="collaboration-page__header">
                <h1>"Collaboration"</h1>
                <button class="btn btn--primary" on:click=move |_| team.update(|t| t.invite_open = true)>
                    "Invite"
                </button>
            </header>

            <section class="member-list">
                <h2>{move || format!("Team ({})", team.with(|t| t.team.collaborators().len()))}</h2>
                <For each=members key=|c| (c.id.clone(), c.role) let:member>
                    <MemberRow member=member/>
                </For>
            </section>

            <section class="comment-list">
                <h2>{move || format!("Comments ({} open)", team.with(|t| t.team.open_comment_count()))}</h2>
                <CommentComposer/>
                <For each=comments key=|c| (c.id.clone(), c.resolved) let:comment>
                    <CommentRow comment=comment/>
                </For>
            </section>

            <Show when=move || team.with(|t| t.invite_open)>
                <InviteDialog/>
            </Show>
        </div>
    }
}

#[component]
fn MemberRow(member: Collaborator) -> impl IntoView {
    let team = expect_context::<RwSignal<TeamState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let role_id = member.id.clone();
    let remove_id = member.id.clone();
    let name = member.name.clone();
    let current_role = member.role;
    let activity = format!("{} · {}", status_label(member.status), member.activity_label(now_ms()));
    let permissions = member.role.permissions().iter().map(|p| permission_label(*p)).collect::<Vec<_>>().join(", ");

    let on_role = move |ev: leptos::ev::Event| {
        let Some(role) = Role::from_slug(&event_target_value(&ev)) else {
            return;
        };
        let changed = team.try_update(|t| t.team.change_role(&role_id, role)).unwrap_or(false);
        if changed {
            ui.update(|u| {
                u.push_toast("Role Updated", format!("Role changed to {}.", role_label(role)));
            });
        }
    };

    let on_remove = move |_| {
        let removed = team.try_update(|t| t.team.remove(&remove_id)).flatten();
        if let Some(removed) = removed {
            ui.update(|u| {
                u.push_toast("Collaborator Removed", format!("{} no longer has access.", removed.name));
            });
        }
    };

    view! {
        <div class="member-row">
            <img class="member-row__avatar" src=member.avatar alt=name.clone()/>
            <div class="member-row__info">
                <strong>{name}</strong>
                <span>{member.email}</span>
                <span class="member-row__status">
                    {activity}
                </span>
                <span class="member-row__permissions">{format!("Can {permissions}")}</span>
            </div>
            <select on:change=on_role>
                {Role::ALL
                    .into_iter()
                    .map(|role| {
                        view! {
                            <option value=role.slug() selected={role == current_role}>
                                {role_label(role)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button class="btn btn--ghost btn--small" on:click=on_remove>
                "Remove"
            </button>
        </div>
    }
}

#[component]
fn CommentComposer() -> impl IntoView {
    let team = expect_context::<RwSignal<TeamState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let frame_ids = move || editor.with(|e| e.frames.ids());
    let target = RwSignal::new(editor.with_untracked(|e| e.frames.ids().into_iter().next()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(frame_id) = target.get_untracked().or_else(|| frame_ids().into_iter().next()) else {
            ui.update(|u| {
                u.push_error("No Frames", "Add a frame before commenting.");
            });
            return;
        };
        let (author, avatar) = session
            .with_untracked(|s| s.user.as_ref().map(|u| (u.name.clone(), u.avatar.clone())))
            .unwrap_or_default();
        let text = team.with_untracked(|t| t.comment_draft.clone());
        let added = team
            .try_update(|t| {
                let added = t.team.add_comment(frame_id, &author, &avatar, &text, now_ms()).is_some();
                if added {
                    t.comment_draft.clear();
                }
                added
            })
            .unwrap_or(false);
        if added {
            ui.update(|u| {
                u.push_toast("Comment Added", "Your comment has been posted.");
            });
        }
    };

    view! {
        <form class="comment-composer" on:submit=on_submit>
            <select on:change=move |ev| target.set(Some(FrameId::new(event_target_value(&ev))))>
                {move || {
                    frame_ids()
                        .into_iter()
                        .enumerate()
                        .map(|(i, id)| {
                            let selected = target.get_untracked().as_ref() == Some(&id);
                            view! {
                                <option value=id.to_string() selected=selected>
                                    {format!("Frame {}", i + 1)}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <textarea
                placeholder="Leave a comment..."
                prop:value=move || team.with(|t| t.comment_draft.clone())
                on:input=move |ev| team.update(|t| t.comment_draft = event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class="btn"
                disabled=move || team.with(|t| t.comment_draft.trim().is_empty())
            >
                "Comment"
            </button>
        </form>
    }
}

#[component]
fn CommentRow(comment: Comment) -> impl IntoView {
    let team = expect_context::<RwSignal<TeamState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let id = comment.id.clone();

    let frame_label = {
        let frame_id = comment.frame_id.clone();
        move || {
            editor.with(|e| e.frames.position(&frame_id)).map_or_else(
                || "Removed frame".to_owned(),
                |index| format!("Frame {}", index + 1),
            )
        }
    };

    view! {
        <div class="comment" class:comment--resolved=comment.resolved>
            <img class="comment__avatar" src=comment.avatar alt=comment.author.clone()/>
            <div class="comment__body">
                <strong>{comment.author}</strong>
                <span class="comment__frame">{frame_label}</span>
                <p>{comment.content}</p>
                <time>{relative_label(comment.created_at_ms, now_ms())}</time>
            </div>
            <button
                class="btn btn--ghost btn--small"
                on:click=move |_| {
                    team.update(|t| {
                        t.team.toggle_resolved(&id);
                    });
                }
            >
                {if comment.resolved { "Reopen" } else { "Resolve" }}
            </button>
        </div>
    }
}

#[component]
fn InviteDialog() -> impl IntoView {
    let team = expect_context::<RwSignal<TeamState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if team.with_untracked(|t| t.inviting) {
            return;
        }
        let form = team.with_untracked(|t| t.invite.clone());
        if let Err(e) = form.validate() {
            ui.update(|u| {
                u.push_error(e.title(), e.to_string());
            });
            return;
        }
        team.update(|t| t.inviting = true);
        leptos::task::spawn_local(async move {
            match api::invite_collaborator(&form, now_ms()).await {
                Ok(invited) => {
                    let admitted = team
                        .try_update(|t| t.team.admit(invited).map(|c| c.email.clone()))
                        .unwrap_or_else(|| Ok(form.email.clone()));
                    team.update(TeamState::close_invite);
                    ui.update(|u| match admitted {
                        Ok(email) => {
                            u.push_toast("Invitation Sent", format!("An invitation has been sent to {email}."));
                        }
                        Err(e) => {
                            u.push_error("Already Invited", e.to_string());
                        }
                    });
                }
                Err(e) => {
                    team.update(|t| t.inviting = false);
                    ui.update(|u| {
                        u.push_failure(&e);
                    });
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop">
            <form class="dialog" role="dialog" on:submit=on_submit>
                <h2>"Invite a collaborator"</h2>
                <label for="invite-email">"Email"</label>
                <input
                    id="invite-email"
                    type="email"
                    prop:value=move || team.with(|t| t.invite.email.clone())
                    on:input=move |ev| team.update(|t| t.invite.email = event_target_value(&ev))
                />
                <label for="invite-role">"Role"</label>
                <select
                    id="invite-role"
                    on:change=move |ev| {
                        if let Some(role) = Role::from_slug(&event_target_value(&ev)) {
                            team.update(|t| t.invite.role = role);
                        }
                    }
                >
                    {Role::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <option value=role.slug() selected=move || team.with(|t| t.invite.role == role)>
                                    {role_label(role)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| team.update(TeamState::close_invite)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || team.with(|t| t.inviting)>
                        {move || if team.with(|t| t.inviting) { "Sending..." } else { "Send Invite" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
