//! Profile editing: the form shared by the settings page and the profile
//! modal opened from the navigation bar.

use leptos::prelude::*;

use storyboard::generate::StylePreset;
use storyboard::user::{ProfileUpdate, Theme, User};

use crate::net::api;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Profile form bound to the signed-in user. `on_saved` runs after a
/// successful save.
#[component]
pub fn ProfileForm(#[prop(optional, into)] on_saved: Option<Callback<()>>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let draft = RwSignal::new(
        session.with_untracked(|s| s.user.as_ref().map(ProfileUpdate::from_user)).unwrap_or_default(),
    );
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(user) = session.with_untracked(|s| s.user.clone()) else {
            return;
        };
        let update = draft.get_untracked();
        if let Err(e) = update.validate() {
            ui.update(|u| {
                u.push_error(e.title(), e.to_string());
            });
            return;
        }
        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = api::save_profile(&user, &update).await;
            saving.set(false);
            match result {
                Ok(saved) => {
                    session.update(|s| s.apply_user(saved));
                    ui.update(|u| {
                        u.push_toast("Profile Updated", "Your profile has been successfully updated.");
                    });
                    if let Some(cb) = on_saved {
                        cb.run(());
                    }
                }
                Err(e) => ui.update(|u| {
                    u.push_failure(&e);
                }),
            }
        });
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <label for="profile-name">"Name"</label>
            <input
                id="profile-name"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <label for="profile-email">"Email"</label>
            <input
                id="profile-email"
                type="email"
                prop:value=move || draft.with(|d| d.email.clone())
                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
            />
            <label for="profile-style">"Default style"</label>
            <select
                id="profile-style"
                on:change=move |ev| {
                    if let Some(style) = StylePreset::from_slug(&event_target_value(&ev)) {
                        draft.update(|d| d.preferences.default_style = style);
                    }
                }
            >
                {StylePreset::ALL
                    .into_iter()
                    .map(|style| {
                        view! {
                            <option
                                value=style.slug()
                                selected=move || draft.with(|d| d.preferences.default_style == style)
                            >
                                {style.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <label for="profile-theme">"Theme"</label>
            <select
                id="profile-theme"
                on:change=move |ev| {
                    if let Some(theme) = Theme::from_slug(&event_target_value(&ev)) {
                        draft.update(|d| d.preferences.theme = theme);
                    }
                }
            >
                {Theme::ALL
                    .into_iter()
                    .map(|theme| {
                        view! {
                            <option value=theme.slug() selected=move || draft.with(|d| d.preferences.theme == theme)>
                                {theme.slug()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <label class="profile-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.preferences.auto_save)
                    on:change=move |ev| draft.update(|d| d.preferences.auto_save = event_target_checked(&ev))
                />
                "Auto-save storyboards"
            </label>
            <label class="profile-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.preferences.notifications)
                    on:change=move |ev| draft.update(|d| d.preferences.notifications = event_target_checked(&ev))
                />
                "Email notifications"
            </label>
            <label class="profile-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.preferences.biometric_enabled)
                    on:change=move |ev| {
                        draft.update(|d| d.preferences.biometric_enabled = event_target_checked(&ev));
                    }
                />
                "Biometric sign-in"
            </label>
            <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
            </button>
        </form>
    }
}

/// Modal wrapper around [`ProfileForm`].
#[component]
pub fn ProfileModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close = move || ui.update(|u| u.profile_open = false);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let summary = move || {
        session.with(|s| {
            s.user.as_ref().map(|u: &User| {
                (u.avatar.clone(), u.name.clone(), u.plan.label(), u.provider.map_or("Email", |p| p.label()))
            })
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--profile"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Profile"</h2>
                {move || {
                    summary()
                        .map(|(avatar, name, plan, via)| {
                            view! {
                                <div class="dialog__profile-row">
                                    <img class="dialog__avatar" src=avatar alt=name.clone()/>
                                    <span>{name}</span>
                                    <span class="badge">{plan}</span>
                                    <span class="dialog__profile-label">{via}</span>
                                </div>
                            }
                        })
                }}
                <ProfileForm on_saved=Callback::new(move |()| close())/>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
