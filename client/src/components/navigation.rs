//! Top navigation bar: view switcher, notifications bell, theme toggle,
//! profile and sign-out.

use leptos::prelude::*;

use storyboard::plan::View;

use crate::state::session::SessionState;
use crate::state::workspace::Workspace;
use crate::util::clock::now_ms;
use crate::util::dark_mode;
use crate::util::storage::BrowserStore;

#[component]
pub fn Navigation() -> impl IntoView {
    let workspace = Workspace::expect();
    let Workspace { session, ui, notifications, .. } = workspace;

    let plan = move || session.with(SessionState::plan);
    let unread = move || notifications.with(|n| n.feed.unread_count());

    let on_toggle_dark = move |_| {
        let current = ui.with_untracked(|u| u.dark_mode);
        let next = dark_mode::toggle(&BrowserStore, current);
        ui.update(|u| u.dark_mode = next);
    };

    let on_logout = move |_| {
        workspace.sign_out(now_ms());
        ui.update(|u| {
            u.push_toast("Logged Out", "You have been successfully logged out.");
        });
    };

    let initials = move || session.with(|s| s.user.as_ref().map(storyboard::user::User::initials).unwrap_or_default());
    let user_name = move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <header class="nav">
            <span class="nav__brand">"StoryVision AI"</span>
            <nav class="nav__views">
                {View::ALL
                    .into_iter()
                    .map(|view| {
                        let locked = move || !plan().permits(view);
                        view! {
                            <button
                                class="nav__view"
                                class:nav__view--active=move || ui.with(|u| u.view == view)
                                class:nav__view--locked=locked
                                on:click=move |_| {
                                    let plan = session.with_untracked(SessionState::plan);
                                    ui.update(|u| {
                                        u.request_view(plan, view);
                                    });
                                }
                            >
                                {view.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="nav__actions">
                <span class="nav__plan">{move || plan().label()}</span>
                <button
                    class="nav__bell"
                    aria-label="Notifications"
                    on:click=move |_| ui.update(|u| u.notifications_open = !u.notifications_open)
                >
                    "🔔"
                    <Show when=move || { unread() > 0 }>
                        <span class="nav__badge">{unread}</span>
                    </Show>
                </button>
                <button class="nav__theme" aria-label="Toggle dark mode" on:click=on_toggle_dark>
                    {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
                </button>
                <button class="nav__avatar" title=user_name on:click=move |_| ui.update(|u| u.profile_open = true)>
                    {initials}
                </button>
                <button class="btn btn--ghost" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
