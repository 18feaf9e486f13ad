//! Account settings: profile, appearance, and notification delivery.

use leptos::prelude::*;

use storyboard::notification::NotificationKind;

use crate::components::profile_modal::ProfileForm;
use crate::state::notifications::NotificationState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::storage::BrowserStore;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let on_dark = move |_| {
        let next = dark_mode::toggle(&BrowserStore, ui.with_untracked(|u| u.dark_mode));
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <section class="settings-page__section">
                <h2>"Profile"</h2>
                <p>{move || session.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}</p>
                <ProfileForm/>
            </section>
            <section class="settings-page__section">
                <h2>"Appearance"</h2>
                <label>
                    <input type="checkbox" prop:checked=move || ui.with(|u| u.dark_mode) on:change=on_dark/>
                    "Dark mode"
                </label>
            </section>
            <section class="settings-page__section">
                <h2>"Notifications"</h2>
                {NotificationKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || notifications.with(|n| n.settings.allows(kind))
                                    on:change=move |ev| {
                                        let enabled = event_target_checked(&ev);
                                        notifications.update(|n| n.settings.set(kind, enabled));
                                    }
                                />
                                {format!("{} alerts", kind.slug())}
                            </label>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
