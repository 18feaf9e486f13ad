//! Notification panel: filter tabs, the feed, per-kind delivery settings, and
//! the realtime simulator that drips new collaboration alerts in.

use leptos::prelude::*;

use storyboard::consts::NOTIFICATION_TICK_MS;
use storyboard::notification::{
    Notification, NotificationAction, NotificationKind, NotificationTab, Priority, relative_label,
};
use storyboard::plan::View;

use crate::state::notifications::NotificationState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::clock::now_ms;
use crate::util::dice;
use crate::util::timer::spawn_interval;

fn kind_label(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Collaboration => "Collaboration",
        NotificationKind::System => "System",
        NotificationKind::Billing => "Billing",
        NotificationKind::Feature => "Features",
        NotificationKind::Security => "Security",
    }
}

fn tab_label(tab: NotificationTab) -> &'static str {
    match tab {
        NotificationTab::All => "All",
        NotificationTab::Unread => "Unread",
        NotificationTab::Kind(kind) => kind_label(kind),
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "notification--low",
        Priority::Medium => "notification--medium",
        Priority::High => "notification--high",
    }
}

#[component]
pub fn NotificationCenter() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    spawn_interval(NOTIFICATION_TICK_MS, move || {
        let injected = notifications.try_update(|n| n.tick(dice::roll(), now_ms())).unwrap_or(false);
        if injected {
            leptos::logging::log!("notifications: realtime alert");
        }
    });

    let tabs: Vec<NotificationTab> = [NotificationTab::All, NotificationTab::Unread]
        .into_iter()
        .chain(NotificationKind::ALL.into_iter().map(NotificationTab::Kind))
        .collect();

    let on_mark_all = move |_| {
        notifications.update(|n| n.feed.mark_all_read());
        ui.update(|u| {
            u.push_toast("Notifications Updated", "All notifications marked as read");
        });
    };

    let on_action = Callback::new(move |id: String| {
        let Some(action) = notifications.try_update(|n| n.activate(&id)).flatten() else {
            return;
        };
        let plan = session.with_untracked(SessionState::plan);
        ui.update(|u| {
            if let Some((title, description)) = action.notice() {
                u.push_toast(title, description);
            }
            match action {
                NotificationAction::OpenSubscription => {
                    u.request_view(plan, View::Subscription);
                    u.notifications_open = false;
                }
                NotificationAction::OpenStoryboard(_) => {
                    u.request_view(plan, View::Generator);
                    u.notifications_open = false;
                }
                NotificationAction::Download(_) | NotificationAction::None => {}
            }
        });
    });

    let visible = move || {
        notifications.with(|n| n.feed.filtered(n.tab).into_iter().cloned().collect::<Vec<Notification>>())
    };

    view! {
        <aside class="notification-center">
            <header class="notification-center__header">
                <h2>"Notifications"</h2>
                <button
                    class="btn btn--ghost"
                    disabled=move || notifications.with(|n| n.feed.unread_count() == 0)
                    on:click=on_mark_all
                >
                    "Mark all read"
                </button>
                <button
                    class="btn btn--ghost"
                    aria-label="Notification settings"
                    on:click=move |_| notifications.update(|n| n.settings_open = !n.settings_open)
                >
                    "⚙"
                </button>
                <button
                    class="btn btn--ghost"
                    aria-label="Close"
                    on:click=move |_| ui.update(|u| u.notifications_open = false)
                >
                    "×"
                </button>
            </header>
            <Show when=move || notifications.with(|n| n.settings_open)>
                <NotificationSettingsPanel/>
            </Show>
            <div class="notification-center__tabs">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tab"
                                class:tab--active=move || notifications.with(|n| n.tab == tab)
                                on:click=move |_| notifications.update(|n| n.tab = tab)
                            >
                                {tab_label(tab)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <ul class="notification-center__list">
                <For each=visible key=|n| (n.id.clone(), n.read) let:item>
                    <NotificationRow item=item on_action=on_action/>
                </For>
            </ul>
            <Show when=move || visible().is_empty()>
                <p class="notification-center__empty">"You're all caught up."</p>
            </Show>
        </aside>
    }
}

#[component]
fn NotificationRow(item: Notification, on_action: Callback<String>) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let id = item.id.clone();
    let read_id = id.clone();
    let dismiss_id = id.clone();
    let age = relative_label(item.created_at_ms, now_ms());
    let class = format!(
        "notification {}{}",
        priority_class(item.priority),
        if item.read { "" } else { " notification--unread" }
    );

    view! {
        <li class=class>
            <div class="notification__body" on:click=move |_| {
                notifications.update(|n| {
                    n.feed.mark_read(&read_id);
                });
            }>
                <span class="notification__kind">{kind_label(item.kind)}</span>
                <strong>{item.title}</strong>
                <p>{item.message}</p>
                <time>{age}</time>
            </div>
            <div class="notification__actions">
                {item.actionable.then(|| {
                    view! {
                        <button class="btn btn--small" on:click=move |_| on_action.run(id.clone())>
                            "View"
                        </button>
                    }
                })}
                <button
                    class="btn btn--ghost btn--small"
                    aria-label="Dismiss"
                    on:click=move |_| {
                        notifications.update(|n| {
                            n.feed.dismiss(&dismiss_id);
                        });
                    }
                >
                    "×"
                </button>
            </div>
        </li>
    }
}

#[component]
fn NotificationSettingsPanel() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <section class="notification-settings">
            <h3>"Delivery"</h3>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || notifications.with(|n| n.settings.email)
                    on:change=move |ev| notifications.update(|n| n.settings.email = event_target_checked(&ev))
                />
                "Email notifications"
            </label>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || notifications.with(|n| n.settings.push)
                    on:change=move |ev| notifications.update(|n| n.settings.push = event_target_checked(&ev))
                />
                "Push notifications"
            </label>
            <h3>"Categories"</h3>
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
                            {kind_label(kind)}
                        </label>
                    }
                })
                .collect_view()}
        </section>
    }
}
