//! Integration catalog: category filter, connect and disconnect, and the
//! setup dialog for integrations that need credentials.

use leptos::prelude::*;

use storyboard::integration::{Category, ConnectPlan, Integration, IntegrationHub};

use crate::net::api;
use crate::state::integrations::IntegrationState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[component]
pub fn IntegrationsPage() -> impl IntoView {
    let integrations = expect_context::<RwSignal<IntegrationState>>();

    let visible = move || IntegrationHub::filtered(integrations.with(|i| i.category));

    view! {
        <div class="integrations-page">
            <header>
                <h1>"Integrations"</h1>
                <p>{move || format!("{} connected", integrations.with(|i| i.hub.connected_count()))}</p>
            </header>
            <div class="integrations-page__filters">
                <button
                    class="tab"
                    class:tab--active=move || integrations.with(|i| i.category.is_none())
                    on:click=move |_| integrations.update(|i| i.category = None)
                >
                    "All"
                </button>
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                class="tab"
                                class:tab--active=move || integrations.with(|i| i.category == Some(category))
                                on:click=move |_| integrations.update(|i| i.category = Some(category))
                            >
                                {category.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="integration-grid">
                <For each=visible key=|integration| integration.id let:integration>
                    <IntegrationCard integration=integration/>
                </For>
            </div>
            <Show when=move || integrations.with(|i| i.setup.is_some())>
                <SetupDialog/>
            </Show>
        </div>
    }
}

/// Run the mocked handshake and record the connection.
fn connect(
    integration: &'static Integration,
    integrations: RwSignal<IntegrationState>,
    ui: RwSignal<UiState>,
    title: &'static str,
) {
    integrations.update(|i| i.connecting.push(integration.id));
    leptos::task::spawn_local(async move {
        let result = api::connect_integration(integration).await;
        integrations.update(|i| {
            i.finish_connecting(integration.id);
            if result.is_ok() {
                i.hub.mark_connected(integration);
            }
        });
        match result {
            Ok(()) => ui.update(|u| {
                u.push_toast(title, format!("{} is now connected to StoryVision AI.", integration.name));
            }),
            Err(e) => ui.update(|u| {
                u.push_failure(&e);
            }),
        }
    });
}

#[component]
fn IntegrationCard(integration: &'static Integration) -> impl IntoView {
    let integrations = expect_context::<RwSignal<IntegrationState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let id = integration.id;

    let connected = move || integrations.with(|i| i.hub.is_connected(id));
    let busy = move || integrations.with(|i| i.is_connecting(id));

    let on_connect = move |_| {
        if busy() {
            return;
        }
        let plan = session.with_untracked(SessionState::plan);
        let checked = integrations.with_untracked(|i| i.hub.begin_connect(id, plan));
        match checked {
            Ok(ConnectPlan::Immediate(found)) => connect(found, integrations, ui, "Integration Connected"),
            Ok(ConnectPlan::NeedsSetup(found)) => integrations.update(|i| i.setup = Some(found)),
            Err(e) => ui.update(|u| {
                u.push_error(e.title(), e.to_string());
            }),
        }
    };

    let on_disconnect = move |_| {
        let removed = integrations.try_update(|i| i.hub.disconnect(id)).unwrap_or(false);
        if removed {
            ui.update(|u| {
                u.push_toast("Integration Disconnected", format!("{} has been disconnected.", integration.name));
            });
        }
    };

    view! {
        <article class="integration-card" class:integration-card--connected=connected>
            <header>
                <h3>{integration.name}</h3>
                <span class="badge">{integration.category.label()}</span>
                {integration.premium.then_some(view! { <span class="badge badge--premium">"Pro"</span> })}
            </header>
            <p>{integration.description}</p>
            <ul>{integration.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}</ul>
            <Show
                when=connected
                fallback=move || {
                    view! {
                        <button class="btn btn--primary" disabled=busy on:click=on_connect>
                            {move || if busy() { "Connecting..." } else { "Connect" }}
                        </button>
                    }
                }
            >
                <button class="btn btn--ghost" on:click=on_disconnect>
                    "Disconnect"
                </button>
            </Show>
        </article>
    }
}

#[component]
fn SetupDialog() -> impl IntoView {
    let integrations = expect_context::<RwSignal<IntegrationState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = move || integrations.with(|i| i.setup.map(|s| s.name).unwrap_or_default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(integration) = integrations.with_untracked(|i| i.setup) else {
            return;
        };
        if integrations.with_untracked(|i| i.setup_key.trim().is_empty()) {
            ui.update(|u| {
                u.push_error("Missing Credentials", "Enter an API key to finish setup.");
            });
            return;
        }
        integrations.update(IntegrationState::close_setup);
        connect(integration, integrations, ui, "Setup Complete");
    };

    view! {
        <div class="dialog-backdrop">
            <form class="dialog" role="dialog" on:submit=on_submit>
                <h2>{move || format!("Set up {}", name())}</h2>
                <label for="setup-key">"API key"</label>
                <input
                    id="setup-key"
                    type="password"
                    prop:value=move || integrations.with(|i| i.setup_key.clone())
                    on:input=move |ev| integrations.update(|i| i.setup_key = event_target_value(&ev))
                />
                <div class="dialog__actions">
                    <button
                        type="button"
                        class="btn"
                        on:click=move |_| integrations.update(IntegrationState::close_setup)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Connect"
                    </button>
                </div>
            </form>
        </div>
    }
}
