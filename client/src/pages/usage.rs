//! Usage tracker: quotas for the current plan with warning states. A
//! background simulator occasionally records AI generations.

use leptos::prelude::*;

use storyboard::consts::USAGE_TICK_MS;
use storyboard::plan::View;
use storyboard::usage::{Limit, Quota, UsageItem, UsageStatus, format_storage};

use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::state::usage::UsageState;
use crate::util::dice;
use crate::util::timer::spawn_interval;

fn status_class(status: UsageStatus) -> &'static str {
    match status {
        UsageStatus::Normal => "usage-row--normal",
        UsageStatus::Warning => "usage-row--warning",
        UsageStatus::Critical => "usage-row--critical",
        UsageStatus::Exceeded => "usage-row--exceeded",
        UsageStatus::Unlimited => "usage-row--unlimited",
    }
}

fn quota_text(quota: &Quota) -> String {
    match quota.limit {
        Limit::Capped(limit) => format!("{} / {}", quota.used, limit),
        Limit::Unlimited => format!("{} / Unlimited", quota.used),
    }
}

#[component]
pub fn UsagePage() -> impl IntoView {
    let usage = expect_context::<RwSignal<UsageState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    spawn_interval(USAGE_TICK_MS, move || {
        usage.try_update(|u| u.tick(dice::roll()));
    });

    let exceeded = move || usage.with(|u| u.limits.exceeded());
    let critical = move || usage.with(|u| u.limits.critical());
    let names = |items: Vec<UsageItem>| items.iter().map(|i| i.label()).collect::<Vec<_>>().join(", ");

    let storage = move || {
        usage.with(|u| {
            let q = u.limits.storage_mb;
            match q.limit {
                Limit::Capped(limit) => format!("{} of {}", format_storage(q.used), format_storage(limit)),
                Limit::Unlimited => format_storage(q.used),
            }
        })
    };

    view! {
        <div class="usage-page">
            <header>
                <h1>"Usage"</h1>
                <p>{move || format!("{} plan, current billing period", usage.with(|u| u.plan.label()))}</p>
            </header>
            <Show when=move || !exceeded().is_empty()>
                <div class="alert alert--destructive">
                    <strong>"Limit reached: "</strong>
                    {move || names(exceeded())}
                    <button
                        class="btn btn--small"
                        on:click=move |_| {
                            let plan = session.with_untracked(SessionState::plan);
                            ui.update(|u| {
                                u.request_view(plan, View::Subscription);
                            });
                        }
                    >
                        "Upgrade"
                    </button>
                </div>
            </Show>
            <Show when=move || !critical().is_empty()>
                <div class="alert alert--warning">
                    <strong>"Almost at your limit: "</strong>
                    {move || names(critical())}
                </div>
            </Show>
            <section class="usage-list">
                {UsageItem::ALL
                    .into_iter()
                    .map(|item| {
                        let quota = move || usage.with(|u| *u.limits.quota(item));
                        view! {
                            <div class=move || format!("usage-row {}", status_class(quota().status()))>
                                <div class="usage-row__label">
                                    <strong>{item.label()}</strong>
                                    <span>{item.description()}</span>
                                </div>
                                <span class="usage-row__count">{move || quota_text(&quota())}</span>
                                <progress max="100" value=move || format!("{:.0}", quota().percentage())></progress>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="usage-storage">
                <h2>"Storage"</h2>
                <p>{storage}</p>
                <progress max="100" value=move || format!("{:.0}", usage.with(|u| u.limits.storage_mb.percentage()))></progress>
            </section>
        </div>
    }
}
