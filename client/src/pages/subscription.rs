//! Plan catalog with the billing toggle and the upgrade confirmation.

use leptos::prelude::*;

use storyboard::catalog::{BillingCycle, PlanOffer, catalog, offer};

use crate::net::api;
use crate::state::session::SessionState;
use crate::state::subscription::SubscriptionState;
use crate::state::ui::UiState;

#[component]
pub fn SubscriptionPage() -> impl IntoView {
    let subscription = expect_context::<RwSignal<SubscriptionState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let current = move || session.with(SessionState::plan);

    view! {
        <div class="subscription-page">
            <header>
                <h1>"Choose your plan"</h1>
                <p>{move || format!("You're on the {} plan.", current().label())}</p>
            </header>
            <div class="billing-toggle" role="radiogroup">
                <button
                    class="tab"
                    class:tab--active=move || subscription.with(|s| s.cycle == BillingCycle::Monthly)
                    on:click=move |_| subscription.update(|s| s.cycle = BillingCycle::Monthly)
                >
                    "Monthly"
                </button>
                <button
                    class="tab"
                    class:tab--active=move || subscription.with(|s| s.cycle == BillingCycle::Yearly)
                    on:click=move |_| subscription.update(|s| s.cycle = BillingCycle::Yearly)
                >
                    "Yearly"
                </button>
            </div>
            <div class="plan-grid">
                {catalog().iter().map(|plan| view! { <PlanCard plan=*plan/> }).collect_view()}
            </div>
            <Show when=move || subscription.with(|s| s.pending.is_some())>
                <UpgradeDialog/>
            </Show>
        </div>
    }
}

#[component]
fn PlanCard(plan: PlanOffer) -> impl IntoView {
    let subscription = expect_context::<RwSignal<SubscriptionState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let is_current = move || session.with(SessionState::plan) == plan.tier;
    let price = move || {
        let cycle = subscription.with(|s| s.cycle);
        format!("${}{}", plan.price(cycle), cycle.suffix())
    };
    let discount = plan.yearly_discount();

    view! {
        <article class="plan-card" class:plan-card--popular=plan.popular class:plan-card--current=is_current>
            {plan.popular.then_some(view! { <span class="badge">"Most Popular"</span> })}
            <h2>{plan.name}</h2>
            <p>{plan.description}</p>
            <p class="plan-card__price">{price}</p>
            <Show when=move || { discount > 0 && subscription.with(|s| s.cycle == BillingCycle::Yearly) }>
                <p class="plan-card__discount">{format!("Save {discount}%")}</p>
            </Show>
            <ul class="plan-card__features">
                {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
            <ul class="plan-card__limitations">
                {plan.limitations.iter().map(|l| view! { <li>{*l}</li> }).collect_view()}
            </ul>
            <button
                class="btn btn--primary"
                disabled=is_current
                on:click=move |_| {
                    let current = session.with_untracked(SessionState::plan);
                    subscription.update(|s| {
                        s.choose(current, plan.tier);
                    });
                }
            >
                {move || if is_current() { "Current Plan".to_owned() } else { format!("Switch to {}", plan.name) }}
            </button>
        </article>
    }
}

#[component]
fn UpgradeDialog() -> impl IntoView {
    let subscription = expect_context::<RwSignal<SubscriptionState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let target = move || subscription.with(|s| s.pending).map(offer);

    let on_confirm = move |_| {
        let Some(target) = subscription.with_untracked(|s| s.pending) else {
            return;
        };
        if subscription.with_untracked(|s| s.processing) {
            return;
        }
        let current = session.with_untracked(SessionState::plan);
        subscription.update(|s| s.processing = true);
        leptos::task::spawn_local(async move {
            let result = api::upgrade_plan(current, target).await;
            subscription.update(SubscriptionState::close);
            match result {
                Ok(plan) => {
                    session.update(|s| s.select_plan(plan));
                    ui.update(|u| {
                        u.push_toast("Plan Updated!", format!("You're now on the {} plan.", plan.label()));
                    });
                }
                Err(e) => ui.update(|u| {
                    u.push_failure(&e);
                }),
            }
        });
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog">
                {move || {
                    target()
                        .map(|plan| {
                            let cycle = subscription.with_untracked(|s| s.cycle);
                            view! {
                                <h2>{format!("Switch to {}", plan.name)}</h2>
                                <p>{format!("You'll be billed ${}{}.", plan.price(cycle), cycle.suffix())}</p>
                            }
                        })
                }}
                <div class="dialog__actions">
                    <button
                        class="btn"
                        disabled=move || subscription.with(|s| s.processing)
                        on:click=move |_| subscription.update(SubscriptionState::close)
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || subscription.with(|s| s.processing)
                        on:click=on_confirm
                    >
                        {move || if subscription.with(|s| s.processing) { "Processing..." } else { "Confirm" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
