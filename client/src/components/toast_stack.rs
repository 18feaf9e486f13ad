//! Toast overlay. Each toast dismisses itself after a fixed delay.

use leptos::prelude::*;

use storyboard::consts::TOAST_TTL_MS;

use crate::state::ui::{Toast, ToastVariant, UiState};
use crate::util::timer::sleep_ms;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=move || ui.with(|u| u.toasts.clone()) key=|toast| toast.id let:toast>
                <ToastItem toast=toast/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let id = toast.id;

    leptos::task::spawn_local(async move {
        sleep_ms(TOAST_TTL_MS).await;
        ui.update(|u| u.dismiss_toast(id));
    });

    let class = match toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    };

    view! {
        <div class=class>
            <div class="toast__body">
                <strong class="toast__title">{toast.title}</strong>
                <p class="toast__description">{toast.description}</p>
            </div>
            <button class="toast__close" aria-label="Dismiss" on:click=move |_| ui.update(|u| u.dismiss_toast(id))>
                "×"
            </button>
        </div>
    }
}
