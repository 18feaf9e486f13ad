//! Social sign-in buttons and the second-factor dialog for returning
//! accounts.
//!
//! A first-time provider login creates and persists the account and signs in
//! at once. A known account is held pending until it passes the biometric
//! prompt or the six-digit passcode fallback.

use leptos::prelude::*;

use storyboard::user::AuthProvider;

use crate::app::{enter_session, reset_workspace};
use crate::net::api::{self, SocialOutcome};
use crate::state::editor::EditorState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::clock::now_ms;
use crate::util::dice;
use crate::util::storage::BrowserStore;

#[component]
pub fn SocialLoginButtons() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_provider = move |provider: AuthProvider| {
        if session.with_untracked(|s| s.busy) {
            return;
        }
        session.update(|s| s.busy = true);
        leptos::task::spawn_local(async move {
            match api::social_login(provider, &BrowserStore, now_ms()).await {
                Ok(SocialOutcome::Created(user)) => {
                    let name = user.name.clone();
                    enter_session(user, session, editor, ui);
                    ui.update(|u| {
                        u.push_toast("Account Created!", format!("Welcome to StoryVision AI, {name}!"));
                    });
                }
                Ok(SocialOutcome::Returning(user)) => session.update(|s| s.hold_pending(user)),
                Err(e) => {
                    session.update(|s| s.busy = false);
                    ui.update(|u| {
                        u.push_failure(&e);
                    });
                }
            }
        });
    };

    view! {
        <div class="social-login">
            <p class="social-login__divider">"or continue with"</p>
            {AuthProvider::ALL
                .into_iter()
                .map(|provider| {
                    view! {
                        <button
                            type="button"
                            class=format!("btn social-login__button social-login__button--{}", provider.slug())
                            disabled=move || session.with(|s| s.busy)
                            on:click=move |_| on_provider(provider)
                        >
                            {provider.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        <Show when=move || session.with(|s| s.pending.is_some())>
            <SecondFactorDialog/>
        </Show>
    }
}

#[component]
fn SecondFactorDialog() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let passcode = RwSignal::new(String::new());
    let use_passcode = RwSignal::new(false);
    let verifying = RwSignal::new(false);

    let confirm = move || {
        let Some((name, style)) =
            session.with_untracked(|s| s.pending.as_ref().map(|u| (u.name.clone(), u.preferences.default_style)))
        else {
            return;
        };
        reset_workspace(style, editor, ui);
        session.update(|s| {
            s.confirm_pending();
        });
        ui.update(|u| {
            u.push_toast("Welcome back!", format!("Signed in as {name}."));
        });
    };

    let on_biometric = move |_| {
        if verifying.get_untracked() {
            return;
        }
        verifying.set(true);
        let roll = dice::roll();
        leptos::task::spawn_local(async move {
            let result = api::verify_biometric(roll).await;
            verifying.set(false);
            match result {
                Ok(()) => confirm(),
                Err(e) => {
                    use_passcode.set(true);
                    ui.update(|u| {
                        u.push_failure(&e);
                    });
                }
            }
        });
    };

    let on_passcode = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match api::verify_passcode(&passcode.get_untracked()) {
            Ok(()) => confirm(),
            Err(e) => ui.update(|u| {
                u.push_failure(&e);
            }),
        }
    };

    let on_cancel = move |_| session.update(SessionState::cancel_pending);

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--verify" role="dialog">
                <h2>"Verify it's you"</h2>
                <Show
                    when=move || use_passcode.get()
                    fallback=move || {
                        view! {
                            <p>"Use your device's biometric sensor to finish signing in."</p>
                            <button class="btn btn--primary" disabled=move || verifying.get() on:click=on_biometric>
                                {move || if verifying.get() { "Verifying..." } else { "Use Biometrics" }}
                            </button>
                            <button class="link-button" on:click=move |_| use_passcode.set(true)>
                                "Use passcode instead"
                            </button>
                        }
                    }
                >
                    <form class="dialog__passcode" on:submit=on_passcode>
                        <label for="passcode">"6-digit passcode"</label>
                        <input
                            id="passcode"
                            inputmode="numeric"
                            maxlength="6"
                            autocomplete="one-time-code"
                            prop:value=move || passcode.get()
                            on:input=move |ev| passcode.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn--primary">
                            "Verify"
                        </button>
                    </form>
                </Show>
                <button class="btn btn--ghost" on:click=on_cancel>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
