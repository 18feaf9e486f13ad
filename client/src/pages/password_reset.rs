//! Password reset request.

use leptos::prelude::*;

use storyboard::validate::ResetForm;

use crate::net::api;
use crate::state::session::{AuthScreen, SessionState};
use crate::state::ui::UiState;

#[component]
pub fn PasswordResetPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let email = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.busy) {
            return;
        }
        let form = ResetForm { email: email.get_untracked() };
        if let Err(e) = form.validate() {
            ui.update(|u| {
                u.push_error(e.title(), e.to_string());
            });
            return;
        }
        session.update(|s| s.busy = true);
        leptos::task::spawn_local(async move {
            let result = api::request_password_reset(&form).await;
            session.update(|s| s.busy = false);
            match result {
                Ok(()) => {
                    sent.set(true);
                    ui.update(|u| {
                        u.push_toast("Reset Link Sent", "Check your email for instructions to reset your password.");
                    });
                }
                Err(e) => ui.update(|u| {
                    u.push_failure(&e);
                }),
            }
        });
    };

    let back = move |_| session.update(|s| s.show(AuthScreen::Login));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <Show
                    when=move || sent.get()
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_submit>
                                <label for="reset-email">"Email"</label>
                                <input
                                    id="reset-email"
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <button
                                    type="submit"
                                    class="btn btn--primary"
                                    disabled=move || session.with(|s| s.busy)
                                >
                                    "Send Reset Link"
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="auth-card__notice">
                        "We sent a reset link to " <strong>{move || email.get()}</strong> "."
                    </p>
                </Show>
                <button class="link-button" on:click=back>
                    "Back to sign in"
                </button>
            </div>
        </div>
    }
}
