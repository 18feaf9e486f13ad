//! Email/password sign-in with social providers below.

use leptos::prelude::*;

use storyboard::validate::LoginForm;

use crate::app::enter_session;
use crate::components::social_login::SocialLoginButtons;
use crate::net::api;
use crate::state::editor::EditorState;
use crate::state::session::{AuthScreen, SessionState};
use crate::state::ui::UiState;
use crate::util::clock::now_ms;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.busy) {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        if let Err(e) = form.validate() {
            ui.update(|u| {
                u.push_error(e.title(), e.to_string());
            });
            return;
        }
        session.update(|s| s.busy = true);
        leptos::task::spawn_local(async move {
            match api::login(&form, now_ms()).await {
                Ok(user) => {
                    enter_session(user, session, editor, ui);
                    ui.update(|u| {
                        u.push_toast("Welcome back!", "You've successfully logged in to StoryVision AI.");
                    });
                }
                Err(e) => {
                    session.update(|s| s.busy = false);
                    ui.update(|u| {
                        u.push_failure(&e);
                    });
                }
            }
        });
    };

    let busy = move || session.with(|s| s.busy);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"StoryVision AI"</h1>
                <p class="auth-card__subtitle">"Sign in to continue creating"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="link-button"
                        on:click=move |_| session.update(|s| s.show(AuthScreen::Reset))
                    >
                        "Forgot password?"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <SocialLoginButtons/>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <button class="link-button" on:click=move |_| session.update(|s| s.show(AuthScreen::Signup))>
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}
