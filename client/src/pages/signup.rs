//! Account creation form.

use leptos::prelude::*;

use storyboard::generate::StylePreset;
use storyboard::validate::SignupForm;

use crate::app::enter_session;
use crate::components::social_login::SocialLoginButtons;
use crate::net::api;
use crate::state::editor::EditorState;
use crate::state::session::{AuthScreen, SessionState};
use crate::state::ui::UiState;
use crate::util::clock::now_ms;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let form = RwSignal::new(SignupForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.busy) {
            return;
        }
        let submitted = form.get_untracked();
        if let Err(e) = submitted.validate() {
            ui.update(|u| {
                u.push_error(e.title(), e.to_string());
            });
            return;
        }
        session.update(|s| s.busy = true);
        leptos::task::spawn_local(async move {
            match api::signup(&submitted, now_ms()).await {
                Ok(user) => {
                    enter_session(user, session, editor, ui);
                    ui.update(|u| {
                        u.push_toast("Account Created!", "Welcome to StoryVision AI. Let's create amazing storyboards!");
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
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label for="signup-name">"Full name"</label>
                    <input
                        id="signup-name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <label for="signup-email">"Email"</label>
                    <input
                        id="signup-email"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <label for="signup-password">"Password"</label>
                    <input
                        id="signup-password"
                        type="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <label for="signup-confirm">"Confirm password"</label>
                    <input
                        id="signup-confirm"
                        type="password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <label for="signup-style">"Preferred style"</label>
                    <select
                        id="signup-style"
                        on:change=move |ev| {
                            if let Some(style) = StylePreset::from_slug(&event_target_value(&ev)) {
                                form.update(|f| f.preferred_style = style);
                            }
                        }
                    >
                        {StylePreset::ALL
                            .into_iter()
                            .map(|style| {
                                view! {
                                    <option
                                        value=style.slug()
                                        selected=move || form.with(|f| f.preferred_style == style)
                                    >
                                        {style.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <label class="auth-form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.accept_terms)
                            on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                        />
                        "I agree to the terms and conditions"
                    </label>
                    <button type="submit" class="btn btn--primary" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <SocialLoginButtons/>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <button class="link-button" on:click=move |_| session.update(|s| s.show(AuthScreen::Login))>
                        "Sign in"
                    </button>
                </p>
            </div>
        </div>
    }
}
