//! Root component: context providers, the auth gate, and the view switch.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use storyboard::generate::StylePreset;
use storyboard::plan::View;
use storyboard::user::User;

use crate::components::navigation::Navigation;
use crate::components::notification_center::NotificationCenter;
use crate::components::profile_modal::ProfileModal;
use crate::components::toast_stack::ToastStack;
use crate::pages::{
    collaboration::CollaborationPage, dashboard::DashboardPage, generator::GeneratorPage,
    integrations::IntegrationsPage, login::LoginPage, password_reset::PasswordResetPage, settings::SettingsPage,
    signup::SignupPage, subscription::SubscriptionPage, usage::UsagePage,
};
use crate::state::editor::EditorState;
use crate::state::session::{AuthScreen, SessionState};
use crate::state::ui::UiState;
use crate::state::workspace::Workspace;
use crate::util::clock::now_ms;
use crate::util::dark_mode;
use crate::util::storage::BrowserStore;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let now = now_ms();
    let dark = dark_mode::read_preference(&BrowserStore);
    dark_mode::apply(dark);

    let workspace = Workspace::new(now, dark);
    workspace.provide();
    let Workspace { session, usage, .. } = workspace;

    // Usage quotas follow the signed-in plan.
    Effect::new(move || {
        let plan = session.with(SessionState::plan);
        usage.update(|u| u.sync_plan(plan));
    });

    view! {
        <Title text="StoryVision AI"/>
        <Show when=move || session.with(SessionState::is_signed_in) fallback=|| view! { <AuthGate/> }>
            <Shell/>
        </Show>
        <ToastStack/>
    }
}

#[component]
fn AuthGate() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    move || match session.with(|s| s.screen) {
        AuthScreen::Login => view! { <LoginPage/> }.into_any(),
        AuthScreen::Signup => view! { <SignupPage/> }.into_any(),
        AuthScreen::Reset => view! { <PasswordResetPage/> }.into_any(),
    }
}

#[component]
fn Shell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <div class="app-shell">
            <Navigation/>
            <main class="app-shell__main">{move || render_view(ui.with(|u| u.view))}</main>
            <Show when=move || ui.with(|u| u.notifications_open)>
                <NotificationCenter/>
            </Show>
            <Show when=move || ui.with(|u| u.profile_open)>
                <ProfileModal/>
            </Show>
        </div>
    }
}

fn render_view(active: View) -> AnyView {
    match active {
        View::Dashboard => view! { <DashboardPage/> }.into_any(),
        View::Generator => view! { <GeneratorPage/> }.into_any(),
        View::Collaboration => view! { <CollaborationPage/> }.into_any(),
        View::Integrations => view! { <IntegrationsPage/> }.into_any(),
        View::Subscription => view! { <SubscriptionPage/> }.into_any(),
        View::Usage => view! { <UsagePage/> }.into_any(),
        View::Settings => view! { <SettingsPage/> }.into_any(),
    }
}

/// Install `user` as the session user and reset per-session views.
pub(crate) fn enter_session(
    user: User,
    session: RwSignal<SessionState>,
    editor: RwSignal<EditorState>,
    ui: RwSignal<UiState>,
) {
    reset_workspace(user.preferences.default_style, editor, ui);
    session.update(|s| s.sign_in(user));
}

/// Fresh editor in `style` and the landing view with dialogs closed.
pub(crate) fn reset_workspace(style: StylePreset, editor: RwSignal<EditorState>, ui: RwSignal<UiState>) {
    editor.set(EditorState::for_style(style));
    ui.update(UiState::reset);
}
