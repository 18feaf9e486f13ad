//! Dashboard: analytics summary and the storyboard library.

use leptos::prelude::*;

use storyboard::library::{Analytics, StoryboardSummary, group_thousands, library, share_link};
use storyboard::plan::View;

use crate::state::editor::{EditorState, EditorTab};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::clipboard::copy_text;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let editor = expect_context::<RwSignal<EditorState>>();

    let analytics = Analytics::seed();
    let greeting = move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    let open_generator = move || {
        let plan = session.with_untracked(SessionState::plan);
        ui.update(|u| {
            u.request_view(plan, View::Generator);
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>{move || format!("Welcome back, {}", greeting())}</h1>
                    <p>"Here's how your storyboards are doing."</p>
                </div>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        editor.update(|e| e.tab = EditorTab::Create);
                        open_generator();
                    }
                >
                    "New Storyboard"
                </button>
            </header>

            <section class="dashboard-page__stats">
                <StatCard label="Storyboards" value=analytics.total_storyboards.to_string()/>
                <StatCard label="Total views" value=group_thousands(analytics.total_views)/>
                <StatCard label="Shares" value=group_thousands(analytics.total_shares)/>
                <StatCard label="Collaborators" value=analytics.total_collaborators.to_string()/>
                <StatCard label="Monthly growth" value=format!("+{}%", analytics.monthly_growth_percent)/>
            </section>
            <p class="dashboard-page__popular">
                "Most popular: " <strong>{analytics.popular_storyboard}</strong>
            </p>

            <section class="dashboard-page__library">
                <h2>"Your storyboards"</h2>
                <div class="storyboard-grid">
                    {library()
                        .into_iter()
                        .map(|summary| view! { <StoryboardCard summary=summary on_open=Callback::new(move |()| open_generator())/> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}

#[component]
fn StoryboardCard(summary: StoryboardSummary, on_open: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let id = summary.id;

    let on_share = move |_| {
        let link = share_link(id);
        if copy_text(&link) {
            ui.update(|u| {
                u.push_toast("Share Link Copied", "The share link has been copied to your clipboard.");
            });
        } else {
            ui.update(|u| {
                u.push_error("Copy Failed", format!("Copy this link manually: {link}"));
            });
        }
    };

    view! {
        <article class="storyboard-card">
            <img class="storyboard-card__thumb" src=summary.thumbnail() alt=summary.title/>
            <div class="storyboard-card__body">
                <h3>{summary.title}</h3>
                <p>{summary.description}</p>
                <div class="storyboard-card__meta">
                    <span class="badge">{summary.status.label()}</span>
                    <span>{format!("{} frames", summary.frames)}</span>
                    <span>{format!("{} views", group_thousands(summary.views))}</span>
                    <span>{format!("{} shares", summary.shares)}</span>
                    <span>{format!("{} collaborators", summary.collaborators)}</span>
                    {summary.public.then_some(view! { <span class="badge badge--public">"Public"</span> })}
                </div>
                <p class="storyboard-card__dates">
                    {format!("Created {} · Updated {}", summary.created_on, summary.updated_on)}
                </p>
            </div>
            <div class="storyboard-card__actions">
                <button class="btn" on:click=move |_| on_open.run(())>
                    "Open"
                </button>
                <button class="btn btn--ghost" on:click=on_share>
                    "Share"
                </button>
            </div>
        </article>
    }
}
