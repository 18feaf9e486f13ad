//! Storyboard generator and editor.
//!
//! The Create tab collects the generation request and runs the mocked AI
//! call. The Edit tab is the drag-and-drop frame grid with add, export and
//! share actions.

use leptos::prelude::*;

use storyboard::generate::StylePreset;
use storyboard::library::editor_share_link;

use crate::components::frame_card::FrameCard;
use crate::net::api;
use crate::state::editor::{EditorState, EditorTab, new_share_token};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::state::usage::UsageState;
use crate::util::clipboard::copy_text;
use crate::util::clock::now_ms;

#[component]
pub fn GeneratorPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    view! {
        <div class="generator-page">
            <div class="generator-page__tabs" role="tablist">
                <TabButton tab=EditorTab::Create label="Create"/>
                <TabButton tab=EditorTab::Edit label="Edit Storyboard"/>
            </div>
            {move || match editor.with(|e| e.tab) {
                EditorTab::Create => view! { <CreatePanel/> }.into_any(),
                EditorTab::Edit => view! { <EditPanel/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn TabButton(tab: EditorTab, label: &'static str) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    view! {
        <button
            role="tab"
            class="tab"
            class:tab--active=move || editor.with(|e| e.tab == tab)
            on:click=move |_| editor.update(|e| e.tab = tab)
        >
            {label}
        </button>
    }
}

#[component]
fn CreatePanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let usage = expect_context::<RwSignal<UsageState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let max_frames = move || session.with(SessionState::plan).max_frames();

    let on_generate = move |_| {
        let plan = session.with_untracked(SessionState::plan);
        let quota = usage.with_untracked(|u| u.limits.storyboards);
        let checked = editor.with_untracked(|e| e.request.validate(plan, &quota));
        let request = match checked {
            Ok(request) => request,
            Err(e) => {
                ui.update(|u| {
                    u.push_error(e.title(), e.to_string());
                });
                return;
            }
        };
        let ticket = editor.try_update(EditorState::begin_generation).unwrap_or_default();
        leptos::task::spawn_local(async move {
            match api::generate_storyboard(&request).await {
                Ok(frames) => {
                    let count = request.count();
                    editor.update(|e| e.finish_generation(ticket, frames));
                    usage.update(|u| u.limits.record_generation(count));
                    ui.update(|u| {
                        u.push_toast("Storyboard Generated!", format!("Created {count} frames from your prompt."));
                    });
                }
                Err(e) => {
                    editor.update(|ed| ed.abort_generation(ticket));
                    ui.update(|u| {
                        u.push_failure(&e);
                    });
                }
            }
        });
    };

    let on_example = move |_| {
        editor.update(EditorState::load_example);
        ui.update(|u| {
            u.push_toast("Blue Horizon Loaded", "The sample storyboard is ready to edit.");
        });
    };

    view! {
        <section class="create-panel">
            <label for="gen-prompt">"Describe your story"</label>
            <textarea
                id="gen-prompt"
                rows="5"
                placeholder="A lone astronaut discovers a garden on Mars..."
                prop:value=move || editor.with(|e| e.request.prompt.clone())
                on:input=move |ev| editor.update(|e| e.request.prompt = event_target_value(&ev))
            ></textarea>

            <label for="gen-count">
                {move || format!("Frames: {}", editor.with(|e| e.request.count))}
            </label>
            <input
                id="gen-count"
                type="range"
                min="1"
                max=move || max_frames().to_string()
                prop:value=move || editor.with(|e| e.request.count.to_string())
                on:input=move |ev| {
                    if let Ok(count) = event_target_value(&ev).parse::<u32>() {
                        editor.update(|e| e.request.count = count);
                    }
                }
            />
            <p class="create-panel__hint">{move || format!("Your plan allows up to {} frames.", max_frames())}</p>

            <label for="gen-style">"Style"</label>
            <select
                id="gen-style"
                on:change=move |ev| {
                    if let Some(style) = StylePreset::from_slug(&event_target_value(&ev)) {
                        editor.update(|e| e.request.style = style);
                    }
                }
            >
                {StylePreset::ALL
                    .into_iter()
                    .map(|style| {
                        view! {
                            <option value=style.slug() selected=move || editor.with(|e| e.request.style == style)>
                                {style.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <label class="create-panel__check">
                <input
                    type="checkbox"
                    prop:checked=move || editor.with(|e| e.request.auto_caption)
                    on:change=move |ev| editor.update(|e| e.request.auto_caption = event_target_checked(&ev))
                />
                "Auto-generate captions"
            </label>

            <button
                class="btn btn--primary"
                disabled=move || editor.with(|e| e.generating)
                on:click=on_generate
            >
                {move || if editor.with(|e| e.generating) { "Generating..." } else { "Generate Storyboard" }}
            </button>

            <div class="example-card" on:click=on_example>
                <h3>"Blue Horizon"</h3>
                <p>"A six-frame brand story to explore the editor."</p>
            </div>
        </section>
    }
}

#[component]
fn EditPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let usage = expect_context::<RwSignal<UsageState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_add = move |_| {
        editor.update(|e| {
            e.frames.add_frame();
        });
    };

    let on_export = move |_| {
        let frames = editor.with_untracked(|e| e.frames.as_slice().to_vec());
        ui.update(|u| {
            u.push_toast("Exporting Storyboard", "Preparing your storyboard for download...");
        });
        leptos::task::spawn_local(async move {
            match api::export_storyboard(&frames, now_ms()).await {
                Ok(receipt) => {
                    usage.update(|u| u.limits.record_export());
                    ui.update(|u| {
                        u.push_toast(
                            "Export Complete",
                            format!("{} ({} frames) is ready to download.", receipt.file_name, receipt.frame_count),
                        );
                    });
                }
                Err(e) => ui.update(|u| {
                    u.push_failure(&e);
                }),
            }
        });
    };

    let on_share = move |_| {
        let link = editor_share_link(&new_share_token());
        let copied = copy_text(&link);
        ui.update(|u| {
            let description = if copied {
                format!("{link} copied to your clipboard.")
            } else {
                format!("Share this link: {link}")
            };
            u.push_toast("Share Link Created", description);
        });
    };

    let frames = move || editor.with(|e| e.frames.iter().cloned().enumerate().collect::<Vec<_>>());

    view! {
        <section class="edit-panel">
            <div class="edit-panel__toolbar">
                <span>{move || format!("{} frames", editor.with(|e| e.frames.len()))}</span>
                <button class="btn" on:click=on_add>
                    "Add Frame"
                </button>
                <button class="btn" on:click=on_export>
                    "Export"
                </button>
                <button class="btn" on:click=on_share>
                    "Share"
                </button>
            </div>
            <Show
                when=move || editor.with(|e| !e.frames.is_empty())
                fallback=|| view! { <p class="edit-panel__empty">"No frames yet. Generate or add one to begin."</p> }
            >
                <div class="frame-grid">
                    <For each=frames key=|(index, frame)| (*index, frame.id.clone()) let:entry>
                        <FrameCard frame=entry.1 index=entry.0/>
                    </For>
                </div>
            </Show>
        </section>
    }
}
