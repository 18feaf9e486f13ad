//! One draggable storyboard frame in the editor grid.
//!
//! Reordering uses native HTML drag and drop. `dragover` must cancel the
//! default action or the browser never fires `drop`. A drag that ends
//! without landing on a card leaves the order untouched.

use leptos::prelude::*;

use storyboard::frame::Frame;

use crate::state::editor::EditorState;
use crate::state::ui::UiState;

#[component]
pub fn FrameCard(frame: Frame, index: usize) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let id = frame.id.clone();
    let caption_id = id.clone();
    let regen_id = id.clone();
    let remove_id = id.clone();

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        let moved = editor.try_update(|e| e.drop_on(index)).unwrap_or(false);
        if moved {
            leptos::logging::log!("editor: frame moved to {index}");
        }
    };

    let on_regenerate = move |_| {
        editor.update(|e| {
            e.frames.regenerate_frame(&regen_id);
        });
        ui.update(|u| {
            u.push_toast("Frame Regenerated", "A fresh image was generated for this frame.");
        });
    };

    view! {
        <article
            class="frame-card"
            class:frame-card--dragging=move || editor.with(|e| e.dragging() == Some(index))
            class:frame-card--over=move || editor.with(|e| e.drag_over == Some(index))
            draggable="true"
            on:dragstart=move |_| editor.update(|e| e.drag_start(index))
            on:dragenter=move |_| editor.update(|e| e.drag_enter(index))
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=on_drop
            on:dragend=move |_| editor.update(EditorState::drag_cancel)
        >
            <header class="frame-card__header">
                <span class="frame-card__index">{format!("Frame {}", index + 1)}</span>
                <button class="btn btn--ghost btn--small" on:click=on_regenerate>
                    "Regenerate"
                </button>
                <button
                    class="btn btn--ghost btn--small"
                    aria-label="Remove frame"
                    on:click=move |_| editor.update(|e| e.remove_frame(&remove_id))
                >
                    "×"
                </button>
            </header>
            <img
                class="frame-card__image"
                src=move || editor.with(|e| e.frames.get(&id).map(|f| f.image_url.clone()).unwrap_or_default())
                alt=format!("Frame {}", index + 1)
            />
            <textarea
                class="frame-card__caption"
                prop:value=frame.caption
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    editor.update(|e| {
                        e.frames.update_caption(&caption_id, text);
                    });
                }
            ></textarea>
        </article>
    }
}
