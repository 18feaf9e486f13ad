//! Storyboard editor: the frame list, the generator form, and drag state.
//!
//! DESIGN
//! ======
//! Generation is not guarded. Every completed generation replaces the whole
//! list, so overlapping requests resolve last-write-wins; only the
//! `generating` spinner tracks the most recent request.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use storyboard::frame::{Frame, FrameId, FrameList};
use storyboard::generate::{GenerationRequest, StylePreset};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorTab {
    #[default]
    Create,
    Edit,
}

#[derive(Clone, Debug)]
pub struct EditorState {
    pub frames: FrameList,
    pub request: GenerationRequest,
    pub generating: bool,
    latest_generation: u64,
    pub tab: EditorTab,
    drag_source: Option<usize>,
    pub drag_over: Option<usize>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            frames: FrameList::seed(),
            request: GenerationRequest::default(),
            generating: false,
            latest_generation: 0,
            tab: EditorTab::Create,
            drag_source: None,
            drag_over: None,
        }
    }
}

impl EditorState {
    /// Fresh editor using the user's preferred style.
    #[must_use]
    pub fn for_style(style: StylePreset) -> Self {
        let mut state = Self::default();
        state.request.style = style;
        state
    }

    /// Mark a generation in flight; returns its ticket.
    pub fn begin_generation(&mut self) -> u64 {
        self.latest_generation += 1;
        self.generating = true;
        self.latest_generation
    }

    /// Apply a completed generation. Any completion replaces the list; the
    /// spinner clears only when the latest request lands.
    pub fn finish_generation(&mut self, ticket: u64, frames: Vec<Frame>) {
        self.frames.replace_all(frames);
        self.drag_source = None;
        self.drag_over = None;
        if ticket == self.latest_generation {
            self.generating = false;
        }
        self.tab = EditorTab::Edit;
    }

    /// Abandon a request that failed before producing frames.
    pub fn abort_generation(&mut self, ticket: u64) {
        if ticket == self.latest_generation {
            self.generating = false;
        }
    }

    /// Reload the sample storyboard.
    pub fn load_example(&mut self) {
        self.frames = FrameList::seed();
        self.tab = EditorTab::Edit;
    }

    pub fn drag_start(&mut self, index: usize) {
        self.drag_source = (index < self.frames.len()).then_some(index);
        self.drag_over = None;
    }

    #[must_use]
    pub fn dragging(&self) -> Option<usize> {
        self.drag_source
    }

    pub fn drag_enter(&mut self, index: usize) {
        if self.drag_source.is_some() {
            self.drag_over = Some(index);
        }
    }

    /// Drop the dragged frame at `index`. Returns whether the order changed.
    pub fn drop_on(&mut self, index: usize) -> bool {
        let Some(source) = self.drag_source.take() else {
            return false;
        };
        self.drag_over = None;
        self.frames.reorder(source, Some(index))
    }

    /// Drag ended outside any frame slot: no reorder.
    pub fn drag_cancel(&mut self) {
        self.drag_source = None;
        self.drag_over = None;
    }

    pub fn remove_frame(&mut self, id: &FrameId) {
        self.frames.remove_frame(id);
        self.drag_source = None;
        self.drag_over = None;
    }
}

/// Token for an editor share link: eight hex characters.
#[must_use]
pub fn new_share_token() -> String {
    let mut token = uuid::Uuid::new_v4().simple().to_string();
    token.truncate(8);
    token
}
