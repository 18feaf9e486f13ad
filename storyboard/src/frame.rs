//! Frame list: the ordered storyboard sequence a user edits.
//!
//! DESIGN
//! ======
//! Position in the vector is the only notion of sequence; frames carry no
//! stored index. Every mutation except [`FrameList::replace_all`] and
//! [`FrameList::clear`] touches at most one frame, so frames that are not
//! targeted keep their id, image, and caption.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::BLANK_CAPTION;

/// Unique identifier for a frame within the active list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(String);

impl FrameId {
    /// Wrap an existing identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Mint a fresh identifier of the form `frame-<uuid>`.
    #[must_use]
    pub fn mint() -> Self {
        Self(format!("frame-{}", Uuid::new_v4()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FrameId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// One storyboard panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub id: FrameId,
    /// Image reference. Always a placeholder URL in this client.
    pub image_url: String,
    pub caption: String,
}

impl Frame {
    /// A blank frame as appended by "Add Frame".
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: FrameId::mint(),
            image_url: placeholder_image("New Frame"),
            caption: BLANK_CAPTION.to_owned(),
        }
    }
}

/// Placeholder image URL carrying `text` as its label.
#[must_use]
pub fn placeholder_image(text: &str) -> String {
    format!("/placeholder.svg?height=300&width=400&text={}", text.replace(' ', "+"))
}

/// Ordered list of frames.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameList {
    frames: Vec<Frame>,
}

impl FrameList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The six-frame "Blue Horizon" storyboard shown to new sessions.
    #[must_use]
    pub fn seed() -> Self {
        const SEED: [(&str, &str); 6] = [
            (
                "Ocean Horizon",
                "Soft waves roll under a cool blue sky. The camera slowly zooms toward the horizon. Calm, quiet, and full of promise.",
            ),
            (
                "Water Droplet",
                "A single blue droplet falls into a pool, creating smooth ripples. Light dances across the surface. Small actions create wide change.",
            ),
            (
                "Connected City",
                "A modern blue-toned city pulses with energy. Lights flicker, data flows, and life moves forward. Everything is connected.",
            ),
            (
                "Innovation Energy",
                "Blue energy swirls around, transforming objects, ideas, and moments. Barriers dissolve, pathways open. Innovation in motion.",
            ),
            (
                "Professional Portrait",
                "A character steps forward, framed in a soft glow of blue. Determined eyes, steady pace. Ready to make a difference.",
            ),
            (
                "Think Forward",
                "The screen fades into a vibrant blue background. A clean logo appears with a subtle pulse. 'Think Forward. Live Blue.'",
            ),
        ];
        let frames = SEED
            .iter()
            .enumerate()
            .map(|(i, (label, caption))| Frame {
                id: FrameId::new(format!("frame-{}", i + 1)),
                image_url: placeholder_image(label),
                caption: (*caption).to_owned(),
            })
            .collect();
        Self { frames }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Frame] {
        &self.frames
    }

    #[must_use]
    pub fn get(&self, id: &FrameId) -> Option<&Frame> {
        self.frames.iter().find(|f| &f.id == id)
    }

    /// Current index of `id`, if present.
    #[must_use]
    pub fn position(&self, id: &FrameId) -> Option<usize> {
        self.frames.iter().position(|f| &f.id == id)
    }

    /// Frame ids in sequence order.
    #[must_use]
    pub fn ids(&self) -> Vec<FrameId> {
        self.frames.iter().map(|f| f.id.clone()).collect()
    }

    /// Append a blank frame and return its id.
    pub fn add_frame(&mut self) -> FrameId {
        let frame = Frame::blank();
        let id = frame.id.clone();
        self.frames.push(frame);
        id
    }

    /// Remove the frame with `id`. Returns the removed frame, or `None` when
    /// no frame matched.
    pub fn remove_frame(&mut self, id: &FrameId) -> Option<Frame> {
        let index = self.position(id)?;
        Some(self.frames.remove(index))
    }

    /// Replace the caption of the frame with `id`. Returns false if absent.
    pub fn update_caption(&mut self, id: &FrameId, caption: impl Into<String>) -> bool {
        let Some(frame) = self.frames.iter_mut().find(|f| &f.id == id) else {
            return false;
        };
        frame.caption = caption.into();
        true
    }

    /// Swap in a fresh image for the frame with `id`, keeping caption and
    /// position. Returns false if absent.
    pub fn regenerate_frame(&mut self, id: &FrameId) -> bool {
        let Some(frame) = self.frames.iter_mut().find(|f| &f.id == id) else {
            return false;
        };
        let nonce = Uuid::new_v4().simple().to_string();
        frame.image_url = placeholder_image(&format!("Regenerated {}", &nonce[..8]));
        true
    }

    /// Move the frame at `source` to `destination`, shifting the frames in
    /// between. A missing destination (drag released outside a drop target)
    /// or an out-of-range index leaves the list untouched.
    ///
    /// Returns true when the order changed.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) -> bool {
        let Some(destination) = destination else {
            return false;
        };
        let len = self.frames.len();
        if source >= len || destination >= len || source == destination {
            return false;
        }
        let frame = self.frames.remove(source);
        self.frames.insert(destination, frame);
        true
    }

    /// Discard every frame and install `frames` in their place.
    pub fn replace_all(&mut self, frames: Vec<Frame>) {
        self.frames = frames;
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl<'a> IntoIterator for &'a FrameList {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl From<Vec<Frame>> for FrameList {
    fn from(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}
