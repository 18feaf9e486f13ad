//! Reusable UI components shared across pages.

pub mod frame_card;
pub mod navigation;
pub mod notification_center;
pub mod profile_modal;
pub mod social_login;
pub mod toast_stack;
