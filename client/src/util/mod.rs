//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one browser concern (storage, timers, clock, dice,
//! clipboard, theme) behind a small API with a host fallback, so state and
//! network code stay testable off the browser.

pub mod clipboard;
pub mod clock;
pub mod dark_mode;
pub mod dice;
pub mod storage;
pub mod timer;
