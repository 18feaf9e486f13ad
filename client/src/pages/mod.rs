//! Page modules, one per top-level screen.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen's orchestration (form signals, mocked calls,
//! toasts) and delegates reusable pieces to `components`.

pub mod collaboration;
pub mod dashboard;
pub mod generator;
pub mod integrations;
pub mod login;
pub mod password_reset;
pub mod settings;
pub mod signup;
pub mod subscription;
pub mod usage;
