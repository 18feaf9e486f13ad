//! Reactive application state.
//!
//! ARCHITECTURE
//! ============
//! One plain struct per concern, each held in an `RwSignal` provided via
//! context by `App` and bundled in [`workspace::Workspace`] for sign-out. Components mutate state only through the methods here,
//! which keeps every transition testable without a reactive runtime.

pub mod editor;
pub mod integrations;
pub mod notifications;
pub mod session;
pub mod subscription;
pub mod team;
pub mod ui;
pub mod usage;
pub mod workspace;
