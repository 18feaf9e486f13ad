//! Mocked network layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. Every call validates, waits a fixed latency, and
//! fabricates its payload, behind the same `async fn -> Result` signatures a
//! real client would expose.

pub mod api;
pub mod error;
