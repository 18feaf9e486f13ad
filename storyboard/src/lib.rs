//! Domain engine for the StoryVision storyboard editor.
//!
//! This crate is browser-independent: it owns every data-model rule the
//! client relies on, from the ordered frame list and the plan-tier view gate
//! to the mocked catalogs behind the peripheral panels. The `client` crate
//! wraps these types in reactive signals and adds the simulated network
//! latency; nothing in here sleeps, touches the DOM, or rolls dice. Callers
//! pass clock readings and random rolls in, which keeps every rule testable.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`frame`] | Ordered frame list and its edit/reorder operations |
//! | [`generate`] | Generation requests, validation, and frame minting |
//! | [`plan`] | Plan tiers, the view enum, and the capability gate |
//! | [`catalog`] | Subscription plan offers and pricing |
//! | [`user`] | Session user record, preferences, and mock identities |
//! | [`validate`] | Form validation shared by the auth and profile screens |
//! | [`notification`] | Notification feed, tabs, and realtime injection |
//! | [`usage`] | Usage quotas and their warning thresholds |
//! | [`team`] | Collaborators, roles, and frame comments |
//! | [`integration`] | Integration catalog and connection state |
//! | [`library`] | Dashboard storyboard summaries and share links |
//! | [`consts`] | Latencies, probabilities, limits, and storage keys |

pub mod catalog;
pub mod consts;
pub mod frame;
pub mod generate;
pub mod integration;
pub mod library;
pub mod notification;
pub mod plan;
pub mod team;
pub mod usage;
pub mod user;
pub mod validate;
