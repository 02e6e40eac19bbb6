//! Student roster feature: list state, API calls, and the dashboard view.
//!
//! # Design
//! - Keep HTTP calls in `api` so the view only sequences them.
//! - Stats, import and export exist only for students; the list mechanics are shared.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
