//! Feature slices: each owns its state, API calls and view.

pub mod auth;
#[cfg(target_arch = "wasm32")]
pub(crate) mod records;
pub mod staff;
pub mod students;
