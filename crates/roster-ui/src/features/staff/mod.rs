//! Staff roster feature: list state and the staff view.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
