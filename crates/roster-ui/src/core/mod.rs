//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod banner;
pub mod cache;
pub mod config;
pub mod dialog;
pub mod error;
pub mod keyboard;
pub mod list_state;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod resource;
pub mod selection;
pub mod store;
