//! List plumbing shared by the student and staff views.

pub(crate) mod actions;
pub(crate) mod controller;
pub(crate) mod view;
