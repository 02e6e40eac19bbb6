//! Browser-side services: the REST client and file download glue.

pub(crate) mod api;
pub(crate) mod download;
