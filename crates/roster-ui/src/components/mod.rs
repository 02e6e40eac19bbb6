pub(crate) mod atoms;
pub(crate) mod banner;
pub(crate) mod pagination;
pub(crate) mod record_dialog;
pub(crate) mod shell;
pub(crate) mod sort_header;
pub(crate) mod stats_cards;
pub(crate) mod status_filter;
pub(crate) mod toast;
