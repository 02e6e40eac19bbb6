//! Save downloaded bytes through a temporary object URL.

use anyhow::{Context, anyhow};
use gloo::file::{Blob, ObjectUrl};
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

const CSV_MIME: &str = "text/csv";

/// Offer `bytes` as a CSV file named `filename`. The object URL is revoked once the click is issued.
pub(crate) fn save_csv(bytes: &[u8], filename: &str) -> anyhow::Result<()> {
    let url = ObjectUrl::from(Blob::new_with_options(bytes, Some(CSV_MIME)));
    let anchor = document()
        .create_element("a")
        .map_err(|err| anyhow!("{err:?}"))
        .context("creating download anchor")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| anyhow!("download anchor is not an <a> element"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    drop(url);
    Ok(())
}
