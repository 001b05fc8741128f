use gloo_timers::callback::Timeout;
use js_sys::Array;
use match_table_core::{CsvFile, Download};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::utils::document;

/// Time in milliseconds the object url of a download stays valid after the link was clicked.
/// Some browsers abort the download if the url is revoked while it starts.
const REVOKE_DELAY: u32 = 10_000;

const _: () = assert!(REVOKE_DELAY >= 1_000, "object urls must outlive the download start");

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("javascript error: {0}")]
    Js(String),
    #[error("no document body")]
    NoBody,
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(s) => Self::Js(s),
            None => Self::Js(format!("{:?}", value)),
        }
    }
}

/// Offers files as a download in the browser.
///
/// The file is wrapped in a blob and downloaded by clicking a temporary link pointing to it.
#[derive(Copy, Clone, Debug, Default)]
pub struct BrowserDownload;

impl Download for BrowserDownload {
    type Error = DownloadError;

    fn download(&self, file: &CsvFile) -> Result<(), Self::Error> {
        let parts = Array::of1(&JsValue::from_str(&file.content));

        let mut options = BlobPropertyBag::new();
        options.type_(file.mime);

        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = Url::create_object_url_with_blob(&blob)?;

        if let Err(err) = click_link(&url, &file.file_name) {
            Url::revoke_object_url(&url)?;
            return Err(err);
        }

        revoke_later(url, REVOKE_DELAY);
        Ok(())
    }
}

fn click_link(href: &str, file_name: &str) -> Result<(), DownloadError> {
    let document = document();
    let body = document.body().ok_or(DownloadError::NoBody)?;

    let link: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| DownloadError::Js(String::from("<a> is not an HtmlAnchorElement")))?;

    link.set_href(href);
    link.set_download(file_name);

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;

    log::debug!("Downloaded {}", file_name);

    Ok(())
}

fn revoke_later(url: String, delay: u32) {
    Timeout::new(delay, move || {
        if let Err(err) = Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke {}: {:?}", url, err);
        }
    })
    .forget();
}
