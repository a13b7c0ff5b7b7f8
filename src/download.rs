//! Exporting the last airfoil as a `.dat` coordinate file.

use itertools::Itertools;
use wasm_bindgen::{JsCast, JsValue};

use crate::decimal::to_fixed;
use crate::error::NothingToDownload;
use crate::point::{unsigned_zero, Point};

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

pub const FILENAME: &str = "airfoil.dat";
const MIME_TYPE: &str = "text/plain";
const DIGITS: usize = 6;

/// One `x y` line per point with six decimals, newline separated.
pub fn dat_contents(points: &[Point]) -> Result<String, NothingToDownload> {
    if points.is_empty() {
        return Err(NothingToDownload);
    }
    Ok(points
        .iter()
        .map(|[x, y]| {
            let (x, y) = (unsigned_zero(*x), unsigned_zero(*y));
            format!("{} {}", to_fixed(x, DIGITS), to_fixed(y, DIGITS))
        })
        .join("\n"))
}

/// Offer `text` to the user as a file download.
pub fn trigger_download(document: &web_sys::Document, text: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(MIME_TYPE);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let href = web_sys::Url::create_object_url_with_blob(&blob)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&href);
    anchor.set_download(FILENAME);
    anchor.click();
    web_sys::Url::revoke_object_url(&href)
}
