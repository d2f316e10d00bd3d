//! Base64 data-URI codec
//!
//! Locator format:
//! ```text
//! data:<type>;base64,<payload>
//! ```
//! `<payload>` is RFC 4648 standard base64 (padded with `=`, no line
//! breaks). An untyped blob degrades to `data:;base64,<payload>`.

use crate::model::Blob;
use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const SCHEME: &str = "data:";
const MARKER: &str = ";base64,";

/// Encode a blob as a base64 data URI
pub fn encode(blob: &Blob) -> String {
    format!(
        "data:{};base64,{}",
        blob.content_type(),
        STANDARD.encode(blob.as_bytes())
    )
}

/// Whether `locator` carries the `data:` scheme
pub fn is_data_uri(locator: &str) -> bool {
    locator.starts_with(SCHEME)
}

/// Decode a base64 data URI back into a blob.
///
/// Only the `;base64,` form is accepted; the mediatype is re-normalized on
/// the way in. Fails with [`Error::InvalidLocator`] for any other shape and
/// [`Error::Decode`] for a corrupt payload.
pub fn decode(locator: &str) -> Result<Blob> {
    let rest = locator
        .strip_prefix(SCHEME)
        .ok_or_else(|| Error::InvalidLocator(format!("not a data URI: {}", locator)))?;

    let (mediatype, payload) = rest
        .split_once(MARKER)
        .ok_or_else(|| Error::InvalidLocator("missing ;base64, marker".to_string()))?;

    let bytes = STANDARD.decode(payload)?;
    Ok(Blob::from_bytes(bytes).with_content_type(mediatype))
}
