//! Blob type - an immutable byte buffer with a media type

use super::{mime, BlobPart};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// An immutable sequence of bytes with an associated content type.
///
/// Blobs are built once from an ordered list of [`BlobPart`]s and never
/// mutated afterwards. The buffer is shared (`Bytes`), so cloning a blob
/// or handing it to the locator registry is O(1) and copies nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    bytes: Bytes,
    content_type: String,
}

impl Blob {
    /// Build a blob by concatenating `parts` in order.
    ///
    /// The content type defaults to `""`; set it with
    /// [`with_content_type`](Self::with_content_type).
    pub fn new<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<BlobPart>,
    {
        let parts: Vec<BlobPart> = parts.into_iter().map(Into::into).collect();
        let total: usize = parts.iter().map(BlobPart::len).sum();

        let mut buf = Vec::with_capacity(total);
        for part in &parts {
            part.write_into(&mut buf);
        }

        Blob {
            bytes: Bytes::from(buf),
            content_type: String::new(),
        }
    }

    /// The empty, untyped blob
    pub fn empty() -> Self {
        Blob {
            bytes: Bytes::new(),
            content_type: String::new(),
        }
    }

    /// Wrap an existing buffer without copying
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Blob {
            bytes: bytes.into(),
            content_type: String::new(),
        }
    }

    /// Set the content type (normalized: trimmed, lowercased, empty if not
    /// printable ASCII)
    pub fn with_content_type(mut self, content_type: impl AsRef<str>) -> Self {
        self.content_type = mime::normalize(content_type.as_ref());
        self
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The normalized content type (`""` when untyped)
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Borrow the contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A shared handle to the contents
    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    /// The contents decoded as UTF-8, with invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// A sub-blob over `range`, zero-copy.
    ///
    /// Bounds are clamped to the buffer; an inverted range yields the empty
    /// blob. The result is untyped.
    pub fn slice(&self, range: Range<usize>) -> Blob {
        let start = range.start.min(self.bytes.len());
        let end = range.end.min(self.bytes.len()).max(start);
        Blob {
            bytes: self.bytes.slice(start..end),
            content_type: String::new(),
        }
    }
}

impl Default for Blob {
    fn default() -> Self {
        Blob::empty()
    }
}
