//! Construction parts accepted by the byte aggregator

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::{Blob, File};

/// A single input part for [`Blob::new`] / [`File::new`].
///
/// Parts are concatenated in order into one contiguous buffer. Text parts
/// are UTF-8 encoded; byte parts contribute verbatim; nested blobs
/// contribute their existing bytes.
///
/// Borrowed inputs (`&str`, `&[u8]`) are copied at conversion time, so
/// mutating the caller's buffer after construction never affects the
/// constructed record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BlobPart {
    /// Text, contributed as its UTF-8 encoding
    Text(String),
    /// Raw bytes
    Bytes(Bytes),
    /// An existing blob's contents
    Blob(Blob),
}

impl BlobPart {
    /// Number of bytes this part contributes
    pub fn len(&self) -> usize {
        match self {
            BlobPart::Text(s) => s.len(),
            BlobPart::Bytes(b) => b.len(),
            BlobPart::Blob(b) => b.size(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append this part's bytes to an output buffer
    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        match self {
            BlobPart::Text(s) => out.extend_from_slice(s.as_bytes()),
            BlobPart::Bytes(b) => out.extend_from_slice(b),
            BlobPart::Blob(b) => out.extend_from_slice(b.as_bytes()),
        }
    }
}

impl From<&str> for BlobPart {
    fn from(s: &str) -> Self {
        BlobPart::Text(s.to_string())
    }
}

impl From<String> for BlobPart {
    fn from(s: String) -> Self {
        BlobPart::Text(s)
    }
}

impl From<&String> for BlobPart {
    fn from(s: &String) -> Self {
        BlobPart::Text(s.clone())
    }
}

impl From<Vec<u8>> for BlobPart {
    fn from(v: Vec<u8>) -> Self {
        BlobPart::Bytes(Bytes::from(v))
    }
}

impl From<&[u8]> for BlobPart {
    fn from(v: &[u8]) -> Self {
        BlobPart::Bytes(Bytes::copy_from_slice(v))
    }
}

impl<const N: usize> From<[u8; N]> for BlobPart {
    fn from(v: [u8; N]) -> Self {
        BlobPart::Bytes(Bytes::copy_from_slice(&v))
    }
}

impl<const N: usize> From<&[u8; N]> for BlobPart {
    fn from(v: &[u8; N]) -> Self {
        BlobPart::Bytes(Bytes::copy_from_slice(v))
    }
}

impl From<Bytes> for BlobPart {
    fn from(b: Bytes) -> Self {
        BlobPart::Bytes(b)
    }
}

impl From<Blob> for BlobPart {
    fn from(b: Blob) -> Self {
        BlobPart::Blob(b)
    }
}

impl From<&Blob> for BlobPart {
    fn from(b: &Blob) -> Self {
        BlobPart::Blob(b.clone())
    }
}

impl From<File> for BlobPart {
    fn from(f: File) -> Self {
        BlobPart::Blob(f.into_blob())
    }
}

impl From<&File> for BlobPart {
    fn from(f: &File) -> Self {
        BlobPart::Blob(f.as_blob().clone())
    }
}
