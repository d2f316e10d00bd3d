//! File type - a named blob with a modification timestamp

use super::{Blob, BlobPart};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A [`Blob`] with a file name and a last-modified timestamp.
///
/// `last_modified` is unix milliseconds and defaults to construction time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    blob: Blob,
    name: String,
    last_modified: u64,
}

impl File {
    /// Build a file from `parts`, named `name`.
    pub fn new<I, P>(parts: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<BlobPart>,
    {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;

        File {
            blob: Blob::new(parts),
            name: name.into(),
            last_modified: now,
        }
    }

    /// Wrap an existing blob
    pub fn from_blob(blob: Blob, name: impl Into<String>) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;

        File {
            blob,
            name: name.into(),
            last_modified: now,
        }
    }

    /// Set the content type (same normalization as [`Blob::with_content_type`])
    pub fn with_content_type(mut self, content_type: impl AsRef<str>) -> Self {
        self.blob = self.blob.with_content_type(content_type);
        self
    }

    /// Set the last-modified timestamp (unix millis)
    pub fn with_last_modified(mut self, last_modified: u64) -> Self {
        self.last_modified = last_modified;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last-modified timestamp in unix milliseconds
    pub fn last_modified(&self) -> u64 {
        self.last_modified
    }

    pub fn size(&self) -> usize {
        self.blob.size()
    }

    pub fn content_type(&self) -> &str {
        self.blob.content_type()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.blob.as_bytes()
    }

    /// Borrow the underlying blob
    pub fn as_blob(&self) -> &Blob {
        &self.blob
    }

    /// Discard the name and timestamp, keeping the contents
    pub fn into_blob(self) -> Blob {
        self.blob
    }
}
