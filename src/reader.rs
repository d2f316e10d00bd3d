//! Synchronous reads over blobs
//!
//! The execution model has no suspension points, so reads complete inline.
//! The reader still exposes an observable ready-state and a stored result,
//! so callers can treat reads uniformly with event-driven hosts.

use crate::locator::data_uri;
use crate::model::Blob;
use bytes::Bytes;

/// Observable reader state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReadyState {
    /// No read has started
    #[default]
    Empty,
    /// A read is in flight (never observed between calls; reads complete
    /// synchronously)
    Loading,
    /// The last read finished, or the reader was aborted
    Done,
}

/// The product of a completed read
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadResult {
    Bytes(Bytes),
    Text(String),
    DataUrl(String),
}

/// Reads blob contents into bytes, text, or a data URL.
#[derive(Default)]
pub struct FileReader {
    ready_state: ReadyState,
    result: Option<ReadResult>,
}

impl FileReader {
    pub fn new() -> Self {
        FileReader::default()
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// The last read's result, if one finished since the last abort
    pub fn result(&self) -> Option<&ReadResult> {
        self.result.as_ref()
    }

    /// Read the blob's raw bytes
    pub fn read_as_bytes(&mut self, blob: &Blob) -> Bytes {
        self.ready_state = ReadyState::Loading;
        let bytes = blob.bytes();
        self.finish(ReadResult::Bytes(bytes.clone()));
        bytes
    }

    /// Read the blob as text (UTF-8, invalid sequences replaced)
    pub fn read_as_text(&mut self, blob: &Blob) -> String {
        self.ready_state = ReadyState::Loading;
        let text = blob.text();
        self.finish(ReadResult::Text(text.clone()));
        text
    }

    /// Read the blob as a base64 data URL
    pub fn read_as_data_url(&mut self, blob: &Blob) -> String {
        self.ready_state = ReadyState::Loading;
        let url = data_uri::encode(blob);
        self.finish(ReadResult::DataUrl(url.clone()));
        url
    }

    /// Drop any pending result and mark the reader done
    pub fn abort(&mut self) {
        self.result = None;
        self.ready_state = ReadyState::Done;
    }

    fn finish(&mut self, result: ReadResult) {
        self.result = Some(result);
        self.ready_state = ReadyState::Done;
    }
}
