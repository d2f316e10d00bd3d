//! # bloburl
//!
//! In-memory Blob and File values with data-URI and object-URL locators.
//!
//! bloburl provides immutable byte-blob values assembled from heterogeneous
//! parts, a synchronous reader over them, and an object-URL facility that
//! turns a blob into a retrievable locator string (a self-contained base64
//! `data:` URI, or an opaque `blob:<uuid>` token backed by an owned
//! registry) and reverses the mapping on revocation.
//!
//! ## Core Concepts
//!
//! - **Blob**: an immutable byte buffer with a normalized content type
//! - **File**: a named blob with a last-modified timestamp
//! - **Locator**: a string handle referencing a blob (data URI or token)
//! - **ObjectUrls**: the locator factory, configured once with a mode and
//!   injected at call sites
//!
//! ## Example
//!
//! ```
//! use bloburl::{Blob, ObjectUrls};
//!
//! let blob = Blob::new(["hello world"]).with_content_type("text/plain");
//! assert_eq!(blob.size(), 11);
//!
//! let urls = ObjectUrls::data_uri();
//! let locator = urls.create(&blob);
//! assert_eq!(locator, "data:text/plain;base64,aGVsbG8gd29ybGQ=");
//! ```

pub mod locator;
pub mod model;

mod error;
mod reader;
mod urls;

pub use error::{Error, Result};
pub use model::{Blob, BlobPart, File};
pub use reader::{FileReader, ReadResult, ReadyState};
pub use urls::{LocatorMode, ObjectUrls};

/// Scheme prefix for registry-token locators
pub const LOCATOR_SCHEME: &str = "blob:";
