//! Object-URL codec
//!
//! Turns a blob into a retrievable locator string and reverses the mapping
//! on revocation. Two locator kinds exist: stateless base64 `data:` URIs
//! and registry-backed `blob:<uuid>` tokens.

pub mod data_uri;
mod registry;

pub use registry::LocatorRegistry;
