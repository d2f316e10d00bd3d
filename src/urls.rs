//! High-level object-URL interface
//!
//! [`ObjectUrls`] is the explicit replacement for ambient feature
//! detection: the locator mode is chosen once when the value is
//! constructed and the value is injected wherever locators are minted.

use crate::locator::{data_uri, LocatorRegistry};
use crate::model::Blob;

/// How locators are minted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LocatorMode {
    /// Stateless base64 `data:` URIs
    #[default]
    DataUri,
    /// Registry-backed `blob:<uuid>` tokens
    Registry,
}

/// Mints, resolves, and revokes object-URL locators.
///
/// In `DataUri` mode every locator is a self-contained value and
/// revocation is a no-op. In `Registry` mode locators are opaque tokens
/// into an owned arena and revocation frees the entry.
#[derive(Default)]
pub struct ObjectUrls {
    mode: LocatorMode,
    registry: LocatorRegistry,
}

impl ObjectUrls {
    pub fn new(mode: LocatorMode) -> Self {
        ObjectUrls {
            mode,
            registry: LocatorRegistry::new(),
        }
    }

    /// Data-URI mode (the fallback for hosts without a native object-URL
    /// mechanism)
    pub fn data_uri() -> Self {
        Self::new(LocatorMode::DataUri)
    }

    /// Registry-token mode
    pub fn registry() -> Self {
        Self::new(LocatorMode::Registry)
    }

    pub fn mode(&self) -> LocatorMode {
        self.mode
    }

    /// Mint a locator for `blob`
    pub fn create(&self, blob: &Blob) -> String {
        match self.mode {
            LocatorMode::DataUri => data_uri::encode(blob),
            LocatorMode::Registry => self.registry.create(blob),
        }
    }

    /// Resolve a locator back to its blob.
    ///
    /// Registry tokens are looked up in the arena; data URIs are decoded
    /// in place. Returns `None` for revoked, unknown, or malformed
    /// locators.
    pub fn resolve(&self, locator: &str) -> Option<Blob> {
        if data_uri::is_data_uri(locator) {
            data_uri::decode(locator).ok()
        } else {
            self.registry.resolve(locator)
        }
    }

    /// Revoke a locator.
    ///
    /// Removes the registry entry for a token locator; data-URI locators
    /// are stateless and revoking one does nothing. Idempotent, never an
    /// error.
    pub fn revoke(&self, locator: &str) {
        if !data_uri::is_data_uri(locator) {
            self.registry.revoke(locator);
        }
    }
}
