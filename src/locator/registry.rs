//! Token registry for synthetic object-URL locators
//!
//! An arena keyed by generated v4 UUIDs. Entries are created by
//! [`LocatorRegistry::create`], looked up by
//! [`LocatorRegistry::resolve`], and removed by
//! [`LocatorRegistry::revoke`]; the map is never iterated or exposed.

use crate::model::Blob;
use crate::LOCATOR_SCHEME;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Registry of live `blob:<uuid>` locators
#[derive(Default)]
pub struct LocatorRegistry {
    entries: RwLock<HashMap<Uuid, Blob>>,
}

impl LocatorRegistry {
    pub fn new() -> Self {
        LocatorRegistry {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Register a blob under a fresh token and return its locator.
    ///
    /// The blob's buffer is shared, not copied.
    pub fn create(&self, blob: &Blob) -> String {
        let token = Uuid::new_v4();
        self.entries.write().insert(token, blob.clone());
        format!("{}{}", LOCATOR_SCHEME, token)
    }

    /// Look up the blob behind a locator, if it is still registered
    pub fn resolve(&self, locator: &str) -> Option<Blob> {
        let token = Self::parse_token(locator)?;
        self.entries.read().get(&token).cloned()
    }

    /// Remove a locator's entry.
    ///
    /// Unknown, malformed, or already-revoked locators are a silent no-op.
    pub fn revoke(&self, locator: &str) {
        if let Some(token) = Self::parse_token(locator) {
            self.entries.write().remove(&token);
        }
    }

    fn parse_token(locator: &str) -> Option<Uuid> {
        let token = locator.strip_prefix(LOCATOR_SCHEME)?;
        Uuid::parse_str(token).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_resolve() {
        let registry = LocatorRegistry::new();
        let blob = Blob::new(["hello"]).with_content_type("text/plain");

        let locator = registry.create(&blob);
        assert!(locator.starts_with("blob:"));

        let resolved = registry.resolve(&locator).unwrap();
        assert_eq!(resolved.text(), "hello");
        assert_eq!(resolved.content_type(), "text/plain");
    }

    #[test]
    fn test_locator_token_is_v4_uuid() {
        let registry = LocatorRegistry::new();
        let locator = registry.create(&Blob::empty());

        let token = locator.strip_prefix("blob:").unwrap();
        let uuid = Uuid::parse_str(token).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
        // Lowercase hyphenated groups
        assert_eq!(token, uuid.hyphenated().to_string());
    }

    #[test]
    fn test_tokens_are_unique() {
        let registry = LocatorRegistry::new();
        let blob = Blob::new(["x"]);
        let a = registry.create(&blob);
        let b = registry.create(&blob);
        assert_ne!(a, b);
    }

    #[test]
    fn test_revoke_removes_entry() {
        let registry = LocatorRegistry::new();
        let locator = registry.create(&Blob::new(["x"]));

        registry.revoke(&locator);
        assert!(registry.resolve(&locator).is_none());
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let registry = LocatorRegistry::new();
        let locator = registry.create(&Blob::new(["x"]));

        registry.revoke(&locator);
        registry.revoke(&locator);
        registry.revoke("blob:not-a-uuid");
        registry.revoke("data:;base64,");
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        let registry = LocatorRegistry::new();
        assert!(registry
            .resolve("blob:00000000-0000-4000-8000-000000000000")
            .is_none());
        assert!(registry.resolve("garbage").is_none());
    }
}
