//! # Method Registry
//!
//! Immutable selector → method table, built once at startup and shared
//! read-only (typically as `Arc<Registry>`) by every dispatcher.
//!
//! Building fails on any selector collision or repeated signature; an entry
//! is never silently replaced.

use crate::domain::services::derive_selector;
use crate::domain::value_objects::Selector;
use crate::errors::RegistryError;
use crate::methods::{standard_methods, StateManagerMethod};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Selector → method table.
#[derive(Clone)]
pub struct Registry {
    methods: HashMap<Selector, Arc<dyn StateManagerMethod>>,
}

impl Registry {
    /// Build a registry from `methods`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateSignature`] if a signature appears twice
    /// - [`RegistryError::SelectorCollision`] if two distinct signatures
    ///   derive the same selector
    pub fn build<I>(methods: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Arc<dyn StateManagerMethod>>,
    {
        let mut table: HashMap<Selector, Arc<dyn StateManagerMethod>> = HashMap::new();

        for method in methods {
            let incoming = method.signature();
            let selector = derive_selector(incoming);

            if let Some(existing) = table.get(&selector) {
                let existing = existing.signature();
                return Err(if existing == incoming {
                    RegistryError::DuplicateSignature(incoming)
                } else {
                    RegistryError::SelectorCollision {
                        selector,
                        existing,
                        incoming,
                    }
                });
            }

            debug!(%selector, signature = incoming, "Registered state manager method");
            table.insert(selector, method);
        }

        Ok(Self { methods: table })
    }

    /// Registry of the eight standard state manager methods.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::build`]; the standard set is collision free.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::build(standard_methods())
    }

    /// Look up the method for `selector`.
    #[must_use]
    pub fn lookup(&self, selector: Selector) -> Option<&Arc<dyn StateManagerMethod>> {
        self.methods.get(&selector)
    }

    /// Returns true if `selector` is registered.
    #[must_use]
    pub fn contains(&self, selector: Selector) -> bool {
        self.methods.contains_key(&selector)
    }

    /// Number of registered methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns true if no method is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Registered `(selector, signature)` pairs, sorted by selector.
    #[must_use]
    pub fn signatures(&self) -> Vec<(Selector, &'static str)> {
        let mut entries: Vec<_> = self
            .methods
            .iter()
            .map(|(selector, method)| (*selector, method.signature()))
            .collect();
        entries.sort_unstable_by_key(|(selector, _)| *selector);
        entries
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.signatures()).finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::{ArgKind, CallArgs};
    use crate::domain::value_objects::Bytes;
    use crate::errors::DispatchError;
    use crate::methods::{signatures, ExecutionContext, GetNonce, GetStorage};

    /// Method with an arbitrary signature, for collision scenarios.
    struct Named(&'static str);

    impl StateManagerMethod for Named {
        fn signature(&self) -> &'static str {
            self.0
        }

        fn layout(&self) -> &'static [ArgKind] {
            &[]
        }

        fn execute(
            &self,
            _ctx: &mut ExecutionContext<'_>,
            _args: &CallArgs,
        ) -> Result<Bytes, DispatchError> {
            Ok(Bytes::new())
        }
    }

    fn selector(hex_str: &str) -> Selector {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&hex::decode(hex_str).unwrap());
        Selector::new(bytes)
    }

    #[test]
    fn test_standard_registry() {
        let registry = Registry::standard().unwrap();
        assert_eq!(registry.len(), 8);

        let expected = [
            ("62c510a3", signatures::GET_STORAGE),
            ("39e503ab", signatures::SET_STORAGE),
            ("0e7d0fff", signatures::GET_NONCE),
            ("d909aa53", signatures::INCREMENT_NONCE),
            ("d7b5555e", signatures::GET_CODE),
            ("dfcac77d", signatures::GET_CODE_HASH),
            ("1949041b", signatures::GET_CODE_ADDRESS),
            ("6b8b57e1", signatures::ASSOCIATE_CODE_CONTRACT),
        ];
        for (hex_selector, signature) in expected {
            let method = registry.lookup(selector(hex_selector)).unwrap();
            assert_eq!(method.signature(), signature);
        }
    }

    #[test]
    fn test_lookup_miss() {
        let registry = Registry::standard().unwrap();
        assert!(registry.lookup(selector("deadbeef")).is_none());
        assert!(!registry.contains(selector("deadbeef")));
    }

    #[test]
    fn test_duplicate_signature_rejected() {
        let methods: Vec<Arc<dyn StateManagerMethod>> =
            vec![Arc::new(GetNonce), Arc::new(GetNonce)];
        let err = Registry::build(methods).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateSignature(signatures::GET_NONCE));
    }

    #[test]
    fn test_selector_collision_rejected() {
        // Well-known 4-byte collision: both hash to 0x42966c68.
        let methods: Vec<Arc<dyn StateManagerMethod>> = vec![
            Arc::new(Named("burn(uint256)")),
            Arc::new(Named("collate_propagate_storage(bytes16)")),
        ];
        let err = Registry::build(methods).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::SelectorCollision {
                existing: "burn(uint256)",
                incoming: "collate_propagate_storage(bytes16)",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::build(Vec::<Arc<dyn StateManagerMethod>>::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.signatures().is_empty());
    }

    #[test]
    fn test_signatures_sorted() {
        let methods: Vec<Arc<dyn StateManagerMethod>> =
            vec![Arc::new(GetStorage), Arc::new(GetNonce)];
        let registry = Registry::build(methods).unwrap();
        let entries = registry.signatures();
        assert_eq!(entries[0], (selector("0e7d0fff"), signatures::GET_NONCE));
        assert_eq!(entries[1], (selector("62c510a3"), signatures::GET_STORAGE));
    }
}
