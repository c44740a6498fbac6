//! Activity registry for request-time lookup.
//!
//! A key-indexed table of invocables, built once at startup and shared
//! read-only afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use party_types::party::ActivityKey;

use crate::provider::{self, PartyService};

/// A zero-argument activity returning its description.
pub type Invocable = Arc<dyn Fn() -> String + Send + Sync>;

/// Registry of activities, indexed by `(venue, activity)`.
pub struct ActivityRegistry {
    entries: HashMap<ActivityKey, Invocable>,
}

impl ActivityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build the registry from the fixed set of venue services.
    pub fn build() -> Self {
        Self::from_services(provider::default_services())
    }

    /// Build a registry holding every activity each service exposes.
    ///
    /// A service exposing no activities contributes no entries.
    pub fn from_services(services: impl IntoIterator<Item = Arc<dyn PartyService>>) -> Self {
        let mut registry = Self::new();
        for service in services {
            let venue = service.venue();
            for &activity in service.activities() {
                let service = Arc::clone(&service);
                registry.register(
                    ActivityKey::new(venue, activity),
                    Arc::new(move || provider::perform(service.as_ref(), activity)),
                );
            }
        }

        let keys: Vec<String> = registry.keys().iter().map(ToString::to_string).collect();
        tracing::info!(count = keys.len(), ?keys, "activity registry built");
        registry
    }

    /// Register an invocable under the given key.
    ///
    /// If an entry with this key already exists, it is replaced.
    pub fn register(&mut self, key: ActivityKey, invocable: Invocable) {
        self.entries.insert(key, invocable);
    }

    /// Look up an invocable by key.
    pub fn get(&self, key: &ActivityKey) -> Option<&Invocable> {
        self.entries.get(key)
    }

    /// All registered keys, sorted by venue then activity.
    pub fn keys(&self) -> Vec<ActivityKey> {
        let mut keys: Vec<ActivityKey> = self.entries.keys().copied().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ActivityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use party_types::party::{Activity, Venue};

    struct Empty;

    impl PartyService for Empty {
        fn venue(&self) -> Venue {
            Venue::School
        }
        fn sing(&self) -> String {
            unreachable!()
        }
        fn dance(&self) -> String {
            unreachable!()
        }
        fn rap(&self) -> String {
            unreachable!()
        }
        fn basketball(&self) -> String {
            unreachable!()
        }
        fn activities(&self) -> &'static [Activity] {
            &[]
        }
    }

    #[test]
    fn build_registers_every_venue_activity_pair() {
        let registry = ActivityRegistry::build();
        assert_eq!(registry.len(), 8);
        for venue in Venue::ALL {
            for activity in Activity::ALL {
                assert!(registry.get(&ActivityKey::new(venue, activity)).is_some());
            }
        }
    }

    #[test]
    fn keys_are_sorted() {
        let keys: Vec<String> = ActivityRegistry::build()
            .keys()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(keys.first().map(String::as_str), Some("school:sing"));
        assert_eq!(keys.last().map(String::as_str), Some("classroom:basketball"));
    }

    #[test]
    fn service_without_activities_contributes_nothing() {
        let registry = ActivityRegistry::from_services([Arc::new(Empty) as Arc<dyn PartyService>]);
        assert!(registry.is_empty());
    }

    #[test]
    fn register_replaces_existing_entry() {
        let mut registry = ActivityRegistry::build();
        let key = ActivityKey::new(Venue::School, Activity::Sing);
        registry.register(key, Arc::new(|| "replaced".to_string()));
        assert_eq!(registry.len(), 8);
        let invocable = registry.get(&key).unwrap();
        assert_eq!(invocable(), "replaced");
    }

    #[test]
    fn empty_registry() {
        let registry = ActivityRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.keys().is_empty());
    }
}
