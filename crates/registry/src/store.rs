//! crates/registry/src/store.rs
//! Volatile, authoritative storage of per-component severities.

use std::sync::RwLock;

use levels::Severity;
use rustc_hash::FxHashMap;

use crate::error::RegistryError;

/// Authoritative volatile store mapping component names to severities.
///
/// The store lives only in process memory; nothing survives a restart.
/// Exactly one instance exists per process, owned by the logging
/// initializer and shared via `Arc` with every [`LevelResolver`] and
/// operator surface that needs it.
///
/// Reads take the shared side of the lock and never block each other;
/// every mutation, including the insert-if-absent behind lazy
/// registration, takes the exclusive side. A poisoned lock is the only
/// way this in-memory store can become unavailable, and the methods
/// below report it as [`RegistryError::Unavailable`] instead of
/// panicking.
///
/// [`LevelResolver`]: crate::LevelResolver
#[derive(Debug, Default)]
pub struct LevelStore {
    entries: RwLock<FxHashMap<String, Severity>>,
}

impl LevelStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored severity for `name`, or `Ok(None)` if the
    /// component was never registered.
    pub fn get(&self, name: &str) -> Result<Option<Severity>, RegistryError> {
        let entries = self.entries.read().map_err(|_| RegistryError::Unavailable)?;
        Ok(entries.get(name).copied())
    }

    /// Inserts or overwrites the severity for `name`.
    ///
    /// An empty name is rejected with
    /// [`RegistryError::InvalidComponentName`]; the store is left
    /// unchanged. The call is idempotent.
    pub fn set_level(&self, name: &str, severity: Severity) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::InvalidComponentName);
        }
        let mut entries = self.entries.write().map_err(|_| RegistryError::Unavailable)?;
        entries.insert(name.to_owned(), severity);
        Ok(())
    }

    /// Merges every entry of `mapping` into the store under a single
    /// write lock.
    ///
    /// Existing entries for the same names are overwritten; names not
    /// mentioned in `mapping` are untouched. The merge is all-or-nothing:
    /// names are validated before the lock is taken, so a batch
    /// containing an empty name applies nothing.
    pub fn register_bulk<I, S>(&self, mapping: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (S, Severity)>,
        S: Into<String>,
    {
        let batch: Vec<(String, Severity)> = mapping
            .into_iter()
            .map(|(name, severity)| (name.into(), severity))
            .collect();
        if batch.iter().any(|(name, _)| name.is_empty()) {
            return Err(RegistryError::InvalidComponentName);
        }
        let mut entries = self.entries.write().map_err(|_| RegistryError::Unavailable)?;
        entries.extend(batch);
        Ok(())
    }

    /// Sets every currently-registered component except `name` to
    /// [`Severity::Off`].
    ///
    /// `name` keeps whatever severity it has, registered or not;
    /// components never registered are not silently created. When the
    /// store cannot be written the call is a silent no-op, matching the
    /// expectation that flipping everything off from an operator console
    /// must never take down the host.
    pub fn disable_all_except(&self, name: &str) {
        if let Ok(mut entries) = self.entries.write() {
            for (component, severity) in entries.iter_mut() {
                if component != name {
                    *severity = Severity::Off;
                }
            }
        }
    }

    /// Returns a snapshot of all registered components and their
    /// severities, sorted by component name.
    ///
    /// The snapshot is a plain vector: it stays valid while the registry
    /// keeps mutating, but does not reflect those later mutations.
    pub fn list_all(&self) -> Result<Vec<(String, Severity)>, RegistryError> {
        let entries = self.entries.read().map_err(|_| RegistryError::Unavailable)?;
        let mut snapshot: Vec<(String, Severity)> = entries
            .iter()
            .map(|(name, severity)| (name.clone(), *severity))
            .collect();
        snapshot.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(snapshot)
    }

    /// Returns the severity for `name`, registering it at `fallback`
    /// when absent.
    ///
    /// This is the read-modify-write primitive behind lazy registration.
    /// The insert-if-absent happens under the exclusive lock, so when
    /// several threads race on an unseen name exactly one value wins and
    /// all of them observe it.
    pub fn get_or_register(
        &self,
        name: &str,
        fallback: Severity,
    ) -> Result<Severity, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::InvalidComponentName);
        }
        if let Some(severity) = self.get(name)? {
            return Ok(severity);
        }
        let mut entries = self.entries.write().map_err(|_| RegistryError::Unavailable)?;
        Ok(*entries.entry(name.to_owned()).or_insert(fallback))
    }

    /// Poisons the internal lock so tests can exercise the unavailable
    /// paths.
    #[cfg(test)]
    pub(crate) fn poison_for_test(&self) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self
                .entries
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            panic!("poisoning registry lock");
        }));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_unregistered_names() {
        let store = LevelStore::new();
        assert_eq!(store.get("Transfer").unwrap(), None);
    }

    #[test]
    fn set_level_then_get_roundtrips() {
        let store = LevelStore::new();
        store.set_level("Transfer", Severity::Debug).unwrap();
        assert_eq!(store.get("Transfer").unwrap(), Some(Severity::Debug));
    }

    #[test]
    fn set_level_overwrites_existing_entries() {
        let store = LevelStore::new();
        store.set_level("Transfer", Severity::Debug).unwrap();
        store.set_level("Transfer", Severity::Off).unwrap();
        assert_eq!(store.get("Transfer").unwrap(), Some(Severity::Off));
    }

    #[test]
    fn set_level_is_idempotent() {
        let store = LevelStore::new();
        store.set_level("Transfer", Severity::Warning).unwrap();
        store.set_level("Transfer", Severity::Warning).unwrap();
        assert_eq!(store.get("Transfer").unwrap(), Some(Severity::Warning));
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn set_level_rejects_empty_names() {
        let store = LevelStore::new();
        assert_eq!(
            store.set_level("", Severity::Info),
            Err(RegistryError::InvalidComponentName)
        );
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn register_bulk_merges_and_preserves_unmentioned_entries() {
        let store = LevelStore::new();
        store.set_level("Keep", Severity::Verbose).unwrap();
        store
            .register_bulk([("A", Severity::Debug), ("B", Severity::Error)])
            .unwrap();

        assert_eq!(store.get("A").unwrap(), Some(Severity::Debug));
        assert_eq!(store.get("B").unwrap(), Some(Severity::Error));
        assert_eq!(store.get("Keep").unwrap(), Some(Severity::Verbose));
    }

    #[test]
    fn register_bulk_overwrites_existing_entries() {
        let store = LevelStore::new();
        store.set_level("A", Severity::Off).unwrap();
        store.register_bulk([("A", Severity::Info)]).unwrap();
        assert_eq!(store.get("A").unwrap(), Some(Severity::Info));
    }

    #[test]
    fn register_bulk_with_empty_name_applies_nothing() {
        let store = LevelStore::new();
        let result = store.register_bulk([("A", Severity::Debug), ("", Severity::Error)]);
        assert_eq!(result, Err(RegistryError::InvalidComponentName));
        assert_eq!(store.get("A").unwrap(), None);
    }

    #[test]
    fn disable_all_except_spares_only_the_named_component() {
        let store = LevelStore::new();
        store
            .register_bulk([
                ("a", Severity::Debug),
                ("b", Severity::Info),
                ("c", Severity::Verbose),
            ])
            .unwrap();

        store.disable_all_except("a");

        assert_eq!(store.get("a").unwrap(), Some(Severity::Debug));
        assert_eq!(store.get("b").unwrap(), Some(Severity::Off));
        assert_eq!(store.get("c").unwrap(), Some(Severity::Off));
    }

    #[test]
    fn disable_all_except_never_creates_entries() {
        let store = LevelStore::new();
        store.set_level("b", Severity::Info).unwrap();

        store.disable_all_except("never-registered");

        assert_eq!(store.get("never-registered").unwrap(), None);
        assert_eq!(store.get("b").unwrap(), Some(Severity::Off));
    }

    #[test]
    fn list_all_is_sorted_by_name() {
        let store = LevelStore::new();
        store
            .register_bulk([
                ("zeta", Severity::Info),
                ("alpha", Severity::Debug),
                ("mid", Severity::Off),
            ])
            .unwrap();

        let snapshot = store.list_all().unwrap();
        assert_eq!(
            snapshot,
            vec![
                ("alpha".to_owned(), Severity::Debug),
                ("mid".to_owned(), Severity::Off),
                ("zeta".to_owned(), Severity::Info),
            ]
        );
    }

    #[test]
    fn list_all_snapshot_does_not_track_later_mutations() {
        let store = LevelStore::new();
        store.set_level("a", Severity::Info).unwrap();
        let snapshot = store.list_all().unwrap();
        store.set_level("a", Severity::Off).unwrap();
        assert_eq!(snapshot, vec![("a".to_owned(), Severity::Info)]);
    }

    #[test]
    fn get_or_register_registers_unseen_names() {
        let store = LevelStore::new();
        assert_eq!(
            store.get_or_register("fresh", Severity::Warning).unwrap(),
            Severity::Warning
        );
        assert_eq!(store.get("fresh").unwrap(), Some(Severity::Warning));
    }

    #[test]
    fn get_or_register_keeps_existing_values() {
        let store = LevelStore::new();
        store.set_level("seen", Severity::Verbose).unwrap();
        assert_eq!(
            store.get_or_register("seen", Severity::Warning).unwrap(),
            Severity::Verbose
        );
    }

    #[test]
    fn get_or_register_rejects_empty_names() {
        let store = LevelStore::new();
        assert_eq!(
            store.get_or_register("", Severity::Warning),
            Err(RegistryError::InvalidComponentName)
        );
    }

    #[test]
    fn poisoned_store_reports_unavailable() {
        let store = LevelStore::new();
        store.poison_for_test();

        assert_eq!(store.get("a"), Err(RegistryError::Unavailable));
        assert_eq!(
            store.set_level("a", Severity::Info),
            Err(RegistryError::Unavailable)
        );
        assert_eq!(
            store.register_bulk([("a", Severity::Info)]),
            Err(RegistryError::Unavailable)
        );
        assert_eq!(store.list_all(), Err(RegistryError::Unavailable));
        assert_eq!(
            store.get_or_register("a", Severity::Info),
            Err(RegistryError::Unavailable)
        );
    }

    #[test]
    fn poisoned_store_makes_disable_all_except_a_no_op() {
        let store = LevelStore::new();
        store.poison_for_test();
        // Must neither panic nor create entries.
        store.disable_all_except("a");
    }
}
