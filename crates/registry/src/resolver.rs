//! crates/registry/src/resolver.rs
//! Lazy-registration façade consulted by logging call sites.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use levels::{Loggable, Severity};

use crate::store::LevelStore;

/// Resolves the effective severity for a component at log time.
///
/// The resolver wraps the process-wide [`LevelStore`] and carries two pieces
/// of process state: the default level applied to components on their first
/// lookup, and the emission switch that lets a deployment turn the whole
/// gate off at startup without touching individual levels.
///
/// Resolution is lazy: the first lookup for a component registers it at the
/// default level current *at that moment*, so changing the default afterwards
/// does not retroactively affect already-registered components.
///
/// Unlike the store's administrative surface, nothing here returns an error.
/// A logging call site must never be interrupted by its own logging
/// infrastructure, so when the store is unavailable `resolve` answers with
/// the current default and caches nothing.
#[derive(Debug)]
pub struct LevelResolver {
    store: Arc<LevelStore>,
    default_level: AtomicU8,
    enabled: AtomicBool,
}

impl LevelResolver {
    /// The baseline default level, `Warning`.
    pub const DEFAULT_LEVEL: Severity = Severity::Warning;

    /// Creates a resolver with the conventional `Warning` default.
    #[must_use]
    pub fn new(store: Arc<LevelStore>) -> Self {
        Self::with_default_level(store, Self::DEFAULT_LEVEL)
    }

    /// Creates a resolver seeded with an explicit default level.
    #[must_use]
    pub fn with_default_level(store: Arc<LevelStore>, default_level: Severity) -> Self {
        Self {
            store,
            default_level: AtomicU8::new(default_level.as_raw()),
            enabled: AtomicBool::new(true),
        }
    }

    /// Borrows the underlying store, e.g. for an operator surface.
    #[must_use]
    pub fn store(&self) -> &LevelStore {
        &self.store
    }

    /// Returns the current process default level.
    #[must_use]
    pub fn default_level(&self) -> Severity {
        Severity::from_raw(self.default_level.load(Ordering::Relaxed))
            .unwrap_or(Self::DEFAULT_LEVEL)
    }

    /// Changes the process default level.
    ///
    /// Only components that have not yet been registered are affected;
    /// components already in the store keep their baked-in level.
    pub fn set_default_level(&self, level: Severity) {
        self.default_level.store(level.as_raw(), Ordering::Relaxed);
    }

    /// Indicates whether emission is globally enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Globally enables or disables emission.
    ///
    /// The runtime counterpart of stripping log calls out of a release
    /// build: with the switch off, [`should_emit`](Self::should_emit) is
    /// unconditionally `false` while level resolution keeps working.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Returns the current severity for `name`, registering it at the
    /// process default on first use.
    ///
    /// Never fails: an empty name or an unavailable store resolves to the
    /// current default without caching anything.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Severity {
        let fallback = self.default_level();
        self.store.get_or_register(name, fallback).unwrap_or(fallback)
    }

    /// Resolves the severity for a [`Loggable`] value.
    #[must_use]
    pub fn resolve_for<L: Loggable>(&self, source: &L) -> Severity {
        self.resolve(source.component_name())
    }

    /// Indicates whether a message at `message_severity` should be emitted
    /// for the component `name`.
    ///
    /// True iff emission is globally enabled, the component's resolved
    /// severity is not `Off`, and `message_severity` is at or below it.
    #[must_use]
    pub fn should_emit(&self, name: &str, message_severity: Severity) -> bool {
        self.enabled() && self.resolve(name).permits(message_severity)
    }

    /// [`should_emit`](Self::should_emit) for a [`Loggable`] value.
    #[must_use]
    pub fn should_emit_for<L: Loggable>(&self, source: &L, message_severity: Severity) -> bool {
        self.should_emit(source.component_name(), message_severity)
    }

    /// Builds a message only when it would be emitted.
    ///
    /// The deferred-construction contract for transports: `message` is a
    /// zero-argument closure invoked iff
    /// [`should_emit`](Self::should_emit) answers `true`, so suppressed
    /// log statements never pay for formatting.
    pub fn message_if_enabled<F>(
        &self,
        name: &str,
        message_severity: Severity,
        message: F,
    ) -> Option<String>
    where
        F: FnOnce() -> String,
    {
        self.should_emit(name, message_severity).then(message)
    }
}
