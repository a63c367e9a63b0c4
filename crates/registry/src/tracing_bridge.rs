//! crates/registry/src/tracing_bridge.rs
//! Bridge between the tracing crate and the level registry.
//!
//! This module provides a tracing-subscriber layer that gates tracing
//! events through the registry. An event's `target` is taken as its
//! component name and its [`tracing::Level`] is mapped onto a
//! [`Severity`], so standard tracing macros (`error!`, `warn!`, `info!`,
//! `debug!`, `trace!`) pick up per-component levels that operators mutate
//! at runtime. The layer only decides emission; rendering stays with
//! whatever output layers the host stacks on top.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use registry::{LevelResolver, LevelStore, init_tracing};
//!
//! let store = Arc::new(LevelStore::new());
//! let resolver = Arc::new(LevelResolver::new(Arc::clone(&store)));
//! init_tracing(Arc::clone(&resolver));
//!
//! // Emitted or suppressed according to the registry level for "transfer".
//! tracing::info!(target: "transfer", "copying file");
//! ```

use std::sync::Arc;

use levels::Severity;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::resolver::LevelResolver;

/// A tracing layer that filters events through the level registry.
///
/// Spans are never filtered; only events are gated, using their target as
/// the component name. Because levels change at runtime, the gate runs per
/// event rather than per callsite, so an operator flipping a level is
/// visible on the very next log statement.
pub struct RegistryLayer {
    resolver: Arc<LevelResolver>,
}

impl RegistryLayer {
    /// Creates a layer gating events through the given resolver.
    #[must_use]
    pub const fn new(resolver: Arc<LevelResolver>) -> Self {
        Self { resolver }
    }

    /// Maps a tracing level to the registry's severity scale.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Debug,
            Level::TRACE => Severity::Verbose,
        }
    }
}

impl<S> Layer<S> for RegistryLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
        let metadata = event.metadata();
        let severity = Self::level_to_severity(metadata.level());
        self.resolver.should_emit(metadata.target(), severity)
    }
}

/// Installs a global subscriber that gates events through the registry.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use registry::{LevelResolver, LevelStore, init_tracing};
///
/// let resolver = Arc::new(LevelResolver::new(Arc::new(LevelStore::new())));
/// init_tracing(resolver);
/// ```
pub fn init_tracing(resolver: Arc<LevelResolver>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(RegistryLayer::new(resolver))
        .init();
}

/// Installs a global subscriber combining the registry gate with a custom
/// filter or output layer.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use registry::{LevelResolver, LevelStore, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// let resolver = Arc::new(LevelResolver::new(Arc::new(LevelStore::new())));
/// init_tracing_with_filter(resolver, EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(resolver: Arc<LevelResolver>, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(RegistryLayer::new(resolver))
        .init();
}
