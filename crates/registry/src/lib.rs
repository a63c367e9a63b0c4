#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `registry` is a per-component log-level registry layered on top of a
//! leveled-logging backend. Call sites tag log statements with a
//! [`Severity`](levels::Severity) and a component name (typically derived
//! from the caller's type via [`Loggable`](levels::Loggable)); the registry
//! decides at call time whether that component may emit at that severity.
//! Levels are mutable at runtime and live only in process memory.
//!
//! # Design
//!
//! [`LevelStore`] owns the volatile mapping from component name to severity
//! behind a shared-exclusive lock; reads never block each other and every
//! mutation, including the read-modify-write of lazy registration, is
//! exclusive. [`LevelResolver`] is the thin façade used by call sites: it
//! resolves a component's level, registering unseen components at the
//! process default, and never fails a logging call site. Both are owned by
//! the host's logging initializer and injected where needed; there is no
//! ambient global instance.
//!
//! # Invariants
//!
//! - Absence of a key means "not yet registered"; the first resolve bakes in
//!   whatever the process default was at that moment.
//! - Mutations are whole-map operations under one write lock, so callers
//!   never observe a partially-applied bulk update.
//! - Registry errors never propagate to logging call sites; `resolve` falls
//!   back to the process default without caching it.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use levels::Severity;
//! use registry::{LevelResolver, LevelStore};
//!
//! let store = Arc::new(LevelStore::new());
//! let resolver = LevelResolver::new(Arc::clone(&store));
//!
//! // First use registers the component at the process default (Warning).
//! assert_eq!(resolver.resolve("Transfer"), Severity::Warning);
//! assert!(resolver.should_emit("Transfer", Severity::Error));
//! assert!(!resolver.should_emit("Transfer", Severity::Debug));
//!
//! // An operator raises the level at runtime.
//! store.set_level("Transfer", Severity::Debug)?;
//! assert!(resolver.should_emit("Transfer", Severity::Debug));
//! # Ok::<(), registry::RegistryError>(())
//! ```

mod error;
mod resolver;
mod store;
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
mod tracing_bridge;

pub use error::RegistryError;
pub use resolver::LevelResolver;
pub use store::LevelStore;
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use tracing_bridge::{RegistryLayer, init_tracing, init_tracing_with_filter};
