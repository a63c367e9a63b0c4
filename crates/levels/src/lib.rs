#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levels` defines the vocabulary shared by every layer of the log-level
//! registry: the ordered [`Severity`] enumeration and the [`Loggable`]
//! capability that ties a concrete type to its component name.
//!
//! Severities form a total order from [`Severity::Off`] (nothing enabled) to
//! [`Severity::All`] (everything enabled). A message is emitted when its
//! severity is at or below the severity configured for its component, so a
//! component set to `Info` emits `Error`, `Warning`, and `Info` records but
//! suppresses `Debug` and `Verbose` ones. The registry itself lives in the
//! `registry` crate; this crate carries no state.
//!
//! # Examples
//!
//! ```
//! use levels::Severity;
//!
//! assert!(Severity::Error < Severity::Debug);
//! assert_eq!(Severity::Verbose.to_string(), "Verbose");
//! assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
//! ```

mod component;
mod severity;

pub use component::{Loggable, component_name_of};
pub use severity::{ParseSeverityError, Severity};
