//! crates/levels/src/component.rs
//! Component identity for log call sites.

/// Capability implemented by types that log under their own component name.
///
/// The registry treats component names as opaque non-empty strings; this
/// trait is the seam that ties a concrete type to its name. The default
/// implementation derives a short, stable name from the type itself, so most
/// implementors need no body at all:
///
/// ```
/// use levels::Loggable;
///
/// struct TransferWorker;
/// impl Loggable for TransferWorker {}
///
/// assert_eq!(TransferWorker.component_name(), "TransferWorker");
/// ```
///
/// Types whose name should not track refactors can override the method with
/// a static constant instead.
pub trait Loggable {
    /// Returns the component name this value logs under.
    fn component_name(&self) -> &'static str
    where
        Self: Sized,
    {
        component_name_of::<Self>()
    }
}

/// Returns the short component name for a type.
///
/// The module path and any generic arguments are stripped, so
/// `my_app::transfer::Worker<File>` becomes `Worker`. The result is stable
/// for a given type within a compiled program, which is all the registry
/// requires of a name.
#[must_use]
pub fn component_name_of<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
