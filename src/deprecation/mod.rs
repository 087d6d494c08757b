//! Deprecation shims for renamed properties, functions and keywords.
//!
//! Every shim warns once per use and then behaves exactly like the API it
//! stands in for. Nothing here fails on behalf of the deprecation itself.

pub mod kwargs;
pub mod property;
pub mod renamed;
pub mod warner;

pub use kwargs::{Kwargs, KwargsFn, RenamedKwargs, Replacement};
pub use property::DeprecatedProperty;
pub use renamed::{Delegate, RenamedFn, rename_fns};
pub use warner::{
    Boundary, CallFrame, CollectingSink, DEFAULT_BOUNDARY, LogSink, Warner, Warning,
    WarningCategory, WarningSink,
};
