//! Event-to-Journal Derivation
//!
//! Maps saved business events to balanced journal entries and keeps the
//! two in step across edits and deletes:
//!
//! - every derived entry carries a stable [`key`] built from immutable
//!   event fields, so re-deriving updates in place instead of
//!   duplicating;
//! - accounts are resolved through [`bindings`], exact code first, name
//!   substring as fallback;
//! - the [`registry`] is the explicit dispatch seam persistence code
//!   calls on save and delete. Unresolvable accounts skip the
//!   derivation without failing the save, leaving a record on the
//!   failure list.

pub mod bindings;
pub mod error;
pub mod key;
pub mod registry;

pub use bindings::{AccountBinding, AccountBindings};
pub use error::DerivationError;
pub use registry::{DerivationRegistry, FailedDerivation, SourceEvent};
