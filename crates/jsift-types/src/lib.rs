//! Type metadata model shared across jsift crates.
//!
//! The pool of candidate types lives in a [`TypeStore`]: an immutable,
//! name-indexed collection of [`TypeStub`]s with precomputed supertype
//! closures. Stores are produced once by a [`TypeStoreBuilder`] (normally fed
//! by `jsift-metadata`) and are read-only afterwards, so they can be shared
//! freely across threads.

#![forbid(unsafe_code)]

pub mod modifiers;

mod raw;
mod store;
mod stub;
mod ty;

pub use crate::raw::{RawMethodRecord, RawTypeRecord};
pub use crate::store::{LookupError, TypeStore, TypeStoreBuilder};
pub use crate::stub::{MethodStub, TypeStub};
pub use crate::ty::{ClassId, Primitive, Type};
