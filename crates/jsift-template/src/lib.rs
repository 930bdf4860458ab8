//! The jsift template compiler and structural matcher.
//!
//! A template describes a desired class shape and is compiled once into a
//! [`ClassPattern`], then evaluated against any number of candidate types
//! from a frozen [`jsift_types::TypeStore`].
//!
//! Template grammar:
//!
//! ```text
//! TEMPLATE     = CLASS_NAME ':' PARENT_LIST '{' METHOD* '}'
//! CLASS_NAME   = '*' | '"' regex '"' | dotted-name
//! PARENT_LIST  = '*' | dotted-name (',' dotted-name)*
//! METHOD       = MODIFIER* METHOD_NAME '(' [PARAM (',' PARAM)*] ')' [':' TYPE] ';'
//! METHOD_NAME  = '*' | '"' regex '"' | name
//! PARAM        = '*' | TYPE | TYPE '?'
//! TYPE         = ['extends' | 'super'] type-name ('[]')*
//! ```
//!
//! `*` in the parameter list leaves the remaining parameters unconstrained; a
//! `?` suffix marks a parameter that must appear somewhere, at any position.
//! Compilation is a single forward pass with one-character lookahead; a
//! compiled pattern is immutable and its evaluation is read-only, so one
//! pattern can match many candidates concurrently.

#![forbid(unsafe_code)]

mod class;
pub mod cursor;
mod error;
mod method;
mod name;
mod result;
mod type_ref;

pub use crate::class::{ClassPattern, ParentRule};
pub use crate::cursor::Cursor;
pub use crate::error::{Result, TemplateError};
pub use crate::method::MethodPattern;
pub use crate::name::NameRule;
pub use crate::result::MatchResult;
pub use crate::type_ref::{TypeRef, Variance};
