//! Errors raised while building a tree.
//!
//! Rendering never fails, so the only errors in this crate come from
//! constructors that refuse an illegal combination of fields.

mod error_types;

pub use error_types::ASTError;
