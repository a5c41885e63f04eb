//! Defines [`ASTError`].

use thiserror::Error;

use crate::ast::{ListOpKind, OperandShape};

/// A rejected construction.
///
/// No partially built node ever escapes a constructor that returns this error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ASTError {
    /// A list operation was given operands that do not fit its kind.
    #[error("list operation {kind} expects {expected}, found {found}")]
    ShapeMismatch {
        kind: ListOpKind,
        expected: OperandShape,
        found: OperandShape,
    },
    /// A variable definition must declare at least one identifier.
    #[error("variable definition declares no identifiers")]
    EmptyVarDef,
    /// An external package declaration must name at least one package.
    #[error("external package list is empty")]
    EmptyExtPack,
    #[error("external package path {position} is blank")]
    BlankPackagePath { position: usize },
    /// A format string needs one more literal fragment than it has expressions.
    #[error("format string has {fragments} fragments for {exprs} expressions")]
    FragmentMismatch { fragments: usize, exprs: usize },
}
