//! This module defines the Styio syntax tree.
//!
//! Every construct is a variant of the closed enum [`Node`]. Variants that carry
//! data hold a payload struct (e.g. [`RangeAST`]) whose constructor is the only
//! place its fields are set; there is no way to mutate a node once it is built.
//! Children are exclusively owned (boxed or held in a `Vec`), so a tree can never
//! share a subtree between two parents.
//!
//! Trees are produced by the parser, which lives outside this crate. Consumers
//! match exhaustively on [`Node`] or on its [`NodeKind`] tag.

mod ast_types;
mod kind;
mod list_op;
mod operators;

pub use ast_types::*;
pub use kind::NodeKind;
pub use list_op::{ListOpAST, ListOpKind, ListOperands, OperandShape};
pub use operators::{BinOperator, Comparison, LogicOperation, OperatorClass};

#[cfg(test)]
mod tests;
