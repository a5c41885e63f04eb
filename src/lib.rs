//! The syntax tree layer of the Styio front-end.
//!
//! The parser builds trees out of [`Node`]s; this crate defines what those
//! trees look like, rejects nodes whose fields do not fit together, and renders
//! trees as text for diagnostics. Evaluation, code generation and type checking
//! happen elsewhere, though the operator rules a type checker enforces are
//! recorded here as data in [`types`].
//!
//! ```
//! use styio_ast::{render, ListAST, Node};
//!
//! let list = Node::List(ListAST::new(vec![Node::int(3), Node::int(5)]));
//!
//! assert_eq!(render(&list, 0, true), "List [ 3, 5 ]");
//! assert_eq!(render(&list, 0, false), "List [\n  Int { 3 }\n  Int { 5 }]");
//! ```

// I use `cargo clippy -- -D clippy::pedantic`
#![allow(
    clippy::missing_errors_doc,  // Docs? Lol.
    clippy::missing_panics_doc,  // Docs? Lmao.
    clippy::must_use_candidate,  // What?
    clippy::module_name_repetitions,  // Maybe a little weird but I'm bad at naming things.
    clippy::upper_case_acronyms,  // ICBSLayer. Deal with it
    clippy::match_wildcard_for_single_variants,  // I do this on purpose
)]

pub mod ast;
pub mod config;
pub mod print;
pub mod types;

mod error;

pub use ast::*;
pub use config::RenderConfig;
pub use error::ASTError;
pub use print::{render, render_with, Render};
