//! Parse tree definitions
//!
//! This module defines the tree an external C front end produces:
//! - [`kind`]: the closed [`NodeKind`] taxonomy, one variant per grammar rule
//! - [`node`]: [`Node`] itself (tag, token payload, source span, children)
//! - [`display`]: LISP-style one-line tree rendering
//!
//! # Tree Shape
//!
//! Nodes mirror the grammar derivation directly, so a tree for
//! `1 + 2` is the full delegation chain from `assignment_expression`
//! down through every precedence level to the two `primary_expression`
//! leaves, with the `+` lexeme carried as payload on the
//! `additive_expression` node.  Operators never get node kinds of their
//! own.
//!
//! # Ownership
//!
//! Children are owned exclusively by their parent and the root owns the
//! whole tree; dropping the root drops everything.  There is no sharing
//! and no mutation after construction; every accessor borrows.

pub mod display;
pub mod kind;
pub mod node;

pub use kind::NodeKind;
pub use node::{Node, SourceLocation, Span};
