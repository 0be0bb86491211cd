//! Tree rendering
//!
//! Renders a subtree as a one-line LISP-style term: the rule name,
//! then the node's terminal lexemes in single quotes, then the children.
//! Meant for test assertions and debugging dumps, not for reconstructing
//! source text.
//!
//! ```
//! use ctree::tree::{Node, NodeKind, Span};
//!
//! let tree = Node::new(NodeKind::AdditiveExpression, Span::at(1, 1))
//!     .with_token("+")
//!     .with_child(Node::new(NodeKind::PrimaryExpression, Span::at(1, 1)).with_token("1"))
//!     .with_child(Node::new(NodeKind::PrimaryExpression, Span::at(1, 5)).with_token("2"));
//!
//! assert_eq!(
//!     tree.to_string(),
//!     "(additive_expression '+' (primary_expression '1') (primary_expression '2'))"
//! );
//! ```

use crate::tree::node::Node;
use std::fmt;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind())?;
        for token in self.tokens() {
            write!(f, " '{}'", token)?;
        }
        for child in self.children() {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}
