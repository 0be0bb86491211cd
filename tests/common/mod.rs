// Shared parse-tree builders for the traversal tests.
//
// The trees here are what a correct front end would hand this crate:
// full derivation chains through every precedence level, never
// shortcuts.

#![allow(dead_code)]

use ctree::tree::{Node, NodeKind, Span};

pub fn sp() -> Span {
    Span::at(1, 1)
}

/// Wrap `node` in a chain of single-child delegation nodes,
/// outermost kind first.
pub fn delegate(kinds: &[NodeKind], node: Node) -> Node {
    kinds
        .iter()
        .rev()
        .fold(node, |inner, &kind| Node::new(kind, sp()).with_child(inner))
}

/// Delegation levels from `assignment_expression` down to
/// `shift_expression`, in grammar order.
pub const ASSIGNMENT_TO_SHIFT: &[NodeKind] = &[
    NodeKind::AssignmentExpression,
    NodeKind::ConditionalExpression,
    NodeKind::LogicalOrExpression,
    NodeKind::LogicalAndExpression,
    NodeKind::InclusiveOrExpression,
    NodeKind::ExclusiveOrExpression,
    NodeKind::AndExpression,
    NodeKind::EqualityExpression,
    NodeKind::RelationalExpression,
    NodeKind::ShiftExpression,
];

/// Delegation levels from `multiplicative_expression` down to
/// `postfix_expression`.
pub const MULTIPLICATIVE_TO_POSTFIX: &[NodeKind] = &[
    NodeKind::MultiplicativeExpression,
    NodeKind::CastExpression,
    NodeKind::UnaryExpression,
    NodeKind::PostfixExpression,
];

pub fn primary(text: &str) -> Node {
    Node::new(NodeKind::PrimaryExpression, sp()).with_token(text)
}

/// `1 + 2` as an `additive_expression`: the left operand is a
/// delegating `additive_expression`, the right a
/// `multiplicative_expression`, the operator rides as payload.
pub fn one_plus_two() -> Node {
    let left = delegate(
        &[NodeKind::AdditiveExpression],
        delegate(MULTIPLICATIVE_TO_POSTFIX, primary("1")),
    );
    let right = delegate(MULTIPLICATIVE_TO_POSTFIX, primary("2"));
    Node::new(NodeKind::AdditiveExpression, sp())
        .with_token("+")
        .with_child(left)
        .with_child(right)
}

/// Full expression chain from `assignment_expression` down to a single
/// primary constant or identifier.
pub fn scalar_expression(text: &str) -> Node {
    delegate(
        ASSIGNMENT_TO_SHIFT,
        delegate(
            &[NodeKind::AdditiveExpression],
            delegate(MULTIPLICATIVE_TO_POSTFIX, primary(text)),
        ),
    )
}

/// The tree for `int x = 1 + 2;`, rooted at `translation_unit`.
pub fn int_x_equals_one_plus_two() -> Node {
    let specifiers = Node::new(NodeKind::DeclarationSpecifiers, sp()).with_child(
        Node::new(NodeKind::DeclarationSpecifier, sp())
            .with_child(Node::new(NodeKind::TypeSpecifier, sp()).with_token("int")),
    );

    let declarator = Node::new(NodeKind::Declarator, sp())
        .with_child(Node::new(NodeKind::DirectDeclarator, sp()).with_token("x"));

    let initializer = Node::new(NodeKind::Initializer, sp())
        .with_child(delegate(ASSIGNMENT_TO_SHIFT, one_plus_two()));

    let init_declarator = Node::new(NodeKind::InitDeclarator, sp())
        .with_token("=")
        .with_child(declarator)
        .with_child(initializer);

    let declaration = Node::new(NodeKind::Declaration, sp())
        .with_child(specifiers)
        .with_child(
            Node::new(NodeKind::InitDeclaratorList, sp()).with_child(init_declarator),
        );

    Node::new(NodeKind::TranslationUnit, sp())
        .with_child(Node::new(NodeKind::ExternalDeclaration, sp()).with_child(declaration))
}

/// An empty compound statement, `{}`.  The optional `block_item_list`
/// node is absent entirely, so the subtree is a single node.
pub fn empty_compound() -> Node {
    Node::new(NodeKind::CompoundStatement, sp())
}

/// The tree for `int main() { return 0; }`, rooted at
/// `translation_unit`.
pub fn main_returning_zero() -> Node {
    let specifiers = Node::new(NodeKind::DeclarationSpecifiers, sp()).with_child(
        Node::new(NodeKind::DeclarationSpecifier, sp())
            .with_child(Node::new(NodeKind::TypeSpecifier, sp()).with_token("int")),
    );

    let declarator = Node::new(NodeKind::Declarator, sp()).with_child(
        Node::new(NodeKind::DirectDeclarator, sp())
            .with_token("(")
            .with_token(")")
            .with_child(Node::new(NodeKind::DirectDeclarator, sp()).with_token("main")),
    );

    let return_stmt = Node::new(NodeKind::Statement, sp()).with_child(
        Node::new(NodeKind::JumpStatement, sp())
            .with_token("return")
            .with_child(delegate(&[NodeKind::Expression], scalar_expression("0"))),
    );

    let body = Node::new(NodeKind::CompoundStatement, sp()).with_child(
        Node::new(NodeKind::BlockItemList, sp())
            .with_child(Node::new(NodeKind::BlockItem, sp()).with_child(return_stmt)),
    );

    let function = Node::new(NodeKind::FunctionDefinition, sp())
        .with_child(specifiers)
        .with_child(declarator)
        .with_child(body);

    Node::new(NodeKind::TranslationUnit, sp())
        .with_child(Node::new(NodeKind::ExternalDeclaration, sp()).with_child(function))
}
