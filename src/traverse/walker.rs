//! Tree walker
//!
//! Drives a [`Listener`] over a parse tree in a single depth-first,
//! left-to-right pass.  The walker owns the traversal order; the
//! listener only observes.  For each node the sequence is: `enter_each`,
//! the kind-specific `enter_*`, the children in structural order, the
//! kind-specific `exit_*`, `exit_each`.

use crate::traverse::listener::Listener;
use crate::tree::{Node, NodeKind};

/// Walk the subtree rooted at `root`, notifying `listener`.
///
/// Consumers normally hand this the `translation_unit` root, but any
/// subtree works.  The walk is synchronous and read-only; running it
/// twice over the same tree produces the identical notification
/// sequence.
///
/// In debug builds the tree's shape is checked once up front
/// ([`Node::shape_ok`]); a malformed tree is a fault of the producing
/// parser and aborts immediately.
pub fn walk<L: Listener + ?Sized>(listener: &mut L, root: &Node) {
    debug_assert!(
        root.shape_ok(),
        "parse tree violates its grammar production shapes"
    );
    walk_node(listener, root);
}

fn walk_node<L: Listener + ?Sized>(listener: &mut L, node: &Node) {
    listener.enter_each(node);
    dispatch_enter(listener, node);
    for child in node.children() {
        walk_node(listener, child);
    }
    dispatch_exit(listener, node);
    listener.exit_each(node);
}

fn dispatch_enter<L: Listener + ?Sized>(listener: &mut L, node: &Node) {
    match node.kind() {
        NodeKind::PrimaryExpression => listener.enter_primary_expression(node),
        NodeKind::PostfixExpression => listener.enter_postfix_expression(node),
        NodeKind::ArgumentExpressionList => listener.enter_argument_expression_list(node),
        NodeKind::UnaryExpression => listener.enter_unary_expression(node),
        NodeKind::CastExpression => listener.enter_cast_expression(node),
        NodeKind::MultiplicativeExpression => listener.enter_multiplicative_expression(node),
        NodeKind::AdditiveExpression => listener.enter_additive_expression(node),
        NodeKind::ShiftExpression => listener.enter_shift_expression(node),
        NodeKind::RelationalExpression => listener.enter_relational_expression(node),
        NodeKind::EqualityExpression => listener.enter_equality_expression(node),
        NodeKind::AndExpression => listener.enter_and_expression(node),
        NodeKind::ExclusiveOrExpression => listener.enter_exclusive_or_expression(node),
        NodeKind::InclusiveOrExpression => listener.enter_inclusive_or_expression(node),
        NodeKind::LogicalAndExpression => listener.enter_logical_and_expression(node),
        NodeKind::LogicalOrExpression => listener.enter_logical_or_expression(node),
        NodeKind::ConditionalExpression => listener.enter_conditional_expression(node),
        NodeKind::AssignmentExpression => listener.enter_assignment_expression(node),
        NodeKind::Expression => listener.enter_expression(node),
        NodeKind::ConstantExpression => listener.enter_constant_expression(node),
        NodeKind::Declaration => listener.enter_declaration(node),
        NodeKind::DeclarationSpecifiers => listener.enter_declaration_specifiers(node),
        NodeKind::DeclarationSpecifier => listener.enter_declaration_specifier(node),
        NodeKind::InitDeclaratorList => listener.enter_init_declarator_list(node),
        NodeKind::InitDeclarator => listener.enter_init_declarator(node),
        NodeKind::StorageClassSpecifier => listener.enter_storage_class_specifier(node),
        NodeKind::TypeSpecifier => listener.enter_type_specifier(node),
        NodeKind::StructOrUnionSpecifier => listener.enter_struct_or_union_specifier(node),
        NodeKind::StructOrUnion => listener.enter_struct_or_union(node),
        NodeKind::StructDeclarationList => listener.enter_struct_declaration_list(node),
        NodeKind::StructDeclaration => listener.enter_struct_declaration(node),
        NodeKind::SpecifierQualifierList => listener.enter_specifier_qualifier_list(node),
        NodeKind::StructDeclaratorList => listener.enter_struct_declarator_list(node),
        NodeKind::StructDeclarator => listener.enter_struct_declarator(node),
        NodeKind::EnumSpecifier => listener.enter_enum_specifier(node),
        NodeKind::EnumeratorList => listener.enter_enumerator_list(node),
        NodeKind::Enumerator => listener.enter_enumerator(node),
        NodeKind::TypeQualifier => listener.enter_type_qualifier(node),
        NodeKind::FunctionSpecifier => listener.enter_function_specifier(node),
        NodeKind::AlignmentSpecifier => listener.enter_alignment_specifier(node),
        NodeKind::Declarator => listener.enter_declarator(node),
        NodeKind::DirectDeclarator => listener.enter_direct_declarator(node),
        NodeKind::Pointer => listener.enter_pointer(node),
        NodeKind::TypeQualifierList => listener.enter_type_qualifier_list(node),
        NodeKind::ParameterTypeList => listener.enter_parameter_type_list(node),
        NodeKind::ParameterList => listener.enter_parameter_list(node),
        NodeKind::ParameterDeclaration => listener.enter_parameter_declaration(node),
        NodeKind::IdentifierList => listener.enter_identifier_list(node),
        NodeKind::TypeName => listener.enter_type_name(node),
        NodeKind::AbstractDeclarator => listener.enter_abstract_declarator(node),
        NodeKind::DirectAbstractDeclarator => listener.enter_direct_abstract_declarator(node),
        NodeKind::Initializer => listener.enter_initializer(node),
        NodeKind::InitializerList => listener.enter_initializer_list(node),
        NodeKind::Designation => listener.enter_designation(node),
        NodeKind::DesignatorList => listener.enter_designator_list(node),
        NodeKind::Designator => listener.enter_designator(node),
        NodeKind::Statement => listener.enter_statement(node),
        NodeKind::LabeledStatement => listener.enter_labeled_statement(node),
        NodeKind::CompoundStatement => listener.enter_compound_statement(node),
        NodeKind::BlockItemList => listener.enter_block_item_list(node),
        NodeKind::BlockItem => listener.enter_block_item(node),
        NodeKind::ExpressionStatement => listener.enter_expression_statement(node),
        NodeKind::SelectionStatement => listener.enter_selection_statement(node),
        NodeKind::IterationStatement => listener.enter_iteration_statement(node),
        NodeKind::JumpStatement => listener.enter_jump_statement(node),
        NodeKind::TranslationUnit => listener.enter_translation_unit(node),
        NodeKind::ExternalDeclaration => listener.enter_external_declaration(node),
        NodeKind::FunctionDefinition => listener.enter_function_definition(node),
        NodeKind::DeclarationList => listener.enter_declaration_list(node),
    }
}

fn dispatch_exit<L: Listener + ?Sized>(listener: &mut L, node: &Node) {
    match node.kind() {
        NodeKind::PrimaryExpression => listener.exit_primary_expression(node),
        NodeKind::PostfixExpression => listener.exit_postfix_expression(node),
        NodeKind::ArgumentExpressionList => listener.exit_argument_expression_list(node),
        NodeKind::UnaryExpression => listener.exit_unary_expression(node),
        NodeKind::CastExpression => listener.exit_cast_expression(node),
        NodeKind::MultiplicativeExpression => listener.exit_multiplicative_expression(node),
        NodeKind::AdditiveExpression => listener.exit_additive_expression(node),
        NodeKind::ShiftExpression => listener.exit_shift_expression(node),
        NodeKind::RelationalExpression => listener.exit_relational_expression(node),
        NodeKind::EqualityExpression => listener.exit_equality_expression(node),
        NodeKind::AndExpression => listener.exit_and_expression(node),
        NodeKind::ExclusiveOrExpression => listener.exit_exclusive_or_expression(node),
        NodeKind::InclusiveOrExpression => listener.exit_inclusive_or_expression(node),
        NodeKind::LogicalAndExpression => listener.exit_logical_and_expression(node),
        NodeKind::LogicalOrExpression => listener.exit_logical_or_expression(node),
        NodeKind::ConditionalExpression => listener.exit_conditional_expression(node),
        NodeKind::AssignmentExpression => listener.exit_assignment_expression(node),
        NodeKind::Expression => listener.exit_expression(node),
        NodeKind::ConstantExpression => listener.exit_constant_expression(node),
        NodeKind::Declaration => listener.exit_declaration(node),
        NodeKind::DeclarationSpecifiers => listener.exit_declaration_specifiers(node),
        NodeKind::DeclarationSpecifier => listener.exit_declaration_specifier(node),
        NodeKind::InitDeclaratorList => listener.exit_init_declarator_list(node),
        NodeKind::InitDeclarator => listener.exit_init_declarator(node),
        NodeKind::StorageClassSpecifier => listener.exit_storage_class_specifier(node),
        NodeKind::TypeSpecifier => listener.exit_type_specifier(node),
        NodeKind::StructOrUnionSpecifier => listener.exit_struct_or_union_specifier(node),
        NodeKind::StructOrUnion => listener.exit_struct_or_union(node),
        NodeKind::StructDeclarationList => listener.exit_struct_declaration_list(node),
        NodeKind::StructDeclaration => listener.exit_struct_declaration(node),
        NodeKind::SpecifierQualifierList => listener.exit_specifier_qualifier_list(node),
        NodeKind::StructDeclaratorList => listener.exit_struct_declarator_list(node),
        NodeKind::StructDeclarator => listener.exit_struct_declarator(node),
        NodeKind::EnumSpecifier => listener.exit_enum_specifier(node),
        NodeKind::EnumeratorList => listener.exit_enumerator_list(node),
        NodeKind::Enumerator => listener.exit_enumerator(node),
        NodeKind::TypeQualifier => listener.exit_type_qualifier(node),
        NodeKind::FunctionSpecifier => listener.exit_function_specifier(node),
        NodeKind::AlignmentSpecifier => listener.exit_alignment_specifier(node),
        NodeKind::Declarator => listener.exit_declarator(node),
        NodeKind::DirectDeclarator => listener.exit_direct_declarator(node),
        NodeKind::Pointer => listener.exit_pointer(node),
        NodeKind::TypeQualifierList => listener.exit_type_qualifier_list(node),
        NodeKind::ParameterTypeList => listener.exit_parameter_type_list(node),
        NodeKind::ParameterList => listener.exit_parameter_list(node),
        NodeKind::ParameterDeclaration => listener.exit_parameter_declaration(node),
        NodeKind::IdentifierList => listener.exit_identifier_list(node),
        NodeKind::TypeName => listener.exit_type_name(node),
        NodeKind::AbstractDeclarator => listener.exit_abstract_declarator(node),
        NodeKind::DirectAbstractDeclarator => listener.exit_direct_abstract_declarator(node),
        NodeKind::Initializer => listener.exit_initializer(node),
        NodeKind::InitializerList => listener.exit_initializer_list(node),
        NodeKind::Designation => listener.exit_designation(node),
        NodeKind::DesignatorList => listener.exit_designator_list(node),
        NodeKind::Designator => listener.exit_designator(node),
        NodeKind::Statement => listener.exit_statement(node),
        NodeKind::LabeledStatement => listener.exit_labeled_statement(node),
        NodeKind::CompoundStatement => listener.exit_compound_statement(node),
        NodeKind::BlockItemList => listener.exit_block_item_list(node),
        NodeKind::BlockItem => listener.exit_block_item(node),
        NodeKind::ExpressionStatement => listener.exit_expression_statement(node),
        NodeKind::SelectionStatement => listener.exit_selection_statement(node),
        NodeKind::IterationStatement => listener.exit_iteration_statement(node),
        NodeKind::JumpStatement => listener.exit_jump_statement(node),
        NodeKind::TranslationUnit => listener.exit_translation_unit(node),
        NodeKind::ExternalDeclaration => listener.exit_external_declaration(node),
        NodeKind::FunctionDefinition => listener.exit_function_definition(node),
        NodeKind::DeclarationList => listener.exit_declaration_list(node),
    }
}
