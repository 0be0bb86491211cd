//! Visitor protocol
//!
//! The pull half of the traversal contract.  A [`Visitor`] computes one
//! value per node, of a caller-chosen [`Output`](Visitor::Output) type.
//! Unlike the listener the visitor drives itself: each `visit_*` method
//! decides whether to recurse, may skip children entirely, and may visit
//! them in any order.
//!
//! Every `visit_*` method defaults to
//! [`visit_children`](Visitor::visit_children), which folds
//! [`visit`](Visitor::visit) over the children with
//! [`aggregate_result`](Visitor::aggregate_result).  With the default
//! aggregate this returns the last child's result, or
//! [`default_result`](Visitor::default_result) for a node with no
//! children.  A visitor that overrides nothing therefore threads a value
//! up through the grammar's delegation chains unchanged:
//!
//! ```
//! use ctree::traverse::Visitor;
//! use ctree::tree::Node;
//!
//! /// Sums every integer constant in the tree.
//! struct SumConstants;
//!
//! impl Visitor for SumConstants {
//!     type Output = i64;
//!
//!     fn default_result(&mut self) -> i64 {
//!         0
//!     }
//!
//!     fn aggregate_result(&mut self, aggregate: i64, next: i64) -> i64 {
//!         aggregate + next
//!     }
//!
//!     fn visit_primary_expression(&mut self, node: &Node) -> i64 {
//!         match node.token().and_then(|t| t.parse().ok()) {
//!             Some(value) => value,
//!             None => self.visit_children(node),
//!         }
//!     }
//! }
//! ```
//!
//! Consumer-defined failure travels through `Output` itself: an
//! implementation with `type Output = Result<..., ...>` short-circuits
//! wherever it likes.  The protocol neither generates nor suppresses
//! such errors.

use crate::tree::{Node, NodeKind};

/// Pull-style traversal, generic over the result type.
///
/// [`visit`](Visitor::visit) is the dispatch operation: it maps a node
/// to its kind-specific method by tag, exhaustively over the closed
/// [`NodeKind`] taxonomy.  Call it on the root to run the visitor.
pub trait Visitor {
    /// Result type produced for every node.
    type Output;

    /// Neutral value: the result of visiting a node with no children.
    fn default_result(&mut self) -> Self::Output;

    /// Fold one child result into the running aggregate.  The default
    /// keeps the newest result, which makes
    /// [`visit_children`](Visitor::visit_children) return the last
    /// child's value.
    fn aggregate_result(&mut self, _aggregate: Self::Output, next: Self::Output) -> Self::Output {
        next
    }

    /// Dispatch on the node's kind tag.
    fn visit(&mut self, node: &Node) -> Self::Output {
        match node.kind() {
            NodeKind::PrimaryExpression => self.visit_primary_expression(node),
            NodeKind::PostfixExpression => self.visit_postfix_expression(node),
            NodeKind::ArgumentExpressionList => self.visit_argument_expression_list(node),
            NodeKind::UnaryExpression => self.visit_unary_expression(node),
            NodeKind::CastExpression => self.visit_cast_expression(node),
            NodeKind::MultiplicativeExpression => self.visit_multiplicative_expression(node),
            NodeKind::AdditiveExpression => self.visit_additive_expression(node),
            NodeKind::ShiftExpression => self.visit_shift_expression(node),
            NodeKind::RelationalExpression => self.visit_relational_expression(node),
            NodeKind::EqualityExpression => self.visit_equality_expression(node),
            NodeKind::AndExpression => self.visit_and_expression(node),
            NodeKind::ExclusiveOrExpression => self.visit_exclusive_or_expression(node),
            NodeKind::InclusiveOrExpression => self.visit_inclusive_or_expression(node),
            NodeKind::LogicalAndExpression => self.visit_logical_and_expression(node),
            NodeKind::LogicalOrExpression => self.visit_logical_or_expression(node),
            NodeKind::ConditionalExpression => self.visit_conditional_expression(node),
            NodeKind::AssignmentExpression => self.visit_assignment_expression(node),
            NodeKind::Expression => self.visit_expression(node),
            NodeKind::ConstantExpression => self.visit_constant_expression(node),
            NodeKind::Declaration => self.visit_declaration(node),
            NodeKind::DeclarationSpecifiers => self.visit_declaration_specifiers(node),
            NodeKind::DeclarationSpecifier => self.visit_declaration_specifier(node),
            NodeKind::InitDeclaratorList => self.visit_init_declarator_list(node),
            NodeKind::InitDeclarator => self.visit_init_declarator(node),
            NodeKind::StorageClassSpecifier => self.visit_storage_class_specifier(node),
            NodeKind::TypeSpecifier => self.visit_type_specifier(node),
            NodeKind::StructOrUnionSpecifier => self.visit_struct_or_union_specifier(node),
            NodeKind::StructOrUnion => self.visit_struct_or_union(node),
            NodeKind::StructDeclarationList => self.visit_struct_declaration_list(node),
            NodeKind::StructDeclaration => self.visit_struct_declaration(node),
            NodeKind::SpecifierQualifierList => self.visit_specifier_qualifier_list(node),
            NodeKind::StructDeclaratorList => self.visit_struct_declarator_list(node),
            NodeKind::StructDeclarator => self.visit_struct_declarator(node),
            NodeKind::EnumSpecifier => self.visit_enum_specifier(node),
            NodeKind::EnumeratorList => self.visit_enumerator_list(node),
            NodeKind::Enumerator => self.visit_enumerator(node),
            NodeKind::TypeQualifier => self.visit_type_qualifier(node),
            NodeKind::FunctionSpecifier => self.visit_function_specifier(node),
            NodeKind::AlignmentSpecifier => self.visit_alignment_specifier(node),
            NodeKind::Declarator => self.visit_declarator(node),
            NodeKind::DirectDeclarator => self.visit_direct_declarator(node),
            NodeKind::Pointer => self.visit_pointer(node),
            NodeKind::TypeQualifierList => self.visit_type_qualifier_list(node),
            NodeKind::ParameterTypeList => self.visit_parameter_type_list(node),
            NodeKind::ParameterList => self.visit_parameter_list(node),
            NodeKind::ParameterDeclaration => self.visit_parameter_declaration(node),
            NodeKind::IdentifierList => self.visit_identifier_list(node),
            NodeKind::TypeName => self.visit_type_name(node),
            NodeKind::AbstractDeclarator => self.visit_abstract_declarator(node),
            NodeKind::DirectAbstractDeclarator => self.visit_direct_abstract_declarator(node),
            NodeKind::Initializer => self.visit_initializer(node),
            NodeKind::InitializerList => self.visit_initializer_list(node),
            NodeKind::Designation => self.visit_designation(node),
            NodeKind::DesignatorList => self.visit_designator_list(node),
            NodeKind::Designator => self.visit_designator(node),
            NodeKind::Statement => self.visit_statement(node),
            NodeKind::LabeledStatement => self.visit_labeled_statement(node),
            NodeKind::CompoundStatement => self.visit_compound_statement(node),
            NodeKind::BlockItemList => self.visit_block_item_list(node),
            NodeKind::BlockItem => self.visit_block_item(node),
            NodeKind::ExpressionStatement => self.visit_expression_statement(node),
            NodeKind::SelectionStatement => self.visit_selection_statement(node),
            NodeKind::IterationStatement => self.visit_iteration_statement(node),
            NodeKind::JumpStatement => self.visit_jump_statement(node),
            NodeKind::TranslationUnit => self.visit_translation_unit(node),
            NodeKind::ExternalDeclaration => self.visit_external_declaration(node),
            NodeKind::FunctionDefinition => self.visit_function_definition(node),
            NodeKind::DeclarationList => self.visit_declaration_list(node),
        }
    }

    /// Visit all children in structural order and aggregate their
    /// results, starting from [`default_result`](Visitor::default_result).
    fn visit_children(&mut self, node: &Node) -> Self::Output {
        let mut result = self.default_result();
        for child in node.children() {
            let next = self.visit(child);
            result = self.aggregate_result(result, next);
        }
        result
    }

    // Expressions
    fn visit_primary_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_postfix_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_argument_expression_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_unary_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_cast_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_multiplicative_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_additive_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_shift_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_relational_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_equality_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_and_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_exclusive_or_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_inclusive_or_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_logical_and_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_logical_or_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_conditional_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_assignment_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_constant_expression(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }

    // Declarations
    fn visit_declaration(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_declaration_specifiers(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_declaration_specifier(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_init_declarator_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_init_declarator(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_storage_class_specifier(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_type_specifier(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_struct_or_union_specifier(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_struct_or_union(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_struct_declaration_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_struct_declaration(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_specifier_qualifier_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_struct_declarator_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_struct_declarator(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_enum_specifier(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_enumerator_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_enumerator(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_type_qualifier(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_function_specifier(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_alignment_specifier(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }

    // Declarators
    fn visit_declarator(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_direct_declarator(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_pointer(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_type_qualifier_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_parameter_type_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_parameter_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_parameter_declaration(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_identifier_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_type_name(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_abstract_declarator(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_direct_abstract_declarator(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_initializer(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_initializer_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_designation(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_designator_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_designator(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }

    // Statements
    fn visit_statement(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_labeled_statement(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_compound_statement(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_block_item_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_block_item(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_expression_statement(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_selection_statement(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_iteration_statement(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_jump_statement(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }

    // Top level
    fn visit_translation_unit(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_external_declaration(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_function_definition(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
    fn visit_declaration_list(&mut self, node: &Node) -> Self::Output {
        self.visit_children(node)
    }
}
