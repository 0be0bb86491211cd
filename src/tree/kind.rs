//! Node kind taxonomy
//!
//! One variant per grammar rule of the supported C subset.  The enum is
//! closed on purpose: every traversal protocol dispatches on it with an
//! exhaustive `match`, so adding a rule here refuses to compile until
//! every dispatch site handles it.
//!
//! The two pure-operator rules of the grammar (`unary_operator`,
//! `assignment_operator`) have no variants; operator lexemes ride on the
//! owning expression node as token payload instead.

use std::fmt;

/// Grammar rule a [`Node`](crate::tree::Node) instantiates.
///
/// Grouped the way the grammar groups them: the expression precedence
/// chain, the declaration/declarator forms, the statement categories,
/// and the top-level forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Expressions, in precedence order
    PrimaryExpression,
    PostfixExpression,
    ArgumentExpressionList,
    UnaryExpression,
    CastExpression,
    MultiplicativeExpression,
    AdditiveExpression,
    ShiftExpression,
    RelationalExpression,
    EqualityExpression,
    AndExpression,
    ExclusiveOrExpression,
    InclusiveOrExpression,
    LogicalAndExpression,
    LogicalOrExpression,
    ConditionalExpression,
    AssignmentExpression,
    Expression,
    ConstantExpression,

    // Declarations
    Declaration,
    DeclarationSpecifiers,
    DeclarationSpecifier,
    InitDeclaratorList,
    InitDeclarator,
    StorageClassSpecifier,
    TypeSpecifier,
    StructOrUnionSpecifier,
    StructOrUnion,
    StructDeclarationList,
    StructDeclaration,
    SpecifierQualifierList,
    StructDeclaratorList,
    StructDeclarator,
    EnumSpecifier,
    EnumeratorList,
    Enumerator,
    TypeQualifier,
    FunctionSpecifier,
    AlignmentSpecifier,

    // Declarators
    Declarator,
    DirectDeclarator,
    Pointer,
    TypeQualifierList,
    ParameterTypeList,
    ParameterList,
    ParameterDeclaration,
    IdentifierList,
    TypeName,
    AbstractDeclarator,
    DirectAbstractDeclarator,
    Initializer,
    InitializerList,
    Designation,
    DesignatorList,
    Designator,

    // Statements
    Statement,
    LabeledStatement,
    CompoundStatement,
    BlockItemList,
    BlockItem,
    ExpressionStatement,
    SelectionStatement,
    IterationStatement,
    JumpStatement,

    // Top level
    TranslationUnit,
    ExternalDeclaration,
    FunctionDefinition,
    DeclarationList,
}

impl NodeKind {
    /// The grammar rule name, as spelled in the grammar.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::PrimaryExpression => "primary_expression",
            NodeKind::PostfixExpression => "postfix_expression",
            NodeKind::ArgumentExpressionList => "argument_expression_list",
            NodeKind::UnaryExpression => "unary_expression",
            NodeKind::CastExpression => "cast_expression",
            NodeKind::MultiplicativeExpression => "multiplicative_expression",
            NodeKind::AdditiveExpression => "additive_expression",
            NodeKind::ShiftExpression => "shift_expression",
            NodeKind::RelationalExpression => "relational_expression",
            NodeKind::EqualityExpression => "equality_expression",
            NodeKind::AndExpression => "and_expression",
            NodeKind::ExclusiveOrExpression => "exclusive_or_expression",
            NodeKind::InclusiveOrExpression => "inclusive_or_expression",
            NodeKind::LogicalAndExpression => "logical_and_expression",
            NodeKind::LogicalOrExpression => "logical_or_expression",
            NodeKind::ConditionalExpression => "conditional_expression",
            NodeKind::AssignmentExpression => "assignment_expression",
            NodeKind::Expression => "expression",
            NodeKind::ConstantExpression => "constant_expression",
            NodeKind::Declaration => "declaration",
            NodeKind::DeclarationSpecifiers => "declaration_specifiers",
            NodeKind::DeclarationSpecifier => "declaration_specifier",
            NodeKind::InitDeclaratorList => "init_declarator_list",
            NodeKind::InitDeclarator => "init_declarator",
            NodeKind::StorageClassSpecifier => "storage_class_specifier",
            NodeKind::TypeSpecifier => "type_specifier",
            NodeKind::StructOrUnionSpecifier => "struct_or_union_specifier",
            NodeKind::StructOrUnion => "struct_or_union",
            NodeKind::StructDeclarationList => "struct_declaration_list",
            NodeKind::StructDeclaration => "struct_declaration",
            NodeKind::SpecifierQualifierList => "specifier_qualifier_list",
            NodeKind::StructDeclaratorList => "struct_declarator_list",
            NodeKind::StructDeclarator => "struct_declarator",
            NodeKind::EnumSpecifier => "enum_specifier",
            NodeKind::EnumeratorList => "enumerator_list",
            NodeKind::Enumerator => "enumerator",
            NodeKind::TypeQualifier => "type_qualifier",
            NodeKind::FunctionSpecifier => "function_specifier",
            NodeKind::AlignmentSpecifier => "alignment_specifier",
            NodeKind::Declarator => "declarator",
            NodeKind::DirectDeclarator => "direct_declarator",
            NodeKind::Pointer => "pointer",
            NodeKind::TypeQualifierList => "type_qualifier_list",
            NodeKind::ParameterTypeList => "parameter_type_list",
            NodeKind::ParameterList => "parameter_list",
            NodeKind::ParameterDeclaration => "parameter_declaration",
            NodeKind::IdentifierList => "identifier_list",
            NodeKind::TypeName => "type_name",
            NodeKind::AbstractDeclarator => "abstract_declarator",
            NodeKind::DirectAbstractDeclarator => "direct_abstract_declarator",
            NodeKind::Initializer => "initializer",
            NodeKind::InitializerList => "initializer_list",
            NodeKind::Designation => "designation",
            NodeKind::DesignatorList => "designator_list",
            NodeKind::Designator => "designator",
            NodeKind::Statement => "statement",
            NodeKind::LabeledStatement => "labeled_statement",
            NodeKind::CompoundStatement => "compound_statement",
            NodeKind::BlockItemList => "block_item_list",
            NodeKind::BlockItem => "block_item",
            NodeKind::ExpressionStatement => "expression_statement",
            NodeKind::SelectionStatement => "selection_statement",
            NodeKind::IterationStatement => "iteration_statement",
            NodeKind::JumpStatement => "jump_statement",
            NodeKind::TranslationUnit => "translation_unit",
            NodeKind::ExternalDeclaration => "external_declaration",
            NodeKind::FunctionDefinition => "function_definition",
            NodeKind::DeclarationList => "declaration_list",
        }
    }

    /// Legal child-count range `(min, max)` for this kind, derived from
    /// the rule's expansions.  `usize::MAX` marks an unbounded list.
    ///
    /// The bounds are necessary, not sufficient: they catch trees whose
    /// child count fits no expansion of the rule, but they do not check
    /// child kinds.  `conditional_expression` additionally excludes the
    /// two-child case, see [`Node::shape_ok`](crate::tree::Node::shape_ok).
    pub fn child_bounds(self) -> (usize, usize) {
        match self {
            // IDENT / constant / string leaf, or a parenthesized expression
            NodeKind::PrimaryExpression => (0, 1),
            // operand alone, or operand plus subscript / argument list
            NodeKind::PostfixExpression => (1, 2),
            // delegation, or operand pair with the operator as payload
            NodeKind::CastExpression
            | NodeKind::MultiplicativeExpression
            | NodeKind::AdditiveExpression
            | NodeKind::ShiftExpression
            | NodeKind::RelationalExpression
            | NodeKind::EqualityExpression
            | NodeKind::AndExpression
            | NodeKind::ExclusiveOrExpression
            | NodeKind::InclusiveOrExpression
            | NodeKind::LogicalAndExpression
            | NodeKind::LogicalOrExpression
            | NodeKind::AssignmentExpression
            | NodeKind::Expression => (1, 2),
            // delegation, or condition / then / else
            NodeKind::ConditionalExpression => (1, 3),
            // operand or type_name, operator as payload
            NodeKind::UnaryExpression | NodeKind::ConstantExpression => (1, 1),
            NodeKind::ArgumentExpressionList => (1, usize::MAX),

            NodeKind::Declaration => (1, 2),
            NodeKind::DeclarationSpecifiers => (1, usize::MAX),
            NodeKind::DeclarationSpecifier => (1, 1),
            NodeKind::InitDeclaratorList => (1, usize::MAX),
            NodeKind::InitDeclarator => (1, 2),
            // keyword leaves
            NodeKind::StorageClassSpecifier
            | NodeKind::StructOrUnion
            | NodeKind::TypeQualifier
            | NodeKind::FunctionSpecifier => (0, 0),
            // builtin keyword or typedef name leaf, or struct/union/enum specifier
            NodeKind::TypeSpecifier => (0, 1),
            NodeKind::StructOrUnionSpecifier => (1, 2),
            NodeKind::StructDeclarationList => (1, usize::MAX),
            NodeKind::StructDeclaration => (1, 2),
            NodeKind::SpecifierQualifierList => (1, usize::MAX),
            NodeKind::StructDeclaratorList => (1, usize::MAX),
            NodeKind::StructDeclarator => (1, 2),
            // `enum tag` leaf, or a braced enumerator_list
            NodeKind::EnumSpecifier => (0, 1),
            NodeKind::EnumeratorList => (1, usize::MAX),
            NodeKind::Enumerator => (0, 1),
            NodeKind::AlignmentSpecifier => (1, 1),
            NodeKind::Declarator => (1, 2),
            NodeKind::DirectDeclarator => (0, 3),
            NodeKind::Pointer => (0, 2),
            NodeKind::TypeQualifierList => (1, usize::MAX),
            NodeKind::ParameterTypeList => (1, 1),
            NodeKind::ParameterList => (1, usize::MAX),
            NodeKind::ParameterDeclaration => (1, 2),
            // nested: one IDENT payload plus an optional preceding list
            NodeKind::IdentifierList => (0, 1),
            NodeKind::TypeName => (1, 2),
            NodeKind::AbstractDeclarator => (1, 2),
            NodeKind::DirectAbstractDeclarator => (0, 3),
            NodeKind::Initializer => (1, 1),
            NodeKind::InitializerList => (1, usize::MAX),
            NodeKind::Designation => (1, 1),
            NodeKind::DesignatorList => (1, usize::MAX),
            // `[ constant_expression ]`, or `.IDENT` with the name as payload
            NodeKind::Designator => (0, 1),

            NodeKind::Statement => (1, 1),
            NodeKind::LabeledStatement => (1, 2),
            // `{}` owns nothing at all
            NodeKind::CompoundStatement => (0, 1),
            NodeKind::BlockItemList => (1, usize::MAX),
            NodeKind::BlockItem => (1, 1),
            NodeKind::ExpressionStatement => (0, 1),
            NodeKind::SelectionStatement => (2, 3),
            NodeKind::IterationStatement => (1, 4),
            NodeKind::JumpStatement => (0, 1),

            NodeKind::TranslationUnit => (1, usize::MAX),
            NodeKind::ExternalDeclaration => (1, 1),
            NodeKind::FunctionDefinition => (2, 4),
            NodeKind::DeclarationList => (1, usize::MAX),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
