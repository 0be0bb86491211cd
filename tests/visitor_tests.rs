// Integration tests for the visitor protocol

mod common;

use common::{
    empty_compound, int_x_equals_one_plus_two, main_returning_zero, scalar_expression,
};
use ctree::traverse::{walk, Listener, Visitor};
use ctree::tree::{Node, NodeKind};

/// Sums every integer constant in the tree.
struct SumConstants;

impl Visitor for SumConstants {
    type Output = i64;

    fn default_result(&mut self) -> i64 {
        0
    }

    fn aggregate_result(&mut self, aggregate: i64, next: i64) -> i64 {
        aggregate + next
    }

    fn visit_primary_expression(&mut self, node: &Node) -> i64 {
        match node.token().and_then(|t| t.parse().ok()) {
            Some(value) => value,
            None => self.visit_children(node),
        }
    }
}

#[test]
fn test_sum_of_integer_constants() {
    assert_eq!(SumConstants.visit(&int_x_equals_one_plus_two()), 3);
}

#[test]
fn test_visiting_a_childless_node_yields_the_neutral_value() {
    assert_eq!(SumConstants.visit(&empty_compound()), 0);
}

#[test]
fn test_default_methods_thread_the_last_child_result_up() {
    // Only the leaf method is overridden; every delegation level in
    // between falls through visit_children, which with the default
    // aggregate hands the last (here: only) child's result up.
    struct LeafToken;

    impl Visitor for LeafToken {
        type Output = Option<String>;

        fn default_result(&mut self) -> Option<String> {
            None
        }

        fn visit_primary_expression(&mut self, node: &Node) -> Option<String> {
            node.token().map(str::to_string)
        }
    }

    let chain = scalar_expression("42");
    assert_eq!(LeafToken.visit(&chain), Some("42".to_string()));
}

#[test]
fn test_visitor_preorder_agrees_with_listener_enter_order() {
    // A visitor that collects kinds parent-first must see the same
    // sequence a listener records through its enter notifications.
    struct Preorder;

    impl Visitor for Preorder {
        type Output = Vec<NodeKind>;

        fn default_result(&mut self) -> Vec<NodeKind> {
            Vec::new()
        }

        fn aggregate_result(
            &mut self,
            mut aggregate: Vec<NodeKind>,
            next: Vec<NodeKind>,
        ) -> Vec<NodeKind> {
            aggregate.extend(next);
            aggregate
        }

        fn visit(&mut self, node: &Node) -> Vec<NodeKind> {
            let mut kinds = vec![node.kind()];
            kinds.extend(self.visit_children(node));
            kinds
        }
    }

    #[derive(Default)]
    struct Enters(Vec<NodeKind>);

    impl Listener for Enters {
        fn enter_each(&mut self, node: &Node) {
            self.0.push(node.kind());
        }
    }

    let tree = int_x_equals_one_plus_two();
    let mut listener = Enters::default();
    walk(&mut listener, &tree);

    let visited = Preorder.visit(&tree);
    assert_eq!(visited, listener.0);
    assert_eq!(visited, tree.iter().map(Node::kind).collect::<Vec<_>>());
}

#[test]
fn test_pruning_skips_unvisited_subtrees() {
    // Counts declared names, but refuses to descend into function
    // definitions, so `main` is never seen.
    struct TopLevelDeclarators;

    impl Visitor for TopLevelDeclarators {
        type Output = usize;

        fn default_result(&mut self) -> usize {
            0
        }

        fn aggregate_result(&mut self, aggregate: usize, next: usize) -> usize {
            aggregate + next
        }

        fn visit_direct_declarator(&mut self, node: &Node) -> usize {
            let named = usize::from(node.token().is_some_and(|t| t != "(" && t != ")"));
            named + self.visit_children(node)
        }

        fn visit_function_definition(&mut self, _node: &Node) -> usize {
            self.default_result()
        }
    }

    // one translation unit holding both trees' external declarations
    let mixed = Node::new(NodeKind::TranslationUnit, common::sp())
        .with_children(main_returning_zero().children().to_vec())
        .with_children(int_x_equals_one_plus_two().children().to_vec());
    assert!(mixed.shape_ok());

    // only `x` survives; `main` sits inside the pruned function
    assert_eq!(TopLevelDeclarators.visit(&mixed), 1);
}

#[test]
fn test_visit_is_deterministic() {
    let tree = main_returning_zero();
    assert_eq!(SumConstants.visit(&tree), SumConstants.visit(&tree));
    assert_eq!(SumConstants.visit(&tree), 0);
}

#[test]
fn test_consumer_errors_propagate_through_the_result_type() {
    // The protocol has no error channel of its own; a visitor that can
    // fail makes Output a Result and short-circuits in the aggregate.
    struct ConstantFolder;

    impl Visitor for ConstantFolder {
        type Output = Result<i64, String>;

        fn default_result(&mut self) -> Result<i64, String> {
            Ok(0)
        }

        fn aggregate_result(
            &mut self,
            aggregate: Result<i64, String>,
            next: Result<i64, String>,
        ) -> Result<i64, String> {
            Ok(aggregate? + next?)
        }

        fn visit_primary_expression(&mut self, node: &Node) -> Result<i64, String> {
            match node.token() {
                Some(text) => text
                    .parse()
                    .map_err(|_| format!("not a constant: {}", text)),
                None => self.visit_children(node),
            }
        }
    }

    assert_eq!(ConstantFolder.visit(&int_x_equals_one_plus_two()), Ok(3));
    assert_eq!(
        ConstantFolder.visit(&scalar_expression("y")),
        Err("not a constant: y".to_string())
    );
}
