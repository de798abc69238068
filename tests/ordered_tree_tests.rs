#![cfg(feature = "tree")]
//! Unit tests for OrderedTree.

use ordered_tree::tree::{OrderedTree, TreeError};
use rstest::{fixture, rstest};

#[fixture]
fn scenario_tree() -> OrderedTree<i32, String> {
    [5, 3, 8, 1, 4, 7, 9]
        .into_iter()
        .map(|key| (key, format!("value-{key}")))
        .collect()
}

fn keys_of<V>(tree: &OrderedTree<i32, V>) -> Vec<i32> {
    tree.keys().copied().collect()
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: OrderedTree<i32, String> = OrderedTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[rstest]
fn test_default_creates_empty_tree() {
    let tree: OrderedTree<i32, String> = OrderedTree::default();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[rstest]
fn test_singleton_creates_tree_with_one_entry() {
    let tree = OrderedTree::singleton(42, "answer".to_string());
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root(), Ok((&42, &"answer".to_string())));
}

#[rstest]
fn test_from_pair_matches_singleton() {
    let tree = OrderedTree::from((7, 'x'));
    assert_eq!(tree, OrderedTree::singleton(7, 'x'));
}

// =============================================================================
// Empty Tree Preconditions
// =============================================================================

#[rstest]
fn test_root_on_empty_tree_is_error() {
    let tree: OrderedTree<i32, i32> = OrderedTree::new();
    assert_eq!(tree.root(), Err(TreeError::EmptyTree { operation: "root" }));
}

#[rstest]
fn test_min_max_on_empty_tree_are_errors() {
    let tree: OrderedTree<i32, i32> = OrderedTree::new();
    assert_eq!(tree.min(), Err(TreeError::EmptyTree { operation: "min" }));
    assert_eq!(tree.max(), Err(TreeError::EmptyTree { operation: "max" }));
}

#[rstest]
fn test_find_absent_key_is_error() {
    let mut tree = OrderedTree::singleton(1, 1);
    assert_eq!(tree.find(&2), Err(TreeError::KeyNotFound));
    assert_eq!(tree.find_mut(&2), Err(TreeError::KeyNotFound));
    assert_eq!(tree.get(&2), None);
}

#[rstest]
#[should_panic(expected = "key not found")]
fn test_index_absent_key_panics() {
    let tree = OrderedTree::singleton(1, 1);
    let _ = tree[&2];
}

#[rstest]
fn test_index_present_key() {
    let tree = OrderedTree::singleton("key".to_string(), 10);
    assert_eq!(tree["key"], 10);
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[rstest]
fn test_scenario_min_max_and_order(scenario_tree: OrderedTree<i32, String>) {
    assert_eq!(scenario_tree.min().map(|(key, _)| *key), Ok(1));
    assert_eq!(scenario_tree.max().map(|(key, _)| *key), Ok(9));
    assert_eq!(keys_of(&scenario_tree), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(scenario_tree.len(), 7);
}

#[rstest]
fn test_scenario_erase_root_with_two_children(mut scenario_tree: OrderedTree<i32, String>) {
    assert_eq!(scenario_tree.erase(&5), Some("value-5".to_string()));

    assert_eq!(keys_of(&scenario_tree), vec![1, 3, 4, 7, 8, 9]);
    assert_eq!(scenario_tree.len(), 6);
    assert!(!scenario_tree.contains_key(&5));
    assert_eq!(
        scenario_tree.root(),
        Ok((&7, &"value-7".to_string()))
    );
}

#[rstest]
fn test_scenario_duplicate_insert_keeps_first_value() {
    let mut tree = OrderedTree::new();
    assert!(tree.insert(2, "first"));
    let size_after_first = tree.len();

    assert!(!tree.insert(2, "second"));

    assert_eq!(tree.find(&2), Ok(&"first"));
    assert_eq!(tree.len(), size_after_first);
}

// =============================================================================
// Insert Tests
// =============================================================================

#[rstest]
fn test_insert_pair_moves_entry() {
    let mut tree = OrderedTree::new();
    assert!(tree.insert_pair((1, vec![1, 2, 3])));
    assert_eq!(tree.find(&1), Ok(&vec![1, 2, 3]));
}

#[rstest]
fn test_insert_cloned_leaves_source_intact() {
    let pair = (1, "one".to_string());
    let mut tree = OrderedTree::new();

    assert!(tree.insert_cloned(&pair));
    assert!(!tree.insert_cloned(&pair));

    assert_eq!(pair, (1, "one".to_string()));
    assert_eq!(tree.len(), 1);
}

#[rstest]
fn test_insert_returns_whether_created(mut scenario_tree: OrderedTree<i32, String>) {
    assert!(scenario_tree.insert(6, "six".to_string()));
    assert!(!scenario_tree.insert(6, "SIX".to_string()));
    assert_eq!(scenario_tree.len(), 8);
    assert_eq!(scenario_tree.get(&6), Some(&"six".to_string()));
}

#[rstest]
fn test_extend_skips_duplicates() {
    let mut tree: OrderedTree<i32, &str> = [(1, "one")].into_iter().collect();
    tree.extend([(1, "uno"), (2, "two")]);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.find(&1), Ok(&"one"));
}

#[rstest]
fn test_find_mut_updates_value(mut scenario_tree: OrderedTree<i32, String>) {
    scenario_tree
        .find_mut(&4)
        .expect("key 4 is present")
        .push_str("-updated");
    assert_eq!(scenario_tree.find(&4), Ok(&"value-4-updated".to_string()));
}

// =============================================================================
// Erase Tests
// =============================================================================

#[rstest]
#[case(1)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(7)]
#[case(8)]
#[case(9)]
fn test_erase_each_key_keeps_others(
    mut scenario_tree: OrderedTree<i32, String>,
    #[case] key: i32,
) {
    assert_eq!(scenario_tree.erase(&key), Some(format!("value-{key}")));

    let expected: Vec<i32> = [1, 3, 4, 5, 7, 8, 9]
        .into_iter()
        .filter(|&other| other != key)
        .collect();
    assert_eq!(keys_of(&scenario_tree), expected);
    for other in expected {
        assert_eq!(scenario_tree.find(&other), Ok(&format!("value-{other}")));
    }
}

#[rstest]
fn test_erase_absent_key_is_noop(mut scenario_tree: OrderedTree<i32, String>) {
    let before = scenario_tree.clone();
    assert_eq!(scenario_tree.erase(&6), None);
    assert_eq!(scenario_tree, before);
    assert_eq!(scenario_tree.len(), 7);
}

#[rstest]
fn test_erase_on_empty_tree_is_noop() {
    let mut tree: OrderedTree<i32, i32> = OrderedTree::new();
    assert_eq!(tree.erase(&1), None);
    assert!(tree.is_empty());
}

#[rstest]
fn test_erase_everything_empties_tree(mut scenario_tree: OrderedTree<i32, String>) {
    for key in [5, 7, 8, 3, 9, 1, 4] {
        assert!(scenario_tree.erase(&key).is_some());
    }
    assert!(scenario_tree.is_empty());
    assert!(scenario_tree.root().is_err());
}

#[rstest]
fn test_erase_with_borrowed_key() {
    let mut tree: OrderedTree<String, i32> = [("b".to_string(), 2), ("a".to_string(), 1)]
        .into_iter()
        .collect();
    assert_eq!(tree.erase("b"), Some(2));
    assert!(!tree.contains_key("b"));
}

// =============================================================================
// Clear Tests
// =============================================================================

#[rstest]
fn test_clear_removes_everything(mut scenario_tree: OrderedTree<i32, String>) {
    scenario_tree.clear();
    assert!(scenario_tree.is_empty());
    assert_eq!(scenario_tree.iter().count(), 0);
}

#[rstest]
fn test_clear_empty_tree_is_safe() {
    let mut tree: OrderedTree<i32, i32> = OrderedTree::new();
    tree.clear();
    tree.clear();
    assert!(tree.is_empty());
}

#[rstest]
fn test_tree_is_reusable_after_clear(mut scenario_tree: OrderedTree<i32, String>) {
    scenario_tree.clear();
    assert!(scenario_tree.insert(10, "ten".to_string()));
    assert_eq!(scenario_tree.root(), Ok((&10, &"ten".to_string())));
}

// =============================================================================
// Copy and Move Tests
// =============================================================================

#[rstest]
fn test_clone_is_independent(scenario_tree: OrderedTree<i32, String>) {
    let mut copy = scenario_tree.clone();
    copy.insert(100, "hundred".to_string());
    copy.erase(&5);

    assert_eq!(scenario_tree.len(), 7);
    assert!(scenario_tree.contains_key(&5));
    assert!(!scenario_tree.contains_key(&100));
    assert_eq!(scenario_tree.root(), Ok((&5, &"value-5".to_string())));
}

#[rstest]
fn test_source_mutation_does_not_affect_clone(mut scenario_tree: OrderedTree<i32, String>) {
    let copy = scenario_tree.clone();
    scenario_tree.erase(&3);
    scenario_tree.clear();

    assert_eq!(copy.len(), 7);
    assert_eq!(keys_of(&copy), vec![1, 3, 4, 5, 7, 8, 9]);
}

#[rstest]
fn test_take_transfers_contents(mut scenario_tree: OrderedTree<i32, String>) {
    let expected = scenario_tree.clone();
    let moved = scenario_tree.take();

    assert_eq!(moved, expected);
    assert_eq!(moved.len(), 7);
    assert!(scenario_tree.is_empty());
    assert_eq!(scenario_tree.len(), 0);
}

#[rstest]
fn test_plain_move_transfers_contents(scenario_tree: OrderedTree<i32, String>) {
    let moved = scenario_tree;
    assert_eq!(moved.len(), 7);
    assert_eq!(moved.min().map(|(key, _)| *key), Ok(1));
}

// =============================================================================
// Equality and Formatting Tests
// =============================================================================

#[rstest]
fn test_equality_ignores_shape() {
    let balanced: OrderedTree<i32, i32> = [(2, 2), (1, 1), (3, 3)].into_iter().collect();
    let degenerate: OrderedTree<i32, i32> = [(1, 1), (2, 2), (3, 3)].into_iter().collect();

    assert_eq!(balanced, degenerate);
    assert_ne!(balanced.height(), degenerate.height());
}

#[rstest]
fn test_inequality_on_different_values() {
    let left = OrderedTree::singleton(1, "a");
    let right = OrderedTree::singleton(1, "b");
    assert_ne!(left, right);
}

#[rstest]
fn test_display_and_debug(scenario_tree: OrderedTree<i32, String>) {
    let tree: OrderedTree<i32, i32> = scenario_tree
        .iter()
        .take(2)
        .map(|(&key, _)| (key, key * 2))
        .collect();
    assert_eq!(format!("{tree}"), "{1: 2, 3: 6}");
    assert_eq!(format!("{tree:?}"), "{1: 2, 3: 6}");
}

// =============================================================================
// Degenerate Shapes
// =============================================================================

#[rstest]
fn test_sorted_insertion_builds_list_shaped_tree() {
    let tree: OrderedTree<i32, ()> = (0..1_000).map(|key| (key, ())).collect();
    assert_eq!(tree.height(), 1_000);
    assert_eq!(tree.max(), Ok((&999, &())));
    drop(tree);
}

#[rstest]
fn test_into_iter_drop_after_partial_consumption() {
    let tree: OrderedTree<i32, String> = (0..1_000).rev().map(|key| (key, key.to_string())).collect();
    let mut iterator = tree.into_iter();
    assert_eq!(iterator.next(), Some((0, "0".to_string())));
    assert_eq!(iterator.len(), 999);
}
