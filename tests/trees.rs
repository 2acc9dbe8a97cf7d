use vellum_core::trees::AvlTree;

#[test]
fn insert_and_get() {
    let mut tree = AvlTree::new();
    for i in 0..100 {
        tree.insert(i, i * 2);
    }

    assert_eq!(tree.len(), 100);
    for i in 0..100 {
        assert_eq!(tree.get(&i), Some(&(i * 2)));
    }
}

#[test]
fn remove_shrinks_tree_and_drops_key() {
    let mut tree = AvlTree::new();
    for i in 0..20 {
        tree.insert(i, i.to_string());
    }

    assert!(tree.remove(&10));
    assert_eq!(tree.len(), 19);
    assert!(!tree.contains(&10));
    assert!(tree.contains(&9));
}

#[test]
fn iter_is_sorted_by_key() {
    let mut tree = AvlTree::new();
    for &k in &[5, 1, 9, 3, 7, 2, 8, 4, 6, 0] {
        tree.insert(k, ());
    }

    let keys: Vec<i32> = tree.iter().into_iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, (0..10).collect::<Vec<i32>>());
}

#[test]
fn remove_missing_key_is_a_no_op() {
    let mut tree: AvlTree<i32, i32> = AvlTree::new();
    tree.insert(1, 100);
    assert!(!tree.remove(&42));
    assert_eq!(tree.len(), 1);
}
