//! Property tests for flatten/rebuild over arbitrary tree shapes
//!
//! Trees are generated from a parent table: node `i` hangs under some node
//! `j < i`, so every shape shows up eventually (chains, wide fans, empty
//! containers at any depth).

use proptest::prelude::*;
use proptest::sample::Index;
use serde_json::json;
use sitecraft_tree::{
    depth, find_parent, flatten, index_in_parent, rebuild, validate_tree, ComponentNode, SortableItem,
};

const KINDS: [&str; 4] = ["section", "row", "card", "text"];

fn build(parents: &[usize]) -> ComponentNode {
    let mut children = vec![Vec::new(); parents.len() + 1];
    for (i, parent) in parents.iter().enumerate() {
        children[*parent].push(i + 1);
    }
    node(0, &children)
}

fn node(i: usize, children: &[Vec<usize>]) -> ComponentNode {
    ComponentNode::new(format!("n{i}"), KINDS[i % KINDS.len()])
        .with_prop("order", json!(i))
        .with_children(children[i].iter().map(|c| node(*c, children)))
}

fn arb_tree() -> impl Strategy<Value = ComponentNode> {
    prop::collection::vec(any::<Index>(), 0..48).prop_map(|picks| {
        let parents: Vec<usize> = picks
            .iter()
            .enumerate()
            .map(|(i, pick)| pick.index(i + 1))
            .collect();
        build(&parents)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_trees_are_valid(tree in arb_tree()) {
        prop_assert!(validate_tree(&tree).is_ok());
    }

    #[test]
    fn flatten_then_rebuild_is_identity(tree in arb_tree()) {
        let items = flatten(&tree);
        prop_assert_eq!(items.len(), tree.node_count());
        let rebuilt = rebuild(&items);
        prop_assert_eq!(rebuilt.as_ref(), Some(&tree));
    }

    #[test]
    fn items_agree_with_tree_queries(tree in arb_tree()) {
        for item in flatten(&tree) {
            let parent = find_parent(&tree, &item.id).map(|p| p.id.clone());
            prop_assert_eq!(&item.parent_id, &parent);
            prop_assert_eq!(index_in_parent(&tree, &item.id).unwrap_or(0), item.index);
            prop_assert!(item.component.children.is_empty());
        }
    }

    #[test]
    fn flat_list_survives_json(tree in arb_tree()) {
        let json = serde_json::to_string(&flatten(&tree)).unwrap();
        let items: Vec<SortableItem> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(rebuild(&items), Some(tree));
    }

    #[test]
    fn rebuild_ignores_list_order(tree in arb_tree()) {
        // Deepest items first, so children arrive before their parents
        let mut items = flatten(&tree);
        items.sort_by_key(|item| std::cmp::Reverse(depth(&tree, &item.id).unwrap_or(0)));
        prop_assert_eq!(rebuild(&items), Some(tree));
    }
}
