use crate::node::ComponentNode;

/// Visitor pattern for traversing component trees immutably
///
/// The default implementation walks the whole tree in pre-order.
/// Override `visit_node` to act on each node; call [`walk_node`] from the
/// override to keep descending.
pub trait Visitor<'a>: Sized {
    fn visit_node(&mut self, node: &'a ComponentNode, _parent: Option<&'a ComponentNode>, depth: usize) {
        walk_node(self, node, depth);
    }
}

/// Visit every child of `node`, in order
pub fn walk_node<'a, V: Visitor<'a>>(visitor: &mut V, node: &'a ComponentNode, depth: usize) {
    for child in &node.children {
        visitor.visit_node(child, Some(node), depth + 1);
    }
}

/// Start a walk at the root
pub fn walk_tree<'a, V: Visitor<'a>>(visitor: &mut V, root: &'a ComponentNode) {
    visitor.visit_node(root, None, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DepthCollector<'a> {
        seen: Vec<(&'a str, Option<&'a str>, usize)>,
    }

    impl<'a> Visitor<'a> for DepthCollector<'a> {
        fn visit_node(&mut self, node: &'a ComponentNode, parent: Option<&'a ComponentNode>, depth: usize) {
            self.seen.push((node.id.as_str(), parent.map(|p| p.id.as_str()), depth));
            walk_node(self, node, depth);
        }
    }

    /// Stops descending below depth 1
    struct Shallow {
        count: usize,
    }

    impl<'a> Visitor<'a> for Shallow {
        fn visit_node(&mut self, node: &'a ComponentNode, _parent: Option<&'a ComponentNode>, depth: usize) {
            self.count += 1;
            if depth < 1 {
                walk_node(self, node, depth);
            }
        }
    }

    fn sample() -> ComponentNode {
        ComponentNode::new("root", "page")
            .with_child(ComponentNode::new("s1", "section").with_child(ComponentNode::new("t1", "text")))
            .with_child(ComponentNode::new("s2", "section"))
    }

    #[test]
    fn test_walk_reports_parent_and_depth() {
        let tree = sample();
        let mut collector = DepthCollector { seen: vec![] };
        walk_tree(&mut collector, &tree);

        assert_eq!(
            collector.seen,
            vec![
                ("root", None, 0),
                ("s1", Some("root"), 1),
                ("t1", Some("s1"), 2),
                ("s2", Some("root"), 1),
            ]
        );
    }

    #[test]
    fn test_override_can_prune() {
        let tree = sample();
        let mut shallow = Shallow { count: 0 };
        walk_tree(&mut shallow, &tree);
        assert_eq!(shallow.count, 3);
    }
}
