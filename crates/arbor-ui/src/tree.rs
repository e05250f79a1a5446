//! Component tree structure for a server-side UI session.

use indexmap::IndexMap;

/// Node identifier in the component tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A node in the component tree.
///
/// Carries only tree membership plus a human-readable tag; render-relevant
/// state lives in the component layer and is re-read by the flush step.
pub struct ComponentNode {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl ComponentNode {
    /// Tag used for debug output and structured log events.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Parent of this node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children of this node, in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Component tree managing parent/child relationships for one UI session.
///
/// The root is created at construction and cannot be removed. All mutation
/// goes through the tree so the parent link and the parent's child list
/// always agree, and the tree stays acyclic.
pub struct ComponentTree {
    nodes: IndexMap<NodeId, ComponentNode>,
    root: NodeId,
    next_id: usize,
}

impl ComponentTree {
    /// Create a new tree containing only the root node.
    pub fn new(root_tag: impl Into<String>) -> Self {
        let root = NodeId(0);
        let mut nodes = IndexMap::new();
        nodes.insert(
            root,
            ComponentNode {
                tag: root_tag.into(),
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    /// Get the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Insert a new node under `parent` and return its id.
    ///
    /// Returns `None` if `parent` is not in the tree.
    pub fn insert(&mut self, parent: NodeId, tag: impl Into<String>) -> Option<NodeId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }

        let node_id = NodeId(self.next_id);
        self.next_id += 1;

        self.nodes.insert(
            node_id,
            ComponentNode {
                tag: tag.into(),
                parent: Some(parent),
                children: Vec::new(),
            },
        );
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(node_id);
        }

        Some(node_id)
    }

    /// Remove `node` and its entire subtree.
    ///
    /// Returns the ids that were removed (in traversal order) so callers can
    /// deregister them elsewhere. The root cannot be removed; removing it or
    /// an unknown node returns an empty list.
    pub fn remove(&mut self, node: NodeId) -> Vec<NodeId> {
        if node == self.root || !self.nodes.contains_key(&node) {
            return Vec::new();
        }

        let removed = self.descendants(node);

        // Unlink from the parent's child list first.
        if let Some(parent) = self.nodes.get(&node).and_then(|n| n.parent) {
            if let Some(parent_node) = self.nodes.get_mut(&parent) {
                parent_node.children.retain(|&c| c != node);
            }
        }
        for id in &removed {
            self.nodes.shift_remove(id);
        }

        removed
    }

    /// Move `node` under `new_parent`.
    ///
    /// Returns `false` without modifying the tree if the edge would detach
    /// the root, reference a missing node, or introduce a cycle.
    pub fn reparent(&mut self, node: NodeId, new_parent: NodeId) -> bool {
        if node == self.root
            || !self.nodes.contains_key(&node)
            || !self.nodes.contains_key(&new_parent)
        {
            return false;
        }
        if node == new_parent || self.is_ancestor(node, new_parent) {
            return false;
        }

        if let Some(old_parent) = self.nodes.get(&node).and_then(|n| n.parent) {
            if let Some(old_parent_node) = self.nodes.get_mut(&old_parent) {
                old_parent_node.children.retain(|&c| c != node);
            }
        }
        if let Some(parent_node) = self.nodes.get_mut(&new_parent) {
            parent_node.children.push(node);
        }
        if let Some(child_node) = self.nodes.get_mut(&node) {
            child_node.parent = Some(new_parent);
        }

        true
    }

    /// Check whether `maybe_ancestor` is on `node`'s parent chain.
    fn is_ancestor(&self, maybe_ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes.get(&node).and_then(|n| n.parent);
        while let Some(id) = current {
            if id == maybe_ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|n| n.parent);
        }
        false
    }

    /// Get a node by id.
    pub fn get(&self, node: NodeId) -> Option<&ComponentNode> {
        self.nodes.get(&node)
    }

    /// Get the parent of a node.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    /// Get the children of a node. Unknown ids yield an empty slice.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Get a node's tag.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|n| n.tag.as_str())
    }

    /// Check if a node is in the tree.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Collect `node` and every node reachable below it, depth-first.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        if !self.nodes.contains_key(&node) {
            return Vec::new();
        }

        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(n) = self.nodes.get(&id) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        out
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree is never empty; it always holds the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ComponentNode)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_links_parent_and_child() {
        let mut tree = ComponentTree::new("root");
        let root = tree.root();
        let child = tree.insert(root, "child").unwrap();

        assert_eq!(tree.parent(child), Some(root));
        assert_eq!(tree.children(root), &[child]);
        assert_eq!(tree.tag(child), Some("child"));
    }

    #[test]
    fn test_insert_under_missing_parent() {
        let mut tree = ComponentTree::new("root");
        assert!(tree.insert(NodeId(99), "orphan").is_none());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_remove_subtree() {
        let mut tree = ComponentTree::new("root");
        let root = tree.root();
        let a = tree.insert(root, "a").unwrap();
        let b = tree.insert(root, "b").unwrap();
        let c = tree.insert(a, "c").unwrap();

        let removed = tree.remove(a);
        assert_eq!(removed.len(), 2);
        assert!(removed.contains(&a));
        assert!(removed.contains(&c));

        assert!(!tree.contains(a));
        assert!(!tree.contains(c));
        assert_eq!(tree.children(root), &[b]);
    }

    #[test]
    fn test_remove_root_is_refused() {
        let mut tree = ComponentTree::new("root");
        assert!(tree.remove(tree.root()).is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_reparent() {
        let mut tree = ComponentTree::new("root");
        let root = tree.root();
        let a = tree.insert(root, "a").unwrap();
        let b = tree.insert(root, "b").unwrap();

        assert!(tree.reparent(b, a));
        assert_eq!(tree.parent(b), Some(a));
        assert_eq!(tree.children(root), &[a]);
        assert_eq!(tree.children(a), &[b]);
    }

    #[test]
    fn test_reparent_refuses_cycles() {
        let mut tree = ComponentTree::new("root");
        let root = tree.root();
        let a = tree.insert(root, "a").unwrap();
        let b = tree.insert(a, "b").unwrap();

        // b is below a; making a a child of b would form a cycle.
        assert!(!tree.reparent(a, b));
        assert!(!tree.reparent(a, a));
        assert_eq!(tree.parent(a), Some(root));
    }

    #[test]
    fn test_descendants_depth_first() {
        let mut tree = ComponentTree::new("root");
        let root = tree.root();
        let a = tree.insert(root, "a").unwrap();
        let b = tree.insert(root, "b").unwrap();
        let c = tree.insert(a, "c").unwrap();

        assert_eq!(tree.descendants(root), vec![root, a, c, b]);
        assert_eq!(tree.descendants(a), vec![a, c]);
        assert!(tree.descendants(NodeId(99)).is_empty());
    }
}
