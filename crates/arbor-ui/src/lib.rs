//! Arbor UI - server-side component tree with dirty-state tracking.
//!
//! This crate provides the state layer of a server-rendered UI session:
//! - A per-session component tree ([`ComponentTree`])
//! - A dirty tracker recording which nodes need their state re-sent to the
//!   remote presentation layer ([`DirtyTracker`])
//! - An explicit observer seam for change notifications ([`ChangeListener`])
//!
//! Serialization and transport of the dirty state are owned by an external
//! flush step: it reads [`UiSession::dirty_nodes`], re-reads each node's
//! current state, transmits it, and calls [`UiSession::mark_all_clean`] on
//! success.
//!
//! ## Quick Start
//!
//! ```rust
//! use arbor_ui::UiSession;
//!
//! let mut session = UiSession::new("root");
//! let panel = session.create_node(session.root(), "panel").unwrap();
//!
//! // Flush step: consume the dirty set, transmit, then clear.
//! for _node in session.dirty_nodes().iter() {
//!     // serialize the node's current render-relevant state ...
//! }
//! session.mark_all_clean();
//!
//! // Later mutations re-enter the set through change notification.
//! session.notify_change(panel);
//! assert!(session.tracker().is_dirty(panel));
//! ```

pub mod notify;
pub mod tracker;
pub mod tree;

use arbor_core::alloc::HashSet;

pub use notify::ChangeListener;
pub use tracker::DirtyTracker;
pub use tree::{ComponentNode, ComponentTree, NodeId};

/// Per-session UI state: one component tree plus the dirty tracker that
/// shadows it.
///
/// The session owns both halves and keeps them consistent: nodes entering
/// the tree are attached to the tracker, nodes leaving it are detached. One
/// instance per UI session, driven from that session's request dispatcher
/// only; there is no process-wide singleton.
pub struct UiSession {
    tree: ComponentTree,
    tracker: DirtyTracker,
}

impl UiSession {
    /// Create a session whose tree holds only the root node. The root is
    /// attached immediately, so the first flush sends it.
    pub fn new(root_tag: impl Into<String>) -> Self {
        let tree = ComponentTree::new(root_tag);
        let mut tracker = DirtyTracker::new(tree.root());
        tracker.attach(tree.root());
        Self { tree, tracker }
    }

    /// Get the root node.
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Create a node under `parent` and register it with the tracker.
    ///
    /// Returns `None` if `parent` is not in the tree.
    pub fn create_node(&mut self, parent: NodeId, tag: impl Into<String>) -> Option<NodeId> {
        let node = self.tree.insert(parent, tag)?;
        self.tracker.attach(node);
        tracing::debug!(
            node = node.0,
            tag = self.tree.tag(node).unwrap_or(""),
            parent = parent.0,
            parent_tag = self.tree.tag(parent).unwrap_or(""),
            "component attached"
        );
        Some(node)
    }

    /// Detach `node` and its subtree from the session.
    ///
    /// Every removed node leaves the dirty set and has its listener
    /// registration cancelled. Returns `false` for the root or an unknown
    /// node.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        let removed = self.tree.remove(node);
        for id in &removed {
            self.tracker.detach(*id);
        }
        if removed.is_empty() {
            false
        } else {
            tracing::debug!(node = node.0, removed = removed.len(), "component detached");
            true
        }
    }

    /// Move `node` under `new_parent`; dirty-set membership is untouched.
    ///
    /// Returns `false` if the tree refused the edge.
    pub fn reparent_node(&mut self, node: NodeId, new_parent: NodeId) -> bool {
        self.tree.reparent(node, new_parent)
    }

    /// Route a node's change notification to the tracker.
    pub fn notify_change(&mut self, node: NodeId) {
        self.tracker.node_changed(node);
    }

    /// Force a full re-render: mark every node reachable from the root.
    pub fn mark_all_dirty(&mut self) {
        self.tracker.mark_all_dirty(&self.tree);
    }

    /// Clear the dirty set after a successful flush cycle.
    pub fn mark_all_clean(&mut self) {
        self.tracker.mark_all_clean();
    }

    /// Read-only view of the nodes awaiting a flush.
    pub fn dirty_nodes(&self) -> &HashSet<NodeId> {
        self.tracker.dirty_nodes()
    }

    /// Get reference to the tree.
    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    /// Get reference to the tracker.
    pub fn tracker(&self) -> &DirtyTracker {
        &self.tracker
    }
}

impl Default for UiSession {
    fn default() -> Self {
        Self::new("root")
    }
}
