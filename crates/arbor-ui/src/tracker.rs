//! Dirty-state tracking for incremental re-rendering.

use crate::notify::ChangeListener;
use crate::tree::{ComponentTree, NodeId};
use arbor_core::alloc::HashSet;

/// Tracks which nodes have pending state changes not yet flushed to the
/// remote presentation layer.
///
/// A node is dirty when an operation performed on it server-side means new
/// information must be sent to its client-side counterpart. The tracker is a
/// presence set, not a diff log: the state to transmit is recomputed by the
/// flush step from the nodes themselves.
///
/// One tracker belongs to one session and must only be driven from that
/// session's request dispatcher; it performs no synchronization of its own.
pub struct DirtyTracker {
    root: NodeId,
    dirty: HashSet<NodeId>,
    subscribed: HashSet<NodeId>,
}

impl DirtyTracker {
    /// Create a tracker for the tree rooted at `root`.
    ///
    /// The root is only used to seed full-tree sweeps; nodes still have to
    /// be attached individually as they enter the tree.
    pub fn new(root: NodeId) -> Self {
        Self {
            root,
            dirty: HashSet::new(),
            subscribed: HashSet::new(),
        }
    }

    /// Root the full-tree sweep starts from.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Register the tracker as the change listener for `node` and mark it
    /// dirty: a freshly attached node always needs an initial render.
    ///
    /// Attaching an already-attached node does not register a second
    /// listener; the node is still marked dirty.
    pub fn attach(&mut self, node: NodeId) {
        if self.subscribed.insert(node) {
            tracing::trace!(node = node.0, "listener registered");
        }
        self.mark_dirty(node);
    }

    /// Unregister the listener for `node` and drop it from the dirty set.
    ///
    /// No-op for a node that was never attached. After this, change
    /// notifications for `node` are ignored.
    pub fn detach(&mut self, node: NodeId) {
        if self.subscribed.remove(&node) {
            tracing::trace!(node = node.0, "listener unregistered");
        }
        self.mark_clean(node);
    }

    /// Add `node` to the dirty set.
    ///
    /// Logs only on the clean-to-dirty transition so repeated changes to an
    /// already-dirty node do not spam the log.
    pub fn mark_dirty(&mut self, node: NodeId) {
        if self.dirty.insert(node) {
            tracing::debug!(node = node.0, "node-marked-dirty");
        }
    }

    /// Remove `node` from the dirty set if present.
    pub fn mark_clean(&mut self, node: NodeId) {
        if self.dirty.remove(&node) {
            tracing::debug!(node = node.0, "node-marked-clean");
        }
    }

    /// Mark every node reachable from the root dirty, regardless of current
    /// membership or subscription. Used to force a full re-render, e.g.
    /// after a client reconnect.
    pub fn mark_all_dirty(&mut self, tree: &ComponentTree) {
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            self.dirty.insert(node);
            stack.extend(tree.children(node).iter().rev().copied());
        }
        tracing::debug!(dirty = self.dirty.len(), "full-sweep");
    }

    /// Empty the dirty set unconditionally; called after a flush cycle
    /// successfully completes.
    pub fn mark_all_clean(&mut self) {
        let cleared = self.dirty.len();
        self.dirty.clear();
        tracing::debug!(cleared, "full-clean");
    }

    /// Read-only view of the dirty set for the flush step to consume.
    pub fn dirty_nodes(&self) -> &HashSet<NodeId> {
        &self.dirty
    }

    /// Check whether a single node is dirty.
    pub fn is_dirty(&self, node: NodeId) -> bool {
        self.dirty.contains(&node)
    }

    /// Number of nodes awaiting a flush.
    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    /// True when nothing needs flushing.
    pub fn is_clean(&self) -> bool {
        self.dirty.is_empty()
    }

    /// Check whether the tracker is registered as `node`'s listener.
    pub fn is_subscribed(&self, node: NodeId) -> bool {
        self.subscribed.contains(&node)
    }
}

impl ChangeListener for DirtyTracker {
    fn node_changed(&mut self, node: NodeId) {
        // Notifications for nodes we never subscribed to (or already
        // detached from) are ignored.
        if self.subscribed.contains(&node) {
            self.mark_dirty(node);
        }
    }
}
