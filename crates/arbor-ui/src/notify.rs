//! Change-notification seam between components and their observers.

use crate::tree::NodeId;

/// Observer capability for node mutation notifications.
///
/// A component announces a server-side state change by invoking the listener
/// its session registered for it; [`DirtyTracker`](crate::DirtyTracker)
/// implements this to record the node for the next flush cycle. The seam is
/// an explicit trait rather than an event bus so ownership of the listener
/// stays with the session.
pub trait ChangeListener {
    /// Called when `node`'s server-side state has changed.
    fn node_changed(&mut self, node: NodeId);
}
