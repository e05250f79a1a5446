//! Simulated flush loop: build a small session, mutate it, and show how an
//! external flush step consumes the dirty set.
//!
//! Run with `cargo run -p arbor-ui --example flush_loop`.

use arbor_ui::UiSession;

fn main() {
    arbor_core::logging::init();

    let mut session = UiSession::new("window");
    let header = session.create_node(session.root(), "header").unwrap();
    let body = session.create_node(session.root(), "body").unwrap();
    let row = session.create_node(body, "row").unwrap();

    // Initial render: everything attached so far is dirty.
    flush(&mut session);

    // A request mutates two components; only those are re-sent.
    session.notify_change(header);
    session.notify_change(row);
    flush(&mut session);

    // Client reconnect: force a full re-render.
    session.mark_all_dirty();
    flush(&mut session);
}

/// Stand-in for the transport layer: "transmit" each dirty node's state,
/// then tell the tracker the cycle succeeded.
fn flush(session: &mut UiSession) {
    let mut ids: Vec<_> = session.dirty_nodes().iter().copied().collect();
    ids.sort_by_key(|id| id.0);

    for id in ids {
        let tag = session.tree().tag(id).unwrap_or("?");
        tracing::info!(node = id.0, tag, "transmitting state");
    }
    session.mark_all_clean();
}
