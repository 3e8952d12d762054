//! Session handles and the delivery queue.
//!
//! The host's session-facing state (the actual connection, its formatting,
//! its permissions) lives on a single owning context. Worker tasks never
//! touch it; they push finished lines onto the session's queue and the
//! owning context drains it. A disconnected session simply drops its
//! receiver, which turns every later delivery into a silent no-op.

use tokio::sync::mpsc;

pub type SessionId = u64;

/// Cheap-to-clone handle for "deliver one line of text to this session".
/// Safe to hold across the async gap between dispatch and delivery.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: SessionId,
    outbox: mpsc::UnboundedSender<String>,
}

impl SessionHandle {
    /// Create a session and hand back the receiving half of its queue.
    /// The caller (the host's main context) owns the receiver and is the
    /// only place the delivered lines become user-visible.
    pub fn new(id: SessionId) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (outbox, inbox) = mpsc::unbounded_channel();
        (Self { id, outbox }, inbox)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Best-effort, at-most-once delivery. If the session disconnected
    /// between dispatch and now, the line is discarded.
    pub fn deliver(&self, line: impl Into<String>) {
        if self.outbox.send(line.into()).is_err() {
            tracing::debug!(session = self.id, "Session gone, discarding delivery");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivered_lines_arrive_in_order() {
        let (session, mut inbox) = SessionHandle::new(7);
        session.deliver("first");
        session.deliver("second");

        assert_eq!(inbox.recv().await.as_deref(), Some("first"));
        assert_eq!(inbox.recv().await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn delivery_after_disconnect_is_a_no_op() {
        let (session, inbox) = SessionHandle::new(7);
        drop(inbox);

        // Must not panic or error out.
        session.deliver("anyone home?");
    }
}
