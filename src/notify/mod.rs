use entity::claim::Model as ClaimModel;
use tokio::sync::broadcast;

/// Fan-out for freshly filed claims. One sender lives in app data; every
/// connected event-stream client holds a receiver. Delivery is
/// at-least-once across reconnects: a client that lags or drops re-syncs
/// from its cursor and dedups by claim id.
#[derive(Clone)]
pub struct ClaimNotifier {
    tx: broadcast::Sender<ClaimModel>,
}

impl ClaimNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// No subscribers is not an error; the cursor covers catch-up.
    pub fn publish(&self, claim: ClaimModel) {
        let _ = self.tx.send(claim);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ClaimModel> {
        self.tx.subscribe()
    }

    pub fn client_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
