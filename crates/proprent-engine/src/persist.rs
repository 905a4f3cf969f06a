//! # Persistence Write Queues
//!
//! One ordered write queue per persisted collection.
//!
//! ## Why a Queue Per Collection?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Write Ordering Problem                               │
//! │                                                                         │
//! │  Without ordering, two rapid mutations race:                           │
//! │                                                                         │
//! │  checkout  ──► rewrite inventory {X: 3}  ─────────────┐ slow           │
//! │  return    ──► rewrite inventory {X: 5}  ──┐ fast     │                │
//! │                                            ▼          ▼                │
//! │                              durable: {X: 5} ... then {X: 3}  ❌       │
//! │                                                                         │
//! │  The earlier snapshot "wins" and silently reverts the collection.      │
//! │                                                                         │
//! │  With one unbounded channel + one writer task per collection:          │
//! │                                                                         │
//! │  checkout ──► enqueue {X: 3} ──► ┌─────────────┐                       │
//! │  return   ──► enqueue {X: 5} ──► │ writer task │ ──► {X: 3}, {X: 5} ✅ │
//! │                                  └─────────────┘                       │
//! │                                                                         │
//! │  Enqueue is synchronous and never blocks the session actor: durable    │
//! │  writes are fire-and-forget, but strictly ordered.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed write is logged and dropped; the in-memory state that produced
//! it stays authoritative, and the next successful write for the collection
//! carries the current state anyway (snapshots are full rewrites, rental
//! upserts are whole records).

use std::future::Future;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use proprent_db::DbResult;

enum Message<J> {
    /// A durable write to apply.
    Job(J),
    /// Rendezvous: acknowledge once every job enqueued before it has run.
    Flush(oneshot::Sender<()>),
}

/// Handle to a collection's ordered writer task.
///
/// Cheap to construct once per session; dropping the handle closes the
/// channel and lets the writer task drain and exit.
#[derive(Debug)]
pub struct CollectionWriter<J> {
    collection: &'static str,
    tx: mpsc::UnboundedSender<Message<J>>,
}

impl<J: Send + 'static> CollectionWriter<J> {
    /// Spawns the writer task for a collection.
    ///
    /// `apply` performs one durable write per job (a full inventory
    /// rewrite, or one rental upsert). Jobs run strictly in enqueue order.
    pub fn spawn<F, Fut>(collection: &'static str, mut apply: F) -> Self
    where
        F: FnMut(J) -> Fut + Send + 'static,
        Fut: Future<Output = DbResult<()>> + Send,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Message<J>>();

        tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                match msg {
                    Message::Job(job) => {
                        if let Err(e) = apply(job).await {
                            // Best-effort durability: report and carry on.
                            // In-memory state remains authoritative.
                            warn!(
                                collection,
                                error = %e,
                                "Durable write failed; session state unaffected"
                            );
                        }
                    }
                    Message::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
            debug!(collection, "Collection writer stopped");
        });

        CollectionWriter { collection, tx }
    }

    /// Enqueues one durable write. Never blocks, never fails the caller.
    pub fn enqueue(&self, job: J) {
        if self.tx.send(Message::Job(job)).is_err() {
            warn!(
                collection = self.collection,
                "Collection writer gone; dropping durable write"
            );
        }
    }

    /// Waits until every write enqueued before this call has been applied.
    ///
    /// Used by tests and orderly shutdown; steady-state callers never wait.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(Message::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
