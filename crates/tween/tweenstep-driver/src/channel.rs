//! Delivery of stepped positions to the consumer.
//!
//! The driver only needs somewhere to hand a value without waiting on it.
//! [`DeliveryChannel::post`] must not block; ordering of posts from one run is
//! the order the consumer observes.

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tweenstep_core::EasingError;

/// Target that receives the positions of a run.
pub trait DeliveryChannel: Send + Sync + 'static {
    /// Hand over one truncated position. Fire-and-forget.
    fn post(&self, position: i32);

    /// Called once when a run ends because a position could not be delivered.
    fn fail(&self, _error: &EasingError) {}
}

/// Event form used by channels that also want the failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Position(i32),
    Failed(EasingError),
}

impl DeliveryChannel for mpsc::UnboundedSender<i32> {
    fn post(&self, position: i32) {
        if self.send(position).is_err() {
            tracing::trace!(position, "tween.delivery.receiver_closed");
        }
    }
}

impl DeliveryChannel for mpsc::UnboundedSender<Delivery> {
    fn post(&self, position: i32) {
        if self.send(Delivery::Position(position)).is_err() {
            tracing::trace!(position, "tween.delivery.receiver_closed");
        }
    }

    fn fail(&self, error: &EasingError) {
        if self.send(Delivery::Failed(error.clone())).is_err() {
            tracing::trace!(error = %error, "tween.delivery.receiver_closed");
        }
    }
}

/// Invokes an `on_step` callback on a dedicated dispatch task.
///
/// Posting enqueues the position and returns; the callback runs later on the
/// dispatch task, one position at a time and in posting order. The dispatch
/// task ends once every clone of the channel is dropped.
#[derive(Debug, Clone)]
pub struct CallbackChannel {
    tx: mpsc::UnboundedSender<i32>,
}

impl CallbackChannel {
    /// Spawn the dispatch task on `handle`.
    pub fn spawn<F>(handle: &Handle, mut on_step: F) -> Self
    where
        F: FnMut(i32) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<i32>();
        handle.spawn(async move {
            while let Some(position) = rx.recv().await {
                on_step(position);
            }
            tracing::trace!("tween.delivery.dispatch_closed");
        });
        Self { tx }
    }
}

impl DeliveryChannel for CallbackChannel {
    fn post(&self, position: i32) {
        self.tx.post(position);
    }
}
