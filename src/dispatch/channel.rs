//! A [`Dispatcher`] that forwards everything onto a tokio channel.
//!
//! The receiving half belongs to the download service runtime, which pulls
//! [`DispatchMessage`]s and does the actual work.
//!
//! # Examples
//!
//! ```rust
//! use qari_dl::dispatch::{CancelSignal, ChannelDispatcher, DispatchMessage, Dispatcher};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (dispatcher, mut rx) = ChannelDispatcher::new();
//! dispatcher.cancel_all(CancelSignal);
//! assert_eq!(rx.recv().await, Some(DispatchMessage::CancelAll(CancelSignal)));
//! # }
//! ```

use super::{CancelSignal, Dispatcher};
use crate::job::JobDescriptor;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Messages received by the download service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchMessage {
    Submit(JobDescriptor),
    CancelAll(CancelSignal),
}

/// Sends jobs and cancel signals over an unbounded channel.
///
/// Sending never blocks. If the receiver has been dropped the message is
/// discarded with a warning.
#[derive(Debug, Clone)]
pub struct ChannelDispatcher {
    tx: UnboundedSender<DispatchMessage>,
}

impl ChannelDispatcher {
    /// Creates a dispatcher and the receiver the service should drain.
    pub fn new() -> (Self, UnboundedReceiver<DispatchMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Whether the receiving side is gone.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn send(&self, message: DispatchMessage) {
        if let Err(e) = self.tx.send(message) {
            warn!("Download service is not running, dropping {:?}", e.0);
        }
    }
}

impl Dispatcher for ChannelDispatcher {
    fn submit(&self, job: JobDescriptor) {
        debug!("Forwarding job {}", job.job_key());
        self.send(DispatchMessage::Submit(job));
    }

    fn cancel_all(&self, signal: CancelSignal) {
        debug!("Forwarding cancel signal");
        self.send(DispatchMessage::CancelAll(signal));
    }
}
