//! Handoff to the download service.
//!
//! The dispatcher schedules and runs jobs; this crate only submits them and
//! forwards cancellation. Both calls are fire-and-forget.
//!
//! - [`channel`] - A dispatcher feeding a tokio channel

pub mod channel;

pub use channel::{ChannelDispatcher, DispatchMessage};

use crate::job::JobDescriptor;

/// Instructs the dispatcher to abort every in-flight and queued job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CancelSignal;

/// Accepts jobs and cancellation signals.
///
/// Implementations must return without waiting for the job to run. Tracking
/// which jobs exist, deduplicating them by key and stopping them on cancel is
/// the dispatcher's responsibility.
pub trait Dispatcher: Send + Sync {
    fn submit(&self, job: JobDescriptor);

    fn cancel_all(&self, signal: CancelSignal);
}
