//! Single-shot handles for in-flight RPC invocations.
//!
//! A [`PendingCall`] is the consumer side and a [`CallCompleter`] the
//! producer side of one RPC. The completer is consumed by the terminal
//! transition, so a call cannot succeed twice or both succeed and fail.
//!
//! Both sides share one state cell. Completion and cancellation race for
//! its single transition out of [`CallState::Pending`]; whichever lands
//! first decides the outcome, and the loser does nothing.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tonic::Status;

/// Terminal state of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    /// No terminal transition yet.
    Pending,
    /// The RPC returned a response.
    Succeeded,
    /// The RPC failed.
    Failed,
    /// The caller cancelled first.
    Cancelled,
}

impl CallState {
    fn as_u8(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Succeeded => 1,
            Self::Failed => 2,
            Self::Cancelled => 3,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Succeeded,
            2 => Self::Failed,
            3 => Self::Cancelled,
            _ => Self::Pending,
        }
    }
}

/// State cell shared by both ends of a call.
#[derive(Debug)]
pub(crate) struct CallCell {
    state: AtomicU8,
}

impl CallCell {
    fn new() -> Self {
        Self {
            state: AtomicU8::new(CallState::Pending.as_u8()),
        }
    }

    pub(crate) fn load(&self) -> CallState {
        CallState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Move out of `Pending`. Returns false if another transition won.
    pub(crate) fn transition(&self, to: CallState) -> bool {
        self.state
            .compare_exchange(
                CallState::Pending.as_u8(),
                to.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

/// An in-flight RPC that resolves exactly once.
///
/// Resolves to `Err(Status::cancelled)` if the completer is dropped without
/// completing.
#[derive(Debug)]
pub struct PendingCall<W> {
    rx: oneshot::Receiver<Result<W, Status>>,
    cell: Arc<CallCell>,
}

impl<W> PendingCall<W> {
    /// Create a linked completer/pending-call pair.
    pub fn channel() -> (CallCompleter<W>, PendingCall<W>) {
        let (tx, rx) = oneshot::channel();
        let cell = Arc::new(CallCell::new());
        let completer = CallCompleter {
            tx,
            cell: Arc::clone(&cell),
        };
        (completer, PendingCall { rx, cell })
    }

    /// A call that has already completed with `result`.
    pub fn ready(result: Result<W, Status>) -> Self {
        let (completer, pending) = Self::channel();
        completer.complete(result);
        pending
    }

    /// Cancel the call unless it has already completed.
    ///
    /// Returns `true` if this cancellation won. A completed call keeps its
    /// result and can still be polled.
    pub fn cancel(&mut self) -> bool {
        let won = self.cell.transition(CallState::Cancelled);
        if self.cell.load() == CallState::Cancelled {
            self.rx.close();
        }
        won
    }

    /// Current state of the call.
    pub fn state(&self) -> CallState {
        self.cell.load()
    }

    pub(crate) fn cell(&self) -> Arc<CallCell> {
        Arc::clone(&self.cell)
    }
}

impl<W> Future for PendingCall<W> {
    type Output = Result<W, Status>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => {
                self.cell.transition(CallState::Failed);
                Poll::Ready(Err(Status::cancelled("rpc call abandoned")))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Producer side of a [`PendingCall`], held by whatever drives the RPC.
#[derive(Debug)]
pub struct CallCompleter<W> {
    tx: oneshot::Sender<Result<W, Status>>,
    cell: Arc<CallCell>,
}

impl<W> CallCompleter<W> {
    /// Complete the call with a response.
    ///
    /// Returns `false` if the call was cancelled and the response dropped.
    pub fn succeed(self, response: W) -> bool {
        self.complete(Ok(response))
    }

    /// Fail the call with `status`.
    ///
    /// Returns `false` if the call was cancelled and the status dropped.
    pub fn fail(self, status: Status) -> bool {
        self.complete(Err(status))
    }

    /// Complete the call with a result.
    pub fn complete(self, result: Result<W, Status>) -> bool {
        let to = if result.is_ok() {
            CallState::Succeeded
        } else {
            CallState::Failed
        };
        if !self.cell.transition(to) {
            return false;
        }
        // The receiver is only closed after a winning cancellation.
        self.tx.send(result).is_ok()
    }

    /// Whether the consumer cancelled or went away.
    pub fn is_cancelled(&self) -> bool {
        self.cell.load() == CallState::Cancelled || self.tx.is_closed()
    }

    /// Wait until the consumer cancels or goes away.
    pub async fn cancelled(&mut self) {
        self.tx.closed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_succeed() {
        let (completer, pending) = PendingCall::channel();
        assert!(completer.succeed(5u32));
        assert_eq!(pending.state(), CallState::Succeeded);
        assert_eq!(pending.await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_fail_preserves_status() {
        let (completer, pending) = PendingCall::<u32>::channel();
        assert!(completer.fail(Status::not_found("etcdserver: user name not found")));
        assert_eq!(pending.state(), CallState::Failed);
        let status = pending.await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(status.message(), "etcdserver: user name not found");
    }

    #[tokio::test]
    async fn test_abandoned() {
        let (completer, pending) = PendingCall::<u32>::channel();
        drop(completer);
        assert_eq!(pending.await.unwrap_err().code(), tonic::Code::Cancelled);
    }

    #[tokio::test]
    async fn test_cancel_is_observed_by_completer() {
        let (mut completer, mut pending) = PendingCall::<u32>::channel();
        assert!(!completer.is_cancelled());
        assert!(pending.cancel());
        assert_eq!(pending.state(), CallState::Cancelled);
        completer.cancelled().await;
        assert!(completer.is_cancelled());
        assert!(!completer.succeed(1));
    }

    #[tokio::test]
    async fn test_cancel_after_completion_keeps_result() {
        let (completer, mut pending) = PendingCall::channel();
        assert!(completer.succeed(3u32));
        assert!(!pending.cancel());
        assert_eq!(pending.state(), CallState::Succeeded);
        assert_eq!(pending.await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_ready() {
        let pending = PendingCall::ready(Ok::<_, Status>("done"));
        assert_eq!(pending.await.unwrap(), "done");
    }
}
