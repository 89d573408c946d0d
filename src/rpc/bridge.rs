//! Bridge from single-shot pending calls to caller-facing futures.
//!
//! ```text
//!                    ┌──────────── Succeeded ──▶ translate ──▶ Ok / Err(Translation)
//!   Pending ─────────┼──────────── Failed ─────────────────▶ Err(Rpc)
//!                    └──────────── Cancelled ──────────────▶ Err(Cancelled)
//! ```
//!
//! Exactly one transition out of `Pending` happens, decided by a single
//! compare-and-swap on the call's state cell. The completer takes it the
//! moment the RPC completes, before the bridge task runs, so a cancel that
//! arrives later is a no-op even if the result has not been translated yet.

use crate::core::error::{AuthError, AuthResult};
use crate::rpc::pending::{CallCell, CallState, PendingCall};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::sync::{oneshot, Notify};

/// State shared between a ClientFuture and its bridge task.
struct BridgeState {
    cell: Arc<CallCell>,
    cancel: Notify,
}

/// Caller-facing future for one operation.
///
/// Dropping an unresolved future cancels the call.
#[must_use = "futures do nothing unless awaited; dropping one cancels the call"]
pub struct ClientFuture<T> {
    rx: oneshot::Receiver<AuthResult<T>>,
    shared: Arc<BridgeState>,
}

impl<T> ClientFuture<T> {
    /// Cancel the call if it has not completed yet.
    ///
    /// Returns `true` if this cancellation won. Once the call has completed
    /// this is a no-op returning `false` and the result is unaffected.
    pub fn cancel(&self) -> bool {
        if self.shared.cell.transition(CallState::Cancelled) {
            tracing::debug!("auth rpc cancelled by caller");
            self.shared.cancel.notify_one();
            true
        } else {
            false
        }
    }

    /// Current terminal state of the underlying call.
    pub fn state(&self) -> CallState {
        self.shared.cell.load()
    }

    /// Whether the call was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.state() == CallState::Cancelled
    }
}

impl<T> Future for ClientFuture<T> {
    type Output = AuthResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            // The bridge task was dropped, e.g. by executor shutdown.
            Poll::Ready(Err(_)) => Poll::Ready(Err(AuthError::Cancelled)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> Drop for ClientFuture<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T> std::fmt::Debug for ClientFuture<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientFuture")
            .field("state", &self.state())
            .finish()
    }
}

/// Bridge `pending` into a [`ClientFuture`] resolved by `translate`.
///
/// Returns immediately. The continuation, including `translate`, runs on a
/// task spawned on `executor`; `translate` runs at most once and only after
/// a successful completion.
pub fn bridge<W, T, F>(
    mut pending: PendingCall<W>,
    translate: F,
    executor: &Handle,
) -> ClientFuture<T>
where
    W: Send + 'static,
    T: Send + 'static,
    F: FnOnce(W) -> AuthResult<T> + Send + 'static,
{
    let shared = Arc::new(BridgeState {
        cell: pending.cell(),
        cancel: Notify::new(),
    });
    let (tx, rx) = oneshot::channel();
    let task_state = Arc::clone(&shared);

    executor.spawn(async move {
        let outcome = tokio::select! {
            result = &mut pending => Some(result),
            _ = task_state.cancel.notified() => None,
        };

        let resolution = match outcome {
            // A delivered response always won the transition.
            Some(Ok(response)) => {
                tracing::debug!("auth rpc completed");
                translate(response).map_err(|e| {
                    tracing::warn!(error = %e, "auth response translation failed");
                    e
                })
            }
            Some(Err(_)) if task_state.cell.load() == CallState::Cancelled => {
                Err(AuthError::Cancelled)
            }
            Some(Err(status)) => {
                tracing::debug!(
                    code = ?status.code(),
                    message = %status.message(),
                    "auth rpc failed"
                );
                Err(AuthError::Rpc(status))
            }
            None => {
                pending.cancel();
                Err(AuthError::Cancelled)
            }
        };

        // The receiver is gone if the caller dropped the future.
        let _ = tx.send(resolution);
    });

    ClientFuture { rx, shared }
}
