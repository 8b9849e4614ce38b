//! Shared utilities for use cases.
//!
//! Cancellation checking and cancellable collaborator calls.

use crate::use_cases::run_turn::TurnError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(TurnError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), TurnError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(TurnError::Cancelled);
    }
    Ok(())
}

/// Await `future`, racing it against the cancellation token if one is set.
///
/// On cancellation the in-flight future is dropped.
pub(crate) async fn run_cancellable<F: Future>(
    token: &Option<CancellationToken>,
    future: F,
) -> Result<F::Output, TurnError> {
    check_cancelled(token)?;

    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(TurnError::Cancelled),
            output = future => Ok(output),
        },
        None => Ok(future.await),
    }
}
