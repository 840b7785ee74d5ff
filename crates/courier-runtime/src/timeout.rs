//! Deadline resolution and bounded execution of transport calls.

use crate::error::CourierError;
use chrono::Duration;
use std::future::Future;

#[cfg(test)]
#[path = "timeout_tests.rs"]
mod tests;

/// Resolve the effective deadline for one call
///
/// A set call-level timeout wins; an unset one falls back to the client
/// default. Zero at both levels means no deadline.
pub fn resolve_timeout(call_timeout: Duration, client_default: Duration) -> Duration {
    if call_timeout.is_zero() {
        client_default
    } else {
        call_timeout
    }
}

/// Run a transport call under the resolved deadline
///
/// A zero timeout runs the call unmodified: it can block for as long as the
/// transport allows, bounded only by whatever deadline the caller's own task
/// carries. A negative timeout is a deadline that has already expired; the
/// call fails with a timeout error before reaching the transport.
/// Cancellation propagates the native way, by dropping the returned future.
pub async fn bounded<T, F>(timeout: Duration, call: F) -> Result<T, CourierError>
where
    F: Future<Output = Result<T, CourierError>>,
{
    if timeout.is_zero() {
        return call.await;
    }

    let limit = match timeout.to_std() {
        Ok(limit) => limit,
        Err(_) => return Err(CourierError::Timeout { duration: timeout }),
    };

    match tokio::time::timeout(limit, call).await {
        Ok(outcome) => outcome,
        Err(_) => Err(CourierError::Timeout { duration: timeout }),
    }
}
