// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixed-interval polling with a hard deadline.

use crate::error::{E2eError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, timeout_at, Instant};
use tracing::debug;

/// Poll `check` every `interval` until it yields a value or `timeout` elapses.
///
/// The check is always attempted at least once. An attempt still running
/// when the deadline passes is abandoned.
pub async fn poll_until<T, F, Fut>(
    timeout: Duration,
    interval: Duration,
    message: &str,
    mut check: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let start = Instant::now();
    let deadline = start + timeout;
    let mut attempt = 1u32;

    loop {
        if let Ok(Some(value)) = timeout_at(deadline, check()).await {
            debug!("Condition met after {} attempt(s)", attempt);
            return Ok(value);
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(E2eError::Timeout {
                elapsed: now - start,
                message: message.to_string(),
            });
        }

        debug!(
            "Attempt {} not satisfied, retrying in {:?}",
            attempt,
            interval.min(deadline - now)
        );
        sleep(interval.min(deadline - now)).await;
        attempt += 1;
    }
}

/// Poll a boolean check until it returns true
pub async fn eventually<F, Fut>(
    timeout: Duration,
    interval: Duration,
    message: &str,
    mut check: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    poll_until(timeout, interval, message, || {
        let attempt = check();
        async move { attempt.await.then_some(()) }
    })
    .await
}

/// Poll a fallible call until it succeeds, returning its value.
/// Errors from individual attempts only mean "not yet".
pub async fn eventually_ok<T, F, Fut>(
    timeout: Duration,
    interval: Duration,
    message: &str,
    mut call: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    poll_until(timeout, interval, message, || {
        let attempt = call();
        async move {
            match attempt.await {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!("Attempt failed: {}", e);
                    None
                }
            }
        }
    })
    .await
}
