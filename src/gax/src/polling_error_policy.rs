// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the types for polling error policies.
//!
//! Polling loops need to (1) decide what to do when a status check fails, and
//! (2) bound the total time spent waiting for an operation.
//!
//! The default policy propagates any failed status check to the caller, and
//! gives up with a [timeout][crate::error::Error::is_timeout] error once the
//! loop has been running for 60 seconds.
//!
//! # Example
//! ```
//! # use vision_gax::polling_error_policy::*;
//! use std::time::Duration;
//! // Wait at most 5 minutes for the operation to complete.
//! let policy = PropagateErrors.with_time_limit(Duration::from_secs(5 * 60));
//! ```

use crate::error::Error;
use crate::loop_state::LoopState;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// The default maximum time waiting for an operation to complete.
pub const DEFAULT_MAXIMUM_WAIT: Duration = Duration::from_secs(60);

/// Determines how errors are handled in the polling loop.
///
/// Implementations of this trait determine if polling errors may resolve in
/// future attempts, and for how long the polling loop may continue.
pub trait PollingErrorPolicy: Send + Sync + std::fmt::Debug {
    /// Query the polling policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the polling loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. As this method is called after the operation starts, it is
    ///   always non-zero.
    /// * `error` - the last error when attempting the request.
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> LoopState;

    /// Called when the operation is successfully polled, but it is still in
    /// progress.
    ///
    /// Returning an error stops the loop and reports that error.
    fn on_in_progress(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        _operation_name: &str,
    ) -> Option<Error> {
        None
    }
}

/// A helper type to use [PollingErrorPolicy] in client options.
#[derive(Clone)]
pub struct PollingErrorPolicyArg(pub(crate) Arc<dyn PollingErrorPolicy>);

impl<T> std::convert::From<T> for PollingErrorPolicyArg
where
    T: PollingErrorPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn PollingErrorPolicy>> for PollingErrorPolicyArg {
    fn from(value: Arc<dyn PollingErrorPolicy>) -> Self {
        Self(value)
    }
}

impl From<PollingErrorPolicyArg> for Arc<dyn PollingErrorPolicy> {
    fn from(value: PollingErrorPolicyArg) -> Arc<dyn PollingErrorPolicy> {
        value.0
    }
}

/// Extension trait for [PollingErrorPolicy].
pub trait PollingErrorPolicyExt: PollingErrorPolicy + Sized {
    /// Decorate a [PollingErrorPolicy] to limit the total elapsed time in the
    /// polling loop.
    ///
    /// Once the loop has been running for at least `maximum_duration`, the
    /// next in-progress status stops the loop with a timeout error.
    ///
    /// # Example
    /// ```
    /// # use vision_gax::polling_error_policy::*;
    /// use std::time::Duration;
    /// use tokio::time::Instant;
    /// let policy = PropagateErrors.with_time_limit(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// let error = policy.on_in_progress(start, 5, "operations/123");
    /// assert!(error.is_some_and(|e| e.is_timeout()));
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [PollingErrorPolicy] to limit the number of polls.
    ///
    /// # Example
    /// ```
    /// # use vision_gax::polling_error_policy::*;
    /// use tokio::time::Instant;
    /// let policy = PropagateErrors.with_attempt_limit(3);
    /// assert!(policy.on_in_progress(Instant::now(), 1, "operations/123").is_none());
    /// let error = policy.on_in_progress(Instant::now(), 3, "operations/123");
    /// assert!(error.is_some_and(|e| e.is_exhausted()));
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: PollingErrorPolicy> PollingErrorPolicyExt for T {}

/// Stops the polling loop on the first failed status check.
///
/// Transport and service errors while checking the status of an operation
/// are not retried. They are reported to the caller as-is.
#[derive(Clone, Debug)]
pub struct PropagateErrors;

impl PollingErrorPolicy for PropagateErrors {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> LoopState {
        LoopState::Permanent(error)
    }
}

/// Keeps polling after any failed status check.
///
/// This policy should be decorated with [LimitedElapsedTime] or
/// [LimitedAttemptCount], otherwise a persistent error polls forever.
#[derive(Clone, Debug)]
pub struct AlwaysContinue;

impl PollingErrorPolicy for AlwaysContinue {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> LoopState {
        LoopState::Continue(error)
    }
}

/// A polling policy decorator that limits the total time in the polling loop.
///
/// While the time spent in the polling loop (including time waiting between
/// polls) is less than the prescribed duration, the policy returns the results
/// of the inner policy. After that time:
/// - `on_error()` returns [Exhausted][LoopState::Exhausted] where the inner
///   policy returns [Continue][LoopState::Continue].
/// - `on_in_progress()` returns a [timeout][Error::is_timeout] error, with a
///   [PollingTimeout] as its source.
///
/// The loop never times out early: the deadline triggers at the first status
/// check at or after `loop_start + maximum_duration`. As the loop checks once
/// per polling period, the timeout is reported at most one period late.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = PropagateErrors>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: PropagateErrors,
            maximum_duration,
        }
    }
}

impl Default for LimitedElapsedTime {
    fn default() -> Self {
        Self::new(DEFAULT_MAXIMUM_WAIT)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn in_progress_impl(&self, start: Instant, operation_name: &str) -> Option<Error> {
        let elapsed = Instant::now().saturating_duration_since(start);
        if elapsed < self.maximum_duration {
            return None;
        }
        Some(Error::timeout(PollingTimeout::new(
            operation_name,
            elapsed,
            self.maximum_duration,
        )))
    }
}

impl<P> PollingErrorPolicy for LimitedElapsedTime<P>
where
    P: PollingErrorPolicy + 'static,
{
    fn on_error(&self, start: Instant, count: u32, error: Error) -> LoopState {
        match self.inner.on_error(start, count, error) {
            LoopState::Continue(e) if Instant::now() >= start + self.maximum_duration => {
                LoopState::Exhausted(e)
            }
            state => state,
        }
    }

    fn on_in_progress(&self, start: Instant, count: u32, operation_name: &str) -> Option<Error> {
        self.inner
            .on_in_progress(start, count, operation_name)
            .or_else(|| self.in_progress_impl(start, operation_name))
    }
}

/// A polling policy decorator that limits the number of status checks.
///
/// The policy passes through the results from the inner policy as long as
/// `attempt_count < maximum_attempts`. Once the maximum number of attempts is
/// reached, an in-progress operation stops the loop with an
/// [exhausted][Error::is_exhausted] error.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = PropagateErrors>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: PropagateErrors,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> PollingErrorPolicy for LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    fn on_error(&self, start: Instant, count: u32, error: Error) -> LoopState {
        match self.inner.on_error(start, count, error) {
            LoopState::Continue(e) if count >= self.maximum_attempts => LoopState::Exhausted(e),
            state => state,
        }
    }

    fn on_in_progress(&self, start: Instant, count: u32, operation_name: &str) -> Option<Error> {
        self.inner
            .on_in_progress(start, count, operation_name)
            .or_else(|| {
                (count >= self.maximum_attempts).then(|| {
                    Error::exhausted(format!(
                        "polling loop for {operation_name} exhausted after {count} attempts, limit is {}",
                        self.maximum_attempts
                    ))
                })
            })
    }
}

/// The operation did not complete before the polling deadline.
///
/// This is the [source][std::error::Error::source] of the error returned by
/// [LimitedElapsedTime] when the deadline expires.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error(
    "operation {operation} did not complete after {elapsed:?}, the maximum wait is {maximum_wait:?}"
)]
pub struct PollingTimeout {
    operation: String,
    elapsed: Duration,
    maximum_wait: Duration,
}

impl PollingTimeout {
    pub fn new<T: Into<String>>(operation: T, elapsed: Duration, maximum_wait: Duration) -> Self {
        Self {
            operation: operation.into(),
            elapsed,
            maximum_wait,
        }
    }

    /// The name of the operation that did not complete.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// How long the polling loop waited.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The configured maximum wait.
    pub fn maximum_wait(&self) -> Duration {
        self.maximum_wait
    }
}
