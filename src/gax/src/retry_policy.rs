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

//! Defines the trait for retry policies and some common implementations.
//!
//! Most requests in this workspace are not retried: a failure surfaces to the
//! caller immediately. The exception are storage bucket lifecycle calls, where
//! the service rejects requests with `429 Too Many Requests` when bucket
//! creation is rate limited, and with `409 Conflict` when a bucket is deleted
//! while objects are still being removed. Those calls use a [RetryOnStatus]
//! policy, limited in the number of attempts.
//!
//! # Example
//! ```
//! # use vision_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = RetryOnStatus::rate_limited_or_conflict()
//!     .with_attempt_limit(6)
//!     .with_time_limit(Duration::from_secs(60));
//! ```

use crate::error::Error;
use crate::loop_state::LoopState;
use std::sync::Arc;
use tokio::time::Instant;

/// Determines how errors are handled in the retry loop.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts, including the initial
    ///   attempt. This method is called after the first attempt, so it is
    ///   always non-zero.
    /// * `error` - the last error when attempting the request.
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> LoopState;
}

/// A helper type to use [RetryPolicy] in client options.
#[derive(Clone)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy].
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// # Example
    /// ```
    /// # use vision_gax::retry_policy::*;
    /// # use vision_gax::error::Error;
    /// use std::time::Duration;
    /// use tokio::time::Instant;
    /// let policy = RetryOnStatus::rate_limited().with_time_limit(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// assert!(policy.on_error(start, 1, rate_limited()).is_exhausted());
    ///
    /// fn rate_limited() -> Error {
    ///     Error::http(429, http::HeaderMap::new(), bytes::Bytes::new())
    /// }
    /// ```
    fn with_time_limit(self, maximum_duration: std::time::Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// # Example
    /// ```
    /// # use vision_gax::retry_policy::*;
    /// # use vision_gax::error::Error;
    /// use tokio::time::Instant;
    /// let policy = RetryOnStatus::rate_limited().with_attempt_limit(3);
    /// assert!(policy.on_error(Instant::now(), 1, rate_limited()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, rate_limited()).is_exhausted());
    ///
    /// fn rate_limited() -> Error {
    ///     Error::http(429, http::HeaderMap::new(), bytes::Bytes::new())
    /// }
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// A retry policy that never retries.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> LoopState {
        LoopState::Permanent(error)
    }
}

/// Retries errors with specific HTTP status codes.
///
/// Any other error is treated as permanent. Including `429` in the list also
/// retries [RESOURCE_EXHAUSTED] service errors.
///
/// This policy should be decorated to limit the number of attempts or the
/// duration of the retry loop.
///
/// [RESOURCE_EXHAUSTED]: crate::error::rpc::Code::ResourceExhausted
#[derive(Clone, Debug)]
pub struct RetryOnStatus {
    status_codes: Vec<u16>,
}

impl RetryOnStatus {
    /// Creates a policy retrying the given HTTP status codes.
    pub fn new<I: IntoIterator<Item = u16>>(status_codes: I) -> Self {
        Self {
            status_codes: status_codes.into_iter().collect(),
        }
    }

    /// Retries `429 Too Many Requests`.
    pub fn rate_limited() -> Self {
        Self::new([429])
    }

    /// Retries `429 Too Many Requests` and `409 Conflict`.
    pub fn rate_limited_or_conflict() -> Self {
        Self::new([429, 409])
    }

    fn is_retryable(&self, error: &Error) -> bool {
        if error
            .http_status_code()
            .is_some_and(|c| self.status_codes.contains(&c))
        {
            return true;
        }
        self.status_codes.contains(&429) && error.is_rate_limited()
    }
}

impl RetryPolicy for RetryOnStatus {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> LoopState {
        if self.is_retryable(&error) {
            LoopState::Continue(error)
        } else {
            LoopState::Permanent(error)
        }
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// Before the deadline is reached the policy returns the result of the inner
/// policy. After the deadline it replaces any [Continue][LoopState::Continue]
/// with [Exhausted][LoopState::Exhausted].
#[derive(Debug)]
pub struct LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: std::time::Duration,
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: std::time::Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(&self, start: Instant, count: u32, error: Error) -> LoopState {
        match self.inner.on_error(start, count, error) {
            LoopState::Continue(e) if Instant::now() >= start + self.maximum_duration => {
                LoopState::Exhausted(e)
            }
            state => state,
        }
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// The policy passes through the results from the inner policy as long as
/// `attempt_count < maximum_attempts`. Once the maximum number of attempts is
/// reached it replaces any [Continue][LoopState::Continue] with
/// [Exhausted][LoopState::Exhausted].
#[derive(Debug)]
pub struct LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(&self, start: Instant, count: u32, error: Error) -> LoopState {
        match self.inner.on_error(start, count, error) {
            LoopState::Continue(e) if count >= self.maximum_attempts => LoopState::Exhausted(e),
            state => state,
        }
    }
}
