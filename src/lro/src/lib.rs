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

//! Types and functions to make long-running operations (LROs) easier to use.
//!
//! Some Vision methods start a job in the service and return an operation
//! handle immediately. The job may take minutes to complete. The clients
//! return a [Poller] for these methods. Most tests simply wait for the final
//! result:
//!
//! ```no_run
//! # use vision_lro::{Poller, Result};
//! async fn wait<P: Poller<String, ()>>(poller: P) -> Result<String> {
//!     poller.until_done().await
//! }
//! ```
//!
//! The loop in [until_done][Poller::until_done] checks the status of the
//! operation, and between checks sleeps for the period returned by the
//! polling backoff policy, one second by default. It stops when the operation
//! completes, or when the polling error policy gives up. By default the
//! policy gives up after 60 seconds, returning an error where
//! [is_timeout()][Error::is_timeout] is true. The error source is a
//! [PollingTimeout] with the operation name and the elapsed time.
//!
//! A completed operation may still report failures for individual items
//! inside its result. The poller does not inspect the result, callers must.

pub use gax::Result;
pub use gax::error::Error;
pub use gax::polling_backoff_policy::PollingBackoffPolicy;
pub use gax::polling_error_policy::{PollingErrorPolicy, PollingTimeout};
use std::future::Future;
use std::sync::Arc;
use tokio::time::Instant;

pub mod model;

mod details;
pub use details::Operation;

/// The result of polling a Long-Running Operation (LRO).
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the LRO completes
///   successfully.
/// * `M` - the metadata type. While operations are in progress the LRO may
///   return values of this type.
#[derive(Debug)]
pub enum PollingResult<R, M> {
    /// The operation is still in progress.
    InProgress(Option<M>),
    /// The operation completed. This includes the result.
    ///
    /// The result is an error if the operation failed, if checking its status
    /// failed and the polling error policy stopped the loop, or if the polling
    /// loop reached its deadline.
    Completed(Result<R>),
    /// An error trying to poll the LRO.
    ///
    /// Only returned when the polling error policy decides the error is
    /// recoverable. The next call to [poll][Poller::poll] checks the status
    /// again.
    PollingError(Error),
}

mod sealed {
    pub trait Poller {}
}

/// The trait implemented by LRO helpers.
///
/// # Parameters
/// * `R` - the response type, that is, the type of response included when the
///   long-running operation completes successfully.
/// * `M` - the metadata type, that is, the type returned by the service when
///   the long-running operation is still in progress.
pub trait Poller<R, M>: Send + sealed::Poller {
    /// Query the current status of the long-running operation.
    ///
    /// The first call starts the operation. Returns `None` once a
    /// [Completed][PollingResult::Completed] result was returned.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R, M>>> + Send;

    /// Poll the long-running operation until it completes.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send;

    /// Convert a poller to a [futures::Stream].
    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Unpin;
}

/// Creates a new `impl Poller<R, M>` from the closures provided by a client.
///
/// `start` starts the operation, and `query` retrieves the operation status
/// given its name. Both should have captured any stubs and request options.
pub fn new_poller<R, M, S, SF, Q, QF>(
    polling_error_policy: Arc<dyn PollingErrorPolicy>,
    polling_backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: S,
    query: Q,
) -> impl Poller<R, M>
where
    R: serde::de::DeserializeOwned + Send,
    M: serde::de::DeserializeOwned + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
{
    PollerImpl::new(polling_error_policy, polling_backoff_policy, start, query)
}

/// An implementation of `Poller` based on closures.
///
/// # Parameters
/// * `S` - the start closure. Starts a LRO. This implementation expects that
///   all necessary parameters, and request options, are captured by this
///   function.
/// * `Q` - the query closure. Queries the status of the LRO created by `start`.
///   It receives the name of the operation as its only input parameter.
struct PollerImpl<S, Q> {
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: Option<S>,
    query: Q,
    operation: Option<String>,
    loop_start: Instant,
    attempt_count: u32,
}

impl<S, Q> PollerImpl<S, Q> {
    fn new(
        error_policy: Arc<dyn PollingErrorPolicy>,
        backoff_policy: Arc<dyn PollingBackoffPolicy>,
        start: S,
        query: Q,
    ) -> Self {
        Self {
            error_policy,
            backoff_policy,
            start: Some(start),
            query,
            operation: None,
            loop_start: Instant::now(),
            attempt_count: 0,
        }
    }
}

impl<S, Q> sealed::Poller for PollerImpl<S, Q> {}

impl<R, M, S, SF, Q, QF> Poller<R, M> for PollerImpl<S, Q>
where
    R: serde::de::DeserializeOwned + Send,
    M: serde::de::DeserializeOwned + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
{
    async fn poll(&mut self) -> Option<PollingResult<R, M>> {
        if let Some(start) = self.start.take() {
            self.loop_start = Instant::now();
            let result = start().await;
            let (op, poll) = details::handle_start(result);
            if let Some(name) = &op {
                tracing::info!(operation = %name, "operation started");
            }
            self.operation = op;
            return Some(poll);
        }
        if let Some(name) = self.operation.take() {
            self.attempt_count += 1;
            let query = self.query.clone();
            let result = query(name.clone()).await;
            let (op, poll) = details::handle_poll(
                self.error_policy.clone(),
                self.loop_start,
                self.attempt_count,
                name,
                result,
            );
            self.operation = op;
            return Some(poll);
        }
        None
    }

    async fn until_done(mut self) -> Result<R> {
        while let Some(p) = self.poll().await {
            match p {
                // Return, the operation completed or the polling policy is
                // exhausted.
                PollingResult::Completed(r) => {
                    tracing::debug!(
                        attempt_count = self.attempt_count,
                        elapsed = ?self.loop_start.elapsed(),
                        ok = r.is_ok(),
                        "polling loop finished"
                    );
                    return r;
                }
                PollingResult::InProgress(_) => (),
                PollingResult::PollingError(e) => {
                    tracing::warn!(
                        attempt_count = self.attempt_count,
                        "error polling operation: {e}"
                    );
                }
            }
            let wait = self
                .backoff_policy
                .wait_period(self.loop_start, self.attempt_count.max(1));
            tokio::time::sleep(wait).await;
        }
        // `poll()` only returns `None` after it returned
        // `PollingResult::Completed`, and the loop returns on that branch.
        unreachable!("loop should exit via the `Completed` branch vs. this line");
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Unpin {
        use futures::stream::unfold;
        Box::pin(unfold(Some(self), move |state| async move {
            if let Some(mut poller) = state {
                if let Some(pr) = poller.poll().await {
                    return Some((pr, Some(poller)));
                }
            };
            None
        }))
    }
}
