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

//! The delay between attempts in a [retry loop][crate::retry_loop].
//!
//! Creating and deleting buckets is rate limited, retrying right away only
//! makes things worse. A [BackoffPolicy] decides how long to wait after each
//! failed attempt.
//!
//! # Example
//! ```
//! # use vision_gax::backoff_policy::BackoffPolicy;
//! # use vision_gax::exponential_backoff::ExponentialBackoffBuilder;
//! use std::time::Duration;
//! use tokio::time::Instant;
//!
//! let policy = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_secs(1))
//!     .with_maximum_delay(Duration::from_secs(32))
//!     .clamp();
//! let delay = policy.on_failure(Instant::now(), 1);
//! assert!(delay <= Duration::from_secs(1), "{delay:?}");
//! ```

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Computes the delay after a failed attempt.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns how long to wait before the next attempt.
    ///
    /// `attempt_count` includes the attempt that just failed, so it is at
    /// least 1.
    fn on_failure(&self, loop_start: Instant, attempt_count: u32) -> Duration;
}

/// Holds a [BackoffPolicy] in [ClientConfig][crate::options::ClientConfig]
/// and [RequestOptions][crate::options::RequestOptions].
#[derive(Clone)]
pub struct BackoffPolicyArg(pub(crate) Arc<dyn BackoffPolicy>);

impl<T: BackoffPolicy + 'static> From<T> for BackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}
