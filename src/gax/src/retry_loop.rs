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

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::loop_state::LoopState;
use super::retry_policy::RetryPolicy;
use std::sync::Arc;
use tokio::time::Instant;

/// Runs the retry loop for a given function.
///
/// This function calls `inner` until it succeeds, or until the retry policy
/// stops the loop. The policy stops the loop on permanent errors, and when
/// its budget (attempts or elapsed time) is exhausted. In both cases the last
/// error is returned.
///
/// In between calls the function waits the amount of time prescribed by the
/// backoff policy, using `sleep` to implement the wait.
pub async fn retry_loop<F, S, Response>(
    inner: F,
    sleep: S,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFn() -> Result<Response> + Send,
    S: AsyncFn(std::time::Duration) -> () + Send,
{
    let loop_start = Instant::now();
    let mut attempt_count = 0;
    loop {
        attempt_count += 1;
        match inner().await {
            Ok(r) => return Ok(r),
            Err(e) => {
                let flow = retry_policy.on_error(loop_start, attempt_count, e);
                match flow {
                    LoopState::Permanent(e) | LoopState::Exhausted(e) => return Err(e),
                    LoopState::Continue(e) => {
                        let delay = backoff_policy.on_failure(loop_start, attempt_count);
                        tracing::warn!(attempt_count, ?delay, "retrying after error: {e}");
                        sleep(delay).await;
                    }
                }
            }
        };
    }
}
