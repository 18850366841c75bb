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

//! Simplifies the implementation of `PollerImpl`

use super::*;
use gax::loop_state::LoopState;
use std::marker::PhantomData;
use tokio::time::Instant;

/// A wrapper around [model::Operation] with typed responses.
///
/// The clients return this type from the closures used to build a poller.
/// Applications should have no need to create or use this struct.
#[derive(Debug)]
pub struct Operation<R, M> {
    inner: model::Operation,
    response: PhantomData<R>,
    metadata: PhantomData<M>,
}

impl<R, M> Operation<R, M> {
    pub fn new(inner: model::Operation) -> Self {
        Self {
            inner,
            response: PhantomData,
            metadata: PhantomData,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.inner.name
    }
    pub(crate) fn done(&self) -> bool {
        self.inner.done
    }
    fn metadata(&self) -> Option<&serde_json::Value> {
        self.inner.metadata.as_ref()
    }
    fn response(&self) -> Option<&serde_json::Value> {
        self.inner.response.as_ref()
    }
    fn error(&self) -> Option<&gax::error::rpc::Status> {
        self.inner.error.as_ref()
    }
}

impl<R, M> From<model::Operation> for Operation<R, M> {
    fn from(value: model::Operation) -> Self {
        Self::new(value)
    }
}

pub(crate) fn handle_start<R, M>(
    result: Result<Operation<R, M>>,
) -> (Option<String>, PollingResult<R, M>)
where
    R: serde::de::DeserializeOwned,
    M: serde::de::DeserializeOwned,
{
    match result {
        Err(e) => (None, PollingResult::Completed(Err(e))),
        Ok(op) => handle_common(op),
    }
}

pub(crate) fn handle_poll<R, M>(
    error_policy: Arc<dyn PollingErrorPolicy>,
    loop_start: Instant,
    attempt_count: u32,
    operation_name: String,
    result: Result<Operation<R, M>>,
) -> (Option<String>, PollingResult<R, M>)
where
    R: serde::de::DeserializeOwned,
    M: serde::de::DeserializeOwned,
{
    match result {
        Err(e) => {
            let state = error_policy.on_error(loop_start, attempt_count, e);
            handle_polling_error(state, operation_name)
        }
        Ok(op) => {
            let (name, result) = handle_common(op);
            match &result {
                PollingResult::InProgress(_) => {
                    match error_policy.on_in_progress(loop_start, attempt_count, &operation_name) {
                        None => (name, result),
                        Some(e) => (None, PollingResult::Completed(Err(e))),
                    }
                }
                _ => (name, result),
            }
        }
    }
}

fn handle_polling_error<R, M>(
    state: LoopState,
    operation_name: String,
) -> (Option<String>, PollingResult<R, M>) {
    match state {
        LoopState::Continue(e) => (Some(operation_name), PollingResult::PollingError(e)),
        LoopState::Exhausted(e) | LoopState::Permanent(e) => {
            (None, PollingResult::Completed(Err(e)))
        }
    }
}

fn handle_common<R, M>(op: Operation<R, M>) -> (Option<String>, PollingResult<R, M>)
where
    R: serde::de::DeserializeOwned,
    M: serde::de::DeserializeOwned,
{
    if op.done() {
        let result = as_result(op);
        return (None, PollingResult::Completed(result));
    }
    let name = op.name().to_string();
    let metadata = as_metadata(op);
    (Some(name), PollingResult::InProgress(metadata))
}

fn as_result<R, M>(op: Operation<R, M>) -> Result<R>
where
    R: serde::de::DeserializeOwned,
{
    // A done operation must set either the response *or* the error. Setting
    // neither does not satisfy the invariants of the receiving type.
    match (op.response(), op.error()) {
        (_, Some(e)) => Err(Error::service(e.clone())),
        (Some(v), None) => R::deserialize(v).map_err(Error::deser),
        (None, None) => Err(Error::deser("neither result nor error set in LRO result")),
    }
}

fn as_metadata<R, M>(op: Operation<R, M>) -> Option<M>
where
    M: serde::de::DeserializeOwned,
{
    op.metadata().and_then(|v| M::deserialize(v).ok())
}
