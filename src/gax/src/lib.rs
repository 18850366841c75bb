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

//! Google APIs helpers for the Cloud Vision system tests.
//!
//! This crate contains the types and functions shared by the service clients
//! in this workspace: the error type, client configuration, the JSON-over-HTTP
//! transport, retry and polling policies, and list pagination.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the clients.
pub mod error;

/// Defines some types and traits to convert and use List RPCs as a Stream.
pub mod paginator;

/// The JSON-over-HTTP client used by the service clients.
pub mod http_client;

pub mod backoff_policy;
pub mod client_builder;
pub mod exponential_backoff;
pub mod loop_state;
pub mod options;
pub mod path_parameter;
pub mod polling_backoff_policy;
pub mod polling_error_policy;
pub mod retry_loop;
pub mod retry_policy;
