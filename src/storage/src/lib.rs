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

//! A minimal Cloud Storage client.
//!
//! The Cloud Vision system tests stage their fixtures in a bucket: images
//! used as reference images, CSV files for bulk imports, and the outputs of
//! asynchronous batch annotation. This crate implements the few JSON API
//! calls needed for that.

pub use gax::Result;
pub use gax::error::Error;

pub mod client;
pub mod model;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://storage.googleapis.com";
