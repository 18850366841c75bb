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

//! Google Cloud Client Libraries for Rust - Cloud Vision API
//!
//! This crate contains traits, types, and functions to interact with the
//! [Cloud Vision API]. Most applications will use the structs defined in the
//! [client] module. More specifically:
//!
//! * [ImageAnnotator](client/struct.ImageAnnotator.html)
//! * [ProductSearch](client/struct.ProductSearch.html)
//!
//! [Cloud Vision API]: https://cloud.google.com/vision

pub mod model;

pub use gax::Result;
pub use gax::error::Error;

/// Request builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

/// Resource name templates.
pub mod path;

pub mod stub;

pub(crate) mod tracing;
pub(crate) mod transport;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com";
