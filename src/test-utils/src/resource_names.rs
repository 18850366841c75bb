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

//! Helper functions and types to generate random resource names.

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};
use std::time::{SystemTime, UNIX_EPOCH};

/// A common prefix for bucket names.
pub const PREFIX: &str = "vision-testing-";

const BUCKET_ID_LENGTH: usize = 63;

const SUFFIX_LENGTH: usize = 8;

/// Generate a random bucket id.
pub fn random_bucket_id() -> String {
    let id = LowercaseAlphanumeric.random_string(BUCKET_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

/// Returns a suffix to make resource ids unique across test runs.
///
/// The suffix starts with `delimiter`, followed by the current time in
/// milliseconds, the delimiter again, and a few random characters. Tests use
/// it as `format!("set{}", unique_resource_id("_"))`.
///
/// # Example
/// ```
/// use vision_test_utils::resource_names::unique_resource_id;
/// let id = format!("product{}", unique_resource_id("-"));
/// assert!(id.starts_with("product-"));
/// ```
pub fn unique_resource_id(delimiter: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let suffix = LowercaseAlphanumeric.random_string(SUFFIX_LENGTH);
    format!("{delimiter}{millis}{delimiter}{suffix}")
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sample a `u8`, uniformly distributed over ASCII lowercase letters and numbers: a-z and 0-9.
///
/// # Example
/// ```
/// use vision_test_utils::resource_names::LowercaseAlphanumeric;
/// let got: String = LowercaseAlphanumeric.random_string(32);
/// assert_eq!(got.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}
