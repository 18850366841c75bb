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

//! Handling of path parameters.
//!
//! The service clients substitute resource names into the request path. A
//! missing or malformed resource name cannot be sent, and the clients return
//! a binding error instead.

use crate::error::Error as GaxError;

/// Checks if a resource name matches a path template.
///
/// The template is a sequence of `/` separated segments. A `*` segment
/// matches any single non-empty segment, every other segment must match
/// literally.
///
/// # Example
/// ```
/// # use vision_gax::path_parameter::try_match;
/// let p = try_match("projects/my-project/locations/us-west1", "projects/*/locations/*");
/// assert_eq!(p, Some("projects/my-project/locations/us-west1"));
/// assert_eq!(try_match("projects/my-project", "projects/*/locations/*"), None);
/// ```
pub fn try_match<'a>(value: &'a str, template: &str) -> Option<&'a str> {
    let mut segments = value.split('/');
    for expected in template.split('/') {
        let got = segments.next()?;
        let ok = match expected {
            "*" => !got.is_empty(),
            literal => got == literal,
        };
        if !ok {
            return None;
        }
    }
    match segments.next() {
        None => Some(value),
        Some(_) => None,
    }
}

/// Returns the resource name if it matches `template`, a binding error
/// otherwise.
pub fn required<'a>(value: &'a str, field: &str, template: &str) -> crate::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(field));
    }
    try_match(value, template).ok_or_else(|| {
        GaxError::binding(Error::TemplateMismatch {
            field: field.to_string(),
            value: value.to_string(),
            template: template.to_string(),
        })
    })
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("parameter {field}={value} does not match the template {template}")]
    TemplateMismatch {
        field: String,
        value: String,
        template: String,
    },
}

pub fn missing(name: &str) -> GaxError {
    GaxError::binding(Error::MissingRequiredParameter(name.to_string()))
}
