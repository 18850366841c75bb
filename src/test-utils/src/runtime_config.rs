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

//! Runtime settings for the system tests, read from the environment.

use anyhow::Result;
use std::path::PathBuf;

const PROJECT_VAR: &str = "PROJECT_ID";
const FALLBACK_PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
const LOCATION_VAR: &str = "VISION_TEST_LOCATION";
const DATA_DIR_VAR: &str = "VISION_TEST_DATA_DIR";
const DEFAULT_LOCATION: &str = "us-west1";

/// Returns the project id used for the integration tests.
///
/// Reads `PROJECT_ID`, and falls back to `GOOGLE_CLOUD_PROJECT`.
pub fn project_id() -> Result<String> {
    std::env::var(PROJECT_VAR)
        .or_else(|_| std::env::var(FALLBACK_PROJECT_VAR))
        .map_err(|e| {
            anyhow::anyhow!("neither {PROJECT_VAR} nor {FALLBACK_PROJECT_VAR} is set: {e}")
        })
}

/// Returns the location for Product Search resources.
pub fn location_id() -> String {
    std::env::var(LOCATION_VAR)
        .ok()
        .unwrap_or(DEFAULT_LOCATION.to_string())
}

/// Returns the directory containing the test images and documents.
///
/// Defaults to `data` under the current working directory.
pub fn data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Returns the path of a fixture file in [data_dir].
pub fn data_file(name: &str) -> PathBuf {
    data_dir().join(name)
}
