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

//! Test fixtures: local files and the objects uploaded from them.

use crate::{Harness, Result};
use anyhow::Context;
use std::path::PathBuf;
use vision_test_utils::cleanup::{CleanupRegistry, Resource};
use vision_test_utils::runtime_config::data_file;

/// An image with a single, well-known logo.
pub const LOGO_FILE: &str = "logo.png";
/// An image with faces, used as a product reference image.
pub const FACE_FILE: &str = "faces.jpg";
/// A single page PDF containing the text `test text`.
pub const PDF_FILE: &str = "pdf_test.pdf";

/// The path of a fixture file.
pub fn path(fixture: &str) -> PathBuf {
    data_file(fixture)
}

/// Reads the contents of a fixture file.
pub async fn read(fixture: &str) -> Result<bytes::Bytes> {
    let path = path(fixture);
    let contents = tokio::fs::read(&path)
        .await
        .with_context(|| format!("cannot read fixture {}", path.display()))?;
    Ok(bytes::Bytes::from(contents))
}

/// Uploads a fixture file to the suite bucket and registers it for cleanup.
///
/// Returns the `gs://` URI of the new object.
pub async fn upload(
    harness: &Harness,
    registry: &mut CleanupRegistry,
    object: &str,
    fixture: &str,
    content_type: &str,
) -> Result<String> {
    let contents = read(fixture).await?;
    upload_bytes(harness, registry, object, contents, content_type).await
}

/// Uploads `contents` to the suite bucket and registers the object for
/// cleanup.
pub async fn upload_bytes<B>(
    harness: &Harness,
    registry: &mut CleanupRegistry,
    object: &str,
    contents: B,
    content_type: &str,
) -> Result<String>
where
    B: Into<bytes::Bytes>,
{
    let uploaded = harness
        .storage
        .upload_object(&harness.bucket, object, contents, content_type)
        .await?;
    tracing::info!("uploaded {}", uploaded.gs_uri());
    registry.register(Resource::blob(&harness.bucket, object));
    Ok(harness.gs_uri(object))
}

/// Downloads and parses the only output file written under `prefix`.
///
/// The asynchronous annotation methods write their results as JSON files in
/// the destination prefix. The tests send small batches, so there should be
/// exactly one file.
///
/// Object listings match prefixes as plain strings. The prefix must end in
/// `/`, otherwise it may also match the input objects of the test case.
pub async fn single_output<T>(
    harness: &Harness,
    registry: &mut CleanupRegistry,
    prefix: &str,
) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    anyhow::ensure!(
        prefix.ends_with('/'),
        "output prefix {prefix} should end with '/'"
    );
    let mut names = Vec::new();
    let mut objects = harness.storage.list_objects(&harness.bucket, prefix);
    while let Some(object) = objects.next().await {
        let object = object?;
        registry.register(Resource::blob(&harness.bucket, &object.name));
        names.push(object.name);
    }
    anyhow::ensure!(
        names.len() == 1,
        "expected a single output file under {prefix}, found {names:?}"
    );
    let contents = harness
        .storage
        .download_object(&harness.bucket, &names[0])
        .await?;
    let output = serde_json::from_slice(&contents)
        .with_context(|| format!("cannot parse output file {}", names[0]))?;
    Ok(output)
}
