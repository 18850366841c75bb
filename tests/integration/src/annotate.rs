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

//! System tests for the `ImageAnnotator` client.

use crate::fixtures::{self, LOGO_FILE, PDF_FILE};
use crate::{Harness, Result};
use lro::Poller;
use vision::model::{
    self, AnnotateImageRequest, AsyncAnnotateFileRequest, GcsSource, Image, InputConfig,
    OutputConfig, feature::Type,
};
use vision_test_utils::cleanup::CleanupRegistry;

/// Runs all the `ImageAnnotator` test cases in a new suite.
pub async fn run() -> Result<()> {
    let harness = Harness::setup().await?;
    let results = [
        ("detect_logos_content", detect_logos_content(&harness).await),
        (
            "detect_logos_file_handle",
            detect_logos_file_handle(&harness).await,
        ),
        ("detect_logos_filename", detect_logos_filename(&harness).await),
        ("detect_logos_gcs", detect_logos_gcs(&harness).await),
        ("detect_logos_async", detect_logos_async(&harness).await),
        (
            "async_batch_annotate_files",
            async_batch_annotate_files(&harness).await,
        ),
    ];
    let teardown = harness.teardown().await;
    crate::first_failure(results)?;
    teardown
}

with_cleanup!(detect_logos_gcs, detect_logos_gcs_impl);
with_cleanup!(detect_logos_async, detect_logos_async_impl);
with_cleanup!(async_batch_annotate_files, async_batch_annotate_files_impl);

pub async fn detect_logos_content(harness: &Harness) -> Result<()> {
    let content = fixtures::read(LOGO_FILE).await?;
    let response = harness
        .annotator
        .logo_detection(Image::from_bytes(content))
        .await?;
    check_logo(&response)
}

pub async fn detect_logos_file_handle(harness: &Harness) -> Result<()> {
    let file = tokio::fs::File::open(fixtures::path(LOGO_FILE)).await?;
    let image = Image::from_reader(file).await?;
    let response = harness.annotator.logo_detection(image).await?;
    check_logo(&response)
}

pub async fn detect_logos_filename(harness: &Harness) -> Result<()> {
    let image = Image::from_filename(fixtures::path(LOGO_FILE)).await?;
    let response = harness.annotator.logo_detection(image).await?;
    check_logo(&response)
}

async fn detect_logos_gcs_impl(harness: &Harness, registry: &mut CleanupRegistry) -> Result<()> {
    let uri = fixtures::upload(harness, registry, "logo.png", LOGO_FILE, "image/png").await?;
    let response = harness
        .annotator
        .logo_detection(Image::from_uri(uri))
        .await?;
    check_logo(&response)
}

async fn detect_logos_async_impl(
    harness: &Harness,
    registry: &mut CleanupRegistry,
) -> Result<()> {
    const OUTPUT_PREFIX: &str = "test_detect_logos_async/";
    let uri = fixtures::upload(harness, registry, "logo_async.png", LOGO_FILE, "image/png").await?;
    let request = AnnotateImageRequest::new()
        .set_image(Image::from_uri(uri))
        .set_features([Type::LogoDetection]);

    tracing::info!("start async_batch_annotate_images() LRO and poll it to completion");
    let response = harness
        .annotator
        .async_batch_annotate_images()
        .set_requests([request])
        .set_output_config(OutputConfig::gcs_prefix(harness.gs_uri(OUTPUT_PREFIX)))
        .poller()
        .until_done()
        .await?;
    tracing::info!("async_batch_annotate_images() LRO finished: {response:?}");

    let output: model::BatchAnnotateImagesResponse =
        fixtures::single_output(harness, registry, OUTPUT_PREFIX).await?;
    anyhow::ensure!(output.responses.len() == 1, "{output:?}");
    check_logo(&output.responses[0])
}

async fn async_batch_annotate_files_impl(
    harness: &Harness,
    registry: &mut CleanupRegistry,
) -> Result<()> {
    const OUTPUT_PREFIX: &str = "test_async_batch_annotate_files/";
    const EXPECTED_TEXT: &str = "test text";
    let uri = fixtures::upload(
        harness,
        registry,
        "async_batch_annotate_files.pdf",
        PDF_FILE,
        "application/pdf",
    )
    .await?;
    let request = AsyncAnnotateFileRequest::new()
        .set_input_config(
            InputConfig::new()
                .set_gcs_source(GcsSource::new().set_uri(uri))
                .set_mime_type("application/pdf"),
        )
        .set_features([Type::DocumentTextDetection])
        .set_output_config(OutputConfig::gcs_prefix(harness.gs_uri(OUTPUT_PREFIX)));

    tracing::info!("start async_batch_annotate_files() LRO and poll it to completion");
    let response = harness
        .annotator
        .async_batch_annotate_files()
        .set_requests([request])
        .poller()
        .until_done()
        .await?;
    tracing::info!("async_batch_annotate_files() LRO finished: {response:?}");

    let output: model::AnnotateFileResponse =
        fixtures::single_output(harness, registry, OUTPUT_PREFIX).await?;
    anyhow::ensure!(output.responses.len() == 1, "{output:?}");
    let text = output.responses[0]
        .full_text_annotation
        .as_ref()
        .map(|a| a.text.as_str())
        .unwrap_or_default();
    anyhow::ensure!(
        text.contains(EXPECTED_TEXT),
        "'{EXPECTED_TEXT}' not in '{text}'"
    );
    Ok(())
}

/// The logo fixture contains exactly one logo.
fn check_logo(response: &model::AnnotateImageResponse) -> Result<()> {
    anyhow::ensure!(response.error.is_none(), "{response:?}");
    anyhow::ensure!(response.logo_annotations.len() == 1, "{response:?}");
    anyhow::ensure!(
        response.logo_annotations[0].description == "google",
        "{response:?}"
    );
    Ok(())
}

