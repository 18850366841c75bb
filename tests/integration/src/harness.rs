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

//! Suite-level setup and teardown.

use crate::Result;
use crate::cleanup::ClientDeleter;
use gax::polling_backoff_policy::FixedInterval;
use gax::polling_error_policy::{LimitedElapsedTime, PollingErrorPolicyExt, PropagateErrors};
use std::time::Duration;
use storage::client::Storage;
use vision::client::{ImageAnnotator, ProductSearch};
use vision_test_utils::cleanup::CleanupRegistry;
use vision_test_utils::resource_names::random_bucket_id;
use vision_test_utils::runtime_config::{location_id, project_id};

/// How long the tests wait for a long-running operation.
pub const LRO_DEADLINE: Duration = Duration::from_secs(60);
/// How long the tests wait between checks of a long-running operation.
pub const LRO_INTERVAL: Duration = Duration::from_secs(1);

/// The clients and the bucket shared by all the test cases in a suite.
#[derive(Debug)]
pub struct Harness {
    pub project_id: String,
    pub location_id: String,
    pub bucket: String,
    pub annotator: ImageAnnotator,
    pub product_search: ProductSearch,
    pub storage: Storage,
}

impl Harness {
    /// Creates the clients with the default configuration, and a bucket for
    /// the fixtures.
    pub async fn setup() -> Result<Self> {
        let annotator = ImageAnnotator::builder()
            .with_tracing()
            .with_polling_error_policy(lro_deadline())
            .with_polling_backoff_policy(FixedInterval::new(LRO_INTERVAL))
            .build()
            .await?;
        let product_search = ProductSearch::builder()
            .with_tracing()
            .with_polling_error_policy(lro_deadline())
            .with_polling_backoff_policy(FixedInterval::new(LRO_INTERVAL))
            .build()
            .await?;
        let storage = Storage::builder().build().await?;
        Self::with_clients(project_id()?, location_id(), annotator, product_search, storage).await
    }

    /// Creates the suite bucket using existing clients.
    pub async fn with_clients(
        project_id: String,
        location_id: String,
        annotator: ImageAnnotator,
        product_search: ProductSearch,
        storage: Storage,
    ) -> Result<Self> {
        let bucket = random_bucket_id();
        tracing::info!("creating suite bucket {bucket} in {project_id}");
        storage.create_bucket_with_retry(&project_id, &bucket).await?;
        Ok(Self {
            project_id,
            location_id,
            bucket,
            annotator,
            product_search,
            storage,
        })
    }

    /// Deletes the suite bucket, and any objects left in it.
    pub async fn teardown(self) -> Result<()> {
        tracing::info!("deleting suite bucket {}", self.bucket);
        self.storage.delete_bucket_with_retry(&self.bucket).await?;
        Ok(())
    }

    pub fn location_path(&self) -> String {
        vision::path::location_path(&self.project_id, &self.location_id)
    }

    /// The `gs://` URI for an object in the suite bucket.
    pub fn gs_uri(&self, name: &str) -> String {
        format!("gs://{}/{name}", self.bucket)
    }

    pub fn deleter(&self) -> ClientDeleter {
        ClientDeleter::new(self.product_search.clone(), self.storage.clone())
    }

    /// Tears down the resources of a test case and combines the results.
    ///
    /// The test case result takes precedence. A teardown failure is only
    /// returned if the test case succeeded, it is logged in either case.
    pub async fn finish(&self, registry: CleanupRegistry, result: Result<()>) -> Result<()> {
        let teardown = registry.teardown(&self.deleter()).await;
        match (result, teardown) {
            (Err(e), _) => Err(e),
            (Ok(()), Err(e)) => Err(e.context("test case teardown")),
            (Ok(()), Ok(())) => Ok(()),
        }
    }
}

fn lro_deadline() -> LimitedElapsedTime<PropagateErrors> {
    PropagateErrors.with_time_limit(LRO_DEADLINE)
}
