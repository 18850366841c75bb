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

#[cfg(all(test, feature = "run-integration-tests"))]
mod driver {
    use integration_tests::{enable_tracing, report_error, skip_without_project};

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn run_image_annotator() -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        if skip_without_project() {
            return Ok(());
        }
        integration_tests::annotate::run()
            .await
            .map_err(report_error)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn run_product_search() -> integration_tests::Result<()> {
        let _guard = enable_tracing();
        if skip_without_project() {
            return Ok(());
        }
        integration_tests::product_search::run()
            .await
            .map_err(report_error)
    }
}
