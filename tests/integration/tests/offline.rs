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

// Runs the system test cases against a fake service. These tests verify the
// harness: fixtures are uploaded, output files are found, and every resource
// a test case registers is deleted exactly once.
#[cfg(test)]
mod offline {
    use gax::polling_backoff_policy::FixedInterval;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use integration_tests::Harness;
    use scoped_env::ScopedEnv;
    use serde_json::{Value, json};
    use serial_test::serial;
    use std::collections::{BTreeMap, BTreeSet};
    use std::future::Future;
    use std::path::PathBuf;
    use std::pin::Pin;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use storage::client::Storage;
    use vision::client::{ImageAnnotator, ProductSearch};
    use vision_test_utils::cleanup::CleanupRegistry;

    const BUCKET_PATH: &str = "^/storage/v1/b/vision-testing-[a-z0-9]+$";
    const OBJECTS_PATH: &str = "^(/upload)?/storage/v1/b/vision-testing-[a-z0-9]+/o(/[^/]+)?$";
    const LOCATION_PATH: &str = "/v1/projects/test-project/locations/us-west1";
    const DATA_DIR_VAR: &str = "VISION_TEST_DATA_DIR";

    type Result = anyhow::Result<()>;
    type Response = http::Response<bytes::Bytes>;
    type ResponseFuture<'a> = Pin<Box<dyn Future<Output = Response> + Send + 'a>>;

    fn credentials() -> google_cloud_auth::credentials::Credentials {
        google_cloud_auth::credentials::anonymous::Builder::new().build()
    }

    async fn harness(server: &Server) -> anyhow::Result<Harness> {
        let endpoint = format!("http://{}", server.addr());
        let annotator = ImageAnnotator::builder()
            .with_endpoint(&endpoint)
            .with_credentials(credentials())
            .with_polling_backoff_policy(FixedInterval::new(Duration::from_millis(10)))
            .build()
            .await?;
        let product_search = ProductSearch::builder()
            .with_endpoint(&endpoint)
            .with_credentials(credentials())
            .with_polling_backoff_policy(FixedInterval::new(Duration::from_millis(10)))
            .build()
            .await?;
        let storage = Storage::builder()
            .with_endpoint(&endpoint)
            .with_credentials(credentials())
            .build()
            .await?;
        let harness = Harness::with_clients(
            "test-project".to_string(),
            "us-west1".to_string(),
            annotator,
            product_search,
            storage,
        )
        .await?;
        Ok(harness)
    }

    fn fixture_dir(name: &str) -> anyhow::Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!(
            "vision-offline-{name}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join("logo.png"), b"fake png")?;
        std::fs::write(dir.join("faces.jpg"), b"fake jpeg")?;
        std::fs::write(dir.join("pdf_test.pdf"), b"%PDF-1.4 fake")?;
        Ok(dir)
    }

    fn json_response(status: u16, body: Value) -> Response {
        http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(bytes::Bytes::from(body.to_string()))
            .expect("static response parts are valid")
    }

    fn empty_response(status: u16) -> Response {
        http::Response::builder()
            .status(status)
            .body(bytes::Bytes::new())
            .expect("static response parts are valid")
    }

    fn error_response(code: u16, status: &str, message: &str) -> Response {
        json_response(
            code,
            json!({"error": {"code": code, "message": message, "status": status}}),
        )
    }

    fn decode(value: &str) -> String {
        percent_encoding::percent_decode_str(&value.replace('+', " "))
            .decode_utf8_lossy()
            .into_owned()
    }

    fn query_value(request: &http::Request<bytes::Bytes>, key: &str) -> Option<String> {
        request
            .uri()
            .query()?
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| decode(v))
    }

    /// Splits `gs://bucket/object` into the object name.
    fn object_name(uri: &str) -> Option<&str> {
        uri.strip_prefix("gs://")?
            .split_once('/')
            .map(|(_, name)| name)
    }

    #[derive(Debug, Default)]
    struct BucketState {
        objects: BTreeMap<String, bytes::Bytes>,
        deletes: BTreeMap<String, usize>,
        deny_delete: BTreeSet<String>,
    }

    /// An in-memory bucket serving the object endpoints.
    ///
    /// Listings match the prefix as a plain string, like the service does.
    #[derive(Clone, Debug, Default)]
    struct FakeBucket(Arc<Mutex<BucketState>>);

    impl FakeBucket {
        /// Creates the fake and installs the bucket and object expectations.
        fn serve(server: &Server) -> Self {
            let bucket = Self::default();
            server.expect(
                Expectation::matching(all_of![
                    request::method_path("POST", "/storage/v1/b"),
                    request::query(url_decoded(contains(("project", "test-project")))),
                ])
                .times(1)
                .respond_with(json_encoded(json!({"name": "created", "location": "US"}))),
            );
            server.expect(
                Expectation::matching(request::path(matches(OBJECTS_PATH)))
                    .times(..)
                    .respond_with(bucket.clone()),
            );
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path(matches(BUCKET_PATH)),
                ])
                .times(1)
                .respond_with(status_code(204)),
            );
            bucket
        }

        fn state(&self) -> std::sync::MutexGuard<'_, BucketState> {
            self.0.lock().expect("bucket state is never poisoned")
        }

        fn insert<B: Into<bytes::Bytes>>(&self, name: &str, contents: B) {
            self.state().objects.insert(name.to_string(), contents.into());
        }

        fn get(&self, name: &str) -> Option<bytes::Bytes> {
            self.state().objects.get(name).cloned()
        }

        fn names(&self) -> Vec<String> {
            self.state().objects.keys().cloned().collect()
        }

        fn deletes(&self) -> BTreeMap<String, usize> {
            self.state().deletes.clone()
        }

        /// The next delete for `name` fails with `PERMISSION_DENIED`.
        fn deny_delete_once(&self, name: &str) {
            self.state().deny_delete.insert(name.to_string());
        }

        fn handle(&self, request: &http::Request<bytes::Bytes>) -> Response {
            let object = request
                .uri()
                .path()
                .split_once("/o/")
                .map(|(_, name)| decode(name));
            let mut state = self.state();
            match (request.method().as_str(), object) {
                ("POST", None) => {
                    let Some(name) = query_value(request, "name") else {
                        return error_response(400, "INVALID_ARGUMENT", "missing name");
                    };
                    let size = request.body().len();
                    state.objects.insert(name.clone(), request.body().clone());
                    json_response(
                        200,
                        json!({
                            "bucket": "vision-testing-fake",
                            "name": name,
                            "size": size.to_string(),
                            "generation": "1"
                        }),
                    )
                }
                ("GET", None) => {
                    let prefix = query_value(request, "prefix").unwrap_or_default();
                    let items = state
                        .objects
                        .iter()
                        .filter(|(name, _)| name.starts_with(&prefix))
                        .map(|(name, contents)| {
                            json!({"name": name, "size": contents.len().to_string()})
                        })
                        .collect::<Vec<_>>();
                    json_response(200, json!({"items": items}))
                }
                ("GET", Some(name)) => match state.objects.get(&name) {
                    Some(contents) => http::Response::builder()
                        .status(200)
                        .body(contents.clone())
                        .expect("static response parts are valid"),
                    None => error_response(404, "NOT_FOUND", "no such object"),
                },
                ("DELETE", Some(name)) => {
                    *state.deletes.entry(name.clone()).or_default() += 1;
                    if state.deny_delete.remove(&name) {
                        return error_response(403, "PERMISSION_DENIED", "uh-oh");
                    }
                    match state.objects.remove(&name) {
                        Some(_) => empty_response(204),
                        None => error_response(404, "NOT_FOUND", "no such object"),
                    }
                }
                _ => error_response(400, "INVALID_ARGUMENT", "unexpected request"),
            }
        }
    }

    impl Responder for FakeBucket {
        fn respond<'a>(&mut self, request: &'a http::Request<bytes::Bytes>) -> ResponseFuture<'a> {
            let response = self.handle(request);
            Box::pin(async move { response })
        }
    }

    /// Starts an asynchronous annotation: writes `output` in the requested
    /// destination and returns a pending operation.
    struct WriteOutput {
        bucket: FakeBucket,
        operation: &'static str,
        output: Value,
    }

    fn destination(body: &Value) -> Option<String> {
        match body {
            Value::Object(fields) => fields
                .get("gcsDestination")
                .and_then(|d| d.get("uri"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| fields.values().find_map(destination)),
            Value::Array(values) => values.iter().find_map(destination),
            _ => None,
        }
    }

    impl WriteOutput {
        fn handle(&self, request: &http::Request<bytes::Bytes>) -> Response {
            let body = serde_json::from_slice::<Value>(request.body()).unwrap_or_default();
            let Some(uri) = destination(&body) else {
                return error_response(400, "INVALID_ARGUMENT", "missing gcsDestination");
            };
            let Some(prefix) = object_name(&uri) else {
                return error_response(400, "INVALID_ARGUMENT", "bad gcsDestination");
            };
            self.bucket.insert(
                &format!("{prefix}output-1-to-1.json"),
                self.output.to_string(),
            );
            json_response(200, json!({"name": self.operation, "done": false}))
        }
    }

    impl Responder for WriteOutput {
        fn respond<'a>(&mut self, request: &'a http::Request<bytes::Bytes>) -> ResponseFuture<'a> {
            let response = self.handle(request);
            Box::pin(async move { response })
        }
    }

    /// Imports the CSV file named in the request from the fake bucket.
    ///
    /// Every line yields a reference image and an `OK` status. The operation
    /// completes immediately.
    struct FakeImport {
        bucket: FakeBucket,
    }

    impl FakeImport {
        fn handle(&self, request: &http::Request<bytes::Bytes>) -> Response {
            let body = serde_json::from_slice::<Value>(request.body()).unwrap_or_default();
            let csv = body
                .pointer("/inputConfig/gcsSource/csvFileUri")
                .and_then(Value::as_str)
                .and_then(object_name)
                .and_then(|name| self.bucket.get(name));
            let Some(csv) = csv else {
                return error_response(400, "INVALID_ARGUMENT", "missing CSV file");
            };
            let csv = String::from_utf8_lossy(&csv).into_owned();
            let mut reference_images = Vec::new();
            let mut statuses = Vec::new();
            for line in csv.lines() {
                let fields = line.split(',').collect::<Vec<_>>();
                let &[uri, image_id, _set_id, product_id, ..] = fields.as_slice() else {
                    statuses.push(json!({"code": 3, "message": "bad line"}));
                    continue;
                };
                reference_images.push(json!({
                    "name": format!(
                        "projects/test-project/locations/us-west1/products/{product_id}/referenceImages/{image_id}"
                    ),
                    "uri": uri,
                }));
                statuses.push(json!({}));
            }
            json_response(
                200,
                json!({
                    "name": "operations/import",
                    "done": true,
                    "response": {
                        "@type": "type.googleapis.com/google.cloud.vision.v1.ImportProductSetsResponse",
                        "referenceImages": reference_images,
                        "statuses": statuses,
                    }
                }),
            )
        }
    }

    impl Responder for FakeImport {
        fn respond<'a>(&mut self, request: &'a http::Request<bytes::Bytes>) -> ResponseFuture<'a> {
            let response = self.handle(request);
            Box::pin(async move { response })
        }
    }

    #[derive(Debug, Default)]
    struct ProductsState {
        names: Vec<String>,
        hide_created: bool,
    }

    /// Serves the product endpoints, one product per listing page.
    ///
    /// Starts with an existing product, so a new product is never on the
    /// first page.
    #[derive(Clone, Debug)]
    struct FakeProducts(Arc<Mutex<ProductsState>>);

    impl FakeProducts {
        fn serve(server: &Server, hide_created: bool) -> Self {
            let existing = "projects/test-project/locations/us-west1/products/existing";
            let products = Self(Arc::new(Mutex::new(ProductsState {
                names: vec![existing.to_string()],
                hide_created,
            })));
            server.expect(
                Expectation::matching(request::path(matches(format!(
                    "^{LOCATION_PATH}/products(/[^/:]+)?$"
                ))))
                .times(..)
                .respond_with(products.clone()),
            );
            products
        }

        fn state(&self) -> std::sync::MutexGuard<'_, ProductsState> {
            self.0.lock().expect("products state is never poisoned")
        }

        fn names(&self) -> Vec<String> {
            self.state().names.clone()
        }

        fn handle(&self, request: &http::Request<bytes::Bytes>) -> Response {
            let id = request
                .uri()
                .path()
                .split_once("/products/")
                .map(|(_, id)| id.to_string());
            let mut state = self.state();
            match (request.method().as_str(), id) {
                ("POST", None) => {
                    let Some(id) = query_value(request, "productId") else {
                        return error_response(400, "INVALID_ARGUMENT", "missing productId");
                    };
                    let name = format!("projects/test-project/locations/us-west1/products/{id}");
                    let mut product =
                        serde_json::from_slice::<Value>(request.body()).unwrap_or_default();
                    product["name"] = json!(name.clone());
                    state.names.push(name);
                    json_response(200, product)
                }
                ("GET", None) => {
                    let visible = if state.hide_created { 1 } else { state.names.len() };
                    let index = query_value(request, "pageToken")
                        .and_then(|t| t.parse::<usize>().ok())
                        .unwrap_or_default();
                    let products = state.names[..visible]
                        .get(index)
                        .map(|name| vec![json!({"name": name})])
                        .unwrap_or_default();
                    let next = if index + 1 < visible {
                        (index + 1).to_string()
                    } else {
                        String::new()
                    };
                    json_response(200, json!({"products": products, "nextPageToken": next}))
                }
                ("DELETE", Some(id)) => {
                    let name = format!("projects/test-project/locations/us-west1/products/{id}");
                    match state.names.iter().position(|n| *n == name) {
                        Some(i) => {
                            state.names.remove(i);
                            json_response(200, json!({}))
                        }
                        None => error_response(404, "NOT_FOUND", "no such product"),
                    }
                }
                _ => error_response(400, "INVALID_ARGUMENT", "unexpected request"),
            }
        }
    }

    impl Responder for FakeProducts {
        fn respond<'a>(&mut self, request: &'a http::Request<bytes::Bytes>) -> ResponseFuture<'a> {
            let response = self.handle(request);
            Box::pin(async move { response })
        }
    }

    fn expect_done_operation(server: &Server, operation: &str, response: Value) {
        server.expect(
            Expectation::matching(request::method_path("GET", format!("/v1/{operation}")))
                .times(1)
                .respond_with(json_encoded(json!({
                    "name": operation,
                    "done": true,
                    "response": response,
                }))),
        );
    }

    fn logo_response() -> Value {
        json!({"responses": [{"logoAnnotations": [{"description": "google", "score": 0.9}]}]})
    }

    fn deleted_once(names: &[&str]) -> BTreeMap<String, usize> {
        names.iter().map(|n| (n.to_string(), 1)).collect()
    }

    #[tokio::test]
    #[serial]
    async fn detect_logos_gcs_deletes_blob() -> Result {
        let dir = fixture_dir("gcs")?;
        let dir = dir.to_string_lossy().to_string();
        let _env = ScopedEnv::set(DATA_DIR_VAR, dir.as_str());
        let server = Server::run();
        let bucket = FakeBucket::serve(&server);
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/images:annotate"))
                .times(1)
                .respond_with(json_encoded(logo_response())),
        );

        let harness = harness(&server).await?;
        integration_tests::annotate::detect_logos_gcs(&harness).await?;
        assert!(bucket.names().is_empty(), "{:?}", bucket.names());
        assert_eq!(bucket.deletes(), deleted_once(&["logo.png"]));
        harness.teardown().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn detect_logos_async_reads_output() -> Result {
        let dir = fixture_dir("async")?;
        let dir = dir.to_string_lossy().to_string();
        let _env = ScopedEnv::set(DATA_DIR_VAR, dir.as_str());
        let server = Server::run();
        let bucket = FakeBucket::serve(&server);
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/images:asyncBatchAnnotate"))
                .times(1)
                .respond_with(WriteOutput {
                    bucket: bucket.clone(),
                    operation: "operations/images",
                    output: logo_response(),
                }),
        );
        expect_done_operation(
            &server,
            "operations/images",
            json!({
                "@type": "type.googleapis.com/google.cloud.vision.v1.AsyncBatchAnnotateImagesResponse",
            }),
        );

        let harness = harness(&server).await?;
        integration_tests::annotate::detect_logos_async(&harness).await?;
        assert!(bucket.names().is_empty(), "{:?}", bucket.names());
        assert_eq!(
            bucket.deletes(),
            deleted_once(&[
                "logo_async.png",
                "test_detect_logos_async/output-1-to-1.json"
            ])
        );
        harness.teardown().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn async_batch_annotate_files_reads_output() -> Result {
        let dir = fixture_dir("files")?;
        let dir = dir.to_string_lossy().to_string();
        let _env = ScopedEnv::set(DATA_DIR_VAR, dir.as_str());
        let server = Server::run();
        let bucket = FakeBucket::serve(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/files:asyncBatchAnnotate"),
                request::body(json_decoded(|body: &Value| {
                    body.pointer("/requests/0/inputConfig/mimeType")
                        == Some(&json!("application/pdf"))
                })),
            ])
            .times(1)
            .respond_with(WriteOutput {
                bucket: bucket.clone(),
                operation: "operations/files",
                output: json!({
                    "responses": [{"fullTextAnnotation": {"text": "test text\n"}}],
                    "totalPages": 1
                }),
            }),
        );
        expect_done_operation(
            &server,
            "operations/files",
            json!({
                "@type": "type.googleapis.com/google.cloud.vision.v1.AsyncBatchAnnotateFilesResponse",
                "responses": [{}],
            }),
        );

        let harness = harness(&server).await?;
        integration_tests::annotate::async_batch_annotate_files(&harness).await?;
        assert!(bucket.names().is_empty(), "{:?}", bucket.names());
        assert_eq!(
            bucket.deletes(),
            deleted_once(&[
                "async_batch_annotate_files.pdf",
                "test_async_batch_annotate_files/output-1-to-1.json"
            ])
        );
        harness.teardown().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn import_product_sets_from_csv() -> Result {
        let dir = fixture_dir("import")?;
        let dir = dir.to_string_lossy().to_string();
        let _env = ScopedEnv::set(DATA_DIR_VAR, dir.as_str());
        let server = Server::run();
        let bucket = FakeBucket::serve(&server);
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                format!("{LOCATION_PATH}/productSets:import"),
            ))
            .times(1)
            .respond_with(FakeImport {
                bucket: bucket.clone(),
            }),
        );
        // The import creates these resources. The fake service does not, so
        // the reference images are already gone when the test case cleans up.
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(matches(format!(
                    "^{LOCATION_PATH}/products/product_[0-9]+_[a-z0-9]+/referenceImages/reference_image_[12]_[0-9]+_[a-z0-9]+$"
                ))),
            ])
            .times(2)
            .respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({"error": {"code": 404, "message": "gone", "status": "NOT_FOUND"}})
                            .to_string(),
                    ),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(matches(format!(
                    "^{LOCATION_PATH}/products/product_[0-9]+_[a-z0-9]+$"
                ))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(matches(format!(
                    "^{LOCATION_PATH}/productSets/set_[0-9]+_[a-z0-9]+$"
                ))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({}))),
        );

        let harness = harness(&server).await?;
        integration_tests::product_search::import_product_sets(&harness).await?;
        assert!(bucket.names().is_empty(), "{:?}", bucket.names());
        assert_eq!(
            bucket.deletes(),
            deleted_once(&[
                "import_sets.csv",
                "import_sets_image_1.jpg",
                "import_sets_image_2.jpg"
            ])
        );
        harness.teardown().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn list_products_pages_until_created_product() -> Result {
        let server = Server::run();
        let _bucket = FakeBucket::serve(&server);
        let products = FakeProducts::serve(&server, false);

        let harness = harness(&server).await?;
        integration_tests::product_search::list_products(&harness).await?;
        assert_eq!(
            products.names(),
            vec!["projects/test-project/locations/us-west1/products/existing".to_string()]
        );
        harness.teardown().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn list_products_reports_missing_product() -> Result {
        let server = Server::run();
        let _bucket = FakeBucket::serve(&server);
        let products = FakeProducts::serve(&server, true);

        let harness = harness(&server).await?;
        let err = integration_tests::product_search::list_products(&harness)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"), "{err:?}");
        // The test case still deletes the product it created.
        assert_eq!(
            products.names(),
            vec!["projects/test-project/locations/us-west1/products/existing".to_string()]
        );
        harness.teardown().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn single_output_requires_directory_prefix() -> Result {
        let server = Server::run();
        let bucket = FakeBucket::serve(&server);
        let harness = harness(&server).await?;
        bucket.insert("annotate_files.pdf", "input");
        bucket.insert("annotate_files/output-1-to-1.json", r#"{"responses": []}"#);

        let mut registry = CleanupRegistry::new();
        let response = integration_tests::fixtures::single_output::<Value>(
            &harness,
            &mut registry,
            "annotate_files",
        )
        .await;
        assert!(response.is_err(), "{response:?}");
        assert!(registry.is_empty());

        let output = integration_tests::fixtures::single_output::<Value>(
            &harness,
            &mut registry,
            "annotate_files/",
        )
        .await?;
        assert_eq!(output, json!({"responses": []}));
        assert_eq!(registry.len(), 1);

        harness.teardown().await?;
        assert!(bucket.names().is_empty(), "{:?}", bucket.names());
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn teardown_failure_is_reported() -> Result {
        let dir = fixture_dir("teardown")?;
        let dir = dir.to_string_lossy().to_string();
        let _env = ScopedEnv::set(DATA_DIR_VAR, dir.as_str());
        let server = Server::run();
        let bucket = FakeBucket::serve(&server);
        bucket.deny_delete_once("logo.png");
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/images:annotate"))
                .respond_with(json_encoded(logo_response())),
        );

        let harness = harness(&server).await?;
        let err = integration_tests::annotate::detect_logos_gcs(&harness)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("teardown"), "{err:?}");
        assert_eq!(bucket.names(), vec!["logo.png".to_string()]);

        // The suite teardown removes anything the test case left behind.
        harness.teardown().await?;
        assert!(bucket.names().is_empty(), "{:?}", bucket.names());
        Ok(())
    }
}
