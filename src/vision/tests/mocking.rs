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

#[cfg(test)]
mod mocking {
    use gax::error::Error;
    use gax::options::RequestOptions;
    use vision_v1::model;
    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    mockall::mock! {
        #[derive(Debug)]
        ImageAnnotator {}
        impl vision_v1::stub::ImageAnnotator for ImageAnnotator {
            async fn batch_annotate_images(&self, req: model::BatchAnnotateImagesRequest, _options: RequestOptions) -> gax::Result<model::BatchAnnotateImagesResponse>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        ProductSearch {}
        impl vision_v1::stub::ProductSearch for ProductSearch {
            async fn create_product(&self, req: model::CreateProductRequest, _options: RequestOptions) -> gax::Result<model::Product>;
        }
    }

    /// The function under test.
    async fn top_logo(
        client: &vision_v1::client::ImageAnnotator,
        uri: &str,
    ) -> gax::Result<Option<String>> {
        let response = client
            .logo_detection(model::Image::from_uri(uri))
            .await?;
        Ok(response
            .logo_annotations
            .into_iter()
            .next()
            .map(|l| l.description))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn logo_helper() -> Result<()> {
        let mut mock = MockImageAnnotator::new();
        mock.expect_batch_annotate_images()
            .withf(|r, _| {
                r.requests.len() == 1
                    && r.requests[0].features
                        == vec![model::Feature::from(model::feature::Type::LogoDetection)]
            })
            .return_once(|_, _| {
                let response: model::BatchAnnotateImagesResponse =
                    serde_json::from_value(serde_json::json!({
                        "responses": [{"logoAnnotations": [{"description": "google"}]}]
                    }))
                    .unwrap();
                Ok(response)
            });

        let client = vision_v1::client::ImageAnnotator::from_stub(mock);
        let logo = top_logo(&client, "gs://bucket/logo.png").await?;
        assert_eq!(logo.as_deref(), Some("google"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn create_product_error() -> Result<()> {
        let mut mock = MockProductSearch::new();
        mock.expect_create_product()
            .withf(|r, _| {
                r.parent == "projects/my-project/locations/us-west1"
                    && r.product_id == "product-123"
                    && r.product.as_ref().map(|p| p.product_category.as_str()) == Some("apparel")
            })
            .return_once(|_, _| Err(unavailable()));

        let client = vision_v1::client::ProductSearch::from_stub(mock);
        let response = client
            .create_product(vision_v1::path::location_path("my-project", "us-west1"))
            .set_product(model::Product::new().set_product_category("apparel"))
            .set_product_id("product-123")
            .send()
            .await;
        assert!(response.is_err());
        Ok(())
    }

    fn unavailable() -> Error {
        use gax::error::rpc::{Code, Status};
        Error::service(
            Status::default()
                .set_code(Code::Unavailable)
                .set_message("try-again"),
        )
    }
}
