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

use crate::Result;
use crate::model;
use crate::path::{LOCATION, PRODUCT, PRODUCT_SET, REFERENCE_IMAGE};
use gax::http_client::{NoBody, ReqwestClient};
use gax::options::{ClientConfig, RequestOptions};
use gax::path_parameter::required;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::PollingErrorPolicy;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

const OPERATION: &str = "operations/*";
const LOCATION_OPERATION: &str = "projects/*/locations/*/operations/*";

/// The `google.protobuf.Empty` message returned by delete-like RPCs.
#[derive(Debug, Default, serde::Deserialize)]
struct Empty {}

/// Implements [ImageAnnotator](super::stub::ImageAnnotator) using a [ReqwestClient].
#[derive(Clone)]
pub struct ImageAnnotator {
    inner: ReqwestClient,
}

impl std::fmt::Debug for ImageAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("ImageAnnotator")
            .field("inner", &self.inner)
            .finish()
    }
}

impl ImageAnnotator {
    pub async fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self { inner })
    }

    /// The `parent` field of the batch requests is optional. When set, the
    /// request is routed to the given project and location.
    fn batch_path(parent: &str, suffix: &str) -> Result<String> {
        if parent.is_empty() {
            return Ok(format!("/v1/{suffix}"));
        }
        let parent = required(parent, "parent", LOCATION)?;
        Ok(format!("/v1/{parent}/{suffix}"))
    }
}

impl super::stub::ImageAnnotator for ImageAnnotator {
    async fn batch_annotate_images(
        &self,
        req: model::BatchAnnotateImagesRequest,
        options: RequestOptions,
    ) -> Result<model::BatchAnnotateImagesResponse> {
        let path = Self::batch_path(&req.parent, "images:annotate")?;
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, Some(req), options).await
    }

    async fn async_batch_annotate_images(
        &self,
        req: model::AsyncBatchAnnotateImagesRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        let path = Self::batch_path(&req.parent, "images:asyncBatchAnnotate")?;
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, Some(req), options).await
    }

    async fn async_batch_annotate_files(
        &self,
        req: model::AsyncBatchAnnotateFilesRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        let path = Self::batch_path(&req.parent, "files:asyncBatchAnnotate")?;
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, Some(req), options).await
    }

    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        get_operation(&self.inner, req, options).await
    }

    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}

/// Implements [ProductSearch](super::stub::ProductSearch) using a [ReqwestClient].
#[derive(Clone)]
pub struct ProductSearch {
    inner: ReqwestClient,
}

impl std::fmt::Debug for ProductSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("ProductSearch")
            .field("inner", &self.inner)
            .finish()
    }
}

impl ProductSearch {
    pub async fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self { inner })
    }

    async fn get<O>(
        &self,
        name: &str,
        field: &str,
        template: &str,
        options: RequestOptions,
    ) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let name = required(name, field, template)?;
        let builder = self.inner.builder(Method::GET, format!("/v1/{name}"));
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn delete(&self, name: &str, template: &str, options: RequestOptions) -> Result<()> {
        let name = required(name, "name", template)?;
        let builder = self.inner.builder(Method::DELETE, format!("/v1/{name}"));
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
            .map(|_: Empty| ())
    }

    fn page_query(
        builder: reqwest::RequestBuilder,
        page_size: i32,
        page_token: &str,
    ) -> reqwest::RequestBuilder {
        let builder = match page_size {
            0 => builder,
            n => builder.query(&[("pageSize", n)]),
        };
        match page_token {
            "" => builder,
            t => builder.query(&[("pageToken", t)]),
        }
    }

    fn update_mask_query(
        builder: reqwest::RequestBuilder,
        mask: Option<&model::FieldMask>,
    ) -> reqwest::RequestBuilder {
        match mask {
            None => builder,
            Some(m) => builder.query(&[("updateMask", m.to_query())]),
        }
    }
}

impl super::stub::ProductSearch for ProductSearch {
    async fn create_product_set(
        &self,
        req: model::CreateProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet> {
        let parent = required(&req.parent, "parent", LOCATION)?;
        let builder = self
            .inner
            .builder(Method::POST, format!("/v1/{parent}/productSets"));
        let builder = match req.product_set_id.as_str() {
            "" => builder,
            id => builder.query(&[("productSetId", id)]),
        };
        self.inner
            .execute(builder, Some(req.product_set.unwrap_or_default()), options)
            .await
    }

    async fn list_product_sets(
        &self,
        req: model::ListProductSetsRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductSetsResponse> {
        let parent = required(&req.parent, "parent", LOCATION)?;
        let builder = self
            .inner
            .builder(Method::GET, format!("/v1/{parent}/productSets"));
        let builder = Self::page_query(builder, req.page_size, &req.page_token);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_product_set(
        &self,
        req: model::GetProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet> {
        self.get(&req.name, "name", PRODUCT_SET, options).await
    }

    async fn update_product_set(
        &self,
        req: model::UpdateProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet> {
        let product_set = req
            .product_set
            .ok_or_else(|| gax::path_parameter::missing("product_set"))?;
        let name = required(&product_set.name, "product_set.name", PRODUCT_SET)?;
        let builder = self.inner.builder(Method::PATCH, format!("/v1/{name}"));
        let builder = Self::update_mask_query(builder, req.update_mask.as_ref());
        self.inner.execute(builder, Some(&product_set), options).await
    }

    async fn delete_product_set(
        &self,
        req: model::DeleteProductSetRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.delete(&req.name, PRODUCT_SET, options).await
    }

    async fn create_product(
        &self,
        req: model::CreateProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        let parent = required(&req.parent, "parent", LOCATION)?;
        let builder = self
            .inner
            .builder(Method::POST, format!("/v1/{parent}/products"));
        let builder = match req.product_id.as_str() {
            "" => builder,
            id => builder.query(&[("productId", id)]),
        };
        self.inner
            .execute(builder, Some(req.product.unwrap_or_default()), options)
            .await
    }

    async fn list_products(
        &self,
        req: model::ListProductsRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductsResponse> {
        let parent = required(&req.parent, "parent", LOCATION)?;
        let builder = self
            .inner
            .builder(Method::GET, format!("/v1/{parent}/products"));
        let builder = Self::page_query(builder, req.page_size, &req.page_token);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_product(
        &self,
        req: model::GetProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        self.get(&req.name, "name", PRODUCT, options).await
    }

    async fn update_product(
        &self,
        req: model::UpdateProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        let product = req
            .product
            .ok_or_else(|| gax::path_parameter::missing("product"))?;
        let name = required(&product.name, "product.name", PRODUCT)?;
        let builder = self.inner.builder(Method::PATCH, format!("/v1/{name}"));
        let builder = Self::update_mask_query(builder, req.update_mask.as_ref());
        self.inner.execute(builder, Some(&product), options).await
    }

    async fn delete_product(
        &self,
        req: model::DeleteProductRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.delete(&req.name, PRODUCT, options).await
    }

    async fn create_reference_image(
        &self,
        req: model::CreateReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<model::ReferenceImage> {
        let parent = required(&req.parent, "parent", PRODUCT)?;
        let builder = self
            .inner
            .builder(Method::POST, format!("/v1/{parent}/referenceImages"));
        let builder = match req.reference_image_id.as_str() {
            "" => builder,
            id => builder.query(&[("referenceImageId", id)]),
        };
        self.inner
            .execute(
                builder,
                Some(req.reference_image.unwrap_or_default()),
                options,
            )
            .await
    }

    async fn delete_reference_image(
        &self,
        req: model::DeleteReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.delete(&req.name, REFERENCE_IMAGE, options).await
    }

    async fn list_reference_images(
        &self,
        req: model::ListReferenceImagesRequest,
        options: RequestOptions,
    ) -> Result<model::ListReferenceImagesResponse> {
        let parent = required(&req.parent, "parent", PRODUCT)?;
        let builder = self
            .inner
            .builder(Method::GET, format!("/v1/{parent}/referenceImages"));
        let builder = Self::page_query(builder, req.page_size, &req.page_token);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_reference_image(
        &self,
        req: model::GetReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<model::ReferenceImage> {
        self.get(&req.name, "name", REFERENCE_IMAGE, options).await
    }

    async fn add_product_to_product_set(
        &self,
        req: model::AddProductToProductSetRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let name = required(&req.name, "name", PRODUCT_SET)?;
        let product = required(&req.product, "product", PRODUCT)?;
        let builder = self
            .inner
            .builder(Method::POST, format!("/v1/{name}:addProduct"));
        self.inner
            .execute(builder, Some(json!({"product": product})), options)
            .await
            .map(|_: Empty| ())
    }

    async fn remove_product_from_product_set(
        &self,
        req: model::RemoveProductFromProductSetRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let name = required(&req.name, "name", PRODUCT_SET)?;
        let product = required(&req.product, "product", PRODUCT)?;
        let builder = self
            .inner
            .builder(Method::POST, format!("/v1/{name}:removeProduct"));
        self.inner
            .execute(builder, Some(json!({"product": product})), options)
            .await
            .map(|_: Empty| ())
    }

    async fn list_products_in_product_set(
        &self,
        req: model::ListProductsInProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductsInProductSetResponse> {
        let name = required(&req.name, "name", PRODUCT_SET)?;
        let builder = self
            .inner
            .builder(Method::GET, format!("/v1/{name}/products"));
        let builder = Self::page_query(builder, req.page_size, &req.page_token);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn import_product_sets(
        &self,
        req: model::ImportProductSetsRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        let parent = required(&req.parent, "parent", LOCATION)?;
        let builder = self
            .inner
            .builder(Method::POST, format!("/v1/{parent}/productSets:import"));
        let body = json!({"inputConfig": req.input_config.unwrap_or_default()});
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        get_operation(&self.inner, req, options).await
    }

    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}

/// Both services expose the same operations endpoint. Global operations are
/// named `operations/*`, regional operations include the project and location.
async fn get_operation(
    inner: &ReqwestClient,
    req: lro::model::GetOperationRequest,
    options: RequestOptions,
) -> Result<lro::model::Operation> {
    let name = match gax::path_parameter::try_match(&req.name, LOCATION_OPERATION) {
        Some(name) => name,
        None => required(&req.name, "name", OPERATION)?,
    };
    let builder = inner.builder(Method::GET, format!("/v1/{name}"));
    inner.execute(builder, None::<NoBody>, options).await
}
