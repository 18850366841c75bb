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
use gax::options::RequestOptions;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::PollingErrorPolicy;
use std::sync::Arc;

/// Implements a [ImageAnnotator](super::stub::ImageAnnotator) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ImageAnnotator<T>
where
    T: super::stub::ImageAnnotator + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ImageAnnotator<T>
where
    T: super::stub::ImageAnnotator + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::ImageAnnotator for ImageAnnotator<T>
where
    T: super::stub::ImageAnnotator + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn batch_annotate_images(
        &self,
        req: model::BatchAnnotateImagesRequest,
        options: RequestOptions,
    ) -> Result<model::BatchAnnotateImagesResponse> {
        self.inner.batch_annotate_images(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn async_batch_annotate_images(
        &self,
        req: model::AsyncBatchAnnotateImagesRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.async_batch_annotate_images(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn async_batch_annotate_files(
        &self,
        req: model::AsyncBatchAnnotateFilesRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.async_batch_annotate_files(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.get_operation(req, options).await
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

/// Implements a [ProductSearch](super::stub::ProductSearch) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ProductSearch<T>
where
    T: super::stub::ProductSearch + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ProductSearch<T>
where
    T: super::stub::ProductSearch + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::ProductSearch for ProductSearch<T>
where
    T: super::stub::ProductSearch + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_product_set(
        &self,
        req: model::CreateProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet> {
        self.inner.create_product_set(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_product_sets(
        &self,
        req: model::ListProductSetsRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductSetsResponse> {
        self.inner.list_product_sets(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_product_set(
        &self,
        req: model::GetProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet> {
        self.inner.get_product_set(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_product_set(
        &self,
        req: model::UpdateProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet> {
        self.inner.update_product_set(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_product_set(
        &self,
        req: model::DeleteProductSetRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.delete_product_set(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_product(
        &self,
        req: model::CreateProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        self.inner.create_product(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_products(
        &self,
        req: model::ListProductsRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductsResponse> {
        self.inner.list_products(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_product(
        &self,
        req: model::GetProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        self.inner.get_product(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_product(
        &self,
        req: model::UpdateProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        self.inner.update_product(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_product(
        &self,
        req: model::DeleteProductRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.delete_product(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_reference_image(
        &self,
        req: model::CreateReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<model::ReferenceImage> {
        self.inner.create_reference_image(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_reference_image(
        &self,
        req: model::DeleteReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.delete_reference_image(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_reference_images(
        &self,
        req: model::ListReferenceImagesRequest,
        options: RequestOptions,
    ) -> Result<model::ListReferenceImagesResponse> {
        self.inner.list_reference_images(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_reference_image(
        &self,
        req: model::GetReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<model::ReferenceImage> {
        self.inner.get_reference_image(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_product_to_product_set(
        &self,
        req: model::AddProductToProductSetRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.add_product_to_product_set(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn remove_product_from_product_set(
        &self,
        req: model::RemoveProductFromProductSetRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.remove_product_from_product_set(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_products_in_product_set(
        &self,
        req: model::ListProductsInProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductsInProductSetResponse> {
        self.inner.list_products_in_product_set(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn import_product_sets(
        &self,
        req: model::ImportProductSetsRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.import_product_sets(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.get_operation(req, options).await
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
