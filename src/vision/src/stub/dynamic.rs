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

/// A dyn-compatible, crate-private version of [super::ImageAnnotator].
#[async_trait::async_trait]
pub trait ImageAnnotator: std::fmt::Debug + Send + Sync {
    async fn batch_annotate_images(
        &self,
        req: model::BatchAnnotateImagesRequest,
        options: RequestOptions,
    ) -> Result<model::BatchAnnotateImagesResponse>;

    async fn async_batch_annotate_images(
        &self,
        req: model::AsyncBatchAnnotateImagesRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation>;

    async fn async_batch_annotate_files(
        &self,
        req: model::AsyncBatchAnnotateFilesRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation>;

    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation>;

    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy>;

    fn get_polling_backoff_policy(&self, options: &RequestOptions)
    -> Arc<dyn PollingBackoffPolicy>;
}

/// All implementations of [super::ImageAnnotator] also implement [ImageAnnotator].
#[async_trait::async_trait]
impl<T: super::ImageAnnotator> ImageAnnotator for T {
    async fn batch_annotate_images(
        &self,
        req: model::BatchAnnotateImagesRequest,
        options: RequestOptions,
    ) -> Result<model::BatchAnnotateImagesResponse> {
        T::batch_annotate_images(self, req, options).await
    }

    async fn async_batch_annotate_images(
        &self,
        req: model::AsyncBatchAnnotateImagesRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        T::async_batch_annotate_images(self, req, options).await
    }

    async fn async_batch_annotate_files(
        &self,
        req: model::AsyncBatchAnnotateFilesRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        T::async_batch_annotate_files(self, req, options).await
    }

    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        T::get_operation(self, req, options).await
    }

    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        T::get_polling_error_policy(self, options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        T::get_polling_backoff_policy(self, options)
    }
}

/// A dyn-compatible, crate-private version of [super::ProductSearch].
#[async_trait::async_trait]
pub trait ProductSearch: std::fmt::Debug + Send + Sync {
    async fn create_product_set(
        &self,
        req: model::CreateProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet>;

    async fn list_product_sets(
        &self,
        req: model::ListProductSetsRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductSetsResponse>;

    async fn get_product_set(
        &self,
        req: model::GetProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet>;

    async fn update_product_set(
        &self,
        req: model::UpdateProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet>;

    async fn delete_product_set(
        &self,
        req: model::DeleteProductSetRequest,
        options: RequestOptions,
    ) -> Result<()>;

    async fn create_product(
        &self,
        req: model::CreateProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product>;

    async fn list_products(
        &self,
        req: model::ListProductsRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductsResponse>;

    async fn get_product(
        &self,
        req: model::GetProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product>;

    async fn update_product(
        &self,
        req: model::UpdateProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product>;

    async fn delete_product(
        &self,
        req: model::DeleteProductRequest,
        options: RequestOptions,
    ) -> Result<()>;

    async fn create_reference_image(
        &self,
        req: model::CreateReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<model::ReferenceImage>;

    async fn delete_reference_image(
        &self,
        req: model::DeleteReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<()>;

    async fn list_reference_images(
        &self,
        req: model::ListReferenceImagesRequest,
        options: RequestOptions,
    ) -> Result<model::ListReferenceImagesResponse>;

    async fn get_reference_image(
        &self,
        req: model::GetReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<model::ReferenceImage>;

    async fn add_product_to_product_set(
        &self,
        req: model::AddProductToProductSetRequest,
        options: RequestOptions,
    ) -> Result<()>;

    async fn remove_product_from_product_set(
        &self,
        req: model::RemoveProductFromProductSetRequest,
        options: RequestOptions,
    ) -> Result<()>;

    async fn list_products_in_product_set(
        &self,
        req: model::ListProductsInProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductsInProductSetResponse>;

    async fn import_product_sets(
        &self,
        req: model::ImportProductSetsRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation>;

    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation>;

    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy>;

    fn get_polling_backoff_policy(&self, options: &RequestOptions)
    -> Arc<dyn PollingBackoffPolicy>;
}

/// All implementations of [super::ProductSearch] also implement [ProductSearch].
#[async_trait::async_trait]
impl<T: super::ProductSearch> ProductSearch for T {
    async fn create_product_set(
        &self,
        req: model::CreateProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet> {
        T::create_product_set(self, req, options).await
    }

    async fn list_product_sets(
        &self,
        req: model::ListProductSetsRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductSetsResponse> {
        T::list_product_sets(self, req, options).await
    }

    async fn get_product_set(
        &self,
        req: model::GetProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet> {
        T::get_product_set(self, req, options).await
    }

    async fn update_product_set(
        &self,
        req: model::UpdateProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ProductSet> {
        T::update_product_set(self, req, options).await
    }

    async fn delete_product_set(
        &self,
        req: model::DeleteProductSetRequest,
        options: RequestOptions,
    ) -> Result<()> {
        T::delete_product_set(self, req, options).await
    }

    async fn create_product(
        &self,
        req: model::CreateProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        T::create_product(self, req, options).await
    }

    async fn list_products(
        &self,
        req: model::ListProductsRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductsResponse> {
        T::list_products(self, req, options).await
    }

    async fn get_product(
        &self,
        req: model::GetProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        T::get_product(self, req, options).await
    }

    async fn update_product(
        &self,
        req: model::UpdateProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        T::update_product(self, req, options).await
    }

    async fn delete_product(
        &self,
        req: model::DeleteProductRequest,
        options: RequestOptions,
    ) -> Result<()> {
        T::delete_product(self, req, options).await
    }

    async fn create_reference_image(
        &self,
        req: model::CreateReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<model::ReferenceImage> {
        T::create_reference_image(self, req, options).await
    }

    async fn delete_reference_image(
        &self,
        req: model::DeleteReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<()> {
        T::delete_reference_image(self, req, options).await
    }

    async fn list_reference_images(
        &self,
        req: model::ListReferenceImagesRequest,
        options: RequestOptions,
    ) -> Result<model::ListReferenceImagesResponse> {
        T::list_reference_images(self, req, options).await
    }

    async fn get_reference_image(
        &self,
        req: model::GetReferenceImageRequest,
        options: RequestOptions,
    ) -> Result<model::ReferenceImage> {
        T::get_reference_image(self, req, options).await
    }

    async fn add_product_to_product_set(
        &self,
        req: model::AddProductToProductSetRequest,
        options: RequestOptions,
    ) -> Result<()> {
        T::add_product_to_product_set(self, req, options).await
    }

    async fn remove_product_from_product_set(
        &self,
        req: model::RemoveProductFromProductSetRequest,
        options: RequestOptions,
    ) -> Result<()> {
        T::remove_product_from_product_set(self, req, options).await
    }

    async fn list_products_in_product_set(
        &self,
        req: model::ListProductsInProductSetRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductsInProductSetResponse> {
        T::list_products_in_product_set(self, req, options).await
    }

    async fn import_product_sets(
        &self,
        req: model::ImportProductSetsRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        T::import_product_sets(self, req, options).await
    }

    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        T::get_operation(self, req, options).await
    }

    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        T::get_polling_error_policy(self, options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        T::get_polling_backoff_policy(self, options)
    }
}
