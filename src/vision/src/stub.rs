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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

use crate::Result;
use crate::model;
use gax::options::RequestOptions;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::PollingErrorPolicy;
use std::sync::Arc;

/// Defines the trait used to implement [super::client::ImageAnnotator].
///
/// Application developers may need to implement this trait to mock
/// `client::ImageAnnotator`. In other use-cases, application developers only
/// use `client::ImageAnnotator` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait ImageAnnotator: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::ImageAnnotator::batch_annotate_images].
    fn batch_annotate_images(
        &self,
        _req: model::BatchAnnotateImagesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::BatchAnnotateImagesResponse>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ImageAnnotator::async_batch_annotate_images].
    fn async_batch_annotate_images(
        &self,
        _req: model::AsyncBatchAnnotateImagesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<lro::model::Operation>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ImageAnnotator::async_batch_annotate_files].
    fn async_batch_annotate_files(
        &self,
        _req: model::AsyncBatchAnnotateFilesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<lro::model::Operation>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ImageAnnotator::get_operation].
    fn get_operation(
        &self,
        _req: lro::model::GetOperationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<lro::model::Operation>> + Send {
        unimplemented_stub()
    }

    /// Returns the polling error policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_error_policy(&self, _options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        Arc::new(gax::polling_error_policy::LimitedElapsedTime::default())
    }

    /// Returns the polling backoff policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_backoff_policy(
        &self,
        _options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        Arc::new(gax::polling_backoff_policy::FixedInterval::default())
    }
}

/// Defines the trait used to implement [super::client::ProductSearch].
///
/// Application developers may need to implement this trait to mock
/// `client::ProductSearch`. In other use-cases, application developers only
/// use `client::ProductSearch` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait ProductSearch: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::ProductSearch::create_product_set].
    fn create_product_set(
        &self,
        _req: model::CreateProductSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::ProductSet>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::list_product_sets].
    fn list_product_sets(
        &self,
        _req: model::ListProductSetsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::ListProductSetsResponse>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::get_product_set].
    fn get_product_set(
        &self,
        _req: model::GetProductSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::ProductSet>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::update_product_set].
    fn update_product_set(
        &self,
        _req: model::UpdateProductSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::ProductSet>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::delete_product_set].
    fn delete_product_set(
        &self,
        _req: model::DeleteProductSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::create_product].
    fn create_product(
        &self,
        _req: model::CreateProductRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Product>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::list_products].
    fn list_products(
        &self,
        _req: model::ListProductsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::ListProductsResponse>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::get_product].
    fn get_product(
        &self,
        _req: model::GetProductRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Product>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::update_product].
    fn update_product(
        &self,
        _req: model::UpdateProductRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::Product>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::delete_product].
    fn delete_product(
        &self,
        _req: model::DeleteProductRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::create_reference_image].
    fn create_reference_image(
        &self,
        _req: model::CreateReferenceImageRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::ReferenceImage>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::delete_reference_image].
    fn delete_reference_image(
        &self,
        _req: model::DeleteReferenceImageRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::list_reference_images].
    fn list_reference_images(
        &self,
        _req: model::ListReferenceImagesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::ListReferenceImagesResponse>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::get_reference_image].
    fn get_reference_image(
        &self,
        _req: model::GetReferenceImageRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::ReferenceImage>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::add_product_to_product_set].
    fn add_product_to_product_set(
        &self,
        _req: model::AddProductToProductSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::remove_product_from_product_set].
    fn remove_product_from_product_set(
        &self,
        _req: model::RemoveProductFromProductSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::list_products_in_product_set].
    fn list_products_in_product_set(
        &self,
        _req: model::ListProductsInProductSetRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<model::ListProductsInProductSetResponse>> + Send
    {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::import_product_sets].
    fn import_product_sets(
        &self,
        _req: model::ImportProductSetsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<lro::model::Operation>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ProductSearch::get_operation].
    fn get_operation(
        &self,
        _req: lro::model::GetOperationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<lro::model::Operation>> + Send {
        unimplemented_stub()
    }

    /// Returns the polling error policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_error_policy(&self, _options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        Arc::new(gax::polling_error_policy::LimitedElapsedTime::default())
    }

    /// Returns the polling backoff policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_backoff_policy(
        &self,
        _options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        Arc::new(gax::polling_backoff_policy::FixedInterval::default())
    }
}

const UNIMPLEMENTED: &str = concat!(
    "to prevent breaking changes as services gain new RPCs, the stub ",
    "traits provide default implementations of each method. In the client ",
    "libraries, all implementations of the traits override all methods. ",
    "Therefore, this error should not appear in normal code using the ",
    "client libraries. The only expected context for this error is test ",
    "code mocking the client libraries. If that is how you got this ",
    "error, verify that you have mocked all methods used in your test."
);

async fn unimplemented_stub<T: Send>() -> Result<T> {
    unimplemented!("{UNIMPLEMENTED}");
}
