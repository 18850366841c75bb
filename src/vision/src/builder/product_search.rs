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
use crate::stub::dynamic::ProductSearch as Stub;
use gax::options::RequestOptions;
use std::sync::Arc;

/// A builder for [ProductSearch][crate::client::ProductSearch].
///
/// ```no_run
/// # tokio_test::block_on(async {
/// # use vision_v1::*;
/// # use builder::product_search::ClientBuilder;
/// # use client::ProductSearch;
/// let builder : ClientBuilder = ProductSearch::builder();
/// let client = builder
///     .with_endpoint("https://vision.googleapis.com")
///     .build().await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

pub(crate) mod client {
    use super::super::super::client::ProductSearch;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = ProductSearch;
        async fn build(
            self,
            config: gax::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

/// Common implementation for [crate::client::ProductSearch] request builders.
#[derive(Clone, Debug)]
pub(crate) struct RequestBuilder<R: std::default::Default> {
    stub: Arc<dyn Stub>,
    request: R,
    options: RequestOptions,
}

impl<R> RequestBuilder<R>
where
    R: std::default::Default,
{
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self {
            stub,
            request: R::default(),
            options: RequestOptions::default(),
        }
    }
}

/// The request builder for [ProductSearch::create_product_set][crate::client::ProductSearch::create_product_set] calls.
///
/// # Example
/// ```no_run
/// # use vision_v1::builder;
/// use builder::product_search::CreateProductSet;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> CreateProductSet {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CreateProductSet(RequestBuilder<model::CreateProductSetRequest>);

impl CreateProductSet {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::CreateProductSetRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ProductSet> {
        (*self.0.stub)
            .create_product_set(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [parent][model::CreateProductSetRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of [product_set][model::CreateProductSetRequest::product_set].
    ///
    /// This is a **required** field for requests.
    pub fn set_product_set<T: Into<model::ProductSet>>(mut self, v: T) -> Self {
        self.0.request.product_set = Some(v.into());
        self
    }

    /// Sets or clears the value of [product_set][model::CreateProductSetRequest::product_set].
    pub fn set_or_clear_product_set<T: Into<model::ProductSet>>(mut self, v: Option<T>) -> Self {
        self.0.request.product_set = v.map(|x| x.into());
        self
    }

    /// Sets the value of [product_set_id][model::CreateProductSetRequest::product_set_id].
    pub fn set_product_set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.product_set_id = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CreateProductSet {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::list_product_sets][crate::client::ProductSearch::list_product_sets] calls.
#[derive(Clone, Debug)]
pub struct ListProductSets(RequestBuilder<model::ListProductSetsRequest>);

impl ListProductSets {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::ListProductSetsRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ListProductSetsResponse> {
        (*self.0.stub)
            .list_product_sets(self.0.request, self.0.options)
            .await
    }

    /// Streams each page in the collection.
    pub fn by_page(
        self,
    ) -> gax::paginator::Paginator<model::ListProductSetsResponse, gax::error::Error> {
        let token = self.0.request.page_token.clone();
        let execute = move |token: String| {
            let mut builder = self.clone();
            builder.0.request = builder.0.request.set_page_token(token);
            builder.send()
        };
        gax::paginator::Paginator::new(token, execute)
    }

    /// Streams each item in the collection.
    pub fn by_item(
        self,
    ) -> gax::paginator::ItemPaginator<model::ListProductSetsResponse, gax::error::Error> {
        self.by_page().items()
    }

    /// Sets the value of [parent][model::ListProductSetsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of [page_size][model::ListProductSetsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.0.request.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][model::ListProductSetsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.page_token = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListProductSets {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::get_product_set][crate::client::ProductSearch::get_product_set] calls.
#[derive(Clone, Debug)]
pub struct GetProductSet(RequestBuilder<model::GetProductSetRequest>);

impl GetProductSet {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::GetProductSetRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ProductSet> {
        (*self.0.stub)
            .get_product_set(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [name][model::GetProductSetRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.name = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetProductSet {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::update_product_set][crate::client::ProductSearch::update_product_set] calls.
#[derive(Clone, Debug)]
pub struct UpdateProductSet(RequestBuilder<model::UpdateProductSetRequest>);

impl UpdateProductSet {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::UpdateProductSetRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ProductSet> {
        (*self.0.stub)
            .update_product_set(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [product_set][model::UpdateProductSetRequest::product_set].
    ///
    /// This is a **required** field for requests.
    pub fn set_product_set<T: Into<model::ProductSet>>(mut self, v: T) -> Self {
        self.0.request.product_set = Some(v.into());
        self
    }

    /// Sets or clears the value of [product_set][model::UpdateProductSetRequest::product_set].
    pub fn set_or_clear_product_set<T: Into<model::ProductSet>>(mut self, v: Option<T>) -> Self {
        self.0.request.product_set = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][model::UpdateProductSetRequest::update_mask].
    pub fn set_update_mask<T: Into<model::FieldMask>>(mut self, v: T) -> Self {
        self.0.request.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][model::UpdateProductSetRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<model::FieldMask>>(mut self, v: Option<T>) -> Self {
        self.0.request.update_mask = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for UpdateProductSet {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::delete_product_set][crate::client::ProductSearch::delete_product_set] calls.
#[derive(Clone, Debug)]
pub struct DeleteProductSet(RequestBuilder<model::DeleteProductSetRequest>);

impl DeleteProductSet {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::DeleteProductSetRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        (*self.0.stub)
            .delete_product_set(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [name][model::DeleteProductSetRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.name = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DeleteProductSet {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::create_product][crate::client::ProductSearch::create_product] calls.
#[derive(Clone, Debug)]
pub struct CreateProduct(RequestBuilder<model::CreateProductRequest>);

impl CreateProduct {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::CreateProductRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::Product> {
        (*self.0.stub)
            .create_product(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [parent][model::CreateProductRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of [product][model::CreateProductRequest::product].
    ///
    /// This is a **required** field for requests.
    pub fn set_product<T: Into<model::Product>>(mut self, v: T) -> Self {
        self.0.request.product = Some(v.into());
        self
    }

    /// Sets or clears the value of [product][model::CreateProductRequest::product].
    pub fn set_or_clear_product<T: Into<model::Product>>(mut self, v: Option<T>) -> Self {
        self.0.request.product = v.map(|x| x.into());
        self
    }

    /// Sets the value of [product_id][model::CreateProductRequest::product_id].
    pub fn set_product_id<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.product_id = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CreateProduct {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::list_products][crate::client::ProductSearch::list_products] calls.
///
/// # Example
/// ```no_run
/// # use vision_v1::builder;
/// use builder::product_search::ListProducts;
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let mut items = builder.by_item();
/// while let Some(result) = items.next().await {
///   let item = result?;
/// }
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> ListProducts {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ListProducts(RequestBuilder<model::ListProductsRequest>);

impl ListProducts {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::ListProductsRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ListProductsResponse> {
        (*self.0.stub)
            .list_products(self.0.request, self.0.options)
            .await
    }

    /// Streams each page in the collection.
    pub fn by_page(
        self,
    ) -> gax::paginator::Paginator<model::ListProductsResponse, gax::error::Error> {
        let token = self.0.request.page_token.clone();
        let execute = move |token: String| {
            let mut builder = self.clone();
            builder.0.request = builder.0.request.set_page_token(token);
            builder.send()
        };
        gax::paginator::Paginator::new(token, execute)
    }

    /// Streams each item in the collection.
    pub fn by_item(
        self,
    ) -> gax::paginator::ItemPaginator<model::ListProductsResponse, gax::error::Error> {
        self.by_page().items()
    }

    /// Sets the value of [parent][model::ListProductsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of [page_size][model::ListProductsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.0.request.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][model::ListProductsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.page_token = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListProducts {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::get_product][crate::client::ProductSearch::get_product] calls.
#[derive(Clone, Debug)]
pub struct GetProduct(RequestBuilder<model::GetProductRequest>);

impl GetProduct {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::GetProductRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::Product> {
        (*self.0.stub)
            .get_product(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [name][model::GetProductRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.name = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetProduct {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::update_product][crate::client::ProductSearch::update_product] calls.
#[derive(Clone, Debug)]
pub struct UpdateProduct(RequestBuilder<model::UpdateProductRequest>);

impl UpdateProduct {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::UpdateProductRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::Product> {
        (*self.0.stub)
            .update_product(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [product][model::UpdateProductRequest::product].
    ///
    /// This is a **required** field for requests.
    pub fn set_product<T: Into<model::Product>>(mut self, v: T) -> Self {
        self.0.request.product = Some(v.into());
        self
    }

    /// Sets or clears the value of [product][model::UpdateProductRequest::product].
    pub fn set_or_clear_product<T: Into<model::Product>>(mut self, v: Option<T>) -> Self {
        self.0.request.product = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][model::UpdateProductRequest::update_mask].
    pub fn set_update_mask<T: Into<model::FieldMask>>(mut self, v: T) -> Self {
        self.0.request.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][model::UpdateProductRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<model::FieldMask>>(mut self, v: Option<T>) -> Self {
        self.0.request.update_mask = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for UpdateProduct {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::delete_product][crate::client::ProductSearch::delete_product] calls.
#[derive(Clone, Debug)]
pub struct DeleteProduct(RequestBuilder<model::DeleteProductRequest>);

impl DeleteProduct {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::DeleteProductRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        (*self.0.stub)
            .delete_product(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [name][model::DeleteProductRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.name = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DeleteProduct {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::create_reference_image][crate::client::ProductSearch::create_reference_image] calls.
#[derive(Clone, Debug)]
pub struct CreateReferenceImage(RequestBuilder<model::CreateReferenceImageRequest>);

impl CreateReferenceImage {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::CreateReferenceImageRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ReferenceImage> {
        (*self.0.stub)
            .create_reference_image(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [parent][model::CreateReferenceImageRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of [reference_image][model::CreateReferenceImageRequest::reference_image].
    ///
    /// This is a **required** field for requests.
    pub fn set_reference_image<T: Into<model::ReferenceImage>>(mut self, v: T) -> Self {
        self.0.request.reference_image = Some(v.into());
        self
    }

    /// Sets or clears the value of [reference_image][model::CreateReferenceImageRequest::reference_image].
    pub fn set_or_clear_reference_image<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<model::ReferenceImage>,
    {
        self.0.request.reference_image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reference_image_id][model::CreateReferenceImageRequest::reference_image_id].
    pub fn set_reference_image_id<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.reference_image_id = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for CreateReferenceImage {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::delete_reference_image][crate::client::ProductSearch::delete_reference_image] calls.
#[derive(Clone, Debug)]
pub struct DeleteReferenceImage(RequestBuilder<model::DeleteReferenceImageRequest>);

impl DeleteReferenceImage {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::DeleteReferenceImageRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        (*self.0.stub)
            .delete_reference_image(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [name][model::DeleteReferenceImageRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.name = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for DeleteReferenceImage {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::list_reference_images][crate::client::ProductSearch::list_reference_images] calls.
#[derive(Clone, Debug)]
pub struct ListReferenceImages(RequestBuilder<model::ListReferenceImagesRequest>);

impl ListReferenceImages {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::ListReferenceImagesRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ListReferenceImagesResponse> {
        (*self.0.stub)
            .list_reference_images(self.0.request, self.0.options)
            .await
    }

    /// Streams each page in the collection.
    pub fn by_page(
        self,
    ) -> gax::paginator::Paginator<model::ListReferenceImagesResponse, gax::error::Error> {
        let token = self.0.request.page_token.clone();
        let execute = move |token: String| {
            let mut builder = self.clone();
            builder.0.request = builder.0.request.set_page_token(token);
            builder.send()
        };
        gax::paginator::Paginator::new(token, execute)
    }

    /// Streams each item in the collection.
    pub fn by_item(
        self,
    ) -> gax::paginator::ItemPaginator<model::ListReferenceImagesResponse, gax::error::Error> {
        self.by_page().items()
    }

    /// Sets the value of [parent][model::ListReferenceImagesRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of [page_size][model::ListReferenceImagesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.0.request.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][model::ListReferenceImagesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.page_token = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListReferenceImages {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::get_reference_image][crate::client::ProductSearch::get_reference_image] calls.
#[derive(Clone, Debug)]
pub struct GetReferenceImage(RequestBuilder<model::GetReferenceImageRequest>);

impl GetReferenceImage {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::GetReferenceImageRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ReferenceImage> {
        (*self.0.stub)
            .get_reference_image(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [name][model::GetReferenceImageRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.name = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetReferenceImage {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::add_product_to_product_set][crate::client::ProductSearch::add_product_to_product_set] calls.
#[derive(Clone, Debug)]
pub struct AddProductToProductSet(RequestBuilder<model::AddProductToProductSetRequest>);

impl AddProductToProductSet {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::AddProductToProductSetRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        (*self.0.stub)
            .add_product_to_product_set(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [name][model::AddProductToProductSetRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.name = v.into();
        self
    }

    /// Sets the value of [product][model::AddProductToProductSetRequest::product].
    ///
    /// This is a **required** field for requests.
    pub fn set_product<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.product = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for AddProductToProductSet {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::remove_product_from_product_set][crate::client::ProductSearch::remove_product_from_product_set] calls.
#[derive(Clone, Debug)]
pub struct RemoveProductFromProductSet(RequestBuilder<model::RemoveProductFromProductSetRequest>);

impl RemoveProductFromProductSet {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V>(mut self, v: V) -> Self
    where
        V: Into<model::RemoveProductFromProductSetRequest>,
    {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<()> {
        (*self.0.stub)
            .remove_product_from_product_set(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [name][model::RemoveProductFromProductSetRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.name = v.into();
        self
    }

    /// Sets the value of [product][model::RemoveProductFromProductSetRequest::product].
    ///
    /// This is a **required** field for requests.
    pub fn set_product<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.product = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for RemoveProductFromProductSet {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::list_products_in_product_set][crate::client::ProductSearch::list_products_in_product_set] calls.
#[derive(Clone, Debug)]
pub struct ListProductsInProductSet(RequestBuilder<model::ListProductsInProductSetRequest>);

impl ListProductsInProductSet {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::ListProductsInProductSetRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::ListProductsInProductSetResponse> {
        (*self.0.stub)
            .list_products_in_product_set(self.0.request, self.0.options)
            .await
    }

    /// Streams each page in the collection.
    pub fn by_page(
        self,
    ) -> gax::paginator::Paginator<model::ListProductsInProductSetResponse, gax::error::Error> {
        let token = self.0.request.page_token.clone();
        let execute = move |token: String| {
            let mut builder = self.clone();
            builder.0.request = builder.0.request.set_page_token(token);
            builder.send()
        };
        gax::paginator::Paginator::new(token, execute)
    }

    /// Streams each item in the collection.
    pub fn by_item(
        self,
    ) -> gax::paginator::ItemPaginator<model::ListProductsInProductSetResponse, gax::error::Error> {
        self.by_page().items()
    }

    /// Sets the value of [name][model::ListProductsInProductSetRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.name = v.into();
        self
    }

    /// Sets the value of [page_size][model::ListProductsInProductSetRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.0.request.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][model::ListProductsInProductSetRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.page_token = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ListProductsInProductSet {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::import_product_sets][crate::client::ProductSearch::import_product_sets] calls.
///
/// # Example
/// ```no_run
/// # use vision_v1::builder;
/// use builder::product_search::ImportProductSets;
/// # tokio_test::block_on(async {
/// use lro::Poller;
///
/// let builder = prepare_request_builder();
/// let response = builder.poller().until_done().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> ImportProductSets {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ImportProductSets(RequestBuilder<model::ImportProductSetsRequest>);

impl ImportProductSets {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::ImportProductSetsRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    ///
    /// # Long running operations
    ///
    /// This starts, but does not poll, a longrunning operation. More information
    /// on [import_product_sets][crate::client::ProductSearch::import_product_sets].
    pub async fn send(self) -> Result<lro::model::Operation> {
        (*self.0.stub)
            .import_product_sets(self.0.request, self.0.options)
            .await
    }

    /// Creates a [Poller][lro::Poller] to work with `import_product_sets`.
    pub fn poller(
        self,
    ) -> impl lro::Poller<model::ImportProductSetsResponse, model::BatchOperationMetadata> {
        type Operation =
            lro::Operation<model::ImportProductSetsResponse, model::BatchOperationMetadata>;
        let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
        let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);

        let stub = self.0.stub.clone();
        let mut options = self.0.options.clone();
        options.set_retry_policy(gax::retry_policy::NeverRetry);
        let query = move |name| {
            let stub = stub.clone();
            let options = options.clone();
            async {
                let op = GetOperation::new(stub)
                    .set_name(name)
                    .with_options(options)
                    .send()
                    .await?;
                Ok(Operation::new(op))
            }
        };

        let start = move || async {
            let op = self.send().await?;
            Ok(Operation::new(op))
        };

        lro::new_poller(polling_error_policy, polling_backoff_policy, start, query)
    }

    /// Sets the value of [parent][model::ImportProductSetsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.parent = v.into();
        self
    }

    /// Sets the value of [input_config][model::ImportProductSetsRequest::input_config].
    ///
    /// This is a **required** field for requests.
    pub fn set_input_config<T: Into<model::ImportProductSetsInputConfig>>(mut self, v: T) -> Self {
        self.0.request.input_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [input_config][model::ImportProductSetsRequest::input_config].
    pub fn set_or_clear_input_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<model::ImportProductSetsInputConfig>,
    {
        self.0.request.input_config = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for ImportProductSets {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ProductSearch::get_operation][crate::client::ProductSearch::get_operation] calls.
#[derive(Clone, Debug)]
pub struct GetOperation(RequestBuilder<lro::model::GetOperationRequest>);

impl GetOperation {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<lro::model::GetOperationRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<lro::model::Operation> {
        (*self.0.stub)
            .get_operation(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [name][lro::model::GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request.name = v.into();
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetOperation {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}
