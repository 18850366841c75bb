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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use crate::Result;
use crate::model;
use std::sync::Arc;

/// Implements a client for the Cloud Vision API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use vision_v1::client::ImageAnnotator;
/// let client = ImageAnnotator::builder().build().await?;
/// // use `client` to make requests to the Cloud Vision API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service that performs Google Cloud Vision API detection tasks over client
/// images, such as face, landmark, logo, label, and text detection. The
/// ImageAnnotator service returns detected entities from the images.
///
/// # Configuration
///
/// To configure `ImageAnnotator` use the `with_*` methods in the type returned
/// by [builder()][ImageAnnotator::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://vision.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks may want to override this
///   default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::image_annotator::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::image_annotator::ClientBuilder::with_credentials
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `ImageAnnotator` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `ImageAnnotator` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct ImageAnnotator {
    inner: Arc<dyn super::stub::dynamic::ImageAnnotator>,
}

impl ImageAnnotator {
    /// Returns a builder for [ImageAnnotator].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use vision_v1::client::ImageAnnotator;
    /// let client = ImageAnnotator::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::image_annotator::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::image_annotator::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ImageAnnotator + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::ImageAnnotator>> {
        if conf.tracing {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::ImageAnnotator> {
        super::transport::ImageAnnotator::new(conf).await
    }

    async fn build_with_tracing(
        conf: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::ImageAnnotator> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::ImageAnnotator::new)
    }

    /// Run image detection and annotation for a batch of images.
    pub fn batch_annotate_images(&self) -> super::builder::image_annotator::BatchAnnotateImages {
        super::builder::image_annotator::BatchAnnotateImages::new(self.inner.clone())
    }

    /// Run image detection and annotation for a batch of images.
    ///
    /// The results are written to the Google Cloud Storage location in the
    /// `output_config`, as JSON files with a `responses` array. Each file
    /// holds at most `batch_size` responses.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use the `poller()` method in the returned builder to wait for the result.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    pub fn async_batch_annotate_images(
        &self,
    ) -> super::builder::image_annotator::AsyncBatchAnnotateImages {
        super::builder::image_annotator::AsyncBatchAnnotateImages::new(self.inner.clone())
    }

    /// Run asynchronous image detection and annotation for a list of generic
    /// files, such as PDF files, which may contain multiple pages and multiple
    /// images per page.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use the `poller()` method in the returned builder to wait for the result.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    pub fn async_batch_annotate_files(
        &self,
    ) -> super::builder::image_annotator::AsyncBatchAnnotateFiles {
        super::builder::image_annotator::AsyncBatchAnnotateFiles::new(self.inner.clone())
    }

    /// Gets the latest state of a long-running operation.
    pub fn get_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::image_annotator::GetOperation {
        super::builder::image_annotator::GetOperation::new(self.inner.clone()).set_name(name)
    }

    /// Annotates a single image.
    ///
    /// Sends a batch with one request and returns its only response. The
    /// per-image [error][model::AnnotateImageResponse::error] is returned
    /// as-is, the caller decides how to handle it.
    ///
    /// # Example
    /// ```no_run
    /// # use vision_v1::client::ImageAnnotator;
    /// # use vision_v1::model::{Image, feature::Type};
    /// # async fn sample(client: &ImageAnnotator) -> vision_v1::Result<()> {
    /// let image = Image::from_uri("gs://my-bucket/logo.png");
    /// let response = client.annotate_image(image, [Type::LogoDetection]).await?;
    /// for logo in response.logo_annotations {
    ///     println!("{}", logo.description);
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn annotate_image<T, V>(
        &self,
        image: model::Image,
        features: T,
    ) -> Result<model::AnnotateImageResponse>
    where
        T: IntoIterator<Item = V>,
        V: Into<model::Feature>,
    {
        let request = model::AnnotateImageRequest::new()
            .set_image(image)
            .set_features(features);
        let response = self
            .batch_annotate_images()
            .set_requests([request])
            .send()
            .await?;
        response.responses.into_iter().next().ok_or_else(|| {
            crate::Error::deser("the service returned an empty list of responses")
        })
    }

    /// Detects logos in a single image.
    pub async fn logo_detection(
        &self,
        image: model::Image,
    ) -> Result<model::AnnotateImageResponse> {
        self.annotate_image(image, [model::feature::Type::LogoDetection])
            .await
    }

    /// Detects dense text, such as scanned documents, in a single image.
    pub async fn document_text_detection(
        &self,
        image: model::Image,
    ) -> Result<model::AnnotateImageResponse> {
        self.annotate_image(image, [model::feature::Type::DocumentTextDetection])
            .await
    }
}

/// Implements a client for the Cloud Vision API product search.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use vision_v1::client::ProductSearch;
/// let client = ProductSearch::builder().build().await?;
/// // use `client` to make requests to the Cloud Vision API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manages Products and ProductSets of reference images for use in product
/// search. It uses the following resource model:
///
/// - The API has a collection of ProductSet resources, named
///   `projects/*/locations/*/productSets/*`, which acts as a way to put
///   different products into groups to limit identification.
///
/// In parallel,
///
/// - The API has a collection of Product resources, named
///   `projects/*/locations/*/products/*`
///
/// - Each Product has a collection of ReferenceImage resources, named
///   `projects/*/locations/*/products/*/referenceImages/*`
///
/// # Configuration
///
/// To configure `ProductSearch` use the `with_*` methods in the type returned
/// by [builder()][ProductSearch::builder]. The default configuration should
/// work for most applications.
///
/// # Pooling and Cloning
///
/// `ProductSearch` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `ProductSearch` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct ProductSearch {
    inner: Arc<dyn super::stub::dynamic::ProductSearch>,
}

impl ProductSearch {
    /// Returns a builder for [ProductSearch].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use vision_v1::client::ProductSearch;
    /// let client = ProductSearch::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::product_search::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::product_search::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ProductSearch + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::ProductSearch>> {
        if conf.tracing {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::ProductSearch> {
        super::transport::ProductSearch::new(conf).await
    }

    async fn build_with_tracing(
        conf: gax::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::ProductSearch> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::ProductSearch::new)
    }

    /// Creates and returns a new ProductSet resource.
    ///
    /// The `product_set_id` is optional. When empty, the service assigns an id.
    pub fn create_product_set(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::product_search::CreateProductSet {
        super::builder::product_search::CreateProductSet::new(self.inner.clone()).set_parent(parent)
    }

    /// Lists ProductSets in an unspecified order.
    pub fn list_product_sets(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::product_search::ListProductSets {
        super::builder::product_search::ListProductSets::new(self.inner.clone()).set_parent(parent)
    }

    /// Gets information associated with a ProductSet.
    pub fn get_product_set(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::GetProductSet {
        super::builder::product_search::GetProductSet::new(self.inner.clone()).set_name(name)
    }

    /// Makes changes to a ProductSet resource.
    ///
    /// Only `display_name` can be updated currently. Use the `update_mask` to
    /// select the fields to change.
    pub fn update_product_set(&self) -> super::builder::product_search::UpdateProductSet {
        super::builder::product_search::UpdateProductSet::new(self.inner.clone())
    }

    /// Permanently deletes a ProductSet.
    ///
    /// Products and ReferenceImages in the ProductSet are not deleted.
    pub fn delete_product_set(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::DeleteProductSet {
        super::builder::product_search::DeleteProductSet::new(self.inner.clone()).set_name(name)
    }

    /// Creates and returns a new product resource.
    pub fn create_product(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::product_search::CreateProduct {
        super::builder::product_search::CreateProduct::new(self.inner.clone()).set_parent(parent)
    }

    /// Lists products in an unspecified order.
    pub fn list_products(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::product_search::ListProducts {
        super::builder::product_search::ListProducts::new(self.inner.clone()).set_parent(parent)
    }

    /// Gets information associated with a Product.
    pub fn get_product(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::GetProduct {
        super::builder::product_search::GetProduct::new(self.inner.clone()).set_name(name)
    }

    /// Makes changes to a Product resource.
    ///
    /// Only the `display_name`, `description`, and `labels` fields can be updated
    /// right now.
    pub fn update_product(&self) -> super::builder::product_search::UpdateProduct {
        super::builder::product_search::UpdateProduct::new(self.inner.clone())
    }

    /// Permanently deletes a product and its reference images.
    pub fn delete_product(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::DeleteProduct {
        super::builder::product_search::DeleteProduct::new(self.inner.clone()).set_name(name)
    }

    /// Creates and returns a new ReferenceImage resource.
    ///
    /// The `parent` is the resource name of the Product, the image `uri` must be a
    /// Google Cloud Storage URI.
    pub fn create_reference_image(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::product_search::CreateReferenceImage {
        super::builder::product_search::CreateReferenceImage::new(self.inner.clone())
            .set_parent(parent)
    }

    /// Permanently deletes a reference image.
    pub fn delete_reference_image(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::DeleteReferenceImage {
        super::builder::product_search::DeleteReferenceImage::new(self.inner.clone()).set_name(name)
    }

    /// Lists reference images of a Product.
    pub fn list_reference_images(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::product_search::ListReferenceImages {
        super::builder::product_search::ListReferenceImages::new(self.inner.clone())
            .set_parent(parent)
    }

    /// Gets information associated with a ReferenceImage.
    pub fn get_reference_image(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::GetReferenceImage {
        super::builder::product_search::GetReferenceImage::new(self.inner.clone()).set_name(name)
    }

    /// Adds a Product to the specified ProductSet.
    ///
    /// If the Product is already present, no change is made.
    pub fn add_product_to_product_set(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::AddProductToProductSet {
        super::builder::product_search::AddProductToProductSet::new(self.inner.clone())
            .set_name(name)
    }

    /// Removes a Product from the specified ProductSet.
    pub fn remove_product_from_product_set(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::RemoveProductFromProductSet {
        super::builder::product_search::RemoveProductFromProductSet::new(self.inner.clone())
            .set_name(name)
    }

    /// Lists the Products in a ProductSet, in an unspecified order.
    pub fn list_products_in_product_set(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::ListProductsInProductSet {
        super::builder::product_search::ListProductsInProductSet::new(self.inner.clone())
            .set_name(name)
    }

    /// Asynchronous API that imports a list of reference images to specified
    /// product sets based on a list of image information.
    ///
    /// Each CSV line creates (or reuses) a ProductSet, a Product, and a
    /// ReferenceImage. The result of the operation contains one status per line.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use the `poller()` method in the returned builder to wait for the result.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    pub fn import_product_sets(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::product_search::ImportProductSets {
        super::builder::product_search::ImportProductSets::new(self.inner.clone())
            .set_parent(parent)
    }

    /// Gets the latest state of a long-running operation.
    pub fn get_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::GetOperation {
        super::builder::product_search::GetOperation::new(self.inner.clone()).set_name(name)
    }
}
