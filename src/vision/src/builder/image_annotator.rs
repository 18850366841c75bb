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
use crate::stub::dynamic::ImageAnnotator as Stub;
use gax::options::RequestOptions;
use std::sync::Arc;

/// A builder for [ImageAnnotator][crate::client::ImageAnnotator].
///
/// ```no_run
/// # tokio_test::block_on(async {
/// # use vision_v1::*;
/// # use builder::image_annotator::ClientBuilder;
/// # use client::ImageAnnotator;
/// let builder : ClientBuilder = ImageAnnotator::builder();
/// let client = builder
///     .with_endpoint("https://vision.googleapis.com")
///     .build().await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

pub(crate) mod client {
    use super::super::super::client::ImageAnnotator;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = ImageAnnotator;
        async fn build(
            self,
            config: gax::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

/// Common implementation for [crate::client::ImageAnnotator] request builders.
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

/// The request builder for [ImageAnnotator::batch_annotate_images][crate::client::ImageAnnotator::batch_annotate_images] calls.
///
/// # Example
/// ```no_run
/// # use vision_v1::builder;
/// use builder::image_annotator::BatchAnnotateImages;
/// use vision_v1::model::{AnnotateImageRequest, Image, feature::Type};
/// # tokio_test::block_on(async {
///
/// let builder = prepare_request_builder();
/// let response = builder.send().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> BatchAnnotateImages {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct BatchAnnotateImages(RequestBuilder<model::BatchAnnotateImagesRequest>);

impl BatchAnnotateImages {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::BatchAnnotateImagesRequest>>(mut self, v: V) -> Self {
        self.0.request = v.into();
        self
    }

    /// Sets all the options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.0.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::BatchAnnotateImagesResponse> {
        (*self.0.stub)
            .batch_annotate_images(self.0.request, self.0.options)
            .await
    }

    /// Sets the value of [requests][model::BatchAnnotateImagesRequest::requests].
    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<model::AnnotateImageRequest>,
    {
        self.0.request = self.0.request.set_requests(v);
        self
    }

    /// Sets the value of [parent][model::BatchAnnotateImagesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request = self.0.request.set_parent(v);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for BatchAnnotateImages {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ImageAnnotator::async_batch_annotate_images][crate::client::ImageAnnotator::async_batch_annotate_images] calls.
///
/// # Example
/// ```no_run
/// # use vision_v1::builder;
/// use builder::image_annotator::AsyncBatchAnnotateImages;
/// # tokio_test::block_on(async {
/// use lro::Poller;
///
/// let builder = prepare_request_builder();
/// let response = builder.poller().until_done().await?;
/// # gax::Result::<()>::Ok(()) });
///
/// fn prepare_request_builder() -> AsyncBatchAnnotateImages {
///   # panic!();
///   // ... details omitted ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AsyncBatchAnnotateImages(RequestBuilder<model::AsyncBatchAnnotateImagesRequest>);

impl AsyncBatchAnnotateImages {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::AsyncBatchAnnotateImagesRequest>>(mut self, v: V) -> Self {
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
    /// on [async_batch_annotate_images][crate::client::ImageAnnotator::async_batch_annotate_images].
    pub async fn send(self) -> Result<lro::model::Operation> {
        (*self.0.stub)
            .async_batch_annotate_images(self.0.request, self.0.options)
            .await
    }

    /// Creates a [Poller][lro::Poller] to work with `async_batch_annotate_images`.
    pub fn poller(
        self,
    ) -> impl lro::Poller<model::AsyncBatchAnnotateImagesResponse, model::OperationMetadata> {
        type Operation =
            lro::Operation<model::AsyncBatchAnnotateImagesResponse, model::OperationMetadata>;
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

    /// Sets the value of [requests][model::AsyncBatchAnnotateImagesRequest::requests].
    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<model::AnnotateImageRequest>,
    {
        self.0.request = self.0.request.set_requests(v);
        self
    }

    /// Sets the value of [output_config][model::AsyncBatchAnnotateImagesRequest::output_config].
    ///
    /// This is a **required** field for requests.
    pub fn set_output_config<T: Into<model::OutputConfig>>(mut self, v: T) -> Self {
        self.0.request = self.0.request.set_output_config(v);
        self
    }

    /// Sets the value of [parent][model::AsyncBatchAnnotateImagesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request = self.0.request.set_parent(v);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for AsyncBatchAnnotateImages {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ImageAnnotator::async_batch_annotate_files][crate::client::ImageAnnotator::async_batch_annotate_files] calls.
#[derive(Clone, Debug)]
pub struct AsyncBatchAnnotateFiles(RequestBuilder<model::AsyncBatchAnnotateFilesRequest>);

impl AsyncBatchAnnotateFiles {
    pub(crate) fn new(stub: Arc<dyn Stub>) -> Self {
        Self(RequestBuilder::new(stub))
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::AsyncBatchAnnotateFilesRequest>>(mut self, v: V) -> Self {
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
    /// on [async_batch_annotate_files][crate::client::ImageAnnotator::async_batch_annotate_files].
    pub async fn send(self) -> Result<lro::model::Operation> {
        (*self.0.stub)
            .async_batch_annotate_files(self.0.request, self.0.options)
            .await
    }

    /// Creates a [Poller][lro::Poller] to work with `async_batch_annotate_files`.
    pub fn poller(
        self,
    ) -> impl lro::Poller<model::AsyncBatchAnnotateFilesResponse, model::OperationMetadata> {
        type Operation =
            lro::Operation<model::AsyncBatchAnnotateFilesResponse, model::OperationMetadata>;
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

    /// Sets the value of [requests][model::AsyncBatchAnnotateFilesRequest::requests].
    ///
    /// This is a **required** field for requests.
    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<model::AsyncAnnotateFileRequest>,
    {
        self.0.request = self.0.request.set_requests(v);
        self
    }

    /// Sets the value of [parent][model::AsyncBatchAnnotateFilesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.0.request = self.0.request.set_parent(v);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for AsyncBatchAnnotateFiles {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}

/// The request builder for [ImageAnnotator::get_operation][crate::client::ImageAnnotator::get_operation] calls.
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
        self.0.request = self.0.request.set_name(v);
        self
    }
}

#[doc(hidden)]
impl gax::options::internal::RequestBuilder for GetOperation {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.0.options
    }
}
