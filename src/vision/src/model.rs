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

//! The request and response messages of the Cloud Vision API, in their JSON
//! representation.
//!
//! Only the fields used by the clients in this crate are modeled. Unknown
//! fields in responses are ignored.

use gax::error::rpc::Status;

/// The type of Google Cloud Vision API detection to perform, and the maximum
/// number of results to return for that type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Feature {
    /// The feature type.
    pub r#type: feature::Type,

    /// Maximum number of results of this type. Does not apply to
    /// `TEXT_DETECTION`, `DOCUMENT_TEXT_DETECTION`, or `CROP_HINTS`.
    #[serde(skip_serializing_if = "is_zero")]
    pub max_results: i32,

    /// Model to use for the feature. Empty selects `builtin/stable`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub model: String,
}

impl Feature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [r#type][Feature::type].
    pub fn set_type<T: Into<feature::Type>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [max_results][Feature::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = v.into();
        self
    }

    /// Sets the value of [model][Feature::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = v.into();
        self
    }
}

impl From<feature::Type> for Feature {
    fn from(value: feature::Type) -> Self {
        Self::new().set_type(value)
    }
}

/// Defines additional types related to [Feature].
pub mod feature {
    /// Type of Google Cloud Vision API feature to be extracted.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Type {
        /// Unspecified feature type.
        #[default]
        #[serde(rename = "TYPE_UNSPECIFIED")]
        Unspecified,
        FaceDetection,
        LandmarkDetection,
        LogoDetection,
        LabelDetection,
        /// Run text detection / optical character recognition (OCR).
        TextDetection,
        /// Run dense text document OCR. Takes precedence when both
        /// `DOCUMENT_TEXT_DETECTION` and `TEXT_DETECTION` are present.
        DocumentTextDetection,
        SafeSearchDetection,
        ImageProperties,
        CropHints,
        WebDetection,
        ProductSearch,
        ObjectLocalization,
    }
}

/// External image source (Google Cloud Storage or web URL image location).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageSource {
    /// Use `image_uri` instead.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gcs_image_uri: String,

    /// The URI of the source image. Can be a Google Cloud Storage URI of the
    /// form `gs://bucket_name/object_name`, or a publicly-accessible image
    /// HTTP/HTTPS URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_uri: String,
}

impl ImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [image_uri][ImageSource::image_uri].
    pub fn set_image_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.image_uri = v.into();
        self
    }
}

/// Client image to perform Google Cloud Vision API tasks over.
///
/// An image is either inline content or a reference to an external source.
/// The helpers in [Image] build either kind:
///
/// ```
/// # use vision_v1::model::Image;
/// let inline = Image::from_bytes(vec![0x89_u8, 0x50, 0x4e, 0x47]);
/// let remote = Image::from_uri("gs://my-bucket/logo.png");
/// # assert!(inline.source.is_none());
/// # assert!(remote.content.is_empty());
/// ```
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Image {
    /// Image content, represented as a stream of bytes. The JSON
    /// representation uses base64.
    #[serde(skip_serializing_if = "bytes::Bytes::is_empty")]
    #[serde_as(as = "serde_with::base64::Base64")]
    pub content: bytes::Bytes,

    /// Google Cloud Storage image location, or publicly-accessible image URL.
    /// If both `content` and `source` are provided, `content` takes
    /// precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ImageSource>,
}

impl Image {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [content][Image::content].
    pub fn set_content<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.content = v.into();
        self
    }

    /// Sets the value of [source][Image::source].
    pub fn set_source<T: Into<ImageSource>>(mut self, v: T) -> Self {
        self.source = Some(v.into());
        self
    }

    /// An image with inline content.
    pub fn from_bytes<T: Into<bytes::Bytes>>(content: T) -> Self {
        Self::new().set_content(content)
    }

    /// An image stored in Google Cloud Storage (`gs://`) or on the web
    /// (`https://`).
    pub fn from_uri<T: Into<String>>(uri: T) -> Self {
        Self::new().set_source(ImageSource::new().set_image_uri(uri))
    }

    /// An image with the contents of a reader, such as an open file.
    ///
    /// # Example
    /// ```
    /// # use vision_v1::model::Image;
    /// # tokio_test::block_on(async {
    /// let data: &[u8] = b"not really a png";
    /// let image = Image::from_reader(data).await?;
    /// assert_eq!(image.content.as_ref(), data);
    /// # vision_v1::Result::<()>::Ok(()) });
    /// ```
    pub async fn from_reader<R>(mut reader: R) -> crate::Result<Self>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        use tokio::io::AsyncReadExt;
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .await
            .map_err(gax::error::Error::binding)?;
        Ok(Self::from_bytes(content))
    }

    /// An image with the contents of a local file.
    ///
    /// The file is read by the client, the service receives the inline
    /// content.
    pub async fn from_filename<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = tokio::fs::read(path.as_ref())
            .await
            .map_err(gax::error::Error::binding)?;
        Ok(Self::from_bytes(content))
    }
}

/// Request for performing Google Cloud Vision API tasks over a user-provided
/// image, with user-requested features.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnnotateImageRequest {
    /// The image to be processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Requested features.
    pub features: Vec<Feature>,
}

impl AnnotateImageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [image][AnnotateImageRequest::image].
    pub fn set_image<T: Into<Image>>(mut self, v: T) -> Self {
        self.image = Some(v.into());
        self
    }

    /// Sets the value of [features][AnnotateImageRequest::features].
    pub fn set_features<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Feature>,
    {
        self.features = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A vertex represents a 2D point in the image, in pixels.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

/// A vertex in normalized coordinates, from 0 to 1.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct NormalizedVertex {
    pub x: f32,
    pub y: f32,
}

/// A bounding polygon for the detected image annotation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BoundingPoly {
    /// The bounding polygon vertices.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<Vertex>,

    /// The bounding polygon normalized vertices.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub normalized_vertices: Vec<NormalizedVertex>,
}

impl BoundingPoly {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [normalized_vertices][BoundingPoly::normalized_vertices].
    pub fn set_normalized_vertices<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<NormalizedVertex>,
    {
        self.normalized_vertices = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl From<(f32, f32)> for NormalizedVertex {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Set of detected entity features.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityAnnotation {
    /// Opaque entity ID.
    pub mid: String,
    /// The language code for the locale in which the entity textual
    /// `description` is expressed.
    pub locale: String,
    /// Entity textual description, expressed in its `locale` language.
    pub description: String,
    /// Overall score of the result. Range [0, 1].
    pub score: f32,
    /// The relevancy of the annotation to the image. Range [0, 1].
    pub topicality: f32,
    /// Image region to which this entity belongs.
    pub bounding_poly: Option<BoundingPoly>,
}

/// A page of a [TextAnnotation].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Page {
    pub width: i32,
    pub height: i32,
    pub confidence: f32,
}

/// The result of `DOCUMENT_TEXT_DETECTION`: the hierarchy of pages and the
/// text they contain.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextAnnotation {
    /// List of pages detected by OCR.
    pub pages: Vec<Page>,
    /// UTF-8 text detected on the pages.
    pub text: String,
}

/// If an image was produced from a file (e.g. a PDF), this message gives
/// information about the source of that image.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageAnnotationContext {
    /// The URI of the file used to produce the image.
    pub uri: String,
    /// If the file was a PDF or TIFF, this field gives the page number within
    /// the file used to produce the image.
    pub page_number: i32,
}

/// Response to an image annotation request.
///
/// This is also the shape of each element of the `responses` array in the
/// files written by the asynchronous batch methods.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnnotateImageResponse {
    /// If present, logo detection has completed successfully.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub logo_annotations: Vec<EntityAnnotation>,

    /// If present, label detection has completed successfully.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_annotations: Vec<EntityAnnotation>,

    /// If present, text (OCR) detection has completed successfully.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text_annotations: Vec<EntityAnnotation>,

    /// If present, text (OCR) detection or document (OCR) text detection has
    /// completed successfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text_annotation: Option<TextAnnotation>,

    /// If set, represents the error message for the operation. Note that
    /// filled-in image annotations are guaranteed to be correct, even when
    /// `error` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,

    /// If present, contextual information is needed to understand where this
    /// image comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ImageAnnotationContext>,
}

/// Multiple image annotation requests are batched into a single service call.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchAnnotateImagesRequest {
    /// Individual image annotation requests for this batch.
    pub requests: Vec<AnnotateImageRequest>,

    /// Optional. Target project and location to make a call, in
    /// `projects/{project}/locations/{location}` format.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,
}

impl BatchAnnotateImagesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [requests][BatchAnnotateImagesRequest::requests].
    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AnnotateImageRequest>,
    {
        self.requests = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [parent][BatchAnnotateImagesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// Response to a batch image annotation request.
///
/// The files written by [AsyncBatchAnnotateImages][crate::builder::image_annotator::AsyncBatchAnnotateImages]
/// have this shape.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchAnnotateImagesResponse {
    /// Individual responses to image annotation requests within the batch.
    pub responses: Vec<AnnotateImageResponse>,
}

/// The Google Cloud Storage location where the output will be written to.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsDestination {
    /// Google Cloud Storage URI prefix where the results will be stored.
    ///
    /// If the URI ends with `/`, the output files are written to that
    /// "folder". Otherwise the URI is used as a prefix for the output file
    /// names.
    pub uri: String,
}

impl GcsDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [uri][GcsDestination::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = v.into();
        self
    }
}

/// The desired output location and metadata.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OutputConfig {
    /// The Google Cloud Storage location to write the output(s) to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_destination: Option<GcsDestination>,

    /// The max number of response protos to put into each output JSON file
    /// on Google Cloud Storage. Zero selects the service default (20).
    #[serde(skip_serializing_if = "is_zero")]
    pub batch_size: i32,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [gcs_destination][OutputConfig::gcs_destination].
    pub fn set_gcs_destination<T: Into<GcsDestination>>(mut self, v: T) -> Self {
        self.gcs_destination = Some(v.into());
        self
    }

    /// Sets the value of [batch_size][OutputConfig::batch_size].
    pub fn set_batch_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.batch_size = v.into();
        self
    }

    /// Writes the output files to the given `gs://` prefix.
    pub fn gcs_prefix<T: Into<String>>(uri: T) -> Self {
        Self::new().set_gcs_destination(GcsDestination::new().set_uri(uri))
    }
}

/// The Google Cloud Storage location where the input will be read from.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsSource {
    /// Google Cloud Storage URI for the input file. This must only be a
    /// Google Cloud Storage object. Wildcards are not currently supported.
    pub uri: String,
}

impl GcsSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [uri][GcsSource::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = v.into();
        self
    }
}

/// The desired input location and metadata.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InputConfig {
    /// The Google Cloud Storage location to read the input from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_source: Option<GcsSource>,

    /// The type of the file. Currently only `application/pdf`, `image/tiff`
    /// and `image/gif` are supported.
    pub mime_type: String,
}

impl InputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [gcs_source][InputConfig::gcs_source].
    pub fn set_gcs_source<T: Into<GcsSource>>(mut self, v: T) -> Self {
        self.gcs_source = Some(v.into());
        self
    }

    /// Sets the value of [mime_type][InputConfig::mime_type].
    pub fn set_mime_type<T: Into<String>>(mut self, v: T) -> Self {
        self.mime_type = v.into();
        self
    }
}

/// An offline file annotation request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsyncAnnotateFileRequest {
    /// Information about the input file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_config: Option<InputConfig>,

    /// Requested features.
    pub features: Vec<Feature>,

    /// The desired output location and metadata (e.g. format).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_config: Option<OutputConfig>,
}

impl AsyncAnnotateFileRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [input_config][AsyncAnnotateFileRequest::input_config].
    pub fn set_input_config<T: Into<InputConfig>>(mut self, v: T) -> Self {
        self.input_config = Some(v.into());
        self
    }

    /// Sets the value of [features][AsyncAnnotateFileRequest::features].
    pub fn set_features<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Feature>,
    {
        self.features = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [output_config][AsyncAnnotateFileRequest::output_config].
    pub fn set_output_config<T: Into<OutputConfig>>(mut self, v: T) -> Self {
        self.output_config = Some(v.into());
        self
    }
}

/// The response for a single offline file annotation request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsyncAnnotateFileResponse {
    /// The output location and metadata from `AsyncAnnotateFileRequest`.
    pub output_config: Option<OutputConfig>,
}

/// Request for async image annotation for a list of images.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsyncBatchAnnotateImagesRequest {
    /// Individual image annotation requests for this batch.
    pub requests: Vec<AnnotateImageRequest>,

    /// The desired output location and metadata (e.g. format).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_config: Option<OutputConfig>,

    /// Optional. Target project and location to make a call.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,
}

impl AsyncBatchAnnotateImagesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [requests][AsyncBatchAnnotateImagesRequest::requests].
    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AnnotateImageRequest>,
    {
        self.requests = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [output_config][AsyncBatchAnnotateImagesRequest::output_config].
    pub fn set_output_config<T: Into<OutputConfig>>(mut self, v: T) -> Self {
        self.output_config = Some(v.into());
        self
    }

    /// Sets the value of [parent][AsyncBatchAnnotateImagesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// Response to an async batch image annotation request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsyncBatchAnnotateImagesResponse {
    /// The output location and metadata from
    /// `AsyncBatchAnnotateImagesRequest`.
    pub output_config: Option<OutputConfig>,
}

/// Multiple async file annotation requests are batched into a single service
/// call.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsyncBatchAnnotateFilesRequest {
    /// Individual async file annotation requests for this batch.
    pub requests: Vec<AsyncAnnotateFileRequest>,

    /// Optional. Target project and location to make a call.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,
}

impl AsyncBatchAnnotateFilesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [requests][AsyncBatchAnnotateFilesRequest::requests].
    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AsyncAnnotateFileRequest>,
    {
        self.requests = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [parent][AsyncBatchAnnotateFilesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// Response to an async batch file annotation request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsyncBatchAnnotateFilesResponse {
    /// The list of file annotation responses, one for each request in
    /// `AsyncBatchAnnotateFilesRequest`.
    pub responses: Vec<AsyncAnnotateFileResponse>,
}

/// Response to a single file annotation request. A file may contain one or
/// more images, which individually have their own responses.
///
/// The files written by
/// [AsyncBatchAnnotateFiles][crate::builder::image_annotator::AsyncBatchAnnotateFiles]
/// have this shape.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnnotateFileResponse {
    /// Information about the file for which this response is generated.
    pub input_config: Option<InputConfig>,
    /// Individual responses to images found within the file.
    pub responses: Vec<AnnotateImageResponse>,
    /// This field gives the total number of pages in the file.
    pub total_pages: i32,
    /// If set, represents the error message for the failed request.
    pub error: Option<Status>,
}

/// Contains metadata for the async batch annotate operations.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationMetadata {
    /// Current state of the batch operation.
    pub state: operation_metadata::State,
    /// The time when the batch request was received, in RFC 3339 format.
    pub create_time: String,
    /// The time when the operation result was last updated, in RFC 3339
    /// format.
    pub update_time: String,
}

/// Defines additional types related to [OperationMetadata].
pub mod operation_metadata {
    /// Batch operation states.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        #[default]
        #[serde(rename = "STATE_UNSPECIFIED")]
        Unspecified,
        /// Request is received.
        Created,
        /// Request is actively being processed.
        Running,
        /// The batch processing is done.
        Done,
        /// The batch processing was cancelled.
        Cancelled,
    }
}

/// Metadata for the batch operations such as the current state.
///
/// This is included in the `metadata` field of the operation returned by
/// `ImportProductSets`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchOperationMetadata {
    /// The current state of the batch operation.
    pub state: batch_operation_metadata::State,
    /// The time when the batch request was submitted to the server.
    pub submit_time: String,
    /// The time when the batch request is finished.
    pub end_time: String,
}

/// Defines additional types related to [BatchOperationMetadata].
pub mod batch_operation_metadata {
    /// Enumerates the possible states that the batch request can be in.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        #[default]
        #[serde(rename = "STATE_UNSPECIFIED")]
        Unspecified,
        Processing,
        Successful,
        Failed,
        Cancelled,
    }
}

/// A `FieldMask` represents a set of field paths used in update operations.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FieldMask {
    /// The set of field mask paths.
    pub paths: Vec<String>,
}

impl FieldMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [paths][FieldMask::paths].
    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// The encoding used in query parameters: a comma-separated list.
    pub(crate) fn to_query(&self) -> String {
        self.paths.join(",")
    }
}

/// A product label represented as a key-value pair.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct KeyValue {
    /// The key of the label attached to the product.
    pub key: String,
    /// The value of the label attached to the product.
    pub value: String,
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for KeyValue {
    fn from((key, value): (K, V)) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A Product contains ReferenceImages.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Product {
    /// The resource name of the product, in
    /// `projects/{project}/locations/{location}/products/{product}` format.
    ///
    /// This field is ignored when creating a product.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The user-provided name for this Product. Must not be empty.
    pub display_name: String,

    /// User-provided metadata to be stored with this product.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Immutable. The category for the product identified by the reference
    /// image. For example, `apparel`, `homegoods-v2` or `toys-v2`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub product_category: String,

    /// Key-value pairs that can be attached to a product.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_labels: Vec<KeyValue>,
}

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Product::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][Product::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [description][Product::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [product_category][Product::product_category].
    pub fn set_product_category<T: Into<String>>(mut self, v: T) -> Self {
        self.product_category = v.into();
        self
    }

    /// Sets the value of [product_labels][Product::product_labels].
    pub fn set_product_labels<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<KeyValue>,
    {
        self.product_labels = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A ProductSet contains Products. A ProductSet can contain a maximum of 1
/// million reference images.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductSet {
    /// The resource name of the ProductSet, in
    /// `projects/{project}/locations/{location}/productSets/{product_set}`
    /// format.
    ///
    /// This field is ignored when creating a ProductSet.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The user-provided name for this ProductSet. Must not be empty.
    pub display_name: String,

    /// Output only. The time at which this ProductSet was last indexed, in
    /// RFC 3339 format.
    #[serde(skip_serializing)]
    pub index_time: String,

    /// Output only. If there was an error with indexing the product set, the
    /// field is populated.
    #[serde(skip_serializing)]
    pub index_error: Option<Status>,
}

impl ProductSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][ProductSet::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][ProductSet::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }
}

/// A `ReferenceImage` represents a product image and its associated metadata,
/// such as bounding boxes.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReferenceImage {
    /// The resource name of the reference image, in
    /// `projects/{project}/locations/{location}/products/{product}/referenceImages/{reference_image}`
    /// format.
    ///
    /// This field is ignored when creating a reference image.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The Google Cloud Storage URI of the reference image, in
    /// `gs://bucket_name/object_name` format. Required.
    pub uri: String,

    /// Optional. Bounding polygons around the areas of interest in the
    /// reference image. If this field is empty, the system will try to
    /// detect regions of interest.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bounding_polys: Vec<BoundingPoly>,
}

impl ReferenceImage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][ReferenceImage::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [uri][ReferenceImage::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = v.into();
        self
    }

    /// Sets the value of [bounding_polys][ReferenceImage::bounding_polys].
    pub fn set_bounding_polys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BoundingPoly>,
    {
        self.bounding_polys = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Response message for the `ListProductSets` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListProductSetsResponse {
    /// List of ProductSets.
    pub product_sets: Vec<ProductSet>,
    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: String,
}

impl gax::paginator::PageableResponse for ListProductSetsResponse {
    type PageItem = ProductSet;

    fn items(self) -> Vec<Self::PageItem> {
        self.product_sets
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Response message for the `ListProducts` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListProductsResponse {
    /// List of products.
    pub products: Vec<Product>,
    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: String,
}

impl gax::paginator::PageableResponse for ListProductsResponse {
    type PageItem = Product;

    fn items(self) -> Vec<Self::PageItem> {
        self.products
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Response message for the `ListReferenceImages` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListReferenceImagesResponse {
    /// The list of reference images.
    pub reference_images: Vec<ReferenceImage>,
    /// The maximum number of items to return. Default 10, maximum 100.
    pub page_size: i32,
    /// The next_page_token returned from a previous List request, if any.
    pub next_page_token: String,
}

impl gax::paginator::PageableResponse for ListReferenceImagesResponse {
    type PageItem = ReferenceImage;

    fn items(self) -> Vec<Self::PageItem> {
        self.reference_images
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Response message for the `ListProductsInProductSet` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListProductsInProductSetResponse {
    /// The list of Products.
    pub products: Vec<Product>,
    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: String,
}

impl gax::paginator::PageableResponse for ListProductsInProductSetResponse {
    type PageItem = Product;

    fn items(self) -> Vec<Self::PageItem> {
        self.products
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// The Google Cloud Storage location for a csv file which preserves a list of
/// ImportProductSetRequests in each line.
///
/// Each line has the following columns, in order:
///
/// `image-uri,image-id,product-set-id,product-id,product-category,product-display-name,labels,bounding-poly`
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportProductSetsGcsSource {
    /// The Google Cloud Storage URI of the input csv file.
    pub csv_file_uri: String,
}

impl ImportProductSetsGcsSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [csv_file_uri][ImportProductSetsGcsSource::csv_file_uri].
    pub fn set_csv_file_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.csv_file_uri = v.into();
        self
    }
}

/// The input content for the `ImportProductSets` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportProductSetsInputConfig {
    /// The Google Cloud Storage location for a csv file which preserves a
    /// list of ImportProductSetRequests in each line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_source: Option<ImportProductSetsGcsSource>,
}

impl ImportProductSetsInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [gcs_source][ImportProductSetsInputConfig::gcs_source].
    pub fn set_gcs_source<T: Into<ImportProductSetsGcsSource>>(mut self, v: T) -> Self {
        self.gcs_source = Some(v.into());
        self
    }
}

/// Response message for the `ImportProductSets` method.
///
/// This message is returned by the operation started by `ImportProductSets`
/// once it completes.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportProductSetsResponse {
    /// The list of reference_images that are imported successfully.
    pub reference_images: Vec<ReferenceImage>,

    /// The rpc status for each ImportProductSet request, including both
    /// successes and errors.
    ///
    /// The number of statuses here matches the number of lines in the csv
    /// file, and `statuses[i]` stores the success or failure status of
    /// processing the i-th line of the csv, starting from line 0.
    pub statuses: Vec<Status>,
}

/// Request message for the `CreateProductSet` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateProductSetRequest {
    /// The project in which the ProductSet should be created, in
    /// `projects/{project}/locations/{location}` format.
    pub parent: String,

    /// The ProductSet to create.
    pub product_set: Option<ProductSet>,

    /// A user-supplied resource id for this ProductSet. If set, the server
    /// will attempt to use this value as the resource id.
    pub product_set_id: String,
}

impl CreateProductSetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][CreateProductSetRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [product_set][CreateProductSetRequest::product_set].
    pub fn set_product_set<T: Into<ProductSet>>(mut self, v: T) -> Self {
        self.product_set = Some(v.into());
        self
    }

    /// Sets or clears the value of [product_set][CreateProductSetRequest::product_set].
    pub fn set_or_clear_product_set<T: Into<ProductSet>>(mut self, v: Option<T>) -> Self {
        self.product_set = v.map(|x| x.into());
        self
    }

    /// Sets the value of [product_set_id][CreateProductSetRequest::product_set_id].
    pub fn set_product_set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.product_set_id = v.into();
        self
    }
}

/// Request message for the `ListProductSets` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListProductSetsRequest {
    /// The project from which ProductSets should be listed.
    pub parent: String,

    /// The maximum number of items to return. Default 10, maximum 100.
    pub page_size: i32,

    /// The next_page_token returned from a previous List request, if any.
    pub page_token: String,
}

impl ListProductSetsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ListProductSetsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListProductSetsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListProductSetsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Request message for the `GetProductSet` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetProductSetRequest {
    /// Resource name of the ProductSet to get.
    pub name: String,
}

impl GetProductSetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetProductSetRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for the `UpdateProductSet` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateProductSetRequest {
    /// The ProductSet resource which replaces the one on the server.
    pub product_set: Option<ProductSet>,

    /// The fields to update. If absent, all updatable fields are updated.
    /// Valid mask paths include `display_name`.
    pub update_mask: Option<FieldMask>,
}

impl UpdateProductSetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [product_set][UpdateProductSetRequest::product_set].
    pub fn set_product_set<T: Into<ProductSet>>(mut self, v: T) -> Self {
        self.product_set = Some(v.into());
        self
    }

    /// Sets or clears the value of [product_set][UpdateProductSetRequest::product_set].
    pub fn set_or_clear_product_set<T: Into<ProductSet>>(mut self, v: Option<T>) -> Self {
        self.product_set = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][UpdateProductSetRequest::update_mask].
    pub fn set_update_mask<T: Into<FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][UpdateProductSetRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<FieldMask>>(mut self, v: Option<T>) -> Self {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

/// Request message for the `DeleteProductSet` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteProductSetRequest {
    /// Resource name of the ProductSet to delete.
    pub name: String,
}

impl DeleteProductSetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteProductSetRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for the `CreateProduct` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateProductRequest {
    /// The project in which the Product should be created.
    pub parent: String,

    /// The product to create.
    pub product: Option<Product>,

    /// A user-supplied resource id for this Product.
    pub product_id: String,
}

impl CreateProductRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][CreateProductRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [product][CreateProductRequest::product].
    pub fn set_product<T: Into<Product>>(mut self, v: T) -> Self {
        self.product = Some(v.into());
        self
    }

    /// Sets or clears the value of [product][CreateProductRequest::product].
    pub fn set_or_clear_product<T: Into<Product>>(mut self, v: Option<T>) -> Self {
        self.product = v.map(|x| x.into());
        self
    }

    /// Sets the value of [product_id][CreateProductRequest::product_id].
    pub fn set_product_id<T: Into<String>>(mut self, v: T) -> Self {
        self.product_id = v.into();
        self
    }
}

/// Request message for the `ListProducts` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListProductsRequest {
    /// The project OR ProductSet from which Products should be listed.
    pub parent: String,

    /// The maximum number of items to return. Default 10, maximum 100.
    pub page_size: i32,

    /// The next_page_token returned from a previous List request, if any.
    pub page_token: String,
}

impl ListProductsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ListProductsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListProductsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListProductsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Request message for the `GetProduct` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetProductRequest {
    /// Resource name of the Product to get.
    pub name: String,
}

impl GetProductRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetProductRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for the `UpdateProduct` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateProductRequest {
    /// The Product resource which replaces the one on the server.
    pub product: Option<Product>,

    /// The fields to update. Valid mask paths include `product_labels`,
    /// `display_name`, and `description`.
    pub update_mask: Option<FieldMask>,
}

impl UpdateProductRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [product][UpdateProductRequest::product].
    pub fn set_product<T: Into<Product>>(mut self, v: T) -> Self {
        self.product = Some(v.into());
        self
    }

    /// Sets or clears the value of [product][UpdateProductRequest::product].
    pub fn set_or_clear_product<T: Into<Product>>(mut self, v: Option<T>) -> Self {
        self.product = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][UpdateProductRequest::update_mask].
    pub fn set_update_mask<T: Into<FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][UpdateProductRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<FieldMask>>(mut self, v: Option<T>) -> Self {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

/// Request message for the `DeleteProduct` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteProductRequest {
    /// Resource name of product to delete.
    pub name: String,
}

impl DeleteProductRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteProductRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for the `CreateReferenceImage` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateReferenceImageRequest {
    /// Resource name of the product in which to create the reference image.
    pub parent: String,

    /// The reference image to create.
    pub reference_image: Option<ReferenceImage>,

    /// A user-supplied resource id for the ReferenceImage to be added.
    pub reference_image_id: String,
}

impl CreateReferenceImageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][CreateReferenceImageRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [reference_image][CreateReferenceImageRequest::reference_image].
    pub fn set_reference_image<T: Into<ReferenceImage>>(mut self, v: T) -> Self {
        self.reference_image = Some(v.into());
        self
    }

    /// Sets or clears the value of [reference_image][CreateReferenceImageRequest::reference_image].
    pub fn set_or_clear_reference_image<T: Into<ReferenceImage>>(mut self, v: Option<T>) -> Self {
        self.reference_image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reference_image_id][CreateReferenceImageRequest::reference_image_id].
    pub fn set_reference_image_id<T: Into<String>>(mut self, v: T) -> Self {
        self.reference_image_id = v.into();
        self
    }
}

/// Request message for the `DeleteReferenceImage` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteReferenceImageRequest {
    /// The resource name of the reference image to delete.
    pub name: String,
}

impl DeleteReferenceImageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteReferenceImageRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for the `ListReferenceImages` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListReferenceImagesRequest {
    /// Resource name of the product containing the reference images.
    pub parent: String,

    /// The maximum number of items to return. Default 10, maximum 100.
    pub page_size: i32,

    /// A token identifying a page of results to be returned.
    pub page_token: String,
}

impl ListReferenceImagesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ListReferenceImagesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListReferenceImagesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListReferenceImagesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Request message for the `GetReferenceImage` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetReferenceImageRequest {
    /// The resource name of the ReferenceImage to get.
    pub name: String,
}

impl GetReferenceImageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetReferenceImageRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for the `AddProductToProductSet` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AddProductToProductSetRequest {
    /// The resource name for the ProductSet to modify.
    pub name: String,

    /// The resource name for the Product to be added to this ProductSet.
    pub product: String,
}

impl AddProductToProductSetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][AddProductToProductSetRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [product][AddProductToProductSetRequest::product].
    pub fn set_product<T: Into<String>>(mut self, v: T) -> Self {
        self.product = v.into();
        self
    }
}

/// Request message for the `RemoveProductFromProductSet` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemoveProductFromProductSetRequest {
    /// The resource name for the ProductSet to modify.
    pub name: String,

    /// The resource name for the Product to be removed from this ProductSet.
    pub product: String,
}

impl RemoveProductFromProductSetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][RemoveProductFromProductSetRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [product][RemoveProductFromProductSetRequest::product].
    pub fn set_product<T: Into<String>>(mut self, v: T) -> Self {
        self.product = v.into();
        self
    }
}

/// Request message for the `ListProductsInProductSet` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListProductsInProductSetRequest {
    /// The ProductSet resource for which to retrieve Products.
    pub name: String,

    /// The maximum number of items to return. Default 10, maximum 100.
    pub page_size: i32,

    /// The next_page_token returned from a previous List request, if any.
    pub page_token: String,
}

impl ListProductsInProductSetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][ListProductsInProductSetRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [page_size][ListProductsInProductSetRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListProductsInProductSetRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Request message for the `ImportProductSets` method.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ImportProductSetsRequest {
    /// The project in which the ProductSets should be imported.
    pub parent: String,

    /// The input content for the list of requests.
    pub input_config: Option<ImportProductSetsInputConfig>,
}

impl ImportProductSetsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][ImportProductSetsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [input_config][ImportProductSetsRequest::input_config].
    pub fn set_input_config<T: Into<ImportProductSetsInputConfig>>(mut self, v: T) -> Self {
        self.input_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [input_config][ImportProductSetsRequest::input_config].
    pub fn set_or_clear_input_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<ImportProductSetsInputConfig>,
    {
        self.input_config = v.map(|x| x.into());
        self
    }
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}
