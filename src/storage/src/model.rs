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

/// A bucket, as returned by the JSON API.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Bucket {
    /// The name of the bucket.
    pub name: String,

    /// The location of the bucket. Empty in requests uses the service
    /// default.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub time_created: String,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Bucket::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [location][Bucket::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }
}

/// An object, as returned by the JSON API.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Object {
    pub bucket: String,
    pub name: String,

    /// The size in bytes. The JSON API encodes 64-bit integers as strings.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub size: u64,

    pub content_type: String,

    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub generation: i64,
}

impl Object {
    /// The `gs://` URI for this object.
    ///
    /// # Example
    /// ```
    /// # use vision_storage::model::Object;
    /// let object: Object = serde_json::from_str(r#"{"bucket": "b", "name": "a/b.jpg"}"#)?;
    /// assert_eq!(object.gs_uri(), "gs://b/a/b.jpg");
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn gs_uri(&self) -> String {
        format!("gs://{}/{}", self.bucket, self.name)
    }
}

/// The response for [list_objects][crate::client::Storage::list_objects].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListObjectsResponse {
    pub items: Vec<Object>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl gax::paginator::PageableResponse for ListObjectsResponse {
    type PageItem = Object;

    fn items(self) -> Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}
