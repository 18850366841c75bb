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

//! Contains the Storage client and related types.

use crate::Result;
use crate::model;
use gax::backoff_policy::BackoffPolicy;
use gax::exponential_backoff::ExponentialBackoffBuilder;
use gax::http_client::{NoBody, ReqwestClient};
use gax::options::{ClientConfig, RequestOptions};
use gax::paginator::{ItemPaginator, Paginator};
use gax::retry_policy::{RetryOnStatus, RetryPolicyExt};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;

/// The number of attempts for bucket creation and deletion.
const LIFECYCLE_ATTEMPTS: u32 = 6;

/// A builder for [Storage].
pub type ClientBuilder = gax::client_builder::ClientBuilder<Factory>;

#[doc(hidden)]
pub struct Factory;

impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = Storage;
    async fn build(self, config: ClientConfig) -> gax::client_builder::Result<Self::Client> {
        Self::Client::new(config).await
    }
}

/// Implements a client for the Cloud Storage JSON API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use vision_storage::client::Storage;
/// let client = Storage::builder().build().await?;
/// client.upload_object("my-bucket", "hello.txt", "hello", "text/plain").await?;
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Bucket lifecycle
///
/// Creating and deleting buckets is rate limited per project. The test
/// suites create one bucket per run, with
/// [create_bucket_with_retry][Storage::create_bucket_with_retry], and remove
/// it at the end with [delete_bucket_with_retry][Storage::delete_bucket_with_retry].
#[derive(Clone, Debug)]
pub struct Storage {
    inner: ReqwestClient,
    lifecycle_backoff: Arc<dyn BackoffPolicy>,
}

impl Storage {
    /// Returns a builder for [Storage].
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(Factory)
    }

    pub(crate) async fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let lifecycle_backoff = config
            .backoff_policy
            .clone()
            .unwrap_or_else(default_lifecycle_backoff);
        let inner = ReqwestClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self {
            inner,
            lifecycle_backoff,
        })
    }

    /// Creates a new bucket in `project`.
    pub async fn create_bucket(&self, project: &str, name: &str) -> Result<model::Bucket> {
        self.insert_bucket(project, name, RequestOptions::default())
            .await
    }

    /// Creates a new bucket, retrying if the request is rate limited.
    pub async fn create_bucket_with_retry(
        &self,
        project: &str,
        name: &str,
    ) -> Result<model::Bucket> {
        let mut options = RequestOptions::default();
        options.set_retry_policy(
            RetryOnStatus::rate_limited().with_attempt_limit(LIFECYCLE_ATTEMPTS),
        );
        options.set_backoff_policy(self.lifecycle_backoff.clone());
        self.insert_bucket(project, name, options).await
    }

    async fn insert_bucket(
        &self,
        project: &str,
        name: &str,
        options: RequestOptions,
    ) -> Result<model::Bucket> {
        let builder = self
            .inner
            .builder(Method::POST, "/storage/v1/b".to_string())
            .query(&[("project", project)]);
        let bucket = model::Bucket::new().set_name(name);
        tracing::info!(bucket = name, "creating bucket");
        self.inner.execute(builder, Some(bucket), options).await
    }

    /// Deletes an empty bucket.
    pub async fn delete_bucket(&self, name: &str) -> Result<()> {
        let builder = self
            .inner
            .builder(Method::DELETE, format!("/storage/v1/b/{}", enc(name)));
        self.inner
            .execute(builder, None::<NoBody>, RequestOptions::default())
            .await
            .map(|_: serde_json::Value| ())
    }

    /// Deletes every object in the bucket, and then the bucket.
    ///
    /// Objects created while this function runs may cause the bucket deletion
    /// to fail with `409 Conflict`.
    pub async fn delete_bucket_force(&self, name: &str) -> Result<()> {
        let mut objects = self.list_objects(name, "");
        while let Some(object) = objects.next().await {
            let object = object?;
            self.delete_object(name, &object.name).await?;
        }
        self.delete_bucket(name).await
    }

    /// Force-deletes a bucket, retrying on rate limits and conflicts.
    ///
    /// A conflict means the bucket is not empty yet, each attempt deletes any
    /// remaining objects first.
    pub async fn delete_bucket_with_retry(&self, name: &str) -> Result<()> {
        let retry_policy = Arc::new(
            RetryOnStatus::rate_limited_or_conflict().with_attempt_limit(LIFECYCLE_ATTEMPTS),
        );
        let this = self.clone();
        let bucket = name.to_string();
        let inner = async move || this.delete_bucket_force(&bucket).await;
        let sleep = async |d| tokio::time::sleep(d).await;
        tracing::info!(bucket = name, "deleting bucket");
        gax::retry_loop::retry_loop(inner, sleep, retry_policy, self.lifecycle_backoff.clone())
            .await
    }

    /// Uploads `data` as a new object, replacing any existing object with the
    /// same name.
    pub async fn upload_object<B>(
        &self,
        bucket: &str,
        name: &str,
        data: B,
        content_type: &str,
    ) -> Result<model::Object>
    where
        B: Into<bytes::Bytes>,
    {
        let builder = self
            .inner
            .builder(Method::POST, format!("/upload/storage/v1/b/{}/o", enc(bucket)))
            .query(&[("uploadType", "media"), ("name", name)])
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data.into());
        self.inner
            .execute(builder, None::<NoBody>, RequestOptions::default())
            .await
    }

    /// Downloads the contents of an object.
    pub async fn download_object(&self, bucket: &str, name: &str) -> Result<bytes::Bytes> {
        let builder = self
            .inner
            .builder(Method::GET, object_path(bucket, name))
            .query(&[("alt", "media")]);
        self.inner
            .execute_bytes(builder, RequestOptions::default())
            .await
    }

    /// Lists the objects in a bucket whose names start with `prefix`.
    ///
    /// Pages are fetched on demand.
    pub fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> ItemPaginator<model::ListObjectsResponse, crate::Error> {
        let inner = self.inner.clone();
        let path = format!("/storage/v1/b/{}/o", enc(bucket));
        let prefix = prefix.to_string();
        let execute = move |token: String| {
            let mut builder = inner.builder(Method::GET, path.clone());
            if !prefix.is_empty() {
                builder = builder.query(&[("prefix", prefix.as_str())]);
            }
            if !token.is_empty() {
                builder = builder.query(&[("pageToken", token.as_str())]);
            }
            let inner = inner.clone();
            async move {
                inner
                    .execute::<NoBody, model::ListObjectsResponse>(
                        builder,
                        None,
                        RequestOptions::default(),
                    )
                    .await
            }
        };
        Paginator::new(String::new(), execute).items()
    }

    /// Deletes an object.
    pub async fn delete_object(&self, bucket: &str, name: &str) -> Result<()> {
        let builder = self.inner.builder(Method::DELETE, object_path(bucket, name));
        self.inner
            .execute(builder, None::<NoBody>, RequestOptions::default())
            .await
            .map(|_: serde_json::Value| ())
    }
}

fn default_lifecycle_backoff() -> Arc<dyn BackoffPolicy> {
    let backoff = ExponentialBackoffBuilder::new()
        .with_initial_delay(Duration::from_secs(1))
        .with_maximum_delay(Duration::from_secs(32))
        .with_scaling(2.0)
        .clamp();
    Arc::new(backoff)
}

fn object_path(bucket: &str, name: &str) -> String {
    format!("/storage/v1/b/{}/o/{}", enc(bucket), enc(name))
}

/// The set of characters that are percent encoded.
///
/// Object names may contain any of these, including `/`.
const ENCODED_CHARS: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b'!')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b' ');

fn enc(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, &ENCODED_CHARS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("simple.jpg", "simple.jpg")]
    #[test_case("test_detect_logos_async/output-1-to-1.json", "test_detect_logos_async%2Foutput-1-to-1.json")]
    #[test_case("a b+c", "a%20b%2Bc")]
    #[test_case("100%", "100%25")]
    fn encoding(input: &str, want: &str) {
        assert_eq!(enc(input), want);
    }

    #[test]
    fn paths() {
        assert_eq!(object_path("b", "x/y.png"), "/storage/v1/b/b/o/x%2Fy.png");
    }

    #[test]
    fn lifecycle_backoff() {
        let backoff = default_lifecycle_backoff();
        let start = tokio::time::Instant::now();
        let delay = backoff.on_failure(start, 1);
        assert!(delay <= Duration::from_secs(1), "{delay:?}");
    }
}
