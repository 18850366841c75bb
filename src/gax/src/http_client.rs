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
use crate::backoff_policy::BackoffPolicy;
use crate::client_builder::Error as BuilderError;
use crate::error::Error;
use crate::exponential_backoff::ExponentialBackoff;
use crate::options::{ClientConfig, RequestOptions};
use crate::polling_backoff_policy::{FixedInterval, PollingBackoffPolicy};
use crate::polling_error_policy::{LimitedElapsedTime, PollingErrorPolicy};
use crate::retry_policy::RetryPolicy;
use google_cloud_auth::credentials::{CacheableResource, Credentials};
use http::Extensions;
use std::sync::Arc;

/// A JSON-over-HTTP client with authentication and retry policies.
///
/// The service clients in this workspace wrap a `ReqwestClient`. They build
/// each request with [builder][ReqwestClient::builder] and send it with
/// [execute][ReqwestClient::execute] or
/// [execute_bytes][ReqwestClient::execute_bytes].
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    tracing: bool,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> crate::client_builder::Result<Self> {
        let cred = Self::make_credentials(&config).await?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            inner,
            cred,
            endpoint,
            tracing: config.tracing,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            polling_error_policy: config.polling_error_policy,
            polling_backoff_policy: config.polling_backoff_policy,
        })
    }

    /// The endpoint used by this client.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends a request with an optional JSON body, and parses the JSON
    /// response.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<O> {
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let response = self.send(builder, options).await?;
        to_http_response(response).await
    }

    /// Sends a request and returns the raw response payload.
    ///
    /// Used for media downloads, where the payload is not JSON.
    pub async fn execute_bytes(
        &self,
        builder: reqwest::RequestBuilder,
        options: RequestOptions,
    ) -> Result<bytes::Bytes> {
        let response = self.send(builder, options).await?;
        response.bytes().await.map_err(Error::io)
    }

    async fn send(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: RequestOptions,
    ) -> Result<reqwest::Response> {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        match self.get_retry_policy(&options) {
            None => self.request_attempt(builder).await,
            Some(policy) => self.retry_loop(builder, &options, policy).await,
        }
    }

    async fn make_credentials(config: &ClientConfig) -> crate::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        google_cloud_auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    async fn retry_loop(
        &self,
        builder: reqwest::RequestBuilder,
        options: &RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<reqwest::Response> {
        let backoff = self.get_backoff_policy(options);
        let this = self.clone();
        let inner = async move || {
            let builder = builder
                .try_clone()
                .ok_or_else(|| Error::io("streaming requests cannot be retried"))?;
            this.request_attempt(builder).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        crate::retry_loop::retry_loop(inner, sleep, retry_policy, backoff).await
    }

    async fn request_attempt(
        &self,
        mut builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        let cached_auth_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;

        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("headers are not cached");
            }
        };
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }
        let request = builder.build().map_err(Error::ser)?;
        if self.tracing {
            tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        }
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        Ok(response)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(&self, options: &RequestOptions) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
    }

    pub(crate) fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }

    /// The polling error policy for a long-running operation.
    ///
    /// Defaults to giving up after 60 seconds, and to not retrying failed
    /// status checks.
    pub fn get_polling_error_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingErrorPolicy> {
        options
            .polling_error_policy()
            .clone()
            .or_else(|| self.polling_error_policy.clone())
            .unwrap_or_else(|| Arc::new(LimitedElapsedTime::default()))
    }

    /// The polling backoff policy for a long-running operation.
    ///
    /// Defaults to checking once per second.
    pub fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .clone()
            .or_else(|| self.polling_backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(FixedInterval::default()))
    }
}

#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match crate::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // 204 No Content has no body and throws EOF error if we try to parse with serde::json
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (_, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    let response = match body.to_bytes() {
        content if (content.is_empty() && no_content_status) => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use crate::polling_error_policy::PollingErrorPolicyExt;
    use crate::retry_policy::{RetryOnStatus, RetryPolicyExt};
    use http::{HeaderMap, HeaderValue};
    use httptest::cycle;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::time::Duration;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    struct Thing {
        #[serde(default)]
        name: String,
    }

    async fn test_client(server: &Server, config: ClientConfig) -> anyhow::Result<ReqwestClient> {
        let config = config
            .set_endpoint(format!("http://{}", server.addr()))
            .set_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build());
        let client = ReqwestClient::new(config, "https://unused.googleapis.com").await?;
        Ok(client)
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        let err = response.expect_err("HTTP errors should map to an error");
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        let body = json!({"error": {
            "code": 404,
            "message": "The thing is not there, oh noes!",
            "status": "NOT_FOUND",
        }});
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let response = super::to_http_error::<()>(response).await;
        let err = response.expect_err("HTTP errors should map to an error");
        let want_status = Status::default()
            .set_code(Code::NotFound)
            .set_message("The thing is not there, oh noes!");
        assert_eq!(err.status(), Some(&want_status));
        assert_eq!(err.http_status_code(), Some(404_u16));
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());
        let response = super::to_http_response::<Thing>(response).await?;
        assert_eq!(response, Thing::default());
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_empty_content() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, "")?;
        let response = super::to_http_response::<Thing>(response).await;
        assert!(
            matches!(&response, Err(e) if e.is_deserialization()),
            "{response:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn execute_json() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/things"),
                request::body(json_decoded(eq(json!({"name": "in"})))),
            ])
            .respond_with(json_encoded(json!({"name": "out"}))),
        );
        let client = test_client(&server, ClientConfig::new().enable_tracing()).await?;
        let builder = client.builder(reqwest::Method::POST, "/v1/things".to_string());
        let body = Thing {
            name: "in".to_string(),
        };
        let response: Thing = client
            .execute(builder, Some(body), RequestOptions::default())
            .await?;
        assert_eq!(response.name, "out");
        Ok(())
    }

    #[tokio::test]
    async fn execute_bytes() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/download"))
                .respond_with(status_code(200).body("raw payload")),
        );
        let client = test_client(&server, ClientConfig::new()).await?;
        let builder = client.builder(reqwest::Method::GET, "/download".to_string());
        let response = client
            .execute_bytes(builder, RequestOptions::default())
            .await?;
        assert_eq!(response, bytes::Bytes::from_static(b"raw payload"));
        Ok(())
    }

    #[tokio::test]
    async fn execute_no_retry_by_default() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things/a"))
                .times(1)
                .respond_with(status_code(429)),
        );
        let client = test_client(&server, ClientConfig::new()).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things/a".to_string());
        let response = client
            .execute::<NoBody, Thing>(builder, None, RequestOptions::default())
            .await;
        assert!(
            matches!(&response, Err(e) if e.is_rate_limited()),
            "{response:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn execute_with_retry() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/b/bucket"))
                .times(3)
                .respond_with(cycle![
                    status_code(409),
                    status_code(429),
                    status_code(204),
                ]),
        );
        let client = test_client(&server, ClientConfig::new()).await?;
        let mut options = RequestOptions::default();
        options.set_retry_policy(RetryOnStatus::rate_limited_or_conflict().with_attempt_limit(6));
        options.set_backoff_policy(
            crate::exponential_backoff::ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_maximum_delay(Duration::from_millis(2))
                .build()?,
        );
        let builder = client.builder(reqwest::Method::DELETE, "/b/bucket".to_string());
        let response: Thing = client.execute(builder, None::<NoBody>, options).await?;
        assert_eq!(response, Thing::default());
        Ok(())
    }

    #[tokio::test]
    async fn execute_with_retry_spawned() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things/a"))
                .times(2)
                .respond_with(cycle![
                    status_code(429),
                    json_encoded(json!({"name": "a"})),
                ]),
        );
        let client = test_client(&server, ClientConfig::new()).await?;
        let mut options = RequestOptions::default();
        options.set_retry_policy(RetryOnStatus::rate_limited().with_attempt_limit(3));
        options.set_backoff_policy(
            crate::exponential_backoff::ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_maximum_delay(Duration::from_millis(2))
                .build()?,
        );
        // The service stubs require `Send` futures, including on the retry path.
        let handle = tokio::spawn(async move {
            let builder = client.builder(reqwest::Method::GET, "/v1/things/a".to_string());
            client
                .execute::<NoBody, Thing>(builder, None, options)
                .await
        });
        let response = handle.await??;
        assert_eq!(response.name, "a");
        Ok(())
    }

    #[tokio::test]
    async fn polling_policies() -> TestResult {
        let server = Server::run();
        let client = test_client(&server, ClientConfig::new()).await?;
        let options = RequestOptions::default();
        let policy = client.get_polling_error_policy(&options);
        assert!(format!("{policy:?}").contains("LimitedElapsedTime"), "{policy:?}");
        let backoff = client.get_polling_backoff_policy(&options);
        assert!(format!("{backoff:?}").contains("FixedInterval"), "{backoff:?}");

        let mut options = RequestOptions::default();
        options.set_polling_error_policy(
            crate::polling_error_policy::AlwaysContinue.with_attempt_limit(3),
        );
        let policy = client.get_polling_error_policy(&options);
        assert!(format!("{policy:?}").contains("LimitedAttemptCount"), "{policy:?}");
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }
}
