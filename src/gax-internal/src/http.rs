// Copyright 2026 Dropbox SDK for Rust Authors
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

//! The HTTP transport shared by all namespace clients.

use crate::api_arg::{self, API_ARG, API_RESULT, PATH_ROOT, SELECT_ADMIN, SELECT_USER};
use crate::header_cache::HeaderCache;
use crate::host::Hosts;
use crate::observability;
use crate::route::Route;
use auth::credentials::Credentials;
use bytes::Bytes;
use futures::TryStreamExt;
use gax::RouteResult;
use gax::client_builder::Error as BuilderError;
use gax::download::{ContentStream, Download};
use gax::error::auth::{AccessError, AuthError, RateLimitError};
use gax::error::{ApiError, Error, ErrorEnvelope, RouteError, ServiceError};
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use http::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::Instrument;
use wkt::common::PathRoot;

const APPLICATION_JSON: &str = "application/json";
const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    auth_headers: HeaderCache,
    hosts: Hosts,
    user_agent: Option<String>,
    select_user: Option<String>,
    select_admin: Option<String>,
    path_root: Option<PathRoot>,
    tracing: bool,
}

impl ReqwestClient {
    pub async fn new(config: crate::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let hosts = Hosts::new(config.endpoint.as_deref())?;
        let cred = Self::make_credentials(&config).await?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            auth_headers: HeaderCache::default(),
            hosts,
            user_agent: config.user_agent,
            select_user: config.select_user,
            select_admin: config.select_admin,
            path_root: config.path_root,
            tracing,
        })
    }

    async fn make_credentials(
        config: &crate::options::ClientConfig,
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    /// Calls a RPC-style route.
    ///
    /// The argument, if any, is sent as a JSON body. The result is decoded
    /// from the JSON response body.
    pub async fn rpc<I, O, E>(
        &self,
        route: &Route,
        arg: Option<I>,
        options: RequestOptions,
    ) -> RouteResult<Response<O>, E>
    where
        I: Serialize,
        O: DeserializeOwned,
        E: DeserializeOwned,
    {
        let url = self.url(route);
        let attempt = async {
            let mut builder = self.builder(route, &url, options).await?;
            if let Some(arg) = arg {
                let body = serde_json::to_vec(&arg).map_err(Error::ser)?;
                builder = builder
                    .header(http::header::CONTENT_TYPE, APPLICATION_JSON)
                    .body(body);
            }
            let response = self.execute::<E>(builder).await?;
            Ok::<_, RouteError<E>>(to_http_response(response).await?)
        };
        self.traced(route, &url, attempt).await
    }

    /// Calls an upload-style route.
    ///
    /// The argument is sent in the `Dropbox-API-Arg` header, the payload is
    /// the request body.
    pub async fn upload<I, O, E>(
        &self,
        route: &Route,
        arg: I,
        payload: Bytes,
        options: RequestOptions,
    ) -> RouteResult<Response<O>, E>
    where
        I: Serialize,
        O: DeserializeOwned,
        E: DeserializeOwned,
    {
        let url = self.url(route);
        let attempt = async {
            let builder = self
                .builder(route, &url, options)
                .await?
                .header(API_ARG, api_arg::header_value(&arg)?)
                .header(http::header::CONTENT_TYPE, OCTET_STREAM)
                .body(payload);
            let response = self.execute::<E>(builder).await?;
            Ok::<_, RouteError<E>>(to_http_response(response).await?)
        };
        self.traced(route, &url, attempt).await
    }

    /// Calls a download-style route.
    ///
    /// The argument is sent in the `Dropbox-API-Arg` header. The metadata is
    /// decoded from the `Dropbox-API-Result` response header, and the response
    /// body is returned as a stream. The caller may add headers, such as
    /// `Range`, using `extra_headers`.
    pub async fn download<I, O, E>(
        &self,
        route: &Route,
        arg: I,
        extra_headers: HeaderMap,
        options: RequestOptions,
    ) -> RouteResult<Response<Download<O>>, E>
    where
        I: Serialize,
        O: DeserializeOwned,
        E: DeserializeOwned,
    {
        let url = self.url(route);
        let attempt = async {
            let builder = self
                .builder(route, &url, options)
                .await?
                .header(API_ARG, api_arg::header_value(&arg)?)
                .headers(extra_headers);
            let response = self.execute::<E>(builder).await?;
            Ok::<_, RouteError<E>>(to_download_response(response)?)
        };
        self.traced(route, &url, attempt).await
    }

    fn url(&self, route: &Route) -> String {
        format!("{}{}", self.hosts.base(route.host), route.path())
    }

    async fn builder(
        &self,
        route: &Route,
        url: &str,
        options: RequestOptions,
    ) -> gax::Result<reqwest::RequestBuilder> {
        if let Some(replacement) = route.deprecated_by {
            tracing::warn!(
                "the {} route is deprecated, use {replacement} instead",
                route.id()
            );
        }
        let options = gax::options::internal::set_defaults(
            options,
            self.user_agent.as_ref(),
            self.select_user.as_ref(),
            self.select_admin.as_ref(),
            self.path_root.as_ref(),
        );
        let mut builder = self.inner.post(url);
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                http::header::USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(user) = options.select_user() {
            builder = builder.header(SELECT_USER, HeaderValue::from_str(user).map_err(Error::ser)?);
        }
        if let Some(admin) = options.select_admin() {
            builder =
                builder.header(SELECT_ADMIN, HeaderValue::from_str(admin).map_err(Error::ser)?);
        }
        if let Some(root) = options.path_root() {
            builder = builder.header(PATH_ROOT, api_arg::header_value(root)?);
        }
        if route.uses_credentials() {
            let headers = self
                .auth_headers
                .headers(&self.cred, route.auth)
                .await
                .map_err(Error::authentication)?;
            builder = builder.headers(headers);
        }
        Ok(builder)
    }

    async fn execute<E>(&self, builder: reqwest::RequestBuilder) -> RouteResult<reqwest::Response, E>
    where
        E: DeserializeOwned,
    {
        let response = builder.send().await.map_err(Self::map_send_error)?;
        observability::record_status_code(&tracing::Span::current(), response.status().as_u16());
        if !response.status().is_success() {
            return Err(self::to_route_error(response).await);
        }
        Ok(response)
    }

    async fn traced<T, E, F>(&self, route: &Route, url: &str, attempt: F) -> RouteResult<T, E>
    where
        F: Future<Output = RouteResult<T, E>>,
    {
        if !self.tracing {
            return attempt.await;
        }
        let span = observability::create_request_span(route, url);
        let result = attempt.instrument(span.clone()).await;
        if let Err(e) = &result {
            observability::record_error(&span, e);
        }
        result
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// Converts an unsuccessful response into the corresponding error.
pub async fn to_route_error<E>(response: reqwest::Response) -> RouteError<E>
where
    E: DeserializeOwned,
{
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = match http_body_util::BodyExt::collect(body).await {
        Ok(b) => b.to_bytes(),
        Err(e) => return RouteError::Other(Error::io(e)),
    };
    route_error_from_parts(status_code, parts.headers, body)
}

fn route_error_from_parts<E>(status_code: u16, headers: HeaderMap, body: Bytes) -> RouteError<E>
where
    E: DeserializeOwned,
{
    let service = |error: ServiceError, headers: HeaderMap| {
        RouteError::Other(Error::service_with_http_metadata(
            error,
            Some(status_code),
            Some(headers),
        ))
    };
    match status_code {
        409 => match serde_json::from_slice::<ApiError<E>>(&body) {
            Ok(e) => RouteError::Endpoint(e),
            Err(e) => RouteError::Other(Error::deser(e)),
        },
        400 => service(ServiceError::BadRequest(text(&body)), headers),
        401 => match serde_json::from_slice::<ApiError<AuthError>>(&body) {
            Ok(e) => service(ServiceError::Auth(e), headers),
            Err(_) => RouteError::Other(Error::http(status_code, headers, body)),
        },
        403 => match serde_json::from_slice::<ApiError<AccessError>>(&body) {
            Ok(e) => service(ServiceError::Access(e), headers),
            Err(_) => RouteError::Other(Error::http(status_code, headers, body)),
        },
        429 => match serde_json::from_slice::<ApiError<RateLimitError>>(&body) {
            Ok(e) => service(ServiceError::RateLimit(e), headers),
            Err(_) => RouteError::Other(Error::http(status_code, headers, body)),
        },
        500..=599 => service(ServiceError::Server(text(&body)), headers),
        _ => match serde_json::from_slice::<ErrorEnvelope>(&body) {
            Ok(e) => service(ServiceError::Other(e), headers),
            Err(_) => RouteError::Other(Error::http(status_code, headers, body)),
        },
    }
}

fn text(body: &Bytes) -> String {
    String::from_utf8_lossy(body).into_owned()
}

async fn to_http_response<O>(response: reqwest::Response) -> gax::Result<Response<O>>
where
    O: DeserializeOwned,
{
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();
    let body = decode_body::<O>(&body)?;

    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        body,
    ))
}

// An empty body decodes as JSON `null`, which is how routes with no result
// type respond.
fn decode_body<O: DeserializeOwned>(body: &[u8]) -> gax::Result<O> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(serde_json::Value::Null).map_err(Error::deser);
    }
    serde_json::from_slice(body).map_err(Error::deser)
}

fn to_download_response<O>(response: reqwest::Response) -> gax::Result<Response<Download<O>>>
where
    O: DeserializeOwned,
{
    let metadata = response
        .headers()
        .get(API_RESULT)
        .ok_or_else(|| Error::deser(format!("missing {API_RESULT} header in response")))?
        .to_str()
        .map_err(Error::deser)?;
    let metadata = serde_json::from_str::<O>(metadata).map_err(Error::deser)?;
    let headers = response.headers().clone();
    let content = ContentStream::new(response.bytes_stream().map_err(Error::io));
    Ok(Response::from_parts(
        Parts::new().set_headers(headers),
        Download::new(metadata, content),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::NoError;
    use gax::error::auth::{PaperAccessError, RateLimitReason};
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn response(code: u16, content: impl Into<String>) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.into())?;
        Ok(http_resp.into())
    }

    #[tokio::test]
    async fn endpoint_error() -> TestResult {
        let body = json!({
            "error_summary": "path/not_found/...",
            "error": {".tag": "path", "path": {".tag": "not_found"}},
        });
        let got = to_route_error::<serde_json::Value>(response(409, body.to_string())?).await;
        let RouteError::Endpoint(e) = got else {
            panic!("expected endpoint error, got={got:?}");
        };
        assert_eq!(e.error_summary, "path/not_found/...");
        assert_eq!(e.error, json!({".tag": "path", "path": {".tag": "not_found"}}));
        Ok(())
    }

    #[tokio::test]
    async fn endpoint_error_without_schema() -> TestResult {
        let body = json!({"error_summary": "other/..", "error": {".tag": "other"}});
        let got = to_route_error::<NoError>(response(409, body.to_string())?).await;
        assert!(
            matches!(got, RouteError::Other(ref e) if e.is_deserialization()),
            "{got:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn bad_request() -> TestResult {
        let got = to_route_error::<NoError>(response(400, "Error in call to API function")?).await;
        let e = got.other().expect("expected a gax error");
        assert_eq!(e.http_status_code(), Some(400));
        assert_eq!(
            e.service_error(),
            Some(&ServiceError::BadRequest("Error in call to API function".into()))
        );
        Ok(())
    }

    #[tokio::test]
    async fn auth_error() -> TestResult {
        let body = json!({"error_summary": "user_suspended/", "error": {".tag": "user_suspended"}});
        let got = to_route_error::<NoError>(response(401, body.to_string())?).await;
        let e = got.other().expect("expected a gax error");
        assert_eq!(e.auth_error(), Some(&AuthError::UserSuspended));
        assert_eq!(e.error_summary(), Some("user_suspended/"));
        assert_eq!(got.error_summary(), Some("user_suspended/"));
        Ok(())
    }

    #[tokio::test]
    async fn access_error() -> TestResult {
        let body = json!({
            "error": {
                ".tag": "paper_access_denied",
                "paper_access_denied": {".tag": "not_paper_user"},
            }
        });
        let got = to_route_error::<NoError>(response(403, body.to_string())?).await;
        let e = got.other().expect("expected a gax error");
        assert_eq!(
            e.access_error(),
            Some(&AccessError::PaperAccessDenied(PaperAccessError::NotPaperUser))
        );
        Ok(())
    }

    #[tokio::test]
    async fn rate_limit() -> TestResult {
        let body = json!({"error": {"reason": {".tag": "too_many_requests"}, "retry_after": 300}});
        let got = to_route_error::<NoError>(response(429, body.to_string())?).await;
        let e = got.other().expect("expected a gax error");
        let limit = e.rate_limit().expect("expected rate limit details");
        assert_eq!(limit.reason, RateLimitReason::TooManyRequests);
        assert_eq!(limit.retry_after, 300);
        assert_eq!(e.retry_after(), Some(std::time::Duration::from_secs(300)));
        Ok(())
    }

    #[tokio::test]
    async fn rate_limit_unparsed() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Retry-After", "5")
            .status(429)
            .body("slow down".to_string())?;
        let got = to_route_error::<NoError>(http_resp.into()).await;
        let e = got.other().expect("expected a gax error");
        assert!(e.rate_limit().is_none(), "{e:?}");
        assert_eq!(e.http_payload(), Some(&Bytes::from_static(b"slow down")));
        assert_eq!(e.retry_after(), Some(std::time::Duration::from_secs(5)));
        Ok(())
    }

    #[tokio::test]
    #[test_case(500)]
    #[test_case(503)]
    async fn server_error(code: u16) -> TestResult {
        let got = to_route_error::<NoError>(response(code, "internal problems")?).await;
        let e = got.other().expect("expected a gax error");
        assert_eq!(e.http_status_code(), Some(code));
        assert_eq!(
            e.service_error(),
            Some(&ServiceError::Server("internal problems".into()))
        );
        assert!(e.to_string().contains("internal problems"), "{e}");
        Ok(())
    }

    #[tokio::test]
    async fn other_status_with_envelope() -> TestResult {
        let body = json!({"error_summary": "teapot/"});
        let got = to_route_error::<NoError>(response(418, body.to_string())?).await;
        let e = got.other().expect("expected a gax error");
        assert_eq!(e.error_summary(), Some("teapot/"));
        assert_eq!(e.http_status_code(), Some(418));
        Ok(())
    }

    #[tokio::test]
    async fn other_status_without_envelope() -> TestResult {
        let got = to_route_error::<NoError>(response(404, "not found")?).await;
        let e = got.other().expect("expected a gax error");
        assert!(e.service_error().is_none(), "{e:?}");
        assert_eq!(e.http_status_code(), Some(404));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(e.http_headers(), Some(&want));
        assert_eq!(e.http_payload(), Some(&Bytes::from_static(b"not found")));
        Ok(())
    }

    #[tokio::test]
    #[test_case(""; "empty")]
    #[test_case("null"; "null")]
    async fn empty_result(content: &str) -> TestResult {
        let got = to_http_response::<()>(response(200, content)?).await?;
        assert_eq!(got.into_body(), ());
        Ok(())
    }

    #[tokio::test]
    async fn empty_result_requires_type() -> TestResult {
        let got = to_http_response::<std::collections::HashMap<String, u32>>(response(200, "")?).await;
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn download_metadata() -> TestResult {
        let http_resp = http::Response::builder()
            .header(API_RESULT, r#"{"name":"r\u00e9sum\u00e9.txt","size":7}"#)
            .status(200)
            .body("content".to_string())?;
        let got = to_download_response::<serde_json::Value>(http_resp.into())?;
        let (metadata, content) = got.into_body().into_parts();
        assert_eq!(metadata, json!({"name": "résumé.txt", "size": 7}));
        assert_eq!(content.all_bytes().await?, Bytes::from_static(b"content"));
        Ok(())
    }

    #[tokio::test]
    async fn download_missing_metadata() -> TestResult {
        let got = to_download_response::<serde_json::Value>(response(200, "content")?);
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
        Ok(())
    }
}
