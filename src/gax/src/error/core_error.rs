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

use super::CredentialsError;
use super::auth::{AccessError, AuthError, RateLimitError};
use super::{LocalizedText, ServiceError};
use http::HeaderMap;
use std::error::Error as StdError;
use std::time::Duration;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may reject the request, the transport may be unable to create the
/// necessary connection to make a request, the request may timeout before a
/// response is received, or the library may be unable to format the request.
///
/// Errors specific to each route, returned with HTTP status code 409, are
/// not represented by this type. See [RouteError][super::RouteError].
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use dropbox_sdk_gax::error::Error;
/// match example_function() {
///     Err(e) if e.retry_after().is_some() => {
///         println!("rate limited {e}, wait for {:?}", e.retry_after().unwrap());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::timeout("simulated"))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use dropbox_sdk_gax::error::{Error, ServiceError};
    /// let error = Error::service(ServiceError::Server("try again later".into()));
    /// assert_eq!(error.error_summary(), Some("try again later"));
    /// ```
    pub fn service(error: ServiceError) -> Self {
        Self::service_with_http_metadata(error, None, None)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Create service errors including transport metadata.
    #[doc(hidden)]
    pub fn service_with_http_metadata(
        error: ServiceError,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            error,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The [ServiceError] payload associated with this error.
    ///
    /// # Troubleshooting
    ///
    /// As this error type is created from the service response,
    /// troubleshooting typically involves reading the service documentation
    /// for the HTTP status code.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.error),
            _ => None,
        }
    }

    /// The authentication error details, if the service rejected the
    /// credentials (HTTP status 401).
    ///
    /// # Example
    /// ```
    /// use dropbox_sdk_gax::error::{ApiError, Error, ServiceError};
    /// use dropbox_sdk_gax::error::auth::AuthError;
    /// let error = Error::service(ServiceError::Auth(ApiError::new(AuthError::ExpiredAccessToken)));
    /// assert_eq!(error.auth_error(), Some(&AuthError::ExpiredAccessToken));
    /// ```
    ///
    /// # Troubleshooting
    ///
    /// Most often the access token expired or was revoked. Obtain a new access
    /// token and create a new client with it.
    pub fn auth_error(&self) -> Option<&AuthError> {
        match self.service_error() {
            Some(ServiceError::Auth(e)) => Some(&e.error),
            _ => None,
        }
    }

    /// The access error details, if the account cannot use the route or
    /// resource (HTTP status 403).
    pub fn access_error(&self) -> Option<&AccessError> {
        match self.service_error() {
            Some(ServiceError::Access(e)) => Some(&e.error),
            _ => None,
        }
    }

    /// The rate limit details, if the application is rate limited (HTTP
    /// status 429).
    pub fn rate_limit(&self) -> Option<&RateLimitError> {
        match self.service_error() {
            Some(ServiceError::RateLimit(e)) => Some(&e.error),
            _ => None,
        }
    }

    /// How long to wait before sending more requests, if the service said so.
    ///
    /// The value in the response body has precedence. If the body could not be
    /// parsed, this uses the `Retry-After` header.
    ///
    /// The client libraries never retry requests. Applications that do should
    /// wait at least this long.
    pub fn retry_after(&self) -> Option<Duration> {
        if let Some(limit) = self.rate_limit() {
            return Some(Duration::from_secs(limit.retry_after));
        }
        self.http_headers()?
            .get(http::header::RETRY_AFTER)?
            .to_str()
            .ok()?
            .trim()
            .parse::<u64>()
            .ok()
            .map(Duration::from_secs)
    }

    /// The error summary returned by the service, if any.
    pub fn error_summary(&self) -> Option<&str> {
        self.service_error().map(ServiceError::error_summary)
    }

    /// The message for end users returned by the service, if any.
    pub fn user_message(&self) -> Option<&LocalizedText> {
        self.service_error().and_then(ServiceError::user_message)
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use dropbox_sdk_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    ///
    /// # Troubleshooting
    ///
    /// Timeouts are only enforced if the application configures one, see
    /// [RequestOptions::set_attempt_timeout][crate::options::RequestOptions::set_attempt_timeout].
    /// Consider increasing the timeout value, in particular for uploads and
    /// downloads of large files.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use dropbox_sdk_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. Note that the request
    /// completed in the service, even if the client library cannot represent
    /// the result.
    ///
    /// # Troubleshooting
    ///
    /// While the client libraries are designed to handle all valid responses,
    /// including unknown fields and unknown union tags, it is possible that the
    /// client library has a bug. Please open an issue if you run in to this
    /// problem. Include any instructions on how to reproduce the problem.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use dropbox_sdk_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic (modulo out of memory conditions), and will fail on future
    /// attempts with the same input data.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a request with an `UnknownValue` union in a
    /// flattened position, or a value that cannot be sent in an HTTP header.
    /// Use `format!("{:?}", ...)` to examine the error as it should include
    /// the original problem.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use dropbox_sdk_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Sometimes the error is generated before it reaches the Dropbox API. For
    /// example, your proxy may generate errors without the payload described in
    /// the API documentation. In such cases the client library returns the
    /// status code, headers, and http payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, e.g. errors detected before
    /// the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only set for responses the client library could not parse.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured authentication environment for
    /// your application, or credentials that do not support the route. For
    /// example, some routes require app authentication, and cannot be used
    /// with an access token.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or a
    /// any HTTP error that did not include a status code or other headers.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include read or write problems, and broken connections.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem completing the request. This type of error is
    /// rare, but includes crashes and restarts on proxies and load balancers.
    /// The client libraries do not retry these requests, if the request is
    /// idempotent the application may safely try again.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
            ..
        }))
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        let details = TransportDetails {
            headers: Some(headers),
            status_code: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer.
    ///
    /// Examples include errors in a proxy, or other network element generated
    /// before the service is able to send a full response. Also includes
    /// responses the client library could not interpret.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => d.display(f),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    error: ServiceError,
}

impl ServiceDetails {
    fn display(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.error {
            ServiceError::BadRequest(_) => "bad request".to_string(),
            ServiceError::Auth(e) => format!("authentication error: {}", e.error),
            ServiceError::Access(e) => format!("access error: {}", e.error),
            ServiceError::RateLimit(e) => format!("rate limit error: {}", e.error.reason),
            ServiceError::Server(_) => "server error".to_string(),
            ServiceError::Other(_) => "unclassified error".to_string(),
        };
        match self.status_code {
            Some(code) => write!(
                f,
                "the service reports an error [{kind}] with HTTP status {code} described as: {}",
                self.error.error_summary()
            ),
            None => write!(
                f,
                "the service reports an error [{kind}] described as: {}",
                self.error.error_summary()
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ApiError;
    use crate::error::CredentialsError;
    use crate::error::ErrorEnvelope;
    use crate::error::auth::{PaperAccessError, RateLimitReason};
    use std::error::Error as StdError;

    fn json_headers() -> HeaderMap {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[test]
    fn service() {
        let service = ServiceError::Server("try again later".into());
        let error = Error::service(service.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.service_error(), Some(&service));
        assert_eq!(error.error_summary(), Some("try again later"));
        assert!(error.to_string().contains("try again later"), "{error}");
        assert!(error.to_string().contains("server error"), "{error}");
        assert!(error.auth_error().is_none(), "{error:?}");
        assert!(error.access_error().is_none(), "{error:?}");
        assert!(error.rate_limit().is_none(), "{error:?}");
        assert!(error.retry_after().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let service = ServiceError::Auth(
            ApiError::new(AuthError::InvalidAccessToken)
                .set_error_summary("invalid_access_token/...")
                .set_user_message(LocalizedText::new("Please sign in", "en")),
        );
        let headers = json_headers();
        let error =
            Error::service_with_http_metadata(service.clone(), Some(401), Some(headers.clone()));
        assert_eq!(error.service_error(), Some(&service));
        assert_eq!(error.auth_error(), Some(&AuthError::InvalidAccessToken));
        assert_eq!(error.error_summary(), Some("invalid_access_token/..."));
        assert_eq!(
            error.user_message(),
            Some(&LocalizedText::new("Please sign in", "en"))
        );
        assert!(error.to_string().contains("invalid_access_token"), "{error}");
        assert!(error.to_string().contains("401"), "{error}");
        assert_eq!(error.http_status_code(), Some(401));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn access() {
        let service = ServiceError::Access(ApiError::new(AccessError::PaperAccessDenied(
            PaperAccessError::PaperDisabled,
        )));
        let error = Error::service_with_http_metadata(service, Some(403), None);
        assert_eq!(
            error.access_error(),
            Some(&AccessError::PaperAccessDenied(
                PaperAccessError::PaperDisabled
            ))
        );
        assert!(error.auth_error().is_none(), "{error:?}");
    }

    #[test]
    fn rate_limit() {
        let limit = RateLimitError::new(RateLimitReason::TooManyWriteOperations).set_retry_after(30);
        let service = ServiceError::RateLimit(ApiError::new(limit.clone()));
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::RETRY_AFTER,
            http::HeaderValue::from_static("60"),
        );
        let error = Error::service_with_http_metadata(service, Some(429), Some(headers));
        assert_eq!(error.rate_limit(), Some(&limit));
        assert_eq!(error.retry_after(), Some(Duration::from_secs(30)));
        assert!(
            error.to_string().contains("too_many_write_operations"),
            "{error}"
        );
    }

    #[test]
    fn retry_after_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::RETRY_AFTER,
            http::HeaderValue::from_static("60"),
        );
        let error = Error::http(429, headers, bytes::Bytes::from_static(b"slow down"));
        assert!(error.rate_limit().is_none(), "{error:?}");
        assert_eq!(error.retry_after(), Some(Duration::from_secs(60)));

        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::RETRY_AFTER,
            http::HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        let error = Error::http(429, headers, bytes::Bytes::from_static(b"slow down"));
        assert!(error.retry_after().is_none(), "{error:?}");
    }

    #[test]
    fn other_envelope() {
        let service = ServiceError::Other(ErrorEnvelope::new().set_error_summary("teapot"));
        let error = Error::service_with_http_metadata(service, Some(418), None);
        assert_eq!(error.error_summary(), Some("teapot"));
        assert!(error.to_string().contains("418"), "{error}");
    }

    #[test]
    fn timeout() {
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::timeout(source);
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<wkt::TimestampError>());
        assert!(
            matches!(got, Some(wkt::TimestampError::OutOfRange)),
            "{error:?}"
        );
        let source = wkt::TimestampError::OutOfRange;
        assert!(error.to_string().contains(&source.to_string()), "{error}");

        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
    }

    #[test]
    fn deserialization() {
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::deser(source);
        assert!(error.is_deserialization(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<wkt::TimestampError>());
        assert!(
            matches!(got, Some(wkt::TimestampError::OutOfRange)),
            "{error:?}"
        );
        let source = wkt::TimestampError::OutOfRange;
        assert!(error.to_string().contains(&source.to_string()), "{error}");
    }

    #[test]
    fn ser() {
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::ser(source);
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<wkt::TimestampError>());
        assert!(
            matches!(got, Some(wkt::TimestampError::OutOfRange)),
            "{error:?}"
        );
        let source = wkt::TimestampError::OutOfRange;
        assert!(error.to_string().contains(&source.to_string()), "{error}");
    }

    #[test]
    fn authentication() {
        let source = CredentialsError::from_msg(false, "test-message");
        let error = Error::authentication(source);
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if !c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
    }

    #[test]
    fn http() {
        let status_code = 404_u16;
        let headers = json_headers();
        let payload = bytes::Bytes::from_static(b"NOT FOUND");
        let error = Error::http(status_code, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert_eq!(error.http_status_code(), Some(status_code));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
    }

    #[test]
    fn http_binary() {
        let status_code = 404_u16;
        let headers = json_headers();
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(status_code, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(
            error.to_string().contains(&format! {"{payload:?}"}),
            "{error}"
        );
        assert!(error.to_string().contains("404"), "{error}");
    }

    #[test]
    fn io() {
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::io(source);
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        let source = wkt::TimestampError::OutOfRange;
        assert!(error.to_string().contains(&source.to_string()), "{error}");
    }

    #[test]
    fn transport() {
        let headers = json_headers();
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::transport(headers.clone(), source);
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        let source = wkt::TimestampError::OutOfRange;
        assert!(error.to_string().contains(&source.to_string()), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }
}
