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

//! Tracing spans for Dropbox API requests.
//!
//! The attribute names follow the OpenTelemetry semantic conventions for HTTP
//! clients where one exists.
//! See [OpenTelemetry Semantic Conventions for HTTP](https://opentelemetry.io/docs/specs/semconv/http/http-spans/).

use crate::route::Route;
use gax::error::{Error, RouteError};
use tracing::{Span, field};

pub mod keys {
    pub const HTTP_REQUEST_METHOD: &str = "http.request.method";
    pub const URL_FULL: &str = "url.full";
    pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
    /// A low-cardinality classification of the error.
    ///
    /// For HTTP errors this is the status code as a string. For other errors
    /// a short identifier like `TIMEOUT`.
    pub const ERROR_TYPE: &str = "error.type";
    /// The route identifier, e.g. `files/list_folder`.
    pub const DROPBOX_ROUTE: &str = "dropbox.route";
    /// One of `api`, `content`, or `notify`.
    pub const DROPBOX_HOST: &str = "dropbox.host";
    /// One of `rpc`, `upload`, or `download`.
    pub const DROPBOX_STYLE: &str = "dropbox.style";
}

use keys::*;

/// The classification recorded in the `error.type` attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorType {
    /// The route returned its own error (HTTP 409).
    Endpoint,
    /// Any HTTP error status, other than 409.
    HttpStatus(u16),
    Timeout,
    ConnectionError,
    Authentication,
    RequestEncode,
    ResponseDecode,
    Internal,
}

impl ErrorType {
    pub fn from_gax_error(error: &Error) -> Self {
        if let Some(code) = error.http_status_code() {
            return Self::HttpStatus(code);
        }
        match error {
            e if e.is_timeout() => Self::Timeout,
            e if e.is_io() || e.is_transport() => Self::ConnectionError,
            e if e.is_authentication() => Self::Authentication,
            e if e.is_serialization() => Self::RequestEncode,
            e if e.is_deserialization() => Self::ResponseDecode,
            _ => Self::Internal,
        }
    }

    pub fn from_route_error<E>(error: &RouteError<E>) -> Self {
        match error {
            RouteError::Endpoint(_) => Self::Endpoint,
            RouteError::Other(e) => Self::from_gax_error(e),
        }
    }

    pub fn as_str(&self) -> std::borrow::Cow<'static, str> {
        match self {
            Self::Endpoint => "409".into(),
            Self::HttpStatus(code) => code.to_string().into(),
            Self::Timeout => "TIMEOUT".into(),
            Self::ConnectionError => "CONNECTION_ERROR".into(),
            Self::Authentication => "CLIENT_AUTHENTICATION_ERROR".into(),
            Self::RequestEncode => "CLIENT_REQUEST_ENCODE_ERROR".into(),
            Self::ResponseDecode => "CLIENT_RESPONSE_DECODE_ERROR".into(),
            Self::Internal => "INTERNAL".into(),
        }
    }
}

/// Creates the span for a single request.
///
/// The response attributes are recorded later, see
/// [record_status_code] and [record_error].
pub fn create_request_span(route: &Route, url: &str) -> Span {
    tracing::info_span!(
        "dropbox_request",
        { HTTP_REQUEST_METHOD } = "POST",
        { URL_FULL } = url,
        { DROPBOX_ROUTE } = route.id(),
        { DROPBOX_HOST } = route.host.as_str(),
        { DROPBOX_STYLE } = route.style.as_str(),
        { HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { ERROR_TYPE } = field::Empty,
    )
}

pub fn record_status_code(span: &Span, status: u16) {
    span.record(HTTP_RESPONSE_STATUS_CODE, status as i64);
}

pub fn record_error<E>(span: &Span, error: &RouteError<E>) {
    span.record(ERROR_TYPE, ErrorType::from_route_error(error).as_str().as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::ApiError;
    use gax::error::CredentialsError;
    use http::HeaderMap;
    use test_case::test_case;

    #[test_case(Error::timeout("t"), "TIMEOUT")]
    #[test_case(Error::io("broken pipe"), "CONNECTION_ERROR")]
    #[test_case(Error::transport(HeaderMap::new(), "reset"), "CONNECTION_ERROR")]
    #[test_case(Error::authentication(CredentialsError::from_msg(false, "no")), "CLIENT_AUTHENTICATION_ERROR")]
    #[test_case(Error::ser("bad"), "CLIENT_REQUEST_ENCODE_ERROR")]
    #[test_case(Error::deser("bad"), "CLIENT_RESPONSE_DECODE_ERROR")]
    #[test_case(Error::http(503, HeaderMap::new(), bytes::Bytes::new()), "503")]
    fn error_type(input: Error, want: &str) {
        let got = ErrorType::from_gax_error(&input);
        assert_eq!(got.as_str(), want, "{input:?}");
    }

    #[test]
    fn endpoint_error_type() {
        let input = RouteError::Endpoint(ApiError::new("not_found".to_string()));
        let got = ErrorType::from_route_error(&input);
        assert_eq!(got, ErrorType::Endpoint);
        assert_eq!(got.as_str(), "409");
    }

    #[test]
    fn span_has_name() {
        let route = Route::rpc("files", "get_metadata");
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry());
        let span = create_request_span(&route, "https://api.dropboxapi.com/2/files/get_metadata");
        record_status_code(&span, 200);
        assert_eq!(
            span.metadata().map(|m| m.name()),
            Some("dropbox_request")
        );
    }
}
