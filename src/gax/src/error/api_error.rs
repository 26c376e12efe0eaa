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

use super::Error;

/// The error envelope returned by the Dropbox API.
///
/// Routes report their own errors with HTTP status code 409. The body is a
/// JSON object with a human-readable summary, an optional message suitable
/// for end users, and the route-specific error as a tagged union.
///
/// # Example
/// ```
/// # use dropbox_sdk_gax::error::ApiError;
/// # use serde_json::json;
/// let body = json!({
///     "error_summary": "path/not_found/..",
///     "error": "not_found",
/// });
/// let got = serde_json::from_value::<ApiError<String>>(body)?;
/// assert_eq!(got.error_summary, "path/not_found/..");
/// assert_eq!(got.error, "not_found");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ApiError<E> {
    /// A summary of the error, for developers. The format is not stable and
    /// applications should not parse it.
    #[serde(default)]
    pub error_summary: String,

    /// A message suitable to display to end users, if the service provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<LocalizedText>,

    /// The route-specific error.
    pub error: E,
}

impl<E> ApiError<E> {
    pub fn new(error: E) -> Self {
        Self {
            error_summary: String::new(),
            user_message: None,
            error,
        }
    }

    /// Sets the value of [error_summary][ApiError::error_summary].
    pub fn set_error_summary<T: Into<String>>(mut self, v: T) -> Self {
        self.error_summary = v.into();
        self
    }

    /// Sets the value of [user_message][ApiError::user_message].
    pub fn set_user_message<T: Into<LocalizedText>>(mut self, v: T) -> Self {
        self.user_message = Some(v.into());
        self
    }
}

/// A message and the locale it is written in.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct LocalizedText {
    /// The text of the message.
    pub text: String,
    /// The locale of the message, for example `en-US`.
    pub locale: String,
}

impl LocalizedText {
    pub fn new<T: Into<String>, L: Into<String>>(text: T, locale: L) -> Self {
        Self {
            text: text.into(),
            locale: locale.into(),
        }
    }
}

/// The error returned by each route.
///
/// Routes fail either with their own error type, or with any of the problems
/// represented by [Error]: the request could not be sent, the response could
/// not be parsed, the service rejected the credentials, etc.
///
/// # Example
/// ```
/// # use dropbox_sdk_gax::error::{ApiError, RouteError};
/// fn handle(e: RouteError<String>) {
///     match e {
///         RouteError::Endpoint(e) => println!("the route failed with {}", e.error),
///         RouteError::Other(e) if e.is_timeout() => println!("not enough time: {e}"),
///         RouteError::Other(e) => println!("some other problem: {e}"),
///     }
/// }
/// ```
#[derive(Debug)]
pub enum RouteError<E> {
    /// The route reported an error with HTTP status 409.
    Endpoint(ApiError<E>),
    /// Any other error.
    Other(Error),
}

impl<E> RouteError<E> {
    /// The route-specific error, if any.
    pub fn endpoint(&self) -> Option<&E> {
        match self {
            Self::Endpoint(e) => Some(&e.error),
            Self::Other(_) => None,
        }
    }

    /// The non-route-specific error, if any.
    pub fn other(&self) -> Option<&Error> {
        match self {
            Self::Endpoint(_) => None,
            Self::Other(e) => Some(e),
        }
    }

    /// The error summary, if the service returned one.
    pub fn error_summary(&self) -> Option<&str> {
        match self {
            Self::Endpoint(e) => Some(e.error_summary.as_str()),
            Self::Other(e) => e.error_summary(),
        }
    }

    /// The message for end users, if the service returned one.
    pub fn user_message(&self) -> Option<&LocalizedText> {
        match self {
            Self::Endpoint(e) => e.user_message.as_ref(),
            Self::Other(e) => e.user_message(),
        }
    }

    /// Changes the route-specific error type.
    pub fn map<F, T>(self, f: F) -> RouteError<T>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Endpoint(e) => RouteError::Endpoint(ApiError {
                error_summary: e.error_summary,
                user_message: e.user_message,
                error: f(e.error),
            }),
            Self::Other(e) => RouteError::Other(e),
        }
    }
}

impl<E> From<Error> for RouteError<E> {
    fn from(value: Error) -> Self {
        Self::Other(value)
    }
}

impl<E> std::fmt::Display for RouteError<E>
where
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Endpoint(e) if e.error_summary.is_empty() => {
                write!(f, "the route reports an error: {}", e.error)
            }
            Self::Endpoint(e) => write!(
                f,
                "the route reports an error: {} described as: {}",
                e.error, e.error_summary
            ),
            Self::Other(e) => std::fmt::Display::fmt(e, f),
        }
    }
}

impl<E> std::error::Error for RouteError<E>
where
    E: std::fmt::Debug + std::fmt::Display,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Endpoint(_) => None,
            Self::Other(e) => Some(e),
        }
    }
}

/// The error type for routes that do not declare errors.
///
/// This type has no values. A 409 response for such a route is reported as a
/// deserialization error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoError {}

impl std::fmt::Display for NoError {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {}
    }
}

impl<'de> serde::Deserialize<'de> for NoError {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        Err(D::Error::custom("the route does not declare any errors"))
    }
}

impl serde::Serialize for NoError {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error as _;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn api_error() -> TestResult {
        let input = json!({
            "error_summary": "too_many_files/..",
            "user_message": {"text": "Too many files", "locale": "en"},
            "error": "too_many_files",
        });
        let got = serde_json::from_value::<ApiError<String>>(input.clone())?;
        let want = ApiError::new("too_many_files".to_string())
            .set_error_summary("too_many_files/..")
            .set_user_message(LocalizedText::new("Too many files", "en"));
        assert_eq!(got, want);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn api_error_minimal() -> TestResult {
        let got = serde_json::from_value::<ApiError<String>>(json!({"error": "x"}))?;
        assert_eq!(got, ApiError::new("x".to_string()));
        let got = serde_json::from_value::<ApiError<String>>(json!({"error_summary": "x"}));
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[test]
    fn endpoint() {
        let error = RouteError::Endpoint(
            ApiError::new("not_found".to_string()).set_error_summary("path/not_found/"),
        );
        assert_eq!(error.endpoint().map(String::as_str), Some("not_found"));
        assert!(error.other().is_none(), "{error:?}");
        assert_eq!(error.error_summary(), Some("path/not_found/"));
        assert!(error.user_message().is_none(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        let fmt = error.to_string();
        assert!(fmt.contains("not_found"), "{fmt}");
        assert!(fmt.contains("path/not_found/"), "{fmt}");

        let error = error.map(|e| e.len());
        assert_eq!(error.endpoint(), Some(&"not_found".len()));
    }

    #[test]
    fn other() {
        let error = RouteError::<String>::from(Error::timeout("simulated"));
        assert!(error.endpoint().is_none(), "{error:?}");
        assert!(matches!(error.other(), Some(e) if e.is_timeout()), "{error:?}");
        assert!(error.error_summary().is_none(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated"), "{error}");
    }

    #[test]
    fn no_error() {
        let got = serde_json::from_value::<ApiError<NoError>>(json!({"error": {".tag": "other"}}));
        assert!(got.is_err(), "{got:?}");
        let got = serde_json::from_value::<NoError>(json!(null));
        assert!(got.is_err(), "{got:?}");
    }
}
