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

use super::auth::{AccessError, AuthError, RateLimitError};
use super::{ApiError, LocalizedText};

/// An error returned by the Dropbox API that is not specific to any route.
///
/// The HTTP status code determines the format of the response body, and
/// therefore the variant.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ServiceError {
    /// HTTP status 400. The input parameters were malformed, the body is a
    /// plain text message.
    BadRequest(String),
    /// HTTP status 401. The credentials were invalid or expired.
    Auth(ApiError<AuthError>),
    /// HTTP status 403. The account cannot access the route or resource.
    Access(ApiError<AccessError>),
    /// HTTP status 429. The application is rate limited.
    RateLimit(ApiError<RateLimitError>),
    /// HTTP status 5xx. The body is a plain text message.
    Server(String),
    /// Any other status code, with the generic error envelope.
    Other(ErrorEnvelope),
}

impl ServiceError {
    /// A summary of the error, for developers.
    pub fn error_summary(&self) -> &str {
        match self {
            Self::BadRequest(m) | Self::Server(m) => m.as_str(),
            Self::Auth(e) => e.error_summary.as_str(),
            Self::Access(e) => e.error_summary.as_str(),
            Self::RateLimit(e) => e.error_summary.as_str(),
            Self::Other(e) => e.error_summary.as_str(),
        }
    }

    /// A message for end users, if the service returned one.
    pub fn user_message(&self) -> Option<&LocalizedText> {
        match self {
            Self::BadRequest(_) | Self::Server(_) => None,
            Self::Auth(e) => e.user_message.as_ref(),
            Self::Access(e) => e.user_message.as_ref(),
            Self::RateLimit(e) => e.user_message.as_ref(),
            Self::Other(e) => e.user_message.as_ref(),
        }
    }
}

/// The fields common to all error responses.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<LocalizedText>,
}

impl ErrorEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [error_summary][ErrorEnvelope::error_summary].
    pub fn set_error_summary<T: Into<String>>(mut self, v: T) -> Self {
        self.error_summary = v.into();
        self
    }

    /// Sets the value of [user_message][ErrorEnvelope::user_message].
    pub fn set_user_message<T: Into<LocalizedText>>(mut self, v: T) -> Self {
        self.user_message = Some(v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::auth::RateLimitReason;

    #[test]
    fn error_summary() {
        let input = ServiceError::BadRequest("bad input".into());
        assert_eq!(input.error_summary(), "bad input");
        assert!(input.user_message().is_none(), "{input:?}");

        let input = ServiceError::Auth(
            ApiError::new(AuthError::InvalidAccessToken)
                .set_error_summary("invalid_access_token/")
                .set_user_message(LocalizedText::new("Sign in again", "en")),
        );
        assert_eq!(input.error_summary(), "invalid_access_token/");
        assert_eq!(
            input.user_message(),
            Some(&LocalizedText::new("Sign in again", "en"))
        );

        let input = ServiceError::RateLimit(
            ApiError::new(RateLimitError::new(RateLimitReason::TooManyRequests))
                .set_error_summary("too_many_requests/"),
        );
        assert_eq!(input.error_summary(), "too_many_requests/");

        let input = ServiceError::Other(ErrorEnvelope::new().set_error_summary("teapot"));
        assert_eq!(input.error_summary(), "teapot");
    }
}
