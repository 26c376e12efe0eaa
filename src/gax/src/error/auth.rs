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

//! Error details for authentication, authorization, and rate limiting.
//!
//! The Dropbox API returns these for any route, with HTTP status codes 401,
//! 403, and 429 respectively.

use wkt::tagged_union;

tagged_union! {
    /// Errors occurred during authentication.
    pub enum AuthError {
        /// The access token is invalid.
        "invalid_access_token" => InvalidAccessToken,
        /// The user specified in 'Dropbox-API-Select-User' is no longer on the
        /// team.
        "invalid_select_user" => InvalidSelectUser,
        /// The user specified in 'Dropbox-API-Select-Admin' is not a Dropbox
        /// Business team admin.
        "invalid_select_admin" => InvalidSelectAdmin,
        /// The user has been suspended.
        "user_suspended" => UserSuspended,
        /// The access token has expired.
        "expired_access_token" => ExpiredAccessToken,
        /// The access token does not have the required scope to access the
        /// route.
        "missing_scope" => MissingScope(flat TokenScopeError),
        /// The route is not available to public.
        "route_access_denied" => RouteAccessDenied,
        "other" => Other,
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TokenScopeError {
    /// The required scope to access the route.
    pub required_scope: String,
}

impl TokenScopeError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [required_scope][TokenScopeError::required_scope].
    pub fn set_required_scope<T: Into<String>>(mut self, v: T) -> Self {
        self.required_scope = v.into();
        self
    }
}

tagged_union! {
    /// Error occurred because the account doesn't have permission to access the
    /// resource.
    pub enum AccessError {
        /// Current account type cannot access the resource.
        "invalid_account_type" => InvalidAccountType(nested InvalidAccountTypeError),
        /// Current account cannot access Paper.
        "paper_access_denied" => PaperAccessDenied(nested PaperAccessError),
        /// The team has restricted access to this resource.
        "team_access_denied" => TeamAccessDenied,
        /// The caller does not have permission to use the route.
        "no_permission" => NoPermission,
        "other" => Other,
    }
}

tagged_union! {
    pub enum InvalidAccountTypeError {
        /// Current account type doesn't have permission to access this route
        /// endpoint.
        "endpoint" => Endpoint,
        /// Current account type doesn't have permission to access this feature.
        "feature" => Feature,
        "other" => Other,
    }
}

tagged_union! {
    pub enum PaperAccessError {
        /// Paper is disabled.
        "paper_disabled" => PaperDisabled,
        /// The provided user has not used Paper yet.
        "not_paper_user" => NotPaperUser,
        "other" => Other,
    }
}

/// Error occurred because the app is being rate limited.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RateLimitError {
    /// The reason why the app is being rate limited.
    pub reason: RateLimitReason,

    /// The number of seconds that the app should wait before making another
    /// request.
    #[serde(default = "default_retry_after")]
    pub retry_after: u64,
}

fn default_retry_after() -> u64 {
    1
}

impl RateLimitError {
    pub fn new(reason: RateLimitReason) -> Self {
        Self {
            reason,
            retry_after: default_retry_after(),
        }
    }

    /// Sets the value of [retry_after][RateLimitError::retry_after].
    pub fn set_retry_after(mut self, v: u64) -> Self {
        self.retry_after = v;
        self
    }
}

tagged_union! {
    pub enum RateLimitReason {
        /// You are making too many requests in the past few minutes.
        "too_many_requests" => TooManyRequests,
        /// There are currently too many write operations happening in the
        /// user's Dropbox.
        "too_many_write_operations" => TooManyWriteOperations,
        "other" => Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn auth_error() -> TestResult {
        let got = serde_json::from_value::<AuthError>(json!({".tag": "user_suspended"}))?;
        assert_eq!(got, AuthError::UserSuspended);

        let input = json!({".tag": "missing_scope", "required_scope": "files.content.read"});
        let got = serde_json::from_value::<AuthError>(input.clone())?;
        assert_eq!(
            got,
            AuthError::MissingScope(TokenScopeError::new().set_required_scope("files.content.read"))
        );
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn access_error() -> TestResult {
        let input = json!({
            ".tag": "paper_access_denied",
            "paper_access_denied": {".tag": "not_paper_user"}
        });
        let got = serde_json::from_value::<AccessError>(input)?;
        assert_eq!(
            got,
            AccessError::PaperAccessDenied(PaperAccessError::NotPaperUser)
        );
        Ok(())
    }

    #[test]
    fn rate_limit_error() -> TestResult {
        let input = json!({"reason": {".tag": "too_many_requests"}, "retry_after": 300});
        let got = serde_json::from_value::<RateLimitError>(input)?;
        assert_eq!(got.reason, RateLimitReason::TooManyRequests);
        assert_eq!(got.retry_after, 300);

        let input = json!({"reason": {".tag": "too_many_write_operations"}});
        let got = serde_json::from_value::<RateLimitError>(input)?;
        assert_eq!(
            got,
            RateLimitError::new(RateLimitReason::TooManyWriteOperations)
        );
        assert_eq!(got.retry_after, 1);
        Ok(())
    }
}
