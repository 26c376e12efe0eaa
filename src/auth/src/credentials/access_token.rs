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

//! Credentials based on an OAuth2 access token.
//!
//! Most routes in the Dropbox API require an access token for a user or a
//! team. Applications obtain these tokens with the OAuth2 flow described in
//! the [OAuth guide]. These credentials send the token as a bearer token.
//!
//! These credentials do not refresh the access token. Applications that need
//! long-lived access should implement [CredentialsProvider] with their own
//! refresh logic.
//!
//! [OAuth guide]: https://developers.dropbox.com/oauth-guide
//! [CredentialsProvider]: super::dynamic::CredentialsProvider

use super::{AuthStyle, BuildResult, CacheableResource, Credentials, EntityTag};
use crate::Result;
use crate::build_errors::Error as BuildError;
use crate::headers_util::build_bearer_headers;
use http::{Extensions, HeaderMap};
use std::path::Path;
use std::sync::Arc;
use time::OffsetDateTime;

struct AccessTokenCredentials {
    token: String,
    entity_tag: EntityTag,
}

impl std::fmt::Debug for AccessTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenCredentials")
            .field("token", &"[censored]")
            .field("entity_tag", &self.entity_tag)
            .finish()
    }
}

/// A builder for credentials using an OAuth2 access token.
///
/// # Example
/// ```
/// # use dropbox_sdk_auth::credentials::access_token::Builder;
/// let credentials = Builder::new("sl.my-access-token").build();
/// ```
pub struct Builder {
    token: String,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("token", &"[censored]")
            .finish()
    }
}

/// The format of a saved token file.
#[derive(serde::Deserialize)]
struct SavedToken {
    access_token: String,
    token_type: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    expiry: Option<OffsetDateTime>,
}

impl Builder {
    /// Creates a new builder with the given access token.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Creates a new builder from a saved token file.
    ///
    /// The file contains a JSON object with the `access_token`, the
    /// `token_type`, which must be `bearer`, and optionally the `expiry`
    /// formatted as an RFC 3339 timestamp:
    ///
    /// ```json
    /// {
    ///   "access_token": "sl.my-access-token",
    ///   "token_type": "bearer",
    ///   "expiry": "2026-01-01T00:00:00Z"
    /// }
    /// ```
    ///
    /// Returns an error if the token has already expired.
    pub fn from_file<P: AsRef<Path>>(path: P) -> BuildResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(BuildError::loading)?;
        Self::from_json(&contents)
    }

    /// Creates a new builder from the contents of a saved token file.
    ///
    /// See [from_file][Builder::from_file] for the format.
    pub fn from_json(contents: &str) -> BuildResult<Self> {
        let saved = serde_json::from_str::<SavedToken>(contents).map_err(BuildError::parsing)?;
        if !saved.token_type.eq_ignore_ascii_case("bearer") {
            return Err(BuildError::parsing(format!(
                "unsupported token type {}",
                saved.token_type
            )));
        }
        if saved.access_token.is_empty() {
            return Err(BuildError::missing_field("access_token"));
        }
        if let Some(expiry) = saved.expiry.filter(|e| *e <= OffsetDateTime::now_utc()) {
            return Err(BuildError::expired(expiry));
        }
        Ok(Self::new(saved.access_token))
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials {
            inner: Arc::new(AccessTokenCredentials {
                token: self.token,
                entity_tag: EntityTag::new(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl super::dynamic::CredentialsProvider for AccessTokenCredentials {
    async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        let styles = super::accepted_styles(&extensions);
        for style in styles {
            match style {
                AuthStyle::User | AuthStyle::Team => {
                    return super::cacheable(&extensions, &self.entity_tag, || {
                        build_bearer_headers(&self.token)
                    });
                }
                AuthStyle::NoAuth => {
                    return Ok(CacheableResource::New {
                        entity_tag: EntityTag::new(),
                        data: HeaderMap::new(),
                    });
                }
                AuthStyle::App => {}
            }
        }
        Err(super::unsupported_styles(styles, "an access token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::{get_headers_from_cache, styles};
    use http::HeaderValue;
    use http::header::AUTHORIZATION;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn debug() {
        let builder = Builder::new("super-secret-token");
        let fmt = format!("{builder:?}");
        assert!(!fmt.contains("super-secret-token"), "{fmt}");

        let credentials = builder.build();
        let fmt = format!("{credentials:?}");
        assert!(!fmt.contains("super-secret-token"), "{fmt}");
    }

    #[tokio::test]
    #[test_case(&[AuthStyle::User])]
    #[test_case(&[AuthStyle::Team])]
    #[test_case(&[AuthStyle::App, AuthStyle::User])]
    async fn bearer(accepted: &'static [AuthStyle]) -> TestResult {
        let credentials = Builder::new("test-token").build();
        let headers = get_headers_from_cache(credentials.headers(styles(accepted)).await?)?;
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(headers.len(), 1, "{headers:?}");
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    async fn no_auth() -> TestResult {
        let credentials = Builder::new("test-token").build();
        let headers =
            get_headers_from_cache(credentials.headers(styles(&[AuthStyle::NoAuth])).await?)?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn app_only() {
        let credentials = Builder::new("test-token").build();
        let e = credentials
            .headers(styles(&[AuthStyle::App]))
            .await
            .unwrap_err();
        assert!(!e.is_transient(), "{e:?}");
        assert!(e.to_string().contains("access token"), "{e}");
    }

    #[tokio::test]
    async fn cached() -> TestResult {
        let credentials = Builder::new("test-token").build();
        let mut extensions = Extensions::new();
        let entity_tag = match credentials.headers(extensions.clone()).await? {
            CacheableResource::New { entity_tag, .. } => entity_tag,
            CacheableResource::NotModified => unreachable!("expecting new headers"),
        };
        extensions.insert(entity_tag);
        let got = credentials.headers(extensions).await?;
        assert_eq!(got, CacheableResource::NotModified);
        Ok(())
    }

    #[test]
    fn from_json() -> TestResult {
        let contents = r#"{"access_token": "saved-token", "token_type": "bearer", "expiry": "2999-01-01T00:00:00Z"}"#;
        let builder = Builder::from_json(contents)?;
        assert_eq!(builder.token, "saved-token");

        let contents = r#"{"access_token": "saved-token", "token_type": "Bearer"}"#;
        let builder = Builder::from_json(contents)?;
        assert_eq!(builder.token, "saved-token");
        Ok(())
    }

    #[test]
    fn from_json_expired() {
        let contents = r#"{"access_token": "saved-token", "token_type": "bearer", "expiry": "2020-01-01T00:00:00Z"}"#;
        let e = Builder::from_json(contents).unwrap_err();
        assert!(e.is_expired(), "{e:?}");
    }

    #[test_case(r#"not json"#; "not json")]
    #[test_case(r#"{"token_type": "bearer"}"#; "missing token")]
    #[test_case(r#"{"access_token": "t", "token_type": "mac"}"#; "bad type")]
    #[test_case(r#"{"access_token": "t", "token_type": "bearer", "expiry": "yesterday"}"#; "bad expiry")]
    fn from_json_parsing(contents: &str) {
        let e = Builder::from_json(contents).unwrap_err();
        assert!(e.is_parsing(), "{e:?}");
    }

    #[test]
    fn from_json_empty_token() {
        let e = Builder::from_json(r#"{"access_token": "", "token_type": "bearer"}"#).unwrap_err();
        assert!(e.is_missing_field(), "{e:?}");
    }

    #[test]
    fn from_file() -> TestResult {
        let file = tempfile::NamedTempFile::new()?;
        std::fs::write(
            file.path(),
            r#"{"access_token": "file-token", "token_type": "bearer"}"#,
        )?;
        let builder = Builder::from_file(file.path())?;
        assert_eq!(builder.token, "file-token");
        Ok(())
    }

    #[test]
    fn from_file_missing() -> TestResult {
        let dir = tempfile::tempdir()?;
        let e = Builder::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(e.is_loading(), "{e:?}");
        Ok(())
    }
}
