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

//! Credentials based on the app key and secret.
//!
//! A few routes, such as `check/app`, authenticate the application rather
//! than a user. These routes use HTTP basic authentication with the app key
//! as the user name and the app secret as the password.
//!
//! These credentials may also hold an access token. With a token they can
//! authenticate routes that accept user or team authentication as well.

use super::{AuthStyle, CacheableResource, Credentials, EntityTag};
use crate::Result;
use crate::headers_util::{build_basic_headers, build_bearer_headers};
use http::{Extensions, HeaderMap};
use std::sync::Arc;

struct AppKeyCredentials {
    app_key: String,
    app_secret: String,
    access_token: Option<String>,
    basic_tag: EntityTag,
    bearer_tag: EntityTag,
}

impl std::fmt::Debug for AppKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppKeyCredentials")
            .field("app_key", &self.app_key)
            .field("app_secret", &"[censored]")
            .field("access_token", &self.access_token.as_ref().map(|_| "[censored]"))
            .finish()
    }
}

/// A builder for credentials using the app key and secret.
///
/// # Example
/// ```
/// # use dropbox_sdk_auth::credentials::app_key::Builder;
/// let credentials = Builder::new("my-app-key", "my-app-secret").build();
/// ```
pub struct Builder {
    app_key: String,
    app_secret: String,
    access_token: Option<String>,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("app_key", &self.app_key)
            .field("app_secret", &"[censored]")
            .finish_non_exhaustive()
    }
}

impl Builder {
    /// Creates a new builder with the given app key and secret.
    pub fn new<K: Into<String>, S: Into<String>>(app_key: K, app_secret: S) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            access_token: None,
        }
    }

    /// Also authenticate routes that require a user or team access token.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_auth::credentials::app_key::Builder;
    /// let credentials = Builder::new("my-app-key", "my-app-secret")
    ///     .with_access_token("sl.my-access-token")
    ///     .build();
    /// ```
    pub fn with_access_token<T: Into<String>>(mut self, v: T) -> Self {
        self.access_token = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials {
            inner: Arc::new(AppKeyCredentials {
                app_key: self.app_key,
                app_secret: self.app_secret,
                access_token: self.access_token,
                basic_tag: EntityTag::new(),
                bearer_tag: EntityTag::new(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl super::dynamic::CredentialsProvider for AppKeyCredentials {
    async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        let styles = super::accepted_styles(&extensions);
        for style in styles {
            match (style, &self.access_token) {
                (AuthStyle::App, _) => {
                    return super::cacheable(&extensions, &self.basic_tag, || {
                        build_basic_headers(&self.app_key, &self.app_secret)
                    });
                }
                (AuthStyle::User | AuthStyle::Team, Some(token)) => {
                    return super::cacheable(&extensions, &self.bearer_tag, || {
                        build_bearer_headers(token)
                    });
                }
                (AuthStyle::NoAuth, _) => {
                    return Ok(CacheableResource::New {
                        entity_tag: EntityTag::new(),
                        data: HeaderMap::new(),
                    });
                }
                (AuthStyle::User | AuthStyle::Team, None) => {}
            }
        }
        Err(super::unsupported_styles(styles, "the app key and secret"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::{get_headers_from_cache, styles};
    use http::HeaderValue;
    use http::header::AUTHORIZATION;

    type TestResult = anyhow::Result<()>;

    const BASIC: &str = "Basic a2V5OnNlY3JldA==";

    #[test]
    fn debug() {
        let credentials = Builder::new("key", "super-secret")
            .with_access_token("super-token")
            .build();
        let fmt = format!("{credentials:?}");
        assert!(fmt.contains("key"), "{fmt}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
        assert!(!fmt.contains("super-token"), "{fmt}");
    }

    #[tokio::test]
    async fn basic() -> TestResult {
        let credentials = Builder::new("key", "secret").build();
        let headers =
            get_headers_from_cache(credentials.headers(styles(&[AuthStyle::App])).await?)?;
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static(BASIC));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    async fn user_without_token() {
        let credentials = Builder::new("key", "secret").build();
        let e = credentials
            .headers(styles(&[AuthStyle::User]))
            .await
            .unwrap_err();
        assert!(!e.is_transient(), "{e:?}");
        assert!(e.to_string().contains("app key"), "{e}");
    }

    #[tokio::test]
    async fn user_with_token() -> TestResult {
        let credentials = Builder::new("key", "secret")
            .with_access_token("test-token")
            .build();
        let headers =
            get_headers_from_cache(credentials.headers(styles(&[AuthStyle::User])).await?)?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-token"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn preference_order() -> TestResult {
        let credentials = Builder::new("key", "secret")
            .with_access_token("test-token")
            .build();
        let headers = get_headers_from_cache(
            credentials
                .headers(styles(&[AuthStyle::App, AuthStyle::User]))
                .await?,
        )?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static(BASIC))
        );

        let headers = get_headers_from_cache(
            credentials
                .headers(styles(&[AuthStyle::User, AuthStyle::App]))
                .await?,
        )?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-token"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn cached_per_style() -> TestResult {
        let credentials = Builder::new("key", "secret")
            .with_access_token("test-token")
            .build();
        let mut extensions = styles(&[AuthStyle::App]);
        let entity_tag = match credentials.headers(extensions.clone()).await? {
            CacheableResource::New { entity_tag, .. } => entity_tag,
            CacheableResource::NotModified => unreachable!("expecting new headers"),
        };
        extensions.insert(entity_tag.clone());
        let got = credentials.headers(extensions).await?;
        assert_eq!(got, CacheableResource::NotModified);

        let mut extensions = styles(&[AuthStyle::User]);
        extensions.insert(entity_tag);
        let got = credentials.headers(extensions).await?;
        assert!(matches!(got, CacheableResource::New { .. }), "{got:?}");
        Ok(())
    }
}
