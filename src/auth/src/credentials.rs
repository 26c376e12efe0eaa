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

//! Types and functions to work with Dropbox API credentials.
//!
//! The clients in the Dropbox SDK for Rust use [Credentials] to create the
//! `Authorization` header for each request. Applications typically create the
//! credentials with one of the builders in this module, or let the clients
//! find them in the environment, see [Builder].
//!
//! # Example
//! ```
//! # use dropbox_sdk_auth::credentials::{AuthStyle, AuthStyles, access_token};
//! # tokio_test::block_on(async {
//! let credentials = access_token::Builder::new("sl.my-access-token").build();
//! let mut extensions = http::Extensions::new();
//! extensions.insert(AuthStyles(&[AuthStyle::User]));
//! let headers = credentials.headers(extensions).await?;
//! # Ok::<(), anyhow::Error>(()) });
//! ```

use crate::Result;
use crate::build_errors::Error as BuildError;
use crate::errors;
use http::{Extensions, HeaderMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod access_token;
pub mod anonymous;
pub mod app_key;
#[doc(hidden)]
pub mod testing;

/// The result of building credentials.
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// The environment variable holding an OAuth2 access token.
pub const ACCESS_TOKEN_VAR: &str = "DROPBOX_ACCESS_TOKEN";
/// The environment variable naming a saved token file.
pub const TOKEN_FILE_VAR: &str = "DROPBOX_TOKEN_FILE";
/// The environment variable holding the app key.
pub const APP_KEY_VAR: &str = "DROPBOX_APP_KEY";
/// The environment variable holding the app secret.
pub const APP_SECRET_VAR: &str = "DROPBOX_APP_SECRET";

/// The authentication styles used by the Dropbox API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthStyle {
    /// An OAuth2 access token for a user, sent as a bearer token.
    User,
    /// An OAuth2 access token for a team, sent as a bearer token.
    Team,
    /// The app key and secret, sent with HTTP basic authentication.
    App,
    /// No authentication.
    NoAuth,
}

/// The styles accepted by a route, in order of preference.
///
/// The clients insert this value in the [Extensions] passed to
/// [Credentials::headers]. Credentials assume [AuthStyle::User] if the
/// extensions do not contain this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthStyles(pub &'static [AuthStyle]);

pub(crate) fn accepted_styles(extensions: &Extensions) -> &'static [AuthStyle] {
    extensions
        .get::<AuthStyles>()
        .map(|s| s.0)
        .unwrap_or(&[AuthStyle::User])
}

/// An implementation of [dynamic::CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
///
/// In general, [Credentials][credentials-link] are "digital object that
/// provide proof of identity", the archetype may be a username and password
/// combination, but a private RSA key may be a better example.
///
/// Modern authentication protocols do not send the credentials to
/// authenticate with a service. Even when sent over encrypted transports,
/// the credentials may be accidentally exposed via logging or may be
/// captured if there are errors in the transport encryption. Because the
/// credentials are often long-lived, that risk of exposure is also
/// long-lived.
///
/// The Dropbox API uses short-lived access tokens, or the app key and secret
/// for a few routes. This type hides the details of each style from the
/// clients.
///
/// [credentials-link]: https://developers.dropbox.com/oauth-guide
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: dynamic::CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to authenticate a request.
    ///
    /// The [AuthStyles] in `extensions` selects the type of header. If the
    /// extensions contain the [EntityTag] returned by a previous call, and the
    /// headers have not changed, this returns
    /// [CacheableResource::NotModified].
    pub async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        self.inner.headers(extensions).await
    }
}

/// Represents an entity tag for a [CacheableResource].
///
/// An `EntityTag` is an opaque token that can be used to determine if a
/// cached resource has changed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityTag(u64);

static ENTITY_TAG_GENERATOR: AtomicU64 = AtomicU64::new(0);

impl EntityTag {
    /// Creates a new, unique tag.
    pub fn new() -> Self {
        let value = ENTITY_TAG_GENERATOR.fetch_add(1, Ordering::SeqCst);
        Self(value)
    }
}

impl std::default::Default for EntityTag {
    fn default() -> Self {
        Self::new()
    }
}

/// Represents a resource that can be cached, along with its [EntityTag].
#[derive(Clone, Debug, PartialEq)]
pub enum CacheableResource<T> {
    NotModified,
    New { entity_tag: EntityTag, data: T },
}

/// Returns `NotModified` if the caller already has the headers identified by
/// `entity_tag`, otherwise creates them.
pub(crate) fn cacheable<F>(
    extensions: &Extensions,
    entity_tag: &EntityTag,
    make: F,
) -> Result<CacheableResource<HeaderMap>>
where
    F: FnOnce() -> Result<HeaderMap>,
{
    match extensions.get::<EntityTag>() {
        Some(tag) if entity_tag.eq(tag) => Ok(CacheableResource::NotModified),
        _ => Ok(CacheableResource::New {
            entity_tag: entity_tag.clone(),
            data: make()?,
        }),
    }
}

pub(crate) fn unsupported_styles(styles: &[AuthStyle], have: &str) -> errors::CredentialsError {
    errors::non_retryable_from_str(format!(
        "the route accepts {styles:?} authentication, but the credentials only hold {have}"
    ))
}

/// A builder for the default credentials.
///
/// The default credentials are found in the environment, the builder checks
/// these variables in order:
///
/// 1. `DROPBOX_ACCESS_TOKEN` holds an OAuth2 access token.
/// 2. `DROPBOX_TOKEN_FILE` names a file with a saved token, see
///    [access_token::Builder::from_file].
/// 3. `DROPBOX_APP_KEY` and `DROPBOX_APP_SECRET` hold the app key and secret.
///
/// # Example
/// ```no_run
/// # use dropbox_sdk_auth::credentials::Builder;
/// let credentials = Builder::default().build()?;
/// # Ok::<(), dropbox_sdk_auth::build_errors::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Returns the default credentials, or an error if none are configured.
    pub fn build(self) -> BuildResult<Credentials> {
        if let Some(token) = non_empty_var(ACCESS_TOKEN_VAR) {
            return Ok(access_token::Builder::new(token).build());
        }
        if let Some(path) = non_empty_var(TOKEN_FILE_VAR) {
            return access_token::Builder::from_file(path).map(access_token::Builder::build);
        }
        match (non_empty_var(APP_KEY_VAR), non_empty_var(APP_SECRET_VAR)) {
            (Some(key), Some(secret)) => Ok(app_key::Builder::new(key, secret).build()),
            (Some(_), None) => Err(BuildError::missing_field(APP_SECRET_VAR)),
            (None, Some(_)) => Err(BuildError::missing_field(APP_KEY_VAR)),
            (None, None) => Err(BuildError::not_found()),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

pub mod dynamic {
    use super::CacheableResource;
    use crate::Result;
    use http::{Extensions, HeaderMap};

    /// A trait for credential types that can provide authentication headers.
    ///
    /// Applications may implement this trait to provide their own credentials,
    /// for example, to refresh short-lived access tokens with their own OAuth2
    /// flow.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>>;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use std::error::Error as _;

    type TestResult = anyhow::Result<()>;

    pub(crate) fn get_headers_from_cache(
        headers: CacheableResource<HeaderMap>,
    ) -> anyhow::Result<HeaderMap> {
        match headers {
            CacheableResource::New { data, .. } => Ok(data),
            CacheableResource::NotModified => {
                Err(anyhow::anyhow!("expecting headers to be present"))
            }
        }
    }

    pub(crate) fn styles(styles: &'static [AuthStyle]) -> Extensions {
        let mut extensions = Extensions::new();
        extensions.insert(AuthStyles(styles));
        extensions
    }

    fn clear_env() -> [ScopedEnv<&'static str>; 4] {
        [
            ScopedEnv::remove(ACCESS_TOKEN_VAR),
            ScopedEnv::remove(TOKEN_FILE_VAR),
            ScopedEnv::remove(APP_KEY_VAR),
            ScopedEnv::remove(APP_SECRET_VAR),
        ]
    }

    #[test]
    fn entity_tag_unique() {
        let a = EntityTag::new();
        let b = EntityTag::default();
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn accepted_styles_default() {
        assert_eq!(accepted_styles(&Extensions::new()), &[AuthStyle::User]);
        let ext = styles(&[AuthStyle::App, AuthStyle::User]);
        assert_eq!(accepted_styles(&ext), &[AuthStyle::App, AuthStyle::User]);
    }

    #[test]
    fn unsupported() {
        let e = unsupported_styles(&[AuthStyle::App], "an access token");
        assert!(!e.is_transient(), "{e:?}");
        assert!(e.source().is_none(), "{e:?}");
        assert!(e.to_string().contains("App"), "{e}");
    }

    #[tokio::test]
    async fn custom_provider() -> TestResult {
        #[derive(Debug)]
        struct Custom;
        #[async_trait::async_trait]
        impl dynamic::CredentialsProvider for Custom {
            async fn headers(&self, _: Extensions) -> Result<CacheableResource<HeaderMap>> {
                let mut data = HeaderMap::new();
                data.insert("x-custom", http::HeaderValue::from_static("value"));
                Ok(CacheableResource::New {
                    entity_tag: EntityTag::new(),
                    data,
                })
            }
        }
        let credentials = Credentials::from(Custom);
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert_eq!(
            headers.get("x-custom"),
            Some(&http::HeaderValue::from_static("value"))
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_access_token() -> TestResult {
        let _clear = clear_env();
        let _e = ScopedEnv::set(ACCESS_TOKEN_VAR, "env-token");
        let _k = ScopedEnv::set(APP_KEY_VAR, "ignored");
        let credentials = Builder::default().build()?;
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert_eq!(
            headers.get(http::header::AUTHORIZATION),
            Some(&http::HeaderValue::from_static("Bearer env-token"))
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_token_file() -> TestResult {
        let _clear = clear_env();
        let file = tempfile::NamedTempFile::new()?;
        std::fs::write(
            file.path(),
            r#"{"access_token": "file-token", "token_type": "bearer"}"#,
        )?;
        let path = file.path().to_string_lossy().to_string();
        let _e = ScopedEnv::set(TOKEN_FILE_VAR, path.as_str());
        let credentials = Builder::default().build()?;
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert_eq!(
            headers.get(http::header::AUTHORIZATION),
            Some(&http::HeaderValue::from_static("Bearer file-token"))
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_app_key() -> TestResult {
        let _clear = clear_env();
        let _k = ScopedEnv::set(APP_KEY_VAR, "key");
        let _s = ScopedEnv::set(APP_SECRET_VAR, "secret");
        let credentials = Builder::default().build()?;
        let headers = get_headers_from_cache(
            credentials
                .headers(styles(&[AuthStyle::App]))
                .await?,
        )?;
        assert_eq!(
            headers.get(http::header::AUTHORIZATION),
            Some(&http::HeaderValue::from_static("Basic a2V5OnNlY3JldA=="))
        );
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn default_missing_secret() {
        let _clear = clear_env();
        let _k = ScopedEnv::set(APP_KEY_VAR, "key");
        let e = Builder::default().build().unwrap_err();
        assert!(e.is_missing_field(), "{e:?}");
        assert!(e.to_string().contains(APP_SECRET_VAR), "{e}");
    }

    #[test]
    #[serial_test::serial]
    fn default_not_found() {
        let _clear = clear_env();
        let _e = ScopedEnv::set(ACCESS_TOKEN_VAR, "");
        let e = Builder::default().build().unwrap_err();
        assert!(e.is_not_found(), "{e:?}");
    }
}
