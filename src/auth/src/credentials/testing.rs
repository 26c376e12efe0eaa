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

//! Credentials for tests.
//!
//! These helpers are used in the tests of the client libraries. Applications
//! may find them useful in their own tests.

use super::{CacheableResource, Credentials, dynamic::CredentialsProvider};
use crate::Result;
use crate::errors::CredentialsError;
use http::{Extensions, HeaderMap};
use std::sync::Arc;

/// The token used by [test_credentials].
pub const TEST_TOKEN: &str = "test-only-token";

/// Credentials that send a fixed access token.
pub fn test_credentials() -> Credentials {
    super::access_token::Builder::new(TEST_TOKEN).build()
}

/// Credentials that always fail to create headers.
pub fn error_credentials(is_transient: bool) -> Credentials {
    Credentials {
        inner: Arc::new(ErrorCredentials(is_transient)),
    }
}

#[derive(Debug)]
struct ErrorCredentials(bool);

#[async_trait::async_trait]
impl CredentialsProvider for ErrorCredentials {
    async fn headers(&self, _extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        Err(CredentialsError::from_msg(self.0, "test-only error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::get_headers_from_cache;

    #[tokio::test]
    async fn test_credentials_headers() -> anyhow::Result<()> {
        let headers = get_headers_from_cache(test_credentials().headers(Extensions::new()).await?)?;
        assert_eq!(
            headers.get(http::header::AUTHORIZATION),
            Some(&http::HeaderValue::from_str(&format!("Bearer {TEST_TOKEN}"))?)
        );
        Ok(())
    }

    #[tokio::test]
    async fn error_credentials_headers() {
        let e = error_credentials(true)
            .headers(Extensions::new())
            .await
            .unwrap_err();
        assert!(e.is_transient(), "{e:?}");
        let e = error_credentials(false)
            .headers(Extensions::new())
            .await
            .unwrap_err();
        assert!(!e.is_transient(), "{e:?}");
    }
}
