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

use crate::Result;
use crate::errors;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};

/// Creates the headers for OAuth2 access tokens.
pub(crate) fn build_bearer_headers(token: &str) -> Result<HeaderMap> {
    build_headers(format!("Bearer {token}"))
}

/// Creates the headers for app authentication.
pub(crate) fn build_basic_headers(app_key: &str, app_secret: &str) -> Result<HeaderMap> {
    let encoded = BASE64_STANDARD.encode(format!("{app_key}:{app_secret}"));
    build_headers(format!("Basic {encoded}"))
}

fn build_headers(authorization: String) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&authorization).map_err(errors::non_retryable)?;
    value.set_sensitive(true);

    let mut header_map = HeaderMap::new();
    header_map.insert(AUTHORIZATION, value);
    Ok(header_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn bearer() -> anyhow::Result<()> {
        let headers = build_bearer_headers("test-token")?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn basic() -> anyhow::Result<()> {
        let headers = build_basic_headers("key", "secret")?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION).unwrap();
        // base64("key:secret")
        assert_eq!(value, HeaderValue::from_static("Basic a2V5OnNlY3JldA=="));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn invalid_token() {
        let e = build_bearer_headers("bad\ntoken").unwrap_err();
        assert!(!e.is_transient(), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");
    }
}
