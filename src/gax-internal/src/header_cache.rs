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
//! Caches the authentication headers returned by the credentials.

use auth::credentials::{AuthStyle, AuthStyles, CacheableResource, Credentials, EntityTag};
use gax::error::CredentialsError;
use http::{Extensions, HeaderMap};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The headers last returned for each set of accepted auth styles.
///
/// The credentials return [CacheableResource::NotModified] when the caller
/// already holds the current headers, as identified by their [EntityTag].
/// Routes that accept the same styles share one entry.
#[derive(Clone, Debug, Default)]
pub(crate) struct HeaderCache {
    entries: Arc<Mutex<HashMap<&'static [AuthStyle], Entry>>>,
}

#[derive(Clone, Debug)]
struct Entry {
    entity_tag: EntityTag,
    headers: HeaderMap,
}

impl HeaderCache {
    pub(crate) async fn headers(
        &self,
        cred: &Credentials,
        styles: &'static [AuthStyle],
    ) -> Result<HeaderMap, CredentialsError> {
        let cached = self.entries.lock().await.get(styles).cloned();
        let mut extensions = Extensions::new();
        extensions.insert(AuthStyles(styles));
        if let Some(entry) = &cached {
            extensions.insert(entry.entity_tag.clone());
        }
        match (cred.headers(extensions).await?, cached) {
            (CacheableResource::New { entity_tag, data }, _) => {
                let entry = Entry {
                    entity_tag,
                    headers: data.clone(),
                };
                self.entries.lock().await.insert(styles, entry);
                Ok(data)
            }
            (CacheableResource::NotModified, Some(entry)) => Ok(entry.headers),
            (CacheableResource::NotModified, None) => Err(CredentialsError::from_msg(
                false,
                "the credentials returned no headers for the route",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::credentials::dynamic::CredentialsProvider;
    use auth::credentials::{access_token, app_key};
    use http::HeaderValue;
    use http::header::AUTHORIZATION;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Result = anyhow::Result<()>;

    #[derive(Debug, Default)]
    struct Counting {
        entity_tag: EntityTag,
        new: Arc<AtomicUsize>,
        not_modified: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl CredentialsProvider for Counting {
        async fn headers(
            &self,
            extensions: Extensions,
        ) -> std::result::Result<CacheableResource<HeaderMap>, CredentialsError> {
            if extensions.get::<EntityTag>() == Some(&self.entity_tag) {
                self.not_modified.fetch_add(1, Ordering::SeqCst);
                return Ok(CacheableResource::NotModified);
            }
            self.new.fetch_add(1, Ordering::SeqCst);
            let mut data = HeaderMap::new();
            data.insert(AUTHORIZATION, HeaderValue::from_static("Bearer counted"));
            Ok(CacheableResource::New {
                entity_tag: self.entity_tag.clone(),
                data,
            })
        }
    }

    #[tokio::test]
    async fn reuses_headers_when_not_modified() -> Result {
        let counting = Counting::default();
        let new = counting.new.clone();
        let not_modified = counting.not_modified.clone();
        let cred = Credentials::from(counting);
        let cache = HeaderCache::default();
        for _ in 0..3 {
            let headers = cache.headers(&cred, &[AuthStyle::User]).await?;
            assert_eq!(
                headers.get(AUTHORIZATION),
                Some(&HeaderValue::from_static("Bearer counted"))
            );
        }
        assert_eq!(new.load(Ordering::SeqCst), 1);
        assert_eq!(not_modified.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[tokio::test]
    async fn entries_per_style() -> Result {
        let cred = app_key::Builder::new("key", "secret")
            .with_access_token("test-token")
            .build();
        let cache = HeaderCache::default();
        for _ in 0..2 {
            let app = cache.headers(&cred, &[AuthStyle::App]).await?;
            assert_eq!(
                app.get(AUTHORIZATION),
                Some(&HeaderValue::from_static("Basic a2V5OnNlY3JldA=="))
            );
            let user = cache.headers(&cred, &[AuthStyle::User]).await?;
            assert_eq!(
                user.get(AUTHORIZATION),
                Some(&HeaderValue::from_static("Bearer test-token"))
            );
        }
        assert_eq!(cache.entries.lock().await.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn unsupported_style_is_not_cached() {
        let cred = access_token::Builder::new("test-token").build();
        let cache = HeaderCache::default();
        let err = cache.headers(&cred, &[AuthStyle::App]).await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        assert!(cache.entries.lock().await.is_empty());
    }
}
