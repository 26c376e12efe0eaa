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

/// Implements a [Check](super::stub::Check) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Check<T>
where
    T: super::stub::Check + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Check<T>
where
    T: super::stub::Check + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Check for Check<T>
where
    T: super::stub::Check + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn app(
        &self,
        req: crate::model::EchoArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::EchoResult>,
        gax::error::NoError,
    > {
        self.inner.app(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn user(
        &self,
        req: crate::model::EchoArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::EchoResult>,
        gax::error::NoError,
    > {
        self.inner.user(req, options).await
    }
}
