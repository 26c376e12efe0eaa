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

/// Implements a [Users](super::stub::Users) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Users<T>
where
    T: super::stub::Users + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Users<T>
where
    T: super::stub::Users + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Users for Users<T>
where
    T: super::stub::Users + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn get_account(
        &self,
        req: crate::model::GetAccountArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::BasicAccount>,
        crate::model::GetAccountError,
    > {
        self.inner.get_account(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn get_account_batch(
        &self,
        req: crate::model::GetAccountBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<std::vec::Vec<crate::model::BasicAccount>>,
        crate::model::GetAccountBatchError,
    > {
        self.inner.get_account_batch(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn get_current_account(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FullAccount>,
        gax::error::NoError,
    > {
        self.inner.get_current_account(options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn get_space_usage(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SpaceUsage>,
        gax::error::NoError,
    > {
        self.inner.get_space_usage(options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn features_get_values(
        &self,
        req: crate::model::UserFeaturesGetValuesBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::UserFeaturesGetValuesBatchResult>,
        crate::model::UserFeaturesGetValuesBatchError,
    > {
        self.inner.features_get_values(req, options).await
    }
}
