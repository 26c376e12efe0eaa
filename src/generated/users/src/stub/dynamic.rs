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

/// A dyn-compatible, crate-private version of [super::Users].
#[async_trait::async_trait]
pub trait Users: std::fmt::Debug + Send + Sync {
    async fn get_account(
        &self,
        req: crate::model::GetAccountArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::BasicAccount>,
        crate::model::GetAccountError,
    >;

    async fn get_account_batch(
        &self,
        req: crate::model::GetAccountBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<std::vec::Vec<crate::model::BasicAccount>>,
        crate::model::GetAccountBatchError,
    >;

    async fn get_current_account(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FullAccount>,
        gax::error::NoError,
    >;

    async fn get_space_usage(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SpaceUsage>,
        gax::error::NoError,
    >;

    async fn features_get_values(
        &self,
        req: crate::model::UserFeaturesGetValuesBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::UserFeaturesGetValuesBatchResult>,
        crate::model::UserFeaturesGetValuesBatchError,
    >;
}

/// All implementations of [super::Users] also implement [Users].
#[async_trait::async_trait]
impl<T: super::Users> Users for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_account(
        &self,
        req: crate::model::GetAccountArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::BasicAccount>,
        crate::model::GetAccountError,
    > {
        T::get_account(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_account_batch(
        &self,
        req: crate::model::GetAccountBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<std::vec::Vec<crate::model::BasicAccount>>,
        crate::model::GetAccountBatchError,
    > {
        T::get_account_batch(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_current_account(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FullAccount>,
        gax::error::NoError,
    > {
        T::get_current_account(self, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_space_usage(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SpaceUsage>,
        gax::error::NoError,
    > {
        T::get_space_usage(self, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn features_get_values(
        &self,
        req: crate::model::UserFeaturesGetValuesBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::UserFeaturesGetValuesBatchResult>,
        crate::model::UserFeaturesGetValuesBatchError,
    > {
        T::features_get_values(self, req, options).await
    }
}
