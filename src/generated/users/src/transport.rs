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

use gaxi::route::Route;

const GET_ACCOUNT: Route = Route::rpc("users", "get_account");
const GET_ACCOUNT_BATCH: Route = Route::rpc("users", "get_account_batch");
const GET_CURRENT_ACCOUNT: Route = Route::rpc("users", "get_current_account");
const GET_SPACE_USAGE: Route = Route::rpc("users", "get_space_usage");
const FEATURES_GET_VALUES: Route = Route::rpc("users", "features/get_values");

/// Implements [Users](super::stub::Users) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Users {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Users {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Users")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Users {
    pub async fn new(
        mut config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        config
            .user_agent
            .get_or_insert_with(|| crate::info::USER_AGENT.to_string());
        let inner = gaxi::http::ReqwestClient::new(config).await?;
        Ok(Self { inner })
    }
}

impl super::stub::Users for Users {
    async fn get_account(
        &self,
        req: crate::model::GetAccountArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::BasicAccount>,
        crate::model::GetAccountError,
    > {
        self.inner.rpc(&GET_ACCOUNT, Some(req), options).await
    }

    async fn get_account_batch(
        &self,
        req: crate::model::GetAccountBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<std::vec::Vec<crate::model::BasicAccount>>,
        crate::model::GetAccountBatchError,
    > {
        self.inner.rpc(&GET_ACCOUNT_BATCH, Some(req), options).await
    }

    async fn get_current_account(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FullAccount>,
        gax::error::NoError,
    > {
        self.inner.rpc(&GET_CURRENT_ACCOUNT, None::<()>, options).await
    }

    async fn get_space_usage(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SpaceUsage>,
        gax::error::NoError,
    > {
        self.inner.rpc(&GET_SPACE_USAGE, None::<()>, options).await
    }

    async fn features_get_values(
        &self,
        req: crate::model::UserFeaturesGetValuesBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::UserFeaturesGetValuesBatchResult>,
        crate::model::UserFeaturesGetValuesBatchError,
    > {
        self.inner.rpc(&FEATURES_GET_VALUES, Some(req), options).await
    }
}
