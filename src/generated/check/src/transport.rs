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

use auth::credentials::AuthStyle;
use gaxi::route::Route;

const APP: Route = Route::rpc("check", "app").with_auth(&[AuthStyle::App]);
const USER: Route = Route::rpc("check", "user");

/// Implements [Check](super::stub::Check) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Check {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Check")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Check {
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

impl super::stub::Check for Check {
    async fn app(
        &self,
        req: crate::model::EchoArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::EchoResult>,
        gax::error::NoError,
    > {
        self.inner.rpc(&APP, Some(req), options).await
    }

    async fn user(
        &self,
        req: crate::model::EchoArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::EchoResult>,
        gax::error::NoError,
    > {
        self.inner.rpc(&USER, Some(req), options).await
    }
}
