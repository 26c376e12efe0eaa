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

const GET_INFO: Route = Route::rpc("team", "get_info").with_auth(&[AuthStyle::Team]);
const MEMBERS_GET_INFO: Route =
    Route::rpc("team", "members/get_info").with_auth(&[AuthStyle::Team]);
const MEMBERS_LIST: Route = Route::rpc("team", "members/list").with_auth(&[AuthStyle::Team]);
const MEMBERS_LIST_CONTINUE: Route =
    Route::rpc("team", "members/list/continue").with_auth(&[AuthStyle::Team]);

/// Implements [Team](super::stub::Team) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Team {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Team")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Team {
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

impl super::stub::Team for Team {
    async fn get_info(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::TeamGetInfoResult>,
        gax::error::NoError,
    > {
        self.inner.rpc(&GET_INFO, None::<()>, options).await
    }

    async fn members_get_info(
        &self,
        req: crate::model::MembersGetInfoArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<std::vec::Vec<crate::model::MembersGetInfoItem>>,
        crate::model::MembersGetInfoError,
    > {
        self.inner.rpc(&MEMBERS_GET_INFO, Some(req), options).await
    }

    async fn members_list(
        &self,
        req: crate::model::MembersListArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::MembersListResult>,
        crate::model::MembersListError,
    > {
        self.inner.rpc(&MEMBERS_LIST, Some(req), options).await
    }

    async fn members_list_continue(
        &self,
        req: crate::model::MembersListContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::MembersListResult>,
        crate::model::MembersListContinueError,
    > {
        self.inner.rpc(&MEMBERS_LIST_CONTINUE, Some(req), options).await
    }
}
