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

/// A dyn-compatible, crate-private version of [super::Team].
#[async_trait::async_trait]
pub trait Team: std::fmt::Debug + Send + Sync {
    async fn get_info(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::TeamGetInfoResult>,
        gax::error::NoError,
    >;

    async fn members_get_info(
        &self,
        req: crate::model::MembersGetInfoArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<std::vec::Vec<crate::model::MembersGetInfoItem>>,
        crate::model::MembersGetInfoError,
    >;

    async fn members_list(
        &self,
        req: crate::model::MembersListArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::MembersListResult>,
        crate::model::MembersListError,
    >;

    async fn members_list_continue(
        &self,
        req: crate::model::MembersListContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::MembersListResult>,
        crate::model::MembersListContinueError,
    >;
}

/// All implementations of [super::Team] also implement [Team].
#[async_trait::async_trait]
impl<T: super::Team> Team for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_info(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::TeamGetInfoResult>,
        gax::error::NoError,
    > {
        T::get_info(self, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn members_get_info(
        &self,
        req: crate::model::MembersGetInfoArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<std::vec::Vec<crate::model::MembersGetInfoItem>>,
        crate::model::MembersGetInfoError,
    > {
        T::members_get_info(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn members_list(
        &self,
        req: crate::model::MembersListArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::MembersListResult>,
        crate::model::MembersListError,
    > {
        T::members_list(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn members_list_continue(
        &self,
        req: crate::model::MembersListContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::MembersListResult>,
        crate::model::MembersListContinueError,
    > {
        T::members_list_continue(self, req, options).await
    }
}
