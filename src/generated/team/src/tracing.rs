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

/// Implements a [Team](super::stub::Team) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Team<T>
where
    T: super::stub::Team + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Team<T>
where
    T: super::stub::Team + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Team for Team<T>
where
    T: super::stub::Team + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn get_info(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::TeamGetInfoResult>,
        gax::error::NoError,
    > {
        self.inner.get_info(options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn members_get_info(
        &self,
        req: crate::model::MembersGetInfoArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<std::vec::Vec<crate::model::MembersGetInfoItem>>,
        crate::model::MembersGetInfoError,
    > {
        self.inner.members_get_info(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn members_list(
        &self,
        req: crate::model::MembersListArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::MembersListResult>,
        crate::model::MembersListError,
    > {
        self.inner.members_list(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn members_list_continue(
        &self,
        req: crate::model::MembersListContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::MembersListResult>,
        crate::model::MembersListContinueError,
    > {
        self.inner.members_list_continue(req, options).await
    }
}
