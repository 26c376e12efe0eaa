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

/// Implements a [FileRequests](super::stub::FileRequests) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct FileRequests<T>
where
    T: super::stub::FileRequests + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> FileRequests<T>
where
    T: super::stub::FileRequests + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::FileRequests for FileRequests<T>
where
    T: super::stub::FileRequests + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn count(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::CountFileRequestsResult>,
        crate::model::CountFileRequestsError,
    > {
        self.inner.count(options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn create(
        &self,
        req: crate::model::CreateFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::CreateFileRequestError,
    > {
        self.inner.create(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn get(
        &self,
        req: crate::model::GetFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::GetFileRequestError,
    > {
        self.inner.get(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn list_v2(
        &self,
        req: crate::model::ListFileRequestsArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFileRequestsV2Result>,
        crate::model::ListFileRequestsError,
    > {
        self.inner.list_v2(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn list_continue(
        &self,
        req: crate::model::ListFileRequestsContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFileRequestsV2Result>,
        crate::model::ListFileRequestsContinueError,
    > {
        self.inner.list_continue(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn update(
        &self,
        req: crate::model::UpdateFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::UpdateFileRequestError,
    > {
        self.inner.update(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn delete(
        &self,
        req: crate::model::DeleteFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteFileRequestsResult>,
        crate::model::DeleteFileRequestError,
    > {
        self.inner.delete(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn delete_all_closed(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteAllClosedFileRequestsResult>,
        crate::model::DeleteAllClosedFileRequestsError,
    > {
        self.inner.delete_all_closed(options).await
    }
}
