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

/// A dyn-compatible, crate-private version of [super::FileRequests].
#[async_trait::async_trait]
pub trait FileRequests: std::fmt::Debug + Send + Sync {
    async fn count(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::CountFileRequestsResult>,
        crate::model::CountFileRequestsError,
    >;

    async fn create(
        &self,
        req: crate::model::CreateFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::CreateFileRequestError,
    >;

    async fn get(
        &self,
        req: crate::model::GetFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::GetFileRequestError,
    >;

    async fn list_v2(
        &self,
        req: crate::model::ListFileRequestsArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFileRequestsV2Result>,
        crate::model::ListFileRequestsError,
    >;

    async fn list_continue(
        &self,
        req: crate::model::ListFileRequestsContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFileRequestsV2Result>,
        crate::model::ListFileRequestsContinueError,
    >;

    async fn update(
        &self,
        req: crate::model::UpdateFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::UpdateFileRequestError,
    >;

    async fn delete(
        &self,
        req: crate::model::DeleteFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteFileRequestsResult>,
        crate::model::DeleteFileRequestError,
    >;

    async fn delete_all_closed(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteAllClosedFileRequestsResult>,
        crate::model::DeleteAllClosedFileRequestsError,
    >;
}

/// All implementations of [super::FileRequests] also implement [FileRequests].
#[async_trait::async_trait]
impl<T: super::FileRequests> FileRequests for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn count(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::CountFileRequestsResult>,
        crate::model::CountFileRequestsError,
    > {
        T::count(self, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create(
        &self,
        req: crate::model::CreateFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::CreateFileRequestError,
    > {
        T::create(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get(
        &self,
        req: crate::model::GetFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::GetFileRequestError,
    > {
        T::get(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_v2(
        &self,
        req: crate::model::ListFileRequestsArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFileRequestsV2Result>,
        crate::model::ListFileRequestsError,
    > {
        T::list_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_continue(
        &self,
        req: crate::model::ListFileRequestsContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFileRequestsV2Result>,
        crate::model::ListFileRequestsContinueError,
    > {
        T::list_continue(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update(
        &self,
        req: crate::model::UpdateFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::UpdateFileRequestError,
    > {
        T::update(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete(
        &self,
        req: crate::model::DeleteFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteFileRequestsResult>,
        crate::model::DeleteFileRequestError,
    > {
        T::delete(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_all_closed(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteAllClosedFileRequestsResult>,
        crate::model::DeleteAllClosedFileRequestsError,
    > {
        T::delete_all_closed(self, options).await
    }
}
