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

const COUNT: Route = Route::rpc("file_requests", "count");
const CREATE: Route = Route::rpc("file_requests", "create");
const GET: Route = Route::rpc("file_requests", "get");
const LIST_V2: Route = Route::rpc("file_requests", "list_v2");
const LIST_CONTINUE: Route = Route::rpc("file_requests", "list/continue");
const UPDATE: Route = Route::rpc("file_requests", "update");
const DELETE: Route = Route::rpc("file_requests", "delete");
const DELETE_ALL_CLOSED: Route = Route::rpc("file_requests", "delete_all_closed");

/// Implements [FileRequests](super::stub::FileRequests) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct FileRequests {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for FileRequests {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("FileRequests")
            .field("inner", &self.inner)
            .finish()
    }
}

impl FileRequests {
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

impl super::stub::FileRequests for FileRequests {
    async fn count(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::CountFileRequestsResult>,
        crate::model::CountFileRequestsError,
    > {
        self.inner.rpc(&COUNT, None::<()>, options).await
    }

    async fn create(
        &self,
        req: crate::model::CreateFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::CreateFileRequestError,
    > {
        self.inner.rpc(&CREATE, Some(req), options).await
    }

    async fn get(
        &self,
        req: crate::model::GetFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::GetFileRequestError,
    > {
        self.inner.rpc(&GET, Some(req), options).await
    }

    async fn list_v2(
        &self,
        req: crate::model::ListFileRequestsArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFileRequestsV2Result>,
        crate::model::ListFileRequestsError,
    > {
        self.inner.rpc(&LIST_V2, Some(req), options).await
    }

    async fn list_continue(
        &self,
        req: crate::model::ListFileRequestsContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFileRequestsV2Result>,
        crate::model::ListFileRequestsContinueError,
    > {
        self.inner.rpc(&LIST_CONTINUE, Some(req), options).await
    }

    async fn update(
        &self,
        req: crate::model::UpdateFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileRequest>,
        crate::model::UpdateFileRequestError,
    > {
        self.inner.rpc(&UPDATE, Some(req), options).await
    }

    async fn delete(
        &self,
        req: crate::model::DeleteFileRequestArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteFileRequestsResult>,
        crate::model::DeleteFileRequestError,
    > {
        self.inner.rpc(&DELETE, Some(req), options).await
    }

    async fn delete_all_closed(
        &self,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteAllClosedFileRequestsResult>,
        crate::model::DeleteAllClosedFileRequestsError,
    > {
        self.inner.rpc(&DELETE_ALL_CLOSED, None::<()>, options).await
    }
}
