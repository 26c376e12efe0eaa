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
use gaxi::route::{Host, Route};

const GET_METADATA: Route = Route::rpc("files", "get_metadata");
const LIST_FOLDER: Route = Route::rpc("files", "list_folder");
const LIST_FOLDER_CONTINUE: Route = Route::rpc("files", "list_folder/continue");
const LIST_FOLDER_GET_LATEST_CURSOR: Route = Route::rpc("files", "list_folder/get_latest_cursor");
const LIST_FOLDER_LONGPOLL: Route = Route::rpc("files", "list_folder/longpoll")
    .with_host(Host::Notify)
    .with_auth(&[AuthStyle::NoAuth]);
const CREATE_FOLDER_V2: Route = Route::rpc("files", "create_folder_v2");
const DELETE_V2: Route = Route::rpc("files", "delete_v2");
const DELETE_BATCH: Route = Route::rpc("files", "delete_batch");
const DELETE_BATCH_CHECK: Route = Route::rpc("files", "delete_batch/check");
const COPY_V2: Route = Route::rpc("files", "copy_v2");
const MOVE_V2: Route = Route::rpc("files", "move_v2");
const GET_TEMPORARY_LINK: Route = Route::rpc("files", "get_temporary_link");
const SAVE_URL: Route = Route::rpc("files", "save_url");
const SAVE_URL_CHECK_JOB_STATUS: Route = Route::rpc("files", "save_url/check_job_status");
const UPLOAD: Route = Route::upload("files", "upload");
const UPLOAD_SESSION_START: Route = Route::upload("files", "upload_session/start");
const UPLOAD_SESSION_APPEND_V2: Route = Route::upload("files", "upload_session/append_v2");
const UPLOAD_SESSION_FINISH: Route = Route::upload("files", "upload_session/finish");
const DOWNLOAD: Route = Route::download("files", "download");
const GET_THUMBNAIL_V2: Route = Route::download("files", "get_thumbnail_v2");

/// Implements [Files](super::stub::Files) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Files {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Files {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Files")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Files {
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

impl super::stub::Files for Files {
    async fn get_metadata(
        &self,
        req: crate::model::GetMetadataArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::Metadata>,
        crate::model::GetMetadataError,
    > {
        self.inner.rpc(&GET_METADATA, Some(req), options).await
    }

    async fn list_folder(
        &self,
        req: crate::model::ListFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderResult>,
        crate::model::ListFolderError,
    > {
        self.inner.rpc(&LIST_FOLDER, Some(req), options).await
    }

    async fn list_folder_continue(
        &self,
        req: crate::model::ListFolderContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderResult>,
        crate::model::ListFolderContinueError,
    > {
        self.inner.rpc(&LIST_FOLDER_CONTINUE, Some(req), options).await
    }

    async fn list_folder_get_latest_cursor(
        &self,
        req: crate::model::ListFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderGetLatestCursorResult>,
        crate::model::ListFolderError,
    > {
        self.inner.rpc(&LIST_FOLDER_GET_LATEST_CURSOR, Some(req), options).await
    }

    async fn list_folder_longpoll(
        &self,
        req: crate::model::ListFolderLongpollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderLongpollResult>,
        crate::model::ListFolderLongpollError,
    > {
        self.inner.rpc(&LIST_FOLDER_LONGPOLL, Some(req), options).await
    }

    async fn create_folder_v2(
        &self,
        req: crate::model::CreateFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::CreateFolderResult>,
        crate::model::CreateFolderError,
    > {
        self.inner.rpc(&CREATE_FOLDER_V2, Some(req), options).await
    }

    async fn delete_v2(
        &self,
        req: crate::model::DeleteArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteResult>,
        crate::model::DeleteError,
    > {
        self.inner.rpc(&DELETE_V2, Some(req), options).await
    }

    async fn delete_batch(
        &self,
        req: crate::model::DeleteBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteBatchLaunch>,
        gax::error::NoError,
    > {
        self.inner.rpc(&DELETE_BATCH, Some(req), options).await
    }

    async fn delete_batch_check(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteBatchJobStatus>,
        wkt::async_job::PollError,
    > {
        self.inner.rpc(&DELETE_BATCH_CHECK, Some(req), options).await
    }

    async fn copy_v2(
        &self,
        req: crate::model::RelocationArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::RelocationResult>,
        crate::model::RelocationError,
    > {
        self.inner.rpc(&COPY_V2, Some(req), options).await
    }

    async fn move_v2(
        &self,
        req: crate::model::RelocationArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::RelocationResult>,
        crate::model::RelocationError,
    > {
        self.inner.rpc(&MOVE_V2, Some(req), options).await
    }

    async fn get_temporary_link(
        &self,
        req: crate::model::GetTemporaryLinkArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::GetTemporaryLinkResult>,
        crate::model::GetTemporaryLinkError,
    > {
        self.inner.rpc(&GET_TEMPORARY_LINK, Some(req), options).await
    }

    async fn save_url(
        &self,
        req: crate::model::SaveUrlArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SaveUrlResult>,
        crate::model::SaveUrlError,
    > {
        self.inner.rpc(&SAVE_URL, Some(req), options).await
    }

    async fn save_url_check_job_status(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SaveUrlJobStatus>,
        wkt::async_job::PollError,
    > {
        self.inner.rpc(&SAVE_URL_CHECK_JOB_STATUS, Some(req), options).await
    }

    async fn upload(
        &self,
        req: crate::model::UploadArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileMetadata>,
        crate::model::UploadError,
    > {
        self.inner.upload(&UPLOAD, req, payload, options).await
    }

    async fn upload_session_start(
        &self,
        req: crate::model::UploadSessionStartArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::UploadSessionStartResult>,
        crate::model::UploadSessionStartError,
    > {
        self.inner.upload(&UPLOAD_SESSION_START, req, payload, options).await
    }

    async fn upload_session_append_v2(
        &self,
        req: crate::model::UploadSessionAppendArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::UploadSessionLookupError> {
        self.inner.upload(&UPLOAD_SESSION_APPEND_V2, req, payload, options).await
    }

    async fn upload_session_finish(
        &self,
        req: crate::model::UploadSessionFinishArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileMetadata>,
        crate::model::UploadSessionFinishError,
    > {
        self.inner.upload(&UPLOAD_SESSION_FINISH, req, payload, options).await
    }

    async fn download(
        &self,
        req: crate::model::DownloadArg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::FileMetadata>>,
        crate::model::DownloadError,
    > {
        self.inner
            .download(&DOWNLOAD, req, headers, options)
            .await
    }

    async fn get_thumbnail_v2(
        &self,
        req: crate::model::ThumbnailV2Arg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::PreviewResult>>,
        crate::model::ThumbnailV2Error,
    > {
        self.inner
            .download(&GET_THUMBNAIL_V2, req, headers, options)
            .await
    }
}
