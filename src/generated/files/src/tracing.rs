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

/// Implements a [Files](super::stub::Files) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Files<T>
where
    T: super::stub::Files + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Files<T>
where
    T: super::stub::Files + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Files for Files<T>
where
    T: super::stub::Files + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn get_metadata(
        &self,
        req: crate::model::GetMetadataArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::Metadata>,
        crate::model::GetMetadataError,
    > {
        self.inner.get_metadata(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn list_folder(
        &self,
        req: crate::model::ListFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderResult>,
        crate::model::ListFolderError,
    > {
        self.inner.list_folder(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn list_folder_continue(
        &self,
        req: crate::model::ListFolderContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderResult>,
        crate::model::ListFolderContinueError,
    > {
        self.inner.list_folder_continue(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn list_folder_get_latest_cursor(
        &self,
        req: crate::model::ListFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderGetLatestCursorResult>,
        crate::model::ListFolderError,
    > {
        self.inner.list_folder_get_latest_cursor(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn list_folder_longpoll(
        &self,
        req: crate::model::ListFolderLongpollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderLongpollResult>,
        crate::model::ListFolderLongpollError,
    > {
        self.inner.list_folder_longpoll(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn create_folder_v2(
        &self,
        req: crate::model::CreateFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::CreateFolderResult>,
        crate::model::CreateFolderError,
    > {
        self.inner.create_folder_v2(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn delete_v2(
        &self,
        req: crate::model::DeleteArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteResult>,
        crate::model::DeleteError,
    > {
        self.inner.delete_v2(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn delete_batch(
        &self,
        req: crate::model::DeleteBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteBatchLaunch>,
        gax::error::NoError,
    > {
        self.inner.delete_batch(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn delete_batch_check(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteBatchJobStatus>,
        wkt::async_job::PollError,
    > {
        self.inner.delete_batch_check(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn copy_v2(
        &self,
        req: crate::model::RelocationArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::RelocationResult>,
        crate::model::RelocationError,
    > {
        self.inner.copy_v2(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn move_v2(
        &self,
        req: crate::model::RelocationArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::RelocationResult>,
        crate::model::RelocationError,
    > {
        self.inner.move_v2(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn get_temporary_link(
        &self,
        req: crate::model::GetTemporaryLinkArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::GetTemporaryLinkResult>,
        crate::model::GetTemporaryLinkError,
    > {
        self.inner.get_temporary_link(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn save_url(
        &self,
        req: crate::model::SaveUrlArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SaveUrlResult>,
        crate::model::SaveUrlError,
    > {
        self.inner.save_url(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn save_url_check_job_status(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SaveUrlJobStatus>,
        wkt::async_job::PollError,
    > {
        self.inner.save_url_check_job_status(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, skip(payload), ret)]
    async fn upload(
        &self,
        req: crate::model::UploadArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileMetadata>,
        crate::model::UploadError,
    > {
        self.inner.upload(req, payload, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, skip(payload), ret)]
    async fn upload_session_start(
        &self,
        req: crate::model::UploadSessionStartArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::UploadSessionStartResult>,
        crate::model::UploadSessionStartError,
    > {
        self.inner.upload_session_start(req, payload, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, skip(payload), ret)]
    async fn upload_session_append_v2(
        &self,
        req: crate::model::UploadSessionAppendArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::UploadSessionLookupError> {
        self.inner.upload_session_append_v2(req, payload, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, skip(payload), ret)]
    async fn upload_session_finish(
        &self,
        req: crate::model::UploadSessionFinishArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileMetadata>,
        crate::model::UploadSessionFinishError,
    > {
        self.inner.upload_session_finish(req, payload, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn download(
        &self,
        req: crate::model::DownloadArg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::FileMetadata>>,
        crate::model::DownloadError,
    > {
        self.inner.download(req, headers, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn get_thumbnail_v2(
        &self,
        req: crate::model::ThumbnailV2Arg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::PreviewResult>>,
        crate::model::ThumbnailV2Error,
    > {
        self.inner.get_thumbnail_v2(req, headers, options).await
    }
}
