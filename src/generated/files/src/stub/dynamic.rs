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

/// A dyn-compatible, crate-private version of [super::Files].
#[async_trait::async_trait]
pub trait Files: std::fmt::Debug + Send + Sync {
    async fn get_metadata(
        &self,
        req: crate::model::GetMetadataArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::Metadata>,
        crate::model::GetMetadataError,
    >;

    async fn list_folder(
        &self,
        req: crate::model::ListFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderResult>,
        crate::model::ListFolderError,
    >;

    async fn list_folder_continue(
        &self,
        req: crate::model::ListFolderContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderResult>,
        crate::model::ListFolderContinueError,
    >;

    async fn list_folder_get_latest_cursor(
        &self,
        req: crate::model::ListFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderGetLatestCursorResult>,
        crate::model::ListFolderError,
    >;

    async fn list_folder_longpoll(
        &self,
        req: crate::model::ListFolderLongpollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderLongpollResult>,
        crate::model::ListFolderLongpollError,
    >;

    async fn create_folder_v2(
        &self,
        req: crate::model::CreateFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::CreateFolderResult>,
        crate::model::CreateFolderError,
    >;

    async fn delete_v2(
        &self,
        req: crate::model::DeleteArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteResult>,
        crate::model::DeleteError,
    >;

    async fn delete_batch(
        &self,
        req: crate::model::DeleteBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteBatchLaunch>,
        gax::error::NoError,
    >;

    async fn delete_batch_check(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteBatchJobStatus>,
        wkt::async_job::PollError,
    >;

    async fn copy_v2(
        &self,
        req: crate::model::RelocationArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::RelocationResult>,
        crate::model::RelocationError,
    >;

    async fn move_v2(
        &self,
        req: crate::model::RelocationArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::RelocationResult>,
        crate::model::RelocationError,
    >;

    async fn get_temporary_link(
        &self,
        req: crate::model::GetTemporaryLinkArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::GetTemporaryLinkResult>,
        crate::model::GetTemporaryLinkError,
    >;

    async fn save_url(
        &self,
        req: crate::model::SaveUrlArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SaveUrlResult>,
        crate::model::SaveUrlError,
    >;

    async fn save_url_check_job_status(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SaveUrlJobStatus>,
        wkt::async_job::PollError,
    >;

    async fn upload(
        &self,
        req: crate::model::UploadArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileMetadata>,
        crate::model::UploadError,
    >;

    async fn upload_session_start(
        &self,
        req: crate::model::UploadSessionStartArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::UploadSessionStartResult>,
        crate::model::UploadSessionStartError,
    >;

    async fn upload_session_append_v2(
        &self,
        req: crate::model::UploadSessionAppendArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::UploadSessionLookupError>;

    async fn upload_session_finish(
        &self,
        req: crate::model::UploadSessionFinishArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileMetadata>,
        crate::model::UploadSessionFinishError,
    >;

    async fn download(
        &self,
        req: crate::model::DownloadArg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::FileMetadata>>,
        crate::model::DownloadError,
    >;

    async fn get_thumbnail_v2(
        &self,
        req: crate::model::ThumbnailV2Arg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::PreviewResult>>,
        crate::model::ThumbnailV2Error,
    >;
}

/// All implementations of [super::Files] also implement [Files].
#[async_trait::async_trait]
impl<T: super::Files> Files for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_metadata(
        &self,
        req: crate::model::GetMetadataArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::Metadata>,
        crate::model::GetMetadataError,
    > {
        T::get_metadata(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_folder(
        &self,
        req: crate::model::ListFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderResult>,
        crate::model::ListFolderError,
    > {
        T::list_folder(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_folder_continue(
        &self,
        req: crate::model::ListFolderContinueArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderResult>,
        crate::model::ListFolderContinueError,
    > {
        T::list_folder_continue(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_folder_get_latest_cursor(
        &self,
        req: crate::model::ListFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderGetLatestCursorResult>,
        crate::model::ListFolderError,
    > {
        T::list_folder_get_latest_cursor(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_folder_longpoll(
        &self,
        req: crate::model::ListFolderLongpollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListFolderLongpollResult>,
        crate::model::ListFolderLongpollError,
    > {
        T::list_folder_longpoll(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_folder_v2(
        &self,
        req: crate::model::CreateFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::CreateFolderResult>,
        crate::model::CreateFolderError,
    > {
        T::create_folder_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_v2(
        &self,
        req: crate::model::DeleteArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteResult>,
        crate::model::DeleteError,
    > {
        T::delete_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_batch(
        &self,
        req: crate::model::DeleteBatchArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteBatchLaunch>,
        gax::error::NoError,
    > {
        T::delete_batch(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_batch_check(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::DeleteBatchJobStatus>,
        wkt::async_job::PollError,
    > {
        T::delete_batch_check(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn copy_v2(
        &self,
        req: crate::model::RelocationArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::RelocationResult>,
        crate::model::RelocationError,
    > {
        T::copy_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn move_v2(
        &self,
        req: crate::model::RelocationArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::RelocationResult>,
        crate::model::RelocationError,
    > {
        T::move_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_temporary_link(
        &self,
        req: crate::model::GetTemporaryLinkArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::GetTemporaryLinkResult>,
        crate::model::GetTemporaryLinkError,
    > {
        T::get_temporary_link(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn save_url(
        &self,
        req: crate::model::SaveUrlArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SaveUrlResult>,
        crate::model::SaveUrlError,
    > {
        T::save_url(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn save_url_check_job_status(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SaveUrlJobStatus>,
        wkt::async_job::PollError,
    > {
        T::save_url_check_job_status(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upload(
        &self,
        req: crate::model::UploadArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileMetadata>,
        crate::model::UploadError,
    > {
        T::upload(self, req, payload, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upload_session_start(
        &self,
        req: crate::model::UploadSessionStartArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::UploadSessionStartResult>,
        crate::model::UploadSessionStartError,
    > {
        T::upload_session_start(self, req, payload, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upload_session_append_v2(
        &self,
        req: crate::model::UploadSessionAppendArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::UploadSessionLookupError> {
        T::upload_session_append_v2(self, req, payload, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upload_session_finish(
        &self,
        req: crate::model::UploadSessionFinishArg,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::FileMetadata>,
        crate::model::UploadSessionFinishError,
    > {
        T::upload_session_finish(self, req, payload, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn download(
        &self,
        req: crate::model::DownloadArg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::FileMetadata>>,
        crate::model::DownloadError,
    > {
        T::download(self, req, headers, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_thumbnail_v2(
        &self,
        req: crate::model::ThumbnailV2Arg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::PreviewResult>>,
        crate::model::ThumbnailV2Error,
    > {
        T::get_thumbnail_v2(self, req, headers, options).await
    }
}
