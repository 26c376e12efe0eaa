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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::Files].
///
/// Application developers may need to implement this trait to mock
/// `client::Files`. In other use-cases, application developers only
/// use `client::Files` and need not be concerned with this trait or
/// its implementations.
///
/// The Dropbox API gains new routes routinely. Consequently, this trait gains
/// new methods too. To avoid breaking applications the trait provides a
/// default implementation of each method. These implementations panic.
pub trait Files: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Files::get_metadata].
    fn get_metadata(
        &self,
        _req: crate::model::GetMetadataArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::Metadata>,
            crate::model::GetMetadataError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::list_folder].
    fn list_folder(
        &self,
        _req: crate::model::ListFolderArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::ListFolderResult>,
            crate::model::ListFolderError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::list_folder_continue].
    fn list_folder_continue(
        &self,
        _req: crate::model::ListFolderContinueArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::ListFolderResult>,
            crate::model::ListFolderContinueError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::list_folder_get_latest_cursor].
    fn list_folder_get_latest_cursor(
        &self,
        _req: crate::model::ListFolderArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::ListFolderGetLatestCursorResult>,
            crate::model::ListFolderError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::list_folder_longpoll].
    fn list_folder_longpoll(
        &self,
        _req: crate::model::ListFolderLongpollArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::ListFolderLongpollResult>,
            crate::model::ListFolderLongpollError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::create_folder_v2].
    fn create_folder_v2(
        &self,
        _req: crate::model::CreateFolderArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::CreateFolderResult>,
            crate::model::CreateFolderError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::delete_v2].
    fn delete_v2(
        &self,
        _req: crate::model::DeleteArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::DeleteResult>,
            crate::model::DeleteError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::delete_batch].
    fn delete_batch(
        &self,
        _req: crate::model::DeleteBatchArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::DeleteBatchLaunch>,
            gax::error::NoError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::delete_batch_check].
    fn delete_batch_check(
        &self,
        _req: wkt::async_job::PollArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::DeleteBatchJobStatus>,
            wkt::async_job::PollError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::copy_v2].
    fn copy_v2(
        &self,
        _req: crate::model::RelocationArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::RelocationResult>,
            crate::model::RelocationError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::move_v2].
    fn move_v2(
        &self,
        _req: crate::model::RelocationArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::RelocationResult>,
            crate::model::RelocationError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::get_temporary_link].
    fn get_temporary_link(
        &self,
        _req: crate::model::GetTemporaryLinkArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::GetTemporaryLinkResult>,
            crate::model::GetTemporaryLinkError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::save_url].
    fn save_url(
        &self,
        _req: crate::model::SaveUrlArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::SaveUrlResult>,
            crate::model::SaveUrlError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::save_url_check_job_status].
    fn save_url_check_job_status(
        &self,
        _req: wkt::async_job::PollArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::SaveUrlJobStatus>,
            wkt::async_job::PollError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::upload].
    fn upload(
        &self,
        _req: crate::model::UploadArg,
        _payload: bytes::Bytes,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::FileMetadata>,
            crate::model::UploadError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::upload_session_start].
    fn upload_session_start(
        &self,
        _req: crate::model::UploadSessionStartArg,
        _payload: bytes::Bytes,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::UploadSessionStartResult>,
            crate::model::UploadSessionStartError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::upload_session_append_v2].
    fn upload_session_append_v2(
        &self,
        _req: crate::model::UploadSessionAppendArg,
        _payload: bytes::Bytes,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<()>,
            crate::model::UploadSessionLookupError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::upload_session_finish].
    fn upload_session_finish(
        &self,
        _req: crate::model::UploadSessionFinishArg,
        _payload: bytes::Bytes,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::FileMetadata>,
            crate::model::UploadSessionFinishError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::download].
    fn download(
        &self,
        _req: crate::model::DownloadArg,
        _headers: http::HeaderMap,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<gax::download::Download<crate::model::FileMetadata>>,
            crate::model::DownloadError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Files::get_thumbnail_v2].
    fn get_thumbnail_v2(
        &self,
        _req: crate::model::ThumbnailV2Arg,
        _headers: http::HeaderMap,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<gax::download::Download<crate::model::PreviewResult>>,
            crate::model::ThumbnailV2Error,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
