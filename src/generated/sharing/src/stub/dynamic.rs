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

/// A dyn-compatible, crate-private version of [super::Sharing].
#[async_trait::async_trait]
pub trait Sharing: std::fmt::Debug + Send + Sync {
    async fn create_shared_link_with_settings(
        &self,
        req: crate::model::CreateSharedLinkWithSettingsArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SharedLinkMetadata>,
        crate::model::CreateSharedLinkWithSettingsError,
    >;

    async fn list_shared_links(
        &self,
        req: crate::model::ListSharedLinksArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListSharedLinksResult>,
        crate::model::ListSharedLinksError,
    >;

    async fn revoke_shared_link(
        &self,
        req: crate::model::RevokeSharedLinkArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::RevokeSharedLinkError>;

    async fn get_shared_link_file(
        &self,
        req: crate::model::GetSharedLinkMetadataArg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::SharedLinkMetadata>>,
        crate::model::GetSharedLinkFileError,
    >;

    async fn share_folder(
        &self,
        req: crate::model::ShareFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ShareFolderLaunch>,
        crate::model::ShareFolderError,
    >;

    async fn check_share_job_status(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ShareFolderJobStatus>,
        wkt::async_job::PollError,
    >;
}

/// All implementations of [super::Sharing] also implement [Sharing].
#[async_trait::async_trait]
impl<T: super::Sharing> Sharing for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn create_shared_link_with_settings(
        &self,
        req: crate::model::CreateSharedLinkWithSettingsArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SharedLinkMetadata>,
        crate::model::CreateSharedLinkWithSettingsError,
    > {
        T::create_shared_link_with_settings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_shared_links(
        &self,
        req: crate::model::ListSharedLinksArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListSharedLinksResult>,
        crate::model::ListSharedLinksError,
    > {
        T::list_shared_links(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn revoke_shared_link(
        &self,
        req: crate::model::RevokeSharedLinkArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::RevokeSharedLinkError> {
        T::revoke_shared_link(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_shared_link_file(
        &self,
        req: crate::model::GetSharedLinkMetadataArg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::SharedLinkMetadata>>,
        crate::model::GetSharedLinkFileError,
    > {
        T::get_shared_link_file(self, req, headers, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn share_folder(
        &self,
        req: crate::model::ShareFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ShareFolderLaunch>,
        crate::model::ShareFolderError,
    > {
        T::share_folder(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn check_share_job_status(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ShareFolderJobStatus>,
        wkt::async_job::PollError,
    > {
        T::check_share_job_status(self, req, options).await
    }
}
