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

/// Implements a [Sharing](super::stub::Sharing) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Sharing<T>
where
    T: super::stub::Sharing + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Sharing<T>
where
    T: super::stub::Sharing + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Sharing for Sharing<T>
where
    T: super::stub::Sharing + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn create_shared_link_with_settings(
        &self,
        req: crate::model::CreateSharedLinkWithSettingsArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SharedLinkMetadata>,
        crate::model::CreateSharedLinkWithSettingsError,
    > {
        self.inner.create_shared_link_with_settings(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn list_shared_links(
        &self,
        req: crate::model::ListSharedLinksArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListSharedLinksResult>,
        crate::model::ListSharedLinksError,
    > {
        self.inner.list_shared_links(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn revoke_shared_link(
        &self,
        req: crate::model::RevokeSharedLinkArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::RevokeSharedLinkError> {
        self.inner.revoke_shared_link(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn get_shared_link_file(
        &self,
        req: crate::model::GetSharedLinkMetadataArg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::SharedLinkMetadata>>,
        crate::model::GetSharedLinkFileError,
    > {
        self.inner.get_shared_link_file(req, headers, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn share_folder(
        &self,
        req: crate::model::ShareFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ShareFolderLaunch>,
        crate::model::ShareFolderError,
    > {
        self.inner.share_folder(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn check_share_job_status(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ShareFolderJobStatus>,
        wkt::async_job::PollError,
    > {
        self.inner.check_share_job_status(req, options).await
    }
}
