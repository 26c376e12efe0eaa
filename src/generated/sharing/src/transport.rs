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

const CREATE_SHARED_LINK_WITH_SETTINGS: Route =
    Route::rpc("sharing", "create_shared_link_with_settings");
const LIST_SHARED_LINKS: Route = Route::rpc("sharing", "list_shared_links");
const REVOKE_SHARED_LINK: Route = Route::rpc("sharing", "revoke_shared_link");
const GET_SHARED_LINK_FILE: Route = Route::download("sharing", "get_shared_link_file");
const SHARE_FOLDER: Route = Route::rpc("sharing", "share_folder");
const CHECK_SHARE_JOB_STATUS: Route = Route::rpc("sharing", "check_share_job_status");

/// Implements [Sharing](super::stub::Sharing) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Sharing {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Sharing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Sharing")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Sharing {
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

impl super::stub::Sharing for Sharing {
    async fn create_shared_link_with_settings(
        &self,
        req: crate::model::CreateSharedLinkWithSettingsArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::SharedLinkMetadata>,
        crate::model::CreateSharedLinkWithSettingsError,
    > {
        self.inner.rpc(&CREATE_SHARED_LINK_WITH_SETTINGS, Some(req), options).await
    }

    async fn list_shared_links(
        &self,
        req: crate::model::ListSharedLinksArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListSharedLinksResult>,
        crate::model::ListSharedLinksError,
    > {
        self.inner.rpc(&LIST_SHARED_LINKS, Some(req), options).await
    }

    async fn revoke_shared_link(
        &self,
        req: crate::model::RevokeSharedLinkArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::RevokeSharedLinkError> {
        self.inner.rpc(&REVOKE_SHARED_LINK, Some(req), options).await
    }

    async fn get_shared_link_file(
        &self,
        req: crate::model::GetSharedLinkMetadataArg,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::SharedLinkMetadata>>,
        crate::model::GetSharedLinkFileError,
    > {
        self.inner
            .download(&GET_SHARED_LINK_FILE, req, headers, options)
            .await
    }

    async fn share_folder(
        &self,
        req: crate::model::ShareFolderArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ShareFolderLaunch>,
        crate::model::ShareFolderError,
    > {
        self.inner.rpc(&SHARE_FOLDER, Some(req), options).await
    }

    async fn check_share_job_status(
        &self,
        req: wkt::async_job::PollArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ShareFolderJobStatus>,
        wkt::async_job::PollError,
    > {
        self.inner.rpc(&CHECK_SHARE_JOB_STATUS, Some(req), options).await
    }
}
