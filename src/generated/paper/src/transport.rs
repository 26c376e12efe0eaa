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

const DOCS_CREATE: Route =
    Route::upload("paper", "docs/create").with_deprecated_by("files/paper/create");
const DOCS_DOWNLOAD: Route =
    Route::download("paper", "docs/download").with_deprecated_by("files/export");
const DOCS_LIST: Route = Route::rpc("paper", "docs/list").with_deprecated_by("files/list_folder");
const DOCS_LIST_CONTINUE: Route =
    Route::rpc("paper", "docs/list/continue").with_deprecated_by("files/list_folder/continue");
const DOCS_ARCHIVE: Route =
    Route::rpc("paper", "docs/archive").with_deprecated_by("files/delete_v2");

/// Implements [Paper](super::stub::Paper) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Paper {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Paper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Paper")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Paper {
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

impl super::stub::Paper for Paper {
    async fn docs_create(
        &self,
        req: crate::model::PaperDocCreateArgs,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::PaperDocCreateUpdateResult>,
        crate::model::PaperDocCreateError,
    > {
        self.inner.upload(&DOCS_CREATE, req, payload, options).await
    }

    async fn docs_download(
        &self,
        req: crate::model::PaperDocExport,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::PaperDocExportResult>>,
        crate::model::DocLookupError,
    > {
        self.inner
            .download(&DOCS_DOWNLOAD, req, headers, options)
            .await
    }

    async fn docs_list(
        &self,
        req: crate::model::ListPaperDocsArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListPaperDocsResponse>,
        gax::error::NoError,
    > {
        self.inner.rpc(&DOCS_LIST, Some(req), options).await
    }

    async fn docs_list_continue(
        &self,
        req: crate::model::ListPaperDocsContinueArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListPaperDocsResponse>,
        crate::model::ListDocsCursorError,
    > {
        self.inner.rpc(&DOCS_LIST_CONTINUE, Some(req), options).await
    }

    async fn docs_archive(
        &self,
        req: crate::model::RefPaperDoc,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::DocLookupError> {
        self.inner.rpc(&DOCS_ARCHIVE, Some(req), options).await
    }
}
