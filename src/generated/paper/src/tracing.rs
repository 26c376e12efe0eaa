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

/// Implements a [Paper](super::stub::Paper) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Paper<T>
where
    T: super::stub::Paper + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Paper<T>
where
    T: super::stub::Paper + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Paper for Paper<T>
where
    T: super::stub::Paper + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = tracing::Level::DEBUG, skip(payload), ret)]
    async fn docs_create(
        &self,
        req: crate::model::PaperDocCreateArgs,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::PaperDocCreateUpdateResult>,
        crate::model::PaperDocCreateError,
    > {
        self.inner.docs_create(req, payload, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn docs_download(
        &self,
        req: crate::model::PaperDocExport,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::PaperDocExportResult>>,
        crate::model::DocLookupError,
    > {
        self.inner.docs_download(req, headers, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn docs_list(
        &self,
        req: crate::model::ListPaperDocsArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListPaperDocsResponse>,
        gax::error::NoError,
    > {
        self.inner.docs_list(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn docs_list_continue(
        &self,
        req: crate::model::ListPaperDocsContinueArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListPaperDocsResponse>,
        crate::model::ListDocsCursorError,
    > {
        self.inner.docs_list_continue(req, options).await
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, ret)]
    async fn docs_archive(
        &self,
        req: crate::model::RefPaperDoc,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::DocLookupError> {
        self.inner.docs_archive(req, options).await
    }
}
