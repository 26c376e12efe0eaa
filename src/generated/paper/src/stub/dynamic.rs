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

/// A dyn-compatible, crate-private version of [super::Paper].
#[async_trait::async_trait]
pub trait Paper: std::fmt::Debug + Send + Sync {
    async fn docs_create(
        &self,
        req: crate::model::PaperDocCreateArgs,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::PaperDocCreateUpdateResult>,
        crate::model::PaperDocCreateError,
    >;

    async fn docs_download(
        &self,
        req: crate::model::PaperDocExport,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::PaperDocExportResult>>,
        crate::model::DocLookupError,
    >;

    async fn docs_list(
        &self,
        req: crate::model::ListPaperDocsArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListPaperDocsResponse>,
        gax::error::NoError,
    >;

    async fn docs_list_continue(
        &self,
        req: crate::model::ListPaperDocsContinueArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListPaperDocsResponse>,
        crate::model::ListDocsCursorError,
    >;

    async fn docs_archive(
        &self,
        req: crate::model::RefPaperDoc,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::DocLookupError>;
}

/// All implementations of [super::Paper] also implement [Paper].
#[async_trait::async_trait]
impl<T: super::Paper> Paper for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn docs_create(
        &self,
        req: crate::model::PaperDocCreateArgs,
        payload: bytes::Bytes,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::PaperDocCreateUpdateResult>,
        crate::model::PaperDocCreateError,
    > {
        T::docs_create(self, req, payload, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn docs_download(
        &self,
        req: crate::model::PaperDocExport,
        headers: http::HeaderMap,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<gax::download::Download<crate::model::PaperDocExportResult>>,
        crate::model::DocLookupError,
    > {
        T::docs_download(self, req, headers, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn docs_list(
        &self,
        req: crate::model::ListPaperDocsArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListPaperDocsResponse>,
        gax::error::NoError,
    > {
        T::docs_list(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn docs_list_continue(
        &self,
        req: crate::model::ListPaperDocsContinueArgs,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::ListPaperDocsResponse>,
        crate::model::ListDocsCursorError,
    > {
        T::docs_list_continue(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn docs_archive(
        &self,
        req: crate::model::RefPaperDoc,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<gax::response::Response<()>, crate::model::DocLookupError> {
        T::docs_archive(self, req, options).await
    }
}
