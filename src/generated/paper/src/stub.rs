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

/// Defines the trait used to implement [super::client::Paper].
///
/// Application developers may need to implement this trait to mock
/// `client::Paper`. In other use-cases, application developers only
/// use `client::Paper` and need not be concerned with this trait or
/// its implementations.
///
/// The Dropbox API gains new routes routinely. Consequently, this trait gains
/// new methods too. To avoid breaking applications the trait provides a
/// default implementation of each method. These implementations panic.
pub trait Paper: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Paper::docs_create].
    fn docs_create(
        &self,
        _req: crate::model::PaperDocCreateArgs,
        _payload: bytes::Bytes,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::PaperDocCreateUpdateResult>,
            crate::model::PaperDocCreateError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Paper::docs_download].
    fn docs_download(
        &self,
        _req: crate::model::PaperDocExport,
        _headers: http::HeaderMap,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<gax::download::Download<crate::model::PaperDocExportResult>>,
            crate::model::DocLookupError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Paper::docs_list].
    fn docs_list(
        &self,
        _req: crate::model::ListPaperDocsArgs,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::ListPaperDocsResponse>,
            gax::error::NoError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Paper::docs_list_continue].
    fn docs_list_continue(
        &self,
        _req: crate::model::ListPaperDocsContinueArgs,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::ListPaperDocsResponse>,
            crate::model::ListDocsCursorError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Paper::docs_archive].
    fn docs_archive(
        &self,
        _req: crate::model::RefPaperDoc,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<gax::response::Response<()>, crate::model::DocLookupError>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
