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

/// Defines the trait used to implement [super::client::Sharing].
///
/// Application developers may need to implement this trait to mock
/// `client::Sharing`. In other use-cases, application developers only
/// use `client::Sharing` and need not be concerned with this trait or
/// its implementations.
///
/// The Dropbox API gains new routes routinely. Consequently, this trait gains
/// new methods too. To avoid breaking applications the trait provides a
/// default implementation of each method. These implementations panic.
pub trait Sharing: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Sharing::create_shared_link_with_settings].
    fn create_shared_link_with_settings(
        &self,
        _req: crate::model::CreateSharedLinkWithSettingsArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::SharedLinkMetadata>,
            crate::model::CreateSharedLinkWithSettingsError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Sharing::list_shared_links].
    fn list_shared_links(
        &self,
        _req: crate::model::ListSharedLinksArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::ListSharedLinksResult>,
            crate::model::ListSharedLinksError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Sharing::revoke_shared_link].
    fn revoke_shared_link(
        &self,
        _req: crate::model::RevokeSharedLinkArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<()>,
            crate::model::RevokeSharedLinkError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Sharing::get_shared_link_file].
    fn get_shared_link_file(
        &self,
        _req: crate::model::GetSharedLinkMetadataArg,
        _headers: http::HeaderMap,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<gax::download::Download<crate::model::SharedLinkMetadata>>,
            crate::model::GetSharedLinkFileError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Sharing::share_folder].
    fn share_folder(
        &self,
        _req: crate::model::ShareFolderArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::ShareFolderLaunch>,
            crate::model::ShareFolderError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Sharing::check_share_job_status].
    fn check_share_job_status(
        &self,
        _req: wkt::async_job::PollArg,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::RouteResult<
            gax::response::Response<crate::model::ShareFolderJobStatus>,
            wkt::async_job::PollError,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
