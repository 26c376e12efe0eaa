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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Dropbox API `sharing` namespace.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use dropbox_sdk_sharing::client::Sharing;
/// let client = Sharing::builder().build().await?;
/// let links = client.list_shared_links().set_path("/Photos").send().await?;
/// println!("links {:?}", links);
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// The `sharing` namespace contains routes to create and manage shared links
/// and shared folders.
///
/// # Configuration
///
/// To configure `Sharing` use the `with_*` methods in the type returned
/// by [builder()][Sharing::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the Dropbox API hosts
///   (`https://api.dropboxapi.com` and friends). Tests may want to override
///   this default to use a local server.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment. Applications using custom authentication may need to
///   override this default.
///
/// [with_endpoint()]: super::builder::sharing::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::sharing::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Sharing` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Sharing` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Sharing {
    inner: std::sync::Arc<dyn super::stub::dynamic::Sharing>,
}

impl Sharing {
    /// Returns a builder for [Sharing].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_sharing::client::Sharing;
    /// let client = Sharing::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::sharing::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::sharing::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Sharing + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Sharing>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Sharing> {
        super::transport::Sharing::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Sharing> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Sharing::new)
    }

    /// Create a shared link with custom settings. If no settings are given then
    /// the default visibility is
    /// [RequestedVisibility::Public][crate::model::RequestedVisibility::Public]
    /// (The resolved visibility, though, may depend on other aspects such as
    /// team and shared folder settings).
    pub fn create_shared_link_with_settings(
        &self,
    ) -> super::builder::sharing::CreateSharedLinkWithSettings {
        super::builder::sharing::CreateSharedLinkWithSettings::new(self.inner.clone())
    }

    /// List shared links of this user.
    ///
    /// If no path is given, returns a list of all shared links for the current
    /// user. For members of business teams using team space and member folders,
    /// returns all shared links in the team member's home folder unless the
    /// team space ID is specified in the request header.
    ///
    /// If a non-empty path is given, returns a list of all shared links that
    /// allow access to the given path - direct links to the given path and
    /// links to parent folders of the given path. Links to parent folders can
    /// be suppressed by setting direct_only to true.
    pub fn list_shared_links(&self) -> super::builder::sharing::ListSharedLinks {
        super::builder::sharing::ListSharedLinks::new(self.inner.clone())
    }

    /// Revoke a shared link.
    ///
    /// Note that even after revoking a shared link to a file, the file may be
    /// accessible if there are shared links leading to any of the file parent
    /// folders. To list all shared links that enable access to a specific file,
    /// you can use the [list_shared_links][Self::list_shared_links] with the
    /// file as the path argument.
    pub fn revoke_shared_link(&self) -> super::builder::sharing::RevokeSharedLink {
        super::builder::sharing::RevokeSharedLink::new(self.inner.clone())
    }

    /// Download the shared link's file from a user's Dropbox.
    pub fn get_shared_link_file(&self) -> super::builder::sharing::GetSharedLinkFile {
        super::builder::sharing::GetSharedLinkFile::new(self.inner.clone())
    }

    /// Share a folder with collaborators.
    ///
    /// Most sharing will be completed synchronously. Large folders will be
    /// completed asynchronously. To make testing the async case repeatable, set
    /// `force_async`.
    ///
    /// If a
    /// [ShareFolderLaunch::AsyncJobId][crate::model::ShareFolderLaunch::AsyncJobId]
    /// is returned, you'll need to call
    /// [check_share_job_status][Self::check_share_job_status] until the action
    /// completes to get the metadata for the folder.
    pub fn share_folder(&self) -> super::builder::sharing::ShareFolder {
        super::builder::sharing::ShareFolder::new(self.inner.clone())
    }

    /// Returns the status of an asynchronous job for sharing a folder.
    pub fn check_share_job_status(&self) -> super::builder::sharing::CheckShareJobStatus {
        super::builder::sharing::CheckShareJobStatus::new(self.inner.clone())
    }
}
