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

/// Implements a client for the Dropbox API `paper` namespace.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use dropbox_sdk_paper::client::Paper;
/// let client = Paper::builder().build().await?;
/// let docs = client.docs_list().send().await?;
/// println!("docs {:?}", docs.doc_ids);
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// The `paper` namespace contains the legacy Paper doc routes. All of them are
/// deprecated: Paper docs are now regular files, use the `files` namespace
/// instead.
///
/// # Configuration
///
/// To configure `Paper` use the `with_*` methods in the type returned
/// by [builder()][Paper::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the Dropbox API hosts
///   (`https://api.dropboxapi.com` and friends). Tests may want to override
///   this default to use a local server.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment. Applications using custom authentication may need to
///   override this default.
///
/// [with_endpoint()]: super::builder::paper::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::paper::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Paper` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Paper` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Paper {
    inner: std::sync::Arc<dyn super::stub::dynamic::Paper>,
}

impl Paper {
    /// Returns a builder for [Paper].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_paper::client::Paper;
    /// let client = Paper::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::paper::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::paper::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Paper + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Paper>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Paper> {
        super::transport::Paper::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Paper> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Paper::new)
    }

    /// Creates a new Paper doc with the provided content.
    ///
    /// Note that this endpoint will continue to work for content created by
    /// users on the older version of Paper. To check which version of Paper a
    /// user is on, use `/users/features/get_values`. If the paper_as_files
    /// feature is enabled, then the user is running the new version of Paper.
    ///
    /// This route is deprecated, use `files/paper/create` instead.
    pub fn docs_create(
        &self,
        import_format: impl std::convert::Into<crate::model::ImportFormat>,
    ) -> super::builder::paper::DocsCreate {
        super::builder::paper::DocsCreate::new(
            self.inner.clone(),
            crate::model::PaperDocCreateArgs::new(import_format.into()),
        )
    }

    /// Exports and downloads Paper doc either as HTML or markdown.
    ///
    /// This route is deprecated, use `files/export` instead.
    pub fn docs_download(
        &self,
        export_format: impl std::convert::Into<crate::model::ExportFormat>,
    ) -> super::builder::paper::DocsDownload {
        super::builder::paper::DocsDownload::new(
            self.inner.clone(),
            crate::model::PaperDocExport::new(export_format.into()),
        )
    }

    /// Return the list of all Paper docs according to the argument
    /// specifications. To iterate over through the full pagination, pass the
    /// cursor to [docs_list_continue][Self::docs_list_continue].
    ///
    /// This route is deprecated, use `files/list_folder` instead.
    pub fn docs_list(&self) -> super::builder::paper::DocsList {
        super::builder::paper::DocsList::new(self.inner.clone())
    }

    /// Once a cursor has been retrieved from [docs_list][Self::docs_list], use
    /// this to paginate through all Paper doc.
    ///
    /// This route is deprecated, use `files/list_folder/continue` instead.
    pub fn docs_list_continue(&self) -> super::builder::paper::DocsListContinue {
        super::builder::paper::DocsListContinue::new(self.inner.clone())
    }

    /// Marks the given Paper doc as archived.
    ///
    /// This action can be performed or undone by anyone with edit permissions
    /// to the doc.
    ///
    /// This route is deprecated, use `files/delete_v2` instead.
    pub fn docs_archive(&self) -> super::builder::paper::DocsArchive {
        super::builder::paper::DocsArchive::new(self.inner.clone())
    }
}
