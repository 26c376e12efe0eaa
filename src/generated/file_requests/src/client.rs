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

/// Implements a client for the Dropbox API `file_requests` namespace.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use dropbox_sdk_file_requests::client::FileRequests;
/// let client = FileRequests::builder().build().await?;
/// let count = client.count().send().await?;
/// println!("you have {} file requests", count.file_request_count);
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// The `file_requests` namespace contains routes to create and manage file
/// requests. A file request lets anyone upload files into a folder of the
/// user's Dropbox, without giving them access to the folder.
///
/// # Configuration
///
/// To configure `FileRequests` use the `with_*` methods in the type returned
/// by [builder()][FileRequests::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the Dropbox API hosts
///   (`https://api.dropboxapi.com` and friends). Tests may want to override
///   this default to use a local server.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment. Applications using custom authentication may need to
///   override this default.
///
/// [with_endpoint()]: super::builder::file_requests::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::file_requests::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `FileRequests` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `FileRequests` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct FileRequests {
    inner: std::sync::Arc<dyn super::stub::dynamic::FileRequests>,
}

impl FileRequests {
    /// Returns a builder for [FileRequests].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_file_requests::client::FileRequests;
    /// let client = FileRequests::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::file_requests::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::file_requests::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::FileRequests + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::FileRequests>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FileRequests> {
        super::transport::FileRequests::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FileRequests> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::FileRequests::new)
    }

    /// Returns the total number of file requests owned by this user. Includes
    /// both open and closed file requests.
    pub fn count(&self) -> super::builder::file_requests::Count {
        super::builder::file_requests::Count::new(self.inner.clone())
    }

    /// Creates a file request for this user.
    pub fn create(&self) -> super::builder::file_requests::Create {
        super::builder::file_requests::Create::new(self.inner.clone())
    }

    /// Returns the specified file request.
    pub fn get(&self) -> super::builder::file_requests::Get {
        super::builder::file_requests::Get::new(self.inner.clone())
    }

    /// Returns a list of file requests owned by this user. For apps with the
    /// app folder permission, this will only return file requests with
    /// destinations in the app folder.
    pub fn list_v2(&self) -> super::builder::file_requests::ListV2 {
        super::builder::file_requests::ListV2::new(self.inner.clone())
    }

    /// Once a cursor has been retrieved from [list_v2][Self::list_v2], use this
    /// to paginate through all file requests. The cursor must come from a
    /// previous call to [list_v2][Self::list_v2] or
    /// [list_continue][Self::list_continue].
    pub fn list_continue(&self) -> super::builder::file_requests::ListContinue {
        super::builder::file_requests::ListContinue::new(self.inner.clone())
    }

    /// Update a file request.
    pub fn update(&self) -> super::builder::file_requests::Update {
        super::builder::file_requests::Update::new(self.inner.clone())
    }

    /// Delete a batch of closed file requests.
    pub fn delete(&self) -> super::builder::file_requests::Delete {
        super::builder::file_requests::Delete::new(self.inner.clone())
    }

    /// Delete all closed file requests owned by this user.
    pub fn delete_all_closed(&self) -> super::builder::file_requests::DeleteAllClosed {
        super::builder::file_requests::DeleteAllClosed::new(self.inner.clone())
    }
}
