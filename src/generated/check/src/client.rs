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

/// Implements a client for the Dropbox API `check` namespace.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use dropbox_sdk_check::client::Check;
/// let client = Check::builder().build().await?;
/// let response = client.user().set_query("ping").send().await?;
/// println!("response {:?}", response);
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// The `check` namespace contains routes to verify the credentials and the
/// connection to the Dropbox API.
///
/// # Configuration
///
/// To configure `Check` use the `with_*` methods in the type returned
/// by [builder()][Check::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the Dropbox API hosts
///   (`https://api.dropboxapi.com` and friends). Tests may want to override
///   this default to use a local server.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment. Applications using custom authentication may need to
///   override this default.
///
/// [with_endpoint()]: super::builder::check::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::check::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Check` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Check` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Check {
    inner: std::sync::Arc<dyn super::stub::dynamic::Check>,
}

impl Check {
    /// Returns a builder for [Check].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_check::client::Check;
    /// let client = Check::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::check::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::check::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Check + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Check>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Check> {
        super::transport::Check::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Check> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Check::new)
    }

    /// This endpoint performs App Authentication, validating the supplied app
    /// key and secret, and returns the supplied string, to allow you to test
    /// your code and connection to the Dropbox API. It has no other effect. If
    /// you receive an HTTP 200 response with the supplied query, it indicates
    /// at least part of the Dropbox API infrastructure is working and that the
    /// app key and secret valid.
    pub fn app(&self) -> super::builder::check::App {
        super::builder::check::App::new(self.inner.clone())
    }

    /// This endpoint performs User Authentication, validating the supplied
    /// access token, and returns the supplied string, to allow you to test your
    /// code and connection to the Dropbox API. It has no other effect. If you
    /// receive an HTTP 200 response with the supplied query, it indicates at
    /// least part of the Dropbox API infrastructure is working and that the
    /// access token is valid.
    pub fn user(&self) -> super::builder::check::User {
        super::builder::check::User::new(self.inner.clone())
    }
}
