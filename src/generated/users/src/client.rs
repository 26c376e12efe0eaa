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

/// Implements a client for the Dropbox API `users` namespace.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use dropbox_sdk_users::client::Users;
/// let client = Users::builder().build().await?;
/// let account = client.get_current_account().send().await?;
/// println!("hello {}", account.name.display_name);
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// The `users` namespace contains routes to get information about the current
/// account and other accounts, including the space usage and the features
/// enabled for the current account.
///
/// # Configuration
///
/// To configure `Users` use the `with_*` methods in the type returned
/// by [builder()][Users::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the Dropbox API hosts
///   (`https://api.dropboxapi.com` and friends). Tests may want to override
///   this default to use a local server.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment. Applications using custom authentication may need to
///   override this default.
///
/// [with_endpoint()]: super::builder::users::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::users::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Users` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Users` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Users {
    inner: std::sync::Arc<dyn super::stub::dynamic::Users>,
}

impl Users {
    /// Returns a builder for [Users].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_users::client::Users;
    /// let client = Users::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::users::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::users::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Users + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Users>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Users> {
        super::transport::Users::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Users> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Users::new)
    }

    /// Get information about a user's account.
    pub fn get_account(&self) -> super::builder::users::GetAccount {
        super::builder::users::GetAccount::new(self.inner.clone())
    }

    /// Get information about multiple user accounts. At most 300 accounts may
    /// be queried per request.
    pub fn get_account_batch(&self) -> super::builder::users::GetAccountBatch {
        super::builder::users::GetAccountBatch::new(self.inner.clone())
    }

    /// Get information about the current user's account.
    pub fn get_current_account(&self) -> super::builder::users::GetCurrentAccount {
        super::builder::users::GetCurrentAccount::new(self.inner.clone())
    }

    /// Get the space usage information for the current user's account.
    pub fn get_space_usage(&self) -> super::builder::users::GetSpaceUsage {
        super::builder::users::GetSpaceUsage::new(self.inner.clone())
    }

    /// Get a list of feature values that may be configured for the current
    /// account.
    pub fn features_get_values(&self) -> super::builder::users::FeaturesGetValues {
        super::builder::users::FeaturesGetValues::new(self.inner.clone())
    }
}
