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

/// Implements a client for the Dropbox API `team` namespace.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use dropbox_sdk_team::client::Team;
/// let client = Team::builder().build().await?;
/// let info = client.get_info().send().await?;
/// println!("team {} has {} members", info.name, info.num_provisioned_users);
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// The `team` namespace contains routes to manage a Dropbox team. These routes
/// require a team access token. To act as a member of the team on user routes,
/// see [with_select_user][gax::client_builder::ClientBuilder::with_select_user]
/// and
/// [with_select_admin][gax::client_builder::ClientBuilder::with_select_admin].
///
/// # Configuration
///
/// To configure `Team` use the `with_*` methods in the type returned
/// by [builder()][Team::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the Dropbox API hosts
///   (`https://api.dropboxapi.com` and friends). Tests may want to override
///   this default to use a local server.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment. Applications using custom authentication may need to
///   override this default.
///
/// [with_endpoint()]: super::builder::team::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::team::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Team` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Team` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Team {
    inner: std::sync::Arc<dyn super::stub::dynamic::Team>,
}

impl Team {
    /// Returns a builder for [Team].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_team::client::Team;
    /// let client = Team::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::team::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::team::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Team + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Team>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Team> {
        super::transport::Team::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Team> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Team::new)
    }

    /// Retrieves information about a team.
    pub fn get_info(&self) -> super::builder::team::GetInfo {
        super::builder::team::GetInfo::new(self.inner.clone())
    }

    /// Returns information about multiple team members. This endpoint will
    /// return [MembersGetInfoItem::IdNotFound], for IDs (or emails) that cannot
    /// be matched to a valid team member.
    pub fn members_get_info(&self) -> super::builder::team::MembersGetInfo {
        super::builder::team::MembersGetInfo::new(self.inner.clone())
    }

    /// Lists members of a team.
    pub fn members_list(&self) -> super::builder::team::MembersList {
        super::builder::team::MembersList::new(self.inner.clone())
    }

    /// Once a cursor has been retrieved from
    /// [members_list][crate::client::Team::members_list], use this to paginate
    /// through all team members.
    pub fn members_list_continue(&self) -> super::builder::team::MembersListContinue {
        super::builder::team::MembersListContinue::new(self.inner.clone())
    }
}
