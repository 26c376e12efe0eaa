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

pub mod team {
    /// A builder for [Team][crate::client::Team].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_team::*;
    /// # use builder::team::ClientBuilder;
    /// # use client::Team;
    /// let builder : ClientBuilder = Team::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.dropboxapi.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Team;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Team;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Team] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Team>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R> {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Team>,
            request: R,
        ) -> Self {
            Self {
                stub,
                request,
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Team::get_info][crate::client::Team::get_info] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_team::builder::team::GetInfo;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetInfo {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetInfo(RequestBuilder<()>);

    impl GetInfo {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Team>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> crate::RouteResult<crate::model::TeamGetInfoResult, gax::error::NoError> {
            (*self.0.stub)
                .get_info(self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetInfo {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Team::members_get_info][crate::client::Team::members_get_info] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_team::builder::team::MembersGetInfo;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> MembersGetInfo {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct MembersGetInfo(RequestBuilder<crate::model::MembersGetInfoArgs>);

    impl MembersGetInfo {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Team>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::MembersGetInfoArgs>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> crate::RouteResult<
            std::vec::Vec<crate::model::MembersGetInfoItem>,
            crate::model::MembersGetInfoError,
        > {
            (*self.0.stub)
                .members_get_info(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [members][crate::model::MembersGetInfoArgs::members].
        pub fn set_members<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::UserSelectorArg>,
        {
            use std::iter::Iterator;
            self.0.request.members = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for MembersGetInfo {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Team::members_list][crate::client::Team::members_list] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_team::builder::team::MembersList;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> MembersList {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct MembersList(RequestBuilder<crate::model::MembersListArg>);

    impl MembersList {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Team>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::MembersListArg>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> crate::RouteResult<crate::model::MembersListResult, crate::model::MembersListError> {
            (*self.0.stub)
                .members_list(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [limit][crate::model::MembersListArg::limit].
        pub fn set_limit<T: std::convert::Into<u32>>(mut self, v: T) -> Self {
            self.0.request.limit = v.into();
            self
        }

        /// Sets the value of [include_removed][crate::model::MembersListArg::include_removed].
        pub fn set_include_removed<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_removed = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for MembersList {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Team::members_list_continue][crate::client::Team::members_list_continue] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_team::builder::team::MembersListContinue;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> MembersListContinue {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct MembersListContinue(RequestBuilder<crate::model::MembersListContinueArg>);

    impl MembersListContinue {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Team>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::MembersListContinueArg>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> crate::RouteResult<
            crate::model::MembersListResult,
            crate::model::MembersListContinueError,
        > {
            (*self.0.stub)
                .members_list_continue(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [cursor][crate::model::MembersListContinueArg::cursor].
        pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.cursor = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for MembersListContinue {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
