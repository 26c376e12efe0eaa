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

pub mod users {
    /// A builder for [Users][crate::client::Users].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_users::*;
    /// # use builder::users::ClientBuilder;
    /// # use client::Users;
    /// let builder : ClientBuilder = Users::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.dropboxapi.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Users;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Users;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Users] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Users>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R> {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Users>,
            request: R,
        ) -> Self {
            Self {
                stub,
                request,
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Users::get_account][crate::client::Users::get_account] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_users::builder::users::GetAccount;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetAccount {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAccount(RequestBuilder<crate::model::GetAccountArg>);

    impl GetAccount {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Users>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAccountArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::BasicAccount, crate::model::GetAccountError> {
            (*self.0.stub)
                .get_account(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [account_id][crate::model::GetAccountArg::account_id].
        pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAccount {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Users::get_account_batch][crate::client::Users::get_account_batch] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_users::builder::users::GetAccountBatch;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetAccountBatch {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAccountBatch(RequestBuilder<crate::model::GetAccountBatchArg>);

    impl GetAccountBatch {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Users>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAccountBatchArg>>(mut self, v: V) -> Self {
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
            std::vec::Vec<crate::model::BasicAccount>,
            crate::model::GetAccountBatchError,
        > {
            (*self.0.stub)
                .get_account_batch(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [account_ids][crate::model::GetAccountBatchArg::account_ids].
        pub fn set_account_ids<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.account_ids = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAccountBatch {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Users::get_current_account][crate::client::Users::get_current_account] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_users::builder::users::GetCurrentAccount;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetCurrentAccount {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetCurrentAccount(RequestBuilder<()>);

    impl GetCurrentAccount {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Users>) -> Self {
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
        ) -> crate::RouteResult<crate::model::FullAccount, gax::error::NoError> {
            (*self.0.stub)
                .get_current_account(self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCurrentAccount {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Users::get_space_usage][crate::client::Users::get_space_usage] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_users::builder::users::GetSpaceUsage;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetSpaceUsage {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetSpaceUsage(RequestBuilder<()>);

    impl GetSpaceUsage {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Users>) -> Self {
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
        ) -> crate::RouteResult<crate::model::SpaceUsage, gax::error::NoError> {
            (*self.0.stub)
                .get_space_usage(self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSpaceUsage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Users::features_get_values][crate::client::Users::features_get_values] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_users::builder::users::FeaturesGetValues;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> FeaturesGetValues {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct FeaturesGetValues(RequestBuilder<crate::model::UserFeaturesGetValuesBatchArg>);

    impl FeaturesGetValues {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Users>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UserFeaturesGetValuesBatchArg>>(
            mut self,
            v: V,
        ) -> Self {
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
            crate::model::UserFeaturesGetValuesBatchResult,
            crate::model::UserFeaturesGetValuesBatchError,
        > {
            (*self.0.stub)
                .features_get_values(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [features][crate::model::UserFeaturesGetValuesBatchArg::features].
        pub fn set_features<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::UserFeature>,
        {
            use std::iter::Iterator;
            self.0.request.features = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for FeaturesGetValues {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
