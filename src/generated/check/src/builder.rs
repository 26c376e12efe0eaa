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

pub mod check {
    /// A builder for [Check][crate::client::Check].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_check::*;
    /// # use builder::check::ClientBuilder;
    /// # use client::Check;
    /// let builder : ClientBuilder = Check::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.dropboxapi.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Check;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Check;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Check] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Check>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R> {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Check>,
            request: R,
        ) -> Self {
            Self {
                stub,
                request,
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Check::app][crate::client::Check::app] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_check::builder::check::App;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> App {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct App(RequestBuilder<crate::model::EchoArg>);

    impl App {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Check>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EchoArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::EchoResult, gax::error::NoError> {
            (*self.0.stub)
                .app(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [query][crate::model::EchoArg::query].
        pub fn set_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.query = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for App {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Check::user][crate::client::Check::user] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_check::builder::check::User;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> User {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct User(RequestBuilder<crate::model::EchoArg>);

    impl User {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Check>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EchoArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::EchoResult, gax::error::NoError> {
            (*self.0.stub)
                .user(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [query][crate::model::EchoArg::query].
        pub fn set_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.query = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for User {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
