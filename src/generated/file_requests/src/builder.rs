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

pub mod file_requests {
    /// A builder for [FileRequests][crate::client::FileRequests].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_file_requests::*;
    /// # use builder::file_requests::ClientBuilder;
    /// # use client::FileRequests;
    /// let builder : ClientBuilder = FileRequests::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.dropboxapi.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::FileRequests;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = FileRequests;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::FileRequests] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::FileRequests>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R> {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FileRequests>,
            request: R,
        ) -> Self {
            Self {
                stub,
                request,
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [FileRequests::count][crate::client::FileRequests::count] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_file_requests::builder::file_requests::Count;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Count {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Count(RequestBuilder<()>);

    impl Count {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FileRequests>,
        ) -> Self {
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
        ) -> crate::RouteResult<
            crate::model::CountFileRequestsResult,
            crate::model::CountFileRequestsError,
        > {
            (*self.0.stub)
                .count(self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Count {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FileRequests::create][crate::client::FileRequests::create] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_file_requests::builder::file_requests::Create;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Create {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Create(RequestBuilder<crate::model::CreateFileRequestArgs>);

    impl Create {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FileRequests>,
        ) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateFileRequestArgs>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::FileRequest, crate::model::CreateFileRequestError> {
            (*self.0.stub)
                .create(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [title][crate::model::CreateFileRequestArgs::title].
        pub fn set_title<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.title = v.into();
            self
        }

        /// Sets the value of [destination][crate::model::CreateFileRequestArgs::destination].
        pub fn set_destination<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.destination = v.into();
            self
        }

        /// Sets the value of [deadline][crate::model::CreateFileRequestArgs::deadline].
        pub fn set_deadline<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::FileRequestDeadline>,
        {
            self.0.request.deadline = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [deadline][crate::model::CreateFileRequestArgs::deadline].
        pub fn set_or_clear_deadline<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::FileRequestDeadline>,
        {
            self.0.request.deadline = v.map(|x| x.into());
            self
        }

        /// Sets the value of [open][crate::model::CreateFileRequestArgs::open].
        pub fn set_open<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.open = v.into();
            self
        }

        /// Sets the value of [description][crate::model::CreateFileRequestArgs::description].
        pub fn set_description<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::CreateFileRequestArgs::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Create {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FileRequests::get][crate::client::FileRequests::get] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_file_requests::builder::file_requests::Get;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Get {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Get(RequestBuilder<crate::model::GetFileRequestArgs>);

    impl Get {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FileRequests>,
        ) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetFileRequestArgs>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::FileRequest, crate::model::GetFileRequestError> {
            (*self.0.stub)
                .get(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [id][crate::model::GetFileRequestArgs::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FileRequests::list_v2][crate::client::FileRequests::list_v2] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_file_requests::builder::file_requests::ListV2;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListV2(RequestBuilder<crate::model::ListFileRequestsArg>);

    impl ListV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FileRequests>,
        ) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFileRequestsArg>>(mut self, v: V) -> Self {
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
            crate::model::ListFileRequestsV2Result,
            crate::model::ListFileRequestsError,
        > {
            (*self.0.stub)
                .list_v2(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [limit][crate::model::ListFileRequestsArg::limit].
        pub fn set_limit<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
            self.0.request.limit = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FileRequests::list_continue][crate::client::FileRequests::list_continue] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_file_requests::builder::file_requests::ListContinue;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListContinue {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListContinue(RequestBuilder<crate::model::ListFileRequestsContinueArg>);

    impl ListContinue {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FileRequests>,
        ) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFileRequestsContinueArg>>(
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
            crate::model::ListFileRequestsV2Result,
            crate::model::ListFileRequestsContinueError,
        > {
            (*self.0.stub)
                .list_continue(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [cursor][crate::model::ListFileRequestsContinueArg::cursor].
        pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.cursor = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListContinue {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FileRequests::update][crate::client::FileRequests::update] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_file_requests::builder::file_requests::Update;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Update {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Update(RequestBuilder<crate::model::UpdateFileRequestArgs>);

    impl Update {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FileRequests>,
        ) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateFileRequestArgs>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::FileRequest, crate::model::UpdateFileRequestError> {
            (*self.0.stub)
                .update(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [id][crate::model::UpdateFileRequestArgs::id].
        pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [title][crate::model::UpdateFileRequestArgs::title].
        pub fn set_title<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.title = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [title][crate::model::UpdateFileRequestArgs::title].
        pub fn set_or_clear_title<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.title = v.map(|x| x.into());
            self
        }

        /// Sets the value of [destination][crate::model::UpdateFileRequestArgs::destination].
        pub fn set_destination<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.destination = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [destination][crate::model::UpdateFileRequestArgs::destination].
        pub fn set_or_clear_destination<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.destination = v.map(|x| x.into());
            self
        }

        /// Sets the value of [deadline][crate::model::UpdateFileRequestArgs::deadline].
        pub fn set_deadline<T: std::convert::Into<crate::model::UpdateFileRequestDeadline>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.deadline = v.into();
            self
        }

        /// Sets the value of [open][crate::model::UpdateFileRequestArgs::open].
        pub fn set_open<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.open = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [open][crate::model::UpdateFileRequestArgs::open].
        pub fn set_or_clear_open<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.open = v.map(|x| x.into());
            self
        }

        /// Sets the value of [description][crate::model::UpdateFileRequestArgs::description].
        pub fn set_description<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::UpdateFileRequestArgs::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Update {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FileRequests::delete][crate::client::FileRequests::delete] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_file_requests::builder::file_requests::Delete;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Delete {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Delete(RequestBuilder<crate::model::DeleteFileRequestArgs>);

    impl Delete {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FileRequests>,
        ) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFileRequestArgs>>(mut self, v: V) -> Self {
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
            crate::model::DeleteFileRequestsResult,
            crate::model::DeleteFileRequestError,
        > {
            (*self.0.stub)
                .delete(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [ids][crate::model::DeleteFileRequestArgs::ids].
        pub fn set_ids<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<String>,
        {
            use std::iter::Iterator;
            self.0.request.ids = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FileRequests::delete_all_closed][crate::client::FileRequests::delete_all_closed] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_file_requests::builder::file_requests::DeleteAllClosed;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteAllClosed {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteAllClosed(RequestBuilder<()>);

    impl DeleteAllClosed {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FileRequests>,
        ) -> Self {
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
        ) -> crate::RouteResult<
            crate::model::DeleteAllClosedFileRequestsResult,
            crate::model::DeleteAllClosedFileRequestsError,
        > {
            (*self.0.stub)
                .delete_all_closed(self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteAllClosed {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
