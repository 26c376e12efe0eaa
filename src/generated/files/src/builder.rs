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

pub mod files {
    /// A builder for [Files][crate::client::Files].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_files::*;
    /// # use builder::files::ClientBuilder;
    /// # use client::Files;
    /// let builder : ClientBuilder = Files::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.dropboxapi.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Files;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Files;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Files] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R> {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>,
            request: R,
        ) -> Self {
            Self {
                stub,
                request,
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Files::get_metadata][crate::client::Files::get_metadata] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::GetMetadata;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetMetadata {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetMetadata(RequestBuilder<crate::model::GetMetadataArg>);

    impl GetMetadata {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetMetadataArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::Metadata, crate::model::GetMetadataError> {
            (*self.0.stub)
                .get_metadata(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::GetMetadataArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }

        /// Sets the value of [include_media_info][crate::model::GetMetadataArg::include_media_info].
        pub fn set_include_media_info<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_media_info = v.into();
            self
        }

        /// Sets the value of [include_deleted][crate::model::GetMetadataArg::include_deleted].
        pub fn set_include_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_deleted = v.into();
            self
        }

        /// Sets the value of [include_has_explicit_shared_members][crate::model::GetMetadataArg::include_has_explicit_shared_members].
        pub fn set_include_has_explicit_shared_members<T: std::convert::Into<bool>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.include_has_explicit_shared_members = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetMetadata {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::list_folder][crate::client::Files::list_folder] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::ListFolder;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListFolder {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListFolder(RequestBuilder<crate::model::ListFolderArg>);

    impl ListFolder {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFolderArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::ListFolderResult, crate::model::ListFolderError> {
            (*self.0.stub)
                .list_folder(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::ListFolderArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }

        /// Sets the value of [recursive][crate::model::ListFolderArg::recursive].
        pub fn set_recursive<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.recursive = v.into();
            self
        }

        /// Sets the value of [include_media_info][crate::model::ListFolderArg::include_media_info].
        pub fn set_include_media_info<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_media_info = v.into();
            self
        }

        /// Sets the value of [include_deleted][crate::model::ListFolderArg::include_deleted].
        pub fn set_include_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_deleted = v.into();
            self
        }

        /// Sets the value of [include_has_explicit_shared_members][crate::model::ListFolderArg::include_has_explicit_shared_members].
        pub fn set_include_has_explicit_shared_members<T: std::convert::Into<bool>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.include_has_explicit_shared_members = v.into();
            self
        }

        /// Sets the value of [include_mounted_folders][crate::model::ListFolderArg::include_mounted_folders].
        pub fn set_include_mounted_folders<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_mounted_folders = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListFolderArg::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListFolderArg::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [shared_link][crate::model::ListFolderArg::shared_link].
        pub fn set_shared_link<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SharedLink>,
        {
            self.0.request.shared_link = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [shared_link][crate::model::ListFolderArg::shared_link].
        pub fn set_or_clear_shared_link<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SharedLink>,
        {
            self.0.request.shared_link = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_non_downloadable_files][crate::model::ListFolderArg::include_non_downloadable_files].
        pub fn set_include_non_downloadable_files<T: std::convert::Into<bool>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.include_non_downloadable_files = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFolder {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::list_folder_continue][crate::client::Files::list_folder_continue] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::ListFolderContinue;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListFolderContinue {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListFolderContinue(RequestBuilder<crate::model::ListFolderContinueArg>);

    impl ListFolderContinue {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFolderContinueArg>>(mut self, v: V) -> Self {
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
            crate::model::ListFolderResult,
            crate::model::ListFolderContinueError,
        > {
            (*self.0.stub)
                .list_folder_continue(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [cursor][crate::model::ListFolderContinueArg::cursor].
        pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.cursor = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFolderContinue {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::list_folder_get_latest_cursor][crate::client::Files::list_folder_get_latest_cursor] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::ListFolderGetLatestCursor;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListFolderGetLatestCursor {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListFolderGetLatestCursor(RequestBuilder<crate::model::ListFolderArg>);

    impl ListFolderGetLatestCursor {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFolderArg>>(mut self, v: V) -> Self {
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
            crate::model::ListFolderGetLatestCursorResult,
            crate::model::ListFolderError,
        > {
            (*self.0.stub)
                .list_folder_get_latest_cursor(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::ListFolderArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }

        /// Sets the value of [recursive][crate::model::ListFolderArg::recursive].
        pub fn set_recursive<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.recursive = v.into();
            self
        }

        /// Sets the value of [include_media_info][crate::model::ListFolderArg::include_media_info].
        pub fn set_include_media_info<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_media_info = v.into();
            self
        }

        /// Sets the value of [include_deleted][crate::model::ListFolderArg::include_deleted].
        pub fn set_include_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_deleted = v.into();
            self
        }

        /// Sets the value of [include_has_explicit_shared_members][crate::model::ListFolderArg::include_has_explicit_shared_members].
        pub fn set_include_has_explicit_shared_members<T: std::convert::Into<bool>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.include_has_explicit_shared_members = v.into();
            self
        }

        /// Sets the value of [include_mounted_folders][crate::model::ListFolderArg::include_mounted_folders].
        pub fn set_include_mounted_folders<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_mounted_folders = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListFolderArg::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListFolderArg::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<u32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [shared_link][crate::model::ListFolderArg::shared_link].
        pub fn set_shared_link<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SharedLink>,
        {
            self.0.request.shared_link = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [shared_link][crate::model::ListFolderArg::shared_link].
        pub fn set_or_clear_shared_link<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SharedLink>,
        {
            self.0.request.shared_link = v.map(|x| x.into());
            self
        }

        /// Sets the value of [include_non_downloadable_files][crate::model::ListFolderArg::include_non_downloadable_files].
        pub fn set_include_non_downloadable_files<T: std::convert::Into<bool>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.include_non_downloadable_files = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFolderGetLatestCursor {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::list_folder_longpoll][crate::client::Files::list_folder_longpoll] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::ListFolderLongpoll;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListFolderLongpoll {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListFolderLongpoll(RequestBuilder<crate::model::ListFolderLongpollArg>);

    impl ListFolderLongpoll {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFolderLongpollArg>>(mut self, v: V) -> Self {
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
            crate::model::ListFolderLongpollResult,
            crate::model::ListFolderLongpollError,
        > {
            (*self.0.stub)
                .list_folder_longpoll(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [cursor][crate::model::ListFolderLongpollArg::cursor].
        pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.cursor = v.into();
            self
        }

        /// Sets the value of [timeout][crate::model::ListFolderLongpollArg::timeout].
        pub fn set_timeout<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
            self.0.request.timeout = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFolderLongpoll {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::create_folder_v2][crate::client::Files::create_folder_v2] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::CreateFolderV2;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateFolderV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateFolderV2(RequestBuilder<crate::model::CreateFolderArg>);

    impl CreateFolderV2 {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateFolderArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::CreateFolderResult, crate::model::CreateFolderError> {
            (*self.0.stub)
                .create_folder_v2(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::CreateFolderArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }

        /// Sets the value of [autorename][crate::model::CreateFolderArg::autorename].
        pub fn set_autorename<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.autorename = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateFolderV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::delete_v2][crate::client::Files::delete_v2] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::DeleteV2;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteV2(RequestBuilder<crate::model::DeleteArg>);

    impl DeleteV2 {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::DeleteResult, crate::model::DeleteError> {
            (*self.0.stub)
                .delete_v2(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::DeleteArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }

        /// Sets the value of [parent_rev][crate::model::DeleteArg::parent_rev].
        pub fn set_parent_rev<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.parent_rev = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parent_rev][crate::model::DeleteArg::parent_rev].
        pub fn set_or_clear_parent_rev<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.parent_rev = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::delete_batch][crate::client::Files::delete_batch] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::DeleteBatch;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteBatch {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteBatch(RequestBuilder<crate::model::DeleteBatchArg>);

    impl DeleteBatch {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteBatchArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::DeleteBatchLaunch, gax::error::NoError> {
            (*self.0.stub)
                .delete_batch(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [entries][crate::model::DeleteBatchArg::entries].
        pub fn set_entries<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::DeleteArg>,
        {
            use std::iter::Iterator;
            self.0.request.entries = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteBatch {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::delete_batch_check][crate::client::Files::delete_batch_check] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::DeleteBatchCheck;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteBatchCheck {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteBatchCheck(RequestBuilder<wkt::async_job::PollArg>);

    impl DeleteBatchCheck {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<wkt::async_job::PollArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::DeleteBatchJobStatus, wkt::async_job::PollError> {
            (*self.0.stub)
                .delete_batch_check(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [async_job_id][wkt::async_job::PollArg::async_job_id].
        pub fn set_async_job_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.async_job_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteBatchCheck {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::copy_v2][crate::client::Files::copy_v2] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::CopyV2;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CopyV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CopyV2(RequestBuilder<crate::model::RelocationArg>);

    impl CopyV2 {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RelocationArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::RelocationResult, crate::model::RelocationError> {
            (*self.0.stub)
                .copy_v2(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [from_path][crate::model::RelocationArg::from_path].
        pub fn set_from_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.from_path = v.into();
            self
        }

        /// Sets the value of [to_path][crate::model::RelocationArg::to_path].
        pub fn set_to_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.to_path = v.into();
            self
        }

        /// Sets the value of [allow_shared_folder][crate::model::RelocationArg::allow_shared_folder].
        pub fn set_allow_shared_folder<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.allow_shared_folder = v.into();
            self
        }

        /// Sets the value of [autorename][crate::model::RelocationArg::autorename].
        pub fn set_autorename<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.autorename = v.into();
            self
        }

        /// Sets the value of [allow_ownership_transfer][crate::model::RelocationArg::allow_ownership_transfer].
        pub fn set_allow_ownership_transfer<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.allow_ownership_transfer = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CopyV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::move_v2][crate::client::Files::move_v2] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::MoveV2;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> MoveV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct MoveV2(RequestBuilder<crate::model::RelocationArg>);

    impl MoveV2 {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RelocationArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::RelocationResult, crate::model::RelocationError> {
            (*self.0.stub)
                .move_v2(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [from_path][crate::model::RelocationArg::from_path].
        pub fn set_from_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.from_path = v.into();
            self
        }

        /// Sets the value of [to_path][crate::model::RelocationArg::to_path].
        pub fn set_to_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.to_path = v.into();
            self
        }

        /// Sets the value of [allow_shared_folder][crate::model::RelocationArg::allow_shared_folder].
        pub fn set_allow_shared_folder<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.allow_shared_folder = v.into();
            self
        }

        /// Sets the value of [autorename][crate::model::RelocationArg::autorename].
        pub fn set_autorename<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.autorename = v.into();
            self
        }

        /// Sets the value of [allow_ownership_transfer][crate::model::RelocationArg::allow_ownership_transfer].
        pub fn set_allow_ownership_transfer<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.allow_ownership_transfer = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for MoveV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::get_temporary_link][crate::client::Files::get_temporary_link] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::GetTemporaryLink;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetTemporaryLink {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetTemporaryLink(RequestBuilder<crate::model::GetTemporaryLinkArg>);

    impl GetTemporaryLink {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTemporaryLinkArg>>(mut self, v: V) -> Self {
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
            crate::model::GetTemporaryLinkResult,
            crate::model::GetTemporaryLinkError,
        > {
            (*self.0.stub)
                .get_temporary_link(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::GetTemporaryLinkArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetTemporaryLink {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::save_url][crate::client::Files::save_url] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::SaveUrl;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> SaveUrl {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SaveUrl(RequestBuilder<crate::model::SaveUrlArg>);

    impl SaveUrl {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SaveUrlArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::SaveUrlResult, crate::model::SaveUrlError> {
            (*self.0.stub)
                .save_url(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::SaveUrlArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }

        /// Sets the value of [url][crate::model::SaveUrlArg::url].
        pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.url = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SaveUrl {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::save_url_check_job_status][crate::client::Files::save_url_check_job_status] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::SaveUrlCheckJobStatus;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> SaveUrlCheckJobStatus {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SaveUrlCheckJobStatus(RequestBuilder<wkt::async_job::PollArg>);

    impl SaveUrlCheckJobStatus {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<wkt::async_job::PollArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::SaveUrlJobStatus, wkt::async_job::PollError> {
            (*self.0.stub)
                .save_url_check_job_status(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [async_job_id][wkt::async_job::PollArg::async_job_id].
        pub fn set_async_job_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.async_job_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SaveUrlCheckJobStatus {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::upload][crate::client::Files::upload] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::Upload;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Upload {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Upload(RequestBuilder<crate::model::UploadArg>, bytes::Bytes);

    impl Upload {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()), bytes::Bytes::new())
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadArg>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sets the content uploaded with the request.
        pub fn with_payload<V: Into<bytes::Bytes>>(mut self, v: V) -> Self {
            self.1 = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> crate::RouteResult<crate::model::FileMetadata, crate::model::UploadError> {
            (*self.0.stub)
                .upload(self.0.request, self.1, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::UploadArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }

        /// Sets the value of [mode][crate::model::UploadArg::mode].
        pub fn set_mode<T: std::convert::Into<crate::model::WriteMode>>(mut self, v: T) -> Self {
            self.0.request.mode = v.into();
            self
        }

        /// Sets the value of [autorename][crate::model::UploadArg::autorename].
        pub fn set_autorename<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.autorename = v.into();
            self
        }

        /// Sets the value of [client_modified][crate::model::UploadArg::client_modified].
        pub fn set_client_modified<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.0.request.client_modified = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [client_modified][crate::model::UploadArg::client_modified].
        pub fn set_or_clear_client_modified<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.0.request.client_modified = v.map(|x| x.into());
            self
        }

        /// Sets the value of [mute][crate::model::UploadArg::mute].
        pub fn set_mute<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.mute = v.into();
            self
        }

        /// Sets the value of [strict_conflict][crate::model::UploadArg::strict_conflict].
        pub fn set_strict_conflict<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.strict_conflict = v.into();
            self
        }

        /// Sets the value of [content_hash][crate::model::UploadArg::content_hash].
        pub fn set_content_hash<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.content_hash = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_hash][crate::model::UploadArg::content_hash].
        pub fn set_or_clear_content_hash<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.content_hash = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Upload {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::upload_session_start][crate::client::Files::upload_session_start] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::UploadSessionStart;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UploadSessionStart {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UploadSessionStart(
        RequestBuilder<crate::model::UploadSessionStartArg>,
        bytes::Bytes,
    );

    impl UploadSessionStart {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()), bytes::Bytes::new())
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadSessionStartArg>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sets the content uploaded with the request.
        pub fn with_payload<V: Into<bytes::Bytes>>(mut self, v: V) -> Self {
            self.1 = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> crate::RouteResult<
            crate::model::UploadSessionStartResult,
            crate::model::UploadSessionStartError,
        > {
            (*self.0.stub)
                .upload_session_start(self.0.request, self.1, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [close][crate::model::UploadSessionStartArg::close].
        pub fn set_close<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.close = v.into();
            self
        }

        /// Sets the value of [session_type][crate::model::UploadSessionStartArg::session_type].
        pub fn set_session_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UploadSessionType>,
        {
            self.0.request.session_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [session_type][crate::model::UploadSessionStartArg::session_type].
        pub fn set_or_clear_session_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::UploadSessionType>,
        {
            self.0.request.session_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [content_hash][crate::model::UploadSessionStartArg::content_hash].
        pub fn set_content_hash<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.content_hash = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_hash][crate::model::UploadSessionStartArg::content_hash].
        pub fn set_or_clear_content_hash<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.content_hash = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadSessionStart {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::upload_session_append_v2][crate::client::Files::upload_session_append_v2] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::UploadSessionAppendV2;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UploadSessionAppendV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UploadSessionAppendV2(
        RequestBuilder<crate::model::UploadSessionAppendArg>,
        bytes::Bytes,
    );

    impl UploadSessionAppendV2 {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()), bytes::Bytes::new())
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadSessionAppendArg>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sets the content uploaded with the request.
        pub fn with_payload<V: Into<bytes::Bytes>>(mut self, v: V) -> Self {
            self.1 = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::RouteResult<(), crate::model::UploadSessionLookupError> {
            (*self.0.stub)
                .upload_session_append_v2(self.0.request, self.1, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [cursor][crate::model::UploadSessionAppendArg::cursor].
        pub fn set_cursor<T: std::convert::Into<crate::model::UploadSessionCursor>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.cursor = v.into();
            self
        }

        /// Sets the value of [close][crate::model::UploadSessionAppendArg::close].
        pub fn set_close<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.close = v.into();
            self
        }

        /// Sets the value of [content_hash][crate::model::UploadSessionAppendArg::content_hash].
        pub fn set_content_hash<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.content_hash = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_hash][crate::model::UploadSessionAppendArg::content_hash].
        pub fn set_or_clear_content_hash<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.content_hash = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadSessionAppendV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::upload_session_finish][crate::client::Files::upload_session_finish] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::UploadSessionFinish;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UploadSessionFinish {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UploadSessionFinish(
        RequestBuilder<crate::model::UploadSessionFinishArg>,
        bytes::Bytes,
    );

    impl UploadSessionFinish {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()), bytes::Bytes::new())
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadSessionFinishArg>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sets the content uploaded with the request.
        pub fn with_payload<V: Into<bytes::Bytes>>(mut self, v: V) -> Self {
            self.1 = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> crate::RouteResult<
            crate::model::FileMetadata,
            crate::model::UploadSessionFinishError,
        > {
            (*self.0.stub)
                .upload_session_finish(self.0.request, self.1, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [cursor][crate::model::UploadSessionFinishArg::cursor].
        pub fn set_cursor<T: std::convert::Into<crate::model::UploadSessionCursor>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.cursor = v.into();
            self
        }

        /// Sets the value of [commit][crate::model::UploadSessionFinishArg::commit].
        pub fn set_commit<T: std::convert::Into<crate::model::CommitInfo>>(mut self, v: T) -> Self {
            self.0.request.commit = v.into();
            self
        }

        /// Sets the value of [content_hash][crate::model::UploadSessionFinishArg::content_hash].
        pub fn set_content_hash<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.content_hash = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_hash][crate::model::UploadSessionFinishArg::content_hash].
        pub fn set_or_clear_content_hash<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.content_hash = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadSessionFinish {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::download][crate::client::Files::download] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::Download;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let download = builder.send().await?;
    /// let contents = download.all_bytes().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Download {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Download(RequestBuilder<crate::model::DownloadArg>, Option<String>);

    impl Download {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()), None)
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DownloadArg>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Requests a portion of the content, using a HTTP `Range` header value
        /// such as `bytes=0-1023`.
        pub fn with_range<V: Into<String>>(mut self, v: V) -> Self {
            self.1 = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> crate::RouteResult<
            gax::download::Download<crate::model::FileMetadata>,
            crate::model::DownloadError,
        > {
            let mut headers = http::HeaderMap::new();
            if let Some(range) = self.1 {
                let value =
                    http::HeaderValue::from_str(&range).map_err(gax::error::Error::ser)?;
                headers.insert(http::header::RANGE, value);
            }
            (*self.0.stub)
                .download(self.0.request, headers, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::DownloadArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }

        /// Sets the value of [rev][crate::model::DownloadArg::rev].
        pub fn set_rev<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.rev = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [rev][crate::model::DownloadArg::rev].
        pub fn set_or_clear_rev<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.rev = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Download {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Files::get_thumbnail_v2][crate::client::Files::get_thumbnail_v2] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_files::builder::files::GetThumbnailV2;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let download = builder.send().await?;
    /// let contents = download.all_bytes().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetThumbnailV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetThumbnailV2(RequestBuilder<crate::model::ThumbnailV2Arg>, Option<String>);

    impl GetThumbnailV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Files>,
            request: crate::model::ThumbnailV2Arg,
        ) -> Self {
            Self(RequestBuilder::new(stub, request), None)
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ThumbnailV2Arg>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Requests a portion of the content, using a HTTP `Range` header value
        /// such as `bytes=0-1023`.
        pub fn with_range<V: Into<String>>(mut self, v: V) -> Self {
            self.1 = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> crate::RouteResult<
            gax::download::Download<crate::model::PreviewResult>,
            crate::model::ThumbnailV2Error,
        > {
            let mut headers = http::HeaderMap::new();
            if let Some(range) = self.1 {
                let value =
                    http::HeaderValue::from_str(&range).map_err(gax::error::Error::ser)?;
                headers.insert(http::header::RANGE, value);
            }
            (*self.0.stub)
                .get_thumbnail_v2(self.0.request, headers, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [resource][crate::model::ThumbnailV2Arg::resource].
        pub fn set_resource<T: std::convert::Into<crate::model::PathOrLink>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.resource = v.into();
            self
        }

        /// Sets the value of [format][crate::model::ThumbnailV2Arg::format].
        pub fn set_format<T: std::convert::Into<crate::model::ThumbnailFormat>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.format = v.into();
            self
        }

        /// Sets the value of [size][crate::model::ThumbnailV2Arg::size].
        pub fn set_size<T: std::convert::Into<crate::model::ThumbnailSize>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.size = v.into();
            self
        }

        /// Sets the value of [mode][crate::model::ThumbnailV2Arg::mode].
        pub fn set_mode<T: std::convert::Into<crate::model::ThumbnailMode>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.mode = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetThumbnailV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
