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

pub mod sharing {
    /// A builder for [Sharing][crate::client::Sharing].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_sharing::*;
    /// # use builder::sharing::ClientBuilder;
    /// # use client::Sharing;
    /// let builder : ClientBuilder = Sharing::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.dropboxapi.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Sharing;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Sharing;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Sharing] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Sharing>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R> {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Sharing>,
            request: R,
        ) -> Self {
            Self {
                stub,
                request,
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Sharing::create_shared_link_with_settings][crate::client::Sharing::create_shared_link_with_settings] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_sharing::builder::sharing::CreateSharedLinkWithSettings;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateSharedLinkWithSettings {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateSharedLinkWithSettings(
        RequestBuilder<crate::model::CreateSharedLinkWithSettingsArg>,
    );

    impl CreateSharedLinkWithSettings {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Sharing>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateSharedLinkWithSettingsArg>>(
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
            crate::model::SharedLinkMetadata,
            crate::model::CreateSharedLinkWithSettingsError,
        > {
            (*self.0.stub)
                .create_shared_link_with_settings(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::CreateSharedLinkWithSettingsArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }

        /// Sets the value of [settings][crate::model::CreateSharedLinkWithSettingsArg::settings].
        pub fn set_settings<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SharedLinkSettings>,
        {
            self.0.request.settings = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [settings][crate::model::CreateSharedLinkWithSettingsArg::settings].
        pub fn set_or_clear_settings<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SharedLinkSettings>,
        {
            self.0.request.settings = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateSharedLinkWithSettings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sharing::list_shared_links][crate::client::Sharing::list_shared_links] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_sharing::builder::sharing::ListSharedLinks;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListSharedLinks {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListSharedLinks(RequestBuilder<crate::model::ListSharedLinksArg>);

    impl ListSharedLinks {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Sharing>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSharedLinksArg>>(mut self, v: V) -> Self {
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
            crate::model::ListSharedLinksResult,
            crate::model::ListSharedLinksError,
        > {
            (*self.0.stub)
                .list_shared_links(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::ListSharedLinksArg::path].
        pub fn set_path<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.path = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [path][crate::model::ListSharedLinksArg::path].
        pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.path = v.map(|x| x.into());
            self
        }

        /// Sets the value of [cursor][crate::model::ListSharedLinksArg::cursor].
        pub fn set_cursor<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.cursor = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [cursor][crate::model::ListSharedLinksArg::cursor].
        pub fn set_or_clear_cursor<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.cursor = v.map(|x| x.into());
            self
        }

        /// Sets the value of [direct_only][crate::model::ListSharedLinksArg::direct_only].
        pub fn set_direct_only<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.direct_only = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [direct_only][crate::model::ListSharedLinksArg::direct_only].
        pub fn set_or_clear_direct_only<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.direct_only = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSharedLinks {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sharing::revoke_shared_link][crate::client::Sharing::revoke_shared_link] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_sharing::builder::sharing::RevokeSharedLink;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> RevokeSharedLink {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct RevokeSharedLink(RequestBuilder<crate::model::RevokeSharedLinkArg>);

    impl RevokeSharedLink {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Sharing>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RevokeSharedLinkArg>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::RouteResult<(), crate::model::RevokeSharedLinkError> {
            (*self.0.stub)
                .revoke_shared_link(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [url][crate::model::RevokeSharedLinkArg::url].
        pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.url = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RevokeSharedLink {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sharing::get_shared_link_file][crate::client::Sharing::get_shared_link_file] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_sharing::builder::sharing::GetSharedLinkFile;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let download = builder.send().await?;
    /// let contents = download.all_bytes().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetSharedLinkFile {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetSharedLinkFile(
        RequestBuilder<crate::model::GetSharedLinkMetadataArg>,
        Option<String>,
    );

    impl GetSharedLinkFile {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Sharing>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()), None)
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSharedLinkMetadataArg>>(
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
            gax::download::Download<crate::model::SharedLinkMetadata>,
            crate::model::GetSharedLinkFileError,
        > {
            let mut headers = http::HeaderMap::new();
            if let Some(range) = self.1 {
                let value =
                    http::HeaderValue::from_str(&range).map_err(gax::error::Error::ser)?;
                headers.insert(http::header::RANGE, value);
            }
            (*self.0.stub)
                .get_shared_link_file(self.0.request, headers, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [url][crate::model::GetSharedLinkMetadataArg::url].
        pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.url = v.into();
            self
        }

        /// Sets the value of [path][crate::model::GetSharedLinkMetadataArg::path].
        pub fn set_path<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.path = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [path][crate::model::GetSharedLinkMetadataArg::path].
        pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.path = v.map(|x| x.into());
            self
        }

        /// Sets the value of [link_password][crate::model::GetSharedLinkMetadataArg::link_password].
        pub fn set_link_password<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.link_password = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [link_password][crate::model::GetSharedLinkMetadataArg::link_password].
        pub fn set_or_clear_link_password<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.link_password = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSharedLinkFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sharing::share_folder][crate::client::Sharing::share_folder] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_sharing::builder::sharing::ShareFolder;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ShareFolder {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ShareFolder(RequestBuilder<crate::model::ShareFolderArg>);

    impl ShareFolder {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Sharing>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ShareFolderArg>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::ShareFolderLaunch, crate::model::ShareFolderError> {
            (*self.0.stub)
                .share_folder(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [path][crate::model::ShareFolderArg::path].
        pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.path = v.into();
            self
        }

        /// Sets the value of [acl_update_policy][crate::model::ShareFolderArg::acl_update_policy].
        pub fn set_acl_update_policy<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::AclUpdatePolicy>,
        {
            self.0.request.acl_update_policy = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [acl_update_policy][crate::model::ShareFolderArg::acl_update_policy].
        pub fn set_or_clear_acl_update_policy<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::AclUpdatePolicy>,
        {
            self.0.request.acl_update_policy = v.map(|x| x.into());
            self
        }

        /// Sets the value of [force_async][crate::model::ShareFolderArg::force_async].
        pub fn set_force_async<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.force_async = v.into();
            self
        }

        /// Sets the value of [member_policy][crate::model::ShareFolderArg::member_policy].
        pub fn set_member_policy<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::MemberPolicy>,
        {
            self.0.request.member_policy = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [member_policy][crate::model::ShareFolderArg::member_policy].
        pub fn set_or_clear_member_policy<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::MemberPolicy>,
        {
            self.0.request.member_policy = v.map(|x| x.into());
            self
        }

        /// Sets the value of [shared_link_policy][crate::model::ShareFolderArg::shared_link_policy].
        pub fn set_shared_link_policy<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SharedLinkPolicy>,
        {
            self.0.request.shared_link_policy = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [shared_link_policy][crate::model::ShareFolderArg::shared_link_policy].
        pub fn set_or_clear_shared_link_policy<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SharedLinkPolicy>,
        {
            self.0.request.shared_link_policy = v.map(|x| x.into());
            self
        }

        /// Sets the value of [viewer_info_policy][crate::model::ShareFolderArg::viewer_info_policy].
        pub fn set_viewer_info_policy<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ViewerInfoPolicy>,
        {
            self.0.request.viewer_info_policy = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [viewer_info_policy][crate::model::ShareFolderArg::viewer_info_policy].
        pub fn set_or_clear_viewer_info_policy<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ViewerInfoPolicy>,
        {
            self.0.request.viewer_info_policy = v.map(|x| x.into());
            self
        }

        /// Sets the value of [access_inheritance][crate::model::ShareFolderArg::access_inheritance].
        pub fn set_access_inheritance<T: std::convert::Into<crate::model::AccessInheritance>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.access_inheritance = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ShareFolder {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Sharing::check_share_job_status][crate::client::Sharing::check_share_job_status] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_sharing::builder::sharing::CheckShareJobStatus;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CheckShareJobStatus {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CheckShareJobStatus(RequestBuilder<wkt::async_job::PollArg>);

    impl CheckShareJobStatus {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Sharing>) -> Self {
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
        ) -> crate::RouteResult<crate::model::ShareFolderJobStatus, wkt::async_job::PollError> {
            (*self.0.stub)
                .check_share_job_status(self.0.request, self.0.options)
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
    impl gax::options::internal::RequestBuilder for CheckShareJobStatus {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
