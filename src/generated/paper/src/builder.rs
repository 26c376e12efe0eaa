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

pub mod paper {
    /// A builder for [Paper][crate::client::Paper].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_paper::*;
    /// # use builder::paper::ClientBuilder;
    /// # use client::Paper;
    /// let builder : ClientBuilder = Paper::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.dropboxapi.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Paper;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Paper;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Paper] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Paper>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R> {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Paper>,
            request: R,
        ) -> Self {
            Self {
                stub,
                request,
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Paper::docs_create][crate::client::Paper::docs_create] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_paper::builder::paper::DocsCreate;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DocsCreate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DocsCreate(RequestBuilder<crate::model::PaperDocCreateArgs>, bytes::Bytes);

    impl DocsCreate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Paper>,
            request: crate::model::PaperDocCreateArgs,
        ) -> Self {
            Self(RequestBuilder::new(stub, request), bytes::Bytes::new())
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PaperDocCreateArgs>>(mut self, v: V) -> Self {
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
            crate::model::PaperDocCreateUpdateResult,
            crate::model::PaperDocCreateError,
        > {
            (*self.0.stub)
                .docs_create(self.0.request, self.1, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent_folder_id][crate::model::PaperDocCreateArgs::parent_folder_id].
        pub fn set_parent_folder_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.parent_folder_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parent_folder_id][crate::model::PaperDocCreateArgs::parent_folder_id].
        pub fn set_or_clear_parent_folder_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<String>,
        {
            self.0.request.parent_folder_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [import_format][crate::model::PaperDocCreateArgs::import_format].
        pub fn set_import_format<T: std::convert::Into<crate::model::ImportFormat>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.import_format = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DocsCreate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Paper::docs_download][crate::client::Paper::docs_download] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_paper::builder::paper::DocsDownload;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let download = builder.send().await?;
    /// let contents = download.all_bytes().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DocsDownload {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DocsDownload(RequestBuilder<crate::model::PaperDocExport>, Option<String>);

    impl DocsDownload {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Paper>,
            request: crate::model::PaperDocExport,
        ) -> Self {
            Self(RequestBuilder::new(stub, request), None)
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PaperDocExport>>(mut self, v: V) -> Self {
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
            gax::download::Download<crate::model::PaperDocExportResult>,
            crate::model::DocLookupError,
        > {
            let mut headers = http::HeaderMap::new();
            if let Some(range) = self.1 {
                let value =
                    http::HeaderValue::from_str(&range).map_err(gax::error::Error::ser)?;
                headers.insert(http::header::RANGE, value);
            }
            (*self.0.stub)
                .docs_download(self.0.request, headers, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [doc_id][crate::model::PaperDocExport::doc_id].
        pub fn set_doc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.doc_id = v.into();
            self
        }

        /// Sets the value of [export_format][crate::model::PaperDocExport::export_format].
        pub fn set_export_format<T: std::convert::Into<crate::model::ExportFormat>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.export_format = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DocsDownload {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Paper::docs_list][crate::client::Paper::docs_list] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_paper::builder::paper::DocsList;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DocsList {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DocsList(RequestBuilder<crate::model::ListPaperDocsArgs>);

    impl DocsList {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Paper>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListPaperDocsArgs>>(mut self, v: V) -> Self {
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
        ) -> crate::RouteResult<crate::model::ListPaperDocsResponse, gax::error::NoError> {
            (*self.0.stub)
                .docs_list(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [filter_by][crate::model::ListPaperDocsArgs::filter_by].
        pub fn set_filter_by<T: std::convert::Into<crate::model::ListPaperDocsFilterBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.filter_by = v.into();
            self
        }

        /// Sets the value of [sort_by][crate::model::ListPaperDocsArgs::sort_by].
        pub fn set_sort_by<T: std::convert::Into<crate::model::ListPaperDocsSortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListPaperDocsArgs::sort_order].
        pub fn set_sort_order<T: std::convert::Into<crate::model::ListPaperDocsSortOrder>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_order = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListPaperDocsArgs::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DocsList {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Paper::docs_list_continue][crate::client::Paper::docs_list_continue] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_paper::builder::paper::DocsListContinue;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DocsListContinue {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DocsListContinue(RequestBuilder<crate::model::ListPaperDocsContinueArgs>);

    impl DocsListContinue {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Paper>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListPaperDocsContinueArgs>>(
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
            crate::model::ListPaperDocsResponse,
            crate::model::ListDocsCursorError,
        > {
            (*self.0.stub)
                .docs_list_continue(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [cursor][crate::model::ListPaperDocsContinueArgs::cursor].
        pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.cursor = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DocsListContinue {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Paper::docs_archive][crate::client::Paper::docs_archive] calls.
    ///
    /// # Example
    /// ```
    /// # use dropbox_sdk_paper::builder::paper::DocsArchive;
    /// # async fn sample() -> anyhow::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DocsArchive {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DocsArchive(RequestBuilder<crate::model::RefPaperDoc>);

    impl DocsArchive {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Paper>) -> Self {
            Self(RequestBuilder::new(stub, std::default::Default::default()))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RefPaperDoc>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::RouteResult<(), crate::model::DocLookupError> {
            (*self.0.stub)
                .docs_archive(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [doc_id][crate::model::RefPaperDoc::doc_id].
        pub fn set_doc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
            self.0.request.doc_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DocsArchive {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
