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

/// Implements a client for the Dropbox API `files` namespace.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use dropbox_sdk_files::client::Files;
/// let client = Files::builder().build().await?;
/// let metadata = client.get_metadata().set_path("/Homework/math").send().await?;
/// println!("metadata {:?}", metadata);
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// The `files` namespace contains routes to list, read, and write the files and
/// folders in a Dropbox account. This includes routes to upload and download
/// content, and long-running batch operations.
///
/// # Configuration
///
/// To configure `Files` use the `with_*` methods in the type returned
/// by [builder()][Files::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the Dropbox API hosts
///   (`https://api.dropboxapi.com` and friends). Tests may want to override
///   this default to use a local server.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment. Applications using custom authentication may need to
///   override this default.
///
/// [with_endpoint()]: super::builder::files::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::files::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Files` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Files` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Files {
    inner: std::sync::Arc<dyn super::stub::dynamic::Files>,
}

impl Files {
    /// Returns a builder for [Files].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use dropbox_sdk_files::client::Files;
    /// let client = Files::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::files::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::files::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Files + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Files>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Files> {
        super::transport::Files::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Files> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Files::new)
    }

    /// Returns the metadata for a file or folder.
    ///
    /// Note: Metadata for the root folder is unsupported.
    pub fn get_metadata(&self) -> super::builder::files::GetMetadata {
        super::builder::files::GetMetadata::new(self.inner.clone())
    }

    /// Starts returning the contents of a folder. If the result's `has_more`
    /// field is `true`, call [list_folder_continue][Self::list_folder_continue]
    /// with the returned cursor to retrieve more entries.
    ///
    /// If you're using `recursive` set to `true` to keep a local cache of the
    /// contents of a Dropbox account, iterate through each entry in order and
    /// process them as follows to keep your local state in sync: for each file,
    /// store the new entry at the given path in your local state. For each
    /// folder, create a folder at the given path. For each deleted entry,
    /// delete the file or folder and its children at the given path.
    pub fn list_folder(&self) -> super::builder::files::ListFolder {
        super::builder::files::ListFolder::new(self.inner.clone())
    }

    /// Once a cursor has been retrieved from [list_folder][Self::list_folder],
    /// use this to paginate through all files and retrieve updates to the
    /// folder, following the same rules as documented for
    /// [list_folder][Self::list_folder].
    pub fn list_folder_continue(&self) -> super::builder::files::ListFolderContinue {
        super::builder::files::ListFolderContinue::new(self.inner.clone())
    }

    /// A way to quickly get a cursor for the folder's state. Unlike
    /// [list_folder][Self::list_folder], this doesn't return any entries. This
    /// endpoint is for app which only needs to know about new files and
    /// modifications and doesn't need to know about files that already exist in
    /// Dropbox.
    pub fn list_folder_get_latest_cursor(
        &self,
    ) -> super::builder::files::ListFolderGetLatestCursor {
        super::builder::files::ListFolderGetLatestCursor::new(self.inner.clone())
    }

    /// A longpoll endpoint to wait for changes on an account. In conjunction
    /// with [list_folder_continue][Self::list_folder_continue], this call gives
    /// you a low-latency way to monitor an account for file changes. The
    /// connection will block until there are changes available or a timeout
    /// occurs. This endpoint is useful mostly for client-side apps. This route
    /// does not use the credentials.
    pub fn list_folder_longpoll(&self) -> super::builder::files::ListFolderLongpoll {
        super::builder::files::ListFolderLongpoll::new(self.inner.clone())
    }

    /// Create a folder at a given path.
    pub fn create_folder_v2(&self) -> super::builder::files::CreateFolderV2 {
        super::builder::files::CreateFolderV2::new(self.inner.clone())
    }

    /// Delete the file or folder at a given path.
    ///
    /// If the path is a folder, all its contents will be deleted too. A
    /// successful response indicates that the file or folder was deleted. The
    /// returned metadata will be the corresponding
    /// [FileMetadata][crate::model::FileMetadata] or
    /// [FolderMetadata][crate::model::FolderMetadata] for the item at time of
    /// deletion, and not a [DeletedMetadata][crate::model::DeletedMetadata]
    /// object.
    pub fn delete_v2(&self) -> super::builder::files::DeleteV2 {
        super::builder::files::DeleteV2::new(self.inner.clone())
    }

    /// Delete multiple files/folders at once.
    ///
    /// This route is asynchronous, which returns a job ID immediately and runs
    /// the delete batch asynchronously. Use
    /// [delete_batch_check][Self::delete_batch_check] to check the job status.
    pub fn delete_batch(&self) -> super::builder::files::DeleteBatch {
        super::builder::files::DeleteBatch::new(self.inner.clone())
    }

    /// Returns the status of an asynchronous job for
    /// [delete_batch][Self::delete_batch]. If success, it returns list of
    /// result for each entry.
    pub fn delete_batch_check(&self) -> super::builder::files::DeleteBatchCheck {
        super::builder::files::DeleteBatchCheck::new(self.inner.clone())
    }

    /// Copy a file or folder to a different location in the user's Dropbox.
    ///
    /// If the source path is a folder all its contents will be copied.
    pub fn copy_v2(&self) -> super::builder::files::CopyV2 {
        super::builder::files::CopyV2::new(self.inner.clone())
    }

    /// Move a file or folder to a different location in the user's Dropbox.
    ///
    /// If the source path is a folder all its contents will be moved. Note that
    /// we do not currently support case-only renaming.
    pub fn move_v2(&self) -> super::builder::files::MoveV2 {
        super::builder::files::MoveV2::new(self.inner.clone())
    }

    /// Get a temporary link to stream content of a file. This link will expire
    /// in four hours and afterwards you will get 410 Gone. This URL should not
    /// be used to display content directly in the browser. The Content-Type of
    /// the link is determined automatically by the file's mime type.
    pub fn get_temporary_link(&self) -> super::builder::files::GetTemporaryLink {
        super::builder::files::GetTemporaryLink::new(self.inner.clone())
    }

    /// Save the data from a specified URL into a file in user's Dropbox.
    ///
    /// Note that the transfer from the URL must complete within 15 minutes, or
    /// the operation will time out and the job will fail. If the given path
    /// already exists, the file will be renamed to avoid the conflict (e.g.
    /// myfile (1).txt).
    pub fn save_url(&self) -> super::builder::files::SaveUrl {
        super::builder::files::SaveUrl::new(self.inner.clone())
    }

    /// Check the status of a [save_url][Self::save_url] job.
    pub fn save_url_check_job_status(&self) -> super::builder::files::SaveUrlCheckJobStatus {
        super::builder::files::SaveUrlCheckJobStatus::new(self.inner.clone())
    }

    /// Create a new file with the contents provided in the request.
    ///
    /// Do not use this to upload a file larger than 150 MiB. Instead, create an
    /// upload session with [upload_session_start][Self::upload_session_start].
    pub fn upload(&self) -> super::builder::files::Upload {
        super::builder::files::Upload::new(self.inner.clone())
    }

    /// Upload sessions allow you to upload a single file in one or more
    /// requests, for example where the size of the file is greater than 150
    /// MiB. This call starts a new upload session with the given data. You can
    /// then use [upload_session_append_v2][Self::upload_session_append_v2] to
    /// add more data and [upload_session_finish][Self::upload_session_finish]
    /// to save all the data to a file in Dropbox.
    ///
    /// A single request should not upload more than 150 MiB. The maximum size
    /// of a file one can upload to an upload session is 350 GiB.
    pub fn upload_session_start(&self) -> super::builder::files::UploadSessionStart {
        super::builder::files::UploadSessionStart::new(self.inner.clone())
    }

    /// Append more data to an upload session. When the parameter close is set,
    /// this call will close the session.
    ///
    /// A single request should not upload more than 150 MiB.
    pub fn upload_session_append_v2(&self) -> super::builder::files::UploadSessionAppendV2 {
        super::builder::files::UploadSessionAppendV2::new(self.inner.clone())
    }

    /// Finish an upload session and save the uploaded data to the given file
    /// path.
    ///
    /// A single request should not upload more than 150 MiB.
    pub fn upload_session_finish(&self) -> super::builder::files::UploadSessionFinish {
        super::builder::files::UploadSessionFinish::new(self.inner.clone())
    }

    /// Download a file from a user's Dropbox.
    ///
    /// The metadata is returned with the content stream. Use
    /// [with_range][super::builder::files::Download::with_range] to download a
    /// portion of the file.
    pub fn download(&self) -> super::builder::files::Download {
        super::builder::files::Download::new(self.inner.clone())
    }

    /// Get a thumbnail for an image.
    ///
    /// This method currently supports files with the following file extensions:
    /// jpg, jpeg, png, tiff, tif, gif, webp, ppm and bmp. Photos that are
    /// larger than 20MB in size won't be converted to a thumbnail.
    pub fn get_thumbnail_v2(
        &self,
        resource: impl std::convert::Into<crate::model::PathOrLink>,
    ) -> super::builder::files::GetThumbnailV2 {
        super::builder::files::GetThumbnailV2::new(
            self.inner.clone(),
            crate::model::ThumbnailV2Arg::new(resource.into()),
        )
    }
}
