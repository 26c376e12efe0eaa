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

//! Verify applications can mock the `files` client.

#[cfg(test)]
mod tests {
    use dropbox_sdk_files::client::Files;
    use dropbox_sdk_files::model::{
        FileMetadata, GetMetadataArg, GetMetadataError, LookupError, Metadata,
    };
    use gax::error::{ApiError, RouteError};
    use gax::options::RequestOptions;
    use gax::response::Response;
    use pretty_assertions::assert_eq;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        Files {}
        impl dropbox_sdk_files::stub::Files for Files {
            async fn get_metadata(&self, req: GetMetadataArg, _options: RequestOptions) -> dropbox_sdk_files::RouteResult<Response<Metadata>, GetMetadataError>;
            async fn download(&self, req: dropbox_sdk_files::model::DownloadArg, headers: http::HeaderMap, _options: RequestOptions) -> dropbox_sdk_files::RouteResult<Response<gax::download::Download<FileMetadata>>, dropbox_sdk_files::model::DownloadError>;
        }
    }

    /// The function under test.
    async fn file_size(client: &Files, path: &str) -> anyhow::Result<Option<u64>> {
        let metadata = client.get_metadata().set_path(path).send().await;
        match metadata {
            Ok(Metadata::File(f)) => Ok(Some(f.size)),
            Ok(_) => Ok(None),
            Err(RouteError::Endpoint(e))
                if matches!(e.error, GetMetadataError::Path(LookupError::NotFound)) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn get_metadata() -> Result<()> {
        let mut mock = MockFiles::new();
        mock.expect_get_metadata()
            .withf(|r, _| r.path == "/a.txt" && !r.include_deleted)
            .return_once(|_, _| {
                Ok(Response::from(Metadata::File(
                    FileMetadata::new().set_name("a.txt").set_size(10_u64),
                )))
            });
        mock.expect_get_metadata()
            .withf(|r, _| r.path == "/missing")
            .return_once(|_, _| {
                Err(RouteError::Endpoint(
                    ApiError::new(GetMetadataError::Path(LookupError::NotFound))
                        .set_error_summary("path/not_found/.."),
                ))
            });

        let client = Files::from_stub(mock);
        assert_eq!(file_size(&client, "/a.txt").await?, Some(10));
        assert_eq!(file_size(&client, "/missing").await?, None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn get_metadata_other_error() {
        let mut mock = MockFiles::new();
        mock.expect_get_metadata()
            .return_once(|_, _| Err(RouteError::Other(gax::error::Error::timeout("simulated"))));

        let client = Files::from_stub(mock);
        let err = file_size(&client, "/a.txt").await.unwrap_err();
        assert!(err.to_string().contains("simulated"), "{err:?}");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn download_with_range() -> Result<()> {
        let mut mock = MockFiles::new();
        mock.expect_download()
            .withf(|r, headers, _| {
                r.path == "/a.txt"
                    && headers.get(http::header::RANGE).map(|v| v.as_bytes())
                        == Some(b"bytes=0-1".as_slice())
            })
            .return_once(|_, _, _| {
                Ok(Response::from(gax::download::Download::from_bytes(
                    FileMetadata::new().set_name("a.txt").set_size(10_u64),
                    "01",
                )))
            });

        let client = Files::from_stub(mock);
        let download = client
            .download()
            .set_path("/a.txt")
            .with_range("bytes=0-1")
            .send()
            .await?;
        assert_eq!(download.metadata().name, "a.txt");
        assert_eq!(download.all_bytes().await?, bytes::Bytes::from_static(b"01"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn download_with_invalid_range() {
        let mock = MockFiles::new();
        let client = Files::from_stub(mock);
        let err = client
            .download()
            .set_path("/a.txt")
            .with_range("bytes=\n0-1")
            .send()
            .await
            .unwrap_err();
        assert!(
            matches!(err, RouteError::Other(ref e) if e.is_serialization()),
            "{err:?}"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    #[should_panic]
    async fn unimplemented() {
        #[derive(Debug)]
        struct Empty;
        impl dropbox_sdk_files::stub::Files for Empty {}

        let client = Files::from_stub(Empty);
        let _ = client.create_folder_v2().set_path("/a").send().await;
    }
}
