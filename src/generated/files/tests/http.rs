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

//! Exercise the `files` client against a local server.

#[cfg(test)]
mod tests {
    use auth::credentials::testing::{error_credentials, test_credentials};
    use dropbox_sdk_files::client::Files;
    use dropbox_sdk_files::model::{
        GetMetadataError, LookupError, Metadata, SaveUrlJobStatus, WriteMode,
    };
    use gax::error::auth::AuthError;
    use gax::options::RequestOptionsBuilder;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<Files> {
        let client = Files::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(test_credentials())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_metadata_file() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/files/get_metadata"),
                request::headers(contains(("authorization", "Bearer test-only-token"))),
                request::headers(contains(("user-agent", matches("^dropbox-sdk-files/")))),
                request::body(json_decoded(|v: &Value| v["path"] == "/a.txt")),
            ])
            .respond_with(json_encoded(json!({
                ".tag": "file",
                "name": "a.txt",
                "id": "id:abc",
                "size": 10,
                "rev": "a1c10ce0dd78",
                "client_modified": "2015-05-12T15:50:38Z",
                "server_modified": "2015-05-12T15:50:38Z",
            }))),
        );

        let client = test_client(&server).await?;
        let metadata = client.get_metadata().set_path("/a.txt").send().await?;
        let file = match metadata {
            Metadata::File(f) => f,
            m => panic!("expected a file, got {m:?}"),
        };
        assert_eq!(file.name, "a.txt");
        assert_eq!(file.size, 10);
        assert_eq!(file.rev, "a1c10ce0dd78");
        assert!(file.is_downloadable, "{file:?}");
        assert_eq!(file.client_modified.to_string(), "2015-05-12T15:50:38Z");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_metadata_unknown_tag() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/files/get_metadata"))
                .respond_with(json_encoded(json!({".tag": "shortcut", "name": "a.lnk"}))),
        );

        let client = test_client(&server).await?;
        let metadata = client.get_metadata().set_path("/a.lnk").send().await?;
        assert_eq!(metadata, Metadata::UnknownValue("shortcut".to_string()));
        assert_eq!(metadata.tag(), "shortcut");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_metadata_malformed_path() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/files/get_metadata"))
                .respond_with(
                    status_code(409)
                        .append_header("Content-Type", "application/json")
                        .body(
                            json!({
                                "error_summary": "path/malformed_path/..",
                                "error": {
                                    ".tag": "path",
                                    "path": {".tag": "malformed_path", "malformed_path": "/x"},
                                },
                            })
                            .to_string(),
                        ),
                ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_metadata()
            .set_path("/x")
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            err.endpoint(),
            Some(&GetMetadataError::Path(LookupError::MalformedPath(Some(
                "/x".to_string()
            ))))
        );
        assert_eq!(err.error_summary(), Some("path/malformed_path/.."));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn expired_access_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/files/get_metadata"))
                .respond_with(
                    status_code(401)
                        .append_header("Content-Type", "application/json")
                        .body(
                            json!({
                                "error_summary": "expired_access_token/",
                                "error": {".tag": "expired_access_token"},
                            })
                            .to_string(),
                        ),
                ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_metadata()
            .set_path("/a.txt")
            .send()
            .await
            .unwrap_err();
        let other = err.other().expect("not an endpoint error");
        assert_eq!(other.auth_error(), Some(&AuthError::ExpiredAccessToken));
        assert_eq!(other.http_status_code(), Some(401));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn save_url_complete() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/files/save_url/check_job_status"),
                request::body(json_decoded(eq(json!({"async_job_id": "job-123"})))),
            ])
            .respond_with(json_encoded(json!({
                ".tag": "complete",
                "name": "f",
                "size": 42,
            }))),
        );

        let client = test_client(&server).await?;
        let status = client
            .save_url_check_job_status()
            .set_async_job_id("job-123")
            .send()
            .await?;
        let file = match status {
            SaveUrlJobStatus::Complete(f) => f,
            s => panic!("expected a complete status, got {s:?}"),
        };
        assert_eq!(file.name, "f");
        assert_eq!(file.size, 42);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_folder_longpoll_sends_no_credentials() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/files/list_folder/longpoll"),
                request::headers(not(contains(key("authorization")))),
                request::body(json_decoded(eq(json!({"cursor": "abc", "timeout": 30})))),
            ])
            .respond_with(json_encoded(json!({"changes": true, "backoff": 60}))),
        );

        let client = Files::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(error_credentials(false))
            .build()
            .await?;
        let result = client.list_folder_longpoll().set_cursor("abc").send().await?;
        assert!(result.changes, "{result:?}");
        assert_eq!(result.backoff, Some(60));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn upload() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/files/upload"),
                request::headers(contains(("content-type", "application/octet-stream"))),
                request::headers(contains(("dropbox-api-arg", matches(r#""path":"/a.txt""#)))),
                request::headers(contains((
                    "dropbox-api-arg",
                    matches(r#""mode":\{".tag":"overwrite"\}"#)
                ))),
                request::body("hello"),
            ])
            .respond_with(json_encoded(json!({"name": "a.txt", "size": 5}))),
        );

        let client = test_client(&server).await?;
        let file = client
            .upload()
            .set_path("/a.txt")
            .set_mode(WriteMode::Overwrite)
            .with_payload("hello")
            .send()
            .await?;
        assert_eq!(file.name, "a.txt");
        assert_eq!(file.size, 5);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn download() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/files/download"),
                request::headers(contains(("dropbox-api-arg", r#"{"path":"/a.txt"}"#))),
                request::headers(contains(("range", "bytes=0-4"))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("Dropbox-API-Result", r#"{"name":"a.txt","size":10}"#)
                    .body("01234"),
            ),
        );

        let client = test_client(&server).await?;
        let download = client
            .download()
            .set_path("/a.txt")
            .with_range("bytes=0-4")
            .send()
            .await?;
        assert_eq!(download.metadata().name, "a.txt");
        assert_eq!(download.metadata().size, 10);
        assert_eq!(download.all_bytes().await?, bytes::Bytes::from_static(b"01234"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn select_user() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/files/delete_v2"),
                request::headers(contains(("dropbox-api-select-user", "dbmid:member"))),
            ])
            .respond_with(json_encoded(json!({
                "metadata": {".tag": "deleted", "name": "a.txt"},
            }))),
        );

        let client = test_client(&server).await?;
        let result = client
            .delete_v2()
            .set_path("/a.txt")
            .with_select_user("dbmid:member")
            .send()
            .await?;
        assert_eq!(result.metadata.tag(), "deleted");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn tracing_enabled() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/files/get_metadata"))
                .respond_with(json_encoded(json!({".tag": "folder", "name": "Photos"}))),
        );

        let client = Files::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(test_credentials())
            .with_tracing()
            .build()
            .await?;
        let metadata = client.get_metadata().set_path("/Photos").send().await?;
        assert_eq!(metadata.tag(), "folder");
        Ok(())
    }
}
