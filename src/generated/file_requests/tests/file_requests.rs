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

//! Exercise the `file_requests` client against a local server.

#[cfg(test)]
mod tests {
    use auth::credentials::testing::test_credentials;
    use dropbox_sdk_file_requests::client::FileRequests;
    use dropbox_sdk_file_requests::model::{
        DeleteFileRequestError, FileRequestDeadline, GracePeriod, ListFileRequestsContinueError,
        UpdateFileRequestDeadline,
    };
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<FileRequests> {
        let client = FileRequests::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(test_credentials())
            .build()
            .await?;
        Ok(client)
    }

    fn conflict(body: Value) -> impl httptest::responders::Responder {
        status_code(409)
            .append_header("Content-Type", "application/json")
            .body(body.to_string())
    }

    fn file_request() -> Value {
        json!({
            "id": "oaCAVmEyrqYnkZX9955Y",
            "url": "https://www.dropbox.com/request/oaCAVmEyrqYnkZX9955Y",
            "title": "Homework submission",
            "destination": "/File Requests/Homework",
            "created": "2015-10-05T17:00:00Z",
            "deadline": {
                "deadline": "2020-10-12T17:00:00Z",
                "allow_late_uploads": {".tag": "seven_days"},
            },
            "is_open": true,
            "file_count": 3,
        })
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn count() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/file_requests/count"),
                request::body(""),
            ])
            .respond_with(json_encoded(json!({"file_request_count": 15}))),
        );

        let client = test_client(&server).await?;
        let result = client.count().send().await?;
        assert_eq!(result.file_request_count, 15);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/file_requests/create"),
                request::body(json_decoded(eq(json!({
                    "title": "Homework submission",
                    "destination": "/File Requests/Homework",
                    "deadline": {
                        "deadline": "2020-10-12T17:00:00Z",
                        "allow_late_uploads": {".tag": "seven_days"},
                    },
                    "open": true,
                })))),
            ])
            .respond_with(json_encoded(file_request())),
        );

        let client = test_client(&server).await?;
        let deadline = FileRequestDeadline::new()
            .set_deadline(wkt::Timestamp::try_from("2020-10-12T17:00:00Z")?)
            .set_allow_late_uploads(GracePeriod::SevenDays);
        let request = client
            .create()
            .set_title("Homework submission")
            .set_destination("/File Requests/Homework")
            .set_deadline(deadline.clone())
            .send()
            .await?;
        assert_eq!(request.id, "oaCAVmEyrqYnkZX9955Y");
        assert_eq!(request.deadline, Some(deadline));
        assert!(request.is_open, "{request:?}");
        assert_eq!(request.file_count, 3);
        Ok(())
    }

    #[test_case(UpdateFileRequestDeadline::NoUpdate, json!({".tag": "no_update"}); "no update")]
    #[test_case(UpdateFileRequestDeadline::Update(None), json!({".tag": "update"}); "clear")]
    #[test_case(
        UpdateFileRequestDeadline::Update(Some(FileRequestDeadline::new())),
        json!({".tag": "update", "update": {"deadline": "1970-01-01T00:00:00Z"}});
        "set"
    )]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update(deadline: UpdateFileRequestDeadline, want: Value) -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/file_requests/update"),
                request::body(json_decoded(eq(json!({
                    "id": "oaCAVmEyrqYnkZX9955Y",
                    "deadline": want,
                    "open": false,
                })))),
            ])
            .respond_with(json_encoded(file_request())),
        );

        let client = test_client(&server).await?;
        let request = client
            .update()
            .set_id("oaCAVmEyrqYnkZX9955Y")
            .set_deadline(deadline)
            .set_open(false)
            .send()
            .await?;
        assert_eq!(request.title, "Homework submission");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_and_continue() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/file_requests/list_v2"),
                request::body(json_decoded(eq(json!({"limit": 1000})))),
            ])
            .respond_with(json_encoded(json!({
                "file_requests": [file_request()],
                "cursor": "ZtkX9_EHj3x7PMkVuFIhwKYXEpwpLwyxp9vMKomUhllil9q7eWiAu",
                "has_more": true,
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/file_requests/list/continue"),
                request::body(json_decoded(eq(json!({
                    "cursor": "ZtkX9_EHj3x7PMkVuFIhwKYXEpwpLwyxp9vMKomUhllil9q7eWiAu",
                })))),
            ])
            .respond_with(conflict(json!({
                "error_summary": "invalid_cursor/",
                "error": {".tag": "invalid_cursor"},
            }))),
        );

        let client = test_client(&server).await?;
        let page = client.list_v2().send().await?;
        assert_eq!(page.file_requests.len(), 1);
        assert!(page.has_more, "{page:?}");
        let err = client
            .list_continue()
            .set_cursor(page.cursor)
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            err.endpoint(),
            Some(&ListFileRequestsContinueError::InvalidCursor)
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_open_request() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/file_requests/delete"),
                request::body(json_decoded(eq(json!({"ids": ["a", "b"]})))),
            ])
            .respond_with(conflict(json!({
                "error_summary": "file_request_open/",
                "error": {".tag": "file_request_open"},
            }))),
        );

        let client = test_client(&server).await?;
        let err = client
            .delete()
            .set_ids(["a", "b"])
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.endpoint(), Some(&DeleteFileRequestError::FileRequestOpen));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_all_closed() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/2/file_requests/delete_all_closed",
            ))
            .respond_with(json_encoded(json!({"file_requests": []}))),
        );

        let client = test_client(&server).await?;
        let result = client.delete_all_closed().send().await?;
        assert!(result.file_requests.is_empty(), "{result:?}");
        Ok(())
    }
}
