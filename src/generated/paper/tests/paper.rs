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

//! Exercise the deprecated `paper` routes against a local server.

#[cfg(test)]
mod tests {
    use auth::credentials::testing::test_credentials;
    use dropbox_sdk_paper::client::Paper;
    use dropbox_sdk_paper::model::{
        DocLookupError, ExportFormat, ImportFormat, ListPaperDocsArgs, ListPaperDocsSortBy,
    };
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<Paper> {
        let client = Paper::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(test_credentials())
            .build()
            .await?;
        Ok(client)
    }

    fn conflict(body: serde_json::Value) -> impl httptest::responders::Responder {
        status_code(409)
            .append_header("Content-Type", "application/json")
            .body(body.to_string())
    }

    #[test]
    fn list_args_defaults() -> Result<()> {
        let args = serde_json::from_value::<ListPaperDocsArgs>(json!({}))?;
        assert_eq!(args, ListPaperDocsArgs::new());
        assert_eq!(args.limit, 1000);
        assert_eq!(
            serde_json::to_value(&args)?,
            json!({
                "filter_by": {".tag": "docs_accessed"},
                "sort_by": {".tag": "accessed"},
                "sort_order": {".tag": "ascending"},
                "limit": 1000,
            })
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn docs_create() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/paper/docs/create"),
                request::headers(contains((
                    "dropbox-api-arg",
                    r#"{"import_format":{".tag":"markdown"}}"#
                ))),
                request::body("# Title\n\nBody"),
            ])
            .respond_with(json_encoded(json!({
                "doc_id": "uaSvRuxvnkFa12PTkBv5q",
                "revision": 456736745,
                "title": "Title",
            }))),
        );

        let client = test_client(&server).await?;
        let result = client
            .docs_create(ImportFormat::Markdown)
            .with_payload("# Title\n\nBody")
            .send()
            .await?;
        assert_eq!(result.doc_id, "uaSvRuxvnkFa12PTkBv5q");
        assert_eq!(result.revision, 456736745);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn docs_download() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/paper/docs/download"),
                request::headers(contains((
                    "dropbox-api-arg",
                    r#"{"doc_id":"doc-1","export_format":{".tag":"html"}}"#
                ))),
            ])
            .respond_with(
                status_code(200)
                    .append_header(
                        "Dropbox-API-Result",
                        json!({
                            "owner": "james@example.com",
                            "title": "Week one",
                            "revision": 2,
                            "mime_type": "text/html",
                        })
                        .to_string(),
                    )
                    .body("<h1>Week one</h1>"),
            ),
        );

        let client = test_client(&server).await?;
        let download = client
            .docs_download(ExportFormat::Html)
            .set_doc_id("doc-1")
            .send()
            .await?;
        assert_eq!(download.metadata().mime_type, "text/html");
        assert_eq!(download.all_bytes().await?, "<h1>Week one</h1>");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn docs_list() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/paper/docs/list"),
                request::body(json_decoded(eq(json!({
                    "filter_by": {".tag": "docs_accessed"},
                    "sort_by": {".tag": "modified"},
                    "sort_order": {".tag": "ascending"},
                    "limit": 100,
                })))),
            ])
            .respond_with(json_encoded(json!({
                "doc_ids": ["a", "b"],
                "cursor": {"value": "zHZvTPBnXilGgm1CmKa", "expiration": "2016-08-07T14:56:15Z"},
                "has_more": false,
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .docs_list()
            .set_sort_by(ListPaperDocsSortBy::Modified)
            .set_limit(100)
            .send()
            .await?;
        assert_eq!(response.doc_ids, vec!["a", "b"]);
        assert_eq!(
            response.cursor.expiration.map(|t| t.to_string()),
            Some("2016-08-07T14:56:15Z".to_string())
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn docs_list_conflict_without_error_type() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/paper/docs/list")).respond_with(
                conflict(json!({"error_summary": "other/..", "error": {".tag": "other"}})),
            ),
        );

        let client = test_client(&server).await?;
        let err = client.docs_list().send().await.unwrap_err();
        assert!(
            err.other().is_some_and(|e| e.is_deserialization()),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn docs_archive() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/paper/docs/archive"),
                request::body(json_decoded(eq(json!({"doc_id": "doc-1"})))),
            ])
            .times(2)
            .respond_with(cycle![
                status_code(200),
                conflict(json!({
                    "error_summary": "doc_not_found/",
                    "error": {".tag": "doc_not_found"},
                })),
            ]),
        );

        let client = test_client(&server).await?;
        client.docs_archive().set_doc_id("doc-1").send().await?;
        let err = client
            .docs_archive()
            .set_doc_id("doc-1")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.endpoint(), Some(&DocLookupError::DocNotFound));
        Ok(())
    }
}
