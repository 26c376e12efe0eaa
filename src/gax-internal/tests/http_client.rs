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

//! Exercise the HTTP transport against a local server.

#[cfg(test)]
mod tests {
    use auth::credentials::AuthStyle;
    use auth::credentials::testing::{error_credentials, test_credentials};
    use bytes::Bytes;
    use dropbox_sdk_gax_internal::http::ReqwestClient;
    use dropbox_sdk_gax_internal::options::ClientConfig;
    use dropbox_sdk_gax_internal::route::{Host, Route};
    use gax::error::{NoError, RouteError};
    use gax::options::RequestOptions;
    use http::HeaderMap;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::{Value, json};
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    const GET_METADATA: Route = Route::rpc("files", "get_metadata");
    const GET_CURRENT_ACCOUNT: Route = Route::rpc("users", "get_current_account");
    const UPLOAD: Route = Route::upload("files", "upload");
    const DOWNLOAD: Route = Route::download("files", "download");
    const LONGPOLL: Route = Route::rpc("files", "list_folder/longpoll")
        .with_host(Host::Notify)
        .with_auth(&[AuthStyle::NoAuth]);
    const CHECK_APP: Route = Route::rpc("check", "app").with_auth(&[AuthStyle::App]);
    const DOCS_LIST: Route = Route::rpc("paper", "docs/list").with_deprecated_by("files/list_folder");

    fn test_config(server: &Server) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.cred = Some(test_credentials());
        config
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn rpc() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/files/get_metadata"),
                request::headers(contains(("authorization", "Bearer test-only-token"))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({"path": "/a.txt"})))),
            ])
            .respond_with(json_encoded(json!({".tag": "file", "name": "a.txt"}))),
        );

        let client = ReqwestClient::new(test_config(&server)).await?;
        let response = client
            .rpc::<Value, Value, Value>(
                &GET_METADATA,
                Some(json!({"path": "/a.txt"})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(
            response.into_body(),
            json!({".tag": "file", "name": "a.txt"})
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn rpc_without_argument() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/users/get_current_account"),
                request::body(""),
            ])
            .respond_with(json_encoded(json!({"account_id": "dbid:123"}))),
        );

        let client = ReqwestClient::new(test_config(&server)).await?;
        let response = client
            .rpc::<(), Value, NoError>(&GET_CURRENT_ACCOUNT, None, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), json!({"account_id": "dbid:123"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn rpc_without_result() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/files/get_metadata"))
                .respond_with(status_code(200).body("null")),
        );

        let client = ReqwestClient::new(test_config(&server)).await?;
        let response = client
            .rpc::<Value, (), NoError>(
                &GET_METADATA,
                Some(json!({"path": "/a.txt"})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.into_body(), ());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn upload() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/files/upload"),
                request::headers(contains(("authorization", "Bearer test-only-token"))),
                request::headers(contains(("content-type", "application/octet-stream"))),
                request::headers(contains((
                    "dropbox-api-arg",
                    r#"{"path":"/r\u00e9sum\u00e9.txt"}"#
                ))),
                request::body("file contents"),
            ])
            .respond_with(json_encoded(json!({"name": "résumé.txt", "size": 13}))),
        );

        let client = ReqwestClient::new(test_config(&server)).await?;
        let response = client
            .upload::<Value, Value, Value>(
                &UPLOAD,
                json!({"path": "/résumé.txt"}),
                Bytes::from_static(b"file contents"),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(
            response.into_body(),
            json!({"name": "résumé.txt", "size": 13})
        );
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

        let client = ReqwestClient::new(test_config(&server)).await?;
        let mut extra = HeaderMap::new();
        extra.insert(http::header::RANGE, "bytes=0-4".parse()?);
        let response = client
            .download::<Value, Value, NoError>(
                &DOWNLOAD,
                json!({"path": "/a.txt"}),
                extra,
                RequestOptions::default(),
            )
            .await?;
        let (metadata, content) = response.into_body().into_parts();
        assert_eq!(metadata, json!({"name": "a.txt", "size": 10}));
        assert_eq!(content.all_bytes().await?, Bytes::from_static(b"01234"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn noauth_route() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/files/list_folder/longpoll"),
                request::headers(not(contains(key("authorization")))),
            ])
            .respond_with(json_encoded(json!({"changes": false}))),
        );

        let mut config = test_config(&server);
        config.cred = Some(error_credentials(false));
        let client = ReqwestClient::new(config).await?;
        let response = client
            .rpc::<Value, Value, Value>(
                &LONGPOLL,
                Some(json!({"cursor": "abc", "timeout": 30})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.into_body(), json!({"changes": false}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn app_route() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/check/app"),
                request::headers(contains(("authorization", "Basic a2V5OnNlY3JldA=="))),
            ])
            .respond_with(json_encoded(json!({"result": "ping"}))),
        );

        let mut config = test_config(&server);
        config.cred = Some(auth::credentials::app_key::Builder::new("key", "secret").build());
        let client = ReqwestClient::new(config).await?;
        let response = client
            .rpc::<Value, Value, NoError>(
                &CHECK_APP,
                Some(json!({"query": "ping"})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.into_body(), json!({"result": "ping"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn app_route_with_access_token() -> Result<()> {
        let server = Server::run();
        let client = ReqwestClient::new(test_config(&server)).await?;
        let err = client
            .rpc::<Value, Value, NoError>(
                &CHECK_APP,
                Some(json!({"query": "ping"})),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err, RouteError::Other(ref e) if e.is_authentication()),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn credentials_error() -> Result<()> {
        let server = Server::run();
        let mut config = test_config(&server);
        config.cred = Some(error_credentials(true));
        let client = ReqwestClient::new(config).await?;
        let err = client
            .rpc::<Value, Value, NoError>(&GET_METADATA, Some(json!({})), RequestOptions::default())
            .await
            .unwrap_err();
        let e = err.other().expect("expected a gax error");
        assert!(e.is_authentication(), "{e:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn team_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/files/get_metadata"),
                request::headers(contains(("dropbox-api-select-user", "dbmid:request"))),
                request::headers(contains(("dropbox-api-select-admin", "dbmid:admin"))),
                request::headers(contains((
                    "dropbox-api-path-root",
                    r#"{".tag":"namespace_id","namespace_id":"123"}"#
                ))),
                request::headers(contains(("user-agent", "test-agent/1.0"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let mut config = test_config(&server);
        config.select_user = Some("dbmid:client".to_string());
        config.select_admin = Some("dbmid:admin".to_string());
        config.path_root = Some(wkt::common::PathRoot::NamespaceId("123".to_string()));
        config.user_agent = Some("test-agent/1.0".to_string());
        let client = ReqwestClient::new(config).await?;

        let mut options = RequestOptions::default();
        options.set_select_user("dbmid:request");
        let response = client
            .rpc::<Value, Value, NoError>(&GET_METADATA, Some(json!({})), options)
            .await?;
        assert_eq!(response.into_body(), json!({}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn endpoint_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/files/get_metadata"))
                .respond_with(status_code(409).body(
                    json!({
                        "error_summary": "path/not_found/..",
                        "error": {".tag": "path", "path": {".tag": "not_found"}},
                    })
                    .to_string(),
                )),
        );

        let client = ReqwestClient::new(test_config(&server)).await?;
        let err = client
            .rpc::<Value, Value, Value>(&GET_METADATA, Some(json!({})), RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.endpoint(),
            Some(&json!({".tag": "path", "path": {".tag": "not_found"}}))
        );
        assert_eq!(err.error_summary(), Some("path/not_found/.."));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn server_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/files/get_metadata"))
                .respond_with(status_code(503).body("try again later")),
        );

        let client = ReqwestClient::new(test_config(&server)).await?;
        let err = client
            .rpc::<Value, Value, NoError>(&GET_METADATA, Some(json!({})), RequestOptions::default())
            .await
            .unwrap_err();
        let e = err.other().expect("expected a gax error");
        assert_eq!(e.http_status_code(), Some(503));
        assert_eq!(e.error_summary(), Some("try again later"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn bad_result() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/files/get_metadata"))
                .respond_with(status_code(200).body("not json")),
        );

        let client = ReqwestClient::new(test_config(&server)).await?;
        let err = client
            .rpc::<Value, Value, NoError>(&GET_METADATA, Some(json!({})), RequestOptions::default())
            .await
            .unwrap_err();
        let e = err.other().expect("expected a gax error");
        assert!(e.is_deserialization(), "{e:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempt_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/files/get_metadata"))
                .respond_with(delay_and_then(
                    Duration::from_secs(5),
                    json_encoded(json!({})),
                )),
        );

        let client = ReqwestClient::new(test_config(&server)).await?;
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let err = client
            .rpc::<Value, Value, NoError>(&GET_METADATA, Some(json!({})), options)
            .await
            .unwrap_err();
        let e = err.other().expect("expected a gax error");
        assert!(e.is_timeout(), "{e:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn connection_refused() -> Result<()> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{addr}"));
        config.cred = Some(test_credentials());
        let client = ReqwestClient::new(config).await?;
        let err = client
            .rpc::<Value, Value, NoError>(&GET_METADATA, Some(json!({})), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(
            matches!(err, RouteError::Other(ref e) if e.is_io()),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn deprecated_route_with_tracing() -> Result<()> {
        let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
        let _guard = tracing::subscriber::set_default(subscriber);
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/paper/docs/list"))
                .respond_with(json_encoded(json!({"doc_ids": []}))),
        );

        let mut config = test_config(&server);
        config.tracing = true;
        let client = ReqwestClient::new(config).await?;
        let response = client
            .rpc::<Value, Value, NoError>(&DOCS_LIST, Some(json!({})), RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), json!({"doc_ids": []}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn bad_endpoint() {
        let mut config = ClientConfig::default();
        config.endpoint = Some("not a url".to_string());
        config.cred = Some(test_credentials());
        let err = ReqwestClient::new(config).await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
    }
}
