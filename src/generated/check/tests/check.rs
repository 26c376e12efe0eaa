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

//! Exercise the `check` client against a local server.

#[cfg(test)]
mod tests {
    use auth::credentials::app_key;
    use auth::credentials::testing::test_credentials;
    use dropbox_sdk_check::client::Check;
    use gax::error::RouteError;
    use gax::options::RequestOptionsBuilder;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    fn endpoint(server: &Server) -> String {
        format!("http://{}", server.addr())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn app() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/check/app"),
                request::headers(contains(("authorization", "Basic a2V5OnNlY3JldA=="))),
                request::body(json_decoded(eq(json!({"query": "ping"})))),
            ])
            .respond_with(json_encoded(json!({"result": "ping"}))),
        );

        let client = Check::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(app_key::Builder::new("key", "secret").build())
            .build()
            .await?;
        let response = client.app().set_query("ping").send().await?;
        assert_eq!(response.result, "ping");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn app_requires_app_credentials() -> Result<()> {
        let server = Server::run();
        let client = Check::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(test_credentials())
            .build()
            .await?;
        let err = client.app().set_query("ping").send().await.unwrap_err();
        assert!(
            matches!(err, RouteError::Other(ref e) if e.is_authentication()),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/check/user"),
                request::headers(contains(("authorization", "Bearer test-only-token"))),
                request::headers(contains(("user-agent", "my-app/1.0"))),
            ])
            .respond_with(json_encoded(json!({"result": "pong"}))),
        );

        let client = Check::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(test_credentials())
            .with_user_agent("my-app/1.0")
            .build()
            .await?;
        let response = client.user().set_query("pong").send().await?;
        assert_eq!(response.result, "pong");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user_agent_per_request() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/check/user"),
                request::headers(contains(("user-agent", "override/2.0"))),
            ])
            .respond_with(json_encoded(json!({"result": ""}))),
        );

        let client = Check::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(test_credentials())
            .with_user_agent("my-app/1.0")
            .build()
            .await?;
        let response = client
            .user()
            .with_user_agent("override/2.0")
            .send()
            .await?;
        assert_eq!(response.result, "");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn server_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/check/user"))
                .respond_with(status_code(503).body("try again later")),
        );

        let client = Check::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(test_credentials())
            .build()
            .await?;
        let err = client.user().send().await.unwrap_err();
        let other = err.other().expect("not an endpoint error");
        assert_eq!(other.http_status_code(), Some(503));
        assert_eq!(other.error_summary(), Some("try again later"));
        Ok(())
    }
}
