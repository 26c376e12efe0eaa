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

//! Exercise the `users` client against a local server and with mocks.

#[cfg(test)]
mod tests {
    use auth::credentials::testing::test_credentials;
    use dropbox_sdk_users::client::Users;
    use dropbox_sdk_users::model::{
        AccountType, GetAccountBatchError, PaperAsFilesValue, SpaceAllocation, SpaceUsage,
        UserFeature, UserFeatureValue,
    };
    use gax::error::NoError;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wkt::common::{PathRoot, RootInfo};

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<Users> {
        let client = Users::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(test_credentials())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_current_account() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/users/get_current_account"),
                request::body(""),
            ])
            .respond_with(json_encoded(json!({
                "account_id": "dbid:AAH4f99T0taONIb-OurWxbNQ6ywGRopQngc",
                "name": {
                    "given_name": "Franz",
                    "surname": "Ferdinand",
                    "familiar_name": "Franz",
                    "display_name": "Franz Ferdinand (Personal)",
                    "abbreviated_name": "FF",
                },
                "email": "franz@dropbox.com",
                "email_verified": true,
                "disabled": false,
                "locale": "en",
                "referral_link": "https://db.tt/ZITNuhtI",
                "is_paired": true,
                "account_type": {".tag": "basic"},
                "root_info": {
                    ".tag": "user",
                    "root_namespace_id": "3235641",
                    "home_namespace_id": "3235641",
                },
                "country": "US",
            }))),
        );

        let client = test_client(&server).await?;
        let account = client.get_current_account().send().await?;
        assert_eq!(account.name.display_name, "Franz Ferdinand (Personal)");
        assert_eq!(account.account_type, AccountType::Basic);
        assert_eq!(account.country.as_deref(), Some("US"));
        assert!(account.team.is_none(), "{account:?}");
        match &account.root_info {
            RootInfo::User(u) => assert_eq!(u.root_namespace_id, "3235641"),
            r => panic!("expected user root info, got {r:?}"),
        }
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_space_usage() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/users/get_space_usage"))
                .respond_with(json_encoded(json!({
                    "used": 314159265,
                    "allocation": {".tag": "individual", "allocated": 10000000000_u64},
                }))),
        );

        let client = test_client(&server).await?;
        let usage = client.get_space_usage().send().await?;
        assert_eq!(usage.used, 314159265);
        match usage.allocation {
            SpaceAllocation::Individual(a) => assert_eq!(a.allocated, 10000000000),
            a => panic!("expected an individual allocation, got {a:?}"),
        }
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_account_batch_no_account() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/users/get_account_batch"),
                request::body(json_decoded(eq(json!({"account_ids": ["dbid:a", "dbid:b"]})))),
            ])
            .respond_with(
                status_code(409)
                    .append_header("Content-Type", "application/json")
                    .body(
                        json!({
                            "error_summary": "no_account/..",
                            "error": {".tag": "no_account", "no_account": "dbid:b"},
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_account_batch()
            .set_account_ids(["dbid:a", "dbid:b"])
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            err.endpoint(),
            Some(&GetAccountBatchError::NoAccount("dbid:b".to_string()))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn features_get_values() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/users/features/get_values"),
                request::body(json_decoded(eq(json!({
                    "features": [{".tag": "paper_as_files"}],
                })))),
            ])
            .respond_with(json_encoded(json!({
                "values": [{
                    ".tag": "paper_as_files",
                    "paper_as_files": {".tag": "enabled", "enabled": true},
                }],
            }))),
        );

        let client = test_client(&server).await?;
        let result = client
            .features_get_values()
            .set_features([UserFeature::PaperAsFiles])
            .send()
            .await?;
        let want = UserFeatureValue::PaperAsFiles(PaperAsFilesValue::Enabled(true));
        assert_eq!(result.values, vec![want]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn path_root() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/users/get_space_usage"),
                request::headers(contains((
                    "dropbox-api-path-root",
                    r#"{".tag":"namespace_id","namespace_id":"123"}"#
                ))),
            ])
            .respond_with(json_encoded(json!({
                "used": 1,
                "allocation": {".tag": "other"},
            }))),
        );

        let client = Users::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(test_credentials())
            .with_path_root(PathRoot::NamespaceId("123".to_string()))
            .build()
            .await?;
        let usage = client.get_space_usage().send().await?;
        assert_eq!(usage.allocation, SpaceAllocation::Other);
        Ok(())
    }

    mockall::mock! {
        #[derive(Debug)]
        Users {}
        impl dropbox_sdk_users::stub::Users for Users {
            async fn get_space_usage(&self, _options: RequestOptions) -> dropbox_sdk_users::RouteResult<Response<SpaceUsage>, NoError>;
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn mocked_space_usage() -> Result<()> {
        let mut mock = MockUsers::new();
        mock.expect_get_space_usage().return_once(|_| {
            let usage = SpaceUsage::new(SpaceAllocation::Other).set_used(7_u64);
            Ok(Response::from(usage))
        });

        let client = Users::from_stub(mock);
        let usage = client.get_space_usage().send().await?;
        assert_eq!(usage.used, 7);
        Ok(())
    }
}
