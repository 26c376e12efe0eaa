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
//! Exercise the `team` client against a local server.

#[cfg(test)]
mod tests {
    use auth::credentials::testing::test_credentials;
    use dropbox_sdk_team::client::Team;
    use dropbox_sdk_team::model::{
        AdminTier, MembersGetInfoItem, MembersListContinueError, TeamMemberStatus,
        TeamMembershipType, UserSelectorArg,
    };
    use gax::options::RequestOptionsBuilder;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<Team> {
        let client = Team::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(test_credentials())
            .build()
            .await?;
        Ok(client)
    }

    fn profile(id: &str, email: &str, status: Value) -> Value {
        json!({
            "team_member_id": id,
            "account_id": "dbid:AAH4f99T0taONIb-OurWxbNQ6ywGRopQngc",
            "email": email,
            "email_verified": true,
            "status": status,
            "name": {
                "given_name": "Franz",
                "surname": "Ferdinand",
                "familiar_name": "Franz",
                "display_name": "Franz Ferdinand (Personal)",
                "abbreviated_name": "FF",
            },
            "membership_type": {".tag": "full"},
            "joined_on": "2015-05-12T15:50:38Z",
        })
    }

    fn member(id: &str, email: &str, status: Value) -> Value {
        json!({
            "profile": profile(id, email, status),
            "role": {".tag": "member_only"},
        })
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_info() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/team/get_info"),
                request::headers(contains(("authorization", "Bearer test-only-token"))),
                request::body(""),
            ])
            .respond_with(json_encoded(json!({
                "name": "Dropbox Inc.",
                "team_id": "dbtid:1234abcd",
                "num_licensed_users": 5,
                "num_provisioned_users": 2,
                "num_used_licenses": 1,
                "policies": {"office_addin": {".tag": "disabled"}},
            }))),
        );

        let client = test_client(&server).await?;
        let info = client.get_info().send().await?;
        assert_eq!(info.name, "Dropbox Inc.");
        assert_eq!(info.team_id, "dbtid:1234abcd");
        assert_eq!(info.num_licensed_users, 5);
        assert_eq!(info.num_provisioned_users, 2);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn select_admin_from_client() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/team/members/list"),
                request::headers(contains(("dropbox-api-select-admin", "dbmid:admin"))),
                request::headers(not(contains(key("dropbox-api-select-user")))),
            ])
            .respond_with(json_encoded(json!({
                "members": [],
                "cursor": "ZtkX9_EHj3x7PMkVuFIhwKYXEpwpLwyxp9vMKomUhllil9q7eWiAu",
                "has_more": false,
            }))),
        );

        let client = Team::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(test_credentials())
            .with_select_admin("dbmid:admin")
            .build()
            .await?;
        let list = client.members_list().send().await?;
        assert!(list.members.is_empty(), "{list:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn select_user_per_request() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/team/get_info"),
                request::headers(contains(("dropbox-api-select-user", "dbmid:member"))),
                request::headers(contains(("dropbox-api-select-admin", "dbmid:admin"))),
            ])
            .respond_with(json_encoded(json!({"name": "team", "team_id": "dbtid:1"}))),
        );

        let client = Team::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(test_credentials())
            .with_select_admin("dbmid:admin")
            .build()
            .await?;
        let info = client
            .get_info()
            .with_select_user("dbmid:member")
            .send()
            .await?;
        assert_eq!(info.name, "team");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn members_get_info() -> Result<()> {
        let server = Server::run();
        let found = profile("dbmid:FDFSVF-DFSDF", "tami@seagull.com", json!({".tag": "active"}));
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/team/members/get_info"),
                request::body(json_decoded(eq(json!({
                    "members": [
                        {".tag": "email", "email": "tami@seagull.com"},
                        {".tag": "team_member_id", "team_member_id": "dbmid:missing"},
                    ]
                })))),
            ])
            .respond_with(json_encoded(json!([
                {
                    ".tag": "member_info",
                    "profile": found,
                    "role": {".tag": "team_admin"},
                },
                {".tag": "id_not_found", "id_not_found": "dbmid:missing"},
            ]))),
        );

        let client = test_client(&server).await?;
        let items = client
            .members_get_info()
            .set_members([
                UserSelectorArg::Email("tami@seagull.com".to_string()),
                UserSelectorArg::TeamMemberId("dbmid:missing".to_string()),
            ])
            .send()
            .await?;
        assert_eq!(items.len(), 2, "{items:?}");
        let MembersGetInfoItem::MemberInfo(info) = &items[0] else {
            panic!("expected member info, got {:?}", items[0]);
        };
        assert_eq!(info.role, AdminTier::TeamAdmin);
        assert_eq!(info.profile.team_member_id, "dbmid:FDFSVF-DFSDF");
        assert_eq!(info.profile.status, TeamMemberStatus::Active);
        assert_eq!(info.profile.membership_type, TeamMembershipType::Full);
        assert_eq!(info.profile.name.display_name, "Franz Ferdinand (Personal)");
        assert!(info.profile.joined_on.is_some(), "{info:?}");
        assert_eq!(
            items[1],
            MembersGetInfoItem::IdNotFound("dbmid:missing".to_string())
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn members_list_then_continue() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/team/members/list"),
                request::body(json_decoded(eq(json!({
                    "limit": 1,
                    "include_removed": true,
                })))),
            ])
            .respond_with(json_encoded(json!({
                "members": [member("dbmid:a", "a@example.com", json!({".tag": "active"}))],
                "cursor": "cursor-1",
                "has_more": true,
            }))),
        );
        let removed = json!({
            ".tag": "removed",
            "is_recoverable": true,
            "is_disconnected": false,
        });
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/team/members/list/continue"),
                request::body(json_decoded(eq(json!({"cursor": "cursor-1"})))),
            ])
            .respond_with(json_encoded(json!({
                "members": [member("dbmid:b", "b@example.com", removed)],
                "cursor": "cursor-2",
                "has_more": false,
            }))),
        );

        let client = test_client(&server).await?;
        let first = client
            .members_list()
            .set_limit(1_u32)
            .set_include_removed(true)
            .send()
            .await?;
        assert!(first.has_more);
        assert_eq!(first.members[0].profile.email, "a@example.com");

        let next = client
            .members_list_continue()
            .set_cursor(first.cursor)
            .send()
            .await?;
        assert!(!next.has_more);
        let TeamMemberStatus::Removed(removed) = &next.members[0].profile.status else {
            panic!("expected a removed member, got {next:?}");
        };
        assert!(removed.is_recoverable);
        assert!(!removed.is_disconnected);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn members_list_continue_invalid_cursor() -> Result<()> {
        let server = Server::run();
        let body = json!({
            "error_summary": "invalid_cursor/...",
            "error": {".tag": "invalid_cursor"},
        });
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/team/members/list/continue"))
                .respond_with(
                    status_code(409)
                        .append_header("Content-Type", "application/json")
                        .body(body.to_string()),
                ),
        );

        let client = test_client(&server).await?;
        let err = client
            .members_list_continue()
            .set_cursor("stale")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.endpoint(), Some(&MembersListContinueError::InvalidCursor));
        assert_eq!(err.error_summary(), Some("invalid_cursor/..."));
        Ok(())
    }
}
