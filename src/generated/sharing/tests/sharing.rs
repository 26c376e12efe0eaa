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

//! Exercise the `sharing` client against a local server.

#[cfg(test)]
mod tests {
    use auth::credentials::testing::test_credentials;
    use dropbox_sdk_files::model::LookupError;
    use dropbox_sdk_sharing::client::Sharing;
    use dropbox_sdk_sharing::model::{
        AccessInheritance, AccessLevel, AclUpdatePolicy, CreateSharedLinkWithSettingsError,
        ListSharedLinksError, RequestedVisibility, ShareFolderError, ShareFolderJobStatus,
        ShareFolderLaunch, SharePathError, SharedLinkAlreadyExistsMetadata, SharedLinkMetadata,
        SharedLinkPolicy, SharedLinkSettings,
    };
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<Sharing> {
        let client = Sharing::builder()
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

    fn file_link() -> Value {
        json!({
            ".tag": "file",
            "url": "https://www.dropbox.com/s/2sn712vy1ovegw8/Prime_Numbers.txt?dl=0",
            "name": "Prime_Numbers.txt",
            "link_permissions": {
                "can_revoke": false,
                "resolved_visibility": {".tag": "public"},
                "allow_download": true,
                "can_allow_download": true,
                "can_disallow_download": false,
            },
            "client_modified": "2015-05-12T15:50:38Z",
            "server_modified": "2015-05-12T15:50:38Z",
            "rev": "a1c10ce0dd78",
            "size": 7212,
            "id": "id:a4ayc_80_OEAAAAAAAAAXw",
            "path_lower": "/homework/math/prime_numbers.txt",
        })
    }

    fn shared_folder(tag: &str, name: &str) -> Value {
        json!({
            ".tag": tag,
            "access_type": {".tag": "owner"},
            "is_inside_team_folder": false,
            "is_team_folder": false,
            "name": name,
            "path_lower": format!("/{}", name.to_lowercase()),
            "policy": {
                "acl_update_policy": {".tag": "owner"},
                "shared_link_policy": {".tag": "anyone"},
            },
            "preview_url": "https://www.dropbox.com/scl/fo/fir9vjelf",
            "shared_folder_id": "84528192421",
            "time_invited": "2016-01-20T00:00:00Z",
        })
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_shared_link_with_settings() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/sharing/create_shared_link_with_settings"),
                request::body(json_decoded(eq(json!({
                    "path": "/Prime_Numbers.txt",
                    "settings": {"requested_visibility": {".tag": "public"}},
                })))),
            ])
            .respond_with(json_encoded(file_link())),
        );

        let client = test_client(&server).await?;
        let settings =
            SharedLinkSettings::new().set_requested_visibility(RequestedVisibility::Public);
        let link = client
            .create_shared_link_with_settings()
            .set_path("/Prime_Numbers.txt")
            .set_settings(settings)
            .send()
            .await?;
        let file = match link {
            SharedLinkMetadata::File(f) => f,
            l => panic!("expected a file link, got {l:?}"),
        };
        assert_eq!(file.name, "Prime_Numbers.txt");
        assert_eq!(file.size, 7212);
        assert!(file.link_permissions.allow_download, "{file:?}");
        Ok(())
    }

    #[test_case(json!({".tag": "shared_link_already_exists"}), None; "without metadata")]
    #[test_case(
        json!({
            ".tag": "shared_link_already_exists",
            "shared_link_already_exists": {".tag": "other"},
        }),
        Some(SharedLinkAlreadyExistsMetadata::Other);
        "with metadata"
    )]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn shared_link_already_exists(
        error: Value,
        want: Option<SharedLinkAlreadyExistsMetadata>,
    ) -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/2/sharing/create_shared_link_with_settings",
            ))
            .respond_with(conflict(json!({
                "error_summary": "shared_link_already_exists/..",
                "error": error,
            }))),
        );

        let client = test_client(&server).await?;
        let err = client
            .create_shared_link_with_settings()
            .set_path("/a.txt")
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            err.endpoint(),
            Some(&CreateSharedLinkWithSettingsError::SharedLinkAlreadyExists(want))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_shared_links_path_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/sharing/list_shared_links"))
                .respond_with(conflict(json!({
                    "error_summary": "path/not_found/.",
                    "error": {".tag": "path", "path": {".tag": "not_found"}},
                }))),
        );

        let client = test_client(&server).await?;
        let err = client
            .list_shared_links()
            .set_path("/missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            err.endpoint(),
            Some(&ListSharedLinksError::Path(LookupError::NotFound))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_shared_links() -> Result<()> {
        let server = Server::run();
        let folder_link = json!({".tag": "folder", "name": "Math", "url": "https://db.tt/m"});
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/sharing/list_shared_links"))
                .respond_with(json_encoded(json!({
                    "links": [file_link(), folder_link],
                    "has_more": true,
                    "cursor": "ZtkX9_EHj3x7PMkVuFIhwKYXEpwpLwyxp9vMKomUhllil9q7eWiAu",
                }))),
        );

        let client = test_client(&server).await?;
        let result = client.list_shared_links().send().await?;
        let tags = result.links.iter().map(|l| l.tag()).collect::<Vec<_>>();
        assert_eq!(tags, vec!["file", "folder"]);
        assert!(result.has_more, "{result:?}");
        assert!(result.cursor.is_some(), "{result:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn revoke_shared_link() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/sharing/revoke_shared_link"),
                request::body(json_decoded(eq(json!({"url": "https://db.tt/abc"})))),
            ])
            .respond_with(status_code(200).body("null")),
        );

        let client = test_client(&server).await?;
        client
            .revoke_shared_link()
            .set_url("https://db.tt/abc")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_shared_link_file() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/sharing/get_shared_link_file"),
                request::headers(contains((
                    "dropbox-api-arg",
                    r#"{"url":"https://db.tt/abc","path":"/Prime_Numbers.txt"}"#
                ))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("Dropbox-API-Result", file_link().to_string())
                    .body("2 3 5 7"),
            ),
        );

        let client = test_client(&server).await?;
        let download = client
            .get_shared_link_file()
            .set_url("https://db.tt/abc")
            .set_path("/Prime_Numbers.txt")
            .send()
            .await?;
        assert_eq!(download.metadata().tag(), "file");
        assert_eq!(download.all_bytes().await?, "2 3 5 7");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn share_folder_async() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/sharing/share_folder"),
                request::body(json_decoded(eq(json!({
                    "path": "/example/workspace",
                    "acl_update_policy": {".tag": "editors"},
                    "force_async": true,
                    "access_inheritance": {".tag": "inherit"},
                })))),
            ])
            .respond_with(json_encoded(json!({
                ".tag": "async_job_id",
                "async_job_id": "34g83hc2...",
            }))),
        );

        let client = test_client(&server).await?;
        let launch = client
            .share_folder()
            .set_path("/example/workspace")
            .set_acl_update_policy(AclUpdatePolicy::Editors)
            .set_force_async(true)
            .send()
            .await?;
        assert_eq!(launch, ShareFolderLaunch::AsyncJobId("34g83hc2...".to_string()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn share_folder_already_shared() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/2/sharing/share_folder"))
                .respond_with(conflict(json!({
                    "error_summary": "bad_path/already_shared/..",
                    "error": {
                        ".tag": "bad_path",
                        "bad_path": shared_folder("already_shared", "Photos"),
                    },
                }))),
        );

        let client = test_client(&server).await?;
        let err = client
            .share_folder()
            .set_path("/Photos")
            .send()
            .await
            .unwrap_err();
        let folder = match err.endpoint() {
            Some(ShareFolderError::BadPath(SharePathError::AlreadyShared(f))) => f,
            _ => panic!("expected an already_shared error, got {err:?}"),
        };
        assert_eq!(folder.name, "Photos");
        assert_eq!(folder.path_lower.as_deref(), Some("/photos"));
        assert_eq!(folder.shared_folder_id, "84528192421");
        assert_eq!(folder.policy.acl_update_policy, AclUpdatePolicy::Owner);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn check_share_job_status_complete() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/2/sharing/check_share_job_status"),
                request::body(json_decoded(eq(json!({"async_job_id": "34g83hc2..."})))),
            ])
            .respond_with(json_encoded(shared_folder("complete", "dir"))),
        );

        let client = test_client(&server).await?;
        let status = client
            .check_share_job_status()
            .set_async_job_id("34g83hc2...")
            .send()
            .await?;
        let folder = match status {
            ShareFolderJobStatus::Complete(f) => f,
            s => panic!("expected a complete status, got {s:?}"),
        };
        assert_eq!(folder.name, "dir");
        assert_eq!(folder.access_type, AccessLevel::Owner);
        assert_eq!(folder.policy.shared_link_policy, SharedLinkPolicy::Anyone);
        assert_eq!(folder.access_inheritance, AccessInheritance::Inherit);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn check_share_job_status_missing_required_field() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/2/sharing/check_share_job_status",
            ))
            .respond_with(json_encoded(json!({".tag": "complete", "name": "dir"}))),
        );

        let client = test_client(&server).await?;
        let err = client
            .check_share_job_status()
            .set_async_job_id("34g83hc2...")
            .send()
            .await
            .unwrap_err();
        assert!(
            err.other().is_some_and(|e| e.is_deserialization()),
            "{err:?}"
        );
        Ok(())
    }
}
