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

// Verify `ClientBuilder` can be used outside the crate.
#[cfg(test)]
mod tests {
    use dropbox_sdk_gax as gax;
    use gax::client_builder::internal::ClientConfig;
    use wkt::common::PathRoot;

    #[tokio::test]
    async fn default() -> anyhow::Result<()> {
        let client = MyClient::builder().build().await?;
        assert_eq!(client.endpoint, None);
        assert_eq!(client.select_user, None);
        assert_eq!(client.path_root, None);
        Ok(())
    }

    #[tokio::test]
    async fn with_options() -> anyhow::Result<()> {
        let client = MyClient::builder()
            .with_endpoint("abc123")
            .with_select_user("dbmid:abc")
            .with_path_root(PathRoot::Home)
            .build()
            .await?;
        assert_eq!(client.endpoint.as_deref(), Some("abc123"));
        assert_eq!(client.select_user.as_deref(), Some("dbmid:abc"));
        assert_eq!(client.path_root, Some(PathRoot::Home));
        Ok(())
    }

    #[tokio::test]
    async fn factory_error() {
        let got = MyClient::builder()
            .with_credentials(Credential { valid: false })
            .build()
            .await;
        assert!(matches!(&got, Err(e) if e.is_default_credentials()));
    }

    pub struct Credential {
        valid: bool,
    }

    pub struct MyClient {
        endpoint: Option<String>,
        select_user: Option<String>,
        path_root: Option<PathRoot>,
    }
    impl MyClient {
        pub fn builder() -> my_client::Builder {
            gax::client_builder::internal::new_builder(my_client::Factory)
        }

        async fn new(config: ClientConfig<Credential>) -> gax::client_builder::Result<Self> {
            if config.cred.as_ref().is_some_and(|c| !c.valid) {
                return Err(gax::client_builder::Error::cred("invalid credentials"));
            }
            Ok(Self {
                endpoint: config.endpoint,
                select_user: config.select_user,
                path_root: config.path_root,
            })
        }
    }
    mod my_client {
        use super::gax;
        pub type Builder = gax::client_builder::ClientBuilder<Factory, super::Credential>;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = super::MyClient;
            type Credentials = super::Credential;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}
