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

use crate::route::Host;
use gax::client_builder::Error as BuilderError;
use http::Uri;
use std::str::FromStr;

pub(crate) const DEFAULT_API: &str = "https://api.dropboxapi.com";
pub(crate) const DEFAULT_CONTENT: &str = "https://content.dropboxapi.com";
pub(crate) const DEFAULT_NOTIFY: &str = "https://notify.dropboxapi.com";

/// The base URL for each [Host].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Hosts {
    api: String,
    content: String,
    notify: String,
}

impl Hosts {
    /// Uses the default hosts, or `endpoint` for all of them.
    pub(crate) fn new(endpoint: Option<&str>) -> gax::client_builder::Result<Self> {
        let Some(endpoint) = endpoint else {
            return Ok(Self {
                api: DEFAULT_API.to_string(),
                content: DEFAULT_CONTENT.to_string(),
                notify: DEFAULT_NOTIFY.to_string(),
            });
        };
        let origin = Uri::from_str(endpoint).map_err(BuilderError::transport)?;
        if origin.scheme().is_none() || origin.authority().is_none() {
            return Err(BuilderError::transport(format!(
                "missing scheme or authority in endpoint {endpoint}"
            )));
        }
        let base = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            api: base.clone(),
            content: base.clone(),
            notify: base,
        })
    }

    pub(crate) fn base(&self, host: Host) -> &str {
        match host {
            Host::Api => &self.api,
            Host::Content => &self.content,
            Host::Notify => &self.notify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let hosts = Hosts::new(None)?;
        assert_eq!(hosts.base(Host::Api), DEFAULT_API);
        assert_eq!(hosts.base(Host::Content), DEFAULT_CONTENT);
        assert_eq!(hosts.base(Host::Notify), DEFAULT_NOTIFY);
        Ok(())
    }

    #[test_case("http://127.0.0.1:8080", "http://127.0.0.1:8080")]
    #[test_case("http://127.0.0.1:8080/", "http://127.0.0.1:8080")]
    #[test_case("https://test.dropboxapi.com", "https://test.dropboxapi.com")]
    fn custom(input: &str, want: &str) -> anyhow::Result<()> {
        let hosts = Hosts::new(Some(input))?;
        assert_eq!(hosts.base(Host::Api), want);
        assert_eq!(hosts.base(Host::Content), want);
        assert_eq!(hosts.base(Host::Notify), want);
        Ok(())
    }

    #[test_case("")]
    #[test_case("not a url")]
    #[test_case("/only/a/path")]
    fn bad_endpoint(input: &str) {
        let got = Hosts::new(Some(input));
        assert!(matches!(got, Err(ref e) if e.is_transport()), "{got:?}");
    }
}
