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

//! Static descriptions of the Dropbox API routes.
//!
//! Each namespace crate declares one [Route] constant per route. The
//! transport uses the descriptor to find the host, encode the argument, and
//! select the credentials.

use auth::credentials::AuthStyle;

/// The host serving a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Host {
    Api,
    Content,
    Notify,
}

impl Host {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Content => "content",
            Self::Notify => "notify",
        }
    }
}

/// How the argument and result of a route travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Argument and result are JSON bodies.
    Rpc,
    /// The argument is in the `Dropbox-API-Arg` header, the request body is
    /// the file content.
    Upload,
    /// The argument is in the `Dropbox-API-Arg` header, the result is in the
    /// `Dropbox-API-Result` header, the response body is the file content.
    Download,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rpc => "rpc",
            Self::Upload => "upload",
            Self::Download => "download",
        }
    }
}

const USER: &[AuthStyle] = &[AuthStyle::User];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub namespace: &'static str,
    pub name: &'static str,
    pub host: Host,
    pub style: Style,
    /// The authentication styles accepted by the route, in order of
    /// preference.
    pub auth: &'static [AuthStyle],
    /// The route replacing this one, if it is deprecated.
    pub deprecated_by: Option<&'static str>,
}

impl Route {
    /// A RPC-style route on the API host, using user authentication.
    pub const fn rpc(namespace: &'static str, name: &'static str) -> Self {
        Self {
            namespace,
            name,
            host: Host::Api,
            style: Style::Rpc,
            auth: USER,
            deprecated_by: None,
        }
    }

    /// An upload-style route on the content host, using user authentication.
    pub const fn upload(namespace: &'static str, name: &'static str) -> Self {
        Self {
            host: Host::Content,
            style: Style::Upload,
            ..Self::rpc(namespace, name)
        }
    }

    /// A download-style route on the content host, using user
    /// authentication.
    pub const fn download(namespace: &'static str, name: &'static str) -> Self {
        Self {
            host: Host::Content,
            style: Style::Download,
            ..Self::rpc(namespace, name)
        }
    }

    pub const fn with_host(self, host: Host) -> Self {
        Self { host, ..self }
    }

    pub const fn with_auth(self, auth: &'static [AuthStyle]) -> Self {
        Self { auth, ..self }
    }

    pub const fn with_deprecated_by(self, replacement: &'static str) -> Self {
        Self {
            deprecated_by: Some(replacement),
            ..self
        }
    }

    /// The route identifier, e.g. `files/list_folder`.
    pub fn id(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }

    /// The path component of the request URL.
    pub fn path(&self) -> String {
        format!("/2/{}/{}", self.namespace, self.name)
    }

    /// Returns false for routes that send no `Authorization` header.
    pub fn uses_credentials(&self) -> bool {
        self.auth.iter().any(|s| *s != AuthStyle::NoAuth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOAUTH: &[AuthStyle] = &[AuthStyle::NoAuth];

    #[test]
    fn rpc() {
        let route = Route::rpc("files", "list_folder/continue");
        assert_eq!(route.host, Host::Api);
        assert_eq!(route.style, Style::Rpc);
        assert_eq!(route.auth, &[AuthStyle::User]);
        assert_eq!(route.id(), "files/list_folder/continue");
        assert_eq!(route.path(), "/2/files/list_folder/continue");
        assert!(route.uses_credentials(), "{route:?}");
        assert!(route.deprecated_by.is_none(), "{route:?}");
    }

    #[test]
    fn content() {
        let route = Route::upload("files", "upload");
        assert_eq!(route.host, Host::Content);
        assert_eq!(route.style, Style::Upload);
        let route = Route::download("files", "download");
        assert_eq!(route.host, Host::Content);
        assert_eq!(route.style, Style::Download);
    }

    #[test]
    fn modifiers() {
        const LONGPOLL: Route = Route::rpc("files", "list_folder/longpoll")
            .with_host(Host::Notify)
            .with_auth(NOAUTH);
        assert_eq!(LONGPOLL.host, Host::Notify);
        assert!(!LONGPOLL.uses_credentials(), "{LONGPOLL:?}");

        const OLD: Route = Route::rpc("paper", "docs/list").with_deprecated_by("files/list_folder");
        assert_eq!(OLD.deprecated_by, Some("files/list_folder"));
    }

    #[test]
    fn as_str() {
        assert_eq!(Host::Notify.as_str(), "notify");
        assert_eq!(Style::Download.as_str(), "download");
    }
}
