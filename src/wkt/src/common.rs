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

//! Types shared by all namespaces.

use crate::tagged_union;

tagged_union! {
    /// Selects the namespace used to resolve paths.
    ///
    /// Sent in the `Dropbox-API-Path-Root` header.
    pub enum PathRoot {
        /// Paths are relative to the authenticating user's home namespace,
        /// whether or not that user belongs to a team.
        "home" => Home,
        /// Paths are relative to the authenticating user's root namespace. This
        /// results in `PathRootError::InvalidRoot` if the user's root namespace
        /// has changed.
        "root" => Root(nested String),
        /// Paths are relative to given namespace id. This results in
        /// `PathRootError::NoPermission` if you don't have access to this
        /// namespace.
        "namespace_id" => NamespaceId(nested String),
    }
}

tagged_union! {
    pub enum PathRootError {
        /// The root namespace id in the `Dropbox-API-Path-Root` header is not
        /// valid. The value of this error is the user's latest root info.
        "invalid_root" => InvalidRoot(nested RootInfo),
        /// You don't have permission to access the namespace id in the
        /// `Dropbox-API-Path-Root` header.
        "no_permission" => NoPermission,
        "other" => Other,
    }
}

tagged_union! {
    /// Information about the current root namespace of a user.
    pub enum RootInfo {
        /// Root info when user is member of a team with a separate root
        /// namespace id.
        "team" => Team(flat TeamRootInfo),
        /// Root info when user is not member of a team or the user is a member of
        /// a team and the team does not have a separate root namespace.
        "user" => User(flat UserRootInfo),
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TeamRootInfo {
    /// The namespace id for user's root namespace.
    pub root_namespace_id: String,
    /// The namespace id for user's home namespace.
    pub home_namespace_id: String,
    /// The path for user's home directory under the shared team root.
    pub home_path: String,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UserRootInfo {
    pub root_namespace_id: String,
    pub home_namespace_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    type Result = anyhow::Result<()>;

    #[test]
    fn path_root() -> Result {
        let got = serde_json::to_value(PathRoot::NamespaceId("123".into()))?;
        assert_eq!(got, json!({".tag": "namespace_id", "namespace_id": "123"}));
        let got = serde_json::to_value(PathRoot::Home)?;
        assert_eq!(got, json!({".tag": "home"}));
        Ok(())
    }

    #[test]
    fn invalid_root() -> Result {
        let input = json!({
            ".tag": "invalid_root",
            "invalid_root": {
                ".tag": "team",
                "root_namespace_id": "1",
                "home_namespace_id": "2",
                "home_path": "/Alice",
            }
        });
        let got = serde_json::from_value::<PathRootError>(input.clone())?;
        let PathRootError::InvalidRoot(RootInfo::Team(info)) = &got else {
            panic!("unexpected value {got:?}");
        };
        assert_eq!(info.home_path, "/Alice");
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }
}
