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

//! This namespace contains endpoints and data types for creating and managing shared links and shared folders.

use wkt::tagged_union;

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateSharedLinkWithSettingsArg {
    /// The path to be shared by the shared link.
    pub path: String,

    /// The requested settings for the newly created shared link.
    pub settings: std::option::Option<SharedLinkSettings>,
}

impl CreateSharedLinkWithSettingsArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][CreateSharedLinkWithSettingsArg::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [settings][CreateSharedLinkWithSettingsArg::settings].
    pub fn set_settings<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<SharedLinkSettings>,
    {
        self.settings = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [settings][CreateSharedLinkWithSettingsArg::settings].
    pub fn set_or_clear_settings<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<SharedLinkSettings>,
    {
        self.settings = v.map(|x| x.into());
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SharedLinkSettings {
    /// Boolean flag to enable or disable password protection.
    pub require_password: std::option::Option<bool>,

    /// If [require_password][Self::require_password] is true, this is needed to
    /// specify the password to access the link.
    pub link_password: std::option::Option<String>,

    /// Expiration time of the shared link. By default the link won't expire.
    pub expires: std::option::Option<wkt::Timestamp>,

    /// The new audience who can benefit from the access level specified by the
    /// link's access level specified in the `link_access_level` field of
    /// [LinkPermissions]. This is used in conjunction with team policies and
    /// shared folder policies to determine the final effective audience type in
    /// the `effective_audience` field of [LinkPermissions].
    pub audience: std::option::Option<LinkAudience>,

    /// Requested access level you want the audience to gain from this link.
    /// Note, modifying access level for an existing link is not supported.
    pub access: std::option::Option<RequestedLinkAccessLevel>,

    /// Use [audience][Self::audience] instead. The requested access for this
    /// shared link.
    pub requested_visibility: std::option::Option<RequestedVisibility>,

    /// Boolean flag to allow or not download capabilities for shared links.
    pub allow_download: std::option::Option<bool>,
}

impl SharedLinkSettings {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [require_password][SharedLinkSettings::require_password].
    pub fn set_require_password<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.require_password = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [require_password][SharedLinkSettings::require_password].
    pub fn set_or_clear_require_password<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.require_password = v.map(|x| x.into());
        self
    }

    /// Sets the value of [link_password][SharedLinkSettings::link_password].
    pub fn set_link_password<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.link_password = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [link_password][SharedLinkSettings::link_password].
    pub fn set_or_clear_link_password<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.link_password = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expires][SharedLinkSettings::expires].
    pub fn set_expires<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.expires = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expires][SharedLinkSettings::expires].
    pub fn set_or_clear_expires<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.expires = v.map(|x| x.into());
        self
    }

    /// Sets the value of [audience][SharedLinkSettings::audience].
    pub fn set_audience<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<LinkAudience>,
    {
        self.audience = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [audience][SharedLinkSettings::audience].
    pub fn set_or_clear_audience<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<LinkAudience>,
    {
        self.audience = v.map(|x| x.into());
        self
    }

    /// Sets the value of [access][SharedLinkSettings::access].
    pub fn set_access<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<RequestedLinkAccessLevel>,
    {
        self.access = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [access][SharedLinkSettings::access].
    pub fn set_or_clear_access<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<RequestedLinkAccessLevel>,
    {
        self.access = v.map(|x| x.into());
        self
    }

    /// Sets the value of [requested_visibility][SharedLinkSettings::requested_visibility].
    pub fn set_requested_visibility<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<RequestedVisibility>,
    {
        self.requested_visibility = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [requested_visibility][SharedLinkSettings::requested_visibility].
    pub fn set_or_clear_requested_visibility<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<RequestedVisibility>,
    {
        self.requested_visibility = v.map(|x| x.into());
        self
    }

    /// Sets the value of [allow_download][SharedLinkSettings::allow_download].
    pub fn set_allow_download<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.allow_download = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [allow_download][SharedLinkSettings::allow_download].
    pub fn set_or_clear_allow_download<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.allow_download = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    pub enum CreateSharedLinkWithSettingsError {
        "path" => Path(nested dropbox_sdk_files::model::LookupError),
        /// This user's email address is not verified. This functionality is
        /// only available on accounts with a verified email address. Users can
        /// verify their email address in the Dropbox web settings.
        "email_not_verified" => EmailNotVerified,
        /// The shared link already exists. You can call
        /// [list_shared_links][crate::client::Sharing::list_shared_links] to
        /// get the existing link, or use the provided metadata if it is
        /// returned.
        "shared_link_already_exists" => SharedLinkAlreadyExists(
            nested Option<SharedLinkAlreadyExistsMetadata>
        ),
        /// There is an error with the given settings.
        "settings_error" => SettingsError(nested SharedLinkSettingsError),
        /// The user is not allowed to create a shared link to the specified
        /// file. For example, this can occur if the file is restricted or if
        /// the user's links are banned.
        "access_denied" => AccessDenied,
    }
}

tagged_union! {
    pub enum SharedLinkAlreadyExistsMetadata {
        /// Metadata of the shared link that already exists.
        "metadata" => Metadata(nested SharedLinkMetadata),
        "other" => Other,
    }
}

tagged_union! {
    pub enum SharedLinkSettingsError {
        /// The given settings are invalid (for example, all attributes of the
        /// [SharedLinkSettings] are empty, the requested visibility is
        /// [RequestedVisibility::Password] but the
        /// [link_password][SharedLinkSettings::link_password] is missing,
        /// [expires][SharedLinkSettings::expires] is set to the past, etc.).
        "invalid_settings" => InvalidSettings,
        /// User is not allowed to modify the settings of this link. Note that
        /// basic users can only set [RequestedVisibility::Public] as the
        /// [requested_visibility][SharedLinkSettings::requested_visibility] and
        /// cannot set [expires][SharedLinkSettings::expires].
        "not_authorized" => NotAuthorized,
    }
}

tagged_union! {
    /// The metadata of a shared link.
    pub enum SharedLinkMetadata {
        "file" => File(flat FileLinkMetadata),
        "folder" => Folder(flat FolderLinkMetadata),
        "other" => Other,
    }
}

/// The metadata of a file shared link.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FileLinkMetadata {
    /// URL of the shared link.
    pub url: String,

    /// A unique identifier for the linked file.
    pub id: std::option::Option<String>,

    /// The linked file name (including extension). This never contains a slash.
    pub name: String,

    /// Expiration time, if set. By default the link won't expire.
    pub expires: std::option::Option<wkt::Timestamp>,

    /// The lowercased full path in the user's Dropbox. This always starts with
    /// a slash. This field will only be present only if the linked file is in
    /// the authenticated user's dropbox.
    pub path_lower: std::option::Option<String>,

    /// The link's access permissions.
    pub link_permissions: LinkPermissions,

    /// The modification time set by the desktop client when the file was added
    /// to Dropbox. Since this time is not verified (the Dropbox server stores
    /// whatever the desktop client sends up), this should only be used for
    /// display purposes (such as sorting) and not, for example, to determine if
    /// a file has changed or not.
    pub client_modified: wkt::Timestamp,

    /// The last time the file was modified on Dropbox.
    pub server_modified: wkt::Timestamp,

    /// A unique identifier for the current revision of a file. This field is
    /// the same rev as elsewhere in the API and can be used to detect changes
    /// and avoid conflicts.
    pub rev: String,

    /// The file size in bytes.
    pub size: u64,
}

impl FileLinkMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [url][FileLinkMetadata::url].
    pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }

    /// Sets the value of [id][FileLinkMetadata::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][FileLinkMetadata::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][FileLinkMetadata::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [expires][FileLinkMetadata::expires].
    pub fn set_expires<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.expires = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expires][FileLinkMetadata::expires].
    pub fn set_or_clear_expires<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.expires = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path_lower][FileLinkMetadata::path_lower].
    pub fn set_path_lower<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_lower][FileLinkMetadata::path_lower].
    pub fn set_or_clear_path_lower<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = v.map(|x| x.into());
        self
    }

    /// Sets the value of [link_permissions][FileLinkMetadata::link_permissions].
    pub fn set_link_permissions<T: std::convert::Into<LinkPermissions>>(mut self, v: T) -> Self {
        self.link_permissions = v.into();
        self
    }

    /// Sets the value of [client_modified][FileLinkMetadata::client_modified].
    pub fn set_client_modified<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.client_modified = v.into();
        self
    }

    /// Sets the value of [server_modified][FileLinkMetadata::server_modified].
    pub fn set_server_modified<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.server_modified = v.into();
        self
    }

    /// Sets the value of [rev][FileLinkMetadata::rev].
    pub fn set_rev<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.rev = v.into();
        self
    }

    /// Sets the value of [size][FileLinkMetadata::size].
    pub fn set_size<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.size = v.into();
        self
    }
}

/// The metadata of a folder shared link.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FolderLinkMetadata {
    /// URL of the shared link.
    pub url: String,

    /// A unique identifier for the linked file.
    pub id: std::option::Option<String>,

    /// The linked file name (including extension). This never contains a slash.
    pub name: String,

    /// Expiration time, if set. By default the link won't expire.
    pub expires: std::option::Option<wkt::Timestamp>,

    /// The lowercased full path in the user's Dropbox. This always starts with
    /// a slash. This field will only be present only if the linked file is in
    /// the authenticated user's dropbox.
    pub path_lower: std::option::Option<String>,

    /// The link's access permissions.
    pub link_permissions: LinkPermissions,
}

impl FolderLinkMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [url][FolderLinkMetadata::url].
    pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }

    /// Sets the value of [id][FolderLinkMetadata::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][FolderLinkMetadata::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][FolderLinkMetadata::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [expires][FolderLinkMetadata::expires].
    pub fn set_expires<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.expires = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expires][FolderLinkMetadata::expires].
    pub fn set_or_clear_expires<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.expires = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path_lower][FolderLinkMetadata::path_lower].
    pub fn set_path_lower<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_lower][FolderLinkMetadata::path_lower].
    pub fn set_or_clear_path_lower<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = v.map(|x| x.into());
        self
    }

    /// Sets the value of [link_permissions][FolderLinkMetadata::link_permissions].
    pub fn set_link_permissions<T: std::convert::Into<LinkPermissions>>(mut self, v: T) -> Self {
        self.link_permissions = v.into();
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LinkPermissions {
    /// The current visibility of the link after considering the shared links
    /// policies of the team (in case the link's owner is part of a team) and
    /// the shared folder (in case the linked file is part of a shared folder).
    pub resolved_visibility: std::option::Option<ResolvedVisibility>,

    /// The shared link's requested visibility. This can be overridden by the
    /// team and shared folder policies.
    pub requested_visibility: std::option::Option<RequestedVisibility>,

    /// Whether the caller can revoke the shared link.
    pub can_revoke: bool,

    /// The failure reason for revoking the link. This field will only be
    /// present if [can_revoke][Self::can_revoke] is `false`.
    pub revoke_failure_reason: std::option::Option<SharedLinkAccessFailureReason>,

    /// The type of audience who can benefit from the access level specified by
    /// the `link_access_level` field.
    pub effective_audience: std::option::Option<LinkAudience>,

    /// The access level that the link will grant to its users. A link can grant
    /// additional rights to a user beyond their current access level.
    pub link_access_level: std::option::Option<LinkAccessLevel>,

    /// Whether the link can be downloaded or not.
    pub allow_download: bool,

    /// Whether the user can allow downloads via the link.
    pub can_allow_download: bool,

    /// Whether the user can disallow downloads via the link.
    pub can_disallow_download: bool,
}

impl LinkPermissions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resolved_visibility][LinkPermissions::resolved_visibility].
    pub fn set_resolved_visibility<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<ResolvedVisibility>,
    {
        self.resolved_visibility = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resolved_visibility][LinkPermissions::resolved_visibility].
    pub fn set_or_clear_resolved_visibility<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<ResolvedVisibility>,
    {
        self.resolved_visibility = v.map(|x| x.into());
        self
    }

    /// Sets the value of [requested_visibility][LinkPermissions::requested_visibility].
    pub fn set_requested_visibility<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<RequestedVisibility>,
    {
        self.requested_visibility = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [requested_visibility][LinkPermissions::requested_visibility].
    pub fn set_or_clear_requested_visibility<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<RequestedVisibility>,
    {
        self.requested_visibility = v.map(|x| x.into());
        self
    }

    /// Sets the value of [can_revoke][LinkPermissions::can_revoke].
    pub fn set_can_revoke<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.can_revoke = v.into();
        self
    }

    /// Sets the value of [revoke_failure_reason][LinkPermissions::revoke_failure_reason].
    pub fn set_revoke_failure_reason<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<SharedLinkAccessFailureReason>,
    {
        self.revoke_failure_reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [revoke_failure_reason][LinkPermissions::revoke_failure_reason].
    pub fn set_or_clear_revoke_failure_reason<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<SharedLinkAccessFailureReason>,
    {
        self.revoke_failure_reason = v.map(|x| x.into());
        self
    }

    /// Sets the value of [effective_audience][LinkPermissions::effective_audience].
    pub fn set_effective_audience<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<LinkAudience>,
    {
        self.effective_audience = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [effective_audience][LinkPermissions::effective_audience].
    pub fn set_or_clear_effective_audience<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<LinkAudience>,
    {
        self.effective_audience = v.map(|x| x.into());
        self
    }

    /// Sets the value of [link_access_level][LinkPermissions::link_access_level].
    pub fn set_link_access_level<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<LinkAccessLevel>,
    {
        self.link_access_level = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [link_access_level][LinkPermissions::link_access_level].
    pub fn set_or_clear_link_access_level<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<LinkAccessLevel>,
    {
        self.link_access_level = v.map(|x| x.into());
        self
    }

    /// Sets the value of [allow_download][LinkPermissions::allow_download].
    pub fn set_allow_download<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.allow_download = v.into();
        self
    }

    /// Sets the value of [can_allow_download][LinkPermissions::can_allow_download].
    pub fn set_can_allow_download<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.can_allow_download = v.into();
        self
    }

    /// Sets the value of [can_disallow_download][LinkPermissions::can_disallow_download].
    pub fn set_can_disallow_download<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.can_disallow_download = v.into();
        self
    }
}

tagged_union! {
    /// The actual access permissions values of shared links after taking into
    /// account user preferences and the team and shared folder settings.
    pub enum ResolvedVisibility {
        /// Anyone who has received the link can access it. No login required.
        "public" => Public,
        /// Only members of the same team can access the link. Login is
        /// required.
        "team_only" => TeamOnly,
        /// A link-specific password is required to access the link. Login is
        /// not required.
        "password" => Password,
        /// Only members of the same team who have the link-specific password
        /// can access the link. Login is required.
        "team_and_password" => TeamAndPassword,
        /// Only members of the shared folder containing the linked file can
        /// access the link. Login is required.
        "shared_folder_only" => SharedFolderOnly,
        /// The link merely points the user to the content, and does not grant
        /// any additional rights. Existing members of the content who use this
        /// link can only access the content with their pre-existing access
        /// rights. Either on the file directly, or inherited from a parent
        /// folder.
        "no_one" => NoOne,
        /// Only the current user can view this link.
        "only_you" => OnlyYou,
        "other" => Other,
    }
}

tagged_union! {
    /// The access permission that can be requested by the caller for the shared
    /// link.
    pub enum RequestedVisibility {
        /// Anyone who has received the link can access it. No login required.
        "public" => Public,
        /// Only members of the same team can access the link. Login is
        /// required.
        "team_only" => TeamOnly,
        /// A link-specific password is required to access the link. Login is
        /// not required.
        "password" => Password,
    }
}

tagged_union! {
    pub enum LinkAudience {
        /// Link is accessible by anyone.
        "public" => Public,
        /// Link is accessible only by team members.
        "team" => Team,
        /// The link can be used by no one. The link merely points the user to
        /// the content, and does not grant additional rights to the user.
        /// Members of the content who use this link can only access the content
        /// with their pre-existing access rights.
        "no_one" => NoOne,
        /// Use [require_password][SharedLinkSettings::require_password]
        /// instead. A link-specific password is required to access the link.
        /// Login is not required.
        "password" => Password,
        /// Link is accessible only by members of the content.
        "members" => Members,
        "other" => Other,
    }
}

tagged_union! {
    pub enum RequestedLinkAccessLevel {
        /// Users who use the link can view and comment on the content.
        "viewer" => Viewer,
        /// Users who use the link can edit, view and comment on the content.
        /// Note not all file types support edit links yet.
        "editor" => Editor,
        /// Request for the maximum access level you can set the link to.
        "max" => Max,
        /// Request for the default access level the user has set.
        "default" => Default,
        "other" => Other,
    }
}

tagged_union! {
    pub enum LinkAccessLevel {
        /// Users who use the link can view and comment on the content.
        "viewer" => Viewer,
        /// Users who use the link can edit, view and comment on the content.
        "editor" => Editor,
        "other" => Other,
    }
}

tagged_union! {
    pub enum SharedLinkAccessFailureReason {
        /// User is not logged in.
        "login_required" => LoginRequired,
        /// This user's email address is not verified. This functionality is
        /// only available on accounts with a verified email address. Users can
        /// verify their email address in the Dropbox web settings.
        "email_verify_required" => EmailVerifyRequired,
        /// The link is password protected.
        "password_required" => PasswordRequired,
        /// Access is allowed for team members only.
        "team_only" => TeamOnly,
        /// Access is allowed for the shared link's owner only.
        "owner_only" => OwnerOnly,
        "other" => Other,
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListSharedLinksArg {
    /// See [list_shared_links][crate::client::Sharing::list_shared_links]
    /// description.
    pub path: std::option::Option<String>,

    /// The cursor returned by your last call to
    /// [list_shared_links][crate::client::Sharing::list_shared_links].
    pub cursor: std::option::Option<String>,

    /// See [list_shared_links][crate::client::Sharing::list_shared_links]
    /// description.
    pub direct_only: std::option::Option<bool>,
}

impl ListSharedLinksArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][ListSharedLinksArg::path].
    pub fn set_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][ListSharedLinksArg::path].
    pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cursor][ListSharedLinksArg::cursor].
    pub fn set_cursor<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cursor = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cursor][ListSharedLinksArg::cursor].
    pub fn set_or_clear_cursor<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cursor = v.map(|x| x.into());
        self
    }

    /// Sets the value of [direct_only][ListSharedLinksArg::direct_only].
    pub fn set_direct_only<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.direct_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [direct_only][ListSharedLinksArg::direct_only].
    pub fn set_or_clear_direct_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.direct_only = v.map(|x| x.into());
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListSharedLinksResult {
    /// Shared links applicable to the path argument.
    pub links: Vec<SharedLinkMetadata>,

    /// Is true if there are additional shared links that have not been returned
    /// yet. Pass the cursor into
    /// [list_shared_links][crate::client::Sharing::list_shared_links] to
    /// retrieve them.
    pub has_more: bool,

    /// Pass the cursor into
    /// [list_shared_links][crate::client::Sharing::list_shared_links] to obtain
    /// the additional links. Cursor is returned only if no path is given.
    pub cursor: std::option::Option<String>,
}

impl ListSharedLinksResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [links][ListSharedLinksResult::links].
    pub fn set_links<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<SharedLinkMetadata>,
    {
        use std::iter::Iterator;
        self.links = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [has_more][ListSharedLinksResult::has_more].
    pub fn set_has_more<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.has_more = v.into();
        self
    }

    /// Sets the value of [cursor][ListSharedLinksResult::cursor].
    pub fn set_cursor<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cursor = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cursor][ListSharedLinksResult::cursor].
    pub fn set_or_clear_cursor<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cursor = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    pub enum ListSharedLinksError {
        "path" => Path(nested dropbox_sdk_files::model::LookupError),
        /// Indicates that the cursor has been invalidated. Call
        /// [list_shared_links][crate::client::Sharing::list_shared_links] to
        /// obtain a new cursor.
        "reset" => Reset,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RevokeSharedLinkArg {
    /// URL of the shared link.
    pub url: String,
}

impl RevokeSharedLinkArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [url][RevokeSharedLinkArg::url].
    pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }
}

tagged_union! {
    pub enum RevokeSharedLinkError {
        /// The shared link wasn't found.
        "shared_link_not_found" => SharedLinkNotFound,
        /// The caller is not allowed to access this shared link.
        "shared_link_access_denied" => SharedLinkAccessDenied,
        /// This type of link is not supported; use `files::export` instead.
        "unsupported_link_type" => UnsupportedLinkType,
        "other" => Other,
        /// Shared link is malformed.
        "shared_link_malformed" => SharedLinkMalformed,
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetSharedLinkMetadataArg {
    /// URL of the shared link.
    pub url: String,

    /// If the shared link is to a folder, this parameter can be used to
    /// retrieve the metadata for a specific file or sub-folder in this folder.
    /// A relative path should be used.
    pub path: std::option::Option<String>,

    /// If the shared link has a password, this parameter can be used.
    pub link_password: std::option::Option<String>,
}

impl GetSharedLinkMetadataArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [url][GetSharedLinkMetadataArg::url].
    pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }

    /// Sets the value of [path][GetSharedLinkMetadataArg::path].
    pub fn set_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][GetSharedLinkMetadataArg::path].
    pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [link_password][GetSharedLinkMetadataArg::link_password].
    pub fn set_link_password<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.link_password = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [link_password][GetSharedLinkMetadataArg::link_password].
    pub fn set_or_clear_link_password<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.link_password = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    pub enum GetSharedLinkFileError {
        /// The shared link wasn't found.
        "shared_link_not_found" => SharedLinkNotFound,
        /// The caller is not allowed to access this shared link.
        "shared_link_access_denied" => SharedLinkAccessDenied,
        /// This type of link is not supported; use `files::export` instead.
        "unsupported_link_type" => UnsupportedLinkType,
        "other" => Other,
        /// Directories cannot be retrieved by this endpoint.
        "shared_link_is_directory" => SharedLinkIsDirectory,
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ShareFolderArg {
    /// The path or the file id to the folder to share. If it does not exist,
    /// then a new one is created.
    pub path: String,

    /// Who can add and remove members of this shared folder.
    pub acl_update_policy: std::option::Option<AclUpdatePolicy>,

    /// Whether to force the share to happen asynchronously.
    pub force_async: bool,

    /// Who can be a member of this shared folder. Only applicable if the
    /// current user is on a team.
    pub member_policy: std::option::Option<MemberPolicy>,

    /// The policy to apply to shared links created for content inside this
    /// shared folder. The current user must be on a team to set this policy to
    /// [SharedLinkPolicy::Members].
    pub shared_link_policy: std::option::Option<SharedLinkPolicy>,

    /// Who can enable/disable viewer info for this shared folder.
    pub viewer_info_policy: std::option::Option<ViewerInfoPolicy>,

    /// The access inheritance settings for the folder.
    pub access_inheritance: AccessInheritance,
}

impl ShareFolderArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][ShareFolderArg::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [acl_update_policy][ShareFolderArg::acl_update_policy].
    pub fn set_acl_update_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<AclUpdatePolicy>,
    {
        self.acl_update_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [acl_update_policy][ShareFolderArg::acl_update_policy].
    pub fn set_or_clear_acl_update_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<AclUpdatePolicy>,
    {
        self.acl_update_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [force_async][ShareFolderArg::force_async].
    pub fn set_force_async<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.force_async = v.into();
        self
    }

    /// Sets the value of [member_policy][ShareFolderArg::member_policy].
    pub fn set_member_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<MemberPolicy>,
    {
        self.member_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [member_policy][ShareFolderArg::member_policy].
    pub fn set_or_clear_member_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<MemberPolicy>,
    {
        self.member_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [shared_link_policy][ShareFolderArg::shared_link_policy].
    pub fn set_shared_link_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<SharedLinkPolicy>,
    {
        self.shared_link_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [shared_link_policy][ShareFolderArg::shared_link_policy].
    pub fn set_or_clear_shared_link_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<SharedLinkPolicy>,
    {
        self.shared_link_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [viewer_info_policy][ShareFolderArg::viewer_info_policy].
    pub fn set_viewer_info_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<ViewerInfoPolicy>,
    {
        self.viewer_info_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [viewer_info_policy][ShareFolderArg::viewer_info_policy].
    pub fn set_or_clear_viewer_info_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<ViewerInfoPolicy>,
    {
        self.viewer_info_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [access_inheritance][ShareFolderArg::access_inheritance].
    pub fn set_access_inheritance<T: std::convert::Into<AccessInheritance>>(
        mut self,
        v: T,
    ) -> Self {
        self.access_inheritance = v.into();
        self
    }
}

tagged_union! {
    pub enum ShareFolderLaunch {
        /// This response indicates that the processing is asynchronous. The
        /// string is an id that can be used to obtain the status of the
        /// asynchronous job.
        "async_job_id" => AsyncJobId(nested String),
        "complete" => Complete(flat SharedFolderMetadata),
    }
}

tagged_union! {
    pub enum ShareFolderJobStatus {
        /// The asynchronous job is still in progress.
        "in_progress" => InProgress,
        /// The share job has finished. The value is the metadata for the
        /// folder.
        "complete" => Complete(flat SharedFolderMetadata),
        "failed" => Failed(nested ShareFolderError),
    }
}

tagged_union! {
    pub enum ShareFolderError {
        /// This user's email address is not verified. This functionality is
        /// only available on accounts with a verified email address. Users can
        /// verify their email address in the Dropbox web settings.
        "email_unverified" => EmailUnverified,
        /// The path to the folder is invalid.
        "bad_path" => BadPath(nested SharePathError),
        /// Team policy is more restrictive than
        /// [ShareFolderArg::member_policy].
        "team_policy_disallows_member_policy" => TeamPolicyDisallowsMemberPolicy,
        /// The current user's account is not allowed to select the specified
        /// [ShareFolderArg::shared_link_policy].
        "disallowed_shared_link_policy" => DisallowedSharedLinkPolicy,
        "other" => Other,
        /// The current user does not have permission to perform this action.
        "no_permission" => NoPermission,
    }
}

tagged_union! {
    pub enum SharePathError {
        /// A file is at the specified path.
        "is_file" => IsFile,
        /// We do not support sharing a folder inside a shared folder.
        "inside_shared_folder" => InsideSharedFolder,
        /// We do not support shared folders that contain shared folders.
        "contains_shared_folder" => ContainsSharedFolder,
        /// We do not support shared folders that contain app folders.
        "contains_app_folder" => ContainsAppFolder,
        /// We do not support shared folders that contain team folders.
        "contains_team_folder" => ContainsTeamFolder,
        /// We do not support sharing an app folder.
        "is_app_folder" => IsAppFolder,
        /// We do not support sharing a folder inside an app folder.
        "inside_app_folder" => InsideAppFolder,
        /// A public folder can't be shared this way. Use a public link instead.
        "is_public_folder" => IsPublicFolder,
        /// A folder inside a public folder can't be shared this way. Use a
        /// public link instead.
        "inside_public_folder" => InsidePublicFolder,
        /// Folder is already shared. Contains metadata about the existing
        /// shared folder.
        "already_shared" => AlreadyShared(flat SharedFolderMetadata),
        /// Path is not valid.
        "invalid_path" => InvalidPath,
        /// We do not support sharing a Mac OS X package.
        "is_osx_package" => IsOsxPackage,
        /// We do not support sharing a folder inside a Mac OS X package.
        "inside_osx_package" => InsideOsxPackage,
        /// We do not support sharing the Vault folder.
        "is_vault" => IsVault,
        /// We do not support sharing a folder inside a locked Vault.
        "is_vault_locked" => IsVaultLocked,
        /// We do not support sharing the Family folder.
        "is_family" => IsFamily,
        "other" => Other,
    }
}

/// The metadata which includes basic information about the shared folder.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SharedFolderMetadata {
    /// The current user's access level for this shared folder.
    pub access_type: AccessLevel,

    /// Whether this folder is inside of a team folder.
    pub is_inside_team_folder: bool,

    /// Whether this folder is a team folder.
    pub is_team_folder: bool,

    /// The display names of the users that own the folder. If the folder is
    /// part of a team folder, the display names of the team admins are also
    /// included. Absent if the owner display names cannot be fetched.
    pub owner_display_names: std::option::Option<Vec<String>>,

    /// The ID of the parent shared folder. This field is present only if the
    /// folder is contained within another shared folder.
    pub parent_shared_folder_id: std::option::Option<String>,

    /// The full path of this shared folder. Absent for unmounted folders.
    pub path_display: std::option::Option<String>,

    /// The lower-cased full path of this shared folder. Absent for unmounted
    /// folders.
    pub path_lower: std::option::Option<String>,

    /// The name of this shared folder.
    pub name: String,

    /// Policies governing this shared folder.
    pub policy: FolderPolicy,

    /// URL for displaying a web preview of the shared folder.
    pub preview_url: String,

    /// The ID of the shared folder.
    pub shared_folder_id: String,

    /// Timestamp indicating when the current user was invited to this shared
    /// folder.
    pub time_invited: wkt::Timestamp,

    /// Whether the folder inherits its members from its parent.
    #[serde(default = "shared_folder_metadata_access_inheritance")]
    pub access_inheritance: AccessInheritance,
}

impl SharedFolderMetadata {
    pub fn new(access_type: AccessLevel, policy: FolderPolicy) -> Self {
        Self {
            access_type,
            is_inside_team_folder: std::default::Default::default(),
            is_team_folder: std::default::Default::default(),
            owner_display_names: std::default::Default::default(),
            parent_shared_folder_id: std::default::Default::default(),
            path_display: std::default::Default::default(),
            path_lower: std::default::Default::default(),
            name: std::default::Default::default(),
            policy,
            preview_url: std::default::Default::default(),
            shared_folder_id: std::default::Default::default(),
            time_invited: std::default::Default::default(),
            access_inheritance: shared_folder_metadata_access_inheritance(),
        }
    }

    /// Sets the value of [access_type][SharedFolderMetadata::access_type].
    pub fn set_access_type<T: std::convert::Into<AccessLevel>>(mut self, v: T) -> Self {
        self.access_type = v.into();
        self
    }

    /// Sets the value of [is_inside_team_folder][SharedFolderMetadata::is_inside_team_folder].
    pub fn set_is_inside_team_folder<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_inside_team_folder = v.into();
        self
    }

    /// Sets the value of [is_team_folder][SharedFolderMetadata::is_team_folder].
    pub fn set_is_team_folder<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_team_folder = v.into();
        self
    }

    /// Sets the value of [owner_display_names][SharedFolderMetadata::owner_display_names].
    pub fn set_owner_display_names<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<Vec<String>>,
    {
        self.owner_display_names = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [owner_display_names][SharedFolderMetadata::owner_display_names].
    pub fn set_or_clear_owner_display_names<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<Vec<String>>,
    {
        self.owner_display_names = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parent_shared_folder_id][SharedFolderMetadata::parent_shared_folder_id].
    pub fn set_parent_shared_folder_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_shared_folder_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parent_shared_folder_id][SharedFolderMetadata::parent_shared_folder_id].
    pub fn set_or_clear_parent_shared_folder_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_shared_folder_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path_display][SharedFolderMetadata::path_display].
    pub fn set_path_display<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_display = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_display][SharedFolderMetadata::path_display].
    pub fn set_or_clear_path_display<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_display = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path_lower][SharedFolderMetadata::path_lower].
    pub fn set_path_lower<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_lower][SharedFolderMetadata::path_lower].
    pub fn set_or_clear_path_lower<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][SharedFolderMetadata::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [policy][SharedFolderMetadata::policy].
    pub fn set_policy<T: std::convert::Into<FolderPolicy>>(mut self, v: T) -> Self {
        self.policy = v.into();
        self
    }

    /// Sets the value of [preview_url][SharedFolderMetadata::preview_url].
    pub fn set_preview_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.preview_url = v.into();
        self
    }

    /// Sets the value of [shared_folder_id][SharedFolderMetadata::shared_folder_id].
    pub fn set_shared_folder_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.shared_folder_id = v.into();
        self
    }

    /// Sets the value of [time_invited][SharedFolderMetadata::time_invited].
    pub fn set_time_invited<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.time_invited = v.into();
        self
    }

    /// Sets the value of [access_inheritance][SharedFolderMetadata::access_inheritance].
    pub fn set_access_inheritance<T: std::convert::Into<AccessInheritance>>(
        mut self,
        v: T,
    ) -> Self {
        self.access_inheritance = v.into();
        self
    }
}

fn shared_folder_metadata_access_inheritance() -> AccessInheritance {
    AccessInheritance::Inherit
}

/// A set of policies governing membership and privileges for a shared folder.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct FolderPolicy {
    /// Who can be a member of this shared folder, as set on the folder itself.
    /// The effective policy may differ from this value if the team-wide policy
    /// is more restrictive. Present only if the folder is owned by a team.
    pub member_policy: std::option::Option<MemberPolicy>,

    /// Who can be a member of this shared folder, taking into account both the
    /// folder and the team-wide policy. This value may differ from that of
    /// member_policy if the team-wide policy is more restrictive than the
    /// folder policy. Present only if the folder is owned by a team.
    pub resolved_member_policy: std::option::Option<MemberPolicy>,

    /// Who can add and remove members from this shared folder.
    pub acl_update_policy: AclUpdatePolicy,

    /// Who links can be shared with.
    pub shared_link_policy: SharedLinkPolicy,

    /// Who can enable/disable viewer info for this shared folder.
    pub viewer_info_policy: std::option::Option<ViewerInfoPolicy>,
}

impl FolderPolicy {
    pub fn new(acl_update_policy: AclUpdatePolicy, shared_link_policy: SharedLinkPolicy) -> Self {
        Self {
            member_policy: std::default::Default::default(),
            resolved_member_policy: std::default::Default::default(),
            acl_update_policy,
            shared_link_policy,
            viewer_info_policy: std::default::Default::default(),
        }
    }

    /// Sets the value of [member_policy][FolderPolicy::member_policy].
    pub fn set_member_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<MemberPolicy>,
    {
        self.member_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [member_policy][FolderPolicy::member_policy].
    pub fn set_or_clear_member_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<MemberPolicy>,
    {
        self.member_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resolved_member_policy][FolderPolicy::resolved_member_policy].
    pub fn set_resolved_member_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<MemberPolicy>,
    {
        self.resolved_member_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resolved_member_policy][FolderPolicy::resolved_member_policy].
    pub fn set_or_clear_resolved_member_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<MemberPolicy>,
    {
        self.resolved_member_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [acl_update_policy][FolderPolicy::acl_update_policy].
    pub fn set_acl_update_policy<T: std::convert::Into<AclUpdatePolicy>>(mut self, v: T) -> Self {
        self.acl_update_policy = v.into();
        self
    }

    /// Sets the value of [shared_link_policy][FolderPolicy::shared_link_policy].
    pub fn set_shared_link_policy<T: std::convert::Into<SharedLinkPolicy>>(mut self, v: T) -> Self {
        self.shared_link_policy = v.into();
        self
    }

    /// Sets the value of [viewer_info_policy][FolderPolicy::viewer_info_policy].
    pub fn set_viewer_info_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<ViewerInfoPolicy>,
    {
        self.viewer_info_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [viewer_info_policy][FolderPolicy::viewer_info_policy].
    pub fn set_or_clear_viewer_info_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<ViewerInfoPolicy>,
    {
        self.viewer_info_policy = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    /// Defines the access levels for collaborators.
    pub enum AccessLevel {
        /// The collaborator is the owner of the shared folder. Owners can view
        /// and edit the shared folder as well as set the folder's policies
        /// using update_folder_policy.
        "owner" => Owner,
        /// The collaborator can both view and edit the shared folder.
        "editor" => Editor,
        /// The collaborator can only view the shared folder.
        "viewer" => Viewer,
        /// The collaborator can only view the shared folder and does not have
        /// any access to comments.
        "viewer_no_comment" => ViewerNoComment,
        /// The collaborator can only view the shared folder that they have
        /// access to.
        "traverse" => Traverse,
        /// If there is a Righteous Link on the folder which grants access and
        /// the user has visited such link, they are allowed to perform certain
        /// action (i.e. add themselves to the folder) via the link access even
        /// though the user themselves are not a member on the shared folder
        /// yet.
        "no_access" => NoAccess,
        "other" => Other,
    }
}

tagged_union! {
    /// Who can change a shared folder's access control list (ACL). In other
    /// words, who can add, remove, or change the privileges of members.
    pub enum AclUpdatePolicy {
        /// Only the owner can update the ACL.
        "owner" => Owner,
        /// Any editor can update the ACL. This may be further restricted to
        /// editors on the same team.
        "editors" => Editors,
        "other" => Other,
    }
}

tagged_union! {
    /// Policy governing who can be a member of a shared folder. Only applicable
    /// to folders owned by a user on a team.
    pub enum MemberPolicy {
        /// Only a teammate can become a member.
        "team" => Team,
        /// Anyone can become a member.
        "anyone" => Anyone,
        "other" => Other,
    }
}

tagged_union! {
    /// Who can view shared links in this folder.
    pub enum SharedLinkPolicy {
        /// Links can be shared with anyone.
        "anyone" => Anyone,
        /// Links can be shared with anyone on the same team as the owner.
        "team" => Team,
        /// Links can only be shared among members of the shared folder.
        "members" => Members,
        "other" => Other,
    }
}

tagged_union! {
    pub enum ViewerInfoPolicy {
        /// Viewer information is available on this file.
        "enabled" => Enabled,
        /// Viewer information is disabled on this file.
        "disabled" => Disabled,
        "other" => Other,
    }
}

tagged_union! {
    /// Information about the inheritance policy of a shared folder.
    #[derive(Default)]
    pub enum AccessInheritance {
        /// The shared folder inherits its members from the parent folder.
        #[default]
        "inherit" => Inherit,
        /// The shared folder does not inherit its members from the parent
        /// folder.
        "no_inherit" => NoInherit,
        "other" => Other,
    }
}
