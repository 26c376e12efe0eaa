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

//! This namespace contains endpoints and data types for basic file operations.

use wkt::tagged_union;

tagged_union! {
    /// Metadata for a file or folder.
    pub enum Metadata {
        "file" => File(flat FileMetadata),
        "folder" => Folder(flat FolderMetadata),
        "deleted" => Deleted(flat DeletedMetadata),
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FileMetadata {
    /// The last component of the path (including extension). This never
    /// contains a slash.
    pub name: String,

    /// A unique identifier for the file.
    pub id: String,

    /// For files, this is the modification time set by the desktop client when
    /// the file was added to Dropbox. Since this time is not verified (the
    /// Dropbox server stores whatever the desktop client sends up), this should
    /// only be used for display purposes (such as sorting) and not, for
    /// example, to determine if a file has changed or not.
    pub client_modified: wkt::Timestamp,

    /// The last time the file was modified on Dropbox.
    pub server_modified: wkt::Timestamp,

    /// A unique identifier for the current revision of a file. This field is
    /// the same rev as elsewhere in the API and can be used to detect changes
    /// and avoid conflicts.
    pub rev: String,

    /// The file size in bytes.
    pub size: u64,

    /// The lowercased full path in the user's Dropbox. This always starts with
    /// a slash. This field will be `None` if the file or folder is not mounted.
    pub path_lower: std::option::Option<String>,

    /// The cased path to be used for display purposes only. In rare instances
    /// the casing will not correctly match the user's filesystem, but this
    /// behavior will match the path provided in the Core API v1, and at least
    /// the last path component will have the correct casing. Changes to only
    /// the casing of paths won't be returned by list_folder/continue. This
    /// field will be `None` if the file or folder is not mounted.
    pub path_display: std::option::Option<String>,

    /// Please use [FileSharingInfo::parent_shared_folder_id] or
    /// [FolderSharingInfo::parent_shared_folder_id] instead.
    pub parent_shared_folder_id: std::option::Option<String>,

    /// The preview URL of the file.
    pub preview_url: std::option::Option<String>,

    /// Set if this file is contained in a shared folder.
    pub sharing_info: std::option::Option<FileSharingInfo>,

    /// If true, file can be downloaded directly; else the file must be
    /// exported.
    pub is_downloadable: bool,

    /// This flag will only be present if include_has_explicit_shared_members is
    /// true in [list_folder][crate::client::Files::list_folder] or
    /// [get_metadata][crate::client::Files::get_metadata]. If this flag is
    /// present, it will be true if this file has any explicit shared members.
    /// This is different from sharing_info in that this could be true in the
    /// case where a file has explicit members but is not contained within a
    /// shared folder.
    pub has_explicit_shared_members: std::option::Option<bool>,

    /// A hash of the file content. This field can be used to verify data
    /// integrity.
    pub content_hash: std::option::Option<String>,
}

impl std::default::Default for FileMetadata {
    fn default() -> Self {
        Self {
            name: std::default::Default::default(),
            id: std::default::Default::default(),
            client_modified: std::default::Default::default(),
            server_modified: std::default::Default::default(),
            rev: std::default::Default::default(),
            size: std::default::Default::default(),
            path_lower: std::default::Default::default(),
            path_display: std::default::Default::default(),
            parent_shared_folder_id: std::default::Default::default(),
            preview_url: std::default::Default::default(),
            sharing_info: std::default::Default::default(),
            is_downloadable: file_metadata_is_downloadable(),
            has_explicit_shared_members: std::default::Default::default(),
            content_hash: std::default::Default::default(),
        }
    }
}

impl FileMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][FileMetadata::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [id][FileMetadata::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [client_modified][FileMetadata::client_modified].
    pub fn set_client_modified<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.client_modified = v.into();
        self
    }

    /// Sets the value of [server_modified][FileMetadata::server_modified].
    pub fn set_server_modified<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.server_modified = v.into();
        self
    }

    /// Sets the value of [rev][FileMetadata::rev].
    pub fn set_rev<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.rev = v.into();
        self
    }

    /// Sets the value of [size][FileMetadata::size].
    pub fn set_size<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.size = v.into();
        self
    }

    /// Sets the value of [path_lower][FileMetadata::path_lower].
    pub fn set_path_lower<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_lower][FileMetadata::path_lower].
    pub fn set_or_clear_path_lower<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path_display][FileMetadata::path_display].
    pub fn set_path_display<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_display = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_display][FileMetadata::path_display].
    pub fn set_or_clear_path_display<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_display = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parent_shared_folder_id][FileMetadata::parent_shared_folder_id].
    pub fn set_parent_shared_folder_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_shared_folder_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parent_shared_folder_id][FileMetadata::parent_shared_folder_id].
    pub fn set_or_clear_parent_shared_folder_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_shared_folder_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [preview_url][FileMetadata::preview_url].
    pub fn set_preview_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.preview_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [preview_url][FileMetadata::preview_url].
    pub fn set_or_clear_preview_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.preview_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sharing_info][FileMetadata::sharing_info].
    pub fn set_sharing_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<FileSharingInfo>,
    {
        self.sharing_info = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sharing_info][FileMetadata::sharing_info].
    pub fn set_or_clear_sharing_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<FileSharingInfo>,
    {
        self.sharing_info = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_downloadable][FileMetadata::is_downloadable].
    pub fn set_is_downloadable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_downloadable = v.into();
        self
    }

    /// Sets the value of [has_explicit_shared_members][FileMetadata::has_explicit_shared_members].
    pub fn set_has_explicit_shared_members<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.has_explicit_shared_members = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [has_explicit_shared_members][FileMetadata::has_explicit_shared_members].
    pub fn set_or_clear_has_explicit_shared_members<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.has_explicit_shared_members = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_hash][FileMetadata::content_hash].
    pub fn set_content_hash<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.content_hash = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_hash][FileMetadata::content_hash].
    pub fn set_or_clear_content_hash<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.content_hash = v.map(|x| x.into());
        self
    }
}

fn file_metadata_is_downloadable() -> bool {
    true
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FolderMetadata {
    /// The last component of the path (including extension). This never
    /// contains a slash.
    pub name: String,

    /// A unique identifier for the folder.
    pub id: String,

    /// The lowercased full path in the user's Dropbox. This always starts with
    /// a slash. This field will be `None` if the file or folder is not mounted.
    pub path_lower: std::option::Option<String>,

    /// The cased path to be used for display purposes only. In rare instances
    /// the casing will not correctly match the user's filesystem, but this
    /// behavior will match the path provided in the Core API v1, and at least
    /// the last path component will have the correct casing. Changes to only
    /// the casing of paths won't be returned by list_folder/continue. This
    /// field will be `None` if the file or folder is not mounted.
    pub path_display: std::option::Option<String>,

    /// Please use [FileSharingInfo::parent_shared_folder_id] or
    /// [FolderSharingInfo::parent_shared_folder_id] instead.
    pub parent_shared_folder_id: std::option::Option<String>,

    /// The preview URL of the file.
    pub preview_url: std::option::Option<String>,

    /// Please use [sharing_info][Self::sharing_info] instead.
    pub shared_folder_id: std::option::Option<String>,

    /// Set if the folder is contained in a shared folder or is a shared folder
    /// mount point.
    pub sharing_info: std::option::Option<FolderSharingInfo>,
}

impl FolderMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][FolderMetadata::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [id][FolderMetadata::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [path_lower][FolderMetadata::path_lower].
    pub fn set_path_lower<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_lower][FolderMetadata::path_lower].
    pub fn set_or_clear_path_lower<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path_display][FolderMetadata::path_display].
    pub fn set_path_display<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_display = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_display][FolderMetadata::path_display].
    pub fn set_or_clear_path_display<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_display = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parent_shared_folder_id][FolderMetadata::parent_shared_folder_id].
    pub fn set_parent_shared_folder_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_shared_folder_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parent_shared_folder_id][FolderMetadata::parent_shared_folder_id].
    pub fn set_or_clear_parent_shared_folder_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_shared_folder_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [preview_url][FolderMetadata::preview_url].
    pub fn set_preview_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.preview_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [preview_url][FolderMetadata::preview_url].
    pub fn set_or_clear_preview_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.preview_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [shared_folder_id][FolderMetadata::shared_folder_id].
    pub fn set_shared_folder_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.shared_folder_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [shared_folder_id][FolderMetadata::shared_folder_id].
    pub fn set_or_clear_shared_folder_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.shared_folder_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sharing_info][FolderMetadata::sharing_info].
    pub fn set_sharing_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<FolderSharingInfo>,
    {
        self.sharing_info = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sharing_info][FolderMetadata::sharing_info].
    pub fn set_or_clear_sharing_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<FolderSharingInfo>,
    {
        self.sharing_info = v.map(|x| x.into());
        self
    }
}

/// Indicates that there used to be a file or folder at this path, but it no
/// longer exists.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeletedMetadata {
    /// The last component of the path (including extension). This never
    /// contains a slash.
    pub name: String,

    /// The lowercased full path in the user's Dropbox. This always starts with
    /// a slash. This field will be `None` if the file or folder is not mounted.
    pub path_lower: std::option::Option<String>,

    /// The cased path to be used for display purposes only. In rare instances
    /// the casing will not correctly match the user's filesystem, but this
    /// behavior will match the path provided in the Core API v1, and at least
    /// the last path component will have the correct casing. Changes to only
    /// the casing of paths won't be returned by list_folder/continue. This
    /// field will be `None` if the file or folder is not mounted.
    pub path_display: std::option::Option<String>,

    /// Please use [FileSharingInfo::parent_shared_folder_id] or
    /// [FolderSharingInfo::parent_shared_folder_id] instead.
    pub parent_shared_folder_id: std::option::Option<String>,

    /// The preview URL of the file.
    pub preview_url: std::option::Option<String>,
}

impl DeletedMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][DeletedMetadata::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [path_lower][DeletedMetadata::path_lower].
    pub fn set_path_lower<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_lower][DeletedMetadata::path_lower].
    pub fn set_or_clear_path_lower<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_lower = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path_display][DeletedMetadata::path_display].
    pub fn set_path_display<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_display = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path_display][DeletedMetadata::path_display].
    pub fn set_or_clear_path_display<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path_display = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parent_shared_folder_id][DeletedMetadata::parent_shared_folder_id].
    pub fn set_parent_shared_folder_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_shared_folder_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parent_shared_folder_id][DeletedMetadata::parent_shared_folder_id].
    pub fn set_or_clear_parent_shared_folder_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_shared_folder_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [preview_url][DeletedMetadata::preview_url].
    pub fn set_preview_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.preview_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [preview_url][DeletedMetadata::preview_url].
    pub fn set_or_clear_preview_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.preview_url = v.map(|x| x.into());
        self
    }
}

/// Sharing info for a file which is contained by a shared folder.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FileSharingInfo {
    /// True if the file or folder is inside a read-only shared folder.
    pub read_only: bool,

    /// ID of shared folder that holds this file.
    pub parent_shared_folder_id: String,

    /// The last user who modified the file. This field will be `None` if the
    /// user's account has been deleted.
    pub modified_by: std::option::Option<String>,
}

impl FileSharingInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [read_only][FileSharingInfo::read_only].
    pub fn set_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.read_only = v.into();
        self
    }

    /// Sets the value of [parent_shared_folder_id][FileSharingInfo::parent_shared_folder_id].
    pub fn set_parent_shared_folder_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.parent_shared_folder_id = v.into();
        self
    }

    /// Sets the value of [modified_by][FileSharingInfo::modified_by].
    pub fn set_modified_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.modified_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [modified_by][FileSharingInfo::modified_by].
    pub fn set_or_clear_modified_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.modified_by = v.map(|x| x.into());
        self
    }
}

/// Sharing info for a folder which is contained in a shared folder or is a
/// shared folder mount point.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FolderSharingInfo {
    /// True if the file or folder is inside a read-only shared folder.
    pub read_only: bool,

    /// Set if the folder is contained by a shared folder.
    pub parent_shared_folder_id: std::option::Option<String>,

    /// If this folder is a shared folder mount point, the ID of the shared
    /// folder mounted at this location.
    pub shared_folder_id: std::option::Option<String>,

    /// Specifies that the folder can only be traversed and the user can only
    /// see a limited subset of the contents of this folder because they don't
    /// have read access to this folder. They do, however, have access to some
    /// sub folder.
    pub traverse_only: bool,

    /// Specifies that the folder cannot be accessed by the user.
    pub no_access: bool,
}

impl FolderSharingInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [read_only][FolderSharingInfo::read_only].
    pub fn set_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.read_only = v.into();
        self
    }

    /// Sets the value of [parent_shared_folder_id][FolderSharingInfo::parent_shared_folder_id].
    pub fn set_parent_shared_folder_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_shared_folder_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parent_shared_folder_id][FolderSharingInfo::parent_shared_folder_id].
    pub fn set_or_clear_parent_shared_folder_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_shared_folder_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [shared_folder_id][FolderSharingInfo::shared_folder_id].
    pub fn set_shared_folder_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.shared_folder_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [shared_folder_id][FolderSharingInfo::shared_folder_id].
    pub fn set_or_clear_shared_folder_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.shared_folder_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [traverse_only][FolderSharingInfo::traverse_only].
    pub fn set_traverse_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.traverse_only = v.into();
        self
    }

    /// Sets the value of [no_access][FolderSharingInfo::no_access].
    pub fn set_no_access<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.no_access = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetMetadataArg {
    /// The path of a file or folder on Dropbox.
    pub path: String,

    /// If true, media info is set for photo and video.
    pub include_media_info: bool,

    /// If true, [DeletedMetadata] will be returned for deleted file or folder,
    /// otherwise [LookupError::NotFound] will be returned.
    pub include_deleted: bool,

    /// If true, the results will include a flag for each file indicating
    /// whether or not that file has any explicit members.
    pub include_has_explicit_shared_members: bool,
}

impl GetMetadataArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][GetMetadataArg::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [include_media_info][GetMetadataArg::include_media_info].
    pub fn set_include_media_info<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_media_info = v.into();
        self
    }

    /// Sets the value of [include_deleted][GetMetadataArg::include_deleted].
    pub fn set_include_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_deleted = v.into();
        self
    }

    /// Sets the value of [include_has_explicit_shared_members][GetMetadataArg::include_has_explicit_shared_members].
    pub fn set_include_has_explicit_shared_members<T: std::convert::Into<bool>>(
        mut self,
        v: T,
    ) -> Self {
        self.include_has_explicit_shared_members = v.into();
        self
    }
}

tagged_union! {
    pub enum GetMetadataError {
        "path" => Path(nested LookupError),
    }
}

tagged_union! {
    pub enum LookupError {
        /// The given path does not satisfy the required path format. Please
        /// refer to the Path formats documentation for more information.
        "malformed_path" => MalformedPath(nested Option<String>),
        /// There is nothing at the given path.
        "not_found" => NotFound,
        /// We were expecting a file, but the given path refers to something
        /// that isn't a file.
        "not_file" => NotFile,
        /// We were expecting a folder, but the given path refers to something
        /// that isn't a folder.
        "not_folder" => NotFolder,
        /// The file cannot be transferred because the content is restricted.
        /// For example, we might restrict a file due to legal requirements.
        "restricted_content" => RestrictedContent,
        /// This operation is not supported for this content type.
        "unsupported_content_type" => UnsupportedContentType,
        /// The given path is locked.
        "locked" => Locked,
        "other" => Other,
    }
}

tagged_union! {
    pub enum WriteError {
        /// The given path does not satisfy the required path format. Please
        /// refer to the Path formats documentation for more information.
        "malformed_path" => MalformedPath(nested Option<String>),
        /// Couldn't write to the target path because there was something in the
        /// way.
        "conflict" => Conflict(nested WriteConflictError),
        /// The user doesn't have permissions to write to the target location.
        "no_write_permission" => NoWritePermission,
        /// The user doesn't have enough available space (bytes) to write more
        /// data.
        "insufficient_space" => InsufficientSpace,
        /// Dropbox will not save the file or folder because of its name.
        "disallowed_name" => DisallowedName,
        /// This endpoint cannot move or delete team folders.
        "team_folder" => TeamFolder,
        /// This file operation is not allowed at this path.
        "operation_suppressed" => OperationSuppressed,
        /// There are too many write operations in user's Dropbox. Please retry
        /// this request.
        "too_many_write_operations" => TooManyWriteOperations,
        "other" => Other,
    }
}

tagged_union! {
    pub enum WriteConflictError {
        /// There's a file in the way.
        "file" => File,
        /// There's a folder in the way.
        "folder" => Folder,
        /// There's a file at an ancestor path, so we couldn't create the
        /// required parent folders.
        "file_ancestor" => FileAncestor,
        "other" => Other,
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFolderArg {
    /// A unique identifier for the file.
    pub path: String,

    /// If true, the list folder operation will be applied recursively to all
    /// subfolders and the response will contain contents of all subfolders.
    pub recursive: bool,

    /// If true, media info is set for photo and video. This parameter will no
    /// longer have an effect starting December 2, 2019.
    pub include_media_info: bool,

    /// If true, the results will include entries for files and folders that
    /// used to exist but were deleted.
    pub include_deleted: bool,

    /// If true, the results will include a flag for each file indicating
    /// whether or not that file has any explicit members.
    pub include_has_explicit_shared_members: bool,

    /// If true, the results will include entries under mounted folders which
    /// includes app folder, shared folder and team folder.
    pub include_mounted_folders: bool,

    /// The maximum number of results to return per request. Note: This is an
    /// approximate number and there can be slightly more entries returned in
    /// some cases.
    pub limit: std::option::Option<u32>,

    /// A shared link to list the contents of. If the link is
    /// password-protected, the password must be provided. If this field is
    /// present, [path][Self::path] will be relative to root of the shared link.
    /// Only non-recursive mode is supported for shared link.
    pub shared_link: std::option::Option<SharedLink>,

    /// If true, include files that are not downloadable, i.e. Google Docs.
    pub include_non_downloadable_files: bool,
}

impl std::default::Default for ListFolderArg {
    fn default() -> Self {
        Self {
            path: std::default::Default::default(),
            recursive: std::default::Default::default(),
            include_media_info: std::default::Default::default(),
            include_deleted: std::default::Default::default(),
            include_has_explicit_shared_members: std::default::Default::default(),
            include_mounted_folders: list_folder_arg_include_mounted_folders(),
            limit: std::default::Default::default(),
            shared_link: std::default::Default::default(),
            include_non_downloadable_files: list_folder_arg_include_non_downloadable_files(),
        }
    }
}

impl ListFolderArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][ListFolderArg::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [recursive][ListFolderArg::recursive].
    pub fn set_recursive<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.recursive = v.into();
        self
    }

    /// Sets the value of [include_media_info][ListFolderArg::include_media_info].
    pub fn set_include_media_info<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_media_info = v.into();
        self
    }

    /// Sets the value of [include_deleted][ListFolderArg::include_deleted].
    pub fn set_include_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_deleted = v.into();
        self
    }

    /// Sets the value of [include_has_explicit_shared_members][ListFolderArg::include_has_explicit_shared_members].
    pub fn set_include_has_explicit_shared_members<T: std::convert::Into<bool>>(
        mut self,
        v: T,
    ) -> Self {
        self.include_has_explicit_shared_members = v.into();
        self
    }

    /// Sets the value of [include_mounted_folders][ListFolderArg::include_mounted_folders].
    pub fn set_include_mounted_folders<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_mounted_folders = v.into();
        self
    }

    /// Sets the value of [limit][ListFolderArg::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][ListFolderArg::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [shared_link][ListFolderArg::shared_link].
    pub fn set_shared_link<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<SharedLink>,
    {
        self.shared_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [shared_link][ListFolderArg::shared_link].
    pub fn set_or_clear_shared_link<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<SharedLink>,
    {
        self.shared_link = v.map(|x| x.into());
        self
    }

    /// Sets the value of [include_non_downloadable_files][ListFolderArg::include_non_downloadable_files].
    pub fn set_include_non_downloadable_files<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_non_downloadable_files = v.into();
        self
    }
}

fn list_folder_arg_include_mounted_folders() -> bool {
    true
}

fn list_folder_arg_include_non_downloadable_files() -> bool {
    true
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SharedLink {
    /// Shared link url.
    pub url: String,

    /// Password for the shared link.
    pub password: std::option::Option<String>,
}

impl SharedLink {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [url][SharedLink::url].
    pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }

    /// Sets the value of [password][SharedLink::password].
    pub fn set_password<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.password = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [password][SharedLink::password].
    pub fn set_or_clear_password<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.password = v.map(|x| x.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFolderResult {
    /// The files and (direct) subfolders in the folder.
    pub entries: Vec<Metadata>,

    /// Pass the cursor into
    /// [list_folder_continue][crate::client::Files::list_folder_continue] to
    /// see what's changed in the folder since your previous query.
    pub cursor: String,

    /// If true, then there are more entries available. Pass the cursor to
    /// [list_folder_continue][crate::client::Files::list_folder_continue] to
    /// retrieve the rest.
    pub has_more: bool,
}

impl ListFolderResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entries][ListFolderResult::entries].
    pub fn set_entries<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<Metadata>,
    {
        use std::iter::Iterator;
        self.entries = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [cursor][ListFolderResult::cursor].
    pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }

    /// Sets the value of [has_more][ListFolderResult::has_more].
    pub fn set_has_more<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.has_more = v.into();
        self
    }
}

tagged_union! {
    pub enum ListFolderError {
        "path" => Path(nested LookupError),
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFolderContinueArg {
    /// The cursor returned by your last call to
    /// [list_folder][crate::client::Files::list_folder] or
    /// [list_folder_continue][crate::client::Files::list_folder_continue].
    pub cursor: String,
}

impl ListFolderContinueArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cursor][ListFolderContinueArg::cursor].
    pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }
}

tagged_union! {
    pub enum ListFolderContinueError {
        "path" => Path(nested LookupError),
        /// Indicates that the cursor has been invalidated. Call
        /// [list_folder][crate::client::Files::list_folder] to obtain a new
        /// cursor.
        "reset" => Reset,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFolderGetLatestCursorResult {
    /// Pass the cursor into
    /// [list_folder_continue][crate::client::Files::list_folder_continue] to
    /// see what's changed in the folder since your previous query.
    pub cursor: String,
}

impl ListFolderGetLatestCursorResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cursor][ListFolderGetLatestCursorResult::cursor].
    pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFolderLongpollArg {
    /// A cursor as returned by [list_folder][crate::client::Files::list_folder]
    /// or [list_folder_continue][crate::client::Files::list_folder_continue].
    /// Cursors retrieved by setting
    /// [include_media_info][ListFolderArg::include_media_info] to `true` are
    /// not supported.
    pub cursor: String,

    /// A timeout in seconds. The request will block for at most this length of
    /// time, plus up to 90 seconds of random jitter added to avoid the
    /// thundering herd problem. Care should be taken when using this parameter,
    /// as some network infrastructure does not support long timeouts.
    pub timeout: u64,
}

impl std::default::Default for ListFolderLongpollArg {
    fn default() -> Self {
        Self {
            cursor: std::default::Default::default(),
            timeout: list_folder_longpoll_arg_timeout(),
        }
    }
}

impl ListFolderLongpollArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cursor][ListFolderLongpollArg::cursor].
    pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }

    /// Sets the value of [timeout][ListFolderLongpollArg::timeout].
    pub fn set_timeout<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.timeout = v.into();
        self
    }
}

fn list_folder_longpoll_arg_timeout() -> u64 {
    30
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFolderLongpollResult {
    /// Indicates whether new changes are available. If true, call
    /// [list_folder_continue][crate::client::Files::list_folder_continue] to
    /// retrieve the changes.
    pub changes: bool,

    /// If present, backoff for at least this many seconds before calling
    /// [list_folder_longpoll][crate::client::Files::list_folder_longpoll]
    /// again.
    pub backoff: std::option::Option<u64>,
}

impl ListFolderLongpollResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [changes][ListFolderLongpollResult::changes].
    pub fn set_changes<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.changes = v.into();
        self
    }

    /// Sets the value of [backoff][ListFolderLongpollResult::backoff].
    pub fn set_backoff<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.backoff = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [backoff][ListFolderLongpollResult::backoff].
    pub fn set_or_clear_backoff<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.backoff = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    pub enum ListFolderLongpollError {
        /// Indicates that the cursor has been invalidated. Call
        /// [list_folder][crate::client::Files::list_folder] to obtain a new
        /// cursor.
        "reset" => Reset,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateFolderArg {
    /// Path in the user's Dropbox to create.
    pub path: String,

    /// If there's a conflict, have the Dropbox server try to autorename the
    /// folder to avoid the conflict.
    pub autorename: bool,
}

impl CreateFolderArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][CreateFolderArg::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [autorename][CreateFolderArg::autorename].
    pub fn set_autorename<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.autorename = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateFolderResult {
    /// Metadata of the created folder.
    pub metadata: FolderMetadata,
}

impl CreateFolderResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [metadata][CreateFolderResult::metadata].
    pub fn set_metadata<T: std::convert::Into<FolderMetadata>>(mut self, v: T) -> Self {
        self.metadata = v.into();
        self
    }
}

tagged_union! {
    pub enum CreateFolderError {
        "path" => Path(nested WriteError),
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteArg {
    /// Path in the user's Dropbox to delete.
    pub path: String,

    /// Perform delete if given "rev" matches the existing file's latest "rev".
    /// This field does not support deleting a folder.
    pub parent_rev: std::option::Option<String>,
}

impl DeleteArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][DeleteArg::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [parent_rev][DeleteArg::parent_rev].
    pub fn set_parent_rev<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_rev = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parent_rev][DeleteArg::parent_rev].
    pub fn set_or_clear_parent_rev<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_rev = v.map(|x| x.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DeleteResult {
    /// Metadata of the deleted object.
    pub metadata: Metadata,
}

impl DeleteResult {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
        }
    }

    /// Sets the value of [metadata][DeleteResult::metadata].
    pub fn set_metadata<T: std::convert::Into<Metadata>>(mut self, v: T) -> Self {
        self.metadata = v.into();
        self
    }
}

tagged_union! {
    pub enum DeleteError {
        "path_lookup" => PathLookup(nested LookupError),
        "path_write" => PathWrite(nested WriteError),
        /// There are too many write operations in user's Dropbox. Please retry
        /// this request.
        "too_many_write_operations" => TooManyWriteOperations,
        /// There are too many files in one request. Please retry with fewer
        /// files.
        "too_many_files" => TooManyFiles,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteBatchArg {
    pub entries: Vec<DeleteArg>,
}

impl DeleteBatchArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entries][DeleteBatchArg::entries].
    pub fn set_entries<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DeleteArg>,
    {
        use std::iter::Iterator;
        self.entries = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

tagged_union! {
    /// Result returned by [delete_batch][crate::client::Files::delete_batch]
    /// that may either launch an asynchronous job or complete synchronously.
    pub enum DeleteBatchLaunch {
        /// This response indicates that the processing is asynchronous. The
        /// string is an id that can be used to obtain the status of the
        /// asynchronous job.
        "async_job_id" => AsyncJobId(nested String),
        "complete" => Complete(flat DeleteBatchResult),
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteBatchResult {
    /// Each entry in [DeleteBatchArg::entries] will appear at the same position
    /// inside [DeleteBatchResult::entries].
    pub entries: Vec<DeleteBatchResultEntry>,
}

impl DeleteBatchResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entries][DeleteBatchResult::entries].
    pub fn set_entries<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DeleteBatchResultEntry>,
    {
        use std::iter::Iterator;
        self.entries = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

tagged_union! {
    pub enum DeleteBatchResultEntry {
        "success" => Success(flat DeleteBatchResultData),
        "failure" => Failure(nested DeleteError),
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DeleteBatchResultData {
    /// Metadata of the deleted object.
    pub metadata: Metadata,
}

impl DeleteBatchResultData {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
        }
    }

    /// Sets the value of [metadata][DeleteBatchResultData::metadata].
    pub fn set_metadata<T: std::convert::Into<Metadata>>(mut self, v: T) -> Self {
        self.metadata = v.into();
        self
    }
}

tagged_union! {
    pub enum DeleteBatchJobStatus {
        /// The asynchronous job is still in progress.
        "in_progress" => InProgress,
        /// The batch delete has finished.
        "complete" => Complete(flat DeleteBatchResult),
        /// The batch delete has failed.
        "failed" => Failed(nested DeleteBatchError),
        "other" => Other,
    }
}

tagged_union! {
    pub enum DeleteBatchError {
        /// Use [DeleteError::TooManyWriteOperations].
        /// [delete_batch][crate::client::Files::delete_batch] now provides
        /// smaller granularity about which entry has failed because of this.
        "too_many_write_operations" => TooManyWriteOperations,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RelocationArg {
    /// Path in the user's Dropbox to be copied or moved.
    pub from_path: String,

    /// Path in the user's Dropbox that is the destination.
    pub to_path: String,

    /// This flag has no effect.
    pub allow_shared_folder: bool,

    /// If there's a conflict, have the Dropbox server try to autorename the
    /// file to avoid the conflict.
    pub autorename: bool,

    /// Allow moves by owner even if it would result in an ownership transfer
    /// for the content being moved. This does not apply to copies.
    pub allow_ownership_transfer: bool,
}

impl RelocationArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [from_path][RelocationArg::from_path].
    pub fn set_from_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.from_path = v.into();
        self
    }

    /// Sets the value of [to_path][RelocationArg::to_path].
    pub fn set_to_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.to_path = v.into();
        self
    }

    /// Sets the value of [allow_shared_folder][RelocationArg::allow_shared_folder].
    pub fn set_allow_shared_folder<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.allow_shared_folder = v.into();
        self
    }

    /// Sets the value of [autorename][RelocationArg::autorename].
    pub fn set_autorename<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.autorename = v.into();
        self
    }

    /// Sets the value of [allow_ownership_transfer][RelocationArg::allow_ownership_transfer].
    pub fn set_allow_ownership_transfer<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.allow_ownership_transfer = v.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RelocationResult {
    /// Metadata of the relocated object.
    pub metadata: Metadata,
}

impl RelocationResult {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
        }
    }

    /// Sets the value of [metadata][RelocationResult::metadata].
    pub fn set_metadata<T: std::convert::Into<Metadata>>(mut self, v: T) -> Self {
        self.metadata = v.into();
        self
    }
}

tagged_union! {
    pub enum RelocationError {
        "from_lookup" => FromLookup(nested LookupError),
        "from_write" => FromWrite(nested WriteError),
        "to" => To(nested WriteError),
        /// Shared folders can't be copied.
        "cant_copy_shared_folder" => CantCopySharedFolder,
        /// Your move operation would result in nested shared folders. This is
        /// not allowed.
        "cant_nest_shared_folder" => CantNestSharedFolder,
        /// You cannot move a folder into itself.
        "cant_move_folder_into_itself" => CantMoveFolderIntoItself,
        /// The operation would involve more than 10,000 files and folders.
        "too_many_files" => TooManyFiles,
        /// There are duplicated/nested paths among
        /// [from_path][RelocationArg::from_path] and
        /// [to_path][RelocationArg::to_path].
        "duplicated_or_nested_paths" => DuplicatedOrNestedPaths,
        /// Your move operation would result in an ownership transfer. You may
        /// reissue the request with the field
        /// [allow_ownership_transfer][RelocationArg::allow_ownership_transfer]
        /// to true.
        "cant_transfer_ownership" => CantTransferOwnership,
        /// The current user does not have enough space to move or copy the
        /// files.
        "insufficient_quota" => InsufficientQuota,
        /// Something went wrong with the job on Dropbox's end. You'll need to
        /// verify that the action you were taking succeeded, and if not, try
        /// again. This should happen very rarely.
        "internal_error" => InternalError,
        /// Can't move the shared folder to the given destination.
        "cant_move_shared_folder" => CantMoveSharedFolder,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetTemporaryLinkArg {
    /// The path to the file you want a temporary link to.
    pub path: String,
}

impl GetTemporaryLinkArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][GetTemporaryLinkArg::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetTemporaryLinkResult {
    /// Metadata of the file.
    pub metadata: FileMetadata,

    /// The temporary link which can be used to stream content the file.
    pub link: String,
}

impl GetTemporaryLinkResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [metadata][GetTemporaryLinkResult::metadata].
    pub fn set_metadata<T: std::convert::Into<FileMetadata>>(mut self, v: T) -> Self {
        self.metadata = v.into();
        self
    }

    /// Sets the value of [link][GetTemporaryLinkResult::link].
    pub fn set_link<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.link = v.into();
        self
    }
}

tagged_union! {
    pub enum GetTemporaryLinkError {
        "path" => Path(nested LookupError),
        /// This user's email address is not verified. This functionality is
        /// only available on accounts with a verified email address. Users can
        /// verify their email address in the Dropbox web settings.
        "email_not_verified" => EmailNotVerified,
        /// Cannot get temporary link to this file type; use export instead.
        "unsupported_file" => UnsupportedFile,
        /// The user is not allowed to request a temporary link to the specified
        /// file. For example, this can occur if the file is restricted or if
        /// the user's links are banned.
        "not_allowed" => NotAllowed,
        "other" => Other,
    }
}

tagged_union! {
    /// Your intent when writing a file to some path. This is used to determine
    /// what constitutes a conflict and what the autorename strategy is.
    ///
    /// In some situations, the conflict behavior is identical: (a) If the
    /// target path doesn't refer to anything, the file is always written; no
    /// conflict. (b) If the target path refers to a folder, it's always a
    /// conflict. (c) If the target path refers to a file with identical
    /// contents, nothing gets written; no conflict.
    #[derive(Default)]
    pub enum WriteMode {
        /// Do not overwrite an existing file if there is a conflict. The
        /// autorename strategy is to append a number to the file name. For
        /// example, "document.txt" might become "document (2).txt".
        #[default]
        "add" => Add,
        /// Always overwrite the existing file. The autorename strategy is the
        /// same as it is for [add][WriteMode::Add].
        "overwrite" => Overwrite,
        /// Overwrite if the given "rev" matches the existing file's "rev". The
        /// supplied value should be the latest known "rev" of the file, for
        /// example, from [FileMetadata], from when the file was last downloaded
        /// by the app. This will cause the file on the Dropbox servers to be
        /// overwritten if the given "rev" matches the existing file's current
        /// "rev" on the Dropbox servers. The autorename strategy is to append
        /// the string "conflicted copy" to the file name.
        "update" => Update(nested String),
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CommitInfo {
    /// Path in the user's Dropbox to save the file.
    pub path: String,

    /// Selects what to do if the file already exists.
    pub mode: WriteMode,

    /// If there's a conflict, as determined by [mode][Self::mode], have the
    /// Dropbox server try to autorename the file to avoid conflict.
    pub autorename: bool,

    /// The value to store as the `client_modified` timestamp. Dropbox
    /// automatically records the time at which the file was written to the
    /// Dropbox servers. It can also record an additional timestamp, provided by
    /// Dropbox desktop clients, mobile clients, and API apps of when the file
    /// was actually created or modified.
    pub client_modified: std::option::Option<wkt::Timestamp>,

    /// Normally, users are made aware of any file modifications in their
    /// Dropbox account via notifications in the client software. If `true`,
    /// this tells the clients that this modification shouldn't result in a user
    /// notification.
    pub mute: bool,

    /// Be more strict about how each [WriteMode] detects conflict. For example,
    /// always return a conflict error when [mode][Self::mode] is
    /// [WriteMode::Update] and the given "rev" doesn't match the existing
    /// file's "rev", even if the existing file has been deleted.
    pub strict_conflict: bool,
}

impl CommitInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][CommitInfo::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [mode][CommitInfo::mode].
    pub fn set_mode<T: std::convert::Into<WriteMode>>(mut self, v: T) -> Self {
        self.mode = v.into();
        self
    }

    /// Sets the value of [autorename][CommitInfo::autorename].
    pub fn set_autorename<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.autorename = v.into();
        self
    }

    /// Sets the value of [client_modified][CommitInfo::client_modified].
    pub fn set_client_modified<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.client_modified = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [client_modified][CommitInfo::client_modified].
    pub fn set_or_clear_client_modified<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.client_modified = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mute][CommitInfo::mute].
    pub fn set_mute<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.mute = v.into();
        self
    }

    /// Sets the value of [strict_conflict][CommitInfo::strict_conflict].
    pub fn set_strict_conflict<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.strict_conflict = v.into();
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UploadArg {
    /// Path in the user's Dropbox to save the file.
    pub path: String,

    /// Selects what to do if the file already exists.
    pub mode: WriteMode,

    /// If there's a conflict, as determined by [mode][Self::mode], have the
    /// Dropbox server try to autorename the file to avoid conflict.
    pub autorename: bool,

    /// The value to store as the `client_modified` timestamp. Dropbox
    /// automatically records the time at which the file was written to the
    /// Dropbox servers. It can also record an additional timestamp, provided by
    /// Dropbox desktop clients, mobile clients, and API apps of when the file
    /// was actually created or modified.
    pub client_modified: std::option::Option<wkt::Timestamp>,

    /// Normally, users are made aware of any file modifications in their
    /// Dropbox account via notifications in the client software. If `true`,
    /// this tells the clients that this modification shouldn't result in a user
    /// notification.
    pub mute: bool,

    /// Be more strict about how each [WriteMode] detects conflict. For example,
    /// always return a conflict error when [mode][Self::mode] is
    /// [WriteMode::Update] and the given "rev" doesn't match the existing
    /// file's "rev", even if the existing file has been deleted.
    pub strict_conflict: bool,

    /// A hash of the file content uploaded in this call. If provided and the
    /// uploaded content does not match this hash, an error will be returned.
    pub content_hash: std::option::Option<String>,
}

impl UploadArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][UploadArg::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [mode][UploadArg::mode].
    pub fn set_mode<T: std::convert::Into<WriteMode>>(mut self, v: T) -> Self {
        self.mode = v.into();
        self
    }

    /// Sets the value of [autorename][UploadArg::autorename].
    pub fn set_autorename<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.autorename = v.into();
        self
    }

    /// Sets the value of [client_modified][UploadArg::client_modified].
    pub fn set_client_modified<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.client_modified = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [client_modified][UploadArg::client_modified].
    pub fn set_or_clear_client_modified<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.client_modified = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mute][UploadArg::mute].
    pub fn set_mute<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.mute = v.into();
        self
    }

    /// Sets the value of [strict_conflict][UploadArg::strict_conflict].
    pub fn set_strict_conflict<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.strict_conflict = v.into();
        self
    }

    /// Sets the value of [content_hash][UploadArg::content_hash].
    pub fn set_content_hash<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.content_hash = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_hash][UploadArg::content_hash].
    pub fn set_or_clear_content_hash<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.content_hash = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    pub enum UploadError {
        /// Unable to save the uploaded contents to a file.
        "path" => Path(flat UploadWriteFailed),
        /// The request payload must be at most 150 MiB.
        "payload_too_large" => PayloadTooLarge,
        /// The content received by the Dropbox server in this call does not
        /// match the provided content hash.
        "content_hash_mismatch" => ContentHashMismatch,
        "other" => Other,
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UploadWriteFailed {
    /// The reason why the file couldn't be saved.
    pub reason: WriteError,

    /// The upload session ID; data has already been uploaded to the
    /// corresponding upload session and this ID may be used to retry the commit
    /// with
    /// [upload_session_finish][crate::client::Files::upload_session_finish].
    pub upload_session_id: String,
}

impl UploadWriteFailed {
    pub fn new(reason: WriteError) -> Self {
        Self {
            reason,
            upload_session_id: std::default::Default::default(),
        }
    }

    /// Sets the value of [reason][UploadWriteFailed::reason].
    pub fn set_reason<T: std::convert::Into<WriteError>>(mut self, v: T) -> Self {
        self.reason = v.into();
        self
    }

    /// Sets the value of [upload_session_id][UploadWriteFailed::upload_session_id].
    pub fn set_upload_session_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.upload_session_id = v.into();
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UploadSessionStartArg {
    /// If true, the current session will be closed, at which point you won't be
    /// able to call
    /// [upload_session_append_v2][crate::client::Files::upload_session_append_v2]
    /// anymore with the current session.
    pub close: bool,

    /// Type of upload session you want to start. If not specified, default is
    /// [UploadSessionType::Sequential].
    pub session_type: std::option::Option<UploadSessionType>,

    /// A hash of the file content uploaded in this call. If provided and the
    /// uploaded content does not match this hash, an error will be returned.
    pub content_hash: std::option::Option<String>,
}

impl UploadSessionStartArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [close][UploadSessionStartArg::close].
    pub fn set_close<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.close = v.into();
        self
    }

    /// Sets the value of [session_type][UploadSessionStartArg::session_type].
    pub fn set_session_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<UploadSessionType>,
    {
        self.session_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [session_type][UploadSessionStartArg::session_type].
    pub fn set_or_clear_session_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<UploadSessionType>,
    {
        self.session_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_hash][UploadSessionStartArg::content_hash].
    pub fn set_content_hash<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.content_hash = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_hash][UploadSessionStartArg::content_hash].
    pub fn set_or_clear_content_hash<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.content_hash = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    pub enum UploadSessionType {
        /// Pieces of data are uploaded sequentially one after another. This is
        /// the default behavior.
        "sequential" => Sequential,
        /// Pieces of data can be uploaded in concurrent RPCs in any order.
        "concurrent" => Concurrent,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UploadSessionStartResult {
    /// A unique identifier for the upload session. Pass this to
    /// [upload_session_append_v2][crate::client::Files::upload_session_append_v2]
    /// and
    /// [upload_session_finish][crate::client::Files::upload_session_finish].
    pub session_id: String,
}

impl UploadSessionStartResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [session_id][UploadSessionStartResult::session_id].
    pub fn set_session_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.session_id = v.into();
        self
    }
}

tagged_union! {
    pub enum UploadSessionStartError {
        /// Uploading data not allowed when starting concurrent upload session.
        "concurrent_session_data_not_allowed" => ConcurrentSessionDataNotAllowed,
        /// Can not start a closed concurrent upload session.
        "concurrent_session_close_not_allowed" => ConcurrentSessionCloseNotAllowed,
        /// The request payload must be at most 150 MiB.
        "payload_too_large" => PayloadTooLarge,
        /// The content received by the Dropbox server in this call does not
        /// match the provided content hash.
        "content_hash_mismatch" => ContentHashMismatch,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UploadSessionCursor {
    /// The upload session ID (returned by
    /// [upload_session_start][crate::client::Files::upload_session_start]).
    pub session_id: String,

    /// Offset in bytes at which data should be appended. We use this to make
    /// sure upload data isn't lost or duplicated in the event of a network
    /// error.
    pub offset: u64,
}

impl UploadSessionCursor {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [session_id][UploadSessionCursor::session_id].
    pub fn set_session_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.session_id = v.into();
        self
    }

    /// Sets the value of [offset][UploadSessionCursor::offset].
    pub fn set_offset<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.offset = v.into();
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UploadSessionAppendArg {
    /// Contains the upload session ID and the offset.
    pub cursor: UploadSessionCursor,

    /// If true, the current session will be closed, at which point you won't be
    /// able to call
    /// [upload_session_append_v2][crate::client::Files::upload_session_append_v2]
    /// anymore with the current session.
    pub close: bool,

    /// A hash of the file content uploaded in this call. If provided and the
    /// uploaded content does not match this hash, an error will be returned.
    pub content_hash: std::option::Option<String>,
}

impl UploadSessionAppendArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cursor][UploadSessionAppendArg::cursor].
    pub fn set_cursor<T: std::convert::Into<UploadSessionCursor>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }

    /// Sets the value of [close][UploadSessionAppendArg::close].
    pub fn set_close<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.close = v.into();
        self
    }

    /// Sets the value of [content_hash][UploadSessionAppendArg::content_hash].
    pub fn set_content_hash<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.content_hash = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_hash][UploadSessionAppendArg::content_hash].
    pub fn set_or_clear_content_hash<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.content_hash = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    pub enum UploadSessionLookupError {
        /// The upload session ID was not found or has expired. Upload sessions
        /// are valid for 7 days.
        "not_found" => NotFound,
        /// The specified offset was incorrect. See the value for the correct
        /// offset. This error may occur when a previous request was received
        /// and processed successfully but the client did not receive the
        /// response, e.g. due to a network error.
        "incorrect_offset" => IncorrectOffset(flat UploadSessionOffsetError),
        /// You are attempting to append data to an upload session that has
        /// already been closed (i.e. committed).
        "closed" => Closed,
        /// The session must be closed before calling
        /// upload_session/finish_batch.
        "not_closed" => NotClosed,
        /// You can not append to the upload session because the size of a file
        /// should not reach the max file size limit (i.e. 350GB).
        "too_large" => TooLarge,
        /// For concurrent upload sessions, offset needs to be multiple of
        /// 4194304 bytes.
        "concurrent_session_invalid_offset" => ConcurrentSessionInvalidOffset,
        /// For concurrent upload sessions, only chunks with size multiple of
        /// 4194304 bytes can be uploaded.
        "concurrent_session_invalid_data_size" => ConcurrentSessionInvalidDataSize,
        /// The request payload must be at most 150 MiB.
        "payload_too_large" => PayloadTooLarge,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UploadSessionOffsetError {
    /// The offset up to which data has been collected.
    pub correct_offset: u64,
}

impl UploadSessionOffsetError {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [correct_offset][UploadSessionOffsetError::correct_offset].
    pub fn set_correct_offset<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.correct_offset = v.into();
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UploadSessionFinishArg {
    /// Contains the upload session ID and the offset.
    pub cursor: UploadSessionCursor,

    /// Contains the path and other optional modifiers for the commit.
    pub commit: CommitInfo,

    /// A hash of the file content uploaded in this call. If provided and the
    /// uploaded content does not match this hash, an error will be returned.
    pub content_hash: std::option::Option<String>,
}

impl UploadSessionFinishArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cursor][UploadSessionFinishArg::cursor].
    pub fn set_cursor<T: std::convert::Into<UploadSessionCursor>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }

    /// Sets the value of [commit][UploadSessionFinishArg::commit].
    pub fn set_commit<T: std::convert::Into<CommitInfo>>(mut self, v: T) -> Self {
        self.commit = v.into();
        self
    }

    /// Sets the value of [content_hash][UploadSessionFinishArg::content_hash].
    pub fn set_content_hash<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.content_hash = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_hash][UploadSessionFinishArg::content_hash].
    pub fn set_or_clear_content_hash<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.content_hash = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    pub enum UploadSessionFinishError {
        /// The session arguments are incorrect; the value explains the reason.
        "lookup_failed" => LookupFailed(nested UploadSessionLookupError),
        /// Unable to save the uploaded contents to a file. Data has already
        /// been appended to the upload session. Please retry with empty data
        /// body and updated offset.
        "path" => Path(nested WriteError),
        /// The batch request commits files into too many different shared
        /// folders. Please limit your batch request to files contained in a
        /// single shared folder.
        "too_many_shared_folder_targets" => TooManySharedFolderTargets,
        /// There are too many write operations happening in the user's Dropbox.
        /// You should retry uploading this file.
        "too_many_write_operations" => TooManyWriteOperations,
        /// Uploading data not allowed when finishing concurrent upload session.
        "concurrent_session_data_not_allowed" => ConcurrentSessionDataNotAllowed,
        /// Concurrent upload sessions need to be closed before finishing.
        "concurrent_session_not_closed" => ConcurrentSessionNotClosed,
        /// Not all pieces of data were uploaded before trying to finish the
        /// session.
        "concurrent_session_missing_data" => ConcurrentSessionMissingData,
        /// The request payload must be at most 150 MiB.
        "payload_too_large" => PayloadTooLarge,
        /// The content received by the Dropbox server in this call does not
        /// match the provided content hash.
        "content_hash_mismatch" => ContentHashMismatch,
        "other" => Other,
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DownloadArg {
    /// The path of the file to download.
    pub path: String,

    /// Please specify revision in [path][Self::path] instead.
    pub rev: std::option::Option<String>,
}

impl DownloadArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][DownloadArg::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [rev][DownloadArg::rev].
    pub fn set_rev<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.rev = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [rev][DownloadArg::rev].
    pub fn set_or_clear_rev<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.rev = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    pub enum DownloadError {
        "path" => Path(nested LookupError),
        /// This file type cannot be downloaded directly; use export instead.
        "unsupported_file" => UnsupportedFile,
        "other" => Other,
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ThumbnailV2Arg {
    /// Information specifying which file to preview. This could be a path to a
    /// file, a shared link pointing to a file, or a shared link pointing to a
    /// folder, with a relative path.
    pub resource: PathOrLink,

    /// The format for the thumbnail image, jpeg (default) or png. For images
    /// that are photos, jpeg should be preferred, while png is better for
    /// screenshots and digital arts.
    pub format: ThumbnailFormat,

    /// The size for the thumbnail image.
    pub size: ThumbnailSize,

    /// How to resize and crop the image to achieve the desired size.
    pub mode: ThumbnailMode,
}

impl ThumbnailV2Arg {
    pub fn new(resource: PathOrLink) -> Self {
        Self {
            resource,
            format: std::default::Default::default(),
            size: std::default::Default::default(),
            mode: std::default::Default::default(),
        }
    }

    /// Sets the value of [resource][ThumbnailV2Arg::resource].
    pub fn set_resource<T: std::convert::Into<PathOrLink>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }

    /// Sets the value of [format][ThumbnailV2Arg::format].
    pub fn set_format<T: std::convert::Into<ThumbnailFormat>>(mut self, v: T) -> Self {
        self.format = v.into();
        self
    }

    /// Sets the value of [size][ThumbnailV2Arg::size].
    pub fn set_size<T: std::convert::Into<ThumbnailSize>>(mut self, v: T) -> Self {
        self.size = v.into();
        self
    }

    /// Sets the value of [mode][ThumbnailV2Arg::mode].
    pub fn set_mode<T: std::convert::Into<ThumbnailMode>>(mut self, v: T) -> Self {
        self.mode = v.into();
        self
    }
}

tagged_union! {
    pub enum PathOrLink {
        "path" => Path(nested String),
        "link" => Link(flat SharedLinkFileInfo),
        "other" => Other,
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SharedLinkFileInfo {
    /// The shared link corresponding to either a file or shared link to a
    /// folder. If it is for a folder shared link, we use the path param to
    /// determine for which file in the folder the view is for.
    pub url: String,

    /// The path corresponding to a file in a shared link to a folder. Required
    /// for shared links to folders.
    pub path: std::option::Option<String>,

    /// Password for the shared link. Required for password-protected shared
    /// links to files unless it can be read from a cookie.
    pub password: std::option::Option<String>,
}

impl SharedLinkFileInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [url][SharedLinkFileInfo::url].
    pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }

    /// Sets the value of [path][SharedLinkFileInfo::path].
    pub fn set_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][SharedLinkFileInfo::path].
    pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [password][SharedLinkFileInfo::password].
    pub fn set_password<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.password = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [password][SharedLinkFileInfo::password].
    pub fn set_or_clear_password<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.password = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    #[derive(Default)]
    pub enum ThumbnailFormat {
        #[default]
        "jpeg" => Jpeg,
        "png" => Png,
        "webp" => Webp,
    }
}

tagged_union! {
    #[derive(Default)]
    pub enum ThumbnailSize {
        /// 32 by 32 px.
        "w32h32" => W32H32,
        /// 64 by 64 px.
        #[default]
        "w64h64" => W64H64,
        /// 128 by 128 px.
        "w128h128" => W128H128,
        /// 256 by 256 px.
        "w256h256" => W256H256,
        /// 480 by 320 px.
        "w480h320" => W480H320,
        /// 640 by 480 px.
        "w640h480" => W640H480,
        /// 960 by 640 px.
        "w960h640" => W960H640,
        /// 1024 by 768 px.
        "w1024h768" => W1024H768,
        /// 2048 by 1536 px.
        "w2048h1536" => W2048H1536,
        /// 3200 by 2400 px.
        "w3200h2400" => W3200H2400,
    }
}

tagged_union! {
    #[derive(Default)]
    pub enum ThumbnailMode {
        /// Scale down the image to fit within the given size.
        #[default]
        "strict" => Strict,
        /// Scale down the image to fit within the given size or its transpose.
        "bestfit" => Bestfit,
        /// Scale down the image to completely cover the given size or its
        /// transpose.
        "fitone_bestfit" => FitoneBestfit,
        /// Use the original image size.
        "original" => Original,
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PreviewResult {
    /// Metadata corresponding to the file received as an argument. Will be
    /// populated if the endpoint is called with a path.
    pub file_metadata: std::option::Option<FileMetadata>,

    /// Minimal metadata corresponding to the file received as an argument. Will
    /// be populated if the endpoint is called using a shared link.
    pub link_metadata: std::option::Option<MinimalFileLinkMetadata>,
}

impl PreviewResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_metadata][PreviewResult::file_metadata].
    pub fn set_file_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<FileMetadata>,
    {
        self.file_metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_metadata][PreviewResult::file_metadata].
    pub fn set_or_clear_file_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<FileMetadata>,
    {
        self.file_metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [link_metadata][PreviewResult::link_metadata].
    pub fn set_link_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<MinimalFileLinkMetadata>,
    {
        self.link_metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [link_metadata][PreviewResult::link_metadata].
    pub fn set_or_clear_link_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<MinimalFileLinkMetadata>,
    {
        self.link_metadata = v.map(|x| x.into());
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct MinimalFileLinkMetadata {
    /// URL of the shared link.
    pub url: String,

    /// Unique identifier for the linked file.
    pub id: std::option::Option<String>,

    /// Full path in the user's Dropbox. This always starts with a slash. This
    /// field will only be present only if the linked file is in the
    /// authenticated user's Dropbox.
    pub path: std::option::Option<String>,

    /// A unique identifier for the current revision of a file. This field is
    /// the same rev as elsewhere in the API and can be used to detect changes
    /// and avoid conflicts.
    pub rev: String,
}

impl MinimalFileLinkMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [url][MinimalFileLinkMetadata::url].
    pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }

    /// Sets the value of [id][MinimalFileLinkMetadata::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][MinimalFileLinkMetadata::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path][MinimalFileLinkMetadata::path].
    pub fn set_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][MinimalFileLinkMetadata::path].
    pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [rev][MinimalFileLinkMetadata::rev].
    pub fn set_rev<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.rev = v.into();
        self
    }
}

tagged_union! {
    pub enum ThumbnailV2Error {
        /// An error occurred when downloading metadata for the image.
        "path" => Path(nested LookupError),
        /// The file extension doesn't allow conversion to a thumbnail.
        "unsupported_extension" => UnsupportedExtension,
        /// The image cannot be converted to a thumbnail.
        "unsupported_image" => UnsupportedImage,
        /// Encrypted content cannot be converted to a thumbnail.
        "encrypted_content" => EncryptedContent,
        /// An error occurred during thumbnail conversion.
        "conversion_error" => ConversionError,
        /// Access to this shared link is forbidden.
        "access_denied" => AccessDenied,
        /// The shared link does not exist.
        "not_found" => NotFound,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SaveUrlArg {
    /// The path in Dropbox where the URL will be saved to.
    pub path: String,

    /// The URL to be saved.
    pub url: String,
}

impl SaveUrlArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][SaveUrlArg::path].
    pub fn set_path<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [url][SaveUrlArg::url].
    pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }
}

tagged_union! {
    pub enum SaveUrlResult {
        /// This response indicates that the processing is asynchronous. The
        /// string is an id that can be used to obtain the status of the
        /// asynchronous job.
        "async_job_id" => AsyncJobId(nested String),
        /// Metadata of the file where the URL is saved to.
        "complete" => Complete(flat FileMetadata),
    }
}

tagged_union! {
    pub enum SaveUrlError {
        "path" => Path(nested WriteError),
        /// Failed downloading the given URL. The URL may be password-protected
        /// and the password provided was incorrect, or the link may be
        /// disabled.
        "download_failed" => DownloadFailed,
        /// The given URL is invalid.
        "invalid_url" => InvalidUrl,
        /// The file where the URL is saved to no longer exists.
        "not_found" => NotFound,
        "other" => Other,
    }
}

tagged_union! {
    pub enum SaveUrlJobStatus {
        /// The asynchronous job is still in progress.
        "in_progress" => InProgress,
        /// Metadata of the file where the URL is saved to.
        "complete" => Complete(flat FileMetadata),
        "failed" => Failed(nested SaveUrlError),
    }
}
