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

//! This namespace contains endpoints and data types for file request operations.

use wkt::tagged_union;

/// A file request for receiving files into the user's Dropbox account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FileRequest {
    /// The ID of the file request.
    pub id: String,

    /// The URL of the file request.
    pub url: String,

    /// The title of the file request.
    pub title: String,

    /// The path of the folder in the Dropbox where uploaded files will be sent.
    /// This can be `None` if the destination was removed. For apps with the app
    /// folder permission, this will be relative to the app folder.
    pub destination: std::option::Option<String>,

    /// When this file request was created.
    pub created: wkt::Timestamp,

    /// The deadline for this file request. Only set if the request has a
    /// deadline.
    pub deadline: std::option::Option<FileRequestDeadline>,

    /// Whether or not the file request is open. If the file request is closed,
    /// it will not accept any more file submissions.
    pub is_open: bool,

    /// The number of files this file request has received.
    pub file_count: i64,

    /// A description of the file request.
    pub description: std::option::Option<String>,
}

impl FileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][FileRequest::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [url][FileRequest::url].
    pub fn set_url<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }

    /// Sets the value of [title][FileRequest::title].
    pub fn set_title<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.title = v.into();
        self
    }

    /// Sets the value of [destination][FileRequest::destination].
    pub fn set_destination<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.destination = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination][FileRequest::destination].
    pub fn set_or_clear_destination<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created][FileRequest::created].
    pub fn set_created<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.created = v.into();
        self
    }

    /// Sets the value of [deadline][FileRequest::deadline].
    pub fn set_deadline<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<FileRequestDeadline>,
    {
        self.deadline = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deadline][FileRequest::deadline].
    pub fn set_or_clear_deadline<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<FileRequestDeadline>,
    {
        self.deadline = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_open][FileRequest::is_open].
    pub fn set_is_open<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_open = v.into();
        self
    }

    /// Sets the value of [file_count][FileRequest::file_count].
    pub fn set_file_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.file_count = v.into();
        self
    }

    /// Sets the value of [description][FileRequest::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][FileRequest::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = v.map(|x| x.into());
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FileRequestDeadline {
    /// The deadline for this file request.
    pub deadline: wkt::Timestamp,

    /// If set, allow uploads after the deadline has passed. These uploads will
    /// be marked overdue.
    pub allow_late_uploads: std::option::Option<GracePeriod>,
}

impl FileRequestDeadline {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [deadline][FileRequestDeadline::deadline].
    pub fn set_deadline<T: std::convert::Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.deadline = v.into();
        self
    }

    /// Sets the value of [allow_late_uploads][FileRequestDeadline::allow_late_uploads].
    pub fn set_allow_late_uploads<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<GracePeriod>,
    {
        self.allow_late_uploads = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [allow_late_uploads][FileRequestDeadline::allow_late_uploads].
    pub fn set_or_clear_allow_late_uploads<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<GracePeriod>,
    {
        self.allow_late_uploads = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    pub enum GracePeriod {
        "one_day" => OneDay,
        "two_days" => TwoDays,
        "seven_days" => SevenDays,
        "thirty_days" => ThirtyDays,
        "always" => Always,
        "other" => Other,
    }
}

/// Result for [count][crate::client::FileRequests::count].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CountFileRequestsResult {
    /// The number file requests owner by this user.
    pub file_request_count: u64,
}

impl CountFileRequestsResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_request_count][CountFileRequestsResult::file_request_count].
    pub fn set_file_request_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.file_request_count = v.into();
        self
    }
}

tagged_union! {
    /// There was an error counting the file requests.
    pub enum CountFileRequestsError {
        /// This user's Dropbox Business team doesn't allow file requests.
        "disabled_for_team" => DisabledForTeam,
        "other" => Other,
    }
}

/// Arguments for [create][crate::client::FileRequests::create].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateFileRequestArgs {
    /// The title of the file request. Must not be empty.
    pub title: String,

    /// The path of the folder in the Dropbox where uploaded files will be sent.
    /// For apps with the app folder permission, this will be relative to the
    /// app folder.
    pub destination: String,

    /// The deadline for the file request. Deadlines can only be set by
    /// Professional and Business accounts.
    pub deadline: std::option::Option<FileRequestDeadline>,

    /// Whether or not the file request should be open. If the file request is
    /// closed, it will not accept any file submissions, but it can be opened
    /// later.
    pub open: bool,

    /// A description of the file request.
    pub description: std::option::Option<String>,
}

impl std::default::Default for CreateFileRequestArgs {
    fn default() -> Self {
        Self {
            title: std::default::Default::default(),
            destination: std::default::Default::default(),
            deadline: std::default::Default::default(),
            open: create_file_request_args_open(),
            description: std::default::Default::default(),
        }
    }
}

impl CreateFileRequestArgs {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [title][CreateFileRequestArgs::title].
    pub fn set_title<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.title = v.into();
        self
    }

    /// Sets the value of [destination][CreateFileRequestArgs::destination].
    pub fn set_destination<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.destination = v.into();
        self
    }

    /// Sets the value of [deadline][CreateFileRequestArgs::deadline].
    pub fn set_deadline<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<FileRequestDeadline>,
    {
        self.deadline = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deadline][CreateFileRequestArgs::deadline].
    pub fn set_or_clear_deadline<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<FileRequestDeadline>,
    {
        self.deadline = v.map(|x| x.into());
        self
    }

    /// Sets the value of [open][CreateFileRequestArgs::open].
    pub fn set_open<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.open = v.into();
        self
    }

    /// Sets the value of [description][CreateFileRequestArgs::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][CreateFileRequestArgs::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = v.map(|x| x.into());
        self
    }
}

fn create_file_request_args_open() -> bool {
    true
}

tagged_union! {
    /// There was an error creating the file request.
    pub enum CreateFileRequestError {
        /// This user's Dropbox Business team doesn't allow file requests.
        "disabled_for_team" => DisabledForTeam,
        "other" => Other,
        /// This file request ID was not found.
        "not_found" => NotFound,
        /// The specified path is not a folder.
        "not_a_folder" => NotAFolder,
        /// This file request is not accessible to this app. Apps with the app
        /// folder permission can only access file requests in their app folder.
        "app_lacks_access" => AppLacksAccess,
        /// This user doesn't have permission to access or modify this file
        /// request.
        "no_permission" => NoPermission,
        /// This user's email address is not verified. File requests are only
        /// available on accounts with a verified email address. Users can
        /// verify their email address in the Dropbox web settings.
        "email_unverified" => EmailUnverified,
        /// There was an error validating the request. For example, the title
        /// was invalid, or there were disallowed characters in the destination
        /// path.
        "validation_error" => ValidationError,
        /// File requests are not available on the specified folder.
        "invalid_location" => InvalidLocation,
        /// The user has reached the rate limit for creating file requests. The
        /// limit is currently 4000 file requests total.
        "rate_limit" => RateLimit,
    }
}

/// Arguments for [get][crate::client::FileRequests::get].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetFileRequestArgs {
    /// The ID of the file request to retrieve.
    pub id: String,
}

impl GetFileRequestArgs {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][GetFileRequestArgs::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

tagged_union! {
    /// There was an error retrieving the specified file request.
    pub enum GetFileRequestError {
        /// This user's Dropbox Business team doesn't allow file requests.
        "disabled_for_team" => DisabledForTeam,
        "other" => Other,
        /// This file request ID was not found.
        "not_found" => NotFound,
        /// The specified path is not a folder.
        "not_a_folder" => NotAFolder,
        /// This file request is not accessible to this app. Apps with the app
        /// folder permission can only access file requests in their app folder.
        "app_lacks_access" => AppLacksAccess,
        /// This user doesn't have permission to access or modify this file
        /// request.
        "no_permission" => NoPermission,
        /// This user's email address is not verified. File requests are only
        /// available on accounts with a verified email address. Users can
        /// verify their email address in the Dropbox web settings.
        "email_unverified" => EmailUnverified,
        /// There was an error validating the request. For example, the title
        /// was invalid, or there were disallowed characters in the destination
        /// path.
        "validation_error" => ValidationError,
    }
}

/// Arguments for [list_v2][crate::client::FileRequests::list_v2].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFileRequestsArg {
    /// The maximum number of file requests that should be returned per request.
    pub limit: u64,
}

impl std::default::Default for ListFileRequestsArg {
    fn default() -> Self {
        Self {
            limit: list_file_requests_arg_limit(),
        }
    }
}

impl ListFileRequestsArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [limit][ListFileRequestsArg::limit].
    pub fn set_limit<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.limit = v.into();
        self
    }
}

fn list_file_requests_arg_limit() -> u64 {
    1000
}

/// Result for [list_v2][crate::client::FileRequests::list_v2] and
/// [list_continue][crate::client::FileRequests::list_continue].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFileRequestsV2Result {
    /// The file requests owned by this user. Apps with the app folder
    /// permission will only see file requests in their app folder.
    pub file_requests: Vec<FileRequest>,

    /// Pass the cursor into
    /// [list_continue][crate::client::FileRequests::list_continue] to obtain
    /// additional file requests.
    pub cursor: String,

    /// Is true if there are additional file requests that have not been
    /// returned yet. An additional call to
    /// [list_continue][crate::client::FileRequests::list_continue] can retrieve
    /// them.
    pub has_more: bool,
}

impl ListFileRequestsV2Result {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_requests][ListFileRequestsV2Result::file_requests].
    pub fn set_file_requests<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<FileRequest>,
    {
        use std::iter::Iterator;
        self.file_requests = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [cursor][ListFileRequestsV2Result::cursor].
    pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }

    /// Sets the value of [has_more][ListFileRequestsV2Result::has_more].
    pub fn set_has_more<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.has_more = v.into();
        self
    }
}

tagged_union! {
    /// There was an error retrieving the file requests.
    pub enum ListFileRequestsError {
        /// This user's Dropbox Business team doesn't allow file requests.
        "disabled_for_team" => DisabledForTeam,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFileRequestsContinueArg {
    /// The cursor returned by the previous API call specified in the endpoint
    /// description.
    pub cursor: String,
}

impl ListFileRequestsContinueArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cursor][ListFileRequestsContinueArg::cursor].
    pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }
}

tagged_union! {
    /// There was an error retrieving the file requests.
    pub enum ListFileRequestsContinueError {
        /// This user's Dropbox Business team doesn't allow file requests.
        "disabled_for_team" => DisabledForTeam,
        "other" => Other,
        /// The cursor is invalid.
        "invalid_cursor" => InvalidCursor,
    }
}

/// Arguments for [update][crate::client::FileRequests::update].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdateFileRequestArgs {
    /// The ID of the file request to update.
    pub id: String,

    /// The new title of the file request. Must not be empty.
    pub title: std::option::Option<String>,

    /// The new path of the folder in the Dropbox where uploaded files will be
    /// sent. For apps with the app folder permission, this will be relative to
    /// the app folder.
    pub destination: std::option::Option<String>,

    /// The new deadline for the file request. Deadlines can only be set by
    /// Professional and Business accounts.
    pub deadline: UpdateFileRequestDeadline,

    /// Whether to set this file request as open or closed.
    pub open: std::option::Option<bool>,

    /// The description of the file request.
    pub description: std::option::Option<String>,
}

impl UpdateFileRequestArgs {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][UpdateFileRequestArgs::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [title][UpdateFileRequestArgs::title].
    pub fn set_title<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.title = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [title][UpdateFileRequestArgs::title].
    pub fn set_or_clear_title<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.title = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination][UpdateFileRequestArgs::destination].
    pub fn set_destination<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.destination = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination][UpdateFileRequestArgs::destination].
    pub fn set_or_clear_destination<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deadline][UpdateFileRequestArgs::deadline].
    pub fn set_deadline<T: std::convert::Into<UpdateFileRequestDeadline>>(mut self, v: T) -> Self {
        self.deadline = v.into();
        self
    }

    /// Sets the value of [open][UpdateFileRequestArgs::open].
    pub fn set_open<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.open = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [open][UpdateFileRequestArgs::open].
    pub fn set_or_clear_open<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.open = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][UpdateFileRequestArgs::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][UpdateFileRequestArgs::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    #[derive(Default)]
    pub enum UpdateFileRequestDeadline {
        /// Do not change the file request's deadline.
        #[default]
        "no_update" => NoUpdate,
        /// If `None`, the file request's deadline is cleared.
        "update" => Update(nested Option<FileRequestDeadline>),
        "other" => Other,
    }
}

tagged_union! {
    /// There is an error updating the file request.
    pub enum UpdateFileRequestError {
        /// This user's Dropbox Business team doesn't allow file requests.
        "disabled_for_team" => DisabledForTeam,
        "other" => Other,
        /// This file request ID was not found.
        "not_found" => NotFound,
        /// The specified path is not a folder.
        "not_a_folder" => NotAFolder,
        /// This file request is not accessible to this app. Apps with the app
        /// folder permission can only access file requests in their app folder.
        "app_lacks_access" => AppLacksAccess,
        /// This user doesn't have permission to access or modify this file
        /// request.
        "no_permission" => NoPermission,
        /// This user's email address is not verified. File requests are only
        /// available on accounts with a verified email address. Users can
        /// verify their email address in the Dropbox web settings.
        "email_unverified" => EmailUnverified,
        /// There was an error validating the request. For example, the title
        /// was invalid, or there were disallowed characters in the destination
        /// path.
        "validation_error" => ValidationError,
    }
}

/// Arguments for [delete][crate::client::FileRequests::delete].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteFileRequestArgs {
    /// List IDs of the file requests to delete.
    pub ids: Vec<String>,
}

impl DeleteFileRequestArgs {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ids][DeleteFileRequestArgs::ids].
    pub fn set_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Result for [delete][crate::client::FileRequests::delete].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteFileRequestsResult {
    /// The file requests deleted by the request.
    pub file_requests: Vec<FileRequest>,
}

impl DeleteFileRequestsResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_requests][DeleteFileRequestsResult::file_requests].
    pub fn set_file_requests<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<FileRequest>,
    {
        use std::iter::Iterator;
        self.file_requests = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

tagged_union! {
    /// There was an error deleting these file requests.
    pub enum DeleteFileRequestError {
        /// This user's Dropbox Business team doesn't allow file requests.
        "disabled_for_team" => DisabledForTeam,
        "other" => Other,
        /// This file request ID was not found.
        "not_found" => NotFound,
        /// The specified path is not a folder.
        "not_a_folder" => NotAFolder,
        /// This file request is not accessible to this app. Apps with the app
        /// folder permission can only access file requests in their app folder.
        "app_lacks_access" => AppLacksAccess,
        /// This user doesn't have permission to access or modify this file
        /// request.
        "no_permission" => NoPermission,
        /// This user's email address is not verified. File requests are only
        /// available on accounts with a verified email address. Users can
        /// verify their email address in the Dropbox web settings.
        "email_unverified" => EmailUnverified,
        /// There was an error validating the request. For example, the title
        /// was invalid, or there were disallowed characters in the destination
        /// path.
        "validation_error" => ValidationError,
        /// One or more file requests currently open.
        "file_request_open" => FileRequestOpen,
    }
}

/// Result for
/// [delete_all_closed][crate::client::FileRequests::delete_all_closed].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteAllClosedFileRequestsResult {
    /// The file requests deleted for this user.
    pub file_requests: Vec<FileRequest>,
}

impl DeleteAllClosedFileRequestsResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_requests][DeleteAllClosedFileRequestsResult::file_requests].
    pub fn set_file_requests<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<FileRequest>,
    {
        use std::iter::Iterator;
        self.file_requests = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

tagged_union! {
    /// There was an error deleting all closed file requests.
    pub enum DeleteAllClosedFileRequestsError {
        /// This user's Dropbox Business team doesn't allow file requests.
        "disabled_for_team" => DisabledForTeam,
        "other" => Other,
        /// This file request ID was not found.
        "not_found" => NotFound,
        /// The specified path is not a folder.
        "not_a_folder" => NotAFolder,
        /// This file request is not accessible to this app. Apps with the app
        /// folder permission can only access file requests in their app folder.
        "app_lacks_access" => AppLacksAccess,
        /// This user doesn't have permission to access or modify this file
        /// request.
        "no_permission" => NoPermission,
        /// This user's email address is not verified. File requests are only
        /// available on accounts with a verified email address. Users can
        /// verify their email address in the Dropbox web settings.
        "email_unverified" => EmailUnverified,
        /// There was an error validating the request. For example, the title
        /// was invalid, or there were disallowed characters in the destination
        /// path.
        "validation_error" => ValidationError,
    }
}
