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

//! This namespace contains endpoints and data types for managing docs in Dropbox Paper.

use wkt::tagged_union;

tagged_union! {
    /// The import format of the incoming data.
    pub enum ImportFormat {
        /// The provided data is interpreted as standard HTML.
        "html" => Html,
        /// The provided data is interpreted as markdown. The first line of the
        /// provided document will be used as the doc title.
        "markdown" => Markdown,
        /// The provided data is interpreted as plain text. The first line of
        /// the provided document will be used as the doc title.
        "plain_text" => PlainText,
        "other" => Other,
    }
}

tagged_union! {
    /// The desired export format of the Paper doc.
    pub enum ExportFormat {
        /// The HTML export format.
        "html" => Html,
        /// The markdown export format.
        "markdown" => Markdown,
        "other" => Other,
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct PaperDocCreateArgs {
    /// The Paper folder ID where the Paper document should be created. The API
    /// user has to have write access to this folder or error is thrown.
    pub parent_folder_id: std::option::Option<String>,

    /// The format of provided data.
    pub import_format: ImportFormat,
}

impl PaperDocCreateArgs {
    pub fn new(import_format: ImportFormat) -> Self {
        Self {
            parent_folder_id: std::default::Default::default(),
            import_format,
        }
    }

    /// Sets the value of [parent_folder_id][PaperDocCreateArgs::parent_folder_id].
    pub fn set_parent_folder_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_folder_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parent_folder_id][PaperDocCreateArgs::parent_folder_id].
    pub fn set_or_clear_parent_folder_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.parent_folder_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [import_format][PaperDocCreateArgs::import_format].
    pub fn set_import_format<T: std::convert::Into<ImportFormat>>(mut self, v: T) -> Self {
        self.import_format = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PaperDocCreateUpdateResult {
    /// Doc ID of the newly created doc.
    pub doc_id: String,

    /// The Paper doc revision. Simply an ever increasing number.
    pub revision: i64,

    /// The Paper doc title.
    pub title: String,
}

impl PaperDocCreateUpdateResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [doc_id][PaperDocCreateUpdateResult::doc_id].
    pub fn set_doc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.doc_id = v.into();
        self
    }

    /// Sets the value of [revision][PaperDocCreateUpdateResult::revision].
    pub fn set_revision<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.revision = v.into();
        self
    }

    /// Sets the value of [title][PaperDocCreateUpdateResult::title].
    pub fn set_title<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.title = v.into();
        self
    }
}

tagged_union! {
    pub enum PaperDocCreateError {
        /// Your account does not have permissions to perform this action. This
        /// may be due to it only having access to Paper as files in the Dropbox
        /// filesystem.
        "insufficient_permissions" => InsufficientPermissions,
        "other" => Other,
        /// The provided content was malformed and cannot be imported to Paper.
        "content_malformed" => ContentMalformed,
        /// The specified Paper folder cannot be found.
        "folder_not_found" => FolderNotFound,
        /// The newly created Paper doc would be too large. Please split the
        /// content into multiple docs.
        "doc_length_exceeded" => DocLengthExceeded,
        /// The imported document contains an image that is too large. The
        /// current limit is 1MB. This only applies to HTML with data URI.
        "image_size_exceeded" => ImageSizeExceeded,
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct PaperDocExport {
    /// The Paper doc ID.
    pub doc_id: String,

    /// The format of the exported document.
    pub export_format: ExportFormat,
}

impl PaperDocExport {
    pub fn new(export_format: ExportFormat) -> Self {
        Self {
            doc_id: std::default::Default::default(),
            export_format,
        }
    }

    /// Sets the value of [doc_id][PaperDocExport::doc_id].
    pub fn set_doc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.doc_id = v.into();
        self
    }

    /// Sets the value of [export_format][PaperDocExport::export_format].
    pub fn set_export_format<T: std::convert::Into<ExportFormat>>(mut self, v: T) -> Self {
        self.export_format = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PaperDocExportResult {
    /// The Paper doc owner's email address.
    pub owner: String,

    /// The Paper doc title.
    pub title: String,

    /// The Paper doc revision. Simply an ever increasing number.
    pub revision: i64,

    /// MIME type of the export. This corresponds to [ExportFormat] specified in
    /// the request.
    pub mime_type: String,
}

impl PaperDocExportResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [owner][PaperDocExportResult::owner].
    pub fn set_owner<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.owner = v.into();
        self
    }

    /// Sets the value of [title][PaperDocExportResult::title].
    pub fn set_title<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.title = v.into();
        self
    }

    /// Sets the value of [revision][PaperDocExportResult::revision].
    pub fn set_revision<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.revision = v.into();
        self
    }

    /// Sets the value of [mime_type][PaperDocExportResult::mime_type].
    pub fn set_mime_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.mime_type = v.into();
        self
    }
}

tagged_union! {
    pub enum DocLookupError {
        /// Your account does not have permissions to perform this action. This
        /// may be due to it only having access to Paper as files in the Dropbox
        /// filesystem.
        "insufficient_permissions" => InsufficientPermissions,
        "other" => Other,
        /// The required doc was not found.
        "doc_not_found" => DocNotFound,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RefPaperDoc {
    /// The Paper doc ID.
    pub doc_id: String,
}

impl RefPaperDoc {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [doc_id][RefPaperDoc::doc_id].
    pub fn set_doc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.doc_id = v.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListPaperDocsArgs {
    /// Allows user to specify how the Paper docs should be filtered.
    pub filter_by: ListPaperDocsFilterBy,

    /// Allows user to specify how the Paper docs should be sorted.
    pub sort_by: ListPaperDocsSortBy,

    /// Allows user to specify the sort order of the result.
    pub sort_order: ListPaperDocsSortOrder,

    /// Size limit per batch. The maximum number of docs that can be retrieved
    /// per batch is 1000. Higher value results in invalid arguments error.
    pub limit: i32,
}

impl std::default::Default for ListPaperDocsArgs {
    fn default() -> Self {
        Self {
            filter_by: list_paper_docs_args_filter_by(),
            sort_by: list_paper_docs_args_sort_by(),
            sort_order: list_paper_docs_args_sort_order(),
            limit: list_paper_docs_args_limit(),
        }
    }
}

impl ListPaperDocsArgs {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [filter_by][ListPaperDocsArgs::filter_by].
    pub fn set_filter_by<T: std::convert::Into<ListPaperDocsFilterBy>>(mut self, v: T) -> Self {
        self.filter_by = v.into();
        self
    }

    /// Sets the value of [sort_by][ListPaperDocsArgs::sort_by].
    pub fn set_sort_by<T: std::convert::Into<ListPaperDocsSortBy>>(mut self, v: T) -> Self {
        self.sort_by = v.into();
        self
    }

    /// Sets the value of [sort_order][ListPaperDocsArgs::sort_order].
    pub fn set_sort_order<T: std::convert::Into<ListPaperDocsSortOrder>>(mut self, v: T) -> Self {
        self.sort_order = v.into();
        self
    }

    /// Sets the value of [limit][ListPaperDocsArgs::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = v.into();
        self
    }
}

fn list_paper_docs_args_filter_by() -> ListPaperDocsFilterBy {
    ListPaperDocsFilterBy::DocsAccessed
}

fn list_paper_docs_args_sort_by() -> ListPaperDocsSortBy {
    ListPaperDocsSortBy::Accessed
}

fn list_paper_docs_args_sort_order() -> ListPaperDocsSortOrder {
    ListPaperDocsSortOrder::Ascending
}

fn list_paper_docs_args_limit() -> i32 {
    1000
}

tagged_union! {
    #[derive(Default)]
    pub enum ListPaperDocsFilterBy {
        /// Fetches all Paper doc IDs that the user has ever accessed.
        #[default]
        "docs_accessed" => DocsAccessed,
        /// Fetches only the Paper doc IDs that the user has created.
        "docs_created" => DocsCreated,
        "other" => Other,
    }
}

tagged_union! {
    #[derive(Default)]
    pub enum ListPaperDocsSortBy {
        /// Sorts the Paper docs by the time they were last accessed.
        #[default]
        "accessed" => Accessed,
        /// Sorts the Paper docs by the time they were last modified.
        "modified" => Modified,
        /// Sorts the Paper docs by the creation time.
        "created" => Created,
        "other" => Other,
    }
}

tagged_union! {
    #[derive(Default)]
    pub enum ListPaperDocsSortOrder {
        /// Sorts the search result in ascending order.
        #[default]
        "ascending" => Ascending,
        /// Sorts the search result in descending order.
        "descending" => Descending,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListPaperDocsResponse {
    /// The list of Paper doc IDs that can be used to access the given Paper
    /// docs or supplied to other API methods. The list is sorted in the order
    /// specified by the initial call.
    pub doc_ids: Vec<String>,

    /// Pass the cursor into
    /// [docs_list_continue][crate::client::Paper::docs_list_continue] to
    /// paginate through all files. The cursor preserves all properties as
    /// specified in the original call.
    pub cursor: Cursor,

    /// Will be set to True if a subsequent call with the provided cursor will
    /// return immediately with some results. If set to False please allow some
    /// delay before making another call.
    pub has_more: bool,
}

impl ListPaperDocsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [doc_ids][ListPaperDocsResponse::doc_ids].
    pub fn set_doc_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.doc_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [cursor][ListPaperDocsResponse::cursor].
    pub fn set_cursor<T: std::convert::Into<Cursor>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }

    /// Sets the value of [has_more][ListPaperDocsResponse::has_more].
    pub fn set_has_more<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.has_more = v.into();
        self
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Cursor {
    /// The actual cursor value.
    pub value: String,

    /// Expiration time of [value][Self::value]. Some cursors might have
    /// expiration time assigned. This is a UTC value after which the cursor is
    /// no longer valid and the API starts returning an error. If cursor expires
    /// a new one needs to be obtained and pagination needs to be restarted.
    /// Some cursors might be short-lived some cursors might be long-lived. This
    /// really depends on the sorting type and order.
    pub expiration: std::option::Option<wkt::Timestamp>,
}

impl Cursor {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][Cursor::value].
    pub fn set_value<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.value = v.into();
        self
    }

    /// Sets the value of [expiration][Cursor::expiration].
    pub fn set_expiration<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.expiration = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expiration][Cursor::expiration].
    pub fn set_or_clear_expiration<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.expiration = v.map(|x| x.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListPaperDocsContinueArgs {
    /// The cursor obtained from [docs_list][crate::client::Paper::docs_list] or
    /// [docs_list_continue][crate::client::Paper::docs_list_continue]. Allows
    /// for pagination.
    pub cursor: String,
}

impl ListPaperDocsContinueArgs {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cursor][ListPaperDocsContinueArgs::cursor].
    pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }
}

tagged_union! {
    pub enum ListDocsCursorError {
        "cursor_error" => CursorError(nested PaperApiCursorError),
        "other" => Other,
    }
}

tagged_union! {
    pub enum PaperApiCursorError {
        /// The provided cursor is expired.
        "expired_cursor" => ExpiredCursor,
        /// The provided cursor is invalid.
        "invalid_cursor" => InvalidCursor,
        /// The provided cursor contains invalid user.
        "wrong_user_in_cursor" => WrongUserInCursor,
        /// Indicates that the cursor has been invalidated. Call the
        /// corresponding non-continue endpoint to obtain a new cursor.
        "reset" => Reset,
        "other" => Other,
    }
}
