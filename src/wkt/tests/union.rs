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

//! Test serialization for tagged unions.
//!
//! This shows (1) what the namespace crates declare for unions and
//! polymorphic structs, and (2) that these serialize as the service expects.

#[cfg(test)]
mod test {
    use dropbox_sdk_wkt::tagged_union;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    pub struct FileMetadata {
        pub name: String,
        pub size: u64,
        pub rev: Option<String>,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    pub struct FolderMetadata {
        pub name: String,
        pub id: Option<String>,
    }

    tagged_union! {
        pub enum Metadata {
            "file" => File(flat FileMetadata),
            "folder" => Folder(flat FolderMetadata),
            "deleted" => Deleted,
        }
    }

    tagged_union! {
        pub enum LookupError {
            "malformed_path" => MalformedPath(nested Option<String>),
            "not_found" => NotFound,
            "not_file" => NotFile,
            "other" => Other,
        }
    }

    tagged_union! {
        pub enum GetMetadataError {
            "path" => Path(nested LookupError),
        }
    }

    tagged_union! {
        pub enum UploadJobStatus {
            "in_progress" => InProgress,
            "complete" => Complete(flat FileMetadata),
            "failed" => Failed(nested LookupError),
        }
    }

    tagged_union! {
        pub enum LinkLookup {
            "metadata" => Metadata(nested Metadata),
            "path" => Path(nested String),
            "count" => Count(nested u64),
            "tags" => Tags(nested Vec<String>),
        }
    }

    #[test]
    fn flattened_case() -> TestResult {
        let input = json!({".tag": "file", "name": "a.txt", "size": 10});
        let got = serde_json::from_value::<Metadata>(input)?;
        let want = Metadata::File(FileMetadata {
            name: "a.txt".to_string(),
            size: 10,
            rev: None,
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn flattened_case_ignores_nested_key() -> TestResult {
        // The payload comes from the top-level object, a nested "file" key is
        // just another unknown field.
        let input = json!({".tag": "file", "name": "top", "size": 1, "file": {"name": "nested", "size": 2}});
        let got = serde_json::from_value::<Metadata>(input)?;
        let Metadata::File(file) = got else {
            panic!("expected a file, got {got:?}");
        };
        assert_eq!(file.name, "top");
        assert_eq!(file.size, 1);
        Ok(())
    }

    #[test]
    fn two_level_nested() -> TestResult {
        let input = json!({".tag": "path", "path": {".tag": "malformed_path", "malformed_path": "/x"}});
        let got = serde_json::from_value::<GetMetadataError>(input)?;
        assert_eq!(got.tag(), "path");
        let GetMetadataError::Path(inner) = &got else {
            panic!("expected a path error, got {got:?}");
        };
        assert_eq!(inner.tag(), "malformed_path");
        assert_eq!(inner, &LookupError::MalformedPath(Some("/x".to_string())));
        Ok(())
    }

    #[test]
    fn flattened_complete() -> TestResult {
        let input = json!({".tag": "complete", "name": "f", "size": 42});
        let got = serde_json::from_value::<UploadJobStatus>(input)?;
        let UploadJobStatus::Complete(complete) = &got else {
            panic!("expected a complete status, got {got:?}");
        };
        assert_eq!(complete.name, "f");
        assert_eq!(complete.size, 42);
        Ok(())
    }

    #[test_case(json!({".tag": "in_progress"}), UploadJobStatus::InProgress)]
    #[test_case(
        json!({".tag": "failed", "failed": {".tag": "not_found"}}),
        UploadJobStatus::Failed(LookupError::NotFound))]
    #[test_case(
        json!({".tag": "complete", "name": "f", "size": 1, "rev": "abc"}),
        UploadJobStatus::Complete(FileMetadata { name: "f".into(), size: 1, rev: Some("abc".into()) }))]
    fn known_case_populates_only_that_case(input: Value, want: UploadJobStatus) -> TestResult {
        let got = serde_json::from_value::<UploadJobStatus>(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!({".tag": "symlink"}), "symlink")]
    #[test_case(json!({".tag": "symlink", "symlink": {"target": "/a"}}), "symlink")]
    #[test_case(json!({".tag": "File", "name": "a", "size": 1}), "File"; "tags are case sensitive")]
    #[test_case(json!({".tag": ""}), ""; "empty tag")]
    fn unknown_tag_is_preserved(input: Value, want: &str) -> TestResult {
        let got = serde_json::from_value::<Metadata>(input)?;
        assert_eq!(got, Metadata::UnknownValue(want.to_string()));
        assert_eq!(got.tag(), want);
        Ok(())
    }

    #[test]
    fn unknown_tag_encodes_tag_only() -> TestResult {
        let got = serde_json::to_value(Metadata::UnknownValue("symlink".to_string()))?;
        assert_eq!(got, json!({".tag": "symlink"}));
        Ok(())
    }

    #[test_case(json!({".tag": "file", "name": "a.txt", "size": 10}))]
    #[test_case(json!({".tag": "file", "name": "a.txt", "size": 10, "rev": "015"}))]
    #[test_case(json!({".tag": "folder", "name": "Photos", "id": "id:a4ayc"}))]
    #[test_case(json!({".tag": "deleted"}))]
    fn roundtrip_metadata(input: Value) -> TestResult {
        let got = serde_json::to_value(serde_json::from_value::<Metadata>(input.clone())?)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test_case(json!({".tag": "metadata", "metadata": {".tag": "folder", "name": "Photos"}}))]
    #[test_case(json!({".tag": "path", "path": "/a/b"}))]
    #[test_case(json!({".tag": "count", "count": 7}))]
    #[test_case(json!({".tag": "tags", "tags": ["a", "b"]}))]
    fn roundtrip_nested(input: Value) -> TestResult {
        let got = serde_json::to_value(serde_json::from_value::<LinkLookup>(input.clone())?)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn roundtrip_bytes() -> TestResult {
        let input = r#"{".tag":"path","path":{".tag":"malformed_path","malformed_path":"/x"}}"#;
        let got = serde_json::to_string(&serde_json::from_str::<GetMetadataError>(input)?)?;
        assert_eq!(
            serde_json::from_str::<Value>(&got)?,
            serde_json::from_str::<Value>(input)?
        );
        Ok(())
    }

    #[test_case(r#""file""#; "bare string")]
    #[test_case("42"; "number")]
    #[test_case("null"; "null")]
    #[test_case(r#"{"name": "a.txt"}"#; "missing tag")]
    #[test_case(r#"{".tag": ["file"]}"#; "tag is not a string")]
    #[test_case(r#"{".tag": "file", "name": "a.txt""#; "truncated")]
    fn malformed(input: &str) {
        let got = serde_json::from_str::<Metadata>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn malformed_matched_payload() {
        let input = json!({".tag": "file", "name": "a.txt", "size": "ten"});
        let got = serde_json::from_value::<Metadata>(input);
        assert!(got.is_err(), "{got:?}");
    }

    fn decode_metadata(input: &str) -> serde_json::Result<()> {
        serde_json::from_str::<Metadata>(input).map(|_| ())
    }

    fn decode_error(input: &str) -> serde_json::Result<()> {
        serde_json::from_str::<GetMetadataError>(input).map(|_| ())
    }

    #[test_case(r#"{".tag": "file", "name": "a.txt", "size": "ten"}"#, decode_metadata; "flattened")]
    #[test_case(
        r#"{".tag": "path", "path": {".tag": "malformed_path", "malformed_path": 7}}"#,
        decode_error;
        "nested"
    )]
    #[test_case(r#"{".tag": "path"}"#, decode_error; "missing nested")]
    fn matched_payload_error_category(input: &str, decode: fn(&str) -> serde_json::Result<()>) {
        let err = decode(input).unwrap_err();
        assert_eq!(err.classify(), serde_json::error::Category::Data, "{err:?}");
        assert!(err.is_data(), "{err:?}");
    }

    #[test]
    fn matched_payload_error_message() {
        let input = r#"{".tag": "file", "name": "a.txt", "size": "ten"}"#;
        let err = serde_json::from_str::<Metadata>(input).unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{err}");
        assert!(err.to_string().contains("u64"), "{err}");
    }

    #[test]
    fn display() {
        assert_eq!(Metadata::Deleted.to_string(), "deleted");
        assert_eq!(
            GetMetadataError::Path(LookupError::NotFound).to_string(),
            "path"
        );
    }

    #[test]
    fn in_struct_fields() -> TestResult {
        #[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
        struct ListResult {
            entries: Vec<Metadata>,
            has_more: bool,
        }
        let input = json!({
            "entries": [
                {".tag": "folder", "name": "Photos"},
                {".tag": "file", "name": "a.txt", "size": 10},
                {".tag": "symlink", "name": "b"},
            ],
            "has_more": false,
        });
        let got = serde_json::from_value::<ListResult>(input)?;
        let tags = got.entries.iter().map(Metadata::tag).collect::<Vec<_>>();
        assert_eq!(tags, vec!["folder", "file", "symlink"]);
        Ok(())
    }
}
