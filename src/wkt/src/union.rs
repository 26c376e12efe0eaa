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

//! Tagged unions and their JSON encoding.
//!
//! The Dropbox API represents a value that is exactly one of several shapes
//! as a JSON object with a discriminant under the `.tag` key. Cases that carry
//! data place it in one of two ways:
//!
//! * **nested**: the payload is under a key with the same name as the tag,
//!   for example `{".tag": "update", "update": "a1c10ce0dd78"}`.
//! * **flattened**: the payload fields are merged into the same object,
//!   for example `{".tag": "file", "name": "a.txt", "size": 10}`.
//!
//! Which layout applies is part of the static description of each case, it is
//! never inferred from the input. Unions declared with [tagged_union] are
//! open: a tag unknown to this version of the library decodes successfully
//! into the `UnknownValue` variant, preserving the tag verbatim.
//!
//! # Example
//! ```
//! # use dropbox_sdk_wkt::tagged_union;
//! #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
//! pub struct FileInfo {
//!     pub name: String,
//!     pub size: u64,
//! }
//!
//! tagged_union! {
//!     pub enum Entry {
//!         "file" => File(flat FileInfo),
//!         "folder" => Folder(nested String),
//!         "deleted" => Deleted,
//!     }
//! }
//!
//! let entry: Entry = serde_json::from_str(r#"{".tag": "file", "name": "a.txt", "size": 10}"#)?;
//! assert_eq!(entry, Entry::File(FileInfo { name: "a.txt".into(), size: 10 }));
//!
//! let entry: Entry = serde_json::from_str(r#"{".tag": "symlink"}"#)?;
//! assert_eq!(entry.tag(), "symlink");
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde_json::{Map, Value};

#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;

/// The key holding the discriminant in every encoded union.
pub const TAG_KEY: &str = ".tag";

/// Where the payload of a case lives in the encoded object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// The case carries no payload.
    Void,
    /// The payload is the value under the key named by the tag.
    Nested,
    /// The payload is decoded from the whole object, including the tag.
    Flattened,
}

/// The static description of one case in a tagged union.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Case {
    pub tag: &'static str,
    pub layout: Layout,
}

/// Implemented by every type declared with [tagged_union].
///
/// Applications rarely need this trait, the generated types also implement
/// `serde::Serialize`, `serde::Deserialize` and `std::fmt::Display`.
pub trait TaggedUnion: Sized {
    /// The known cases, in declaration order.
    const CASES: &'static [Case];

    /// Creates the value for a known case from its (still encoded) payload.
    ///
    /// For [Layout::Void] cases `payload` is ignored. For [Layout::Nested]
    /// cases it is `null` when the key was absent.
    fn from_case(tag: &str, payload: Value) -> serde_json::Result<Self>;

    /// Creates the value for a tag not in [CASES][TaggedUnion::CASES].
    fn unknown(tag: String) -> Self;

    /// The discriminant of this value.
    fn tag(&self) -> &str;

    /// The payload of this value, if the active case carries one.
    fn payload(&self) -> serde_json::Result<Option<Value>>;
}

/// Finds the static description of a known tag.
pub fn find_case<T: TaggedUnion>(tag: &str) -> Option<&'static Case> {
    T::CASES.iter().find(|c| c.tag == tag)
}

/// Decodes a tagged union from an already parsed JSON object.
///
/// Only the payload of the matched case is decoded. The other keys in the
/// object are never inspected, so sibling fields with unexpected shapes do
/// not cause errors.
pub fn decode<T: TaggedUnion>(mut object: Map<String, Value>) -> serde_json::Result<T> {
    use serde::de::Error as _;
    let tag = match object.get(TAG_KEY) {
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => {
            return Err(serde_json::Error::custom(format!(
                "invalid type for `{TAG_KEY}`: {other}, expected a string"
            )));
        }
        None => return Err(serde_json::Error::missing_field(TAG_KEY)),
    };
    let Some(case) = find_case::<T>(&tag) else {
        return Ok(T::unknown(tag));
    };
    let payload = match case.layout {
        Layout::Void => Value::Null,
        Layout::Nested => object.remove(case.tag).unwrap_or(Value::Null),
        Layout::Flattened => Value::Object(object),
    };
    T::from_case(case.tag, payload)
}

/// Encodes a tagged union as a JSON object.
pub fn encode<T: TaggedUnion>(value: &T) -> serde_json::Result<Map<String, Value>> {
    use serde::ser::Error as _;
    let tag = value.tag();
    let layout = find_case::<T>(tag).map_or(Layout::Void, |c| c.layout);
    let mut object = Map::new();
    match (layout, value.payload()?) {
        (_, None) | (_, Some(Value::Null)) | (Layout::Void, _) => {}
        (Layout::Nested, Some(payload)) => {
            object.insert(tag.to_string(), payload);
        }
        (Layout::Flattened, Some(Value::Object(fields))) => object.extend(fields),
        (Layout::Flattened, Some(other)) => {
            return Err(serde_json::Error::custom(format!(
                "the payload for flattened case `{tag}` must be an object, got {other}"
            )));
        }
    }
    object.insert(TAG_KEY.to_string(), Value::String(tag.to_string()));
    Ok(object)
}

/// Implements `serde::Serialize` for the types declared with [tagged_union].
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: TaggedUnion,
    S: serde::Serializer,
{
    use serde::Serialize;
    use serde::ser::Error as _;
    encode(value)
        .map_err(S::Error::custom)?
        .serialize(serializer)
}

/// Implements `serde::Deserialize` for the types declared with [tagged_union].
///
/// Errors in the object itself come from the deserializer. Errors decoding
/// the matched payload are reported with `D::Error::custom`, keeping the
/// message. With `serde_json` these are always data errors, see
/// [serde_json::error::Category::Data].
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: TaggedUnion,
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    use serde::de::Error as _;
    let object = Map::<String, Value>::deserialize(deserializer)?;
    decode(object).map_err(D::Error::custom)
}

/// Declares an open tagged union.
///
/// Each case maps a tag to a variant. A case with a payload names its layout,
/// `nested` or `flat`, and the payload type:
///
/// ```
/// # use dropbox_sdk_wkt::tagged_union;
/// tagged_union! {
///     /// How to resolve a conflicting write.
///     pub enum WriteMode {
///         "add" => Add,
///         "overwrite" => Overwrite,
///         "update" => Update(nested String),
///     }
/// }
/// let mode = WriteMode::Update("a1c10ce0dd78".into());
/// assert_eq!(
///     serde_json::to_value(&mode)?,
///     serde_json::json!({".tag": "update", "update": "a1c10ce0dd78"})
/// );
/// assert_eq!(mode.to_string(), "update");
/// # Ok::<(), serde_json::Error>(())
/// ```
///
/// The macro adds an `UnknownValue(String)` variant, the `tag()` accessor,
/// and the [TaggedUnion], `serde` and `Display` implementations.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $tag:literal => $variant:ident $( ( $layout:ident $ty:ty ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $( ( $ty ) )?,
            )*
            /// A case unknown to this version of the library.
            ///
            /// Holds the tag as received from the service.
            UnknownValue(::std::string::String),
        }

        impl $name {
            /// The tag identifying the active case.
            pub fn tag(&self) -> &str {
                $crate::union::TaggedUnion::tag(self)
            }
        }

        impl $crate::union::TaggedUnion for $name {
            const CASES: &'static [$crate::union::Case] = &[
                $(
                    $crate::union::Case {
                        tag: $tag,
                        layout: $crate::tagged_union!(@layout $( $layout )?),
                    },
                )*
            ];

            fn from_case(
                tag: &str,
                payload: $crate::union::serde_json::Value,
            ) -> $crate::union::serde_json::Result<Self> {
                let _ = &payload;
                match tag {
                    $( $tag => $crate::tagged_union!(@from $name $variant payload $( $ty )?), )*
                    _ => Ok(Self::UnknownValue(tag.to_string())),
                }
            }

            fn unknown(tag: ::std::string::String) -> Self {
                Self::UnknownValue(tag)
            }

            fn tag(&self) -> &str {
                match self {
                    $( $crate::tagged_union!(@bind $name $variant _v $( $ty )?) => $tag, )*
                    Self::UnknownValue(tag) => tag.as_str(),
                }
            }

            fn payload(
                &self,
            ) -> $crate::union::serde_json::Result<::std::option::Option<$crate::union::serde_json::Value>> {
                match self {
                    $( $crate::tagged_union!(@bind $name $variant v $( $ty )?) => $crate::tagged_union!(@to_value v $( $ty )?), )*
                    Self::UnknownValue(_) => Ok(None),
                }
            }
        }

        impl $crate::union::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::union::serde::Serializer,
            {
                $crate::union::serialize(self, serializer)
            }
        }

        impl<'de> $crate::union::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::union::serde::Deserializer<'de>,
            {
                $crate::union::deserialize(deserializer)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.tag())
            }
        }
    };

    (@layout) => { $crate::union::Layout::Void };
    (@layout nested) => { $crate::union::Layout::Nested };
    (@layout flat) => { $crate::union::Layout::Flattened };

    (@from $name:ident $variant:ident $payload:ident) => { Ok($name::$variant) };
    (@from $name:ident $variant:ident $payload:ident $ty:ty) => {
        $crate::union::serde_json::from_value::<$ty>($payload).map($name::$variant)
    };

    (@bind $name:ident $variant:ident $v:ident) => { $name::$variant };
    (@bind $name:ident $variant:ident $v:ident $ty:ty) => { $name::$variant($v) };

    (@to_value $v:ident) => { Ok(None) };
    (@to_value $v:ident $ty:ty) => { $crate::union::serde_json::to_value($v).map(Some) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    struct Entry {
        name: String,
        size: u64,
    }

    crate::tagged_union! {
        enum Sample {
            "empty" => Empty,
            "text" => Text(nested String),
            "maybe" => Maybe(nested Option<String>),
            "sized" => Sized(flat Entry),
        }
    }

    #[test]
    fn cases() {
        assert_eq!(
            Sample::CASES.iter().map(|c| (c.tag, c.layout)).collect::<Vec<_>>(),
            vec![
                ("empty", Layout::Void),
                ("text", Layout::Nested),
                ("maybe", Layout::Nested),
                ("sized", Layout::Flattened),
            ]
        );
        assert!(find_case::<Sample>("text").is_some());
        assert!(find_case::<Sample>("unknown").is_none());
    }

    #[test_case(Sample::Empty, "empty")]
    #[test_case(Sample::Text("abc".into()), "text")]
    #[test_case(Sample::Maybe(None), "maybe")]
    #[test_case(Sample::Sized(Entry::default()), "sized")]
    #[test_case(Sample::UnknownValue("new".into()), "new")]
    fn tag(input: Sample, want: &str) {
        assert_eq!(input.tag(), want);
        assert_eq!(input.to_string(), want);
    }

    #[test]
    fn decode_ignores_unmatched_siblings() -> Result {
        // `text` has the wrong type, but `empty` never looks at it.
        let input = json!({".tag": "empty", "text": 123, "sized": [1, 2]});
        let got = serde_json::from_value::<Sample>(input)?;
        assert_eq!(got, Sample::Empty);
        Ok(())
    }

    #[test]
    fn decode_missing_nested_option() -> Result {
        let got = serde_json::from_value::<Sample>(json!({".tag": "maybe"}))?;
        assert_eq!(got, Sample::Maybe(None));
        let got = serde_json::from_value::<Sample>(json!({".tag": "maybe", "maybe": null}))?;
        assert_eq!(got, Sample::Maybe(None));
        Ok(())
    }

    #[test]
    fn decode_missing_required_nested() {
        let got = serde_json::from_value::<Sample>(json!({".tag": "text"}));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn decode_bad_matched_payload() {
        let got = serde_json::from_value::<Sample>(json!({".tag": "text", "text": 123}));
        assert!(got.is_err(), "{got:?}");
        let got = serde_json::from_value::<Sample>(json!({".tag": "sized", "name": "a"}));
        assert!(got.is_err(), "{got:?}");
    }

    #[test_case(json!({"text": "abc"}); "missing tag")]
    #[test_case(json!({".tag": 7}); "numeric tag")]
    #[test_case(json!({".tag": null}); "null tag")]
    #[test_case(json!("text"); "bare string")]
    #[test_case(json!(["text"]); "array")]
    fn decode_malformed(input: Value) {
        let got = serde_json::from_value::<Sample>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn encode_flattened_requires_object() {
        #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
        struct NotAnObject(String);
        crate::tagged_union! {
            enum Bad {
                "bad" => Bad(flat NotAnObject),
            }
        }
        let got = serde_json::to_value(Bad::Bad(NotAnObject("x".into())));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn encode_skips_null_nested() -> Result {
        let got = serde_json::to_value(Sample::Maybe(None))?;
        assert_eq!(got, json!({".tag": "maybe"}));
        Ok(())
    }

    #[test]
    fn encode_tag_wins_over_payload() -> Result {
        #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
        struct Clash {
            #[serde(rename = ".tag")]
            tag: String,
        }
        crate::tagged_union! {
            enum Outer {
                "outer" => Outer(flat Clash),
            }
        }
        let got = serde_json::to_value(Outer::Outer(Clash { tag: "inner".into() }))?;
        assert_eq!(got, json!({".tag": "outer"}));
        Ok(())
    }
}
