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

//! Encode route arguments for HTTP headers.
//!
//! Upload and download routes send their argument as JSON in the
//! `Dropbox-API-Arg` header. HTTP header values must be ASCII, so any other
//! character is escaped using the JSON `\uXXXX` notation.

use gax::error::Error;
use http::HeaderValue;
use serde::Serialize;

/// The request header carrying the argument of upload and download routes.
pub const API_ARG: &str = "Dropbox-API-Arg";
/// The response header carrying the result of download routes.
pub const API_RESULT: &str = "Dropbox-API-Result";
pub const SELECT_USER: &str = "Dropbox-API-Select-User";
pub const SELECT_ADMIN: &str = "Dropbox-API-Select-Admin";
pub const PATH_ROOT: &str = "Dropbox-API-Path-Root";

/// Serializes `value` as JSON using only printable ASCII characters.
///
/// Non-ASCII characters and `DEL` (0x7F) are escaped as `\uXXXX`. Characters
/// outside the Basic Multilingual Plane become a surrogate pair.
pub fn header_safe_json<T>(value: &T) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)?;
    let mut escaped = String::with_capacity(json.len());
    let mut units = [0_u16; 2];
    for c in json.chars() {
        if c.is_ascii() && c != '\x7f' {
            escaped.push(c);
            continue;
        }
        for u in c.encode_utf16(&mut units) {
            escaped.push_str(&format!("\\u{u:04x}"));
        }
    }
    Ok(escaped)
}

/// Serializes `value` into a header value.
pub fn header_value<T>(value: &T) -> gax::Result<HeaderValue>
where
    T: Serialize + ?Sized,
{
    let json = header_safe_json(value).map_err(Error::ser)?;
    HeaderValue::from_str(&json).map_err(Error::ser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use test_case::test_case;

    #[test_case(json!(""), r#""""#; "empty")]
    #[test_case(json!(123), "123"; "number")]
    #[test_case(json!("Normal string!"), r#""Normal string!""#; "ascii")]
    #[test_case(json!("üñîcødé"), r#""\u00fc\u00f1\u00eec\u00f8d\u00e9""#; "unicode")]
    #[test_case(json!("\x7f"), r#""\u007f""#; "delete")]
    #[test_case(
        json!({"field": "some_üñîcødé_and_\x7F"}),
        r#"{"field":"some_\u00fc\u00f1\u00eec\u00f8d\u00e9_and_\u007f"}"#;
        "object"
    )]
    fn escape(input: Value, want: &str) -> anyhow::Result<()> {
        let got = header_safe_json(&input)?;
        assert_eq!(got, want);
        let round_trip = serde_json::from_str::<Value>(&got)?;
        assert_eq!(round_trip, input);
        Ok(())
    }

    #[test]
    fn surrogate_pairs() -> anyhow::Result<()> {
        let got = header_safe_json("🎉")?;
        assert_eq!(got, r#""\ud83c\udf89""#);
        assert_eq!(serde_json::from_str::<String>(&got)?, "🎉");
        Ok(())
    }

    #[test]
    fn value() -> anyhow::Result<()> {
        let got = header_value(&json!({"path": "/résumé.txt"}))?;
        assert_eq!(got.to_str()?, r#"{"path":"/r\u00e9sum\u00e9.txt"}"#);
        Ok(())
    }
}
