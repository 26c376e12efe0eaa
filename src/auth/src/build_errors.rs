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

//! Errors created during credentials construction.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for [Credentials] builders.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code, where the application is
/// mocking a client library behavior.
///
/// [Credentials]: super::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// A problem finding or opening the token file.
    pub fn is_loading(&self) -> bool {
        matches!(self.0, ErrorKind::Loading(_))
    }

    /// A problem parsing the token file.
    pub fn is_parsing(&self) -> bool {
        matches!(self.0, ErrorKind::Parsing(_))
    }

    /// The saved access token has expired.
    pub fn is_expired(&self) -> bool {
        matches!(self.0, ErrorKind::Expired(_))
    }

    /// No credentials were found in the environment.
    pub fn is_not_found(&self) -> bool {
        matches!(self.0, ErrorKind::NotFound)
    }

    /// A required value was missing.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, ErrorKind::MissingField(_))
    }

    pub(crate) fn loading<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Loading(source.into()))
    }

    pub(crate) fn parsing<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Parsing(source.into()))
    }

    pub(crate) fn expired(expiry: time::OffsetDateTime) -> Error {
        Error(ErrorKind::Expired(expiry))
    }

    pub(crate) fn not_found() -> Error {
        Error(ErrorKind::NotFound)
    }

    pub(crate) fn missing_field(field: &'static str) -> Error {
        Error(ErrorKind::MissingField(field))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not find or open the token file: {0}")]
    Loading(#[source] BoxError),
    #[error("cannot parse the token file: {0}")]
    Parsing(#[source] BoxError),
    #[error("the saved access token expired at {0}")]
    Expired(time::OffsetDateTime),
    #[error(
        "no credentials found, set DROPBOX_ACCESS_TOKEN, DROPBOX_TOKEN_FILE, or DROPBOX_APP_KEY and DROPBOX_APP_SECRET"
    )]
    NotFound,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn constructors() {
        let error = Error::loading("test message");
        assert!(error.is_loading(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test message"), "{error}");

        let error = Error::parsing("test message");
        assert!(error.is_parsing(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test message"), "{error}");

        let error = Error::expired(time::OffsetDateTime::UNIX_EPOCH);
        assert!(error.is_expired(), "{error:?}");
        assert!(error.to_string().contains("1970"), "{error}");

        let error = Error::not_found();
        assert!(error.is_not_found(), "{error:?}");
        assert!(error.to_string().contains("DROPBOX_ACCESS_TOKEN"), "{error}");

        let error = Error::missing_field("app_secret");
        assert!(error.is_missing_field(), "{error:?}");
        assert!(error.to_string().contains("app_secret"), "{error}");
    }
}
