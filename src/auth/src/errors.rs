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

//! Errors created while producing authentication headers.

pub use gax::error::CredentialsError;
use std::error::Error;

/// A helper to create a non-transient error.
pub(crate) fn non_retryable<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::new(false, source)
}

pub(crate) fn non_retryable_from_str<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn helpers() {
        let e = non_retryable(std::io::Error::other("simulated"));
        assert!(!e.is_transient(), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");
        assert!(e.to_string().contains("simulated"), "{e}");

        let e = non_retryable_from_str("test-only");
        assert!(!e.is_transient(), "{e:?}");
        assert!(e.source().is_none(), "{e:?}");
        assert!(e.to_string().contains("test-only"), "{e}");
    }
}
