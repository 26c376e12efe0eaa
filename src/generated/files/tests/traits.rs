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
//! Verify the client and model types have the expected trait implementations.

#[cfg(test)]
mod traits {
    use anyhow::Result;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    #[test]
    fn client() -> Result<()> {
        use dropbox_sdk_files::client::Files;

        assert_impl_all!(Files: Clone, std::fmt::Debug, Send, Sync);
        assert_not_impl_any!(Files: serde::Serialize);
        Ok(())
    }

    #[test]
    fn model() -> Result<()> {
        use dropbox_sdk_files::model::{
            FileMetadata, GetMetadataArg, LookupError, Metadata, WriteMode,
        };

        assert_impl_all!(GetMetadataArg: Default, serde::Serialize);
        assert_impl_all!(FileMetadata: serde::de::DeserializeOwned);
        assert_impl_all!(Metadata: Clone, PartialEq, serde::de::DeserializeOwned);
        assert_impl_all!(LookupError: std::fmt::Display, Send, Sync);
        assert_impl_all!(WriteMode: serde::Serialize, serde::de::DeserializeOwned);
        assert_not_impl_any!(Metadata: Default);
        Ok(())
    }
}
