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


/// Contains the arguments to be sent to the Dropbox servers.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct EchoArg {
    /// The string that you'd like to be echoed back to you.
    pub query: String,
}

impl EchoArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [query][EchoArg::query].
    pub fn set_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.query = v.into();
        self
    }
}

/// Contains the result returned from the Dropbox servers.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct EchoResult {
    /// If everything worked correctly, this would be the same as query.
    pub result: String,
}

impl EchoResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result][EchoResult::result].
    pub fn set_result<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.result = v.into();
        self
    }
}
