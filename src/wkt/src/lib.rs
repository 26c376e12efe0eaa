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

//! Well-known types for the Dropbox API.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! The Dropbox API uses a handful of types across all its namespaces. The most
//! important is the tagged union, see the [union] module for its JSON encoding.
//! The crate also provides timestamps, the `common` namespace, and the types
//! used by all asynchronous jobs.

pub mod async_job;
pub mod common;
mod timestamp;
pub use crate::timestamp::*;
pub mod union;
pub use crate::union::{TAG_KEY, TaggedUnion};
