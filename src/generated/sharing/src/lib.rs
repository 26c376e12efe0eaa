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

//! Dropbox API v2 client library for the `sharing` namespace.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! The `sharing` namespace contains routes to create and manage shared links
//! and shared folders.
//!
//! This crate contains traits, types, and functions to interact with the
//! `sharing` routes. Most applications will use the structs defined in the
//! [client] module.
//!
//! The client library types and functions are stable and not expected to
//! change. Please note that the Dropbox API may add new fields to the
//! response types, and new variants to any union. All structs and enums are
//! marked `#[non_exhaustive]` for this reason.

pub use gax::Result;
pub use gax::RouteResult;
pub use gax::error::{Error, RouteError};

pub mod model;

pub mod stub;

pub mod client;

pub mod builder;

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

pub(crate) mod info {
    /// The default `User-Agent` header value for this library.
    pub(crate) const USER_AGENT: &str =
        concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
}
