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

//! Implementation details for the Dropbox SDK for Rust.
//!
//! This crate contains the transport shared by all the namespace clients:
//! route descriptors, the HTTP client, and helpers for the
//! `Dropbox-API-Arg` header. All the types in this crate are implementation
//! details, and subject to change without notice.

pub mod api_arg;
pub mod http;
pub mod observability;
pub mod options;
pub mod route;
pub mod unimplemented;

pub(crate) mod header_cache;
pub(crate) mod host;
