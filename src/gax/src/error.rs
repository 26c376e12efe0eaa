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

//! Errors returned by the client libraries.
//!
//! Each route returns a [RouteError], which is either the route-specific error
//! (HTTP status code 409), or an [Error] for any other problem: the request
//! could not be serialized, the transport failed, the service rejected the
//! credentials, etc.

mod api_error;
pub use api_error::*;
pub mod auth;
mod core_error;
pub use core_error::*;
mod credentials;
pub use credentials::CredentialsError;
mod service_error;
pub use service_error::*;
