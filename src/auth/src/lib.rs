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

//! Dropbox SDK for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate applications
//! with the Dropbox API. The SDK clients consume an implementation of
//! [credentials::Credentials] and use these credentials to authenticate the
//! requests issued by the application.
//!
//! The Dropbox API uses different styles of authentication for different
//! routes. Most routes require an OAuth2 access token for a user or a team,
//! sent as a `Bearer` token. A few routes require the app key and secret, sent
//! with HTTP basic authentication. Some routes require no authentication at
//! all. The clients tell the credentials which styles each route accepts, see
//! [credentials::AuthStyle].

pub mod build_errors;
pub mod credentials;
pub mod errors;

/// A `Result` alias where the `Err` case is
/// `dropbox_sdk_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

pub(crate) mod headers_util;
