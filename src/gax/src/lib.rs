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

//! Dropbox API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the Dropbox SDK for Rust: the error types returned by
//! every route, the per-request options, the response types, and the generic
//! client builder.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by functions that cannot fail with a
/// route-specific error.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// An alias of [std::result::Result] where the error is a [crate::error::RouteError].
///
/// This is the result type used by all functions wrapping routes. `E` is the
/// route-specific error type.
pub type RouteResult<T, E> = std::result::Result<T, crate::error::RouteError<E>>;

/// The core error types used by generated clients.
pub mod error;

pub mod client_builder;
pub mod download;
pub mod options;
pub mod response;
