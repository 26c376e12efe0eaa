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

/// A dyn-compatible, crate-private version of [super::Check].
#[async_trait::async_trait]
pub trait Check: std::fmt::Debug + Send + Sync {
    async fn app(
        &self,
        req: crate::model::EchoArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::EchoResult>,
        gax::error::NoError,
    >;

    async fn user(
        &self,
        req: crate::model::EchoArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::EchoResult>,
        gax::error::NoError,
    >;
}

/// All implementations of [super::Check] also implement [Check].
#[async_trait::async_trait]
impl<T: super::Check> Check for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn app(
        &self,
        req: crate::model::EchoArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::EchoResult>,
        gax::error::NoError,
    > {
        T::app(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn user(
        &self,
        req: crate::model::EchoArg,
        options: gax::options::RequestOptions,
    ) -> crate::RouteResult<
        gax::response::Response<crate::model::EchoResult>,
        gax::error::NoError,
    > {
        T::user(self, req, options).await
    }
}
