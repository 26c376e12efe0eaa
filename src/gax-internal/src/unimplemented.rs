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

/// The default implementation for every method in the `stub` traits.
///
/// Applications mocking a namespace client implement only the routes they
/// use. Calling any other route panics with this message.
pub async fn unimplemented_stub<T: Send, E: Send>()
-> gax::RouteResult<gax::response::Response<T>, E> {
    unimplemented!(concat!(
        "to prevent breaking changes as namespaces gain new routes, the stub ",
        "traits provide default implementations of each method. In the client ",
        "library, all implementations of the traits override all methods. ",
        "The only expected context for this error is test code mocking the ",
        "namespace clients. If that is how you got this error, verify that ",
        "you have mocked all the routes used in your test."
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[should_panic]
    async fn panics() {
        let _ = unimplemented_stub::<(), gax::error::NoError>().await;
    }
}
