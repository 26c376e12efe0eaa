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

//! Types returned by download-style routes.
//!
//! Routes such as `files/download` return the file metadata in a response
//! header and the file contents in the body. The body is not read until the
//! application asks for it. Dropping the [Download] or its [ContentStream]
//! releases the connection.

use crate::Result;
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use pin_project::pin_project;
use std::pin::Pin;

/// The result of a download-style route.
///
/// # Example
/// ```
/// # use dropbox_sdk_gax::download::Download;
/// # tokio_test::block_on(async {
/// let mut download = Download::from_bytes("metadata", "the quick brown fox");
/// assert_eq!(download.metadata(), &"metadata");
/// let mut contents = Vec::new();
/// while let Some(chunk) = download.next().await.transpose()? {
///     contents.extend_from_slice(&chunk);
/// }
/// assert_eq!(contents, b"the quick brown fox");
/// # dropbox_sdk_gax::Result::<()>::Ok(()) });
/// ```
#[derive(Debug)]
pub struct Download<T> {
    metadata: T,
    content: ContentStream,
}

impl<T> Download<T> {
    /// Creates a new instance from the metadata and the content stream.
    pub fn new(metadata: T, content: ContentStream) -> Self {
        Self { metadata, content }
    }

    /// Creates a new instance with a fixed payload.
    ///
    /// Use this to mock download routes in tests.
    pub fn from_bytes<B: Into<Bytes>>(metadata: T, payload: B) -> Self {
        Self::new(metadata, ContentStream::from_bytes(payload))
    }

    /// The metadata returned in the `Dropbox-API-Result` header.
    pub fn metadata(&self) -> &T {
        &self.metadata
    }

    /// Returns the next chunk of the content.
    ///
    /// When the content has been exhausted, this returns `None`.
    pub async fn next(&mut self) -> Option<Result<Bytes>> {
        self.content.next().await
    }

    /// Reads all the remaining content.
    pub async fn all_bytes(self) -> Result<Bytes> {
        self.content.all_bytes().await
    }

    /// Consumes the download, returning the metadata and the content stream.
    pub fn into_parts(self) -> (T, ContentStream) {
        (self.metadata, self.content)
    }
}

/// The body of a download-style route.
///
/// This is a [Stream] of chunks. Applications that do not need streaming
/// can use [ContentStream::all_bytes].
#[pin_project]
pub struct ContentStream {
    #[pin]
    inner: Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>,
}

impl ContentStream {
    /// Wraps any stream of chunks.
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }

    /// A stream with a single chunk.
    pub fn from_bytes<B: Into<Bytes>>(payload: B) -> Self {
        let payload: Bytes = payload.into();
        Self::new(futures::stream::iter([Ok(payload)]))
    }

    /// Returns the next chunk.
    pub async fn next(&mut self) -> Option<Result<Bytes>> {
        StreamExt::next(self).await
    }

    /// Reads all the remaining chunks into a single buffer.
    pub async fn all_bytes(mut self) -> Result<Bytes> {
        let mut contents = Vec::new();
        while let Some(chunk) = self.next().await.transpose()? {
            contents.extend_from_slice(&chunk);
        }
        Ok(Bytes::from(contents))
    }
}

impl Stream for ContentStream {
    type Item = Result<Bytes>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }
}

impl std::fmt::Debug for ContentStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStream").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    type TestResult = anyhow::Result<()>;

    const LAZY: &str = "the quick brown fox jumps over the lazy dog";

    #[tokio::test]
    async fn from_bytes() -> TestResult {
        let download = Download::from_bytes(42, LAZY);
        assert_eq!(download.metadata(), &42);
        let got = download.all_bytes().await?;
        assert_eq!(got, LAZY);
        Ok(())
    }

    #[tokio::test]
    async fn chunks() -> TestResult {
        let chunks = LAZY
            .split_inclusive(' ')
            .map(|s| Ok(Bytes::from_static(s.as_bytes())))
            .collect::<Vec<_>>();
        let count = chunks.len();
        let stream = ContentStream::new(futures::stream::iter(chunks));
        let mut download = Download::new("metadata", stream);
        let mut got = Vec::new();
        while let Some(chunk) = download.next().await.transpose()? {
            got.push(chunk);
        }
        assert_eq!(got.len(), count);
        assert_eq!(got.concat(), LAZY.as_bytes());
        assert!(download.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn error() {
        let stream = ContentStream::new(futures::stream::iter([
            Ok(Bytes::from_static(b"abc")),
            Err(Error::io("connection reset")),
        ]));
        let (metadata, stream) = Download::new((), stream).into_parts();
        assert_eq!(metadata, ());
        let got = stream.all_bytes().await;
        assert!(matches!(&got, Err(e) if e.is_io()), "{got:?}");
    }
}
