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

//! Types shared by every asynchronous job in the Dropbox API.
//!
//! Long-running operations first return a launch result, either the final
//! value or an `async_job_id`. The id is then polled with a [PollArg] until
//! the job is no longer in progress.

use crate::tagged_union;

tagged_union! {
    /// The result of launching an asynchronous job.
    pub enum LaunchResultBase {
        /// The processing is asynchronous, the string is the id used to poll
        /// the status of the job.
        "async_job_id" => AsyncJobId(nested String),
    }
}

tagged_union! {
    /// The result of launching an asynchronous job with no result.
    pub enum LaunchEmptyResult {
        "async_job_id" => AsyncJobId(nested String),
        /// The job finished synchronously and successfully.
        "complete" => Complete,
    }
}

/// Arguments for methods that poll the status of an asynchronous job.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct PollArg {
    /// Id of the asynchronous job.
    pub async_job_id: String,
}

impl PollArg {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [async_job_id][PollArg::async_job_id].
    pub fn set_async_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.async_job_id = v.into();
        self
    }
}

tagged_union! {
    /// The status of an asynchronous job.
    pub enum PollResultBase {
        /// The job is still in progress.
        "in_progress" => InProgress,
    }
}

tagged_union! {
    /// The status of an asynchronous job with no result.
    pub enum PollEmptyResult {
        "in_progress" => InProgress,
        /// The job finished successfully.
        "complete" => Complete,
    }
}

tagged_union! {
    /// Error returned by methods for polling the status of asynchronous job.
    pub enum PollError {
        /// The job id is invalid.
        "invalid_async_job_id" => InvalidAsyncJobId,
        /// Something went wrong with the job on the server. There is no need to
        /// retry the polling, the job has failed.
        "internal_error" => InternalError,
        "other" => Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    type Result = anyhow::Result<()>;

    #[test]
    fn launch_async() -> Result {
        let input = json!({".tag": "async_job_id", "async_job_id": "dbjid:abc"});
        let got = serde_json::from_value::<LaunchEmptyResult>(input.clone())?;
        assert_eq!(got, LaunchEmptyResult::AsyncJobId("dbjid:abc".into()));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn launch_complete() -> Result {
        let got = serde_json::from_value::<LaunchEmptyResult>(json!({".tag": "complete"}))?;
        assert_eq!(got, LaunchEmptyResult::Complete);
        // The base union does not know about `complete`.
        let got = serde_json::from_value::<LaunchResultBase>(json!({".tag": "complete"}))?;
        assert_eq!(got, LaunchResultBase::UnknownValue("complete".into()));
        Ok(())
    }

    #[test]
    fn poll_arg() -> Result {
        let arg = PollArg::new().set_async_job_id("dbjid:abc");
        assert_eq!(serde_json::to_value(&arg)?, json!({"async_job_id": "dbjid:abc"}));
        Ok(())
    }

    #[test]
    fn poll_error() -> Result {
        let got = serde_json::from_value::<PollError>(json!({".tag": "internal_error"}))?;
        assert_eq!(got, PollError::InternalError);
        let got = serde_json::from_value::<PollResultBase>(json!({".tag": "in_progress"}))?;
        assert_eq!(got, PollResultBase::InProgress);
        let got = serde_json::from_value::<PollEmptyResult>(json!({".tag": "failed"}))?;
        assert_eq!(got.tag(), "failed");
        Ok(())
    }
}
