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

use clap::Parser;

/// Configuration options for the demo.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// The folder to list. The empty string is the root folder.
    #[arg(default_value = "")]
    pub path: String,

    /// List the contents of all subfolders too.
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// The maximum number of entries returned by each request.
    #[arg(long)]
    pub limit: Option<u32>,

    /// An access token. By default the credentials are loaded from the
    /// environment.
    #[arg(long, env = "DROPBOX_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Act on behalf of this team member.
    #[arg(long)]
    pub select_user: Option<String>,

    /// Send the requests to this endpoint instead of the Dropbox API hosts.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Log each request.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Validates the arguments after parsing.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.limit.is_some_and(|v| v == 0 || v > 2000) {
            anyhow::bail!("invalid limit, should be in the [1, 2000] range")
        }
        if !self.path.is_empty() && !self.path.starts_with('/') && !self.path.starts_with("id:") {
            anyhow::bail!("invalid path {}, should start with `/` or `id:`", self.path)
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&["list-folder"]; "root")]
    #[test_case(&["list-folder", "/Photos", "--recursive"]; "recursive")]
    #[test_case(&["list-folder", "id:a4ayc_80_OEAAAAAAAAAXw", "--limit", "10"]; "by id")]
    fn valid(argv: &[&str]) -> anyhow::Result<()> {
        let args = Args::try_parse_from(argv)?;
        args.validate()?;
        Ok(())
    }

    #[test_case(&["list-folder", "--limit", "0"]; "zero limit")]
    #[test_case(&["list-folder", "--limit", "5000"]; "large limit")]
    #[test_case(&["list-folder", "Photos"]; "relative path")]
    fn invalid(argv: &[&str]) -> anyhow::Result<()> {
        let args = Args::try_parse_from(argv)?;
        assert!(args.validate().is_err(), "{args:?}");
        Ok(())
    }
}
