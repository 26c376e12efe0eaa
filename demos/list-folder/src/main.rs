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

//! List the contents of a Dropbox folder.

mod args;

use args::Args;
use clap::Parser;
use dropbox_sdk_files::client::Files;
use dropbox_sdk_files::model::{ListFolderError, LookupError, Metadata};
use gax::error::RouteError;
use gax::options::RequestOptionsBuilder;

const DESCRIPTION: &str = concat!(
    "This program lists the contents of a Dropbox folder.",
    " It follows the cursor returned by the service until all the entries",
    " are listed."
);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.validate()?;
    enable_tracing(&args)?;
    tracing::info!("Configuration: {args:?}");

    let client = make_client(&args).await?;
    let mut page = match list_folder(&client, &args).await {
        Ok(p) => p,
        Err(RouteError::Endpoint(e)) if is_not_found(&e.error) => {
            anyhow::bail!("cannot find {:?} in your Dropbox", args.path)
        }
        Err(e) => return Err(e.into()),
    };
    loop {
        page.entries.iter().for_each(print_entry);
        if !page.has_more {
            break;
        }
        tracing::info!("fetching more entries");
        page = client
            .list_folder_continue()
            .set_cursor(page.cursor)
            .send()
            .await?;
    }
    Ok(())
}

async fn make_client(args: &Args) -> anyhow::Result<Files> {
    let credentials = match &args.access_token {
        Some(token) => auth::credentials::access_token::Builder::new(token).build(),
        None => auth::credentials::Builder::default().build()?,
    };
    let builder = Files::builder().with_credentials(credentials);
    let builder = args
        .endpoint
        .iter()
        .fold(builder, |b, v| b.with_endpoint(v));
    let builder = args
        .select_user
        .iter()
        .fold(builder, |b, v| b.with_select_user(v));
    let builder = if args.verbose {
        builder.with_tracing()
    } else {
        builder
    };
    Ok(builder.build().await?)
}

async fn list_folder(
    client: &Files,
    args: &Args,
) -> dropbox_sdk_files::RouteResult<dropbox_sdk_files::model::ListFolderResult, ListFolderError>
{
    client
        .list_folder()
        .set_path(&args.path)
        .set_recursive(args.recursive)
        .set_or_clear_limit(args.limit)
        .with_user_agent(concat!("demo-list-folder/", env!("CARGO_PKG_VERSION")))
        .send()
        .await
}

fn is_not_found(error: &ListFolderError) -> bool {
    matches!(error, ListFolderError::Path(LookupError::NotFound))
}

fn print_entry(entry: &Metadata) {
    match entry {
        Metadata::File(f) => println!(
            "{:>12} {} {}",
            f.size,
            f.server_modified,
            f.path_display.as_deref().unwrap_or(&f.name)
        ),
        Metadata::Folder(f) => println!(
            "{:>12} {:20} {}/",
            "",
            "",
            f.path_display.as_deref().unwrap_or(&f.name)
        ),
        Metadata::Deleted(d) => println!(
            "{:>12} {:20} {} (deleted)",
            "",
            "",
            d.path_display.as_deref().unwrap_or(&d.name)
        ),
        other => tracing::warn!("skipping entry with unknown tag {}", other.tag()),
    }
}

fn enable_tracing(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::fmt::format::FmtSpan;

    let max_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_max_level(max_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
