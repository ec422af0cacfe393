//! Upload command - sends one local file to the dataset

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

/// Arguments for the upload command
#[derive(Args, Clone)]
pub struct UploadArgs {
    /// Markdown or text file to upload
    pub file: PathBuf,

    /// Document title (defaults to the file stem)
    #[arg(long)]
    pub title: Option<String>,
}

/// Run the upload
pub async fn run(args: UploadArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let (api_key, dataset_id) = super::credentials(&config)?;
    let client = super::build_client(&config)?;

    let content = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let title = args.title.unwrap_or_else(|| default_title(&args.file));

    if !client
        .upload_document(&api_key, &dataset_id, &title, &content)
        .await
    {
        anyhow::bail!("upload of {} failed", args.file.display());
    }

    Ok(())
}

fn default_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
