//! CLI module for the Coze knowledge base sync tool
//!
//! Provides subcommands:
//! - `check`: validate the configured credentials
//! - `upload`: upload one markdown file
//! - `delete`: delete one document by ID

pub mod check;
pub mod delete;
pub mod upload;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::http_client::HttpClient;
use crate::infrastructure::knowledge_base::CozeKnowledgeBaseClient;
use crate::infrastructure::logging::{self, tracing_emitter};

/// Coze KB - sync local documents to a Coze knowledge base
#[derive(Parser)]
#[command(name = "coze-kb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that an API key and dataset ID are configured
    Check,

    /// Upload a document to the dataset
    Upload(upload::UploadArgs),

    /// Delete a document from the dataset
    Delete(delete::DeleteArgs),
}

/// Loads `.env` and layered config, then initializes logging
fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    logging::init_logging(&config.logging);

    Ok(config)
}

/// Client wired to the configured endpoint, with events sent to the log
fn build_client(config: &AppConfig) -> anyhow::Result<CozeKnowledgeBaseClient<HttpClient>> {
    let http = match config.coze.timeout() {
        Some(timeout) => HttpClient::with_timeout(timeout)?,
        None => HttpClient::new(),
    };

    Ok(CozeKnowledgeBaseClient::with_base_url(http, &config.coze.base_url)
        .with_emitter(tracing_emitter()))
}

/// Returns `(api_key, dataset_id)` or fails with the missing field
fn credentials(config: &AppConfig) -> anyhow::Result<(String, String)> {
    let client_config = config.coze.client_config();
    client_config.validate()?;

    Ok((
        client_config.api_key.unwrap_or_default(),
        client_config.dataset_id.unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_upload() {
        let cli = Cli::try_parse_from(["coze-kb", "upload", "notes.md", "--title", "Notes"]).unwrap();
        match cli.command {
            Command::Upload(args) => {
                assert_eq!(args.file.to_str(), Some("notes.md"));
                assert_eq!(args.title.as_deref(), Some("Notes"));
            }
            _ => panic!("expected upload"),
        }
    }

    #[test]
    fn test_parse_delete() {
        let cli = Cli::try_parse_from(["coze-kb", "delete", "7412345678"]).unwrap();
        assert!(matches!(cli.command, Command::Delete(ref args) if args.doc_id == "7412345678"));
    }

    #[test]
    fn test_credentials_require_both_fields() {
        let mut config = AppConfig::default();
        assert!(credentials(&config).is_err());

        config.coze.api_key = Some("k1".to_string());
        config.coze.dataset_id = Some("d1".to_string());
        assert_eq!(
            credentials(&config).unwrap(),
            ("k1".to_string(), "d1".to_string())
        );
    }
}
