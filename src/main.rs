use clap::Parser;
use coze_kb_sync::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check => cli::check::run().await,
        Command::Upload(args) => cli::upload::run(args).await,
        Command::Delete(args) => cli::delete::run(args).await,
    }
}
