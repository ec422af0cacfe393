//! Delete command - removes one document from the dataset

use clap::Args;

/// Arguments for the delete command
#[derive(Args, Clone)]
pub struct DeleteArgs {
    /// Document ID assigned by the service
    pub doc_id: String,
}

/// Run the delete
pub async fn run(args: DeleteArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let (api_key, dataset_id) = super::credentials(&config)?;
    let client = super::build_client(&config)?;

    if !client
        .delete_document(&api_key, &dataset_id, &args.doc_id)
        .await
    {
        anyhow::bail!("delete of document {} failed", args.doc_id);
    }

    Ok(())
}
