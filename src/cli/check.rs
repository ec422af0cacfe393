//! Check command - validates credentials without touching the network

use tracing::{info, warn};

use crate::domain::validate_config;

/// Run the configuration check
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let client_config = config.coze.client_config();

    if !validate_config(Some(&client_config)) {
        if let Err(e) = client_config.validate() {
            warn!("{}", e);
        }
        anyhow::bail!("Coze knowledge base is not configured");
    }

    info!(base_url = %config.coze.base_url, "Coze knowledge base configuration is valid");
    Ok(())
}
