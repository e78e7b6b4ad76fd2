use anyhow::Result;

/// Creates the database file and its tables when missing.
pub async fn init(config: &crate::config::Config) -> Result<()> {
    crate::db::open_store(&config.database.url, config.database.max_connections).await?;

    tracing::info!(url = %config.database.url, "database ready");

    Ok(())
}
