//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Ensure the data directory exists when file persistence is configured.
/// Without a directory the collections live in memory only.
pub async fn ensure_env(data_dir: Option<&str>) -> anyhow::Result<()> {
    let Some(data_dir) = data_dir else {
        warn!("no data directory configured; collections are kept in memory only");
        return Ok(());
    };
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    info!(%data_dir, "data directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_env;

    #[tokio::test]
    async fn creates_missing_data_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("catalog_env_{}", uuid::Uuid::new_v4()));
        let path = dir.to_string_lossy().to_string();
        ensure_env(Some(&path)).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn in_memory_mode_is_ok() -> anyhow::Result<()> {
        ensure_env(None).await
    }
}
