use crate::types::Result;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Persist the serialized feed, creating the output directory first.
///
/// Directory creation is idempotent and the file is overwritten wholesale;
/// a failed run leaves the previous output in place.
pub async fn write_feed(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    fs::write(path, document.as_bytes()).await?;
    info!(
        "Wrote feed to {} ({} bytes)",
        path.display(),
        document.len()
    );
    Ok(())
}
