use crate::domain::Domain;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Reads a local override file, one candidate domain per line. A missing
/// file is an empty list, not an error; lines that fail normalization are
/// skipped silently.
pub async fn load(path: &Path) -> Vec<Domain> {
    let contents = match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No override file at {}", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    contents.lines().filter_map(Domain::try_create).collect()
}
