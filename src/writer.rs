use crate::domain::Domain;
use crate::targets::{DnsServerTarget, ServerKind};
use anyhow::{Context, Result};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// What happened to one target's output file.
#[derive(Debug)]
pub struct WriteOutcome {
    pub kind: ServerKind,
    pub path: PathBuf,
    pub lines: usize,
    pub result: Result<()>,
}

/// Appends every target's rendered lines to its destination, concurrently.
/// A failure on one target is recorded in its outcome and never stops the
/// others.
pub async fn write_all(
    output_dir: &Path,
    targets: &[Box<dyn DnsServerTarget>],
    domains: &[Domain],
) -> Vec<WriteOutcome> {
    let jobs = targets.iter().map(|target| async move {
        let path = output_dir.join(target.file_name());
        let result = write_target(target.as_ref(), &path, domains).await;
        WriteOutcome {
            kind: target.kind(),
            path,
            lines: domains.len(),
            result,
        }
    });

    join_all(jobs).await
}

async fn write_target(
    target: &dyn DnsServerTarget,
    path: &Path,
    domains: &[Domain],
) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .await
        .with_context(|| format!("opening {}", path.display()))?;

    for mut line in target.emit(domains) {
        // One write per line, terminator included: whole lines or nothing.
        line.push('\n');
        file.write_all(line.as_bytes())
            .await
            .with_context(|| format!("writing {}", path.display()))?;
    }

    file.flush()
        .await
        .with_context(|| format!("flushing {}", path.display()))?;

    Ok(())
}
