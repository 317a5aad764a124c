use anyhow::Result;
use std::time::Duration;
use tracing::{error, info, warn};

use hostsmith::aggregate;
use hostsmith::config::Config;
use hostsmith::init::setup_logging;
use hostsmith::sources;
use hostsmith::targets;
use hostsmith::writer;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Config
    let config_path = std::env::args().nth(1).unwrap_or("config.toml".to_string());
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).await?
    } else {
        Config::default()
    };

    // 2. Setup Logging
    setup_logging(&config);
    info!("Starting hostsmith...");

    if !std::path::Path::new(&config_path).exists() {
        info!("Config file not found, using defaults.");
    }

    // 3. Resolve Requested Targets
    // An unknown kind in the config aborts here, before any network I/O.
    let targets = targets::build(&config)?;

    // 4. Build HTTP Client
    let client = reqwest::Client::builder()
        .user_agent("Hostsmith/1.0")
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .build()?;

    // 5. Aggregate
    let catalog = sources::catalog();
    let outcome = aggregate::run(&client, &config, &catalog).await;

    for report in &outcome.reports {
        if !report.available {
            warn!("Source '{}' was unavailable ({})", report.name, report.url);
        }
    }

    // 6. Render & Write
    let outcomes = writer::write_all(&config.output_dir, &targets, &outcome.domains).await;

    // 7. Report
    let mut failed = 0usize;
    for write in &outcomes {
        match &write.result {
            Ok(()) => info!(
                "Wrote {} {} lines to {}",
                write.lines,
                write.kind,
                write.path.display()
            ),
            Err(e) => {
                error!("Failed to write {}: {:#}", write.path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} targets failed", outcomes.len());
    }

    Ok(())
}
