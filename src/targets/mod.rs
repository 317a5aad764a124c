mod bind;
mod traits;
mod unbound;
mod windows;

pub use bind::Bind;
pub use traits::{DnsServerTarget, ServerKind};
pub use unbound::Unbound;
pub use windows::Windows;

use crate::config::Config;
use anyhow::Result;

/// Resolves the configured target kinds into concrete targets. An
/// unrecognized kind is a startup error; the run must not proceed with a
/// missing target.
pub fn build(config: &Config) -> Result<Vec<Box<dyn DnsServerTarget>>> {
    let mut targets: Vec<Box<dyn DnsServerTarget>> = Vec::with_capacity(config.targets.len());

    for raw in &config.targets {
        let kind: ServerKind = raw.parse()?;
        targets.push(match kind {
            ServerKind::Bind => Box::new(Bind::new(config.bind_zone_file.clone())?),
            ServerKind::Unbound => Box::new(Unbound),
            ServerKind::Windows => Box::new(Windows),
        });
    }

    Ok(targets)
}
