use super::traits::{DnsServerTarget, ServerKind};
use crate::domain::Domain;
use anyhow::{ensure, Result};

/// Bind zone statements, every zone pointing at the shared sinkhole zone
/// file.
pub struct Bind {
    zone_file: String,
}

impl Bind {
    pub fn new(zone_file: String) -> Result<Self> {
        ensure!(
            !zone_file.trim().is_empty(),
            "bind zone file path must not be empty"
        );
        Ok(Self { zone_file })
    }
}

impl DnsServerTarget for Bind {
    fn kind(&self) -> ServerKind {
        ServerKind::Bind
    }

    fn file_name(&self) -> &'static str {
        "bind.txt"
    }

    fn format(&self, domain: &Domain) -> String {
        // zone "example.com" { type master; file "/etc/bind/db.poison"; };
        format!(
            "zone \"{}\" {{ type master; file \"{}\"; }};",
            domain.name(),
            self.zone_file
        )
    }
}
