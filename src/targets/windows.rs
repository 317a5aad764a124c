use super::traits::{DnsServerTarget, ServerKind};
use crate::domain::Domain;

/// Windows-format HOSTS lines. The only target that reads the per-domain
/// sinkhole address.
pub struct Windows;

impl DnsServerTarget for Windows {
    fn kind(&self) -> ServerKind {
        ServerKind::Windows
    }

    fn file_name(&self) -> &'static str {
        "hosts"
    }

    fn format(&self, domain: &Domain) -> String {
        // 0.0.0.0 example.com
        format!("{} {}", domain.sinkhole(), domain.name())
    }
}
