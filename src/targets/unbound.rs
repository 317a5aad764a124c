use super::traits::{DnsServerTarget, ServerKind};
use crate::domain::Domain;

/// Unbound local-zone lines.
pub struct Unbound;

impl DnsServerTarget for Unbound {
    fn kind(&self) -> ServerKind {
        ServerKind::Unbound
    }

    fn file_name(&self) -> &'static str {
        "unbound.txt"
    }

    fn format(&self, domain: &Domain) -> String {
        // local-zone: "example.com" inform_deny.
        format!("local-zone: \"{}\" inform_deny.", domain.name())
    }
}
