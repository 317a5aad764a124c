use crate::domain::Domain;
use anyhow::bail;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    Bind,
    Unbound,
    Windows,
}

impl FromStr for ServerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bind" => Ok(Self::Bind),
            "unbound" => Ok(Self::Unbound),
            "windows" => Ok(Self::Windows),
            other => bail!("unknown DNS server target '{other}' (expected bind, unbound or windows)"),
        }
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bind => "bind",
            Self::Unbound => "unbound",
            Self::Windows => "windows",
        };
        f.write_str(name)
    }
}

/// One DNS server output syntax and its destination file name.
pub trait DnsServerTarget: Send + Sync {
    fn kind(&self) -> ServerKind;

    fn file_name(&self) -> &'static str;

    /// Renders one domain as one output line. Pure; safe to call repeatedly
    /// and from concurrent targets.
    fn format(&self, domain: &Domain) -> String;

    /// Lazily renders every domain, in the collection's order. Re-iterating
    /// the input produces the same lines again.
    fn emit<'a>(&'a self, domains: &'a [Domain]) -> Box<dyn Iterator<Item = String> + Send + 'a> {
        Box::new(domains.iter().map(move |domain| self.format(domain)))
    }
}
