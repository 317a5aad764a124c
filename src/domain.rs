use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::Ipv4Addr;
use url::Url;

/// A blocked domain plus the sinkhole address answered for it.
///
/// Equality and hashing cover the name only; two domains with the same name
/// but different sinkhole addresses are the same entry.
#[derive(Debug, Clone)]
pub struct Domain {
    name: Box<str>,
    sinkhole: Ipv4Addr,
}

impl Domain {
    /// Normalizes a candidate token into a domain with the default sinkhole
    /// address (`0.0.0.0`). Returns `None` if the token is empty, whitespace,
    /// or does not parse as the host of `https://<token>`.
    pub fn try_create(raw: &str) -> Option<Self> {
        Self::with_sinkhole(raw, Ipv4Addr::UNSPECIFIED)
    }

    /// Same normalization, but with an explicit sinkhole address. Only the
    /// Windows hosts output reads the address.
    pub fn with_sinkhole(raw: &str, sinkhole: Ipv4Addr) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let url = Url::parse(&format!("https://{raw}")).ok()?;
        let name = url.host_str()?;

        Some(Self {
            name: name.into(),
            sinkhole,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sinkhole(&self) -> Ipv4Addr {
        self.sinkhole
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Domain {}

impl Hash for Domain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
