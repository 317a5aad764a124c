use super::traits::HostSource;
use crate::domain::Domain;
use url::Url;

/// The MVPS hosts file. Entries are sinkhole-marked hosts lines:
/// `0.0.0.0 example.com # optional comment`.
pub struct Mvps {
    url: Url,
}

impl Mvps {
    pub fn new() -> Self {
        Self {
            url: Url::parse("http://winhelp2002.mvps.org/hosts.txt").unwrap(),
        }
    }
}

impl Default for Mvps {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HostSource for Mvps {
    fn name(&self) -> &str {
        "MVPS"
    }

    fn url(&self) -> &Url {
        &self.url
    }

    fn parse_line(&self, line: &str) -> Option<Domain> {
        if line.starts_with('#') {
            return None;
        }
        if !line.starts_with("0.0.0.0") {
            return None;
        }

        // The domain is the second whitespace-separated field.
        let candidate = line.split_whitespace().nth(1)?;
        Domain::try_create(candidate)
    }
}
