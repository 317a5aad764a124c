use super::traits::HostSource;
use crate::domain::Domain;
use url::Url;

/// A SANS ISC suspicious-domains feed, one per severity tier. Bare domains,
/// `#` comment lines, and a trailing `Site ...` summary block.
pub struct Sans {
    name: String,
    url: Url,
}

impl Sans {
    pub fn low() -> Self {
        Self::tier("Low")
    }

    pub fn medium() -> Self {
        Self::tier("Medium")
    }

    pub fn high() -> Self {
        Self::tier("High")
    }

    fn tier(tier: &str) -> Self {
        let url = format!("https://isc.sans.edu/feeds/suspiciousdomains_{tier}.txt");
        Self {
            name: format!("SANS {tier}"),
            url: Url::parse(&url).unwrap(),
        }
    }
}

#[async_trait::async_trait]
impl HostSource for Sans {
    fn name(&self) -> &str {
        &self.name
    }

    fn url(&self) -> &Url {
        &self.url
    }

    fn parse_line(&self, line: &str) -> Option<Domain> {
        if line.starts_with('#') {
            return None;
        }
        if line
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("site"))
        {
            return None;
        }

        Domain::try_create(line)
    }
}
