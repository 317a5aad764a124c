use super::traits::HostSource;
use crate::domain::Domain;
use url::Url;

/// The Abuse.ch ransomware tracker domain blocklist. One domain per line,
/// `#` comment header.
pub struct AbuseCh {
    url: Url,
}

impl AbuseCh {
    pub fn new() -> Self {
        Self {
            url: Url::parse("https://ransomwaretracker.abuse.ch/downloads/RW_DOMBL.txt").unwrap(),
        }
    }
}

impl Default for AbuseCh {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HostSource for AbuseCh {
    fn name(&self) -> &str {
        "Abuse.ch RW_DOMBL"
    }

    fn url(&self) -> &Url {
        &self.url
    }

    fn parse_line(&self, line: &str) -> Option<Domain> {
        if line.starts_with('#') {
            return None;
        }

        Domain::try_create(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_domain() {
        let source = AbuseCh::new();
        let domain = source.parse_line("ransom.example").unwrap();
        assert_eq!(domain.name(), "ransom.example");
    }

    #[test]
    fn skips_comments_and_blanks() {
        let source = AbuseCh::new();
        assert!(source.parse_line("# RW_DOMBL").is_none());
        assert!(source.parse_line("").is_none());
    }
}
