use crate::config::Config;
use crate::domain::Domain;
use crate::local;
use crate::sources::{HostSource, SourceReport};
use futures::{stream, StreamExt};
use reqwest::Client;
use rustc_hash::FxHashSet;
use tracing::info;

/// Everything one aggregation run produced.
#[derive(Debug)]
pub struct AggregateOutcome {
    pub domains: Vec<Domain>,
    pub reports: Vec<SourceReport>,
}

/// Loads both override files and every feed concurrently, then combines the
/// results. An unavailable feed or a missing file contributes an empty list.
pub async fn run(
    client: &Client,
    config: &Config,
    sources: &[Box<dyn HostSource>],
) -> AggregateOutcome {
    let downloads = stream::iter(sources.iter().map(|source| source.collect(client)))
        // `buffered`, not `buffer_unordered`: results must join in catalog
        // order so the duplicate tie-break below is deterministic.
        .buffered(config.concurrent_downloads.max(1))
        .collect::<Vec<_>>();

    let added_path = config.added_hosts_path();
    let excluded_path = config.excluded_hosts_path();
    let (additions, fetched, exclusions) = tokio::join!(
        local::load(&added_path),
        downloads,
        local::load(&excluded_path),
    );

    let mut downloaded = Vec::new();
    let mut reports = Vec::with_capacity(fetched.len());
    for (domains, report) in fetched {
        downloaded.extend(domains);
        reports.push(report);
    }

    let domains = combine(additions, downloaded, &exclusions);
    info!("Aggregated {} domains", domains.len());

    AggregateOutcome { domains, reports }
}

/// `(additions ∪ downloaded) \ exclusions`, deduplicated by domain name.
/// On duplicate names the first occurrence wins, in the order the inputs
/// arrive: additions first, then feeds in catalog order. The result keeps
/// that first-encounter order.
pub fn combine(
    additions: Vec<Domain>,
    downloaded: Vec<Domain>,
    exclusions: &[Domain],
) -> Vec<Domain> {
    let excluded: FxHashSet<&str> = exclusions.iter().map(Domain::name).collect();

    let mut seen = FxHashSet::default();
    let mut result = Vec::new();

    for domain in additions.into_iter().chain(downloaded) {
        if excluded.contains(domain.name()) {
            continue;
        }
        if seen.insert(domain.name().to_string()) {
            result.push(domain);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn d(name: &str) -> Domain {
        Domain::try_create(name).unwrap()
    }

    #[test]
    fn additions_union_downloads_minus_exclusions() {
        let additions = vec![d("a.example")];
        let downloaded = vec![d("a.example"), d("b.example")];
        let exclusions = vec![d("b.example")];

        let result = combine(additions, downloaded, &exclusions);
        assert_eq!(result, vec![d("a.example")]);
    }

    #[test]
    fn first_occurrence_wins_on_duplicate_names() {
        let pinned = Domain::with_sinkhole("dup.example", Ipv4Addr::new(10, 0, 0, 1)).unwrap();
        let additions = vec![pinned];
        let downloaded = vec![d("dup.example"), d("z.example")];

        let result = combine(additions, downloaded, &[]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name(), "dup.example");
        assert_eq!(result[0].sinkhole(), Ipv4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn keeps_encounter_order() {
        let additions = vec![d("added.example")];
        let downloaded = vec![d("first.example"), d("second.example")];

        let result = combine(additions, downloaded, &[]);
        let names: Vec<&str> = result.iter().map(Domain::name).collect();
        assert_eq!(names, vec!["added.example", "first.example", "second.example"]);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let additions = vec![d("a.example"), d("b.example")];
        let downloaded = vec![d("b.example"), d("c.example")];
        let exclusions = vec![d("c.example")];

        let once = combine(additions.clone(), downloaded.clone(), &exclusions);
        let twice = combine(additions, downloaded, &exclusions);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_inputs_yield_empty_set() {
        assert!(combine(Vec::new(), Vec::new(), &[]).is_empty());
    }

    #[test]
    fn exclusions_apply_to_additions_too() {
        let additions = vec![d("kept.example"), d("dropped.example")];
        let exclusions = vec![d("dropped.example")];

        let result = combine(additions, Vec::new(), &exclusions);
        assert_eq!(result, vec![d("kept.example")]);
    }
}
