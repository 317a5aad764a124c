mod abuse_ch;
mod fetch;
mod mvps;
mod sans;
mod traits;

pub use abuse_ch::AbuseCh;
pub use fetch::fetch;
pub use mvps::Mvps;
pub use sans::Sans;
pub use traits::{FetchOutcome, HostSource, SourceReport};

/// Every feed the aggregator pulls from, in a fixed order. Adding a feed
/// means adding a variant module and one entry here.
pub fn catalog() -> Vec<Box<dyn HostSource>> {
    vec![
        Box::new(Mvps::new()),
        Box::new(Sans::low()),
        Box::new(Sans::medium()),
        Box::new(Sans::high()),
        Box::new(AbuseCh::new()),
    ]
}
