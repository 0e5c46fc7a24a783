use crate::error::FeedError;
use crate::feed::{format_scope, FeedScope};
use crate::source::Fetcher;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    pub name: String,
    pub url: String,
}

pub struct Directory<F> {
    source: F,
}

impl<F: Fetcher> Directory<F> {
    pub fn new(source: F) -> Self {
        Directory { source }
    }

    // distinct (station, show) pairs matching the query, sorted; the empty
    // query matches every record
    pub fn search(&self, query: &str) -> Result<impl Iterator<Item = DirectoryEntry>, FeedError> {
        let query = query.to_lowercase();

        let mut pairs = BTreeSet::new();
        for rec in self.source.fetch()? {
            if rec.station.to_lowercase().contains(&query)
                || rec.show.to_lowercase().contains(&query)
                || rec.episode.to_lowercase().contains(&query)
            {
                pairs.insert((rec.station, rec.show));
            }
        }

        Ok(pairs.into_iter().map(|(station, show)| DirectoryEntry {
            name: format!("{} auf {}", show, station),
            url: format_scope(&FeedScope::show_on_station(&station, &show)),
        }))
    }
}
