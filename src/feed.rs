use crate::entity::Episode;
use crate::source::Fetcher;
use crate::util::filter_scope;
use crate::{PollResult, SeenIds};
use log::debug;
use std::convert::TryFrom;

pub const BASE_URL: &str = "http://www.mediathekdirekt.de/";
pub const IMAGE_URL: &str = "http://www.mediathekdirekt.de/images/mediathekdirekt.png";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedScope {
    pub station: Option<String>,
    pub show: Option<String>,
}

impl FeedScope {
    pub fn all() -> Self {
        FeedScope::default()
    }

    pub fn station(station: &str) -> Self {
        FeedScope {
            station: Some(station.to_string()),
            show: None,
        }
    }

    pub fn show_on_station(station: &str, show: &str) -> Self {
        FeedScope {
            station: Some(station.to_string()),
            show: Some(show.to_string()),
        }
    }
}

// inverse of parse_scope for every address-representable scope; a scope
// with only one side set has no address form and maps to the root
pub fn format_scope(scope: &FeedScope) -> String {
    match (&scope.station, &scope.show) {
        (Some(station), Some(show)) => format!("{}?{}/{}", BASE_URL, station, show),
        _ => BASE_URL.to_string(),
    }
}

// None means the address is not ours, the host tries its next handler
pub fn parse_scope(url: &str) -> Option<FeedScope> {
    if url == BASE_URL {
        return Some(FeedScope::all());
    }
    let rest = url.strip_prefix(BASE_URL)?.strip_prefix('?')?;
    let (station, show) = rest.split_once('/')?;
    Some(FeedScope::show_on_station(station, show))
}

pub struct Feed<F> {
    scope: FeedScope,
    source: F,
}

impl<F: Fetcher> Feed<F> {
    pub fn new(source: F, scope: FeedScope) -> Self {
        Feed { scope, source }
    }

    pub fn title(&self) -> String {
        match (&self.scope.station, &self.scope.show) {
            (None, _) => "Mediathekdirekt.de".to_string(),
            (Some(station), None) => format!("{} (MediathekDirekt.de)", station),
            (Some(station), Some(show)) => {
                format!("{} auf {} (MediathekDirekt.de)", show, station)
            }
        }
    }

    pub fn link(&self) -> &'static str {
        BASE_URL
    }

    pub fn image(&self) -> &'static str {
        IMAGE_URL
    }

    pub fn description(&self) -> &'static str {
        "MediathekDirekt ist eine Art \"Suchmaschine\" für die Inhalte der \
         öffentlich-rechtlichen Fernsehmediatheken und ein einfaches Frontend \
         für die mit MediathekView erstellte Filmliste."
    }

    // full recomputation on every call; seen collects every in-scope
    // enclosure so the caller can detect upstream removals
    pub fn poll(&self, known: &SeenIds) -> PollResult {
        let records = self.source.fetch()?;
        let keep = filter_scope(self.scope.clone());

        let mut seen = SeenIds::new();
        let mut fresh = Vec::new();
        for rec in records.iter().filter(|r| keep(r)) {
            seen.insert(rec.enclosure.clone());
            if !known.contains(&rec.enclosure) {
                fresh.push(Episode::try_from(rec)?);
            }
        }
        debug!("{} new, {} seen", fresh.len(), seen.len());
        Ok((fresh, seen))
    }
}
