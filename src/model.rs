use crate::error::FeedError;
use serde::Serialize;

// positional wire schema: [station, show, episode, date, duration,
// description, enclosure, link, _unknown]
pub const ARITY: usize = 9;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Record {
    pub station: String,
    pub show: String,
    pub episode: String,
    pub date: String,
    // no wire slot; kept for a future schema revision, empty means absent
    pub time: String,
    pub duration: String,
    pub description: String,
    pub enclosure: String,
    pub link: String,
    pub unknown: String,
}

impl Record {
    pub fn from_values(values: Vec<String>) -> Result<Record, FeedError> {
        if values.len() > ARITY {
            return Err(FeedError::MalformedRecord(values.len()));
        }
        let mut values = values.into_iter();
        let mut next = move || values.next().unwrap_or_default();
        Ok(Record {
            station: next(),
            show: next(),
            episode: next(),
            date: next(),
            time: String::new(),
            duration: next(),
            description: next(),
            enclosure: next(),
            link: next(),
            unknown: next(),
        })
    }
}
