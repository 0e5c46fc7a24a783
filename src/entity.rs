use crate::error::FeedError;
use crate::model::Record;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::convert::TryFrom;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Episode {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub published: i64,
    pub url: String,
    pub link: String,
}

// timestamps are taken as UTC, the upstream list carries no zone
impl TryFrom<&Record> for Episode {
    type Error = FeedError;

    fn try_from(rec: &Record) -> Result<Self, FeedError> {
        let dt = if rec.time.is_empty() {
            NaiveDate::parse_from_str(&rec.date, "%d.%m.%Y").map(|d| d.and_time(NaiveTime::MIN))
        } else {
            let joined = format!("{} {}", rec.date, rec.time);
            NaiveDateTime::parse_from_str(&joined, "%d.%m.%Y %H:%M:%S")
        }
        .map_err(|_| FeedError::DateParseFailure {
            date: rec.date.clone(),
            time: rec.time.clone(),
        })?;

        Ok(Episode {
            title: format!("{} - {}", rec.station, rec.show),
            subtitle: rec.episode.clone(),
            description: rec.description.clone(),
            published: dt.and_utc().timestamp(),
            url: rec.enclosure.clone(),
            link: rec.link.clone(),
        })
    }
}
