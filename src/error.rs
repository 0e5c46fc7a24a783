use crate::model::ARITY;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("record has {0} values, schema allows at most {}", ARITY)]
    MalformedRecord(usize),

    #[error("unparseable date {date:?} time {time:?}")]
    DateParseFailure { date: String, time: String },
}
