pub mod directory;
pub mod entity;
pub mod error;
pub mod feed;
pub mod model;
pub mod source;
pub mod util;

use entity::Episode;
use error::FeedError;
use model::Record;
use std::collections::HashSet;

pub type FetchResult = Result<Vec<Record>, FeedError>;
pub type SeenIds = HashSet<String>;
pub type PollInfo = (Vec<Episode>, SeenIds);
pub type PollResult = Result<PollInfo, FeedError>;

// default source backed by the public catalog endpoint
pub fn get_source() -> impl source::Fetcher {
    source::Client::new()
}
