use crate::error::FeedError;
use crate::model::Record;
use crate::FetchResult;
use log::debug;

pub const GOOD_JSON: &str = "http://www.mediathekdirekt.de/good.json";

pub trait Fetcher {
    fn fetch(&self) -> FetchResult;
}

pub struct Client {
    sources: Vec<String>,
}

impl Client {
    pub fn new() -> Self {
        Client {
            sources: vec![GOOD_JSON.to_string()],
        }
    }

    pub fn with_sources(sources: Vec<String>) -> Self {
        Client { sources }
    }
}

impl Default for Client {
    fn default() -> Self {
        Client::new()
    }
}

impl Fetcher for Client {
    // sources are fetched in configured order and concatenated, no
    // cross-source dedup at this layer
    fn fetch(&self) -> FetchResult {
        let mut records = Vec::new();
        for url in &self.sources {
            let rows: Vec<Vec<String>> = ureq::get(url)
                .call()
                .map_err(|e| FeedError::SourceUnavailable(e.to_string()))?
                .into_json()
                .map_err(|e| FeedError::SourceUnavailable(e.to_string()))?;
            debug!("{} rows from {}", rows.len(), url);
            for row in rows {
                records.push(Record::from_values(row)?);
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::init_log;
    use log::debug;

    const DOC: &str = r#"[
        ["ARD", "Tatort", "Folge 1", "01.02.2020", "01:30:00",
         "Krimi", "http://cdn.example/1.mp4", "http://example/1"],
        ["ZDF", "heute", "Ausgabe", "02.02.2020", "00:15:00",
         "Nachrichten", "http://cdn.example/2.mp4", "http://example/2", "extra"]
    ]"#;

    #[test]
    fn decodes_wire_rows() {
        let rows: Vec<Vec<String>> = serde_json::from_str(DOC).expect("doc failed");
        let records = rows
            .into_iter()
            .map(Record::from_values)
            .collect::<Result<Vec<Record>, _>>()
            .expect("rows failed");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].station, "ARD");
        assert_eq!(records[0].enclosure, "http://cdn.example/1.mp4");
        assert_eq!(records[1].unknown, "extra");
    }

    #[test]
    #[ignore]
    fn live_fetch() {
        init_log();
        let client = Client::new();
        let records = client.fetch().expect("fetch failed");
        assert!(!records.is_empty());
        debug!("{} records upstream", records.len());
    }
}
