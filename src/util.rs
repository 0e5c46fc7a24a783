use crate::feed::FeedScope;
use crate::model::Record;

pub fn init_log() {
    let _lg = flexi_logger::Logger::try_with_env_or_str("debug")
        .unwrap()
        .log_to_stdout()
        .start()
        .unwrap();
}

// scope equality is exact and case-sensitive, mirroring upstream
pub fn filter_scope(scope: FeedScope) -> impl Fn(&Record) -> bool {
    move |r: &Record| -> bool {
        scope.station.as_ref().map_or(true, |s| s == &r.station)
            && scope.show.as_ref().map_or(true, |s| s == &r.show)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(station: &str, show: &str) -> Record {
        Record {
            station: station.to_string(),
            show: show.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn filter_test() {
        let records = vec![
            record("ARD", "Tatort"),
            record("ARD", "Tagesschau"),
            record("ZDF", "Tatort"),
        ];

        let keep = filter_scope(FeedScope::all());
        assert_eq!(records.iter().filter(|r| keep(r)).count(), 3);

        let keep = filter_scope(FeedScope::station("ARD"));
        assert_eq!(records.iter().filter(|r| keep(r)).count(), 2);

        let keep = filter_scope(FeedScope::show_on_station("ZDF", "Tatort"));
        assert_eq!(records.iter().filter(|r| keep(r)).count(), 1);

        // exact match only
        let keep = filter_scope(FeedScope::station("ard"));
        assert_eq!(records.iter().filter(|r| keep(r)).count(), 0);
    }
}
