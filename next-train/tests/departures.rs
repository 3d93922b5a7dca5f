//! End-to-end queries over a feed written to disk.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use next_train::departures::{QueryError, next_departures};
use next_train::feed::{
    CALENDAR_FILE, DiskFeed, ROUTES_FILE, STOP_TIMES_FILE, STOPS_FILE, TRIPS_FILE,
};
use next_train::render::render_board;
use tempfile::tempdir;

const STOPS: &str = "\
stop_id,stop_code,stop_name,stop_lat,stop_lon
22750,22750,ADDISON STATION,32.959,-96.829
22751,22751,ADDISON STATION,32.959,-96.829
22800,22800,ARAPAHO CENTER STATION,32.966,-96.741
";

const ROUTES: &str = "\
route_id,agency_id,route_short_name,route_long_name,route_type
SIL,DART,SLV,Silver Line,2
";

const TRIPS: &str = "\
route_id,service_id,trip_id,trip_headsign,direction_id
SIL,WKDY,E1,SHILOH ROAD,0
SIL,WKDY,E2,SHILOH ROAD,0
SIL,WKDY,E3,SHILOH ROAD,0
SIL,WKDY,E4,,0
SIL,WKDY,W1,DFW AIRPORT,1
SIL,WKDY,W2,DFW AIRPORT,1
SIL,SAT,W9,DFW AIRPORT,1
SIL,HOL,W8,DFW AIRPORT,1
";

const STOP_TIMES: &str = "\
trip_id,arrival_time,departure_time,stop_id,stop_sequence
E1,07:10:00,07:10:30,22750,5
E2,07:40:00,07:40:30,22750,5
E3,08:10:00,08:10:30,22750,5
E4,07:05:00,07:05:30,22750,5
W1,07:25:00,07:25:30,22751,9
W2,24:15:00,24:15:30,22751,9
W9,07:05:00,07:05:30,22751,9
W8,07:06:00,07:06:30,22751,9
E1,07:20:00,07:20:30,22800,6
";

const CALENDAR: &str = "\
service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date
WKDY,1,1,1,1,1,0,0,20240101,20241231
SAT,0,0,0,0,0,1,0,20240101,20241231
";

fn write_feed(dir: &Path) {
    for (file, contents) in [
        (STOPS_FILE, STOPS),
        (ROUTES_FILE, ROUTES),
        (TRIPS_FILE, TRIPS),
        (STOP_TIMES_FILE, STOP_TIMES),
        (CALENDAR_FILE, CALENDAR),
    ] {
        std::fs::write(dir.join(file), contents).unwrap();
    }
}

/// 2024-03-13 is a Wednesday.
fn wednesday_at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 13)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn trip_ids(feed: &DiskFeed, station: &str, n: usize, now: NaiveDateTime) -> Vec<String> {
    next_departures(feed, station, n, now)
        .unwrap()
        .departures
        .into_iter()
        .map(|d| d.trip_id)
        .collect()
}

#[test]
fn weekday_board_at_two_platform_station() {
    let dir = tempdir().unwrap();
    write_feed(dir.path());
    let feed = DiskFeed::load(dir.path()).unwrap();

    let board = next_departures(&feed, "ADDISON STATION", 2, wednesday_at(7, 0)).unwrap();

    assert_eq!(board.stop_ids, vec!["22750", "22751"]);
    let rows: Vec<(&str, String, &str)> = board
        .departures
        .iter()
        .map(|d| {
            (
                d.trip_id.as_str(),
                d.arrival_time.to_string(),
                d.trip_headsign.as_str(),
            )
        })
        .collect();
    // W2 is past midnight, W9/W8 are not weekday services, E4 has no headsign.
    assert_eq!(
        rows,
        vec![
            ("E1", "07:10:00".to_string(), "SHILOH ROAD"),
            ("W1", "07:25:00".to_string(), "DFW AIRPORT"),
            ("E2", "07:40:00".to_string(), "SHILOH ROAD"),
        ]
    );
    assert_eq!(board.departures[0].departure_time, "07:10:30");
    assert_eq!(board.departures[0].route_id, "SIL");
}

#[test]
fn trip_without_headsign_is_not_shown() {
    let dir = tempdir().unwrap();
    write_feed(dir.path());
    let feed = DiskFeed::load(dir.path()).unwrap();

    let all = trip_ids(&feed, "ADDISON STATION", 10, wednesday_at(7, 0));
    assert!(!all.contains(&"E4".to_string()));
    assert_eq!(all, vec!["E1", "W1", "E2", "E3"]);
}

#[test]
fn saturday_runs_only_saturday_services() {
    let dir = tempdir().unwrap();
    write_feed(dir.path());
    let feed = DiskFeed::load(dir.path()).unwrap();

    let saturday = NaiveDate::from_ymd_opt(2024, 3, 16)
        .unwrap()
        .and_hms_opt(7, 0, 0)
        .unwrap();
    assert_eq!(trip_ids(&feed, "ADDISON STATION", 2, saturday), vec!["W9"]);
}

#[test]
fn later_in_the_day_leaves_fewer_trains() {
    let dir = tempdir().unwrap();
    write_feed(dir.path());
    let feed = DiskFeed::load(dir.path()).unwrap();

    assert_eq!(
        trip_ids(&feed, "ADDISON STATION", 2, wednesday_at(7, 30)),
        vec!["E2", "E3"]
    );
    assert!(trip_ids(&feed, "ADDISON STATION", 2, wednesday_at(23, 0)).is_empty());
}

#[test]
fn missing_station_is_distinct_from_empty_board() {
    let dir = tempdir().unwrap();
    write_feed(dir.path());
    let feed = DiskFeed::load(dir.path()).unwrap();

    let missing = next_departures(&feed, "LOVE FIELD", 2, wednesday_at(7, 0));
    assert_eq!(
        missing,
        Err(QueryError::StationNotFound("LOVE FIELD".to_string()))
    );

    let empty = next_departures(&feed, "ADDISON STATION", 2, wednesday_at(23, 0)).unwrap();
    assert!(empty.is_empty());
    assert!(render_board(&empty).contains("No upcoming trains"));
}

#[test]
fn query_leaves_tables_untouched() {
    let dir = tempdir().unwrap();
    write_feed(dir.path());
    let feed = DiskFeed::load(dir.path()).unwrap();
    let before = feed.tables().clone();

    let _ = next_departures(&feed, "ADDISON STATION", 1, wednesday_at(7, 0));

    assert_eq!(feed.tables().stop_times, before.stop_times);
    assert_eq!(feed.tables().trips, before.trips);
}
