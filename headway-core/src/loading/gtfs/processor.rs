use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use hashbrown::HashMap;
use itertools::Itertools;
use log::{info, warn};

use super::parser::{deserialize_feed_file, parse_time};
use super::raw_types::{FeedStop, FeedStopTime, FeedTrip};
use crate::error::Error;
use crate::loading::{FeedConfig, HopSink};
use crate::model::Hop;

/// Read a feed directory and pour it into `sink`: one stop per distinct
/// stop id, one hop per consecutive stop-time pair within each trip.
///
/// Trips are processed in feed order, so repeated loads of the same feed
/// register edges identically.
///
/// # Errors
///
/// Returns an error if the feed files cannot be read or a `stop_sequence`
/// value is not numeric.
pub fn load_feed<S: HopSink>(config: &FeedConfig, sink: &mut S) -> Result<(), Error> {
    let stops: Vec<FeedStop> = deserialize_feed_file(&config.dir.join("stops.txt"))?;
    let trips: Vec<FeedTrip> = deserialize_feed_file(&config.dir.join("trips.txt"))?;
    let stop_times: Vec<FeedStopTime> = deserialize_feed_file(&config.dir.join("stop_times.txt"))?;

    info!(
        "Loaded feed from {}: {} stops, {} trips, {} stop times",
        config.dir.display(),
        stops.len(),
        trips.len(),
        stop_times.len()
    );

    for stop in &stops {
        sink.add_stop(&stop.stop_id);
    }

    // Group stop times per trip, ordered by stop sequence.
    let mut by_trip: HashMap<&str, Vec<(u32, &FeedStopTime)>> = HashMap::new();
    for stop_time in &stop_times {
        let sequence: u32 = stop_time.stop_sequence.parse().map_err(|e| {
            Error::InvalidData(format!(
                "stop_sequence '{}' in trip '{}': {e}",
                stop_time.stop_sequence, stop_time.trip_id
            ))
        })?;
        by_trip
            .entry(stop_time.trip_id.as_str())
            .or_default()
            .push((sequence, stop_time));
    }
    for rows in by_trip.values_mut() {
        rows.sort_by_key(|&(sequence, _)| sequence);
    }

    let midnight = config.service_date.and_time(NaiveTime::MIN);
    let mut hops = 0usize;

    for trip in &trips {
        let Some(rows) = by_trip.get(trip.trip_id.as_str()) else {
            warn!("Trip '{}' has no stop times, skipping", trip.trip_id);
            continue;
        };
        for ((_, board), (_, alight)) in rows.iter().tuple_windows() {
            sink.add_hop(Hop::new(
                board.stop_id.as_str(),
                alight.stop_id.as_str(),
                instant(midnight, &board.departure_time),
                instant(midnight, &alight.arrival_time),
            ));
            hops += 1;
        }
    }

    info!("Registered {hops} hops");
    Ok(())
}

/// Anchor a feed clock time onto the service day. Times of 24:00:00 and
/// beyond land on the following day instead of wrapping.
fn instant(midnight: NaiveDateTime, time_str: &str) -> NaiveDateTime {
    midnight + TimeDelta::seconds(parse_time(time_str))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn clock_times_anchor_onto_the_service_day() {
        let midnight = NaiveDate::from_ymd_opt(2009, 8, 7)
            .unwrap()
            .and_time(NaiveTime::MIN);

        let noon = instant(midnight, "12:00:00");
        assert_eq!(noon.date(), midnight.date());

        let past_midnight = instant(midnight, "24:30:00");
        assert_eq!(
            past_midnight.date(),
            NaiveDate::from_ymd_opt(2009, 8, 8).unwrap()
        );
    }
}
