//! Reading GTFS-style schedule feeds into hop edges

mod parser;
mod processor;
mod raw_types;

pub use parser::{deserialize_feed_file, parse_time};
pub use processor::load_feed;
pub use raw_types::{FeedStop, FeedStopTime, FeedTrip};
