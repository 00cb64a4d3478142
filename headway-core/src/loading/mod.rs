//! Loading schedule feeds and populating routing graphs
//!
//! All feed I/O happens here, strictly before any query runs. The loader is
//! polymorphic over its destination: a plain [`Graph`] gets adjacency only,
//! while a [`KaoGraph`] additionally registers every hop in its flat
//! scheduled-edge list.

mod config;
pub mod gtfs;

pub use config::FeedConfig;
pub use gtfs::load_feed;

use crate::model::{EdgePayload, Graph, Hop};
use crate::routing::KaoGraph;

/// Destination for feed loading: anything that can accept stops and
/// scheduled hops.
pub trait HopSink {
    fn add_stop(&mut self, stop_id: &str);
    fn add_hop(&mut self, hop: Hop);
}

impl HopSink for Graph {
    fn add_stop(&mut self, stop_id: &str) {
        self.add_vertex(stop_id);
    }

    fn add_hop(&mut self, hop: Hop) {
        let from = hop.from_stop().to_string();
        let to = hop.to_stop().to_string();
        self.add_edge(&from, &to, EdgePayload::Hop(hop));
    }
}

impl HopSink for KaoGraph {
    fn add_stop(&mut self, stop_id: &str) {
        self.add_vertex(stop_id);
    }

    fn add_hop(&mut self, hop: Hop) {
        let from = hop.from_stop().to_string();
        let to = hop.to_stop().to_string();
        self.add_edge(&from, &to, EdgePayload::Hop(hop));
    }
}
