//! Least-time routing over schedule-based transportation networks.
//!
//! The cost of crossing an edge here depends on the instant it is entered:
//! scheduled segments depart at fixed times, so arriving early means
//! waiting and arriving late means missing the run entirely. Edge payloads
//! encode those semantics behind the [`model::Walkable`] capability, and
//! two searches consume it:
//!
//! - [`routing::shortest_path_tree`] — a generalized Dijkstra ordered by
//!   accumulated weight, re-walking each edge from the state it is entered
//!   with.
//! - [`routing::earliest_arrival_tree`] — a single-pass greedy builder over
//!   a globally time-sorted edge ranking precomputed by
//!   [`routing::KaoGraph`].
//!
//! Both emit a parent-pointer tree from which point-to-point paths are
//! extracted. Feed loading lives in [`loading`] and runs strictly before
//! any query.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{EdgePayload, Graph, Hop, State, Street, Vertex, WalkOptions, Walkable};
pub use routing::{GraphPath, KaoGraph, ShortestPathTree, Tree};

/// Accumulated traversal cost in seconds.
pub type Weight = i64;
