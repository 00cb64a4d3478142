// Re-export key components
pub use crate::Weight;
pub use crate::error::Error;
pub use crate::loading::{FeedConfig, HopSink, load_feed};
pub use crate::model::{EdgePayload, Graph, Hop, State, Street, Vertex, WalkOptions, Walkable};
pub use crate::routing::{
    EdgeOption, GraphPath, KaoGraph, ShortestPathTree, Tree, earliest_arrival_tree,
    shortest_path_tree,
};
