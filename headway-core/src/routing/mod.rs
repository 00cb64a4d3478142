//! Search algorithms and the trees they produce

pub mod dijkstra;
pub mod kao;
pub mod spt;

pub use dijkstra::shortest_path_tree;
pub use kao::{EdgeOption, KaoGraph, Tree, earliest_arrival_tree};
pub use spt::{GraphPath, ShortestPathTree, SptEdge, SptVertex};
