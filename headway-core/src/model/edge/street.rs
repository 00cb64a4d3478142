use chrono::TimeDelta;

use super::Walkable;
use crate::Weight;
use crate::model::{State, WalkOptions};

/// A street segment, walkable at any time of day in either direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Street {
    name: String,
    /// Segment length in meters
    length: f64,
}

impl Street {
    pub fn new(name: impl Into<String>, length: f64) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    #[allow(clippy::cast_possible_truncation)]
    fn crossing_time(&self, options: &WalkOptions) -> Weight {
        (self.length / options.walking_speed).ceil() as Weight
    }
}

impl Walkable for Street {
    fn walk(&self, state: &State, options: &WalkOptions) -> Option<State> {
        if self.length > options.max_walk_distance {
            return None;
        }
        let seconds = self.crossing_time(options);
        Some(state.at(state.time() + TimeDelta::seconds(seconds), seconds))
    }

    fn walk_back(&self, state: &State, options: &WalkOptions) -> Option<State> {
        if self.length > options.max_walk_distance {
            return None;
        }
        let seconds = self.crossing_time(options);
        Some(state.at(state.time() - TimeDelta::seconds(seconds), seconds))
    }
}
