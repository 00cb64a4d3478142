//! Edge payloads and the traversal capability they share

mod hop;
mod street;

pub use hop::Hop;
pub use street::Street;

use chrono::NaiveDateTime;

use crate::error::Error;
use crate::model::{State, WalkOptions};

/// Capability shared by every edge payload: simulate carrying a traversal
/// [`State`] across the edge, forward or backward in time.
///
/// `walk` returns `None` when the edge cannot be used from the given state
/// (a scheduled departure already missed, a segment too long to walk).
/// That is an expected outcome, consumed by searches as "prune this edge".
pub trait Walkable {
    /// Advance `state` across the edge, forward in time.
    fn walk(&self, state: &State, options: &WalkOptions) -> Option<State>;

    /// Time-reversed counterpart of [`walk`](Walkable::walk), for
    /// backward search.
    fn walk_back(&self, state: &State, options: &WalkOptions) -> Option<State>;
}

/// The payload kinds an edge can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgePayload {
    /// One scheduled transit segment
    Hop(Hop),
    /// A street segment walkable at any time of day
    Street(Street),
}

impl EdgePayload {
    pub fn as_hop(&self) -> Option<&Hop> {
        match self {
            EdgePayload::Hop(hop) => Some(hop),
            EdgePayload::Street(_) => None,
        }
    }

    /// Scheduled arrival instant, for payload kinds that have one.
    pub fn scheduled_arrival(&self) -> Option<NaiveDateTime> {
        match self {
            EdgePayload::Hop(hop) => Some(hop.arrival()),
            EdgePayload::Street(_) => None,
        }
    }

    /// Walk with the monotonicity contract enforced.
    ///
    /// A successful walk may never move backwards in time or shrink the
    /// accumulated weight; both searches order their work on that
    /// assumption, so a violating payload is a hard error rather than a
    /// pruned edge.
    pub fn walk_checked(
        &self,
        state: &State,
        options: &WalkOptions,
    ) -> Result<Option<State>, Error> {
        let Some(result) = self.walk(state, options) else {
            return Ok(None);
        };
        if result.time() < state.time() {
            return Err(Error::TimeRegression {
                start: state.time(),
                result: result.time(),
            });
        }
        if result.weight() < state.weight() {
            return Err(Error::NegativeWeight {
                start: state.weight(),
                result: result.weight(),
            });
        }
        Ok(Some(result))
    }

    /// Reversed-direction twin of [`walk_checked`](EdgePayload::walk_checked):
    /// the result may not lie later in time than the input.
    pub fn walk_back_checked(
        &self,
        state: &State,
        options: &WalkOptions,
    ) -> Result<Option<State>, Error> {
        let Some(result) = self.walk_back(state, options) else {
            return Ok(None);
        };
        if result.time() > state.time() {
            return Err(Error::TimeRegression {
                start: state.time(),
                result: result.time(),
            });
        }
        if result.weight() < state.weight() {
            return Err(Error::NegativeWeight {
                start: state.weight(),
                result: result.weight(),
            });
        }
        Ok(Some(result))
    }
}

impl Walkable for EdgePayload {
    fn walk(&self, state: &State, options: &WalkOptions) -> Option<State> {
        match self {
            EdgePayload::Hop(hop) => hop.walk(state, options),
            EdgePayload::Street(street) => street.walk(state, options),
        }
    }

    fn walk_back(&self, state: &State, options: &WalkOptions) -> Option<State> {
        match self {
            EdgePayload::Hop(hop) => hop.walk_back(state, options),
            EdgePayload::Street(street) => street.walk_back(state, options),
        }
    }
}
