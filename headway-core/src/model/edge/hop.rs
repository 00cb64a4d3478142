use chrono::{NaiveDateTime, Timelike};

use super::Walkable;
use crate::model::{State, WalkOptions};

/// One scheduled trip segment between two stops.
///
/// A hop is a single fixed instance: it leaves `from_stop` at exactly
/// `departure` and reaches `to_stop` at `arrival`. It is not a recurring
/// pattern; a traveler who shows up after the departure instant has missed
/// it for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    from_stop: String,
    to_stop: String,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
}

impl Hop {
    pub fn new(
        from_stop: impl Into<String>,
        to_stop: impl Into<String>,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    ) -> Self {
        Self {
            from_stop: from_stop.into(),
            to_stop: to_stop.into(),
            departure,
            arrival,
        }
    }

    pub fn from_stop(&self) -> &str {
        &self.from_stop
    }

    pub fn to_stop(&self) -> &str {
        &self.to_stop
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Departure instant as seconds past midnight of its own calendar day.
    pub fn departure_second_of_day(&self) -> i64 {
        i64::from(self.departure.time().num_seconds_from_midnight())
    }

    /// Arrival instant as seconds past midnight of its own calendar day.
    pub fn arrival_second_of_day(&self) -> i64 {
        i64::from(self.arrival.time().num_seconds_from_midnight())
    }
}

impl Walkable for Hop {
    /// Board the hop if it has not yet departed. The cost charged is the
    /// full elapsed time: waiting for the departure plus riding to the
    /// arrival.
    fn walk(&self, state: &State, _options: &WalkOptions) -> Option<State> {
        if state.time() > self.departure {
            return None;
        }
        let cost = (self.arrival - state.time()).num_seconds();
        Some(state.at(self.arrival, cost))
    }

    /// Alight backwards: usable only from a state at or after the arrival,
    /// landing at the departure instant.
    fn walk_back(&self, state: &State, _options: &WalkOptions) -> Option<State> {
        if state.time() < self.arrival {
            return None;
        }
        let cost = (state.time() - self.departure).num_seconds();
        Some(state.at(self.departure, cost))
    }
}
