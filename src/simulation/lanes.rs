//! Per-tick lane occupancy used to throttle spawning

use super::types::{Lane, LANE_COUNT};

/// Which lanes currently hold a traffic car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaneOccupancy {
    occupied: [bool; LANE_COUNT],
}

impl LaneOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every lane free
    pub fn reset(&mut self) {
        self.occupied = [false; LANE_COUNT];
    }

    pub fn mark(&mut self, lane: Lane) {
        self.occupied[lane.index()] = true;
    }

    pub fn is_occupied(&self, lane: Lane) -> bool {
        self.occupied[lane.index()]
    }

    /// Free lanes, left to right
    pub fn free_lanes(&self) -> Vec<Lane> {
        Lane::all().filter(|lane| !self.is_occupied(*lane)).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|occupied| **occupied).count()
    }
}
