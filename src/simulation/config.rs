//! Road geometry and pacing settings
//!
//! The defaults reproduce the classic 800x600 four-lane layout.

use std::time::Duration;

use anyhow::{bail, Result};

use super::types::{Lane, LANE_COUNT};

/// Road width in screen units
pub const ROAD_WIDTH: i32 = 800;
/// Road height in screen units
pub const ROAD_HEIGHT: i32 = 600;
/// Width shared by player and traffic cars
pub const CAR_WIDTH: i32 = 50;
/// Height shared by player and traffic cars
pub const CAR_HEIGHT: i32 = 100;
/// Distance between the bottom of a player car and the road edge
pub const PLAYER_BOTTOM_MARGIN: i32 = 10;
/// Downward movement of traffic per tick
pub const TRAFFIC_SPEED: i32 = 2;
/// Spawns are suppressed while any car is above this line
pub const MIN_GAP: i32 = 300;
/// Ticks between spawn attempts
pub const SPAWN_INTERVAL_TICKS: u32 = 60;
/// Wall-clock length of one tick
pub const TICK_INTERVAL_MS: u64 = 20;

/// Tunable game settings
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub road_width: i32,
    pub road_height: i32,
    pub car_width: i32,
    pub car_height: i32,
    pub player_bottom_margin: i32,
    pub traffic_speed: i32,
    pub min_gap: i32,
    pub spawn_interval_ticks: u32,
    pub tick_interval: Duration,
    pub player_one_lane: Lane,
    pub player_two_lane: Lane,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            road_width: ROAD_WIDTH,
            road_height: ROAD_HEIGHT,
            car_width: CAR_WIDTH,
            car_height: CAR_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            traffic_speed: TRAFFIC_SPEED,
            min_gap: MIN_GAP,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            player_one_lane: Lane::clamped(0),
            player_two_lane: Lane::clamped(2),
        }
    }
}

impl GameConfig {
    pub fn lane_width(&self) -> i32 {
        self.road_width / LANE_COUNT as i32
    }

    /// Left edge of a car of `width` centred in `lane`
    pub fn lane_x(&self, lane: Lane, width: i32) -> i32 {
        let lane_width = self.lane_width();
        lane.index() as i32 * lane_width + (lane_width - width) / 2
    }

    /// Lane containing the x coordinate, clamped onto the road
    pub fn lane_at(&self, x: i32) -> Lane {
        Lane::clamped((x / self.lane_width()) as i64)
    }

    /// Top edge of the player cars
    pub fn player_y(&self) -> i32 {
        self.road_height - self.car_height - self.player_bottom_margin
    }

    /// Top edge of freshly spawned traffic, just above the road
    pub fn spawn_y(&self) -> i32 {
        -self.car_height
    }

    /// Check that the geometry describes a playable road
    pub fn validate(&self) -> Result<()> {
        if self.road_width <= 0 || self.road_height <= 0 {
            bail!(
                "road must have a positive size, got {}x{}",
                self.road_width,
                self.road_height
            );
        }
        if self.car_width <= 0 || self.car_height <= 0 {
            bail!(
                "cars must have a positive size, got {}x{}",
                self.car_width,
                self.car_height
            );
        }
        if self.road_width % LANE_COUNT as i32 != 0 {
            bail!(
                "road width {} is not divisible into {} lanes",
                self.road_width,
                LANE_COUNT
            );
        }
        if self.car_width > self.lane_width() {
            bail!(
                "car width {} does not fit a lane of width {}",
                self.car_width,
                self.lane_width()
            );
        }
        if self.player_y() < 0 {
            bail!("player row lies above the road");
        }
        if self.traffic_speed <= 0 {
            bail!("traffic speed must be positive");
        }
        if self.spawn_interval_ticks == 0 {
            bail!("spawn interval must be at least one tick");
        }
        Ok(())
    }
}
