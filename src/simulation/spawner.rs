//! Traffic spawning for the lane simulation
//!
//! A spawn needs at least three free lanes and a clear band at the top of the
//! road. The gap check scans every lane, so a single car near the spawn line
//! holds back spawning across the whole road.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::car::Car;
use super::config::GameConfig;
use super::lanes::LaneOccupancy;
use super::types::{CarId, Lane};

/// Spawning is refused unless more than this many lanes are free
pub const MIN_FREE_LANES_EXCLUSIVE: usize = 2;

/// Result of a spawn attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// A traffic car entered the given lane
    Spawned(Lane),
    /// Two or more lanes were already occupied
    TooFewFreeLanes,
    /// Some car is still inside the band below the spawn line
    GapTooSmall,
}

/// True when `car` sits in the band `(-car_height, min_gap)` below the spawn line
pub fn blocks_spawn(car: &Car, config: &GameConfig) -> bool {
    car.y > -config.car_height && car.y < config.min_gap
}

/// Try to add one traffic car to `traffic`
///
/// # Arguments
/// * `car_id` - Id given to the car if one is spawned
/// * `traffic` - Current traffic; the new car is appended last
/// * `occupancy` - Lanes occupied this tick; the chosen lane gets marked
/// * `config` - Road geometry
/// * `rng` - Source for the lane choice
pub fn spawn_traffic<R: Rng + ?Sized>(
    car_id: CarId,
    traffic: &mut Vec<Car>,
    occupancy: &mut LaneOccupancy,
    config: &GameConfig,
    rng: &mut R,
) -> SpawnOutcome {
    let free_lanes = occupancy.free_lanes();
    if free_lanes.len() <= MIN_FREE_LANES_EXCLUSIVE {
        debug!("Spawn skipped: only {} free lanes", free_lanes.len());
        return SpawnOutcome::TooFewFreeLanes;
    }

    // Non-empty: more than two lanes are free
    let Some(&lane) = free_lanes.choose(rng) else {
        return SpawnOutcome::TooFewFreeLanes;
    };

    if traffic.iter().any(|car| blocks_spawn(car, config)) {
        debug!("Spawn skipped: traffic too close to the spawn line");
        return SpawnOutcome::GapTooSmall;
    }

    traffic.push(Car::traffic(car_id, lane, config));
    occupancy.mark(lane);
    debug!("Spawned traffic car {:?} in lane {}", car_id, lane.index());
    SpawnOutcome::Spawned(lane)
}
