//! Car entity for the lane simulation
//!
//! Players and traffic share one rectangle type; the role tag carries the
//! behavioural difference.

use super::config::GameConfig;
use super::types::{CarId, CarRole, Direction, Lane, PlayerId, Rgb};

/// A car on the road, stored as an axis-aligned rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: CarId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub lane: Lane,
    pub role: CarRole,
}

impl Car {
    /// Create a player car parked in `lane` on the player row
    pub fn player(id: CarId, player: PlayerId, lane: Lane, config: &GameConfig) -> Self {
        Self {
            id,
            x: config.lane_x(lane, config.car_width),
            y: config.player_y(),
            width: config.car_width,
            height: config.car_height,
            lane,
            role: CarRole::Player(player),
        }
    }

    /// Create a traffic car just above the top of `lane`
    pub fn traffic(id: CarId, lane: Lane, config: &GameConfig) -> Self {
        Self {
            id,
            x: config.lane_x(lane, config.car_width),
            y: config.spawn_y(),
            width: config.car_width,
            height: config.car_height,
            lane,
            role: CarRole::Traffic,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, CarRole::Player(_))
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        match self.role {
            CarRole::Player(player) => Some(player),
            CarRole::Traffic => None,
        }
    }

    /// Move the car by a delta
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Shift one lane in `direction`, staying on the road, and re-centre in the lane
    pub fn change_lane(&mut self, direction: Direction, config: &GameConfig) {
        self.lane = self.lane.offset(direction.delta());
        self.x = config.lane_x(self.lane, self.width);
    }

    /// Strict rectangle overlap; cars sharing only an edge do not intersect
    pub fn intersects(&self, other: &Car) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    pub fn color(&self) -> Rgb {
        match self.role {
            CarRole::Player(_) => Rgb::RED,
            CarRole::Traffic => Rgb::BLUE,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        self.player_id().map(|player| player.label())
    }
}
