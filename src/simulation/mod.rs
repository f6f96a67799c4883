//! Standalone lane simulation module
//!
//! This module contains all the core game logic that can run independently
//! of the Bevy game engine. It can be tested via console without needing to
//! boot up the full game.

mod car;
mod config;
mod game_loop;
mod lanes;
mod render;
mod session;
mod spawner;
mod types;

// Re-export public types for external use
pub use car::Car;
pub use config::{
    GameConfig, CAR_HEIGHT, CAR_WIDTH, MIN_GAP, PLAYER_BOTTOM_MARGIN, ROAD_HEIGHT, ROAD_WIDTH,
    SPAWN_INTERVAL_TICKS, TICK_INTERVAL_MS, TRAFFIC_SPEED,
};
pub use game_loop::GameLoop;
pub use lanes::LaneOccupancy;
pub use render::{ascii_map, CarView, RenderSink, RenderView};
pub use session::{Session, SessionStats, TickReport};
pub use spawner::{blocks_spawn, spawn_traffic, SpawnOutcome, MIN_FREE_LANES_EXCLUSIVE};
pub use types::{CarId, CarRole, Command, Direction, Lane, Phase, PlayerId, Rgb, LANE_COUNT};
