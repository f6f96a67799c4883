//! Core types for the lane simulation
//!
//! These are standalone types that don't depend on Bevy.

/// Number of lanes on the road
pub const LANE_COUNT: usize = 4;

/// A unique identifier for simulation entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(pub usize);

/// One of the two human-controlled cars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Label drawn under the car
    pub fn label(&self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }
}

/// What a car is in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarRole {
    Player(PlayerId),
    Traffic,
}

/// A lane index, always in `0..LANE_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lane(u8);

impl Lane {
    pub const LEFTMOST: Lane = Lane(0);
    pub const RIGHTMOST: Lane = Lane(LANE_COUNT as u8 - 1);

    /// Build a lane, clamping out-of-range values onto the road
    pub fn clamped(index: i64) -> Self {
        Lane(index.clamp(0, LANE_COUNT as i64 - 1) as u8)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Shift by `delta` lanes, clamped to the road edges
    pub fn offset(&self, delta: i32) -> Self {
        Self::clamped(self.0 as i64 + delta as i64)
    }

    /// Iterate every lane from left to right
    pub fn all() -> impl Iterator<Item = Lane> {
        (0..LANE_COUNT as u8).map(Lane)
    }
}

/// Lane-change direction for a player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Discrete input delivered between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(PlayerId, Direction),
    Restart,
}

impl Command {
    pub const fn move_left(player: PlayerId) -> Self {
        Command::Move(player, Direction::Left)
    }

    pub const fn move_right(player: PlayerId) -> Self {
        Command::Move(player, Direction::Right)
    }
}

/// Phase of the current play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

/// RGB colour handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
}
