//! Read-only view of a session handed to renderers once per tick

use super::car::Car;
use super::config::GameConfig;
use super::session::Session;
use super::types::{CarId, CarRole, Phase, PlayerId, Rgb, LANE_COUNT};

/// Something that draws the game after each tick
pub trait RenderSink {
    fn present(&mut self, view: &RenderView);
}

/// A sink that ignores every frame
impl RenderSink for () {
    fn present(&mut self, _view: &RenderView) {}
}

/// One car as a renderer sees it
#[derive(Debug, Clone, PartialEq)]
pub struct CarView {
    pub id: CarId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub role: CarRole,
    pub color: Rgb,
    pub label: Option<&'static str>,
}

impl From<&Car> for CarView {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id,
            x: car.x,
            y: car.y,
            width: car.width,
            height: car.height,
            role: car.role,
            color: car.color(),
            label: car.label(),
        }
    }
}

/// Snapshot of everything a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct RenderView {
    pub road_width: i32,
    pub road_height: i32,
    /// Players first, then traffic in creation order
    pub cars: Vec<CarView>,
    pub score: u32,
    pub high_score: u32,
    pub phase: Phase,
    pub failed_players: Vec<PlayerId>,
    /// The car highlighted on the game-over screen
    pub failed_car: Option<CarId>,
}

impl RenderView {
    pub fn capture(session: &Session) -> Self {
        let cars = session
            .players
            .iter()
            .chain(session.traffic.iter())
            .map(CarView::from)
            .collect();

        Self {
            road_width: session.config.road_width,
            road_height: session.config.road_height,
            cars,
            score: session.score,
            high_score: session.high_score,
            phase: session.phase,
            failed_players: session.failed_players.clone(),
            failed_car: session.failed_car().map(|car| car.id),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

/// Columns per lane in the ASCII map
const CELLS_PER_LANE: usize = 8;
/// Rows in the ASCII map
const MAP_ROWS: usize = 20;

/// Draw the road as text: `1`/`2` for players, `#` for traffic, `X` for a wrecked player
pub fn ascii_map(view: &RenderView, config: &GameConfig) -> String {
    let width = CELLS_PER_LANE * LANE_COUNT;
    let mut grid = vec![vec![' '; width]; MAP_ROWS];

    for row in grid.iter_mut() {
        for lane in 1..LANE_COUNT {
            row[lane * CELLS_PER_LANE - 1] = ':';
        }
    }

    let scale_x = width as f32 / config.road_width as f32;
    let scale_y = MAP_ROWS as f32 / config.road_height as f32;

    for car in &view.cars {
        let glyph = match car.role {
            CarRole::Traffic => '#',
            CarRole::Player(_) if view.failed_car == Some(car.id) => 'X',
            CarRole::Player(PlayerId::One) => '1',
            CarRole::Player(PlayerId::Two) => '2',
        };

        let top = car.y.max(0);
        let bottom = (car.y + car.height).min(config.road_height);
        if bottom <= top {
            continue;
        }
        let first_row = (top as f32 * scale_y) as usize;
        let last_row = ((bottom as f32 * scale_y).ceil() as usize).min(MAP_ROWS);
        let first_col = (car.x.max(0) as f32 * scale_x) as usize;
        let last_col = (((car.x + car.width) as f32 * scale_x).ceil() as usize).min(width);

        for row in grid.iter_mut().take(last_row).skip(first_row) {
            for cell in row.iter_mut().take(last_col).skip(first_col) {
                *cell = glyph;
            }
        }
    }

    let border = format!("+{}+", "-".repeat(width));
    let mut out = String::with_capacity((width + 3) * (MAP_ROWS + 2));
    out.push_str(&border);
    out.push('\n');
    for row in grid {
        out.push('|');
        out.extend(row);
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}
