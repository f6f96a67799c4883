//! Session state and the fixed-step simulation tick
//!
//! A session is one play-through plus the process-lifetime high score. It owns
//! every car and is only ever mutated by `tick` and `apply_command`.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::car::Car;
use super::config::GameConfig;
use super::lanes::LaneOccupancy;
use super::spawner::{spawn_traffic, SpawnOutcome};
use super::types::{CarId, Command, Phase, PlayerId};

/// Running totals across every round of a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Ticks that advanced the simulation (inert game-over ticks excluded)
    pub ticks: u64,
    pub spawn_attempts: u32,
    pub cars_spawned: u32,
    /// Traffic cars that left the bottom of the road
    pub cars_passed: u32,
    /// Rounds finished by a collision
    pub rounds_lost: u32,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Set on ticks where the spawn countdown fired
    pub spawn: Option<SpawnOutcome>,
    /// Traffic cars removed at the bottom this tick
    pub passed: u32,
    /// Players hit this tick; non-empty means the round just ended
    pub collided: Vec<PlayerId>,
}

/// The mutable state of one play-through
pub struct Session {
    pub config: GameConfig,
    /// Indexed by `PlayerId`: player one first
    pub players: [Car; 2],
    /// Traffic in creation order
    pub traffic: Vec<Car>,
    pub occupancy: LaneOccupancy,
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    pub spawn_countdown: u32,
    /// Players hit in the collision that ended the round, in detection order
    pub failed_players: Vec<PlayerId>,
    pub stats: SessionStats,

    next_id: usize,

    /// Optional seeded RNG for reproducible sessions
    rng: Option<StdRng>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Session {
    fn new_internal(config: GameConfig, rng: Option<StdRng>) -> Self {
        let players = [
            Car::player(CarId(0), PlayerId::One, config.player_one_lane, &config),
            Car::player(CarId(1), PlayerId::Two, config.player_two_lane, &config),
        ];
        Self {
            config,
            players,
            traffic: Vec::new(),
            occupancy: LaneOccupancy::new(),
            phase: Phase::Running,
            score: 0,
            high_score: 0,
            spawn_countdown: 0,
            failed_players: Vec::new(),
            stats: SessionStats::default(),
            next_id: 2,
            rng,
        }
    }

    pub fn new(config: GameConfig) -> Self {
        Self::new_internal(config, None)
    }

    /// Create a session whose spawn choices are reproducible
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new_internal(config, Some(StdRng::seed_from_u64(seed)))
    }

    fn next_car_id(&mut self) -> CarId {
        let id = CarId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn player(&self, player: PlayerId) -> &Car {
        &self.players[player_index(player)]
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The player car shown as the loser; the last one recorded wins
    pub fn failed_car(&self) -> Option<&Car> {
        self.failed_players.last().map(|player| self.player(*player))
    }

    /// Apply a discrete input
    ///
    /// Returns false when the command does not apply in the current phase:
    /// lane changes only while running, restart only after a game over.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match (command, self.phase) {
            (Command::Move(player, direction), Phase::Running) => {
                let config = &self.config;
                let car = &mut self.players[player_index(player)];
                car.change_lane(direction, config);
                debug!("{} moved to lane {}", player.label(), car.lane.index());
                true
            }
            (Command::Restart, Phase::GameOver) => {
                self.restart();
                true
            }
            (command, phase) => {
                debug!("Ignoring {:?} while {:?}", command, phase);
                false
            }
        }
    }

    /// Start a new round, keeping the best score seen so far
    pub fn restart(&mut self) {
        self.high_score = self.high_score.max(self.score);
        self.score = 0;
        self.traffic.clear();
        self.occupancy.reset();
        self.spawn_countdown = 0;
        self.failed_players.clear();
        self.phase = Phase::Running;

        let one = self.next_car_id();
        let two = self.next_car_id();
        self.players = [
            Car::player(one, PlayerId::One, self.config.player_one_lane, &self.config),
            Car::player(two, PlayerId::Two, self.config.player_two_lane, &self.config),
        ];
        info!("Round restarted, high score {}", self.high_score);
    }

    /// Advance the simulation by one fixed step
    ///
    /// Inert after a game over. Traffic is processed newest first; once a car
    /// collides the rest of the pass is skipped, so no car behind it moves or
    /// scores in that tick.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if self.phase == Phase::GameOver {
            return report;
        }
        self.stats.ticks += 1;

        self.spawn_countdown += 1;
        if self.spawn_countdown >= self.config.spawn_interval_ticks {
            report.spawn = Some(self.attempt_spawn());
            self.spawn_countdown = 0;
        }

        self.occupancy.reset();

        for index in (0..self.traffic.len()).rev() {
            let car = &mut self.traffic[index];
            car.move_by(0, self.config.traffic_speed);

            if car.y > self.config.road_height {
                self.traffic.remove(index);
                self.score += 1;
                self.stats.cars_passed += 1;
                report.passed += 1;
                continue;
            }

            let car = &self.traffic[index];
            self.occupancy.mark(self.config.lane_at(car.x));

            let hit: Vec<PlayerId> = self
                .players
                .iter()
                .filter(|player| car.intersects(player))
                .filter_map(Car::player_id)
                .collect();

            if !hit.is_empty() {
                let traffic_id = car.id;
                self.end_round(traffic_id, &hit);
                report.collided = hit;
                break;
            }
        }

        report
    }

    fn attempt_spawn(&mut self) -> SpawnOutcome {
        let car_id = CarId(self.next_id);
        self.stats.spawn_attempts += 1;

        let outcome = match &mut self.rng {
            Some(rng) => spawn_traffic(
                car_id,
                &mut self.traffic,
                &mut self.occupancy,
                &self.config,
                rng,
            ),
            None => spawn_traffic(
                car_id,
                &mut self.traffic,
                &mut self.occupancy,
                &self.config,
                &mut rand::rng(),
            ),
        };

        if let SpawnOutcome::Spawned(_) = outcome {
            self.next_id += 1;
            self.stats.cars_spawned += 1;
        }
        outcome
    }

    fn end_round(&mut self, traffic_id: CarId, hit: &[PlayerId]) {
        self.phase = Phase::GameOver;
        self.failed_players.extend_from_slice(hit);
        self.stats.rounds_lost += 1;
        for player in hit {
            info!("{} hit traffic car {:?}", player.label(), traffic_id);
        }
        info!(
            "Game over: score {}, high score {}",
            self.score,
            self.high_score.max(self.score)
        );
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Score: {} | High Score: {} | Traffic: {} | Phase: {:?} | Ticks: {}",
            self.score,
            self.high_score,
            self.traffic.len(),
            self.phase,
            self.stats.ticks
        )
    }
}

fn player_index(player: PlayerId) -> usize {
    match player {
        PlayerId::One => 0,
        PlayerId::Two => 1,
    }
}
