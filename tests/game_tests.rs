//! Game mechanics validation test
//!
//! This test validates the tick, scoring, collision and restart rules of a
//! session, and the game loop that drives it.

use lane_rush::simulation::{
    ascii_map, Car, CarId, Command, GameConfig, GameLoop, Lane, Phase, PlayerId, RenderSink,
    RenderView, Session, SpawnOutcome, ROAD_HEIGHT, SPAWN_INTERVAL_TICKS, TRAFFIC_SPEED,
};

/// Renderer that keeps every frame it is shown
#[derive(Default)]
struct RecordingSink {
    frames: Vec<RenderView>,
}

impl RenderSink for RecordingSink {
    fn present(&mut self, view: &RenderView) {
        self.frames.push(view.clone());
    }
}

fn add_traffic(session: &mut Session, id: usize, lane: usize, y: i32) {
    let mut car = Car::traffic(CarId(1000 + id), Lane::clamped(lane as i64), &session.config);
    car.y = y;
    session.traffic.push(car);
}

/// Top edge at which a lane-0 car hits player one after one tick
fn one_tick_from_player(session: &Session) -> i32 {
    let player = session.player(PlayerId::One);
    player.y - player.height - TRAFFIC_SPEED + 1
}

#[test]
fn test_session_initialization() {
    let session = Session::default();
    assert_eq!(session.phase, Phase::Running);
    assert_eq!(session.score, 0);
    assert_eq!(session.high_score, 0);
    assert!(session.traffic.is_empty());
    assert!(session.failed_players.is_empty());
    assert!(session.failed_car().is_none());
}

#[test]
fn test_sixty_ticks_make_exactly_one_spawn_attempt() {
    let mut session = Session::new_with_seed(GameConfig::default(), 1);

    for _ in 0..SPAWN_INTERVAL_TICKS - 1 {
        let report = session.tick();
        assert!(report.spawn.is_none());
    }
    assert_eq!(session.stats.spawn_attempts, 0);

    let report = session.tick();
    assert!(matches!(report.spawn, Some(SpawnOutcome::Spawned(_))));
    assert_eq!(session.stats.spawn_attempts, 1);
    assert_eq!(session.stats.cars_spawned, 1);
    assert_eq!(session.spawn_countdown, 0);

    // The new car already moved within the tick that spawned it
    assert_eq!(session.traffic.len(), 1);
    assert_eq!(session.traffic[0].y, -session.config.car_height + TRAFFIC_SPEED);
}

#[test]
fn test_traffic_moves_and_marks_its_lane() {
    let mut session = Session::default();
    add_traffic(&mut session, 0, 3, 100);

    session.tick();

    assert_eq!(session.traffic[0].y, 100 + TRAFFIC_SPEED);
    assert!(session.occupancy.is_occupied(Lane::clamped(3)));
    assert_eq!(session.occupancy.occupied_count(), 1);
}

#[test]
fn test_occupancy_is_rebuilt_every_tick() {
    let mut session = Session::default();
    session.occupancy.mark(Lane::clamped(1));

    session.tick();

    assert_eq!(session.occupancy.occupied_count(), 0);
}

#[test]
fn test_car_leaving_the_road_scores_exactly_once() {
    let mut session = Session::default();
    add_traffic(&mut session, 0, 3, ROAD_HEIGHT - TRAFFIC_SPEED);

    // Lands exactly on the boundary: still on the road
    let report = session.tick();
    assert_eq!(report.passed, 0);
    assert_eq!(session.traffic.len(), 1);
    assert!(session.occupancy.is_occupied(Lane::clamped(3)));

    let report = session.tick();
    assert_eq!(report.passed, 1);
    assert_eq!(session.score, 1);
    assert!(session.traffic.is_empty());
    assert_eq!(session.occupancy.occupied_count(), 0);

    session.tick();
    assert_eq!(session.score, 1);
    assert_eq!(session.stats.cars_passed, 1);
}

#[test]
fn test_collision_ends_the_round() {
    let mut session = Session::default();
    let y = one_tick_from_player(&session);
    add_traffic(&mut session, 0, 0, y);

    let report = session.tick();

    assert_eq!(report.collided, vec![PlayerId::One]);
    assert_eq!(session.phase, Phase::GameOver);
    assert_eq!(session.failed_players, vec![PlayerId::One]);
    assert_eq!(session.failed_car().map(|car| car.id), Some(session.player(PlayerId::One).id));
    assert_eq!(session.stats.rounds_lost, 1);
}

#[test]
fn test_near_miss_does_not_collide() {
    let mut session = Session::default();
    let y = one_tick_from_player(&session) - 1;
    add_traffic(&mut session, 0, 0, y);

    let report = session.tick();

    assert!(report.collided.is_empty());
    assert_eq!(session.phase, Phase::Running);
}

#[test]
fn test_collision_stops_the_rest_of_the_pass() {
    let mut session = Session::default();
    // Older car about to leave the road, newer car about to hit player one
    add_traffic(&mut session, 0, 3, ROAD_HEIGHT);
    let y = one_tick_from_player(&session);
    add_traffic(&mut session, 1, 0, y);

    let report = session.tick();

    assert_eq!(report.collided, vec![PlayerId::One]);
    assert_eq!(report.passed, 0);
    assert_eq!(session.score, 0);
    assert_eq!(session.traffic.len(), 2);
    assert_eq!(session.traffic[0].y, ROAD_HEIGHT);
}

#[test]
fn test_one_car_hitting_both_players_records_both() {
    let config = GameConfig {
        player_one_lane: Lane::clamped(1),
        player_two_lane: Lane::clamped(1),
        ..GameConfig::default()
    };
    let mut session = Session::new(config);
    let y = one_tick_from_player(&session);
    add_traffic(&mut session, 0, 1, y);

    let report = session.tick();

    assert_eq!(report.collided, vec![PlayerId::One, PlayerId::Two]);
    assert_eq!(session.failed_players, vec![PlayerId::One, PlayerId::Two]);
    // The last recorded player is the one displayed
    assert_eq!(session.failed_car().map(|car| car.id), Some(session.player(PlayerId::Two).id));
}

#[test]
fn test_game_over_ticks_are_inert() {
    let mut session = Session::default();
    let y = one_tick_from_player(&session);
    add_traffic(&mut session, 0, 0, y);
    session.tick();
    assert!(session.is_game_over());

    let positions: Vec<i32> = session.traffic.iter().map(|car| car.y).collect();
    let ticks = session.stats.ticks;
    let countdown = session.spawn_countdown;

    for _ in 0..(2 * SPAWN_INTERVAL_TICKS) {
        let report = session.tick();
        assert!(report.spawn.is_none());
        assert_eq!(report.passed, 0);
    }

    let after: Vec<i32> = session.traffic.iter().map(|car| car.y).collect();
    assert_eq!(positions, after);
    assert_eq!(session.stats.ticks, ticks);
    assert_eq!(session.spawn_countdown, countdown);
    assert_eq!(session.stats.spawn_attempts, 0);
}

#[test]
fn test_commands_only_apply_in_their_phase() {
    let mut session = Session::default();

    assert!(!session.apply_command(Command::Restart));
    assert!(session.apply_command(Command::move_right(PlayerId::Two)));
    assert_eq!(session.player(PlayerId::Two).lane, Lane::clamped(3));

    session.apply_command(Command::move_left(PlayerId::Two));
    let y = one_tick_from_player(&session);
    add_traffic(&mut session, 0, 0, y);
    session.tick();
    assert!(session.is_game_over());

    assert!(!session.apply_command(Command::move_right(PlayerId::One)));
    assert_eq!(session.player(PlayerId::One).lane, Lane::clamped(0));
    assert!(session.apply_command(Command::Restart));
    assert_eq!(session.phase, Phase::Running);
}

#[test]
fn test_restart_resets_round_and_keeps_best_score() {
    let mut session = Session::default();
    session.apply_command(Command::move_right(PlayerId::One));
    session.apply_command(Command::move_right(PlayerId::One));
    session.score = 7;
    session.spawn_countdown = 12;

    let y = one_tick_from_player(&session);
    add_traffic(&mut session, 0, 2, y);
    add_traffic(&mut session, 1, 3, 50);
    session.tick();
    assert!(session.is_game_over());

    assert!(session.apply_command(Command::Restart));

    assert_eq!(session.phase, Phase::Running);
    assert_eq!(session.score, 0);
    assert_eq!(session.high_score, 7);
    assert!(session.traffic.is_empty());
    assert!(session.failed_players.is_empty());
    assert_eq!(session.spawn_countdown, 0);
    assert_eq!(session.occupancy.occupied_count(), 0);
    assert_eq!(session.player(PlayerId::One).lane, Lane::clamped(0));
    assert_eq!(session.player(PlayerId::One).x, 75);
    assert_eq!(session.player(PlayerId::Two).lane, Lane::clamped(2));
    assert_eq!(session.player(PlayerId::Two).x, 475);

    // A lower score never lowers the high score
    session.score = 3;
    let y = one_tick_from_player(&session);
    add_traffic(&mut session, 2, 0, y);
    session.tick();
    session.apply_command(Command::Restart);
    assert_eq!(session.high_score, 7);
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let mut first = Session::new_with_seed(GameConfig::default(), 42);
    let mut second = Session::new_with_seed(GameConfig::default(), 42);

    for _ in 0..3000 {
        assert_eq!(first.tick(), second.tick());
    }

    assert_eq!(first.traffic, second.traffic);
    assert_eq!(first.score, second.score);
    assert_eq!(first.phase, second.phase);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_spawned_traffic_keeps_the_minimum_gap() {
    let mut session = Session::new_with_seed(GameConfig::default(), 7);
    // Keep both players out of the way by parking them in the same lane
    session.players[0].x = -500;
    session.players[1].x = -500;

    for _ in 0..5000 {
        let before: Vec<CarId> = session.traffic.iter().map(|car| car.id).collect();
        let report = session.tick();
        if let Some(SpawnOutcome::Spawned(_)) = report.spawn {
            let newest = session.traffic.last().expect("spawned car");
            for car in session.traffic.iter().filter(|car| before.contains(&car.id)) {
                assert!(car.y - newest.y >= session.config.min_gap);
            }
        }
    }

    assert!(session.stats.cars_spawned > 0);
    assert!(session.score > 0);
}

#[test]
fn test_game_loop_applies_commands_before_the_tick() {
    let mut game = GameLoop::new(Session::default());
    let mut sink = RecordingSink::default();

    game.push(Command::move_right(PlayerId::One));
    game.push(Command::move_right(PlayerId::One));
    game.push(Command::Restart);
    assert_eq!(game.pending(), 3);

    game.step(&mut sink);

    assert_eq!(game.pending(), 0);
    assert_eq!(game.session.player(PlayerId::One).lane, Lane::clamped(2));
    assert_eq!(sink.frames.len(), 1);
    assert_eq!(game.session.stats.ticks, 1);
}

#[test]
fn test_game_loop_presents_once_per_step() {
    let mut game = GameLoop::new(Session::new_with_seed(GameConfig::default(), 3));
    let mut sink = RecordingSink::default();

    game.run(120, &mut sink);

    assert_eq!(sink.frames.len(), 120);
    let last = sink.frames.last().expect("frame");
    assert_eq!(last.cars.len(), 2 + game.session.traffic.len());
    assert_eq!(last.cars[0].label, Some("Player 1"));
    assert_eq!(last.cars[1].label, Some("Player 2"));
    assert_eq!(last.score, game.session.score);
}

#[test]
fn test_render_view_marks_failed_car() {
    let mut session = Session::default();
    let y = one_tick_from_player(&session);
    add_traffic(&mut session, 0, 0, y);
    session.tick();

    let view = RenderView::capture(&session);
    assert!(view.is_game_over());
    assert_eq!(view.failed_players, vec![PlayerId::One]);
    assert_eq!(view.failed_car, Some(session.player(PlayerId::One).id));

    let map = ascii_map(&view, &session.config);
    assert!(map.contains('X'));
    assert!(map.contains('2'));
    assert!(map.contains('#'));
    assert_eq!(map.lines().count(), 22);
}

#[test]
fn test_summary_mentions_scores() {
    let mut session = Session::default();
    session.score = 4;
    session.high_score = 9;

    let summary = session.summary();
    assert!(summary.contains("Score: 4"));
    assert!(summary.contains("High Score: 9"));
}
