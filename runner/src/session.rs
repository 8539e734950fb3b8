use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

use snake_common::games::SessionRng;
use snake_common::games::snake::{GameStats, SnakeGameState, TickOutcome};
use snake_common::log;
use crate::autopilot::Autopilot;

pub struct SessionOptions {
    pub max_ticks: u64,
    pub max_games: u32,
    /// `None` runs ticks back to back.
    pub tick_interval: Option<Duration>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub games_played: u32,
    pub fruits_eaten: u32,
    pub bombs_hit: u32,
    pub high_score: u32,
}

impl SessionSummary {
    fn record_game(&mut self, stats: GameStats) {
        self.games_played += 1;
        self.fruits_eaten += stats.fruits_eaten;
        self.bombs_hit += stats.bombs_hit;
        self.high_score = self.high_score.max(stats.high_score);
    }
}

pub struct SnakeSession;

impl SnakeSession {
    pub async fn run(
        state: &mut SnakeGameState,
        rng: &mut SessionRng,
        options: SessionOptions,
    ) -> SessionSummary {
        let mut summary = SessionSummary::default();
        let mut timer = options.tick_interval.map(|period| {
            let mut timer = interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            timer
        });

        state.start(rng);
        log!("Session started with seed {}", rng.seed());

        while summary.ticks < options.max_ticks {
            if let Some(timer) = timer.as_mut() {
                timer.tick().await;
            }

            if let Some(direction) = Autopilot::calculate_move(state) {
                state.change_direction(direction);
            }

            let outcome = state.tick(rng);
            summary.ticks += 1;

            if let TickOutcome::GameOver(reason) = outcome {
                let stats = state.stats();
                summary.record_game(stats);
                log!(
                    "Game {} ended after tick {}: snake {}. Score {}, fruits {}, bombs {}, max length {}",
                    summary.games_played,
                    summary.ticks,
                    reason,
                    stats.score,
                    stats.fruits_eaten,
                    stats.bombs_hit,
                    stats.max_length
                );

                if summary.games_played >= options.max_games {
                    break;
                }
                state.restart(rng);
            }
        }

        if !state.is_game_over() {
            summary.record_game(state.stats());
        }
        state.stop();

        log!(
            "Session finished: {} ticks, {} games, high score {}",
            summary.ticks,
            summary.games_played,
            summary.high_score
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::games::snake::{SnakeSettings, WallCollisionMode};

    fn create_state(wall_collision_mode: WallCollisionMode) -> SnakeGameState {
        SnakeGameState::new(SnakeSettings {
            wall_collision_mode,
            ..SnakeSettings::default()
        })
    }

    #[tokio::test]
    async fn test_run_stops_at_tick_limit() {
        let mut state = create_state(WallCollisionMode::WrapAround);
        let mut rng = SessionRng::new(42);
        let options = SessionOptions {
            max_ticks: 50,
            max_games: 1,
            tick_interval: None,
        };

        let summary = SnakeSession::run(&mut state, &mut rng, options).await;

        assert!(summary.ticks <= 50);
        assert_eq!(summary.games_played, 1);
        assert!(!state.is_running());
    }

    #[tokio::test]
    async fn test_same_seed_gives_same_summary() {
        let run = || async {
            let mut state = create_state(WallCollisionMode::Death);
            let mut rng = SessionRng::new(7);
            let options = SessionOptions {
                max_ticks: 300,
                max_games: 3,
                tick_interval: None,
            };
            SnakeSession::run(&mut state, &mut rng, options).await
        };

        assert_eq!(run().await, run().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_paces_ticks() {
        let mut state = create_state(WallCollisionMode::WrapAround);
        let mut rng = SessionRng::new(3);
        let options = SessionOptions {
            max_ticks: 5,
            max_games: 1,
            tick_interval: Some(Duration::from_millis(100)),
        };

        let started = tokio::time::Instant::now();
        let summary = SnakeSession::run(&mut state, &mut rng, options).await;

        assert_eq!(summary.ticks, 5);
        assert!(started.elapsed() >= Duration::from_millis(400));
    }
}
