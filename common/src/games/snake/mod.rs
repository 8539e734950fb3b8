mod board;
mod entity;
mod game_state;
mod settings;
mod snake_body;
mod spawner;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use board::Board;
pub use entity::{Bomb, Fruit};
pub use game_state::{ANIMATION_FRAMES, FLASH_FRAMES, FlashCounter, GameStats, SnakeGameState, TickEvents};
pub use settings::SnakeSettings;
pub use snake_body::Snake;
pub use spawner::{DEFAULT_MAX_SPAWN_ATTEMPTS, OccupancyQuery, Spawner};
pub use types::{
    Direction, FieldSize, GameEndReason, GamePhase, ObjectKind, Point, SpawnError, TickOutcome,
    WallCollisionMode,
};
