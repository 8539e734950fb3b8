use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::spawner::DEFAULT_MAX_SPAWN_ATTEMPTS;
use super::types::{Direction, FieldSize, Point, WallCollisionMode};

pub const DEFAULT_FIELD_WIDTH: usize = 30;
pub const DEFAULT_FIELD_HEIGHT: usize = 20;
pub const DEFAULT_FRUIT_SCORE: u32 = 10;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 100;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub wall_collision_mode: WallCollisionMode,
    pub start_position: Point,
    pub start_direction: Direction,
    pub start_length: usize,
    pub fruit_score: u32,
    pub max_spawn_attempts: usize,
    pub tick_interval_ms: u32,
}

impl SnakeSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }

    fn fits_on_field(&self, pos: Point) -> bool {
        pos.x >= 0
            && (pos.x as usize) < self.field_width
            && pos.y >= 0
            && (pos.y as usize) < self.field_height
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            wall_collision_mode: WallCollisionMode::WrapAround,
            start_position: Point::new(5, 5),
            start_direction: Direction::Right,
            start_length: 3,
            fruit_score: DEFAULT_FRUIT_SCORE,
            max_spawn_attempts: DEFAULT_MAX_SPAWN_ATTEMPTS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 5 || self.field_width > 200 {
            return Err("Field width must be between 5 and 200".to_string());
        }
        if self.field_height < 5 || self.field_height > 200 {
            return Err("Field height must be between 5 and 200".to_string());
        }
        if self.start_length < 1 {
            return Err("Start length must be at least 1".to_string());
        }
        if self.start_length >= self.field_size().cell_count() {
            return Err("Start length must leave room for a fruit".to_string());
        }
        let tail = self
            .start_position
            .offset(self.start_direction, -(self.start_length as i32 - 1));
        if !self.fits_on_field(self.start_position) || !self.fits_on_field(tail) {
            return Err("Starting snake must lie entirely on the field".to_string());
        }
        if self.fruit_score == 0 {
            return Err("Fruit score must be greater than 0".to_string());
        }
        if self.max_spawn_attempts == 0 {
            return Err("Max spawn attempts must be at least 1".to_string());
        }
        if self.tick_interval_ms < 10 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 10ms and 5000ms".to_string());
        }
        Ok(())
    }
}
