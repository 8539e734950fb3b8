use crate::games::RandomSource;
use crate::log;
use super::board::Board;
use super::entity::{Bomb, Fruit};
use super::settings::SnakeSettings;
use super::snake_body::Snake;
use super::spawner::{OccupancyQuery, Spawner};
use super::types::{Direction, FieldSize, GameEndReason, GamePhase, Point, TickOutcome};

pub const ANIMATION_FRAMES: u32 = 5;
pub const FLASH_FRAMES: u32 = 10;

/// Cosmetic frame counter for the renderer; never affects the simulation.
#[derive(Clone, Copy, Debug)]
pub struct FlashCounter {
    active: bool,
    frame: u32,
    frames: u32,
}

impl FlashCounter {
    fn new(frames: u32) -> Self {
        Self {
            active: false,
            frame: 0,
            frames,
        }
    }

    fn trigger(&mut self) {
        self.active = true;
        self.frame = 0;
    }

    fn advance(&mut self) {
        if !self.active {
            return;
        }
        self.frame += 1;
        if self.frame >= self.frames {
            self.frame = 0;
            self.active = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameStats {
    pub score: u32,
    pub high_score: u32,
    pub fruits_eaten: u32,
    pub bombs_hit: u32,
    pub max_length: usize,
}

/// What happened during the most recent tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub fruit_eaten: bool,
    pub bombs_hit: u32,
    pub game_over: bool,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    settings: SnakeSettings,
    board: Board,
    snake: Snake,
    fruit: Option<Fruit>,
    bombs: Vec<Bomb>,
    spawner: Spawner,
    running: bool,
    game_over: bool,
    end_reason: Option<GameEndReason>,
    stats: GameStats,
    fruit_flash: FlashCounter,
    bomb_flash: FlashCounter,
    last_events: TickEvents,
}

impl SnakeGameState {
    /// Settings are taken as given. A field with no cells never ticks.
    pub fn new(settings: SnakeSettings) -> Self {
        let snake = Self::initial_snake(&settings);
        Self {
            board: Board::new(settings.field_size()),
            spawner: Spawner::new(settings.max_spawn_attempts),
            stats: GameStats {
                max_length: snake.length(),
                ..GameStats::default()
            },
            snake,
            fruit: None,
            bombs: Vec::new(),
            running: false,
            game_over: false,
            end_reason: None,
            fruit_flash: FlashCounter::new(ANIMATION_FRAMES),
            bomb_flash: FlashCounter::new(FLASH_FRAMES),
            last_events: TickEvents::default(),
            settings,
        }
    }

    fn initial_snake(settings: &SnakeSettings) -> Snake {
        Snake::new(
            settings.start_position,
            settings.start_direction,
            settings.start_length,
        )
    }

    /// Resets board, snake, entities and per-game counters. The high score
    /// survives.
    pub fn start<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.board.clear();
        self.snake = Self::initial_snake(&self.settings);
        self.bombs.clear();
        self.fruit = match Fruit::spawn(&mut self.board, &self.snake, &self.spawner, rng) {
            Ok(fruit) => Some(fruit),
            Err(e) => {
                log!("Could not place the first fruit: {}", e);
                None
            }
        };

        self.stats = GameStats {
            high_score: self.stats.high_score,
            max_length: self.snake.length(),
            ..GameStats::default()
        };
        self.fruit_flash = FlashCounter::new(ANIMATION_FRAMES);
        self.bomb_flash = FlashCounter::new(FLASH_FRAMES);
        self.last_events = TickEvents::default();
        self.end_reason = None;
        self.game_over = false;
        self.running = true;

        log!(
            "Game started: {}x{} field, {:?} walls",
            self.board.width(),
            self.board.height(),
            self.settings.wall_collision_mode
        );
    }

    pub fn restart<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        log!("Restarting after score {}", self.stats.score);
        self.start(rng);
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn change_direction(&mut self, direction: Direction) -> bool {
        self.snake.change_direction(direction)
    }

    pub fn tick<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        self.last_events = TickEvents::default();
        if !self.running || self.game_over || self.board.field_size().cell_count() == 0 {
            return TickOutcome::Continue;
        }

        self.fruit_flash.advance();
        self.bomb_flash.advance();

        let new_head = self
            .snake
            .move_forward(self.settings.wall_collision_mode, self.board.field_size());

        if !self.board.is_position_valid(new_head) {
            return self.end_game(GameEndReason::WallCollision);
        }

        if self.snake.is_collision_with_self() {
            return self.end_game(GameEndReason::SelfCollision);
        }

        if self.fruit.as_ref().is_some_and(|fruit| fruit.position() == new_head) {
            self.eat_fruit(rng);
        }

        let (hit, remaining): (Vec<Bomb>, Vec<Bomb>) = std::mem::take(&mut self.bombs)
            .into_iter()
            .partition(|bomb| bomb.position() == new_head);
        self.bombs = remaining;

        for bomb in hit {
            self.bomb_flash.trigger();
            self.stats.bombs_hit += 1;
            self.last_events.bombs_hit += 1;
            self.snake.shrink(1);
            bomb.remove(&mut self.board);
            log!("Bomb hit at {}. Length: {}", new_head, self.snake.length());

            if self.snake.length() == 0 {
                return self.end_game(GameEndReason::SnakeConsumed);
            }
        }

        TickOutcome::Continue
    }

    fn eat_fruit<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.stats.score += self.settings.fruit_score;
        self.stats.high_score = self.stats.high_score.max(self.stats.score);
        self.stats.fruits_eaten += 1;
        self.last_events.fruit_eaten = true;
        self.fruit_flash.trigger();

        self.snake.grow(1);
        self.stats.max_length = self.stats.max_length.max(self.snake.length());

        if let Some(fruit) = self.fruit.as_mut()
            && let Err(e) = fruit.respawn(&mut self.board, &self.snake, &self.spawner, rng)
        {
            log!("Fruit could not respawn: {}", e);
            if let Some(fruit) = self.fruit.take() {
                fruit.remove(&mut self.board);
            }
        }

        match Bomb::spawn(&mut self.board, &self.snake, &self.spawner, rng) {
            Ok(bomb) => self.bombs.push(bomb),
            Err(e) => log!("Bomb skipped: {}", e),
        }

        log!(
            "Ate fruit. Score: {}, length: {}, bombs: {}",
            self.stats.score,
            self.snake.length(),
            self.bombs.len()
        );
    }

    fn end_game(&mut self, reason: GameEndReason) -> TickOutcome {
        self.game_over = true;
        self.end_reason = Some(reason);
        self.last_events.game_over = true;
        log!(
            "Game over: snake {}. Score: {}, high score: {}",
            reason,
            self.stats.score,
            self.stats.high_score
        );
        TickOutcome::GameOver(reason)
    }

    /// Swaps in a hand-built snake, for scripted scenarios.
    pub fn replace_snake(&mut self, snake: Snake) {
        self.stats.max_length = self.stats.max_length.max(snake.length());
        self.snake = snake;
    }

    /// Moves the fruit to `position`, bypassing random placement. Refused
    /// when the cell holds the snake or another entity.
    pub fn place_fruit_at(&mut self, position: Point) -> bool {
        let own_cell = self
            .fruit
            .as_ref()
            .is_some_and(|fruit| fruit.position() == position);
        if !own_cell && !OccupancyQuery::new(&self.board, &self.snake).is_free(position) {
            return false;
        }
        if let Some(fruit) = self.fruit.take() {
            fruit.remove(&mut self.board);
        }
        self.fruit = Fruit::at(&mut self.board, position);
        self.fruit.is_some()
    }

    /// Adds a bomb at `position`, bypassing random placement. Refused when
    /// the cell is not free.
    pub fn place_bomb_at(&mut self, position: Point) -> bool {
        if !OccupancyQuery::new(&self.board, &self.snake).is_free(position) {
            return false;
        }
        match Bomb::at(&mut self.board, position) {
            Some(bomb) => {
                self.bombs.push(bomb);
                true
            }
            None => false,
        }
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn field_size(&self) -> FieldSize {
        self.board.field_size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Option<&Fruit> {
        self.fruit.as_ref()
    }

    pub fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn last_events(&self) -> TickEvents {
        self.last_events
    }

    pub fn fruit_flash(&self) -> FlashCounter {
        self.fruit_flash
    }

    pub fn bomb_flash(&self) -> FlashCounter {
        self.bomb_flash
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.running {
            GamePhase::Running
        } else {
            GamePhase::Idle
        }
    }
}
