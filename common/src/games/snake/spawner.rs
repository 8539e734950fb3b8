use crate::games::RandomSource;
use super::board::Board;
use super::snake_body::Snake;
use super::types::{Point, SpawnError};

pub const DEFAULT_MAX_SPAWN_ATTEMPTS: usize = 100;

/// Combined view of the entity grid and the snake body.
#[derive(Clone, Copy)]
pub struct OccupancyQuery<'a> {
    board: &'a Board,
    snake: &'a Snake,
}

impl<'a> OccupancyQuery<'a> {
    pub fn new(board: &'a Board, snake: &'a Snake) -> Self {
        Self { board, snake }
    }

    pub fn is_free(&self, pos: Point) -> bool {
        self.board.is_position_empty(pos) && !self.snake.is_position_occupied(pos)
    }

    pub fn free_cells(&self) -> Vec<Point> {
        self.board.cells().filter(|pos| self.is_free(*pos)).collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Spawner {
    max_attempts: usize,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SPAWN_ATTEMPTS)
    }
}

impl Spawner {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Rejection sampling first; once the attempts run out the remaining free
    /// cells are enumerated and one is drawn uniformly.
    pub fn find_free_position<R: RandomSource + ?Sized>(
        &self,
        board: &Board,
        snake: &Snake,
        rng: &mut R,
    ) -> Result<Point, SpawnError> {
        let occupancy = OccupancyQuery::new(board, snake);
        if board.width() == 0 || board.height() == 0 {
            return Err(SpawnError::NoSpaceAvailable);
        }

        for _ in 0..self.max_attempts {
            let x = rng.next_index(board.width());
            let y = rng.next_index(board.height());
            let pos = Point::new(x as i32, y as i32);

            if occupancy.is_free(pos) {
                return Ok(pos);
            }
        }

        let free_cells = occupancy.free_cells();
        if free_cells.is_empty() {
            return Err(SpawnError::NoSpaceAvailable);
        }
        Ok(free_cells[rng.next_index(free_cells.len())])
    }
}
