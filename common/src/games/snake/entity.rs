use crate::games::RandomSource;
use super::board::Board;
use super::snake_body::Snake;
use super::spawner::Spawner;
use super::types::{ObjectKind, Point, SpawnError};

fn spawn_object<R: RandomSource + ?Sized>(
    kind: ObjectKind,
    board: &mut Board,
    snake: &Snake,
    spawner: &Spawner,
    rng: &mut R,
) -> Result<Point, SpawnError> {
    let position = spawner.find_free_position(board, snake, rng)?;
    board.place_object(position, kind);
    Ok(position)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fruit {
    position: Point,
}

impl Fruit {
    pub fn spawn<R: RandomSource + ?Sized>(
        board: &mut Board,
        snake: &Snake,
        spawner: &Spawner,
        rng: &mut R,
    ) -> Result<Self, SpawnError> {
        let position = spawn_object(ObjectKind::Fruit, board, snake, spawner, rng)?;
        Ok(Self { position })
    }

    /// Places the fruit without sampling. `None` if the cell is off the board.
    pub fn at(board: &mut Board, position: Point) -> Option<Self> {
        board
            .place_object(position, ObjectKind::Fruit)
            .then_some(Self { position })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the fruit to a fresh free cell. On failure nothing changes.
    pub fn respawn<R: RandomSource + ?Sized>(
        &mut self,
        board: &mut Board,
        snake: &Snake,
        spawner: &Spawner,
        rng: &mut R,
    ) -> Result<Point, SpawnError> {
        let next = spawner.find_free_position(board, snake, rng)?;
        board.remove_object(self.position);
        board.place_object(next, ObjectKind::Fruit);
        self.position = next;
        Ok(next)
    }

    pub fn remove(self, board: &mut Board) {
        board.remove_object(self.position);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bomb {
    position: Point,
}

impl Bomb {
    pub fn spawn<R: RandomSource + ?Sized>(
        board: &mut Board,
        snake: &Snake,
        spawner: &Spawner,
        rng: &mut R,
    ) -> Result<Self, SpawnError> {
        let position = spawn_object(ObjectKind::Bomb, board, snake, spawner, rng)?;
        Ok(Self { position })
    }

    pub fn at(board: &mut Board, position: Point) -> Option<Self> {
        board
            .place_object(position, ObjectKind::Bomb)
            .then_some(Self { position })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn remove(self, board: &mut Board) {
        board.remove_object(self.position);
    }
}
