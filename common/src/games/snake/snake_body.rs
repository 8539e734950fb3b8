use std::collections::VecDeque;

use super::types::{Direction, FieldSize, Point, WallCollisionMode};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    pending_growth: usize,
}

impl Snake {
    /// Builds `length` segments trailing behind `head`, opposite to `direction`.
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let body = (0..length.max(1))
            .map(|i| head.offset(direction, -(i as i32)))
            .collect();

        Self {
            body,
            direction,
            pending_growth: 0,
        }
    }

    /// Head first. Returns `None` for an empty segment list.
    pub fn from_segments(segments: impl IntoIterator<Item = Point>, direction: Direction) -> Option<Self> {
        let body: VecDeque<Point> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }

        Some(Self {
            body,
            direction,
            pending_growth: 0,
        })
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> usize {
        self.pending_growth
    }

    /// Body cells plus growth that the next moves will materialize.
    pub fn length(&self) -> usize {
        self.body.len() + self.pending_growth
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn move_forward(&mut self, wall_collision_mode: WallCollisionMode, field_size: FieldSize) -> Point {
        let mut next_head = self.head().offset(self.direction, 1);

        if wall_collision_mode == WallCollisionMode::WrapAround {
            next_head = Point::new(
                next_head.x.rem_euclid(field_size.width as i32),
                next_head.y.rem_euclid(field_size.height as i32),
            );
        }

        self.body.push_front(next_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_back();
        }

        next_head
    }

    pub fn change_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction.is_opposite(&self.direction) {
            return false;
        }
        self.direction = new_direction;
        true
    }

    pub fn grow(&mut self, amount: usize) {
        self.pending_growth += amount;
    }

    /// Never takes the snake below one segment. Returns how much was removed.
    pub fn shrink(&mut self, amount: usize) -> usize {
        let removed = amount.min(self.length() - 1);

        let from_pending = removed.min(self.pending_growth);
        self.pending_growth -= from_pending;
        for _ in from_pending..removed {
            self.body.pop_back();
        }

        removed
    }

    pub fn is_collision_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn is_position_occupied(&self, pos: Point) -> bool {
        self.body.contains(&pos)
    }
}
