use snake_common::games::snake::{Direction, ObjectKind, Point, SnakeGameState, WallCollisionMode};

/// Greedy driver standing in for a human player: heads for the fruit and
/// avoids cells that would end the game or cost a segment on the next tick.
pub struct Autopilot;

impl Autopilot {
    pub fn calculate_move(state: &SnakeGameState) -> Option<Direction> {
        if !state.is_running() || state.is_game_over() {
            return None;
        }

        let snake = state.snake();
        let head = snake.head();
        let current_direction = snake.direction();
        let target = state.fruit().map(|fruit| fruit.position());

        let mut best_dir = None;
        let mut best_distance = i32::MAX;

        for dir in Self::get_valid_directions(current_direction) {
            let Some(next_pos) = Self::calculate_next_position(head, dir, state) else {
                continue;
            };
            if !Self::is_safe_position(next_pos, state) {
                continue;
            }

            let distance = match target {
                Some(fruit) => Self::manhattan_distance(next_pos, fruit, state),
                None => 0,
            };
            if distance < best_distance {
                best_distance = distance;
                best_dir = Some(dir);
            }
        }

        best_dir.or(Some(current_direction))
    }

    fn get_valid_directions(current: Direction) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .collect()
    }

    fn calculate_next_position(from: Point, direction: Direction, state: &SnakeGameState) -> Option<Point> {
        let next = from.offset(direction, 1);
        let field_size = state.field_size();

        match state.settings().wall_collision_mode {
            WallCollisionMode::Death => state.board().is_position_valid(next).then_some(next),
            WallCollisionMode::WrapAround => Some(Point::new(
                next.x.rem_euclid(field_size.width as i32),
                next.y.rem_euclid(field_size.height as i32),
            )),
        }
    }

    fn manhattan_distance(a: Point, b: Point, state: &SnakeGameState) -> i32 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();

        match state.settings().wall_collision_mode {
            WallCollisionMode::Death => dx + dy,
            WallCollisionMode::WrapAround => {
                let field_size = state.field_size();
                let min_dx = dx.min(field_size.width as i32 - dx);
                let min_dy = dy.min(field_size.height as i32 - dy);
                min_dx + min_dy
            }
        }
    }

    fn is_safe_position(pos: Point, state: &SnakeGameState) -> bool {
        let snake = state.snake();
        let tail_moves_away = snake.pending_growth() == 0 && pos == snake.tail();
        if snake.is_position_occupied(pos) && !tail_moves_away {
            return false;
        }
        !state.board().is_collision_with_object(pos, ObjectKind::Bomb)
    }
}
