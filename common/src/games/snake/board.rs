use super::types::{FieldSize, ObjectKind, Point};

/// Occupancy grid for fruit and bombs. Snake segments are not stored here,
/// see [`super::spawner::OccupancyQuery`] for the combined view.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    grid: Vec<Vec<Option<ObjectKind>>>,
}

impl Board {
    pub fn new(field_size: FieldSize) -> Self {
        Self {
            width: field_size.width,
            height: field_size.height,
            grid: vec![vec![None; field_size.width]; field_size.height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.width, self.height)
    }

    pub fn is_position_valid(&self, pos: Point) -> bool {
        pos.x >= 0 && (pos.x as usize) < self.width && pos.y >= 0 && (pos.y as usize) < self.height
    }

    pub fn is_position_empty(&self, pos: Point) -> bool {
        if !self.is_position_valid(pos) {
            return false;
        }
        self.grid[pos.y as usize][pos.x as usize].is_none()
    }

    pub fn place_object(&mut self, pos: Point, kind: ObjectKind) -> bool {
        if !self.is_position_valid(pos) {
            return false;
        }
        self.grid[pos.y as usize][pos.x as usize] = Some(kind);
        true
    }

    pub fn remove_object(&mut self, pos: Point) -> Option<ObjectKind> {
        if !self.is_position_valid(pos) {
            return None;
        }
        self.grid[pos.y as usize][pos.x as usize].take()
    }

    pub fn get_object_at(&self, pos: Point) -> Option<ObjectKind> {
        if !self.is_position_valid(pos) {
            return None;
        }
        self.grid[pos.y as usize][pos.x as usize]
    }

    pub fn is_collision_with_object(&self, pos: Point, kind: ObjectKind) -> bool {
        self.get_object_at(pos) == Some(kind)
    }

    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(None);
        }
    }

    pub fn objects(&self) -> impl Iterator<Item = (Point, ObjectKind)> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|kind| (Point::new(x as i32, y as i32), kind)))
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x as i32, y as i32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_board() -> Board {
        Board::new(FieldSize::new(30, 20))
    }

    #[test]
    fn test_position_validity_bounds() {
        let board = create_board();
        assert!(board.is_position_valid(Point::new(0, 0)));
        assert!(board.is_position_valid(Point::new(29, 19)));
        assert!(!board.is_position_valid(Point::new(30, 5)));
        assert!(!board.is_position_valid(Point::new(5, 20)));
        assert!(!board.is_position_valid(Point::new(-1, 0)));
        assert!(!board.is_position_valid(Point::new(0, -1)));
    }

    #[test]
    fn test_invalid_position_is_never_empty() {
        let board = create_board();
        assert!(!board.is_position_empty(Point::new(-1, 3)));
        assert!(board.is_position_empty(Point::new(3, 3)));
    }

    #[test]
    fn test_place_and_remove_object() {
        let mut board = create_board();
        let pos = Point::new(4, 7);

        assert!(board.place_object(pos, ObjectKind::Fruit));
        assert!(!board.is_position_empty(pos));
        assert_eq!(board.get_object_at(pos), Some(ObjectKind::Fruit));
        assert!(board.is_collision_with_object(pos, ObjectKind::Fruit));
        assert!(!board.is_collision_with_object(pos, ObjectKind::Bomb));

        assert_eq!(board.remove_object(pos), Some(ObjectKind::Fruit));
        assert_eq!(board.remove_object(pos), None);
        assert!(board.is_position_empty(pos));
    }

    #[test]
    fn test_place_on_invalid_position_does_not_mutate() {
        let mut board = create_board();
        assert!(!board.place_object(Point::new(30, 0), ObjectKind::Bomb));
        assert_eq!(board.objects().count(), 0);
        assert_eq!(board.remove_object(Point::new(30, 0)), None);
        assert_eq!(board.get_object_at(Point::new(30, 0)), None);
    }

    #[test]
    fn test_clear_resets_every_cell() {
        let mut board = create_board();
        board.place_object(Point::new(1, 1), ObjectKind::Fruit);
        board.place_object(Point::new(2, 2), ObjectKind::Bomb);
        assert_eq!(board.objects().count(), 2);

        board.clear();
        assert_eq!(board.objects().count(), 0);
        assert!(board.cells().all(|pos| board.is_position_empty(pos)));
    }

    #[test]
    fn test_cells_covers_whole_grid() {
        let board = Board::new(FieldSize::new(3, 2));
        let cells: Vec<Point> = board.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Point::new(0, 0));
        assert_eq!(cells[5], Point::new(2, 1));
    }
}
