use crate::games::snake::Point;

/// Side of one grid cell in pixels.
pub const GRID_SIZE: i32 = 20;

pub fn grid_to_pixel(pos: Point, cell_size: i32) -> (i32, i32) {
    (pos.x * cell_size, pos.y * cell_size)
}

pub fn pixel_to_grid(pixel: (i32, i32), cell_size: i32) -> Point {
    Point::new(pixel.0.div_euclid(cell_size), pixel.1.div_euclid(cell_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_to_pixel_scales_by_cell_size() {
        assert_eq!(grid_to_pixel(Point::new(3, 4), GRID_SIZE), (60, 80));
        assert_eq!(grid_to_pixel(Point::new(0, 0), GRID_SIZE), (0, 0));
    }

    #[test]
    fn test_pixel_to_grid_floors_inside_cell() {
        assert_eq!(pixel_to_grid((59, 80), GRID_SIZE), Point::new(2, 4));
        assert_eq!(pixel_to_grid((60, 99), GRID_SIZE), Point::new(3, 4));
        assert_eq!(pixel_to_grid((-1, 0), GRID_SIZE), Point::new(-1, 0));
    }
}
