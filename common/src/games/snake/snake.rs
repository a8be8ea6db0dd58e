use super::types::{Direction, Point};

pub const INITIAL_LENGTH: usize = 3;
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Head cell of a fresh snake: (8, 12) on the standard 24-cell grid.
pub fn start_head(grid_size: i32) -> Point {
    Point::new(grid_size / 3, grid_size / 2)
}

/// First food of a session, on the snake's row ahead of it: (16, 12) on a
/// 24-cell grid.
pub fn initial_food(grid_size: i32) -> Point {
    Point::new(grid_size * 2 / 3, grid_size / 2)
}

/// Head-first body of a fresh snake, trailing away from its heading.
pub fn initial_body(grid_size: i32) -> Vec<Point> {
    let behind = INITIAL_DIRECTION.opposite();
    let mut body = Vec::with_capacity(INITIAL_LENGTH);
    let mut segment = start_head(grid_size);
    for _ in 0..INITIAL_LENGTH {
        body.push(segment);
        segment = segment.step(behind);
    }
    body
}

pub fn head(body: &[Point]) -> Point {
    *body.first().expect("Snake body should never be empty")
}
