use std::collections::HashSet;

use crate::games::SessionRng;
use super::types::Point;

const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Picks a free cell for food, uniformly while random draws keep landing on
/// free cells, then by row-major scan. `None` only when the snake covers the
/// whole grid.
pub fn place_food(snake: &[Point], grid_size: i32, rng: &mut SessionRng) -> Option<Point> {
    let occupied: HashSet<Point> = snake.iter().copied().collect();
    let cell_count = (grid_size as usize) * (grid_size as usize);
    if occupied.len() >= cell_count {
        return None;
    }

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let x = rng.random_range(0..grid_size);
        let y = rng.random_range(0..grid_size);
        let pos = Point::new(x, y);

        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }

    (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Point::new(x, y)))
        .find(|pos| !occupied.contains(pos))
}
