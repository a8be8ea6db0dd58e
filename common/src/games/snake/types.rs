use serde::{Deserialize, Serialize};

/// A grid cell. Signed so that a wall death marker can sit one step outside
/// the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn is_within(&self, grid_size: i32) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }

    pub fn wrapped(&self, grid_size: i32) -> Point {
        Point::new(self.x.rem_euclid(grid_size), self.y.rem_euclid(grid_size))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallCollisionMode {
    #[default]
    Death,
    WrapAround,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    Reversal,
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeathMarker {
    pub at: Point,
    pub reason: DeathReason,
}
