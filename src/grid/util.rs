use std::slice::Iter;

/// The eight compass directions a path may step in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 8] = [
            Direction::East,
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
            Direction::North,
            Direction::NorthEast,
        ];
        DIRS.iter()
    }

    /// Returns the tile reached by stepping from `index` in this direction, or `None`
    /// if the step would leave the board or wrap onto a neighbouring row.
    pub fn step(&self, index: usize, rows: usize, columns: usize) -> Option<usize> {
        let j = columns;
        let k = rows.checked_mul(columns)?.checked_sub(1)?;
        let i = index;
        // Tiles in the last column wrap when stepping east, the first column when stepping west
        let last_col = (i + 1) % j == 0;
        let first_col = i % j == 0;

        let candidate = match self {
            Direction::East => Some(i + 1).filter(|_| !last_col),
            Direction::SouthEast => Some(i + j + 1).filter(|_| !last_col),
            Direction::South => Some(i + j),
            Direction::SouthWest => (i + j).checked_sub(1).filter(|_| !first_col),
            Direction::West => i.checked_sub(1).filter(|_| !first_col),
            Direction::NorthWest => i.checked_sub(j + 1).filter(|_| !first_col),
            Direction::North => i.checked_sub(j),
            Direction::NorthEast => (i + 1).checked_sub(j).filter(|_| !last_col),
        };

        candidate.filter(|&c| c <= k)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn from_index(index: usize, columns: usize) -> Self {
        Self {
            row: index / columns,
            col: index % columns,
        }
    }
}
