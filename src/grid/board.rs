use std::fs::File;
use std::io::Read;
use std::path::Path;

use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;
use tracing::debug;

use super::letter_set::LetterSet;
use super::util::Position;
use super::BLANK;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Unplayable cell
    Blank,
    Letter(char),
}

impl Tile {
    fn parse(c: char) -> Result<Self> {
        match c {
            BLANK => Ok(Tile::Blank),
            c if c.is_ascii_alphabetic() => Ok(Tile::Letter(c.to_ascii_lowercase())),
            c => Err(Error::InvalidLetters(format!(
                "'{}' is neither a letter nor the blank marker '{}'",
                c, BLANK
            ))),
        }
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Tile::Letter(l) => Some(*l),
            Tile::Blank => None,
        }
    }

    pub fn as_char(&self) -> char {
        self.letter().unwrap_or(BLANK)
    }
}

/// Immutable letter grid. Tiles are stored row-major so the flat index of a tile
/// is `row * columns + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Array2<Tile>,
}

impl Board {
    /// Builds a board from the flattened row-major letters. Blank tiles are written as `.`
    pub fn build(letters: &str, rows: usize, columns: usize) -> Result<Self> {
        let count = letters.chars().count();
        if tile_count(rows, columns) != Some(count) {
            return Err(Error::InvalidBoardDimensions {
                rows,
                columns,
                letters: count,
            });
        }

        let tiles = letters.chars().map(Tile::parse).collect::<Result<Vec<_>>>()?;
        Self::from_tiles(tiles, rows, columns)
    }

    fn from_tiles(tiles: Vec<Tile>, rows: usize, columns: usize) -> Result<Self> {
        let letters = tiles.len();
        let tiles = Array2::from_shape_vec((rows, columns), tiles).map_err(|_| {
            Error::InvalidBoardDimensions {
                rows,
                columns,
                letters,
            }
        })?;
        Ok(Self { tiles })
    }

    /// Loads a board from a json file holding an array of rows, each an array of
    /// one letter strings. `""` and `"."` mark blank tiles.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| Error::io(e, path))?;
        let mut data = String::new();
        file.read_to_string(&mut data)
            .map_err(|e| Error::io(e, path))?;

        let raw_board: Vec<Vec<String>> = serde_json::from_str(&data)?;
        let rows = raw_board.len();
        let columns = raw_board.first().map(|r| r.len()).unwrap_or(0);

        let mut tiles = Vec::with_capacity(rows * columns);
        for (i, row) in raw_board.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::InvalidLetters(format!(
                    "row {} has {} tiles, expected {}",
                    i + 1,
                    row.len(),
                    columns
                )));
            }
            for cell in row {
                let mut chars = cell.chars();
                let tile = match (chars.next(), chars.next()) {
                    (None, _) => Tile::Blank,
                    (Some(c), None) => Tile::parse(c)?,
                    _ => {
                        return Err(Error::InvalidLetters(format!(
                            "tile \"{}\" holds more than one letter",
                            cell
                        )))
                    }
                };
                tiles.push(tile);
            }
        }

        if rows == 0 || columns == 0 {
            return Err(Error::InvalidBoardDimensions {
                rows,
                columns,
                letters: 0,
            });
        }
        debug!(rows, columns, path = %path.display(), "loaded board file");
        Self::from_tiles(tiles, rows, columns)
    }

    /// Generates a board of uniformly random letters
    pub fn random<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> Result<Self> {
        if tile_count(rows, columns).is_none() {
            return Err(Error::InvalidBoardDimensions {
                rows,
                columns,
                letters: 0,
            });
        }
        let letters: Array2<char> =
            Array2::random_using((rows, columns), Uniform::new_inclusive('a', 'z'), rng);
        Ok(Self {
            tiles: letters.mapv(Tile::Letter),
        })
    }

    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    pub fn columns(&self) -> usize {
        self.tiles.ncols()
    }

    /// Total number of tiles, blanks included
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, index: usize) -> Tile {
        let pos = Position::from_index(index, self.columns());
        self.tiles[[pos.row, pos.col]]
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    pub fn row_tiles(&self) -> impl Iterator<Item = Vec<Tile>> + '_ {
        self.tiles.rows().into_iter().map(|row| row.to_vec())
    }

    /// Distinct letters present on the board
    pub fn letters(&self) -> LetterSet {
        self.tiles().filter_map(|t| t.letter()).collect()
    }

    /// Flattened row-major letters with blanks written as `.`
    pub fn to_letters(&self) -> String {
        self.tiles().map(|t| t.as_char()).collect()
    }
}

/// Number of tiles on a `rows` x `columns` board, `None` when either side is zero or the
/// product overflows
pub(crate) fn tile_count(rows: usize, columns: usize) -> Option<usize> {
    rows.checked_mul(columns).filter(|&n| n > 0)
}
