//! Finds every dictionary word that can be traced on a letter grid as a path of
//! adjacent, non-repeating tiles.
//!
//! ```
//! use wlsolver::{solve, Board, Dictionary};
//!
//! let board = Board::build("catartton", 3, 3).unwrap();
//! let dictionary = Dictionary::new(["cat", "art", "toot"], 3, 4).unwrap();
//! let results = solve(&board, &dictionary).unwrap();
//! assert!(results.contains("cat"));
//! assert!(!results.contains("toot"));
//! ```

pub mod dictionary;
pub mod error;
pub mod grid;
pub mod solver;
pub mod utils;

pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use grid::board::{Board, Tile};
pub use solver::results::ResultSet;
pub use solver::{solve, solve_groups, solve_with, Method, SolveOptions, Solver};
