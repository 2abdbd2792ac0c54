pub mod adjacency;
pub mod board;
pub mod letter_index;
pub mod letter_set;
pub mod letters;
pub mod util;

/// Marker for an unplayable tile in flattened board letters
pub const BLANK: char = '.';
