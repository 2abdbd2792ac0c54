use super::board::Board;

/// Maps every board letter to the tiles holding it, in row-major order.
/// Blank tiles are never indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterIndex {
    positions: [Vec<usize>; 26],
}

impl LetterIndex {
    pub fn build(board: &Board) -> Self {
        let mut positions: [Vec<usize>; 26] = Default::default();
        for (i, tile) in board.tiles().enumerate() {
            if let Some(l) = tile.letter() {
                positions[Self::slot(l)].push(i);
            }
        }
        Self { positions }
    }

    fn slot(letter: char) -> usize {
        letter as usize - 'a' as usize
    }

    /// Tiles holding `letter`. Empty for letters that aren't on the board
    pub fn positions(&self, letter: char) -> &[usize] {
        if letter.is_ascii_lowercase() {
            &self.positions[Self::slot(letter)]
        } else {
            &[]
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(|p| p.is_empty())
    }
}
