use std::ops::RangeInclusive;

use rayon::prelude::*;

use super::results::ResultSet;
use crate::dictionary::Dictionary;
use crate::grid::adjacency::AdjacencyGraph;
use crate::grid::board::Board;

/// Spells every simple path on the board with a length in `lengths` and keeps the
/// strings found in the dictionary. The number of paths grows exponentially with
/// length, so this is only practical on small boards. Mostly useful as a reference
/// to check the path matcher against.
pub fn solve(
    board: &Board,
    graph: &AdjacencyGraph,
    dictionary: &Dictionary,
    lengths: RangeInclusive<usize>,
    parallel: bool,
) -> ResultSet {
    let starts = (0..board.len())
        .filter(|&i| board.tile(i).letter().is_some())
        .collect::<Vec<_>>();

    let walk_from = |start: usize| {
        let mut walker = Walker {
            board,
            graph,
            dictionary,
            lengths: lengths.clone(),
            spelled: String::with_capacity(*lengths.end()),
            used: vec![false; board.len()],
            found: ResultSet::new(),
        };
        walker.walk(start);
        walker.found
    };

    if parallel {
        starts
            .into_par_iter()
            .map(walk_from)
            .reduce(ResultSet::new, ResultSet::merge)
    } else {
        starts
            .into_iter()
            .map(walk_from)
            .fold(ResultSet::new(), ResultSet::merge)
    }
}

struct Walker<'a> {
    board: &'a Board,
    graph: &'a AdjacencyGraph,
    dictionary: &'a Dictionary,
    lengths: RangeInclusive<usize>,
    spelled: String,
    used: Vec<bool>,
    found: ResultSet,
}

impl<'a> Walker<'a> {
    fn walk(&mut self, tile: usize) {
        let letter = match self.board.tile(tile).letter() {
            Some(l) => l,
            None => return,
        };

        self.used[tile] = true;
        self.spelled.push(letter);

        let len = self.spelled.len();
        if self.lengths.contains(&len) && self.dictionary.contains(&self.spelled) {
            self.found.insert(self.spelled.clone());
        }
        if len < *self.lengths.end() {
            for &next in self.graph.neighbors(tile) {
                if !self.used[next] {
                    self.walk(next);
                }
            }
        }

        self.spelled.pop();
        self.used[tile] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario() {
        let board = Board::build("catartton", 3, 3).unwrap();
        let graph = AdjacencyGraph::build(3, 3).unwrap();
        let dict = Dictionary::new(["cat", "art", "rat", "car", "toot"], 3, 4).unwrap();

        let results = solve(&board, &graph, &dict, 3..=4, false);
        assert_eq!(results.len(), 4);
        assert!(results.get(4).is_none());
        assert_eq!(results, solve(&board, &graph, &dict, 3..=4, true));
    }

    #[test]
    fn test_blanks_never_walked() {
        let board = Board::build("c.t", 1, 3).unwrap();
        let graph = AdjacencyGraph::build(1, 3).unwrap();
        let dict = Dictionary::new(["ct", "c.t", "tc"], 2, 3).unwrap();
        assert!(solve(&board, &graph, &dict, 2..=3, false).is_empty());
    }
}
