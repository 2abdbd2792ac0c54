use super::board::tile_count;
use super::util::Direction;
use crate::error::{Error, Result};

/// Neighbour table for every tile on a board. Only depends on the board shape so a
/// single graph serves every word searched on that board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    pub fn build(rows: usize, columns: usize) -> Result<Self> {
        let count = tile_count(rows, columns).ok_or(Error::InvalidBoardDimensions {
            rows,
            columns,
            letters: 0,
        })?;

        let neighbors = (0..count)
            .map(|i| {
                let mut adj = Vec::with_capacity(8);
                for dir in Direction::iter() {
                    if let Some(n) = dir.step(i, rows, columns) {
                        if !adj.contains(&n) {
                            adj.push(n);
                        }
                    }
                }
                adj
            })
            .collect();

        Ok(Self { neighbors })
    }

    /// Number of tiles in the graph
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn neighbors(&self, tile: usize) -> &[usize] {
        &self.neighbors[tile]
    }

    pub fn is_adjacent(&self, from: usize, to: usize) -> bool {
        self.neighbors
            .get(from)
            .map(|n| n.contains(&to))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::AdjacencyGraph;

    fn sorted(graph: &AdjacencyGraph, tile: usize) -> Vec<usize> {
        let mut n = graph.neighbors(tile).to_vec();
        n.sort_unstable();
        n
    }

    #[test]
    fn test_single_tile() {
        let graph = AdjacencyGraph::build(1, 1).unwrap();
        assert_eq!(graph.len(), 1);
        assert!(graph.neighbors(0).is_empty());
    }

    #[test]
    fn test_interior_tile() {
        let graph = AdjacencyGraph::build(3, 3).unwrap();
        assert_eq!(sorted(&graph, 4), vec![0, 1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(sorted(&graph, 0), vec![1, 3, 4]);
        assert_eq!(sorted(&graph, 5), vec![1, 2, 4, 7, 8]);
    }

    #[test]
    fn test_neighbors_in_range() {
        for rows in 1..=6 {
            for columns in 1..=6 {
                let graph = AdjacencyGraph::build(rows, columns).unwrap();
                for tile in 0..rows * columns {
                    let n = graph.neighbors(tile);
                    assert!(n.len() <= 8);
                    assert!(!n.contains(&tile), "{}x{} tile {}", rows, columns, tile);
                    assert!(n.iter().all(|&x| x < rows * columns));
                    // Adjacency is symmetric
                    assert!(n.iter().all(|&x| graph.is_adjacent(x, tile)));
                }
                if rows >= 3 && columns >= 3 {
                    assert_eq!(graph.neighbors(columns + 1).len(), 8);
                }
            }
        }
    }

    #[test]
    fn test_rectangular_board() {
        // 0 1 2
        // 3 4 5
        let graph = AdjacencyGraph::build(2, 3).unwrap();
        assert_eq!(sorted(&graph, 0), vec![1, 3, 4]);
        assert_eq!(sorted(&graph, 1), vec![0, 2, 3, 4, 5]);
        assert_eq!(sorted(&graph, 2), vec![1, 4, 5]);
        assert_eq!(sorted(&graph, 3), vec![0, 1, 4]);
        assert_eq!(sorted(&graph, 5), vec![1, 2, 4]);

        let tall = AdjacencyGraph::build(3, 2).unwrap();
        assert_eq!(sorted(&tall, 5), vec![2, 3, 4]);
    }

    #[test]
    fn test_rejects_empty_dimensions() {
        assert!(AdjacencyGraph::build(0, 3).is_err());
        assert!(AdjacencyGraph::build(3, 0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        assert!(AdjacencyGraph::build(usize::MAX, 2).is_err());
        assert!(AdjacencyGraph::build(2, usize::MAX / 2 + 1).is_err());
    }
}
