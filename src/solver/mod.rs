use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::grid::adjacency::AdjacencyGraph;
use crate::grid::board::Board;
use crate::grid::letter_index::LetterIndex;

pub mod brute_force;
pub mod matcher;
pub mod prune;
pub mod results;

use self::matcher::{MatchOutcome, WordPathMatcher};
use self::prune::PruneFilter;
use self::results::ResultSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Searches for a path for every dictionary word
    #[default]
    Optimized,
    /// Spells every path on the board and looks it up
    BruteForce,
}

#[derive(Debug, Clone)]
pub struct SolveOptions {
    pub method: Method,
    /// Drop words using letters that aren't on the board before searching
    pub prune: bool,
    /// Spread the words over the rayon thread pool
    pub parallel: bool,
    /// Give up on a word after this long. Abandoned words count as unmatched
    pub deadline: Option<Duration>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            method: Method::Optimized,
            prune: true,
            parallel: true,
            deadline: None,
        }
    }
}

/// Board derived lookup structures, built once and shared by every word
#[derive(Debug)]
pub struct Solver<'b> {
    board: &'b Board,
    graph: AdjacencyGraph,
    index: LetterIndex,
}

impl<'b> Solver<'b> {
    pub fn new(board: &'b Board) -> Result<Self> {
        let graph = AdjacencyGraph::build(board.rows(), board.columns())?;
        let index = LetterIndex::build(board);
        Ok(Self {
            board,
            graph,
            index,
        })
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn matcher(&self) -> WordPathMatcher<'_> {
        WordPathMatcher::new(&self.graph, &self.index)
    }

    /// Words from the dictionary worth running the path search on
    pub fn candidates(&self, dictionary: &Dictionary, prune: bool) -> Vec<String> {
        if !prune {
            return dictionary.words();
        }
        let filter = PruneFilter::new(self.board.letters(), dictionary.length_range());
        let kept = dictionary.search(filter);
        info!(
            total = dictionary.len(),
            kept = kept.len(),
            pruned = dictionary.len() - kept.len(),
            "pruned words with letters missing from the board"
        );
        kept
    }

    pub fn solve(&self, dictionary: &Dictionary, options: &SolveOptions) -> ResultSet {
        let start = Instant::now();
        if dictionary.is_empty() || self.index.is_empty() {
            debug!("nothing to search");
            return ResultSet::new();
        }

        let results = match options.method {
            Method::Optimized => self.solve_optimized(dictionary, options),
            Method::BruteForce => {
                let range = dictionary.length_range();
                let lengths = *range.start()..=(*range.end()).min(self.board.len());
                brute_force::solve(
                    self.board,
                    &self.graph,
                    dictionary,
                    lengths,
                    options.parallel,
                )
            }
        };

        info!(
            method = ?options.method,
            matched = results.len(),
            elapsed = ?start.elapsed(),
            "solved board"
        );
        results
    }

    fn solve_optimized(&self, dictionary: &Dictionary, options: &SolveOptions) -> ResultSet {
        let candidates = self.candidates(dictionary, options.prune);
        let matcher = self.matcher().with_deadline(options.deadline);

        let check = |word: &String| match matcher.search(word) {
            MatchOutcome::Found(_) => true,
            MatchOutcome::NotFound => false,
            MatchOutcome::Expired => {
                warn!(word = word.as_str(), "deadline expired, treating word as unmatched");
                false
            }
        };

        if options.parallel {
            candidates
                .par_iter()
                .filter(|&w| check(w))
                .fold(ResultSet::new, |mut acc, w| {
                    acc.insert(w.clone());
                    acc
                })
                .reduce(ResultSet::new, ResultSet::merge)
        } else {
            candidates.iter().filter(|&w| check(w)).cloned().collect()
        }
    }
}

/// Finds every dictionary word that can be traced on the board
pub fn solve(board: &Board, dictionary: &Dictionary) -> Result<ResultSet> {
    solve_with(board, dictionary, &SolveOptions::default())
}

pub fn solve_with(
    board: &Board,
    dictionary: &Dictionary,
    options: &SolveOptions,
) -> Result<ResultSet> {
    Ok(Solver::new(board)?.solve(dictionary, options))
}

/// Same as [`solve`] for a dictionary already grouped by word length
pub fn solve_groups(
    board: &Board,
    dictionary: &BTreeMap<usize, BTreeSet<String>>,
) -> Result<ResultSet> {
    solve(board, &Dictionary::from_groups(dictionary)?)
}
