use std::time::{Duration, Instant};

use crate::grid::adjacency::AdjacencyGraph;
use crate::grid::letter_index::LetterIndex;

/// Result of searching a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Tiles spelling the word, in order
    Found(Vec<usize>),
    NotFound,
    /// The deadline passed before the search finished
    Expired,
}

enum Step {
    Found,
    DeadEnd,
    Expired,
}

/// Decides whether a word can be traced on the board as a path of adjacent,
/// non-repeating tiles. Holds only shared references to the board structures, so
/// one matcher can be used from many threads at once.
#[derive(Debug, Clone, Copy)]
pub struct WordPathMatcher<'a> {
    graph: &'a AdjacencyGraph,
    index: &'a LetterIndex,
    deadline: Option<Duration>,
}

/// Mutable state for one word. Dropped as soon as the word is decided
struct Search<'w> {
    letters: &'w [char],
    path: Vec<usize>,
    used: Vec<bool>,
    expires_at: Option<Instant>,
}

impl<'a> WordPathMatcher<'a> {
    pub fn new(graph: &'a AdjacencyGraph, index: &'a LetterIndex) -> Self {
        Self {
            graph,
            index,
            deadline: None,
        }
    }

    /// Limits the time spent on any single word
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn matches(&self, word: &str) -> bool {
        matches!(self.search(word), MatchOutcome::Found(_))
    }

    /// Returns the first path found for the word
    pub fn find_path(&self, word: &str) -> Option<Vec<usize>> {
        match self.search(word) {
            MatchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn search(&self, word: &str) -> MatchOutcome {
        let letters = word.chars().collect::<Vec<_>>();
        // A path can't visit more tiles than the board has
        if letters.is_empty() || letters.len() > self.graph.len() {
            return MatchOutcome::NotFound;
        }

        let mut search = Search {
            letters: &letters,
            path: Vec::with_capacity(letters.len()),
            used: vec![false; self.graph.len()],
            expires_at: self.deadline.map(|d| Instant::now() + d),
        };

        for &start in self.index.positions(letters[0]) {
            search.path.push(start);
            search.used[start] = true;
            match self.extend(&mut search) {
                Step::Found => return MatchOutcome::Found(search.path),
                Step::Expired => return MatchOutcome::Expired,
                Step::DeadEnd => {}
            }
            search.used[start] = false;
            search.path.pop();
        }

        MatchOutcome::NotFound
    }

    /// Depth first extension of the current path by the next letter of the word,
    /// backtracking out of dead ends
    fn extend(&self, search: &mut Search) -> Step {
        let depth = search.path.len();
        if depth == search.letters.len() {
            return Step::Found;
        }
        if let Some(expires_at) = search.expires_at {
            if Instant::now() >= expires_at {
                return Step::Expired;
            }
        }

        let last = search.path[depth - 1];
        for &next in self.index.positions(search.letters[depth]) {
            if search.used[next] || !self.graph.is_adjacent(last, next) {
                continue;
            }
            search.path.push(next);
            search.used[next] = true;
            match self.extend(search) {
                Step::DeadEnd => {}
                done => return done,
            }
            search.used[next] = false;
            search.path.pop();
        }

        Step::DeadEnd
    }
}
