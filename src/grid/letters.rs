//! Parser for the command line board syntax.
//!
//! Rows are separated by `-`, a `.` is one blank tile and a decimal number `N`
//! stands for a run of `N` blank tiles. Whitespace is ignored and letters are
//! folded to lowercase, so `"CAT-a1t-ton"` is a 3x3 board with a blank in the middle.

use super::board::Board;
use super::BLANK;
use crate::error::{Error, Result};

const ROW_SEP: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLetters {
    /// Flattened row-major letters, blanks written as `.`
    pub letters: String,
    pub rows: usize,
    pub columns: usize,
}

impl ParsedLetters {
    pub fn into_board(self) -> Result<Board> {
        Board::build(&self.letters, self.rows, self.columns)
    }
}

pub fn parse(input: &str) -> Result<ParsedLetters> {
    let input: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if input.is_empty() {
        return Err(Error::InvalidLetters("no letters given".into()));
    }

    let mut letters = String::with_capacity(input.len());
    let mut columns = None;
    let mut rows = 0;

    for (i, raw_row) in input.split(ROW_SEP).enumerate() {
        let row = parse_row(raw_row)?;
        let len = row.chars().count();
        match columns {
            None if len == 0 => {
                return Err(Error::InvalidLetters(format!("row {} is empty", i + 1)))
            }
            None => columns = Some(len),
            Some(c) if c != len => {
                return Err(Error::InvalidLetters(format!(
                    "row {} has {} tiles but row 1 has {}",
                    i + 1,
                    len,
                    c
                )))
            }
            _ => {}
        }
        letters.push_str(&row);
        rows += 1;
    }

    Ok(ParsedLetters {
        letters,
        rows,
        columns: columns.unwrap_or(0),
    })
}

/// Longest run of blanks a single number may stand for
const MAX_BLANK_RUN: usize = u16::MAX as usize;

fn parse_row(raw: &str) -> Result<String> {
    let mut row = String::with_capacity(raw.len());
    let mut run = String::new();

    let flush_run = |run: &mut String, row: &mut String| -> Result<()> {
        if !run.is_empty() {
            let n = run
                .parse::<usize>()
                .ok()
                .filter(|&n| n <= MAX_BLANK_RUN)
                .ok_or_else(|| {
                    Error::InvalidLetters(format!(
                        "bad blank run \"{}\", at most {} blanks in a row",
                        run, MAX_BLANK_RUN
                    ))
                })?;
            row.extend(std::iter::repeat(BLANK).take(n));
            run.clear();
        }
        Ok(())
    };

    for c in raw.chars() {
        match c {
            '0'..='9' => run.push(c),
            BLANK => {
                flush_run(&mut run, &mut row)?;
                row.push(BLANK);
            }
            c if c.is_ascii_alphabetic() => {
                flush_run(&mut run, &mut row)?;
                row.push(c.to_ascii_lowercase());
            }
            c => {
                return Err(Error::InvalidLetters(format!(
                    "unexpected character '{}' in \"{}\"",
                    c, raw
                )))
            }
        }
    }
    flush_run(&mut run, &mut row)?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_board() {
        let parsed = parse("cat-art-ton").unwrap();
        assert_eq!(parsed.letters, "catartton");
        assert_eq!((parsed.rows, parsed.columns), (3, 3));
    }

    #[test]
    fn test_blank_runs() {
        let parsed = parse("ab1-cde").unwrap();
        assert_eq!(parsed.letters, "ab.cde");
        assert_eq!((parsed.rows, parsed.columns), (2, 3));

        let parsed = parse("a10b-12").unwrap();
        assert_eq!(parsed.columns, 12);
        assert_eq!(parsed.letters.matches('.').count(), 22);

        let parsed = parse("A.c - D E F").unwrap();
        assert_eq!(parsed.letters, "a.cdef");
    }

    #[test]
    fn test_blank_run_limit() {
        assert!(matches!(parse("a9999999999"), Err(Error::InvalidLetters(_))));
        assert!(matches!(
            parse("a99999999999999999999999"),
            Err(Error::InvalidLetters(_))
        ));
        let parsed = parse(&format!("a{}", MAX_BLANK_RUN)).unwrap();
        assert_eq!(parsed.columns, MAX_BLANK_RUN + 1);
    }

    #[test]
    fn test_single_row() {
        let parsed = parse("word").unwrap();
        assert_eq!((parsed.rows, parsed.columns), (1, 4));
        let board = parsed.into_board().unwrap();
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn test_ragged_rows() {
        assert!(matches!(parse("cat-ar-ton"), Err(Error::InvalidLetters(_))));
        assert!(matches!(parse("cat--ton"), Err(Error::InvalidLetters(_))));
        assert!(matches!(parse("-cat"), Err(Error::InvalidLetters(_))));
    }

    #[test]
    fn test_bad_input() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
        assert!(parse("ca?-art").is_err());
    }
}
