use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use wlsolver::Method;

#[derive(Parser, Debug)]
#[command(name = "wlsolver", version, about = "Solve a word list grid puzzle")]
pub struct Cli {
    /// Board rows separated by hyphens, e.g. xxx-xxx-xxx. `.` is a blank tile and a
    /// number N is a run of N blank tiles. Prompted for when no board is given
    #[arg(short, long, env = "WLSOLVER_LETTERS")]
    pub letters: Option<String>,

    /// JSON board file: an array of rows of one letter strings
    #[arg(short, long, conflicts_with = "letters")]
    pub board: Option<PathBuf>,

    /// Generate a random board of the given size, e.g. 4x4
    #[arg(long, value_parser = parse_size, conflicts_with_all = ["letters", "board"])]
    pub random: Option<(usize, usize)>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Shortest word length
    #[arg(short = 'n', long, default_value_t = 4)]
    pub minimum: usize,

    /// Longest word length
    #[arg(short = 'x', long, default_value_t = 10)]
    pub maximum: usize,

    /// Solving method: (o)ptimized or (b)rute force
    #[arg(short, long, value_enum, default_value_t = MethodArg::O, hide_default_value = true)]
    pub method: MethodArg,

    /// Word list file to use
    #[arg(
        short,
        long,
        env = "WLSOLVER_WORDS",
        default_value = "./words/wlsolver_dictionary.txt"
    )]
    pub words: PathBuf,

    /// Compiled dictionary cache, rebuilt when stale
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Search every word, even those using letters missing from the board
    #[arg(long)]
    pub no_prune: bool,

    /// Worker threads, 0 picks one per core
    #[arg(short = 'j', long, default_value_t = 0)]
    pub threads: usize,

    /// Give up on a single word after this many milliseconds
    #[arg(long)]
    pub deadline_ms: Option<u64>,

    /// Print the matched words as JSON
    #[arg(long)]
    pub json: bool,

    /// Print calculation details
    #[arg(short, long)]
    pub verbose: bool,

    /// Log filter, e.g. debug or wlsolver=trace. Overrides RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Brute force
    B,
    /// Optimized
    O,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::B => Method::BruteForce,
            MethodArg::O => Method::Optimized,
        }
    }
}

fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (rows, columns) = s
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected ROWSxCOLUMNS, got \"{}\"", s))?;
    let rows: usize = rows.trim().parse().map_err(|e| format!("rows: {}", e))?;
    let columns: usize = columns.trim().parse().map_err(|e| format!("columns: {}", e))?;
    if rows == 0 || columns == 0 {
        return Err("board dimensions must be positive".into());
    }
    Ok((rows, columns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wlsolver", "-l", "cat-art-ton"]).unwrap();
        assert_eq!(cli.letters.as_deref(), Some("cat-art-ton"));
        assert_eq!(cli.minimum, 4);
        assert_eq!(cli.maximum, 10);
        assert_eq!(Method::from(cli.method), Method::Optimized);
        assert!(!cli.no_prune);
    }

    #[test]
    fn test_method_and_lengths() {
        let cli = Cli::try_parse_from(["wlsolver", "-l", "ab-cd", "-m", "b", "-n", "2", "-x", "3"])
            .unwrap();
        assert_eq!(Method::from(cli.method), Method::BruteForce);
        assert_eq!((cli.minimum, cli.maximum), (2, 3));
    }

    #[test]
    fn test_random_size() {
        let cli = Cli::try_parse_from(["wlsolver", "--random", "4x5", "--seed", "3"]).unwrap();
        assert_eq!(cli.random, Some((4, 5)));
        assert_eq!(cli.seed, Some(3));
        assert!(Cli::try_parse_from(["wlsolver", "--random", "0x5"]).is_err());
        assert!(Cli::try_parse_from(["wlsolver", "--random", "45"]).is_err());
    }

    #[test]
    fn test_conflicting_boards() {
        assert!(Cli::try_parse_from(["wlsolver", "-l", "ab-cd", "--random", "2x2"]).is_err());
    }
}
