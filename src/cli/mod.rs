use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use wlsolver::grid::letters;
use wlsolver::{Board, Dictionary, SolveOptions, Solver};

pub mod args;
pub mod logging;
pub mod render;

use self::args::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref(), cli.verbose)?;

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("failed to configure the worker threads")?;
    }

    let start = Instant::now();
    let board = load_board(&cli)?;
    if !cli.json {
        println!("\nwlsolver {}\n", env!("CARGO_PKG_VERSION"));
        print!("{}", render::board_table(&board));
    }

    // Words shorter than two letters or longer than the board can't be played
    let minimum = cli.minimum.max(2);
    let maximum = cli.maximum.min(board.len());
    let dictionary = match &cli.cache {
        Some(cache) => Dictionary::from_file_cached(&cli.words, cache, minimum, maximum),
        None => Dictionary::from_file(&cli.words, minimum, maximum),
    }
    .with_context(|| format!("failed to load word list {}", cli.words.display()))?;

    let options = SolveOptions {
        method: cli.method.into(),
        prune: !cli.no_prune,
        parallel: true,
        deadline: cli.deadline_ms.map(Duration::from_millis),
    };
    info!(?options, minimum, maximum, words = dictionary.len(), "solving");

    let solver = Solver::new(&board)?;
    let results = solver.solve(&dictionary, &options);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("\nWord Lists");
        print!("{}", render::word_panels(&results));
        println!("{}", render::summary(&results, start.elapsed()));
    }
    Ok(())
}

fn load_board(cli: &Cli) -> Result<Board> {
    if let Some(path) = &cli.board {
        return Board::from_file(path)
            .with_context(|| format!("failed to load board {}", path.display()));
    }
    if let Some((rows, columns)) = cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return Ok(Board::random(rows, columns, &mut rng)?);
    }

    let input = match &cli.letters {
        Some(l) => l.clone(),
        None => prompt_letters()?,
    };
    let parsed = letters::parse(&input)
        .with_context(|| format!("invalid letters entry: {}", input))?;
    Ok(parsed.into_board()?)
}

fn prompt_letters() -> Result<String> {
    print!("Letters: ");
    std::io::stdout().flush()?;
    let input: String =
        text_io::try_read!("{}\n").map_err(|e| anyhow!("failed to read letters: {}", e))?;
    Ok(input)
}
