use std::process;

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        process::exit(1);
    }
}
