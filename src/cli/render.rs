use std::time::Duration;

use colored::Colorize;
use wlsolver::{Board, ResultSet, Tile};

pub fn board_table(board: &Board) -> String {
    let mut out = format!(
        "{}\n",
        format!("Word List Table ({}x{})", board.rows(), board.columns()).bold()
    );
    for row in board.row_tiles() {
        let line = row
            .iter()
            .map(|t| match t {
                Tile::Letter(l) => l.to_ascii_uppercase().to_string().green().to_string(),
                Tile::Blank => "·".dimmed().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("  {}\n", line));
    }
    out
}

/// One panel per word length, every third word highlighted to make long lists easier to scan
pub fn word_panels(results: &ResultSet) -> String {
    let mut out = String::new();
    for (len, words) in results.groups() {
        out.push_str(&format!(
            "{} {}\n",
            format!("{} Letter Words:", len).bold(),
            words.len().to_string().bold()
        ));
        let line = words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i % 3 == 1 {
                    w.blue().to_string()
                } else {
                    w.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("  {}\n", line));
    }
    out
}

pub fn summary(results: &ResultSet, elapsed: Duration) -> String {
    format!(
        "{} {} words ({:.4}s)",
        "Complete:".green().bold(),
        results.len(),
        elapsed.as_secs_f64()
    )
}
