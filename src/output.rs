use colored::{ColoredString, Colorize};

use crate::swiss::{Pairing, StandingEntry};

pub fn render_standings(standings: &[StandingEntry]) -> String {
    if standings.is_empty() {
        return "No players registered.".dimmed().to_string();
    }

    let name_width = column_width(standings.iter().map(|e| e.name.as_str()), "Name");
    let mut lines = vec![format!(
        "{:>4}  {:>6}  {:<name_width$}  {:>4}  {:>7}",
        "Rank", "Id", "Name", "Wins", "Matches"
    )
    .bold()
    .to_string()];

    for (idx, entry) in standings.iter().enumerate() {
        lines.push(format!(
            "{:>4}  {:>6}  {:<name_width$}  {}  {:>7}",
            idx + 1,
            entry.player_id,
            entry.name,
            wins_cell(entry.wins),
            entry.matches_played
        ));
    }

    lines.join("\n")
}

pub fn render_pairings(pairings: &[Pairing]) -> String {
    let cells: Vec<(String, String)> = pairings
        .iter()
        .map(|p| {
            (
                format!("{} (#{})", p.player_one_name, p.player_one_id),
                format!("{} (#{})", p.player_two_name, p.player_two_id),
            )
        })
        .collect();

    let name_width = column_width(cells.iter().map(|(first, _)| first.as_str()), "Player");
    let mut lines = vec![format!("{:>5}  {:<name_width$}      {}", "Table", "Player", "Opponent")
        .bold()
        .to_string()];

    for (idx, (first, second)) in cells.iter().enumerate() {
        lines.push(format!("{:>5}  {:<name_width$}  {}  {}", idx + 1, first, "vs".dimmed(), second));
    }

    lines.join("\n")
}

// Padded before colouring; escape codes would otherwise defeat the width.
fn wins_cell(wins: u32) -> ColoredString {
    format!("{:>4}", wins).green()
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0).max(header.len())
}
