use std::io::{stdin, stdout, BufRead, Write};

use anyhow::Result;

use crate::util::fangraphs::StatsClient;
use crate::util::{hitting, normalize_name, parse_year, pitching};

pub mod util;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error while looking up season stats: {e}");
    }
}

fn run() -> Result<()> {
    let mut client = StatsClient::new();
    println!("This program only works for players that qualified for a specific season.");
    println!("Enter a blank name to quit.");
    let stdin = stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let Some(player) = prompt(&mut lines, "Enter a Qualified Player's Full Name: ")? else {
            break;
        };
        if player.trim().is_empty() {
            break;
        }
        let Some(year_input) = prompt(&mut lines, "Enter a Year That He Played In: ")? else {
            break;
        };

        let year = match parse_year(&year_input) {
            Ok(year) => year,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        let player = normalize_name(&player);

        let stats = match client.season_stats(year) {
            Ok(stats) => stats,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        // Both tables are scanned to the end so a two-way player (or a
        // duplicated name) reports every matching row.
        let mut out = String::new();
        let found_pitching = pitching::find_and_report(&mut out, &player, year, &stats.pitching)?;
        let found_batting = hitting::find_and_report(&mut out, &player, year, &stats.batting)?;
        if found_pitching || found_batting {
            print!("{out}");
        } else {
            println!("{player} did not qualify in the {year} season.");
        }
        stdout().flush()?;
    }
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
