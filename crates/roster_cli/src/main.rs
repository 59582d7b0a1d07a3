//! Shady Sluggers Roster CLI
//!
//! Terminal front end for the roster model: add/remove/reorder players,
//! edit positions and alternates, and print the two roster views. Which
//! view to render is the subcommand; the model itself holds no notion of
//! a current page.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use roster_core::{Position, RosterModel, RosterStore, DEFAULT_ROSTER_FILE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster_cli")]
#[command(about = "Manage the Shady Sluggers team roster", long_about = None)]
struct Cli {
    /// Roster file path
    #[arg(long, default_value = DEFAULT_ROSTER_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a player at the end of the batting order
    Add {
        /// Player name
        name: String,

        /// Fielding position, by name or abbreviation ("First Base", 1B)
        #[arg(long, default_value = "Pitcher")]
        position: String,
    },

    /// Remove a player from the roster
    Remove {
        /// Player name
        name: String,
    },

    /// Move a player one spot up the batting order
    MoveUp {
        /// Row number as shown by `show` (1-based)
        row: usize,
    },

    /// Move a player one spot down the batting order
    MoveDown {
        /// Row number as shown by `show` (1-based)
        row: usize,
    },

    /// Change a player's fielding position
    SetPosition {
        /// Player name
        name: String,

        /// Fielding position, by name or abbreviation
        position: String,
    },

    /// Change a player's alternate (an empty string clears it)
    SetAlternate {
        /// Player name
        name: String,

        /// Alternate free text
        alternate: String,
    },

    /// Print the editable management view
    Show,

    /// Print the read-only batting order view
    Lineup,

    /// List the valid fielding positions
    Positions,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = RosterStore::new(&cli.file);
    let mut model = RosterModel::load(store)
        .with_context(|| format!("Failed to load roster from {}", cli.file.display()))?;

    match cli.command {
        Commands::Add { name, position } => {
            let position = parse_position(&position)?;
            model.add_player(&name, position)?;
            println!("Added {} ({})", name, position.display_name());
        }

        Commands::Remove { name } => {
            model.remove_player(&name)?;
            println!("Removed {}", name);
        }

        Commands::MoveUp { row } => {
            model.move_up(row_index(row)?)?;
            print_management_view(&model);
        }

        Commands::MoveDown { row } => {
            model.move_down(row_index(row)?)?;
            print_management_view(&model);
        }

        Commands::SetPosition { name, position } => {
            let position = parse_position(&position)?;
            model.set_position(&name, position)?;
            println!("{} now plays {}", name, position.display_name());
        }

        Commands::SetAlternate { name, alternate } => {
            model.set_alternate(&name, &alternate)?;
            if alternate.is_empty() {
                println!("Cleared alternate for {}", name);
            } else {
                println!("Alternate for {}: {}", name, alternate);
            }
        }

        Commands::Show => print_management_view(&model),

        Commands::Lineup => print_lineup(&model),

        Commands::Positions => {
            for position in Position::all() {
                println!("{:<3} {}", position.abbreviation(), position.display_name());
            }
        }
    }

    Ok(())
}

fn parse_position(raw: &str) -> Result<Position> {
    raw.parse::<Position>()
        .map_err(|err| anyhow!("{} (run `positions` to list valid values)", err))
}

/// Rows are numbered from 1 in both views; the model indexes from 0.
fn row_index(row: usize) -> Result<usize> {
    row.checked_sub(1).ok_or_else(|| anyhow!("Row numbers start at 1"))
}

fn print_management_view(model: &RosterModel) {
    if model.is_empty() {
        println!("Roster is empty");
        return;
    }

    for (i, player) in model.players().iter().enumerate() {
        println!(
            "{:>2}. {:<24} {:<16} {}",
            i + 1,
            player.name,
            player.position.display_name(),
            player.alternate
        );
    }
}

fn print_lineup(model: &RosterModel) {
    println!("Batting Order with Positions and Alternates");
    println!("---");

    for (i, player) in model.players().iter().enumerate() {
        println!("{}. {}", i + 1, player.name);
        if player.alternate.is_empty() {
            println!("   Position: {}", player.position.display_name());
        } else {
            println!(
                "   Position: {} | Alternate: {}",
                player.position.display_name(),
                player.alternate
            );
        }
        println!("---");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_index_is_one_based() {
        assert_eq!(row_index(1).unwrap(), 0);
        assert_eq!(row_index(9).unwrap(), 8);
        assert!(row_index(0).is_err());
    }

    #[test]
    fn test_parse_position_accepts_names_and_abbreviations() {
        assert_eq!(parse_position("Shortstop").unwrap(), Position::Shortstop);
        assert_eq!(parse_position("2b").unwrap(), Position::SecondBase);
        assert!(parse_position("Bench").is_err());
    }
}
