use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fielding position on a nine-player softball defense.
///
/// Serialized as the full display name ("First Base", not "1B") because the
/// roster document stores positions as the strings shown in the UI.
/// `Pitcher` is the default assigned when a loaded document has no position
/// entry for a player.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Pitcher,
    Catcher,
    #[serde(rename = "First Base")]
    FirstBase,
    #[serde(rename = "Second Base")]
    SecondBase,
    #[serde(rename = "Third Base")]
    ThirdBase,
    Shortstop,
    #[serde(rename = "Left Fielder")]
    LeftFielder,
    #[serde(rename = "Center Fielder")]
    CenterFielder,
    #[serde(rename = "Right Fielder")]
    RightFielder,
}

impl Position {
    /// All nine positions in defensive numbering order, for selection lists.
    pub fn all() -> [Position; 9] {
        [
            Position::Pitcher,
            Position::Catcher,
            Position::FirstBase,
            Position::SecondBase,
            Position::ThirdBase,
            Position::Shortstop,
            Position::LeftFielder,
            Position::CenterFielder,
            Position::RightFielder,
        ]
    }

    /// Get position display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Position::Pitcher => "Pitcher",
            Position::Catcher => "Catcher",
            Position::FirstBase => "First Base",
            Position::SecondBase => "Second Base",
            Position::ThirdBase => "Third Base",
            Position::Shortstop => "Shortstop",
            Position::LeftFielder => "Left Fielder",
            Position::CenterFielder => "Center Fielder",
            Position::RightFielder => "Right Fielder",
        }
    }

    /// Get position abbreviation for compact display
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::Pitcher => "P",
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftFielder => "LF",
            Position::CenterFielder => "CF",
            Position::RightFielder => "RF",
        }
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PITCHER" | "P" => Ok(Position::Pitcher),
            "CATCHER" | "C" => Ok(Position::Catcher),
            "FIRST BASE" | "1B" => Ok(Position::FirstBase),
            "SECOND BASE" | "2B" => Ok(Position::SecondBase),
            "THIRD BASE" | "3B" => Ok(Position::ThirdBase),
            "SHORTSTOP" | "SS" => Ok(Position::Shortstop),
            "LEFT FIELDER" | "LF" => Ok(Position::LeftFielder),
            "CENTER FIELDER" | "CF" => Ok(Position::CenterFielder),
            "RIGHT FIELDER" | "RF" => Ok(Position::RightFielder),
            _ => Err(format!("Invalid position: {}", s)),
        }
    }
}

/// One roster row in batting order: the shape the UI renders and the read
/// accessor returns. The name is the identity key, unique within the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    pub position: Position,
    /// Free text; empty string means no alternate.
    pub alternate: String,
}

// ============================================================================//
// Tests
// ============================================================================//
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_is_pitcher() {
        assert_eq!(Position::default(), Position::Pitcher);
    }

    #[test]
    fn all_lists_nine_distinct_positions() {
        let all = Position::all();
        assert_eq!(all.len(), 9);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn from_str_accepts_display_names_and_abbreviations() {
        assert_eq!("First Base".parse::<Position>().unwrap(), Position::FirstBase);
        assert_eq!("1B".parse::<Position>().unwrap(), Position::FirstBase);
        assert_eq!("shortstop".parse::<Position>().unwrap(), Position::Shortstop);
        assert_eq!("center fielder".parse::<Position>().unwrap(), Position::CenterFielder);
    }

    #[test]
    fn from_str_rejects_unknown_positions() {
        assert!("Designated Hitter".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn from_str_round_trips_every_display_name() {
        for position in Position::all() {
            assert_eq!(position.display_name().parse::<Position>().unwrap(), position);
            assert_eq!(position.abbreviation().parse::<Position>().unwrap(), position);
        }
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Position::LeftFielder).unwrap();
        assert_eq!(json, "\"Left Fielder\"");
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Position::LeftFielder);
    }
}
