use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical skill tiers. Older saves and UI copy spelled these
/// `explorer/adventurer/champion`; `FromStr` accepts both spellings and the
/// display labels keep the kid-facing names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Novice,
    #[default]
    Scholar,
    Master,
    /// Distinguished tier reserved for the single post-win bonus puzzle.
    Bonus,
}

impl Difficulty {
    /// Tiers a player can pick on the welcome screen. `Bonus` is reachable
    /// only by bumping.
    pub const SELECTABLE: [Self; 3] = [Self::Novice, Self::Scholar, Self::Master];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Scholar => "scholar",
            Self::Master => "master",
            Self::Bonus => "bonus",
        }
    }

    /// Kid-facing label shown on the difficulty tiles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Novice => "Explorer",
            Self::Scholar => "Adventurer",
            Self::Master => "Champion",
            Self::Bonus => "Bonus",
        }
    }

    #[must_use]
    pub const fn age_band(self) -> &'static str {
        match self {
            Self::Novice => "Ages 3-4",
            Self::Scholar => "Ages 5-6",
            Self::Master => "Ages 7-10",
            Self::Bonus => "Extra challenge",
        }
    }

    /// Next tier up, capped at `Bonus`. Used when offering the bonus puzzle.
    #[must_use]
    pub const fn bumped(self) -> Self {
        match self {
            Self::Novice => Self::Scholar,
            Self::Scholar => Self::Master,
            Self::Master | Self::Bonus => Self::Bonus,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "novice" | "explorer" => Ok(Self::Novice),
            "scholar" | "adventurer" => Ok(Self::Scholar),
            "master" | "champion" => Ok(Self::Master),
            "bonus" => Ok(Self::Bonus),
            _ => Err(()),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}
