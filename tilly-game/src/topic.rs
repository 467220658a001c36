use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Puzzle category. Every room in the world is tied to one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    #[default]
    Alphabet,
    Numbers,
    Addition,
}

impl Topic {
    pub const ALL: [Self; 3] = [Self::Alphabet, Self::Numbers, Self::Addition];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphabet => "alphabet",
            Self::Numbers => "numbers",
            Self::Addition => "addition",
        }
    }

    /// Human-facing label used on badges and screens.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alphabet => "Alphabet",
            Self::Numbers => "Number",
            Self::Addition => "Addition",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphabet" => Ok(Self::Alphabet),
            "numbers" => Ok(Self::Numbers),
            "addition" => Ok(Self::Addition),
            _ => Err(()),
        }
    }
}

impl From<Topic> for String {
    fn from(value: Topic) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_round_trips_through_str() {
        for topic in Topic::ALL {
            assert_eq!(topic.as_str().parse::<Topic>(), Ok(topic));
        }
        assert!("geometry".parse::<Topic>().is_err());
    }
}
