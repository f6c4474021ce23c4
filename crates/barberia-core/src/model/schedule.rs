use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Day of week as the schedule endpoint numbers it: 1 = Monday … 7 = Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum DayOfWeek {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Wire number (1-7).
    pub fn number(self) -> u8 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::iter().find(|d| d.number() == n)
    }

    /// Accepts `1`-`7`, English names or three-letter prefixes, any case.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(n) = raw.parse::<u8>() {
            return Self::from_number(n);
        }
        let lower = raw.to_ascii_lowercase();
        if lower.len() < 3 {
            return None;
        }
        Self::iter().find(|d| d.to_string().to_ascii_lowercase().starts_with(&lower))
    }
}
