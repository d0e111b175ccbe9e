use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A named pickup/drop-off point on the fixed campus map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "PUP Main")]
    PupMain,
    #[serde(rename = "CEA")]
    Cea,
    #[serde(rename = "Hasmin")]
    Hasmin,
    #[serde(rename = "iTech")]
    ITech,
    #[serde(rename = "COC")]
    Coc,
    #[serde(rename = "PUP LHS")]
    PupLhs,
    #[serde(rename = "Condotel")]
    Condotel,
}

impl Location {
    /// Every location, in the order the booking screens list them.
    pub const ALL: [Location; 7] = [
        Location::PupMain,
        Location::Cea,
        Location::Hasmin,
        Location::ITech,
        Location::Coc,
        Location::PupLhs,
        Location::Condotel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Location::PupMain => "PUP Main",
            Location::Cea => "CEA",
            Location::Hasmin => "Hasmin",
            Location::ITech => "iTech",
            Location::Coc => "COC",
            Location::PupLhs => "PUP LHS",
            Location::Condotel => "Condotel",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Location {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .iter()
            .copied()
            .find(|loc| loc.name() == s)
            .ok_or_else(|| ParseNameError::new("location", s))
    }
}

/// Returned when a display name does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError {
    kind: &'static str,
    input: String,
}

impl ParseNameError {
    pub fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.input)
    }
}

impl Error for ParseNameError {}
