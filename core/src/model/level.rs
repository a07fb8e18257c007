use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Secondary-school stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stream {
    Express,
    Na,
    Nt,
    Ip,
}

impl Stream {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Express => "EXPRESS",
            Self::Na => "NA",
            Self::Nt => "NT",
            Self::Ip => "IP",
        }
    }

    fn from_upper(raw: &str) -> Option<Self> {
        match raw {
            "EXPRESS" => Some(Self::Express),
            "NA" => Some(Self::Na),
            "NT" => Some(Self::Nt),
            "IP" => Some(Self::Ip),
            _ => None,
        }
    }
}

fn level_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^S([1-5])\s+(EXPRESS|NA|NT|IP)$").expect("level pattern compiles")
    })
}

/// Year of study plus stream, e.g. `S3 EXPRESS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level {
    year: u8,
    stream: Stream,
}

impl Level {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Level should be S1 to S4 followed by a stream \
         (EXPRESS, NA, NT or IP), or S5 NA, e.g. S3 EXPRESS";

    pub fn is_valid(raw: &str) -> bool {
        Self::parse_parts(raw).is_some()
    }

    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let (year, stream) = Self::parse_parts(raw)
            .ok_or_else(|| ValidationError::new("level", Self::MESSAGE_CONSTRAINTS))?;
        Ok(Self { year, stream })
    }

    /// Canonical spelling of a valid level: upper case, single space.
    pub fn normalize(raw: &str) -> Option<String> {
        Self::new(raw).ok().map(|level| level.to_string())
    }

    fn parse_parts(raw: &str) -> Option<(u8, Stream)> {
        let caps = level_regex().captures(raw.trim())?;
        let year: u8 = caps[1].parse().ok()?;
        let stream = Stream::from_upper(&caps[2].to_uppercase())?;
        // Only the normal academic stream runs a fifth year.
        if year == 5 && stream != Stream::Na {
            return None;
        }
        Some((year, stream))
    }

    pub fn year(&self) -> u8 {
        self.year
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }

    pub fn is_upper_secondary(&self) -> bool {
        self.year >= 3
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{} {}", self.year, self.stream.as_str())
    }
}

impl TryFrom<String> for Level {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Level> for String {
    fn from(value: Level) -> Self {
        value.to_string()
    }
}
