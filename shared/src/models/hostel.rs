//! Hostel layout model: category → blocks → floors → rooms

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::room::Room;

/// Floors generated per block
pub const FLOORS_PER_BLOCK: u32 = 7;

/// Rooms generated per floor
pub const ROOMS_PER_FLOOR: u32 = 10;

/// Hostel category chosen on the hostel-selection form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostelCategory {
    Boys,
    Girls,
}

/// Static block descriptor (letter + name)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInfo {
    pub id: char,
    pub name: &'static str,
}

const BOYS_BLOCKS: [BlockInfo; 5] = [
    BlockInfo { id: 'A', name: "Aravali" },
    BlockInfo { id: 'B', name: "Vindhya" },
    BlockInfo { id: 'C', name: "Nilgiri" },
    BlockInfo { id: 'D', name: "Shivalik" },
    BlockInfo { id: 'E', name: "Himalaya" },
];

const GIRLS_BLOCKS: [BlockInfo; 5] = [
    BlockInfo { id: 'F', name: "Ganga" },
    BlockInfo { id: 'G', name: "Yamuna" },
    BlockInfo { id: 'H', name: "Saraswati" },
    BlockInfo { id: 'I', name: "Kaveri" },
    BlockInfo { id: 'J', name: "Godavari" },
];

impl HostelCategory {
    /// Ordered blocks belonging to this category
    pub fn blocks(&self) -> &'static [BlockInfo] {
        match self {
            Self::Boys => &BOYS_BLOCKS,
            Self::Girls => &GIRLS_BLOCKS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boys => "boys",
            Self::Girls => "girls",
        }
    }
}

impl fmt::Display for HostelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hostel category: {0}")]
pub struct ParseHostelCategoryError(pub String);

impl FromStr for HostelCategory {
    type Err = ParseHostelCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boys" => Ok(Self::Boys),
            "girls" => Ok(Self::Girls),
            other => Err(ParseHostelCategoryError(other.to_string())),
        }
    }
}

/// Floor entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub number: u32,
    /// Display name, e.g. "Floor 3"
    pub name: String,
    pub rooms: Vec<Room>,
}

/// Block entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: char,
    /// Display name, e.g. "Block A: Aravali"
    pub name: String,
    pub floors: Vec<Floor>,
}
