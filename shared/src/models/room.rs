//! Room Model (student-side catalog)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Room category offered in the generated catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    AcSingle,
    AcDouble,
    NonAcSingle,
    NonAcDouble,
}

impl RoomType {
    /// Assignment table, indexed by `room_number % 4`
    pub const TABLE: [RoomType; 4] = [
        RoomType::AcSingle,
        RoomType::AcDouble,
        RoomType::NonAcSingle,
        RoomType::NonAcDouble,
    ];

    /// Type of the room with the given `floor * 100 + unit` number
    pub fn for_room_number(number: u32) -> Self {
        Self::TABLE[(number % Self::TABLE.len() as u32) as usize]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::AcSingle => "ac-single",
            Self::AcDouble => "ac-double",
            Self::NonAcSingle => "non-ac-single",
            Self::NonAcDouble => "non-ac-double",
        }
    }

    /// Display label shown in tooltips and booking cards.
    ///
    /// The first `-` becomes a space and every word is capitalised, so
    /// `non-ac-single` reads `Non Ac-Single`.
    pub fn label(&self) -> String {
        title_case(&self.slug().replacen('-', " ", 1))
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown room type: {0}")]
pub struct ParseRoomTypeError(pub String);

impl FromStr for RoomType {
    type Err = ParseRoomTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TABLE
            .into_iter()
            .find(|t| t.slug() == s)
            .ok_or_else(|| ParseRoomTypeError(s.to_string()))
    }
}

/// Room number inside a generated catalog: block letter plus `floor * 100 + unit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CatalogRoomNumber {
    pub block: char,
    pub number: u32,
}

impl CatalogRoomNumber {
    pub fn new(block: char, number: u32) -> Self {
        Self { block, number }
    }

    pub fn floor(&self) -> u32 {
        self.number / 100
    }

    pub fn unit(&self) -> u32 {
        self.number % 100
    }
}

impl fmt::Display for CatalogRoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.block, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed room number: {0}")]
pub struct ParseRoomNumberError(pub String);

impl FromStr for CatalogRoomNumber {
    type Err = ParseRoomNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRoomNumberError(s.to_string());
        let (block, number) = s.split_once('-').ok_or_else(err)?;
        let mut chars = block.chars();
        let block = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => c,
            _ => return Err(err()),
        };
        let number = number.parse().map_err(|_| err())?;
        Ok(Self { block, number })
    }
}

impl From<CatalogRoomNumber> for String {
    fn from(n: CatalogRoomNumber) -> Self {
        n.to_string()
    }
}

impl TryFrom<String> for CatalogRoomNumber {
    type Error = ParseRoomNumberError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Room entity (catalog leaf)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: CatalogRoomNumber,
    pub room_type: RoomType,
    pub occupied: bool,
}

/// Room-type filter applied when rendering the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RoomFilter {
    #[default]
    All,
    Only(RoomType),
}

impl RoomFilter {
    pub fn matches(&self, room_type: RoomType) -> bool {
        match self {
            Self::All => true,
            Self::Only(t) => *t == room_type,
        }
    }
}

impl fmt::Display for RoomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(t) => f.write_str(t.slug()),
        }
    }
}

impl FromStr for RoomFilter {
    type Err = ParseRoomTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<RoomFilter> for String {
    fn from(f: RoomFilter) -> Self {
        f.to_string()
    }
}

impl TryFrom<String> for RoomFilter {
    type Error = ParseRoomTypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_follows_modulo_four() {
        assert_eq!(RoomType::for_room_number(100), RoomType::AcSingle);
        assert_eq!(RoomType::for_room_number(101), RoomType::AcDouble);
        assert_eq!(RoomType::for_room_number(102), RoomType::NonAcSingle);
        assert_eq!(RoomType::for_room_number(103), RoomType::NonAcDouble);
        assert_eq!(RoomType::for_room_number(710), RoomType::NonAcSingle);
    }

    #[test]
    fn labels_follow_portal_rule() {
        assert_eq!(RoomType::AcSingle.label(), "Ac Single");
        assert_eq!(RoomType::AcDouble.label(), "Ac Double");
        assert_eq!(RoomType::NonAcSingle.label(), "Non Ac-Single");
        assert_eq!(RoomType::NonAcDouble.label(), "Non Ac-Double");
    }

    #[test]
    fn room_type_slugs_parse_back() {
        for t in RoomType::TABLE {
            assert_eq!(t.slug().parse::<RoomType>(), Ok(t));
            assert_eq!(serde_json::to_value(t).unwrap(), t.slug());
        }
        assert!("deluxe".parse::<RoomType>().is_err());
    }

    #[test]
    fn catalog_room_number_parsing() {
        let n: CatalogRoomNumber = "C-507".parse().unwrap();
        assert_eq!(n, CatalogRoomNumber::new('C', 507));
        assert_eq!(n.floor(), 5);
        assert_eq!(n.unit(), 7);
        assert_eq!(n.to_string(), "C-507");

        assert!("C507".parse::<CatalogRoomNumber>().is_err());
        assert!("CC-507".parse::<CatalogRoomNumber>().is_err());
        assert!("c-507".parse::<CatalogRoomNumber>().is_err());
        assert!("C-5x7".parse::<CatalogRoomNumber>().is_err());
    }

    #[test]
    fn catalog_room_number_serializes_as_string() {
        let json = serde_json::to_string(&CatalogRoomNumber::new('F', 310)).unwrap();
        assert_eq!(json, "\"F-310\"");
        let back: CatalogRoomNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CatalogRoomNumber::new('F', 310));
    }

    #[test]
    fn filter_parsing_and_matching() {
        assert_eq!("all".parse::<RoomFilter>(), Ok(RoomFilter::All));
        let f: RoomFilter = "ac-double".parse().unwrap();
        assert_eq!(f, RoomFilter::Only(RoomType::AcDouble));
        assert!(f.matches(RoomType::AcDouble));
        assert!(!f.matches(RoomType::AcSingle));
        assert!(RoomFilter::All.matches(RoomType::NonAcDouble));
    }
}
