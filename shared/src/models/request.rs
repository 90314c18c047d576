//! Administrator-side models: pending requests and the allotment ledger

use serde::{Deserialize, Serialize};
use std::fmt;

/// Room type as typed by the student in a request ("AC Single", "Non-AC Double", ...)
///
/// Free display text, unrelated to the catalog's [`RoomType`](super::RoomType).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestedRoomType(pub String);

impl RequestedRoomType {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the display text mentions "AC" anywhere (`"Non-AC Double"` does)
    pub fn mentions_ac(&self) -> bool {
        self.0.contains("AC")
    }
}

impl fmt::Display for RequestedRoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room number recorded in the allotment ledger, e.g. "A-103"
///
/// Kept as text: ledger entries may come from outside the numbering rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerRoomNumber(String);

impl LedgerRoomNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn from_parts(prefix: char, suffix: u32) -> Self {
        Self(format!("{prefix}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_prefix(&self, prefix: char) -> bool {
        self.0.starts_with(prefix)
    }

    /// Leading digits of the segment after the first `-`, if any
    ///
    /// A digit run too large for `u32` yields `None`, so such an entry takes
    /// no part in numbering.
    pub fn suffix(&self) -> Option<u32> {
        let segment = self.0.split('-').nth(1)?;
        let end = segment
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(segment.len());
        segment[..end].parse().ok()
    }
}

impl fmt::Display for LedgerRoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pending room request awaiting administrator action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: u32,
    pub student_name: String,
    pub student_id: String,
    pub requested_type: RequestedRoomType,
}

/// Confirmed room assignment in the administrator's ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allotment {
    pub student_name: String,
    pub student_id: String,
    pub room_number: LedgerRoomNumber,
    pub room_type: RequestedRoomType,
}
