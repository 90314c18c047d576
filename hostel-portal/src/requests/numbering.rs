//! Ledger room numbering
//!
//! Allotted rooms are numbered `{prefix}-{n}`: prefix `A` for any requested
//! type whose text contains `AC` (which includes "Non-AC ..."), `C`
//! otherwise. `n` is one past the highest suffix already in the ledger under
//! that prefix, never below 101.

use shared::models::{Allotment, LedgerRoomNumber, RequestedRoomType};

use super::{QueueError, QueueResult};

const AC_PREFIX: char = 'A';
const NON_AC_PREFIX: char = 'C';
const SUFFIX_FLOOR: u32 = 100;

pub fn block_prefix(requested: &RequestedRoomType) -> char {
    if requested.mentions_ac() {
        AC_PREFIX
    } else {
        NON_AC_PREFIX
    }
}

/// Next ledger number for `requested`.
///
/// Entries whose suffix does not parse as an integer are skipped. Fails
/// with `RoomNumbersExhausted` once the highest suffix is `u32::MAX`.
pub fn next_available_room(
    ledger: &[Allotment],
    requested: &RequestedRoomType,
) -> QueueResult<LedgerRoomNumber> {
    let prefix = block_prefix(requested);
    let last = ledger
        .iter()
        .filter(|a| a.room_number.has_prefix(prefix))
        .filter_map(|a| a.room_number.suffix())
        .fold(SUFFIX_FLOOR, u32::max);
    let next = last
        .checked_add(1)
        .ok_or(QueueError::RoomNumbersExhausted(prefix))?;
    Ok(LedgerRoomNumber::from_parts(prefix, next))
}
