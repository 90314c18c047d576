//! Allocation catalog - 学生端房间目录
//!
//! A catalog is the generated block/floor/room tree for one hostel
//! category. Generation is a pure function of the category; the only
//! mutation afterwards is flipping `occupied` when a student books a room.
//!
//! # Flow
//!
//! ```text
//! generate(category) ─▶ Catalog ─┬─ filter_by_type(filter) ─▶ CatalogView (render)
//!                                └─ select_room(number)    ─▶ RoomRef ─▶ BookingState
//! ```

mod error;
mod generator;
mod view;

pub use error::*;
pub use generator::{generate, is_preoccupied};
pub use view::*;

use serde::Serialize;
use shared::models::{Block, CatalogRoomNumber, HostelCategory, Room, RoomFilter, RoomType};

/// Generated hostel layout for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    category: HostelCategory,
    blocks: Vec<Block>,
}

/// Selected room, detached from the catalog so it can outlive a borrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomRef {
    pub number: CatalogRoomNumber,
    pub room_type: RoomType,
    pub hostel: HostelCategory,
}

impl Catalog {
    pub(crate) fn from_blocks(category: HostelCategory, blocks: Vec<Block>) -> Self {
        Self { category, blocks }
    }

    pub fn category(&self) -> HostelCategory {
        self.category
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All rooms in block, floor, unit order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.blocks
            .iter()
            .flat_map(|b| b.floors.iter())
            .flat_map(|f| f.rooms.iter())
    }

    pub fn room_count(&self) -> usize {
        self.rooms().count()
    }

    pub fn occupied_count(&self) -> usize {
        self.rooms().filter(|r| r.occupied).count()
    }

    pub fn room(&self, number: &CatalogRoomNumber) -> Option<&Room> {
        self.blocks
            .iter()
            .find(|b| b.id == number.block)?
            .floors
            .iter()
            .find(|f| f.number == number.floor())?
            .rooms
            .iter()
            .find(|r| r.number == *number)
    }

    fn room_mut(&mut self, number: &CatalogRoomNumber) -> Option<&mut Room> {
        self.blocks
            .iter_mut()
            .find(|b| b.id == number.block)?
            .floors
            .iter_mut()
            .find(|f| f.number == number.floor())?
            .rooms
            .iter_mut()
            .find(|r| r.number == *number)
    }

    /// Resolve a room number into a bookable reference.
    ///
    /// Never mutates: the booking step owns the `occupied` flip.
    pub fn select_room(&self, number: &CatalogRoomNumber) -> SelectionResult<RoomRef> {
        let room = self
            .room(number)
            .ok_or(SelectionError::NotFound(*number))?;
        if room.occupied {
            return Err(SelectionError::AlreadyOccupied(*number));
        }
        Ok(RoomRef {
            number: room.number,
            room_type: room.room_type,
            hostel: self.category,
        })
    }

    /// Mark a room as taken. Called only by the booking step.
    pub(crate) fn mark_occupied(&mut self, number: &CatalogRoomNumber) -> SelectionResult<()> {
        let room = self
            .room_mut(number)
            .ok_or(SelectionError::NotFound(*number))?;
        if room.occupied {
            return Err(SelectionError::AlreadyOccupied(*number));
        }
        room.occupied = true;
        Ok(())
    }

    /// Render projection with rooms outside `filter` dimmed, not removed
    pub fn filter_by_type(&self, filter: RoomFilter) -> CatalogView {
        CatalogView::project(self, filter)
    }
}

#[cfg(test)]
mod tests;
