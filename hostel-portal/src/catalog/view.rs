//! Render projection of a catalog
//!
//! Rooms outside the selected type stay in the grid but are dimmed and
//! inert. Occupied rooms are never dimmed and never selectable.

use serde::Serialize;
use shared::models::{CatalogRoomNumber, HostelCategory, Room, RoomFilter, RoomType};

use super::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub category: HostelCategory,
    pub filter: RoomFilter,
    pub blocks: Vec<BlockView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub id: char,
    pub name: String,
    pub floors: Vec<FloorView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloorView {
    pub name: String,
    pub rooms: Vec<RoomView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    pub number: CatalogRoomNumber,
    /// Text inside the room circle (numeric part only)
    pub label: String,
    pub room_type: RoomType,
    pub occupied: bool,
    pub dimmed: bool,
    pub selectable: bool,
    pub title: String,
}

impl RoomView {
    fn project(room: &Room, filter: RoomFilter) -> Self {
        let dimmed = !room.occupied && !filter.matches(room.room_type);
        let title = if room.occupied {
            format!("Room {} (Occupied)", room.number)
        } else {
            format!("Room {} ({}) - Available", room.number, room.room_type.label())
        };
        Self {
            number: room.number,
            label: room.number.number.to_string(),
            room_type: room.room_type,
            occupied: room.occupied,
            dimmed,
            selectable: !room.occupied && !dimmed,
            title,
        }
    }
}

impl CatalogView {
    pub(super) fn project(catalog: &Catalog, filter: RoomFilter) -> Self {
        let blocks = catalog
            .blocks()
            .iter()
            .map(|block| BlockView {
                id: block.id,
                name: block.name.clone(),
                floors: block
                    .floors
                    .iter()
                    .map(|floor| FloorView {
                        name: floor.name.clone(),
                        rooms: floor
                            .rooms
                            .iter()
                            .map(|room| RoomView::project(room, filter))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            category: catalog.category(),
            filter,
            blocks,
        }
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomView> {
        self.blocks
            .iter()
            .flat_map(|b| b.floors.iter())
            .flat_map(|f| f.rooms.iter())
    }

    pub fn room(&self, number: &CatalogRoomNumber) -> Option<&RoomView> {
        self.rooms().find(|r| r.number == *number)
    }
}
