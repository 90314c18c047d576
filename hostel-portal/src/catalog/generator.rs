//! Deterministic catalog generation

use shared::models::{
    Block, CatalogRoomNumber, FLOORS_PER_BLOCK, Floor, HostelCategory, ROOMS_PER_FLOOR, Room,
    RoomType,
};

use super::Catalog;

/// Synthetic placeholder for rooms that are already taken
pub fn is_preoccupied(floor: u32, unit: u32) -> bool {
    (floor + unit) % 5 == 0
}

/// Generate the full layout for a hostel category.
///
/// Pure: the same category always yields an identical catalog.
pub fn generate(category: HostelCategory) -> Catalog {
    let blocks: Vec<Block> = category
        .blocks()
        .iter()
        .map(|info| Block {
            id: info.id,
            name: format!("Block {}: {}", info.id, info.name),
            floors: (1..=FLOORS_PER_BLOCK)
                .map(|floor| Floor {
                    number: floor,
                    name: format!("Floor {floor}"),
                    rooms: (1..=ROOMS_PER_FLOOR)
                        .map(|unit| {
                            let number = floor * 100 + unit;
                            Room {
                                number: CatalogRoomNumber::new(info.id, number),
                                room_type: RoomType::for_room_number(number),
                                occupied: is_preoccupied(floor, unit),
                            }
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    tracing::debug!(category = %category, blocks = blocks.len(), "Generated hostel catalog");
    Catalog::from_blocks(category, blocks)
}
