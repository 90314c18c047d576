use super::*;
use shared::models::{FLOORS_PER_BLOCK, ROOMS_PER_FLOOR};

fn room_no(s: &str) -> CatalogRoomNumber {
    s.parse().unwrap()
}

// ========================================================================
// Generation
// ========================================================================

#[test]
fn test_generate_is_deterministic() {
    assert_eq!(generate(HostelCategory::Boys), generate(HostelCategory::Boys));
    assert_eq!(generate(HostelCategory::Girls), generate(HostelCategory::Girls));
    assert_ne!(generate(HostelCategory::Boys), generate(HostelCategory::Girls));
}

#[test]
fn test_generate_shape() {
    let catalog = generate(HostelCategory::Girls);
    assert_eq!(catalog.category(), HostelCategory::Girls);
    assert_eq!(catalog.blocks().len(), 5);
    assert_eq!(catalog.blocks()[0].name, "Block F: Ganga");
    assert_eq!(catalog.blocks()[4].name, "Block J: Godavari");

    for block in catalog.blocks() {
        assert_eq!(block.floors.len(), FLOORS_PER_BLOCK as usize);
        for (i, floor) in block.floors.iter().enumerate() {
            assert_eq!(floor.name, format!("Floor {}", i + 1));
            assert_eq!(floor.rooms.len(), ROOMS_PER_FLOOR as usize);
        }
    }
    assert_eq!(catalog.room_count(), 350);
}

#[test]
fn test_room_numbers_unique() {
    let catalog = generate(HostelCategory::Boys);
    let mut numbers: Vec<_> = catalog.rooms().map(|r| r.number).collect();
    let total = numbers.len();
    numbers.sort();
    numbers.dedup();
    assert_eq!(numbers.len(), total);
}

#[test]
fn test_room_type_mapping() {
    let catalog = generate(HostelCategory::Boys);
    for room in catalog.rooms() {
        let expected = RoomType::TABLE[(room.number.number % 4) as usize];
        assert_eq!(room.room_type, expected, "room {}", room.number);
    }
    assert_eq!(catalog.room(&room_no("A-101")).unwrap().room_type, RoomType::AcDouble);
    assert_eq!(catalog.room(&room_no("A-104")).unwrap().room_type, RoomType::AcSingle);
    assert_eq!(catalog.room(&room_no("E-710")).unwrap().room_type, RoomType::NonAcSingle);
}

#[test]
fn test_occupancy_rule() {
    let catalog = generate(HostelCategory::Boys);
    for block in catalog.blocks() {
        for floor in 1..=7u32 {
            for unit in 1..=10u32 {
                let number = CatalogRoomNumber::new(block.id, floor * 100 + unit);
                let room = catalog.room(&number).unwrap();
                assert_eq!(room.occupied, (floor + unit) % 5 == 0, "room {}", number);
            }
        }
    }
    // Two units per floor satisfy the rule
    assert_eq!(catalog.occupied_count(), 5 * 7 * 2);
}

// ========================================================================
// Selection
// ========================================================================

#[test]
fn test_select_available_room() {
    let catalog = generate(HostelCategory::Boys);
    let room = catalog.select_room(&room_no("B-303")).unwrap();
    assert_eq!(room.number, room_no("B-303"));
    assert_eq!(room.room_type, RoomType::NonAcDouble);
    assert_eq!(room.hostel, HostelCategory::Boys);
}

#[test]
fn test_select_rejects_occupied_without_mutation() {
    let catalog = generate(HostelCategory::Boys);
    let before = catalog.clone();
    for room in before.rooms().filter(|r| r.occupied) {
        assert_eq!(
            catalog.select_room(&room.number),
            Err(SelectionError::AlreadyOccupied(room.number))
        );
    }
    assert_eq!(catalog, before);
}

#[test]
fn test_select_unknown_room() {
    let catalog = generate(HostelCategory::Boys);
    // Girls' block letter in a boys' catalog
    assert_eq!(
        catalog.select_room(&room_no("F-101")),
        Err(SelectionError::NotFound(room_no("F-101")))
    );
    assert_eq!(
        catalog.select_room(&room_no("A-811")),
        Err(SelectionError::NotFound(room_no("A-811")))
    );
    assert_eq!(
        catalog.select_room(&room_no("A-111")),
        Err(SelectionError::NotFound(room_no("A-111")))
    );
}

#[test]
fn test_mark_occupied() {
    let mut catalog = generate(HostelCategory::Boys);
    let number = room_no("C-101");
    catalog.mark_occupied(&number).unwrap();
    assert!(catalog.room(&number).unwrap().occupied);
    assert_eq!(
        catalog.select_room(&number),
        Err(SelectionError::AlreadyOccupied(number))
    );
    assert_eq!(
        catalog.mark_occupied(&number),
        Err(SelectionError::AlreadyOccupied(number))
    );
}

#[test]
fn test_selection_error_into_app_error() {
    let err: shared::AppError = SelectionError::AlreadyOccupied(room_no("A-104")).into();
    assert_eq!(err.code, shared::ErrorCode::RoomOccupied);
    assert_eq!(err.message, "Room A-104 is already occupied");
}

// ========================================================================
// Filtering
// ========================================================================

#[test]
fn test_filter_all_dims_nothing() {
    let view = generate(HostelCategory::Boys).filter_by_type(RoomFilter::All);
    assert!(view.rooms().all(|r| !r.dimmed));
    assert_eq!(view.rooms().filter(|r| r.selectable).count(), 350 - 70);
}

#[test]
fn test_filter_dims_other_types_but_keeps_them() {
    let catalog = generate(HostelCategory::Boys);
    let view = catalog.filter_by_type(RoomFilter::Only(RoomType::AcSingle));
    assert_eq!(view.rooms().count(), catalog.room_count());

    for room in view.rooms() {
        if room.occupied {
            assert!(!room.dimmed);
            assert!(!room.selectable);
        } else if room.room_type == RoomType::AcSingle {
            assert!(!room.dimmed);
            assert!(room.selectable);
        } else {
            assert!(room.dimmed);
            assert!(!room.selectable);
        }
    }
}

#[test]
fn test_room_view_titles_and_labels() {
    let view = generate(HostelCategory::Boys).filter_by_type(RoomFilter::All);
    let free = view.room(&room_no("A-101")).unwrap();
    assert_eq!(free.label, "101");
    assert_eq!(free.title, "Room A-101 (Ac Double) - Available");

    let taken = view.room(&room_no("A-104")).unwrap();
    assert!(taken.occupied);
    assert_eq!(taken.title, "Room A-104 (Occupied)");
}
