//! Student booking state
//!
//! Holds zero or one [`Booking`] for the session. Two flows create one and
//! they never converge:
//!
//! - direct booking from the room grid → `Confirmed` immediately
//! - hostel-selection request → `Pending`, with no room number

mod error;
pub use error::*;

use chrono::Utc;
use serde::Serialize;
use shared::models::{
    Allotment, Booking, BookingStatus, CatalogRoomNumber, HostelCategory, LedgerRoomNumber,
    RequestedRoomType, RoomType, StudentProfile,
};

use crate::catalog::{Catalog, RoomRef};

/// Booking-details projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingView {
    NoBooking,
    Pending {},
    Confirmed {
        room_number: CatalogRoomNumber,
        room_type: RoomType,
        room_type_label: String,
        student_name: String,
        student_id: String,
    },
}

#[derive(Debug, Clone)]
pub struct BookingState {
    profile: StudentProfile,
    booking: Option<Booking>,
}

impl BookingState {
    pub fn new(profile: StudentProfile) -> Self {
        Self {
            profile,
            booking: None,
        }
    }

    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    pub fn has_booking(&self) -> bool {
        self.booking.is_some()
    }

    /// Book a room picked from the grid.
    ///
    /// Fails with `AlreadyBooked` if any booking exists, leaving both the
    /// booking and the catalog untouched. On success the room is marked
    /// occupied in `catalog`.
    pub fn submit_booking(
        &mut self,
        catalog: &mut Catalog,
        room: RoomRef,
    ) -> BookingResult<Booking> {
        if self.booking.is_some() {
            tracing::warn!(
                student_id = %self.profile.student_id,
                room_number = %room.number,
                "Booking rejected: student already holds a booking"
            );
            return Err(BookingError::AlreadyBooked);
        }

        catalog.mark_occupied(&room.number)?;

        let booking = Booking {
            room_number: Some(room.number),
            room_type: room.room_type,
            hostel: room.hostel,
            status: BookingStatus::Confirmed,
            booked_at: Utc::now(),
        };
        tracing::info!(
            student_id = %self.profile.student_id,
            room_number = %room.number,
            room_type = %room.room_type,
            "Room booked"
        );
        self.booking = Some(booking.clone());
        Ok(booking)
    }

    /// Submit a hostel-selection request, recorded as `Pending`
    pub fn submit_request(
        &mut self,
        hostel: HostelCategory,
        room_type: RoomType,
    ) -> BookingResult<Booking> {
        if self.booking.is_some() {
            tracing::warn!(
                student_id = %self.profile.student_id,
                "Request rejected: student already holds a booking"
            );
            return Err(BookingError::AlreadyBooked);
        }

        let booking = Booking {
            room_number: None,
            room_type,
            hostel,
            status: BookingStatus::Pending,
            booked_at: Utc::now(),
        };
        tracing::info!(
            student_id = %self.profile.student_id,
            hostel = %hostel,
            room_type = %room_type,
            "Room request submitted"
        );
        self.booking = Some(booking.clone());
        Ok(booking)
    }

    /// Ledger row for a confirmed booking; the catalog number is copied as text
    pub fn allotment(&self) -> Option<Allotment> {
        let booking = self.booking.as_ref()?;
        let room_number = booking.room_number.filter(|_| booking.status == BookingStatus::Confirmed)?;
        Some(Allotment {
            student_name: self.profile.name.clone(),
            student_id: self.profile.student_id.clone(),
            room_number: LedgerRoomNumber::new(room_number.to_string()),
            room_type: RequestedRoomType::new(booking.room_type.label()),
        })
    }

    pub fn current_view(&self) -> BookingView {
        match &self.booking {
            None => BookingView::NoBooking,
            Some(b) => match (b.status, b.room_number) {
                (BookingStatus::Confirmed, Some(room_number)) => BookingView::Confirmed {
                    room_number,
                    room_type: b.room_type,
                    room_type_label: b.room_type.label(),
                    student_name: self.profile.name.clone(),
                    student_id: self.profile.student_id.clone(),
                },
                _ => BookingView::Pending {},
            },
        }
    }
}
