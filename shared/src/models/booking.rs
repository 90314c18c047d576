//! Student booking model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hostel::HostelCategory;
use super::room::{CatalogRoomNumber, RoomType};

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Submitted through the hostel-selection form, awaiting review
    Pending,
    /// Booked directly from the room grid
    Confirmed,
}

/// A student's personal record of having claimed a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Absent while the booking is still a pending request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<CatalogRoomNumber>,
    pub room_type: RoomType,
    pub hostel: HostelCategory,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
}

/// Student profile shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub student_id: String,
    pub course: String,
    pub email: String,
    pub phone: String,
}

impl StudentProfile {
    /// Profile of the portal's demo student
    pub fn demo() -> Self {
        Self {
            name: "Rohan Sharma".to_string(),
            student_id: "2025-CS-101".to_string(),
            course: "B.Tech Computer Science".to_string(),
            email: "rohan.sharma@university.edu".to_string(),
            phone: "+91 98765 43210".to_string(),
        }
    }
}
