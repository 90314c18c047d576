//! Room request queue - 管理员端请求队列
//!
//! Pending booking requests plus the append-only allotment ledger.
//!
//! ```text
//! push/submit ─▶ pending ─┬─ accept(id)  ─▶ next_available_room ─▶ ledger
//!                         └─ decline(id) ─▶ dropped
//! ```
//!
//! Ledger numbers (`A-101`) follow their own scheme. A student who books
//! from the room grid lands here through [`SharedLedger`], keyed only by
//! student name and id.

mod error;
mod ledger;
mod numbering;
mod stats;

pub use error::*;
pub use ledger::SharedLedger;
pub use numbering::{block_prefix, next_available_room};
pub use stats::QueueStats;

use serde::Serialize;
use shared::models::{Allotment, BookingRequest, LedgerRoomNumber, RequestedRoomType};

/// Row of the administrator's students table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRow {
    pub student_name: String,
    pub student_id: String,
    pub room_number: LedgerRoomNumber,
    pub room_type: RequestedRoomType,
}

impl From<&Allotment> for StudentRow {
    fn from(a: &Allotment) -> Self {
        Self {
            student_name: a.student_name.clone(),
            student_id: a.student_id.clone(),
            room_number: a.room_number.clone(),
            room_type: a.room_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestQueue {
    pending: Vec<BookingRequest>,
    ledger: Vec<Allotment>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue seeded with the portal's demo requests and allotments
    pub fn with_demo_data() -> Self {
        let request = |id, name: &str, student_id: &str, requested: &str| BookingRequest {
            id,
            student_name: name.to_string(),
            student_id: student_id.to_string(),
            requested_type: RequestedRoomType::new(requested),
        };
        let allotment = |name: &str, student_id: &str, room: &str, room_type: &str| Allotment {
            student_name: name.to_string(),
            student_id: student_id.to_string(),
            room_number: LedgerRoomNumber::new(room),
            room_type: RequestedRoomType::new(room_type),
        };

        Self {
            pending: vec![
                request(1, "Rohan Sharma", "2025-CS-101", "AC Single"),
                request(2, "Priya Singh", "2025-EE-045", "Non-AC Double"),
                request(3, "Amit Patel", "2025-ME-089", "AC Double"),
                request(4, "Sneha Verma", "2025-CS-132", "Non-AC Single"),
            ],
            ledger: vec![
                allotment("Vikram Rathore", "2024-CS-012", "A-101", "AC Single"),
                allotment("Anjali Mehta", "2024-ME-033", "B-205", "Non-AC Double"),
            ],
        }
    }

    /// Queue with no pending requests over an existing ledger
    pub fn from_ledger(ledger: Vec<Allotment>) -> Self {
        Self {
            pending: Vec::new(),
            ledger,
        }
    }

    pub fn pending(&self) -> &[BookingRequest] {
        &self.pending
    }

    pub fn ledger(&self) -> &[Allotment] {
        &self.ledger
    }

    pub fn request(&self, id: u32) -> Option<&BookingRequest> {
        self.pending.iter().find(|r| r.id == id)
    }

    /// Append a request, rejecting an id that is already pending
    pub fn push(&mut self, request: BookingRequest) -> QueueResult<()> {
        if self.request(request.id).is_some() {
            tracing::warn!(request_id = request.id, "Duplicate request id rejected");
            return Err(QueueError::DuplicateRequest(request.id));
        }
        tracing::debug!(
            request_id = request.id,
            student_id = %request.student_id,
            requested_type = %request.requested_type,
            "Request queued"
        );
        self.pending.push(request);
        Ok(())
    }

    /// Queue a new request under the id after the highest pending one
    pub fn submit(
        &mut self,
        student_name: impl Into<String>,
        student_id: impl Into<String>,
        requested_type: RequestedRoomType,
    ) -> QueueResult<BookingRequest> {
        let id = self
            .pending
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(QueueError::RequestIdsExhausted)?;
        let request = BookingRequest {
            id,
            student_name: student_name.into(),
            student_id: student_id.into(),
            requested_type,
        };
        self.push(request.clone())?;
        Ok(request)
    }

    /// Accept a pending request and allot the next free ledger room.
    ///
    /// The request stays pending when no room number can be assigned.
    pub fn accept(&mut self, id: u32) -> QueueResult<Allotment> {
        let index = self.position(id)?;
        let room_number = self.next_available_room(&self.pending[index].requested_type)?;
        let request = self.pending.remove(index);
        let allotment = Allotment {
            student_name: request.student_name,
            student_id: request.student_id,
            room_number,
            room_type: request.requested_type,
        };
        tracing::info!(
            request_id = id,
            student_id = %allotment.student_id,
            room_number = %allotment.room_number,
            "Request accepted"
        );
        self.ledger.push(allotment.clone());
        Ok(allotment)
    }

    pub fn decline(&mut self, id: u32) -> QueueResult<BookingRequest> {
        let index = self.position(id)?;
        let request = self.pending.remove(index);
        tracing::info!(
            request_id = id,
            student_id = %request.student_id,
            "Request declined"
        );
        Ok(request)
    }

    /// Write an allotment straight into the ledger
    pub fn record_allotment(&mut self, allotment: Allotment) -> QueueResult<()> {
        if self.ledger.iter().any(|a| a.room_number == allotment.room_number) {
            tracing::warn!(room_number = %allotment.room_number, "Room already allotted");
            return Err(QueueError::RoomAlreadyAllotted(allotment.room_number));
        }
        tracing::info!(
            student_id = %allotment.student_id,
            room_number = %allotment.room_number,
            "Allotment recorded"
        );
        self.ledger.push(allotment);
        Ok(())
    }

    pub fn next_available_room(&self, requested: &RequestedRoomType) -> QueueResult<LedgerRoomNumber> {
        next_available_room(&self.ledger, requested)
    }

    /// Ledger row for a student, matched on name and id
    pub fn allotment_for(&self, student_name: &str, student_id: &str) -> Option<&Allotment> {
        self.ledger
            .iter()
            .find(|a| a.student_name == student_name && a.student_id == student_id)
    }

    pub fn students(&self) -> Vec<StudentRow> {
        self.ledger.iter().map(StudentRow::from).collect()
    }

    pub fn stats(&self, total_rooms: usize) -> QueueStats {
        QueueStats::compute(total_rooms, self.ledger.len(), self.pending.len())
    }

    fn position(&self, id: u32) -> QueueResult<usize> {
        self.pending.iter().position(|r| r.id == id).ok_or_else(|| {
            tracing::warn!(request_id = id, "Request not found");
            QueueError::RequestNotFound(id)
        })
    }
}
