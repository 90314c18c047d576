//! Allotments written by student self-bookings
//!
//! Kept in the snapshot store under [`LEDGER_KEY`] so an administrator
//! session mounted later sees them. The student's own `Booking` is a
//! separate write; the two meet only on `(student_name, student_id)`.

use shared::error::AppResult;
use shared::models::Allotment;
use std::sync::Arc;

use super::RequestQueue;
use crate::storage::{LEDGER_KEY, SnapshotStore, StoreResult};

pub struct SharedLedger {
    store: Arc<dyn SnapshotStore>,
}

impl SharedLedger {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub fn entries(&self) -> StoreResult<Vec<Allotment>> {
        Ok(self.store.load(LEDGER_KEY)?.unwrap_or_default())
    }

    /// Append a self-booked allotment.
    ///
    /// Returns `false` without writing when the student already has a row.
    pub fn record_self_booking(&self, allotment: Allotment) -> AppResult<bool> {
        let mut ledger = RequestQueue::from_ledger(self.entries()?);
        if let Some(existing) = ledger.allotment_for(&allotment.student_name, &allotment.student_id) {
            tracing::debug!(
                student_id = %allotment.student_id,
                room_number = %existing.room_number,
                "Student already in shared ledger"
            );
            return Ok(false);
        }
        ledger.record_allotment(allotment)?;
        self.store.save(LEDGER_KEY, &ledger.ledger())?;
        Ok(true)
    }

    /// Copy stored allotments into `queue`; rows whose room number is taken are skipped
    pub fn merge_into(&self, queue: &mut RequestQueue) -> StoreResult<usize> {
        let mut merged = 0;
        for allotment in self.entries()? {
            match queue.record_allotment(allotment) {
                Ok(()) => merged += 1,
                Err(e) => tracing::warn!(error = %e, "Skipping shared allotment"),
            }
        }
        Ok(merged)
    }
}
