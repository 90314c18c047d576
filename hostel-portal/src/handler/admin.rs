//! Administrator dashboard

use serde::Serialize;
use shared::error::AppError;
use shared::message::Notification;
use shared::models::{Allotment, BookingRequest};

use super::{Render, View, ViewUpdate};
use crate::requests::{QueueStats, RequestQueue};

/// Stats cards plus the pending and allotted lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminDashboardView {
    pub stats: QueueStats,
    pub pending: Vec<BookingRequest>,
    pub allotted: Vec<Allotment>,
}

pub struct AdminDashboard {
    queue: RequestQueue,
    total_rooms: usize,
    view: View,
}

impl AdminDashboard {
    pub fn new(queue: RequestQueue, total_rooms: usize) -> Self {
        Self {
            queue,
            total_rooms,
            view: View::Dashboard,
        }
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn dashboard_view(&self) -> AdminDashboardView {
        AdminDashboardView {
            stats: self.queue.stats(self.total_rooms),
            pending: self.queue.pending().to_vec(),
            allotted: self.queue.ledger().to_vec(),
        }
    }

    pub fn render(&self) -> Render {
        match self.view {
            View::Students => Render::StudentsTable(self.queue.students()),
            _ => Render::AdminDashboard(self.dashboard_view()),
        }
    }

    pub fn accept(&mut self, id: u32) -> ViewUpdate {
        match self.queue.accept(id) {
            Ok(allotment) => ViewUpdate::render(self.render()).notify(Notification::success(format!(
                "Room {} allotted to {}",
                allotment.room_number, allotment.student_name
            ))),
            Err(e) => ViewUpdate::unchanged().notify(AppError::from(e).into()),
        }
    }

    pub fn decline(&mut self, id: u32) -> ViewUpdate {
        match self.queue.decline(id) {
            Ok(request) => ViewUpdate::render(self.render()).notify(Notification::warning(format!(
                "Request from {} declined",
                request.student_name
            ))),
            Err(e) => ViewUpdate::unchanged().notify(AppError::from(e).into()),
        }
    }

    pub fn switch_view(&mut self, view: View) -> ViewUpdate {
        match view {
            View::Dashboard | View::Students => {
                self.view = view;
                ViewUpdate::render(self.render())
            }
            _ => {
                tracing::warn!(view = ?view, "Admin dashboard has no such view");
                ViewUpdate::unchanged()
            }
        }
    }
}
