//! Student dashboard
//!
//! Owns the student's [`BookingState`] and, once a hostel category has been
//! chosen, the generated [`Catalog`] for it.

use serde::Serialize;
use shared::error::AppError;
use shared::message::Notification;
use shared::models::{CatalogRoomNumber, HostelCategory, RoomFilter, RoomType, StudentProfile};

use super::{Render, View, ViewUpdate};
use crate::booking::{BookingError, BookingState};
use crate::catalog::{self, Catalog, RoomRef};

/// Profile card lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub student_id: String,
    pub course: String,
    pub email: String,
    pub phone: String,
}

impl From<&StudentProfile> for ProfileView {
    fn from(p: &StudentProfile) -> Self {
        Self {
            name: p.name.clone(),
            student_id: format!("Student ID: {}", p.student_id),
            course: format!("Course: {}", p.course),
            email: p.email.clone(),
            phone: p.phone.clone(),
        }
    }
}

pub struct StudentDashboard {
    booking: BookingState,
    catalog: Option<Catalog>,
    filter: RoomFilter,
    view: View,
    /// Room awaiting confirmation
    selection: Option<RoomRef>,
}

impl StudentDashboard {
    pub fn new(profile: StudentProfile) -> Self {
        Self {
            booking: BookingState::new(profile),
            catalog: None,
            filter: RoomFilter::All,
            view: View::Profile,
            selection: None,
        }
    }

    pub fn booking(&self) -> &BookingState {
        &self.booking
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Re-render the current section
    pub fn render(&self) -> Render {
        match self.view {
            View::BookRoom => Render::BookRoom,
            View::RoomAllotment => match &self.catalog {
                Some(catalog) => Render::RoomSelection(catalog.filter_by_type(self.filter)),
                None => Render::BookRoom,
            },
            View::BookingDetails => Render::BookingDetails(self.booking.current_view()),
            _ => Render::Profile(ProfileView::from(self.booking.profile())),
        }
    }

    fn show(&mut self, view: View) -> ViewUpdate {
        self.view = view;
        ViewUpdate::render(self.render())
    }

    fn already_booked(&mut self) -> ViewUpdate {
        self.show(View::BookingDetails)
            .notify(Notification::warning(BookingError::AlreadyBooked.to_string()))
    }

    pub fn select_hostel_type(&mut self, hostel: HostelCategory) -> ViewUpdate {
        if self.booking.has_booking() {
            return self.already_booked();
        }
        tracing::debug!(hostel = %hostel, "Generating room catalog");
        self.catalog = Some(catalog::generate(hostel));
        self.selection = None;
        self.show(View::RoomAllotment)
    }

    pub fn submit_room_request(&mut self, hostel: HostelCategory, room_type: RoomType) -> ViewUpdate {
        match self.booking.submit_request(hostel, room_type) {
            Ok(_) => self
                .show(View::BookingDetails)
                .notify(Notification::success("Room request submitted successfully!")),
            Err(BookingError::AlreadyBooked) => self.already_booked(),
            Err(e) => ViewUpdate::unchanged().notify(AppError::from(e).into()),
        }
    }

    pub fn filter_room_type(&mut self, filter: RoomFilter) -> ViewUpdate {
        self.filter = filter;
        if self.view == View::RoomAllotment && self.catalog.is_some() {
            ViewUpdate::render(self.render())
        } else {
            ViewUpdate::unchanged()
        }
    }

    /// Clicks on occupied, dimmed or unknown rooms are ignored
    pub fn click_room(&mut self, number: CatalogRoomNumber) -> ViewUpdate {
        let Some(catalog) = &self.catalog else {
            return ViewUpdate::unchanged();
        };
        let view = catalog.filter_by_type(self.filter);
        let Some(room) = view.room(&number).filter(|r| r.selectable) else {
            tracing::debug!(room_number = %number, "Ignoring click on unavailable room");
            return ViewUpdate::unchanged();
        };

        let message = format!(
            "Book Room {} ({})?\n\nThis action cannot be undone.",
            room.number,
            room.room_type.label()
        );
        match catalog.select_room(&number) {
            Ok(selected) => {
                self.selection = Some(selected);
                ViewUpdate::render(Render::ConfirmPrompt {
                    room_number: number,
                    message,
                })
            }
            Err(e) => ViewUpdate::unchanged().notify(AppError::from(e).into()),
        }
    }

    pub fn confirm_booking(&mut self) -> ViewUpdate {
        let (Some(room), Some(catalog)) = (self.selection.take(), self.catalog.as_mut()) else {
            return ViewUpdate::unchanged();
        };
        match self.booking.submit_booking(catalog, room) {
            Ok(_) => self
                .show(View::BookingDetails)
                .notify(Notification::success("Room booked successfully!")),
            Err(BookingError::AlreadyBooked) => self.already_booked(),
            Err(e) => ViewUpdate::render(self.render()).notify(AppError::from(e).into()),
        }
    }

    pub fn switch_view(&mut self, view: View) -> ViewUpdate {
        match view {
            View::Profile | View::BookRoom | View::RoomAllotment | View::BookingDetails => {
                self.show(view)
            }
            View::Dashboard | View::Students => {
                tracing::warn!(view = ?view, "Student dashboard has no such view");
                ViewUpdate::unchanged()
            }
        }
    }
}
