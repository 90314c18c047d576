//! UI actions and view updates
//!
//! Every [`Action`] a page can raise produces one [`ViewUpdate`]: what to
//! render next plus the notifications to toast. Dashboards keep their own
//! state; [`crate::core::PortalSession`] routes actions to them.

pub mod admin;
pub mod student;

pub use admin::{AdminDashboard, AdminDashboardView};
pub use student::{ProfileView, StudentDashboard};

use serde::{Deserialize, Serialize};
use shared::message::Notification;
use shared::models::{CatalogRoomNumber, HostelCategory, RegistrationForm, RoomFilter, RoomType};

use crate::booking::BookingView;
use crate::catalog::CatalogView;
use crate::core::Route;
use crate::requests::StudentRow;
use crate::utils::validation::ValidationErrors;

/// Dashboard sections reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    // student
    Profile,
    BookRoom,
    RoomAllotment,
    BookingDetails,
    // admin
    Dashboard,
    Students,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum Action {
    Login { username: String, password: String },
    Register(RegistrationForm),
    Logout,
    /// Hostel-selection form submitted: open the room grid
    SelectHostelType(HostelCategory),
    /// Request a room type without picking a room
    SubmitRoomRequest {
        hostel: HostelCategory,
        room_type: RoomType,
    },
    FilterRoomType(RoomFilter),
    ClickRoom(CatalogRoomNumber),
    /// Answer "yes" to the last confirmation prompt
    ConfirmBooking,
    AcceptRequest(u32),
    DeclineRequest(u32),
    SwitchView(View),
}

impl Action {
    /// Action name for logging; payloads may carry credentials
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login { .. } => "login",
            Action::Register(_) => "register",
            Action::Logout => "logout",
            Action::SelectHostelType(_) => "select_hostel_type",
            Action::SubmitRoomRequest { .. } => "submit_room_request",
            Action::FilterRoomType(_) => "filter_room_type",
            Action::ClickRoom(_) => "click_room",
            Action::ConfirmBooking => "confirm_booking",
            Action::AcceptRequest(_) => "accept_request",
            Action::DeclineRequest(_) => "decline_request",
            Action::SwitchView(_) => "switch_view",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Render {
    Unchanged,
    Redirect(Route),
    LoginForm,
    RegistrationErrors(ValidationErrors),
    ConfirmPrompt {
        room_number: CatalogRoomNumber,
        message: String,
    },
    Profile(ProfileView),
    BookRoom,
    RoomSelection(CatalogView),
    BookingDetails(BookingView),
    AdminDashboard(AdminDashboardView),
    StudentsTable(Vec<StudentRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewUpdate {
    pub render: Render,
    pub notifications: Vec<Notification>,
}

impl ViewUpdate {
    pub fn render(render: Render) -> Self {
        Self {
            render,
            notifications: Vec::new(),
        }
    }

    pub fn unchanged() -> Self {
        Self::render(Render::Unchanged)
    }

    pub fn notify(mut self, notification: Notification) -> Self {
        self.notifications.push(notification);
        self
    }
}

impl From<Render> for ViewUpdate {
    fn from(render: Render) -> Self {
        Self::render(render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_format() {
        let action: Action = serde_json::from_value(serde_json::json!({
            "action": "click_room",
            "payload": "A-102"
        }))
        .unwrap();
        assert_eq!(action, Action::ClickRoom("A-102".parse().unwrap()));

        let action: Action = serde_json::from_value(serde_json::json!({
            "action": "submit_room_request",
            "payload": { "hostel": "girls", "room_type": "ac-double" }
        }))
        .unwrap();
        assert_eq!(
            action,
            Action::SubmitRoomRequest {
                hostel: HostelCategory::Girls,
                room_type: RoomType::AcDouble,
            }
        );

        let action: Action =
            serde_json::from_value(serde_json::json!({ "action": "logout" })).unwrap();
        assert_eq!(action, Action::Logout);
    }

    #[test]
    fn test_view_update_serialization() {
        let update = ViewUpdate::render(Render::Redirect(Route::Login))
            .notify(Notification::info("bye"));
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["render"]["kind"], "redirect");
        assert_eq!(json["render"]["data"], "login");
        assert_eq!(json["notifications"][0]["message"], "bye");
    }
}
