//! Portal session - 每个页面挂载一个会话
//!
//! A [`PortalSession`] is built for one page mount with the [`Route`] it was
//! mounted on. It owns the auth manager and, on a dashboard route, that
//! dashboard's state. Nothing here is global: two sessions never share
//! booking or queue state, only the snapshot store they were handed and the
//! self-booked allotments kept in it.
//!
//! Dashboard actions pass the same route guard as `mount`.

use shared::error::AppError;
use shared::message::Notification;
use shared::models::StudentProfile;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::{Config, Route};
use crate::auth::{AuthError, AuthManager};
use crate::handler::{Action, AdminDashboard, Render, StudentDashboard, ViewUpdate};
use crate::requests::{RequestQueue, SharedLedger};
use crate::storage::{SnapshotStore, StoreResult, open_store};

const NOTIFICATION_CHANNEL_CAPACITY: usize = 64;

/// Dashboard state mounted with the session
pub enum Dashboard {
    None,
    Student(StudentDashboard),
    Admin(AdminDashboard),
}

pub struct PortalSession {
    session_id: String,
    route: Route,
    config: Config,
    auth: AuthManager,
    ledger: SharedLedger,
    dashboard: Dashboard,
    notify_tx: broadcast::Sender<Notification>,
}

impl PortalSession {
    pub fn new(route: Route, config: Config, store: Arc<dyn SnapshotStore>) -> Self {
        let auth = AuthManager::new(store.clone(), config.latency());
        let ledger = SharedLedger::new(store);
        let dashboard = match route {
            Route::StudentDashboard => {
                Dashboard::Student(StudentDashboard::new(StudentProfile::demo()))
            }
            Route::AdminDashboard => {
                let mut queue = RequestQueue::with_demo_data();
                if let Err(e) = ledger.merge_into(&mut queue) {
                    tracing::warn!(error = %e, "Shared ledger unavailable");
                }
                Dashboard::Admin(AdminDashboard::new(queue, config.total_rooms))
            }
            _ => Dashboard::None,
        };
        let (notify_tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_CAPACITY);
        let session_id = uuid::Uuid::new_v4().to_string();

        tracing::info!(session_id = %session_id, route = %route, "Session created");

        Self {
            session_id,
            route,
            config,
            auth,
            ledger,
            dashboard,
            notify_tx,
        }
    }

    /// Build a session with the store selected by `config`
    pub fn open(route: Route, config: Config) -> StoreResult<Self> {
        let store = open_store(config.persist_snapshot, &config.work_dir())?;
        Ok(Self::new(route, config, store))
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Receive every notification this session emits
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notify_tx.subscribe()
    }

    /// Initial view for the mounted page, after the route guard
    pub fn mount(&mut self) -> ViewUpdate {
        let update = match self.auth.check_auth_status(self.route) {
            Ok(Some(target)) => ViewUpdate::render(Render::Redirect(target)),
            Ok(None) => ViewUpdate::render(match &self.dashboard {
                Dashboard::Student(d) => d.render(),
                Dashboard::Admin(d) => d.render(),
                Dashboard::None if self.route == Route::Login => Render::LoginForm,
                Dashboard::None => Render::Unchanged,
            }),
            Err(e) => ViewUpdate::unchanged().notify(AppError::from(e).into()),
        };
        self.publish(update)
    }

    pub async fn handle(&mut self, action: Action) -> ViewUpdate {
        tracing::debug!(session_id = %self.session_id, action = action.name(), "Handling action");

        let update = match action {
            Action::Login { username, password } => self.login(&username, &password).await,
            Action::Register(form) => match self.auth.register(&form).await {
                Ok(_) => ViewUpdate::render(Render::LoginForm).notify(Notification::success(
                    "Registration successful! Please login with your credentials.",
                )),
                Err(AuthError::Validation(errors)) => {
                    ViewUpdate::render(Render::RegistrationErrors(errors))
                }
                Err(e) => ViewUpdate::unchanged().notify(AppError::from(e).into()),
            },
            Action::Logout => match self.auth.logout() {
                Ok(target) => ViewUpdate::render(Render::Redirect(target)),
                Err(e) => ViewUpdate::unchanged().notify(AppError::from(e).into()),
            },
            action => match self.guard() {
                Some(update) => update,
                None => self.dispatch(action),
            },
        };

        self.publish(update)
    }

    async fn login(&mut self, username: &str, password: &str) -> ViewUpdate {
        match self.auth.login(username, password).await {
            Ok(outcome) => ViewUpdate::render(Render::Redirect(outcome.redirect))
                .notify(Notification::success("Login successful!")),
            Err(e) => ViewUpdate::unchanged().notify(AppError::from(e).into()),
        }
    }

    /// Redirect for a protected page the current user may not act on
    fn guard(&self) -> Option<ViewUpdate> {
        if !self.route.is_protected() {
            return None;
        }
        match self.auth.check_auth_status(self.route) {
            Ok(None) => None,
            Ok(Some(target)) => {
                tracing::warn!(
                    session_id = %self.session_id,
                    route = %self.route,
                    "Dashboard action without login"
                );
                Some(
                    ViewUpdate::render(Render::Redirect(target))
                        .notify(AppError::not_authenticated().into()),
                )
            }
            Err(e) => Some(ViewUpdate::unchanged().notify(AppError::from(e).into())),
        }
    }

    /// Confirm the prompted room, then copy a new booking into the shared ledger
    fn confirm_booking(&mut self) -> ViewUpdate {
        let Dashboard::Student(d) = &mut self.dashboard else {
            return ViewUpdate::unchanged();
        };
        let had_booking = d.booking().has_booking();
        let update = d.confirm_booking();
        let allotment = if had_booking { None } else { d.booking().allotment() };

        match allotment.map(|a| self.ledger.record_self_booking(a)) {
            Some(Err(e)) => update.notify(e.into()),
            _ => update,
        }
    }

    /// Dashboard actions; those the mounted dashboard does not handle are ignored
    fn dispatch(&mut self, action: Action) -> ViewUpdate {
        if matches!(action, Action::ConfirmBooking) && matches!(self.dashboard, Dashboard::Student(_)) {
            return self.confirm_booking();
        }
        match (&mut self.dashboard, action) {
            (Dashboard::Student(d), Action::SelectHostelType(hostel)) => d.select_hostel_type(hostel),
            (Dashboard::Student(d), Action::SubmitRoomRequest { hostel, room_type }) => {
                d.submit_room_request(hostel, room_type)
            }
            (Dashboard::Student(d), Action::FilterRoomType(filter)) => d.filter_room_type(filter),
            (Dashboard::Student(d), Action::ClickRoom(number)) => d.click_room(number),
            (Dashboard::Student(d), Action::SwitchView(view)) => d.switch_view(view),
            (Dashboard::Admin(d), Action::AcceptRequest(id)) => d.accept(id),
            (Dashboard::Admin(d), Action::DeclineRequest(id)) => d.decline(id),
            (Dashboard::Admin(d), Action::SwitchView(view)) => d.switch_view(view),
            (_, action) => {
                tracing::warn!(
                    session_id = %self.session_id,
                    route = %self.route,
                    action = action.name(),
                    "Action not available on this page"
                );
                ViewUpdate::unchanged()
            }
        }
    }

    fn publish(&self, update: ViewUpdate) -> ViewUpdate {
        for notification in &update.notifications {
            // no subscribers is fine
            let _ = self.notify_tx.send(notification.clone());
        }
        update
    }
}
