//! Data models
//!
//! Shared between the portal core and whatever hosts it (browser bridge,
//! demo binary). Student-side catalog types and administrator-side ledger
//! types are deliberately separate: their room numbers never convert into
//! each other.

pub mod booking;
pub mod hostel;
pub mod request;
pub mod room;
pub mod user;

// Re-exports
pub use booking::*;
pub use hostel::*;
pub use request::*;
pub use room::*;
pub use user::*;
