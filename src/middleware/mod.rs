pub mod auth;
pub mod session;

pub use auth::{AuthUser, session_gate};
pub use session::{SESSION_COOKIE, SessionManager};
