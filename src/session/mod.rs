//! Console session management
//!
//! A session owns one limiter per protected action, the logged-in user, and
//! its own key/value store. Nothing outlives the session.

pub mod handler;
pub mod results;
pub mod state;
pub mod store;

pub use handler::{ConsoleContext, run_console};
pub use results::{LoginOutcome, LoginStatus};
pub use state::Session;
pub use store::SessionStore;
