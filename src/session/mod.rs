//! Transient storage for the session identifier.

mod store;

pub use store::{SESSION_KEY, SessionStore, new_session_id};
