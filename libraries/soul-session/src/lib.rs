//! Soul Player Session
//!
//! Client-side session helpers for the Soul Player web client.
//!
//! # Features
//!
//! - **Storage capability**: [`SessionStore`] trait with in-memory and
//!   JSON-file implementations
//! - **Session**: bearer token and user record slots, login/logout
//! - **Admin check**: role comparison for showing admin pages (UI only, the
//!   server still authorizes)
//! - **Request auth**: `Authorization: Bearer <token>` for API calls
//!
//! # Example
//!
//! ```rust
//! use soul_session::{MemorySessionStore, Session, StoredUser};
//!
//! # fn main() -> soul_session::Result<()> {
//! let session = Session::new(MemorySessionStore::new());
//!
//! session.login("token123", &StoredUser::new("1", "alice", "admin"))?;
//! assert!(session.is_admin()?);
//! assert_eq!(session.authorization_header()?.as_deref(), Some("Bearer token123"));
//!
//! session.logout()?;
//! assert!(!session.is_authenticated()?);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod session;
mod store;
mod types;

// Re-export main types
pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use session::Session;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use types::StoredUser;
