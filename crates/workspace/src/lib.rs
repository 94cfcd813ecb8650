//! Login session state, project link files, and the precondition guards
//! commands run before talking to the service.
//!
//! Guards return [`PreconditionError`] instead of terminating; deciding
//! to exit belongs to the command dispatch layer in the binary.

pub mod error;
pub mod guard;
pub mod link;
pub mod session;
pub mod token;

pub use {
    error::{Error, Result},
    guard::PreconditionError,
    link::{LINK_FILE, WorkspaceLink},
    session::{Credentials, UserDetails},
};
