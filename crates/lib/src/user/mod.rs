//! User system for journalkeep
//!
//! Provides the user registry, identity lookup ("authentication" without
//! credential checks), and the session pointer.

pub mod errors;
pub mod id;
pub mod registry;
pub mod session;
pub mod types;

pub use errors::UserError;
pub use registry::UserRegistry;
pub use session::SessionPointer;
pub use types::*;
