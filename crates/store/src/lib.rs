//! External-collaborator seams for the survey workflow.
//!
//! The remote record store and the authentication provider are
//! consumed through narrow traits so that the workflow can be wired to
//! the real hosted backends or to in-memory fakes in tests:
//!
//! - [`ResponseStore`] — append-only record collection with full-snapshot
//!   subscriptions and a field-equals duplicate-check query.
//! - [`AuthProvider`] — popup-style sign-in/sign-out with readable
//!   current-identity state.
//! - [`MemoryStore`] / [`MemoryAuth`] — reference implementations used
//!   by tests and local development.

pub mod auth;
pub mod config;
pub mod error;
pub mod memory;
pub mod store;

pub use auth::{AuthProvider, Identity};
pub use config::StoreConfig;
pub use error::{AuthError, StoreError};
pub use memory::{MemoryAuth, MemoryStore};
pub use store::{ResponseMap, ResponseStore};
