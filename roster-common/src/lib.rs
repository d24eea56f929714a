//! roster-common - Student registration logic
//!
//! Records, the registration form controller, the persisted record store and
//! search/sort view derivation. No UI dependencies, so everything here is
//! tested natively.

pub mod config;
pub mod form;
pub mod query;
pub mod roster;
pub mod session;
pub mod storage;
pub mod student;

pub use config::RosterConfig;
pub use form::{validate, Field, FormController, FormMode, StudentDraft, Submitted, ValidationErrors};
pub use query::{derive_view, filter, sort, SortDirection, SortKey, SortSpec};
pub use roster::{Roster, RosterEntry};
pub use session::RegistrationSession;
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use student::{Gender, Hobby, RecordId, StudentRecord};
