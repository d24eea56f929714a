//! roster-ui - UI components for the student roster
//!
//! Pure view components (registration form, students table) plus the
//! `localStorage` adapter the web app persists through.

pub mod components;
pub mod display_types;
pub mod storage;

pub use components::*;
pub use display_types::*;
pub use storage::BrowserStorage;
