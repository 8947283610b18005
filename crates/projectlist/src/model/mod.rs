//! Data model for project lists.
//!
//! - [`ProjectStatus`]: the closed set of lifecycle statuses
//! - [`ProjectEntry`]: an entry as parsed, every field optional
//! - [`Project`]: an entry that passed validation
//! - [`ProjectFiles`]: the nested `files:` record

pub mod project;
pub mod status;

pub use project::{Project, ProjectEntry, ProjectFiles};
pub use status::ProjectStatus;
