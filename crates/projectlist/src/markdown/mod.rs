//! Reading project entries out of markdown.
//!
//! The pipeline runs in three stages, one module each:
//!
//! - [`blocks`]: find the fenced `yaml` blocks in a document
//! - [`entries`]: split a block into one chunk per `- id:` entry
//! - [`parser`]: turn a chunk into a [`ProjectEntry`](crate::ProjectEntry)

pub mod blocks;
pub mod entries;
pub mod parser;

pub use blocks::yaml_blocks;
pub use entries::split_entries;
pub use parser::parse_project_entry;
