//! Error and rejection types for projectlist.

use thiserror::Error;

/// Result type alias for fallible projectlist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in projectlist.
///
/// None of these ever escape [`parse_projectlist`](crate::parse_projectlist),
/// which degrades every failure to an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The guarded parse region unwound instead of returning.
    #[error("Project list parse aborted: {message}")]
    Panicked {
        /// Panic payload, when it was a string.
        message: String,
    },

    /// A string did not name one of the nine lifecycle statuses.
    #[error("Unknown project status: {value:?}")]
    UnknownStatus {
        /// The offending value.
        value: String,
    },
}

impl Error {
    /// Creates an unknown-status error.
    pub fn unknown_status<S: Into<String>>(value: S) -> Self {
        Error::UnknownStatus {
            value: value.into(),
        }
    }
}

/// Why a parsed entry was not accepted as a [`Project`](crate::Project).
///
/// Variants are listed in the order the validator checks them; the first
/// failing rule is the one reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rejection {
    /// No `id` field.
    #[error("missing id")]
    MissingId,

    /// The `id` is the `NNNN` placeholder used in templates.
    #[error("template id \"NNNN\"")]
    TemplateId,

    /// The `id` is not exactly four ASCII digits.
    #[error("malformed id {id:?} (expected four digits)")]
    MalformedId {
        /// The offending id.
        id: String,
    },

    /// No `status` field.
    #[error("missing status")]
    MissingStatus,

    /// The `status` is not one of the nine lifecycle statuses.
    #[error("invalid status {status:?}")]
    InvalidStatus {
        /// The offending status.
        status: String,
    },

    /// No `title` field, or an empty one.
    #[error("missing title")]
    MissingTitle,

    /// Tagged `example`; documentation entries are never real projects.
    #[error("example entry")]
    ExampleEntry,
}
