//! Error types for custard construction.
//!
//! Every failure is raised while the model is being built. Serialization of a
//! tree that passed construction cannot fail, so there is no serialization
//! variant here.

use thiserror::Error;

/// Convenience alias for results produced by model constructors.
pub type Result<T> = std::result::Result<T, CustardError>;

/// Errors raised while assembling a custard tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CustardError {
    /// A token is not a member of its closed enumeration.
    #[error("invalid {kind} value '{value}' (expected one of: {})", .allowed.join(", "))]
    InvalidEnumValue {
        /// Enumeration name (e.g. "language")
        kind: &'static str,
        /// The rejected token
        value: String,
        /// Every accepted token, in declaration order
        allowed: Vec<&'static str>,
    },

    /// The custard identifier cannot be used as a document key.
    #[error("invalid custard identifier '{identifier}': {reason}")]
    InvalidIdentifier {
        /// The rejected identifier
        identifier: String,
        /// Why it was rejected
        reason: String,
    },

    /// A metadata field is empty or malformed.
    #[error("invalid metadata field '{field}': {reason}")]
    InvalidMetadata {
        /// Offending field name
        field: String,
        /// Why it was rejected
        reason: String,
    },

    /// A layout or span dimension is below 1.
    #[error("invalid {field}: {value} (must be at least 1)")]
    InvalidLayoutDimensions {
        /// Offending dimension (e.g. "row_count")
        field: &'static str,
        /// The rejected value
        value: u32,
    },

    /// A grid specifier does not fit inside the grid layout.
    #[error(
        "key {index} at ({x}, {y}) is outside the {column_count}x{row_count} grid \
         (x must be in 0..{column_count}, y in 0..{row_count})"
    )]
    KeySpecifierOutOfBounds {
        /// Position of the key in the interface key list
        index: usize,
        /// Specifier column
        x: i64,
        /// Specifier row
        y: i64,
        /// Layout column count
        column_count: u32,
        /// Layout row count
        row_count: u32,
    },

    /// Two keys occupy the same grid cell.
    #[error("key {index} occupies cell ({x}, {y}) already taken by key {existing}")]
    DuplicateKeySpecifier {
        /// Position of the later key in the interface key list
        index: usize,
        /// Position of the key that claimed the cell first
        existing: usize,
        /// Shared cell column
        x: i64,
        /// Shared cell row
        y: i64,
    },

    /// A specifier variant was placed into a layout of another variant.
    #[error("key {index} uses a {specifier} specifier inside a {layout} layout")]
    SpecifierLayoutMismatch {
        /// Position of the key in the interface key list
        index: usize,
        /// Specifier type token
        specifier: &'static str,
        /// Layout type token
        layout: &'static str,
    },

    /// Two flick variations of one key share a direction.
    #[error("flick direction '{direction}' is assigned more than once")]
    DuplicateFlickDirection {
        /// The repeated direction token
        direction: &'static str,
    },

    /// An action builder received unusable arguments.
    #[error("invalid arguments for {action} action: {reason}")]
    InvalidActionArguments {
        /// Action kind token
        action: &'static str,
        /// Why the arguments were rejected
        reason: String,
    },

    /// Two custards in one list share an identifier.
    #[error("custard identifier '{identifier}' appears more than once")]
    DuplicateIdentifier {
        /// The repeated identifier
        identifier: String,
    },
}

impl CustardError {
    pub(crate) fn action(action: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidActionArguments {
            action,
            reason: reason.into(),
        }
    }
}
