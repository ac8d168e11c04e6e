//! Error handling for cutplan
//!
//! Provides the error types for every layer of the compiler:
//! - Geometry errors (a single shape cannot be planned)
//! - Scene errors (identifier bookkeeping)
//! - Collaborator errors (external shape generator / explainer)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised by the path planner when a shape cannot produce a valid
/// tool-center path. The offending shape is skipped, the rest of the
/// scene is still compiled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A dimension that must be strictly positive is not
    #[error("{dimension} must be positive, got {value}")]
    NonPositiveDimension {
        /// Name of the offending dimension (width, height, radius, font size).
        dimension: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Tool compensation collapsed the contour
    #[error("effective radius must be positive after tool offset, got {effective}")]
    NonPositiveEffectiveRadius {
        /// Radius after applying the tool offset.
        effective: f64,
    },

    /// Tool compensation collapsed or inverted a rectangle
    #[error("contour collapsed by tool offset to {width} x {height}")]
    CollapsedContour {
        /// Offset width.
        width: f64,
        /// Offset height.
        height: f64,
    },

    /// A coordinate or dimension is NaN or infinite
    #[error("{field} is not a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Scene error type
///
/// Represents violations of the scene's identifier invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Another shape already uses this identifier
    #[error("Duplicate shape id: {id}")]
    DuplicateId {
        /// The duplicated identifier.
        id: String,
    },

    /// The identifier is empty or contains control characters
    #[error("Invalid shape id: {id:?}")]
    InvalidId {
        /// The rejected identifier.
        id: String,
    },

    /// No shape with this identifier exists
    #[error("Unknown shape id: {id}")]
    UnknownShape {
        /// The identifier that was not found.
        id: String,
    },
}

/// Collaborator error type
///
/// Failures reported by external services. These never originate inside the
/// compiler; the caller resolves them before anything reaches a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The shape generator could not produce a scene
    #[error("Shape generation failed: {reason}")]
    GenerationFailure {
        /// The reason reported by the generator.
        reason: String,
    },

    /// The explainer could not describe the program
    #[error("Explanation failed: {reason}")]
    ExplainFailure {
        /// The reason reported by the explainer.
        reason: String,
    },
}

impl CollaboratorError {
    /// Create a generation failure from any message
    pub fn generation(reason: impl Into<String>) -> Self {
        CollaboratorError::GenerationFailure {
            reason: reason.into(),
        }
    }

    /// Create an explain failure from any message
    pub fn explain(reason: impl Into<String>) -> Self {
        CollaboratorError::ExplainFailure {
            reason: reason.into(),
        }
    }
}

/// Main error type for cutplan
///
/// Returned by fallible operations that can fail for more than one reason,
/// such as scene mutations on the designer state and shape generation
/// requests.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Collaborator error
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl Error {
    /// Check if this is a scene error
    pub fn is_scene_error(&self) -> bool {
        matches!(self, Error::Scene(_))
    }

    /// Check if this is a collaborator error
    pub fn is_collaborator_error(&self) -> bool {
        matches!(self, Error::Collaborator(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
