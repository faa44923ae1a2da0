//! # Outside Marker Errors
//!
//! Error types for outer-wall classification.
//!
//! ## Error Policy
//!
//! - Preconditions are checked eagerly, before any geometric work
//! - No partial results: a failed hull build leaves the hull empty
//! - Errors carry enough context to identify the offending input

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while classifying outer-wall vertices.
///
/// ## Example
///
/// ```rust
/// use lod_outside::{LodMesh, OutsideError, OutsideMarker};
/// use glam::DVec3;
///
/// // Four points on the z = 0 plane cannot seed a tetrahedron
/// let positions = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y];
/// let mesh = LodMesh::from_indexed(&positions, &[[0, 1, 2], [0, 2, 3]]).unwrap();
///
/// let mut marker = OutsideMarker::new(mesh.vertices(), mesh.triangles(), 1.0, 0.5).unwrap();
/// match marker.mark_outside() {
///     Err(OutsideError::DegenerateGeometry { .. }) => {}
///     other => panic!("expected degenerate geometry, got {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum OutsideError {
    /// Caller contract violation detected before any geometry is touched.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The vertex set does not span 3-D space within tolerance.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// The classifier ran before a hull was generated.
    #[error("Convex hull has not been generated")]
    HullNotGenerated,

    /// The debug mesh factory already holds a mesh with this name.
    #[error("Mesh '{name}' already exists in group '{group}'")]
    MeshAlreadyExists { name: String, group: String },

    /// The debug mesh factory rejected the hull buffers.
    #[error("Debug mesh export failed: {message}")]
    ExportFailed { message: String },
}

impl OutsideError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an export failure error.
    pub fn export_failed(message: impl Into<String>) -> Self {
        Self::ExportFailed {
            message: message.into(),
        }
    }
}

impl From<ConfigError> for OutsideError {
    fn from(err: ConfigError) -> Self {
        Self::invalid_input(err.to_string())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for outer-wall classification.
pub type OutsideResult<T> = Result<T, OutsideError>;

// =============================================================================
// TESTS
// =============================================================================
