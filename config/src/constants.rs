//! # Configuration Constants
//!
//! Centralized constants for the outer-wall marker. All hull tolerances,
//! classifier thresholds and debug export defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point tolerance scaling
//! - **Classification**: Walk angle defaults and limits
//! - **Debug Export**: Defaults for the hull visualization mesh

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Multiplier applied to machine epsilon when deriving the hull tolerance.
///
/// The hull tolerance is `bounding_sphere_radius * f64::EPSILON * EPSILON_SCALE`.
/// The factor absorbs the rounding error of a dot product on coordinates
/// of the given magnitude.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON_SCALE;
///
/// let radius = 10.0;
/// let tolerance = radius * f64::EPSILON * EPSILON_SCALE;
/// assert!(tolerance < 1e-12);
/// ```
pub const EPSILON_SCALE: f64 = 4.0;

// =============================================================================
// CLASSIFICATION CONSTANTS
// =============================================================================

/// Largest accepted magnitude for a walk angle cosine.
///
/// Walk angles are dot products of unit normals and live in `[-1, 1]`. The
/// small margin lets callers pass values computed with rounding noise.
///
/// # Example
///
/// ```rust
/// use config::constants::WALK_ANGLE_LIMIT;
///
/// let cosine: f64 = 1.0 + 1e-6;
/// assert!(cosine.abs() <= WALK_ANGLE_LIMIT);
/// ```
pub const WALK_ANGLE_LIMIT: f64 = 1.0001;

/// Default walk angle cosine for the outer-wall flood fill.
///
/// A value of 0.0 accepts every triangle whose normal is less than 90
/// degrees away from the hull face normal.
pub const DEFAULT_WALK_ANGLE: f64 = 0.0;

// =============================================================================
// DEBUG EXPORT CONSTANTS
// =============================================================================

/// Material assigned to the convex hull debug mesh.
pub const DEBUG_HULL_MATERIAL: &str = "Examples/TransparentBlue50";

/// Resource group used when a caller does not name one.
pub const DEFAULT_RESOURCE_GROUP: &str = "General";

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Validated settings for one outer-wall classification run.
///
/// # Examples
/// ```
/// use config::constants::OutsideConfig;
/// let cfg = OutsideConfig::new(0.9, 4.0).expect("valid config");
/// assert_eq!(cfg.walk_angle, 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutsideConfig {
    /// Cosine threshold for the flood fill.
    pub walk_angle: f64,
    /// Multiplier for the machine epsilon based hull tolerance.
    pub epsilon_scale: f64,
}

impl OutsideConfig {
    /// Builds a configuration enforcing strict validation of both values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, OutsideConfig};
    /// assert_eq!(
    ///     OutsideConfig::new(1.5, 4.0).unwrap_err(),
    ///     ConfigError::InvalidWalkAngle(1.5)
    /// );
    /// ```
    pub fn new(walk_angle: f64, epsilon_scale: f64) -> Result<Self, ConfigError> {
        validate_walk_angle(walk_angle)?;
        if !(epsilon_scale > 0.0 && epsilon_scale.is_finite()) {
            return Err(ConfigError::InvalidEpsilonScale(epsilon_scale));
        }
        Ok(Self {
            walk_angle,
            epsilon_scale,
        })
    }

    /// Returns a copy with a different walk angle.
    pub fn with_walk_angle(self, walk_angle: f64) -> Result<Self, ConfigError> {
        Self::new(walk_angle, self.epsilon_scale)
    }
}

impl Default for OutsideConfig {
    fn default() -> Self {
        Self {
            walk_angle: DEFAULT_WALK_ANGLE,
            epsilon_scale: EPSILON_SCALE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the walk angle is NaN or outside `[-WALK_ANGLE_LIMIT, WALK_ANGLE_LIMIT]`.
    InvalidWalkAngle(f64),
    /// Raised when the epsilon scale is zero, negative or not finite.
    InvalidEpsilonScale(f64),
    /// Raised when the bounding sphere radius is zero, negative or not finite.
    InvalidRadius(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWalkAngle(value) => {
                write!(
                    f,
                    "walk angle must be a cosine in [-{WALK_ANGLE_LIMIT}, {WALK_ANGLE_LIMIT}]: {value}"
                )
            }
            ConfigError::InvalidEpsilonScale(value) => {
                write!(f, "epsilon scale must be positive: {value}")
            }
            ConfigError::InvalidRadius(value) => {
                write!(f, "bounding sphere radius must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks that a walk angle is a usable cosine value.
///
/// # Example
///
/// ```rust
/// use config::constants::validate_walk_angle;
///
/// assert!(validate_walk_angle(0.707).is_ok());
/// assert!(validate_walk_angle(-1.0001).is_ok());
/// assert!(validate_walk_angle(f64::NAN).is_err());
/// ```
pub fn validate_walk_angle(walk_angle: f64) -> Result<(), ConfigError> {
    // NaN fails both comparisons
    if walk_angle >= -WALK_ANGLE_LIMIT && walk_angle <= WALK_ANGLE_LIMIT {
        Ok(())
    } else {
        Err(ConfigError::InvalidWalkAngle(walk_angle))
    }
}

/// Checks that a bounding sphere radius can scale the hull tolerance.
///
/// Invalid meshes report a radius of 0.0, which is rejected here.
///
/// # Example
///
/// ```rust
/// use config::constants::validate_radius;
///
/// assert!(validate_radius(2.5).is_ok());
/// assert!(validate_radius(0.0).is_err());
/// ```
pub fn validate_radius(radius: f64) -> Result<(), ConfigError> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidRadius(radius))
    }
}

/// Computes the hull tolerance for a mesh of the given size.
///
/// # Example
///
/// ```rust
/// use config::constants::{hull_epsilon, EPSILON_SCALE};
///
/// let eps = hull_epsilon(2.0, EPSILON_SCALE);
/// assert_eq!(eps, 2.0 * f64::EPSILON * 4.0);
/// ```
#[inline]
pub fn hull_epsilon(bounding_sphere_radius: f64, epsilon_scale: f64) -> f64 {
    bounding_sphere_radius * f64::EPSILON * epsilon_scale
}
