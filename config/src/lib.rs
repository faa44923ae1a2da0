//! # Config Crate
//!
//! Centralized configuration constants for the LOD outer-wall marker.
//! Tolerance scales, walk angle limits and debug export defaults are defined
//! here so the geometry crates never carry literal values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{hull_epsilon, OutsideConfig, DEFAULT_WALK_ANGLE};
//!
//! // Tolerance grows with the mesh size
//! let small = hull_epsilon(1.0, 4.0);
//! let large = hull_epsilon(100.0, 4.0);
//! assert!(large > small);
//!
//! // Validated classifier settings
//! let cfg = OutsideConfig::default();
//! assert_eq!(cfg.walk_angle, DEFAULT_WALK_ANGLE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Scale Aware**: Tolerances are derived from the mesh bounding sphere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
