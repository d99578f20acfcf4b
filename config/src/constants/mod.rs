//! Centralized configuration values shared across the enclosure generator
//! pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Wall thickness of generated enclosure shells, in millimeters.
///
/// The shell extends the housed product by twice this value on every axis.
///
/// # Examples
/// ```
/// use config::constants::WALL_THICKNESS_MM;
/// assert!(WALL_THICKNESS_MM > 0.0);
/// ```
pub const WALL_THICKNESS_MM: f64 = 2.0;

/// Default tessellation segment count (`$fn`) written into emitted scripts
/// for primitives that require angular resolution such as vent cylinders.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 50;

/// Inset of the first ventilation hole from each edge of the top face, in
/// millimeters.
///
/// # Examples
/// ```
/// use config::constants::VENT_EDGE_INSET_MM;
/// assert!(VENT_EDGE_INSET_MM > 0.0);
/// ```
pub const VENT_EDGE_INSET_MM: f64 = 10.0;

/// Center-to-center spacing of ventilation holes, in millimeters.
///
/// # Examples
/// ```
/// use config::constants::{VENT_EDGE_INSET_MM, VENT_PITCH_MM};
/// assert!(VENT_PITCH_MM > VENT_EDGE_INSET_MM);
/// ```
pub const VENT_PITCH_MM: f64 = 20.0;

/// Diameter of each ventilation hole, in millimeters.
///
/// # Examples
/// ```
/// use config::constants::{VENT_HOLE_DIAMETER_MM, VENT_PITCH_MM};
/// assert!(VENT_HOLE_DIAMETER_MM < VENT_PITCH_MM);
/// ```
pub const VENT_HOLE_DIAMETER_MM: f64 = 5.0;

/// Width of the rectangular envelope cut for one chassis port, in
/// millimeters.
///
/// # Examples
/// ```
/// use config::constants::PORT_CUTOUT_WIDTH_MM;
/// assert!(PORT_CUTOUT_WIDTH_MM > 0.0);
/// ```
pub const PORT_CUTOUT_WIDTH_MM: f64 = 20.0;

/// Height of the rectangular envelope cut for one chassis port, in
/// millimeters.
///
/// # Examples
/// ```
/// use config::constants::PORT_CUTOUT_HEIGHT_MM;
/// assert!(PORT_CUTOUT_HEIGHT_MM > 0.0);
/// ```
pub const PORT_CUTOUT_HEIGHT_MM: f64 = 10.0;

/// Height of a port cutout's lower edge above the cavity floor, in
/// millimeters.
///
/// # Examples
/// ```
/// use config::constants::PORT_CUTOUT_SILL_MM;
/// assert!(PORT_CUTOUT_SILL_MM >= 0.0);
/// ```
pub const PORT_CUTOUT_SILL_MM: f64 = 5.0;

/// Overshoot applied to through-cuts so boolean subtractions clear both
/// surfaces of the wall they pierce, in millimeters.
///
/// # Examples
/// ```
/// use config::constants::CUT_OVERSHOOT_MM;
/// assert!(CUT_OVERSHOOT_MM > 0.0);
/// ```
pub const CUT_OVERSHOOT_MM: f64 = 1.0;

/// Width of the wall-mount tab unioned onto the shell's back face, in
/// millimeters.
///
/// # Examples
/// ```
/// use config::constants::MOUNT_TAB_WIDTH_MM;
/// assert!(MOUNT_TAB_WIDTH_MM > 0.0);
/// ```
pub const MOUNT_TAB_WIDTH_MM: f64 = 30.0;

/// Depth of the wall-mount tab (how far it stands off the back face), in
/// millimeters.
///
/// # Examples
/// ```
/// use config::constants::MOUNT_TAB_DEPTH_MM;
/// assert!(MOUNT_TAB_DEPTH_MM > 0.0);
/// ```
pub const MOUNT_TAB_DEPTH_MM: f64 = 20.0;

/// Diameter of the fastener through-hole bored through the wall-mount tab,
/// in millimeters. Sized for an M4/M5 screw with clearance.
///
/// # Examples
/// ```
/// use config::constants::{FASTENER_HOLE_DIAMETER_MM, MOUNT_TAB_WIDTH_MM};
/// assert!(FASTENER_HOLE_DIAMETER_MM < MOUNT_TAB_WIDTH_MM);
/// ```
pub const FASTENER_HOLE_DIAMETER_MM: f64 = 5.0;

/// Immutable snapshot of the engine settings a single compile run uses.
///
/// # Examples
/// ```
/// use config::constants::EngineConfig;
/// let engine = EngineConfig::default();
/// assert!(engine.wall_thickness_mm > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Shell wall thickness applied on every axis.
    pub wall_thickness_mm: f64,
    /// Tessellation segment count written as the script's `$fn` header.
    pub segments: u32,
    /// Inset of the vent grid from each top-face edge.
    pub vent_edge_inset_mm: f64,
    /// Center-to-center vent hole spacing.
    pub vent_pitch_mm: f64,
    /// Vent hole diameter.
    pub vent_hole_diameter_mm: f64,
}

impl EngineConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// wall thickness, segment count, and vent layout.
    ///
    /// # Examples
    /// ```
    /// use config::constants::EngineConfig;
    /// let engine = EngineConfig::new(3.0, 32, 10.0, 20.0, 5.0).expect("valid config");
    /// assert_eq!(engine.segments, 32);
    /// ```
    pub fn new(
        wall_thickness_mm: f64,
        segments: u32,
        vent_edge_inset_mm: f64,
        vent_pitch_mm: f64,
        vent_hole_diameter_mm: f64,
    ) -> Result<Self, ConfigError> {
        if wall_thickness_mm <= 0.0 {
            return Err(ConfigError::InvalidWallThickness(wall_thickness_mm));
        }
        if segments < 3 {
            return Err(ConfigError::InvalidSegments(segments));
        }
        if vent_edge_inset_mm <= 0.0 || vent_pitch_mm <= 0.0 {
            return Err(ConfigError::InvalidVentLayout {
                edge_inset_mm: vent_edge_inset_mm,
                pitch_mm: vent_pitch_mm,
            });
        }
        if vent_hole_diameter_mm <= 0.0 || vent_hole_diameter_mm >= vent_pitch_mm {
            return Err(ConfigError::InvalidVentDiameter(vent_hole_diameter_mm));
        }
        Ok(Self {
            wall_thickness_mm,
            segments,
            vent_edge_inset_mm,
            vent_pitch_mm,
            vent_hole_diameter_mm,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            wall_thickness_mm: WALL_THICKNESS_MM,
            segments: DEFAULT_SEGMENTS,
            vent_edge_inset_mm: VENT_EDGE_INSET_MM,
            vent_pitch_mm: VENT_PITCH_MM,
            vent_hole_diameter_mm: VENT_HOLE_DIAMETER_MM,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when wall thickness is zero or negative.
    InvalidWallThickness(f64),
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
    /// Raised when the vent grid inset or pitch is zero or negative.
    InvalidVentLayout {
        /// Offending edge inset.
        edge_inset_mm: f64,
        /// Offending pitch.
        pitch_mm: f64,
    },
    /// Raised when the vent hole diameter is non-positive or would overlap
    /// neighboring holes.
    InvalidVentDiameter(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWallThickness(value) => {
                write!(f, "wall thickness must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be >= 3: {value}")
            }
            ConfigError::InvalidVentLayout {
                edge_inset_mm,
                pitch_mm,
            } => {
                write!(
                    f,
                    "vent layout must be positive: inset {edge_inset_mm}, pitch {pitch_mm}"
                )
            }
            ConfigError::InvalidVentDiameter(value) => {
                write!(f, "vent diameter must fit within the pitch: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
