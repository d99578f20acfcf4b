//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::EngineConfig;
/// let engine = EngineConfig::default();
/// assert!(engine.wall_thickness_mm > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let engine = EngineConfig::default();
    assert!(engine.wall_thickness_mm > 0.0);
    assert!(engine.segments >= 3);
    assert!(engine.vent_edge_inset_mm > 0.0);
    assert!(engine.vent_hole_diameter_mm < engine.vent_pitch_mm);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::EngineConfig;
/// assert!(EngineConfig::new(0.0, 32, 10.0, 20.0, 5.0).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        EngineConfig::new(0.0, 32, 10.0, 20.0, 5.0).unwrap_err(),
        ConfigError::InvalidWallThickness(0.0)
    );
    assert_eq!(
        EngineConfig::new(2.0, 2, 10.0, 20.0, 5.0).unwrap_err(),
        ConfigError::InvalidSegments(2)
    );
    assert_eq!(
        EngineConfig::new(2.0, 32, 10.0, 0.0, 5.0).unwrap_err(),
        ConfigError::InvalidVentLayout {
            edge_inset_mm: 10.0,
            pitch_mm: 0.0,
        }
    );
    assert_eq!(
        EngineConfig::new(2.0, 32, 10.0, 20.0, 25.0).unwrap_err(),
        ConfigError::InvalidVentDiameter(25.0)
    );
}
