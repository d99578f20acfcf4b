//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! across the crate boundary.

use crate::constants::*;

// =============================================================================
// SHELL TESTS
// =============================================================================

#[test]
fn test_wall_thickness_is_positive() {
    assert!(WALL_THICKNESS_MM > 0.0, "WALL_THICKNESS_MM must be positive");
}

#[test]
fn test_cut_overshoot_smaller_than_wall() {
    assert!(
        CUT_OVERSHOOT_MM < WALL_THICKNESS_MM,
        "overshoot should stay below the wall thickness"
    );
}

// =============================================================================
// VENT GRID TESTS
// =============================================================================

#[test]
fn test_vent_holes_fit_the_pitch() {
    assert!(
        VENT_HOLE_DIAMETER_MM < VENT_PITCH_MM,
        "adjacent vent holes must not merge"
    );
}

#[test]
fn test_vent_inset_clears_hole_radius() {
    assert!(
        VENT_EDGE_INSET_MM >= VENT_HOLE_DIAMETER_MM / 2.0,
        "first hole must not breach the shell edge"
    );
}

// =============================================================================
// MOUNT TAB TESTS
// =============================================================================

#[test]
fn test_fastener_hole_fits_tab() {
    assert!(FASTENER_HOLE_DIAMETER_MM < MOUNT_TAB_WIDTH_MM);
    assert!(FASTENER_HOLE_DIAMETER_MM < MOUNT_TAB_DEPTH_MM);
}

#[test]
fn test_port_cutout_envelope_is_positive() {
    assert!(PORT_CUTOUT_WIDTH_MM > 0.0);
    assert!(PORT_CUTOUT_HEIGHT_MM > 0.0);
    assert!(PORT_CUTOUT_SILL_MM >= 0.0);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_segments_smooth_enough() {
    // Small vent holes still need a reasonably round silhouette
    assert!(DEFAULT_SEGMENTS >= 12);
    assert!(DEFAULT_SEGMENTS <= 200);
}
