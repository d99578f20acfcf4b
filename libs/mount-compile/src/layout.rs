//! # Enclosure Layout
//!
//! Numeric layout math, fully resolved before any script node exists.
//!
//! Axis convention: x = product width, y = product depth, z = product
//! height. The shell's min corner sits at the origin; the cavity floats one
//! wall thickness inside it on every axis.

use config::constants::{
    EngineConfig, CUT_OVERSHOOT_MM, FASTENER_HOLE_DIAMETER_MM, MOUNT_TAB_DEPTH_MM,
    MOUNT_TAB_WIDTH_MM, PORT_CUTOUT_HEIGHT_MM, PORT_CUTOUT_SILL_MM, PORT_CUTOUT_WIDTH_MM,
};
use glam::DVec3;

use mount_types::{Dimensions, ProductMetadata};

use crate::error::CompileError;

/// Resolved shell and cavity geometry for one compile run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnclosureLayout {
    /// Interior cavity size, exactly the product dimensions.
    pub cavity: DVec3,
    /// Outer shell size, cavity plus two walls per axis.
    pub shell: DVec3,
    /// Wall thickness on every axis.
    pub wall: f64,
}

/// One rectangular port opening through the shell's front wall.
#[derive(Debug, Clone, PartialEq)]
pub struct PortCutout {
    /// Feature label emitted into the script.
    pub label: String,
    /// Min-corner offset in shell coordinates.
    pub offset: DVec3,
    /// Cutout envelope size.
    pub size: DVec3,
}

/// The wall-mount tab and its fastener bore, in shell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountTab {
    /// Min-corner offset of the tab against the back face.
    pub offset: DVec3,
    /// Tab size.
    pub size: DVec3,
    /// Bore center in tab-local coordinates, before the x-axis rotation.
    pub bore_offset: DVec3,
    /// Bore length; pierces the tab depth with overshoot on both sides.
    pub bore_length: f64,
    /// Bore diameter.
    pub bore_diameter: f64,
}

impl EnclosureLayout {
    /// Validates product dimensions and resolves shell geometry.
    ///
    /// Every axis must be a positive finite number.
    pub fn new(dimensions: &Dimensions, engine: &EngineConfig) -> Result<Self, CompileError> {
        let Dimensions {
            width,
            height,
            depth,
        } = *dimensions;
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) || !valid(depth) {
            return Err(CompileError::InvalidDimensions {
                width,
                height,
                depth,
            });
        }
        let cavity = DVec3::new(width, depth, height);
        let wall = engine.wall_thickness_mm;
        Ok(Self {
            cavity,
            shell: cavity + DVec3::splat(2.0 * wall),
            wall,
        })
    }

    /// Cavity min-corner offset: one wall thickness on every axis.
    pub fn cavity_offset(&self) -> DVec3 {
        DVec3::splat(self.wall)
    }

    /// Vent hole centers on the top face, gridded from the edge inset at
    /// the configured pitch while the coordinate stays within the product
    /// footprint. Empty when the product is too small for even one hole.
    pub fn vent_centers(&self, engine: &EngineConfig) -> Vec<(f64, f64)> {
        let mut centers = Vec::new();
        let mut x = engine.vent_edge_inset_mm;
        while x <= self.cavity.x {
            let mut y = engine.vent_edge_inset_mm;
            while y <= self.cavity.y {
                centers.push((x, y));
                y += engine.vent_pitch_mm;
            }
            x += engine.vent_pitch_mm;
        }
        centers
    }

    /// Port openings requested by the product metadata. Metadata-driven
    /// only: the same product yields the same cutouts for every mounting
    /// choice.
    pub fn port_cutouts(&self, metadata: &ProductMetadata) -> Vec<PortCutout> {
        let mut cutouts = Vec::new();
        let size = DVec3::new(
            PORT_CUTOUT_WIDTH_MM,
            self.wall + 2.0 * CUT_OVERSHOOT_MM,
            PORT_CUTOUT_HEIGHT_MM,
        );
        let sill = self.wall + PORT_CUTOUT_SILL_MM;
        if let Some(connector) = &metadata.power_connector {
            cutouts.push(PortCutout {
                label: format!("{connector} power"),
                offset: DVec3::new(self.wall, -CUT_OVERSHOOT_MM, sill),
                size,
            });
        }
        if metadata.ports.ethernet > 0 {
            cutouts.push(PortCutout {
                label: "Ethernet".into(),
                offset: DVec3::new(
                    self.cavity.x - PORT_CUTOUT_WIDTH_MM,
                    -CUT_OVERSHOOT_MM,
                    sill,
                ),
                size,
            });
        }
        cutouts
    }

    /// The wall-mount tab: full shell height, centered on x against the
    /// back face, fastener bore centered on the tab.
    pub fn mount_tab(&self) -> MountTab {
        MountTab {
            offset: DVec3::new((self.shell.x - MOUNT_TAB_WIDTH_MM) / 2.0, self.shell.y, 0.0),
            size: DVec3::new(MOUNT_TAB_WIDTH_MM, MOUNT_TAB_DEPTH_MM, self.shell.z),
            bore_offset: DVec3::new(
                MOUNT_TAB_WIDTH_MM / 2.0,
                MOUNT_TAB_DEPTH_MM + CUT_OVERSHOOT_MM,
                self.shell.z / 2.0,
            ),
            bore_length: MOUNT_TAB_DEPTH_MM + 2.0 * CUT_OVERSHOOT_MM,
            bore_diameter: FASTENER_HOLE_DIAMETER_MM,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mount_types::PortCounts;

    fn jetson_dimensions() -> Dimensions {
        Dimensions {
            width: 100.0,
            height: 29.0,
            depth: 87.0,
        }
    }

    /// Test shell extends the cavity by two walls per axis.
    #[test]
    fn test_shell_offsets_every_axis() {
        let layout =
            EnclosureLayout::new(&jetson_dimensions(), &EngineConfig::default()).unwrap();
        assert_eq!(layout.cavity, DVec3::new(100.0, 87.0, 29.0));
        assert_eq!(layout.shell, DVec3::new(104.0, 91.0, 33.0));
        assert_eq!(layout.cavity_offset(), DVec3::splat(2.0));
    }

    /// Test zero and negative dimensions are rejected.
    #[test]
    fn test_invalid_dimensions_rejected() {
        let engine = EngineConfig::default();
        for dimensions in [
            Dimensions { width: 0.0, height: 29.0, depth: 87.0 },
            Dimensions { width: 100.0, height: -29.0, depth: 87.0 },
            Dimensions { width: 100.0, height: 29.0, depth: f64::NAN },
        ] {
            assert!(matches!(
                EnclosureLayout::new(&dimensions, &engine),
                Err(CompileError::InvalidDimensions { .. })
            ));
        }
    }

    /// Test the vent grid for the 100 x 87 top face.
    ///
    /// x advances 10, 30, 50, 70, 90 (5 columns); y advances 10, 30, 50,
    /// 70 (4 rows, 90 exceeds the 87 mm depth).
    #[test]
    fn test_vent_grid_spans_footprint() {
        let engine = EngineConfig::default();
        let layout = EnclosureLayout::new(&jetson_dimensions(), &engine).unwrap();
        let centers = layout.vent_centers(&engine);
        assert_eq!(centers.len(), 20);
        assert_eq!(centers[0], (10.0, 10.0));
        assert!(centers.iter().all(|&(x, y)| x <= 100.0 && y <= 87.0));
    }

    /// Test a footprint smaller than the inset yields no holes.
    #[test]
    fn test_tiny_footprint_has_no_vents() {
        let engine = EngineConfig::default();
        let dimensions = Dimensions {
            width: 8.0,
            height: 8.0,
            depth: 8.0,
        };
        let layout = EnclosureLayout::new(&dimensions, &engine).unwrap();
        assert!(layout.vent_centers(&engine).is_empty());
    }

    /// Test port cutouts follow the metadata, not the mounting choice.
    #[test]
    fn test_port_cutouts_from_metadata() {
        let layout =
            EnclosureLayout::new(&jetson_dimensions(), &EngineConfig::default()).unwrap();
        let metadata = ProductMetadata {
            name: "Board".into(),
            weight: None,
            power_connector: Some("USB-C".into()),
            thermal_design: None,
            ports: PortCounts {
                usb: 2,
                ethernet: 1,
                hdmi: 1,
                gpio: 0,
            },
        };
        let cutouts = layout.port_cutouts(&metadata);
        assert_eq!(cutouts.len(), 2);
        assert_eq!(cutouts[0].label, "USB-C power");
        assert_eq!(cutouts[1].label, "Ethernet");
        // Network opening hugs the right edge of the cavity.
        assert_eq!(cutouts[1].offset.x, 80.0);

        let bare = ProductMetadata {
            name: "Bare".into(),
            weight: None,
            power_connector: None,
            thermal_design: None,
            ports: PortCounts::default(),
        };
        assert!(layout.port_cutouts(&bare).is_empty());
    }

    /// Test the fastener bore pierces the whole tab depth.
    #[test]
    fn test_mount_tab_bore_pierces_tab() {
        let layout =
            EnclosureLayout::new(&jetson_dimensions(), &EngineConfig::default()).unwrap();
        let tab = layout.mount_tab();
        assert_eq!(tab.offset, DVec3::new(37.0, 91.0, 0.0));
        assert!(tab.bore_length > tab.size.y);
        assert_eq!(tab.bore_offset.z, layout.shell.z / 2.0);
    }
}
