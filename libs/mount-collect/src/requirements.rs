//! # Requirement Types
//!
//! Typed answer enumerations and the completed requirements record.
//!
//! Each enumeration knows its user-facing option labels; a label set is also
//! the question's option set, so membership validation and parsing are the
//! same operation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How the enclosure attaches to its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountType {
    /// Screwed to a wall via the back-face tab.
    Wall,
    /// Free-standing on a desk.
    Desktop,
    /// Fastened under a desk surface.
    UnderDesk,
    /// Rack shelf or rails.
    Rack,
    /// User-defined mounting, no distinguishing geometry.
    Custom,
}

impl MountType {
    /// All variants in questionnaire order.
    pub const ALL: [MountType; 5] = [
        MountType::Wall,
        MountType::Desktop,
        MountType::UnderDesk,
        MountType::Rack,
        MountType::Custom,
    ];

    /// The user-facing option label.
    pub fn label(self) -> &'static str {
        match self {
            MountType::Wall => "Wall",
            MountType::Desktop => "Desktop",
            MountType::UnderDesk => "Under-desk",
            MountType::Rack => "Rack",
            MountType::Custom => "Custom",
        }
    }

    /// Parses an option label back to its variant.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// Cooling strategy, asked only for compute modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cooling {
    /// Heat sinks only, closed shell.
    Passive,
    /// Forced airflow; the shell gets a vent grid.
    Active,
    /// User-defined cooling, treated as closed.
    Custom,
}

impl Cooling {
    /// All variants in questionnaire order.
    pub const ALL: [Cooling; 3] = [Cooling::Passive, Cooling::Active, Cooling::Custom];

    /// The user-facing option label.
    pub fn label(self) -> &'static str {
        match self {
            Cooling::Passive => "Passive",
            Cooling::Active => "Active (Fan)",
            Cooling::Custom => "Custom",
        }
    }

    /// Parses an option label back to its variant.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Orientation of the housed product.
///
/// Accepted and validated, but reserved: no geometry depends on it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Standing on its short edge.
    Vertical,
    /// Lying flat.
    Horizontal,
    /// Repositionable after mounting.
    Adjustable,
}

impl Orientation {
    /// All variants in questionnaire order.
    pub const ALL: [Orientation; 3] = [
        Orientation::Vertical,
        Orientation::Horizontal,
        Orientation::Adjustable,
    ];

    /// The user-facing option label.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Vertical => "Vertical",
            Orientation::Horizontal => "Horizontal",
            Orientation::Adjustable => "Adjustable",
        }
    }

    /// Parses an option label back to its variant.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label() == label)
    }
}

/// Accessory feature tags, asked only for compute modules.
///
/// Accepted and validated, but reserved: no geometry depends on them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessory {
    /// Opening for the GPIO header.
    GpioAccess,
    /// Bosses for a fan.
    FanMount,
    /// Clearance for a heat sink.
    HeatSink,
    /// Camera module bracket.
    CameraMount,
    /// Display module bracket.
    DisplayMount,
}

impl Accessory {
    /// All variants in questionnaire order.
    pub const ALL: [Accessory; 5] = [
        Accessory::GpioAccess,
        Accessory::FanMount,
        Accessory::HeatSink,
        Accessory::CameraMount,
        Accessory::DisplayMount,
    ];

    /// The user-facing option label.
    pub fn label(self) -> &'static str {
        match self {
            Accessory::GpioAccess => "GPIO Access",
            Accessory::FanMount => "Fan Mount",
            Accessory::HeatSink => "Heat Sink",
            Accessory::CameraMount => "Camera Mount",
            Accessory::DisplayMount => "Display Mount",
        }
    }

    /// Parses an option label back to its variant.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }
}

/// Completed mounting requirements, handed to the compiler exactly once.
///
/// `cooling` and `accessories` are `Some` exactly when the product type's
/// question sequence asked for them; `None` means "not asked", while
/// `Some(empty)` means "asked, nothing selected".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountingRequirements {
    /// Chosen mounting style.
    pub mount_type: MountType,
    /// Cooling strategy; compute modules only.
    pub cooling: Option<Cooling>,
    /// Product orientation (reserved).
    pub orientation: Orientation,
    /// Requested clearance around the product, millimeters, non-negative.
    pub clearance_mm: f64,
    /// Selected accessory tags; compute modules only (reserved).
    pub accessories: Option<BTreeSet<Accessory>>,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test label round-trips for every variant.
    #[test]
    fn test_labels_round_trip() {
        for m in MountType::ALL {
            assert_eq!(MountType::from_label(m.label()), Some(m));
        }
        for c in Cooling::ALL {
            assert_eq!(Cooling::from_label(c.label()), Some(c));
        }
        for o in Orientation::ALL {
            assert_eq!(Orientation::from_label(o.label()), Some(o));
        }
        for a in Accessory::ALL {
            assert_eq!(Accessory::from_label(a.label()), Some(a));
        }
    }

    /// Test unknown labels parse to None.
    #[test]
    fn test_unknown_label_rejected() {
        assert_eq!(MountType::from_label("Ceiling"), None);
        assert_eq!(Cooling::from_label("Active"), None); // label is "Active (Fan)"
    }

    /// Test requirement enums serialize to snake_case wire tags.
    #[test]
    fn test_snake_case_wire_tags() {
        assert_eq!(
            serde_json::to_string(&MountType::UnderDesk).unwrap(),
            "\"under_desk\""
        );
    }
}
