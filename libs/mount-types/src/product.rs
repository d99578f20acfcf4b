//! # Product Descriptor Types
//!
//! Typed representation of an externally sourced product: its physical
//! dimensions, its type tag, and the free-form metadata the compiler reads
//! for labeling and cutout sizing.

use serde::{Deserialize, Serialize};

/// Physical product dimensions in millimeters.
///
/// All three axes must be positive for a descriptor to be compilable; the
/// compiler enforces this, not the type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the z axis (how tall the product stands).
    pub height: f64,
    /// Extent along the y axis.
    pub depth: f64,
}

/// Product category tag driving the question sequence.
///
/// The enumeration is open: tags this version does not know deserialize to
/// [`ProductType::Unknown`] and receive base behavior rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ProductType {
    /// Single-board computers and similar boards that need cooling and
    /// accessory questions.
    ComputeModule,
    /// Peripherals housed as-is.
    Accessory,
    /// Any tag this version does not recognize.
    Unknown,
}

impl From<String> for ProductType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "compute_module" => Self::ComputeModule,
            "accessory" => Self::Accessory,
            _ => Self::Unknown,
        }
    }
}

/// Per-interface port counts declared by the catalog.
///
/// Counts default to zero when the catalog omits an interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortCounts {
    /// USB host ports.
    #[serde(default)]
    pub usb: u32,
    /// Ethernet jacks.
    #[serde(default)]
    pub ethernet: u32,
    /// HDMI outputs.
    #[serde(default)]
    pub hdmi: u32,
    /// GPIO header pins.
    #[serde(default)]
    pub gpio: u32,
}

/// Free-form catalog attributes passed through to the compiler.
///
/// Only presence is validated; values are used for labeling and cutout
/// placement, never interpreted beyond that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetadata {
    /// Marketing name, used to label the emitted script.
    pub name: String,
    /// Shipping weight, e.g. `"95g"`.
    #[serde(default)]
    pub weight: Option<String>,
    /// Power connector type, e.g. `"USB-C"`. Presence requests a power
    /// cutout in the shell.
    #[serde(default)]
    pub power_connector: Option<String>,
    /// Thermal design hint from the catalog, e.g. `"active"`.
    #[serde(default)]
    pub thermal_design: Option<String>,
    /// Declared port counts.
    #[serde(default)]
    pub ports: PortCounts,
}

/// Externally sourced product record, immutable once obtained.
///
/// ## Example
///
/// ```rust
/// use mount_types::{Dimensions, ProductDescriptor, ProductMetadata, ProductType};
///
/// let descriptor = ProductDescriptor {
///     dimensions: Dimensions { width: 100.0, height: 29.0, depth: 87.0 },
///     product_type: ProductType::ComputeModule,
///     metadata: ProductMetadata {
///         name: "NVIDIA Jetson Nano Orin".into(),
///         weight: Some("95g".into()),
///         power_connector: Some("USB-C".into()),
///         thermal_design: Some("active".into()),
///         ports: Default::default(),
///     },
///     compatible_with: vec!["heatsink".into(), "fan".into()],
/// };
/// assert_eq!(descriptor.product_type, ProductType::ComputeModule);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptor {
    /// Physical dimensions in millimeters.
    pub dimensions: Dimensions,
    /// Category tag.
    pub product_type: ProductType,
    /// Pass-through catalog attributes.
    pub metadata: ProductMetadata,
    /// Accessory compatibility tags, pass-through.
    #[serde(default)]
    pub compatible_with: Vec<String>,
}

// =============================================================================
// TESTS
// =============================================================================
