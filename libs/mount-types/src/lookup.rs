//! Product-lookup abstractions used at the catalog boundary.
//!
//! The pipeline treats "URL in, descriptor out" as an external collaborator.
//! The in-memory catalog below stands in for the real storefront scraper and
//! keeps tests free of network access.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::product::{Dimensions, PortCounts, ProductDescriptor, ProductMetadata, ProductType};

/// Minimal lookup trait mapping a product URL to its descriptor.
///
/// # Examples
/// ```
/// use mount_types::{ProductLookup, StaticCatalog};
/// let catalog = StaticCatalog::default();
/// assert!(catalog.lookup("https://example.com/dp/mystery-gadget").is_err());
/// ```
pub trait ProductLookup {
    /// Resolves a product URL to a full descriptor.
    fn lookup(&self, url: &str) -> Result<ProductDescriptor, LookupError>;
}

/// Error raised when product lookup fails.
///
/// # Examples
/// ```
/// use mount_types::{LookupError, ProductLookup, StaticCatalog};
/// let catalog = StaticCatalog::default();
/// let err = catalog.lookup("").unwrap_err();
/// assert!(matches!(err, LookupError::Parse { .. }));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// No catalog entry matches the URL.
    #[error("no supported product matches: {url}")]
    NotFound {
        /// The URL that failed to match.
        url: String,
    },
    /// The URL could not be interpreted at all.
    #[error("could not parse product URL: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },
}

/// Keyword-keyed in-memory catalog intended for tests and offline use.
///
/// Ships the boards the generator was validated against. Matching is
/// case-insensitive substring search over the URL, first keyword wins in
/// alphabetical keyword order.
///
/// # Examples
/// ```
/// use mount_types::{ProductLookup, StaticCatalog};
/// let catalog = StaticCatalog::default();
/// let jetson = catalog.lookup("https://amazon.com/NVIDIA-Jetson-Orin/dp/B0").unwrap();
/// assert_eq!(jetson.dimensions.width, 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    entries: BTreeMap<&'static str, ProductDescriptor>,
}

impl StaticCatalog {
    /// Inserts or replaces a keyword entry.
    pub fn insert(&mut self, keyword: &'static str, descriptor: ProductDescriptor) {
        self.entries.insert(keyword, descriptor);
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        let jetson = jetson_nano_orin();
        let rpi = raspberry_pi_4b();
        let arduino = arduino_uno_r4();
        entries.insert("jetson", jetson.clone());
        entries.insert("nvidia", jetson);
        entries.insert("raspberry", rpi.clone());
        entries.insert("rpi", rpi);
        entries.insert("arduino", arduino);
        Self { entries }
    }
}

impl ProductLookup for StaticCatalog {
    fn lookup(&self, url: &str) -> Result<ProductDescriptor, LookupError> {
        if url.trim().is_empty() {
            return Err(LookupError::Parse {
                message: "product URL is empty".into(),
            });
        }
        let url_lower = url.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| url_lower.contains(*keyword))
            .map(|(_, descriptor)| descriptor.clone())
            .ok_or_else(|| LookupError::NotFound { url: url.into() })
    }
}

fn jetson_nano_orin() -> ProductDescriptor {
    ProductDescriptor {
        dimensions: Dimensions {
            width: 100.0,
            height: 29.0,
            depth: 87.0,
        },
        product_type: ProductType::ComputeModule,
        metadata: ProductMetadata {
            name: "NVIDIA Jetson Nano Orin".into(),
            weight: Some("95g".into()),
            power_connector: Some("USB-C".into()),
            thermal_design: Some("active".into()),
            ports: PortCounts {
                usb: 2,
                ethernet: 1,
                hdmi: 1,
                gpio: 0,
            },
        },
        compatible_with: vec!["heatsink".into(), "fan".into(), "case".into()],
    }
}

fn raspberry_pi_4b() -> ProductDescriptor {
    ProductDescriptor {
        dimensions: Dimensions {
            width: 85.0,
            height: 56.0,
            depth: 17.0,
        },
        product_type: ProductType::ComputeModule,
        metadata: ProductMetadata {
            name: "Raspberry Pi 4 Model B".into(),
            weight: Some("46g".into()),
            power_connector: Some("USB-C".into()),
            thermal_design: Some("passive".into()),
            ports: PortCounts {
                usb: 4,
                ethernet: 1,
                hdmi: 2,
                gpio: 40,
            },
        },
        compatible_with: vec![
            "heatsink".into(),
            "fan".into(),
            "case".into(),
            "camera".into(),
            "display".into(),
        ],
    }
}

fn arduino_uno_r4() -> ProductDescriptor {
    ProductDescriptor {
        dimensions: Dimensions {
            width: 68.6,
            height: 53.4,
            depth: 12.0,
        },
        product_type: ProductType::ComputeModule,
        metadata: ProductMetadata {
            name: "Arduino Uno R4".into(),
            weight: Some("25g".into()),
            power_connector: Some("USB-C".into()),
            thermal_design: Some("passive".into()),
            ports: PortCounts {
                usb: 1,
                ethernet: 0,
                hdmi: 0,
                gpio: 32,
            },
        },
        compatible_with: vec!["case".into(), "shield".into()],
    }
}

// =============================================================================
// TESTS
// =============================================================================
