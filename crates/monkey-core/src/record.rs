//! Monkey record value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single species (or individual celebrity monkey) in the catalog.
///
/// Records are built once when the catalog is created and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonkeyRecord {
    /// Canonical name. Lookups compare it case-insensitively.
    pub name: String,

    /// Primary region where the monkey is found.
    pub location: String,

    /// Short description.
    pub details: String,

    /// URL of a representative image.
    pub image_url: String,

    /// Approximate population.
    pub population: u64,

    /// Latitude in decimal degrees.
    pub latitude: f64,

    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl MonkeyRecord {
    /// Creates a record from its parts.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        details: impl Into<String>,
        image_url: impl Into<String>,
        population: u64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            details: details.into(),
            image_url: image_url.into(),
            population,
            latitude,
            longitude,
        }
    }

    /// Returns the coordinates formatted as `lat, lon`.
    pub fn coordinates_display(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }
}

impl fmt::Display for MonkeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}
