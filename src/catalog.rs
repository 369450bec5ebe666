//! The static catalog of named water bodies.
//!
//! The catalog is loaded once at startup — either the embedded data set or an
//! external JSON file with the same schema — validated, and never mutated
//! afterwards. Everything downstream works with catalog indices, so the order
//! of entries is significant and preserved exactly as loaded.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// The data set shipped with the binary, in its original order.
const BUILTIN_DATA: &str = include_str!("../assets/gewaesser.json");

/// Stable, opaque identifier for a catalog entry. Assigned from load order
/// and valid for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WaterId(pub(crate) u32);

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether the coordinate lies inside the valid latitude/longitude range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// One named water body.
#[derive(Debug, Clone)]
pub struct Water {
    pub id: WaterId,
    pub name: String,
    pub coordinate: Coordinate,
}

/// Errors raised while loading a catalog. After a catalog has been
/// constructed there are no further failure modes.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog entry {index} has an empty name")]
    EmptyName { index: usize },

    #[error("catalog entry '{name}' has coordinate ({latitude}, {longitude}) outside the valid range")]
    InvalidCoordinate {
        name: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("catalog contains no entries")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    latitude: f64,
    longitude: f64,
}

/// Immutable ordered list of [`Water`] entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    waters: Vec<Water>,
}

impl Catalog {
    /// Parse and validate the embedded data set.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_DATA)
    }

    /// Load a catalog from an external JSON file with the builtin schema.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a catalog from JSON text, validating every entry.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawEntry> = serde_json::from_str(text)?;
        Self::from_entries(raw)
    }

    fn from_entries(raw: Vec<RawEntry>) -> Result<Self, CatalogError> {
        if raw.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut waters = Vec::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            let coordinate = Coordinate::new(entry.latitude, entry.longitude);
            if !coordinate.is_valid() {
                return Err(CatalogError::InvalidCoordinate {
                    name: entry.name,
                    latitude: entry.latitude,
                    longitude: entry.longitude,
                });
            }
            waters.push(Water {
                id: WaterId(index as u32),
                name: entry.name,
                coordinate,
            });
        }

        Ok(Self { waters })
    }

    pub fn len(&self) -> usize {
        self.waters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Water> {
        self.waters.get(index)
    }

    pub fn by_id(&self, id: WaterId) -> Option<&Water> {
        self.waters.get(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Water> {
        self.waters.iter()
    }
}
