//! Query parameters for the nearest-places lookup.
//!
//! None of the fields are validated; out-of-range coordinates, unknown
//! categories and oversized limits are forwarded to the service as given.

use serde::{Deserialize, Serialize};

/// Result count requested when the caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 50;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// A nearest-places query: a point, a category filter and a result cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestQuery {
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl NearestQuery {
    pub fn new(lat: f64, lng: f64, category: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            category: category.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}
