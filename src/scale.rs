//! Conversions from raw fixed-point integers to physical values
//!
//! Most sensor fields are stored as integers in a fixed decimal unit and are
//! normalized by a per-field divisor. Imagery headers may instead carry their
//! own scale and offset, which take precedence over the per-generation
//! default.
use serde::Serialize;

/// Divide a raw integer by a fixed divisor
///
/// ```
/// # use gsf_sensor::scale::scaled;
/// assert_eq!(scaled(500u16, 10.0), 50.0);
/// ```
pub fn scaled<T: Into<f64>>(raw: T, divisor: f64) -> f64 {
    raw.into() / divisor
}

/// Remove an offset from a raw integer, then divide
pub fn offset_scaled<T: Into<f64>>(raw: T, offset: f64, divisor: f64) -> f64 {
    (raw.into() - offset) / divisor
}

/// A scale and offset pair converting raw samples to physical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleOffset {
    /// The divisor applied after removing the offset
    pub scale: f64,
    /// The value subtracted from each raw sample
    pub offset: f64,
}

impl ScaleOffset {
    /// Create a new ScaleOffset
    pub const fn new(scale: f64, offset: f64) -> Self {
        ScaleOffset { scale, offset }
    }

    /// Build a ScaleOffset from the raw pair embedded in a record
    ///
    /// A zero scale means the encoder did not fill the pair in, so there is
    /// no embedded value.
    pub fn embedded(scale: i16, offset: i16) -> Option<Self> {
        (scale != 0).then(|| ScaleOffset::new(f64::from(scale), f64::from(offset)))
    }

    /// Pick the embedded pair when there is one, otherwise the default
    pub fn resolve(embedded: Option<ScaleOffset>, default: ScaleOffset) -> ScaleOffset {
        embedded.unwrap_or(default)
    }

    /// Convert a raw value
    pub fn apply<T: Into<f64>>(&self, raw: T) -> f64 {
        offset_scaled(raw, self.offset, self.scale)
    }
}
