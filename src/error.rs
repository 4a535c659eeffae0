//! Errors raised while decoding sensor-specific subrecords

use crate::parser::SensorFamily;
use thiserror::Error;

/// The broad class of a decode failure
///
/// Paired with [`Error::family`], this lets callers decide per category and
/// per sonar whether a bad ping aborts a file or is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The subrecord ended before its layout did
    TruncatedRecord,
    /// The byte count was fine but the contents were not
    MalformedRecord,
    /// No decoder exists for the sensor id
    UnsupportedSensor,
    /// Records of two different families were folded together
    SensorMismatch,
}

/// Errors produced by the decoders and the accumulator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Fewer bytes remained than the layout requires
    #[error("{family} subrecord is truncated")]
    TruncatedRecord {
        /// The family whose decoder ran out of bytes
        family: SensorFamily,
    },

    /// A layout invariant was violated
    #[error("{family} subrecord is malformed: {reason}")]
    MalformedRecord {
        /// The family whose decoder rejected the bytes
        family: SensorFamily,
        /// What was wrong
        reason: String,
    },

    /// The sensor id has no registered decoder
    #[error("unsupported sensor id {0}")]
    UnsupportedSensor(u32),

    /// A record was folded into a batch of another family
    #[error("cannot accumulate a {found} record into a {expected} batch")]
    SensorMismatch {
        /// The family of the batch
        expected: SensorFamily,
        /// The family of the record or batch being folded in
        found: SensorFamily,
    },
}

impl Error {
    /// Return the category of the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::TruncatedRecord { .. } => ErrorCategory::TruncatedRecord,
            Error::MalformedRecord { .. } => ErrorCategory::MalformedRecord,
            Error::UnsupportedSensor(_) => ErrorCategory::UnsupportedSensor,
            Error::SensorMismatch { .. } => ErrorCategory::SensorMismatch,
        }
    }

    /// Return the sensor family the error is tagged with
    ///
    /// For a [`Error::SensorMismatch`] this is the family of the batch.
    /// An unsupported id has no family.
    pub fn family(&self) -> Option<SensorFamily> {
        match self {
            Error::TruncatedRecord { family } | Error::MalformedRecord { family, .. } => {
                Some(*family)
            }
            Error::SensorMismatch { expected, .. } => Some(*expected),
            Error::UnsupportedSensor(_) => None,
        }
    }

    pub(crate) fn malformed(family: SensorFamily, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            family,
            reason: reason.into(),
        }
    }

    /// Classify a binrw failure raised while decoding a family's layout
    pub(crate) fn from_binrw(family: SensorFamily, err: binrw::Error) -> Self {
        if err.is_eof() {
            Error::TruncatedRecord { family }
        } else {
            Error::malformed(family, err.to_string())
        }
    }
}
