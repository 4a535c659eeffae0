#![warn(missing_docs)]
//! Decoding of GSF sensor-specific subrecords
//!
//! Every GSF swath bathymetry ping carries a sensor-specific subrecord whose
//! layout depends on the sonar that produced it, and optionally an intensity
//! (backscatter) subrecord holding per-beam time series. This crate turns
//! those payloads into normalized records. It does no I/O of its own: the
//! caller positions a [`cursor::Cursor`] at the start of the subrecord and
//! supplies the sensor id from the enclosing record.
//!
//! ```
//! use gsf_sensor::cursor::Cursor;
//! use gsf_sensor::model::DecodeOptions;
//! use gsf_sensor::parser::{self, SensorRecord};
//!
//! // An EM100 subrecord: pitch, transducer pitch, five settings and a counter
//! let bytes = [0x01, 0xf4, 0xff, 0x9c, 1, 2, 3, 4, 5, 0x00, 0x2a, 0x00];
//! let mut cursor = Cursor::new(&bytes);
//! let record = parser::decode(104, &mut cursor, &DecodeOptions::default())?;
//! if let SensorRecord::Em100(em100) = record {
//!     assert_eq!(em100.ship_pitch, 5.0);
//!     assert_eq!(em100.transducer_pitch, -1.0);
//! }
//! # Ok::<(), gsf_sensor::error::Error>(())
//! ```
pub mod cli;
pub mod cursor;
pub mod error;
pub mod intensity;
pub mod model;
pub mod parallel;
pub mod parser;
pub mod scale;

#[cfg(test)]
pub(crate) mod testutil;
