//! Decoding many pings across worker threads
//!
//! Pings are independent, so a file's sensor-specific subrecords can be
//! decoded in parallel once their byte ranges are known. The pings are
//! spread over a rayon pool and collected by index, so results come back in
//! ping order whatever the thread timing.
use crate::error::Error;
use crate::model::DecodeOptions;
use crate::parser::{self, SensorRecord};
use log::{debug, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::num::NonZeroUsize;

/// The sensor-specific subrecord of one ping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingSlice<'a> {
    /// The sensor id of the enclosing ping
    pub sensor_id: u32,
    /// The subrecord bytes
    pub bytes: &'a [u8],
}

impl<'a> PingSlice<'a> {
    /// Create a new PingSlice
    pub fn new(sensor_id: u32, bytes: &'a [u8]) -> Self {
        PingSlice { sensor_id, bytes }
    }
}

/// Decode every ping on a pool of `workers` threads
///
/// The result for each ping is at the same index as the ping. A failed ping
/// does not stop the others. If the pool cannot be built the pings are
/// decoded on rayon's global pool instead.
///
/// # Panics
///
/// Panics if any ping carries [`parser::UNDEFINED_SENSOR_ID`].
pub fn decode_pings(
    pings: &[PingSlice<'_>],
    options: &DecodeOptions,
    workers: NonZeroUsize,
) -> Vec<Result<SensorRecord, Error>> {
    let decode_all = || -> Vec<Result<SensorRecord, Error>> {
        pings
            .par_iter()
            .map(|ping| parser::decode_bytes(ping.sensor_id, ping.bytes, options))
            .collect()
    };

    match ThreadPoolBuilder::new().num_threads(workers.get()).build() {
        Ok(pool) => {
            debug!("decoding {} pings on {} workers", pings.len(), workers);
            pool.install(decode_all)
        }
        Err(err) => {
            warn!("could not build a pool of {workers} workers ({err}), using the global pool");
            decode_all()
        }
    }
}
