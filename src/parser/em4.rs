//! Kongsberg EM4 series layout (EM710, EM302, EM122, EM2040)
use crate::model::{columnar_record, DecodeOptions};
use crate::parser::runtime::{EmRunTime, PRIMARY_RUN_TIME, SECONDARY_RUN_TIME};
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

/// Convert the raw transducer depth
///
/// The field is documented as a signed 32-bit integer, but the encoders
/// that wrote the files in circulation treat it as unsigned. Only strict
/// decoding follows the documented type.
pub(crate) fn transducer_depth(raw: u32, strict: bool) -> f64 {
    if strict {
        scaled(raw as i32, 20000.0)
    } else {
        scaled(raw, 20000.0)
    }
}

/// Combine the whole and fractional parts of a sampling frequency in Hz
///
/// The fraction is stored in units of 1/4e9 Hz.
pub(crate) fn sampling_frequency((whole, fraction): (u32, u32)) -> f64 {
    f64::from(whole) + f64::from(fraction) / 4e9
}

/// One transmit sector of an EM4 ping
#[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct Em4Sector {
    /// Transmit tilt angle in degrees
    #[br(map = |x: i16| scaled(x, 100.0))]
    pub tilt_angle: f64,
    /// Focus range in m, zero when the sector is not focused
    #[br(map = |x: u16| scaled(x, 10.0))]
    pub focus_range: f64,
    /// Signal length in seconds
    #[br(map = |x: u32| scaled(x, 1e6))]
    pub signal_length: f64,
    /// Transmit delay in seconds
    #[br(map = |x: u32| scaled(x, 1e6))]
    pub transmit_delay: f64,
    /// Center frequency in Hz
    #[br(map = |x: u32| scaled(x, 1e3))]
    pub center_frequency: f64,
    /// Mean absorption in dB/km
    #[br(map = |x: u16| scaled(x, 100.0))]
    pub mean_absorption: f64,
    /// Signal waveform identifier
    pub waveform_id: u8,
    /// Transmit sector number
    pub sector_number: u8,
    /// Signal bandwidth in Hz
    #[br(map = |x: u32| scaled(x, 1e3), pad_after = 16)]
    pub signal_bandwidth: f64,
}

columnar_record! {
    /// EM4 series (sensor ids 133, 134, 135 and 149)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big, import(options: DecodeOptions))]
    pub struct Em4 => Em4Batch {
        /// Sonar model number
        pub model_number: u16,
        /// Ping counter
        pub ping_counter: u16,
        /// Sonar head serial number
        pub serial_number: u16,
        /// Sound velocity at the transducer in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub surface_velocity: f64,
        /// Transmit transducer depth in m
        #[br(map = |x: u32| transducer_depth(x, options.strict))]
        pub transducer_depth: f64,
        /// Number of valid detections
        pub valid_detections: u16,
        /// Sampling frequency in Hz
        #[br(map = sampling_frequency)]
        pub sampling_frequency: f64,
        /// Doppler correction scale factor
        pub doppler_corr_scale: u32,
        /// Vehicle depth in m, zero for surface vessels
        #[br(map = |x: i32| scaled(x, 1000.0), pad_after = 16)]
        pub vehicle_depth: f64,
        /// Number of transmit sectors
        pub transmit_sectors: u16,
        /// The transmit sectors
        #[br(count = transmit_sectors, pad_after = 16)]
        pub sectors: Vec<Em4Sector>,
        /// Bit mask of the snapshots that follow
        pub run_time_id: u32,
        /// Run-time settings of the first head
        #[br(if((run_time_id & PRIMARY_RUN_TIME) != 0))]
        pub run_time_primary: Option<EmRunTime>,
        /// Run-time settings of the second head
        #[br(if((run_time_id & SECONDARY_RUN_TIME) != 0))]
        pub run_time_secondary: Option<EmRunTime>,
    }
}
