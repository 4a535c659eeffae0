//! Kongsberg EM3 series layouts (EM3000, EM3002, EM300, EM120 and kin)
//!
//! The processed EM3 layout and the raw-range EM3 layout share a run-time
//! snapshot block, which gained an absorption ratio field in GSF 2.08.
use crate::model::{columnar_record, DecodeOptions};
use crate::parser::em4::{sampling_frequency, transducer_depth};
use crate::parser::runtime::{Em3RunTime, PRIMARY_RUN_TIME, SECONDARY_RUN_TIME};
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

columnar_record! {
    /// EM3 series (sensor ids 118 to 120, 128 to 132 and 139)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big, import(options: DecodeOptions))]
    pub struct Em3 => Em3Batch {
        /// Sonar model number
        pub model_number: u16,
        /// Ping number
        pub ping_number: u16,
        /// Sonar head serial number
        pub serial_number: u16,
        /// Sound velocity at the transducer in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub surface_velocity: f64,
        /// Transducer depth in m
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub transducer_depth: f64,
        /// Number of valid beams
        pub valid_beams: u16,
        /// Sample rate in Hz
        pub sample_rate: u16,
        /// Depth difference between the two heads in m
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub depth_difference: f64,
        /// Transducer depth offset multiplier
        pub offset_multiplier: i8,
        /// Bit mask of the snapshots that follow
        pub run_time_id: u32,
        /// Run-time settings of the first head
        #[br(
            if((run_time_id & PRIMARY_RUN_TIME) != 0),
            args { version: options.version }
        )]
        pub run_time_primary: Option<Em3RunTime>,
        /// Run-time settings of the second head
        #[br(
            if((run_time_id & SECONDARY_RUN_TIME) != 0),
            args { version: options.version }
        )]
        pub run_time_secondary: Option<Em3RunTime>,
    }
}

/// One transmit sector of an EM3 raw-range ping
#[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct Em3RawSector {
    /// Transmit tilt angle in degrees
    #[br(map = |x: i16| scaled(x, 100.0))]
    pub tilt_angle: f64,
    /// Focus range in m
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
    /// Signal waveform identifier
    pub waveform_id: u8,
    /// Transmit sector number
    pub sector_number: u8,
    /// Signal bandwidth in Hz
    #[br(map = |x: u32| scaled(x, 1e3), pad_after = 16)]
    pub signal_bandwidth: f64,
}

columnar_record! {
    /// EM3 series raw range and beam angle (sensor ids 140 to 148)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big, import(options: DecodeOptions))]
    pub struct Em3Raw => Em3RawBatch {
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
        /// Vehicle depth in m
        #[br(map = |x: i32| scaled(x, 1000.0))]
        pub vehicle_depth: f64,
        /// Depth difference between the two heads in m
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub depth_difference: f64,
        /// Transducer depth offset multiplier
        #[br(pad_after = 16)]
        pub offset_multiplier: i8,
        /// Number of transmit sectors
        pub transmit_sectors: u16,
        /// The transmit sectors
        #[br(count = transmit_sectors, pad_after = 16)]
        pub sectors: Vec<Em3RawSector>,
        /// Bit mask of the snapshots that follow
        pub run_time_id: u32,
        /// Run-time settings of the first head
        #[br(
            if((run_time_id & PRIMARY_RUN_TIME) != 0),
            args { version: options.version }
        )]
        pub run_time_primary: Option<Em3RunTime>,
        /// Run-time settings of the second head
        #[br(
            if((run_time_id & SECONDARY_RUN_TIME) != 0),
            args { version: options.version }
        )]
        pub run_time_secondary: Option<Em3RunTime>,
    }
}
