//! R2Sonic 2020/2022/2024 layout
//!
//! The sonar's own BTH0 header, carried through with its scaled integer
//! encoding. Angles are in radians.
use crate::model::{columnar_record, text, Columnar, TimeSpec};
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;
use time::OffsetDateTime;

pub(crate) fn micro(x: u32) -> f64 {
    scaled(x, 1e6)
}

pub(crate) fn signed_micro(x: i32) -> f64 {
    scaled(x, 1e6)
}

/// Sonar settings from the BTH0 header
///
/// The sensor-specific subrecord and the imagery header both start with
/// this block.
#[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct R2SonicSettings {
    /// Model name, e.g. `2024`
    #[br(map = |x: [u8; 12]| text(&x))]
    pub model_number: String,
    /// Serial number
    #[br(map = |x: [u8; 12]| text(&x))]
    pub serial_number: String,
    /// Time of the sonar datagram
    #[br(try_map = |t: TimeSpec| t.to_datetime())]
    #[serde(with = "time::serde::rfc3339")]
    pub dg_time: OffsetDateTime,
    /// Ping number
    pub ping_number: u32,
    /// Time between pings in s
    #[br(map = micro)]
    pub ping_period: f64,
    /// Sound speed in m/s
    #[br(map = |x: u32| scaled(x, 100.0))]
    pub sound_speed: f64,
    /// Center frequency in Hz
    #[br(map = |x: u32| scaled(x, 1e3))]
    pub frequency: f64,
    /// Transmit source level in dB re 1 microPa at 1 m
    #[br(map = |x: u32| scaled(x, 100.0))]
    pub tx_power: f64,
    /// Transmit pulse width in s
    #[br(map = |x: u32| scaled(x, 1e7))]
    pub tx_pulse_width: f64,
    /// Vertical transmit beam width
    #[br(map = micro)]
    pub tx_beamwidth_vert: f64,
    /// Horizontal transmit beam width
    #[br(map = micro)]
    pub tx_beamwidth_horiz: f64,
    /// Vertical transmit steering angle
    #[br(map = signed_micro)]
    pub tx_steering_vert: f64,
    /// Horizontal transmit steering angle
    #[br(map = signed_micro)]
    pub tx_steering_horiz: f64,
    /// Transmit flags
    pub tx_misc_info: u32,
    /// Receiver bandwidth in Hz
    #[br(map = |x: u32| scaled(x, 1e4))]
    pub rx_bandwidth: f64,
    /// Receiver sample rate in Hz
    #[br(map = |x: u32| scaled(x, 1e3))]
    pub rx_sample_rate: f64,
    /// Receiver range setting in s
    #[br(map = |x: u32| scaled(x, 1e5))]
    pub rx_range: f64,
    /// Receiver gain in dB
    #[br(map = |x: u32| scaled(x, 100.0))]
    pub rx_gain: f64,
    /// Spreading loss in dB
    #[br(map = |x: u32| scaled(x, 1000.0))]
    pub rx_spreading: f64,
    /// Absorption loss in dB/km
    #[br(map = |x: u32| scaled(x, 1000.0))]
    pub rx_absorption: f64,
    /// Receiver mount tilt
    #[br(map = signed_micro)]
    pub rx_mount_tilt: f64,
    /// Receiver flags
    pub rx_misc_info: u32,
    /// Unused
    pub reserved: u16,
    /// Number of beams in the ping
    pub num_beams: u16,
}

impl Columnar for R2SonicSettings {
    type Column = Vec<R2SonicSettings>;
}

columnar_record! {
    /// R2Sonic (sensor ids 151 to 153)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct R2Sonic => R2SonicBatch {
        /// Sonar settings
        #[serde(flatten)]
        pub settings: R2SonicSettings,
        /// Beam angle table settings from the A0 packet
        #[br(map = |x: [i32; 6]| x.map(signed_micro))]
        pub a0_more_info: [f64; 6],
        /// Beam detection settings from the A2 packet
        #[br(map = |x: [i32; 6]| x.map(signed_micro))]
        pub a2_more_info: [f64; 6],
        /// Minimum depth gate in m
        #[br(map = micro)]
        pub g0_depth_gate_min: f64,
        /// Maximum depth gate in m
        #[br(map = micro)]
        pub g0_depth_gate_max: f64,
        /// Slope of the depth gate in radians
        #[br(map = signed_micro, pad_after = 32)]
        pub g0_depth_gate_slope: f64,
    }
}
