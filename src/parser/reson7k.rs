//! Reson 7k and T-Series layouts
//!
//! Both carry a copy of the 7000 sonar settings record, stored as
//! fixed-point integers. The T-Series adds the coverage and detection
//! settings introduced with that sonar generation.
#![allow(missing_docs)]
use crate::model::{columnar_record, text};
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

columnar_record! {
    /// Reson 7100 series (sensor id 138)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct Reson7100 => Reson7100Batch {
        pub protocol_version: u16,
        #[br(pad_after = 16)]
        pub device_id: u32,
        pub major_serial_number: u32,
        pub minor_serial_number: u32,
        pub ping_number: u32,
        pub multi_ping_seq: u16,
        /// Hz
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub frequency: f64,
        /// Hz
        #[br(map = |x: u32| scaled(x, 1e4))]
        pub sample_rate: f64,
        /// Hz
        #[br(map = |x: u32| scaled(x, 1e4))]
        pub receiver_bandwdth: f64,
        /// Seconds
        #[br(map = |x: u32| scaled(x, 1e7))]
        pub tx_pulse_width: f64,
        pub tx_pulse_type_id: u32,
        pub tx_pulse_envlp_id: u32,
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub tx_pulse_envlp_param: f64,
        pub tx_pulse_reserved: u32,
        /// Pings per second
        #[br(map = |x: u32| scaled(x, 1e6))]
        pub max_ping_rate: f64,
        /// Seconds
        #[br(map = |x: u32| scaled(x, 1e6))]
        pub ping_period: f64,
        /// Meters
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub range: f64,
        /// dB re 1 microPa
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub power: f64,
        /// dB
        #[br(map = |x: i32| scaled(x, 100.0))]
        pub gain: f64,
        pub control_flags: u32,
        pub projector_id: u32,
        /// Degrees
        #[br(map = |x: i32| scaled(x, 1000.0))]
        pub projector_steer_angl_vert: f64,
        /// Degrees
        #[br(map = |x: i32| scaled(x, 100.0))]
        pub projector_steer_angl_horz: f64,
        /// Degrees
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub projector_beam_wdth_vert: f64,
        /// Degrees
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub projector_beam_wdth_horz: f64,
        /// Meters
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub projector_beam_focal_pt: f64,
        pub projector_beam_weighting_window_type: u32,
        pub projector_beam_weighting_window_param: u32,
        pub transmit_flags: u32,
        pub hydrophone_id: u32,
        pub receiving_beam_weighting_window_type: u32,
        pub receiving_beam_weighting_window_param: u32,
        pub receive_flags: u32,
        /// Degrees
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub receive_beam_width: f64,
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub range_filt_min: f64,
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub range_filt_max: f64,
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub depth_filt_min: f64,
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub depth_filt_max: f64,
        /// dB/km
        #[br(map = |x: u16| scaled(x, 1000.0))]
        pub absorption: f64,
        /// m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub sound_velocity: f64,
        #[br(map = |x: u16| scaled(x, 1000.0))]
        pub spreading: f64,
        #[br(pad_after = 15)]
        pub raw_data_from_7027: u8,
        pub sv_source: u8,
        #[br(pad_after = 8)]
        pub layer_comp_flag: u8,
    }
}

columnar_record! {
    /// Reson T-Series (sensor id 155)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct ResonTSeries => ResonTSeriesBatch {
        pub protocol_version: u16,
        pub device_id: u32,
        pub number_devices: u32,
        #[br(pad_after = 10)]
        pub system_enumerator: u16,
        pub major_serial_number: u32,
        pub minor_serial_number: u32,
        pub ping_number: u32,
        pub multi_ping_seq: u16,
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub frequency: f64,
        #[br(map = |x: u32| scaled(x, 1e4))]
        pub sample_rate: f64,
        #[br(map = |x: u32| scaled(x, 1e4))]
        pub receiver_bandwdth: f64,
        #[br(map = |x: u32| scaled(x, 1e7))]
        pub tx_pulse_width: f64,
        pub tx_pulse_type_id: u32,
        pub tx_pulse_envlp_id: u32,
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub tx_pulse_envlp_param: f64,
        pub tx_pulse_mode: u16,
        pub tx_pulse_reserved: u16,
        #[br(map = |x: u32| scaled(x, 1e6))]
        pub max_ping_rate: f64,
        #[br(map = |x: u32| scaled(x, 1e6))]
        pub ping_period: f64,
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub range: f64,
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub power: f64,
        #[br(map = |x: i32| scaled(x, 100.0))]
        pub gain: f64,
        pub control_flags: u32,
        pub projector_id: u32,
        #[br(map = |x: i32| scaled(x, 1000.0))]
        pub projector_steer_angl_vert: f64,
        #[br(map = |x: i32| scaled(x, 100.0))]
        pub projector_steer_angl_horz: f64,
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub projector_beam_wdth_vert: f64,
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub projector_beam_wdth_horz: f64,
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub projector_beam_focal_pt: f64,
        pub projector_beam_weighting_window_type: u32,
        pub projector_beam_weighting_window_param: u32,
        pub transmit_flags: u32,
        pub hydrophone_id: u32,
        pub receiving_beam_weighting_window_type: u32,
        pub receiving_beam_weighting_window_param: u32,
        pub receive_flags: u32,
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub receive_beam_width: f64,
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub range_filt_min: f64,
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub range_filt_max: f64,
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub depth_filt_min: f64,
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub depth_filt_max: f64,
        #[br(map = |x: u16| scaled(x, 1000.0))]
        pub absorption: f64,
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub sound_velocity: f64,
        pub sv_source: u8,
        #[br(map = |x: u16| scaled(x, 1000.0))]
        pub spreading: f64,
        pub beam_spacing_mode: u16,
        pub sonar_source_mode: u16,
        pub coverage_mode: u8,
        /// Degrees
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub coverage_angle: f64,
        /// Degrees
        #[br(map = |x: i32| scaled(x, 100.0), pad_after = 3)]
        pub horizontal_receiver_steering_angle: f64,
        pub uncertainty_type: u32,
        /// Degrees
        #[br(map = |x: i32| scaled(x, 100.0))]
        pub transmitter_steering_angle: f64,
        /// Degrees
        #[br(map = |x: i32| scaled(x, 100.0))]
        pub applied_roll: f64,
        pub detection_algorithm: u16,
        pub detection_flags: u32,
        /// The 7027 detection record settings are reserved and skipped
        #[br(map = |x: [u8; 60]| text(&x), pad_after = 420 + 32)]
        pub device_description: String,
    }
}
