//! Kongsberg KMALL layout (EM2040, EM304, EM712 and later)
//!
//! A flattened copy of the common part and ping info of the `#MRZ`
//! datagram, followed by the transmit sectors and the extra detection
//! classes.
#![allow(missing_docs)]
use crate::model::columnar_record;
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

/// One transmit sector of a KMALL ping
#[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct KmallTxSector {
    /// Transmit sector index
    pub tx_sector_numb: u8,
    /// Transmit array index
    pub tx_arr_numb: u8,
    /// Transmit sub-array index
    pub tx_sub_array: u8,
    /// Signal waveform (0 CW, 1 FM up sweep, 2 FM down sweep)
    pub signal_wave_form: u8,
    /// Transmit delay in s
    #[br(map = |x: u32| scaled(x, 1e6))]
    pub sector_transmit_delay: f64,
    /// Tilt angle relative to the transmit array in degrees
    #[br(map = |x: i16| scaled(x, 100.0))]
    pub tilt_angle_re_tx: f64,
    /// Nominal source level in dB
    #[br(map = |x: i16| scaled(x, 100.0))]
    pub tx_nominal_source_level: f64,
    /// Focus range in m, zero when not focused
    #[br(map = |x: u16| scaled(x, 10.0))]
    pub tx_focus_range: f64,
    /// Center frequency in Hz
    #[br(map = |x: u32| scaled(x, 1e3))]
    pub centre_freq: f64,
    /// Signal bandwidth in Hz
    #[br(map = |x: u32| scaled(x, 1e3))]
    pub signal_band_width: f64,
    /// Total signal length in s
    #[br(map = |x: u32| scaled(x, 1e6))]
    pub total_signal_length: f64,
    /// Pulse shading in percent
    #[br(pad_after = 20)]
    pub pulse_shading: u8,
}

/// One extra detection class of a KMALL ping
#[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct KmallDetectionClass {
    /// Detections in this class
    pub num_extra_det_in_class: u16,
    /// Set when the class raised an alarm
    #[br(pad_after = 5)]
    pub alarm_flag: u8,
}

columnar_record! {
    /// KMALL (sensor id 156)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct Kmall => KmallBatch {
        pub gsf_kmall_version: u8,
        pub dgm_type: u8,
        pub dgm_version: u8,
        pub system_id: u8,
        #[br(pad_after = 8)]
        pub echo_sounder_id: u16,
        pub num_bytes_cmn_part: u16,
        pub ping_cnt: u16,
        pub rx_fans_per_ping: u8,
        pub rx_fan_index: u8,
        pub swaths_per_ping: u8,
        pub swath_along_position: u8,
        pub tx_transducer_ind: u8,
        pub rx_transducer_ind: u8,
        pub num_rx_transducers: u8,
        #[br(pad_after = 16)]
        pub algorithm_type: u8,
        #[br(pad_after = 2)]
        pub num_bytes_info_data: u16,
        /// Ping rate in Hz
        #[br(map = |x: u32| scaled(x, 1e5))]
        pub ping_rate: f64,
        pub beam_spacing: u8,
        pub depth_mode: u8,
        pub sub_depth_mode: u8,
        pub distance_btw_swath: u8,
        pub detection_mode: u8,
        pub pulse_form: u8,
        /// Frequency in Hz, or a mode index below 100
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub frequency_mode: f64,
        /// Lower limit of the frequency range in Hz
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub freq_range_low_lim: f64,
        /// Upper limit of the frequency range in Hz
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub freq_range_high_lim: f64,
        /// Longest total transmit pulse in s
        #[br(map = |x: u32| scaled(x, 1e6))]
        pub max_total_tx_pulse_length: f64,
        /// Longest effective transmit pulse in s
        #[br(map = |x: u32| scaled(x, 1e6))]
        pub max_eff_tx_pulse_length: f64,
        /// Widest effective transmit bandwidth in Hz
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub max_eff_tx_band_width: f64,
        /// Absorption coefficient in dB/km
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub abs_coeff: f64,
        /// Port sector edge in degrees
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub port_sector_edge: f64,
        /// Starboard sector edge in degrees
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub starb_sector_edge: f64,
        /// Mean port coverage in degrees
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub port_mean_cov_deg: f64,
        /// Mean starboard coverage in degrees
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub starb_mean_cov_deg: f64,
        /// Mean port coverage in m
        pub port_mean_cov_m: i16,
        /// Mean starboard coverage in m
        pub starb_mean_cov_m: i16,
        pub mode_and_stabilisation: u8,
        pub runtime_filter1: u8,
        pub runtime_filter2: u16,
        pub pipe_tracking_status: u32,
        /// Transmit array size in use in degrees
        #[br(map = |x: u16| scaled(x, 1000.0))]
        pub transmit_array_size_used: f64,
        /// Receive array size in use in degrees
        #[br(map = |x: u16| scaled(x, 1000.0))]
        pub receive_array_size_used: f64,
        /// Transmit power relative to maximum in dB
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub transmit_power: f64,
        /// Seconds until the source level ramp-up completes
        pub sl_ramp_up_time_remaining: u16,
        /// Yaw correction in degrees
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub yaw_angle: f64,
        pub num_tx_sectors: u16,
        pub num_bytes_per_tx_sector: u16,
        /// Vessel heading in degrees
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub heading_vessel: f64,
        /// Sound speed at the transducer in m/s
        #[br(map = |x: u32| scaled(x, 100.0))]
        pub sound_speed_at_tx_depth: f64,
        /// Transmit transducer depth in m
        #[br(map = |x: i32| scaled(x, 1000.0))]
        pub tx_transducer_depth: f64,
        /// Water level relative to the reference point in m
        #[br(map = |x: i32| scaled(x, 1000.0))]
        pub z_water_level_re_ref_point: f64,
        /// Offset between the `.kmall` and `.all` reference points in m
        #[br(map = |x: i32| scaled(x, 1000.0))]
        pub x_kmall_to_all: f64,
        #[br(map = |x: i32| scaled(x, 1000.0))]
        pub y_kmall_to_all: f64,
        pub lat_long_info: u8,
        pub pos_sensor_status: u8,
        pub attitude_sensor_status: u8,
        /// Latitude in degrees
        #[br(map = |x: i32| scaled(x, 1e7))]
        pub latitude: f64,
        /// Longitude in degrees
        #[br(map = |x: i32| scaled(x, 1e7))]
        pub longitude: f64,
        /// Ellipsoid height of the reference point in m
        #[br(map = |x: i32| scaled(x, 1000.0), pad_after = 32)]
        pub ellipsoid_height_re_ref_point: f64,
        /// The transmit sectors
        #[br(count = num_tx_sectors)]
        pub tx_sectors: Vec<KmallTxSector>,
        pub num_extra_detection_classes: u16,
        /// The extra detection classes
        #[br(count = num_extra_detection_classes, pad_after = 32)]
        pub extra_detection_classes: Vec<KmallDetectionClass>,
    }
}
