//! Run-time parameter snapshots embedded in Kongsberg sensor records
//!
//! EM3, EM3 raw and EM4 pings may carry up to two snapshots of the sonar's
//! run-time settings, one per transducer head. Each snapshot stores swath
//! width and coverage as a port/starboard pair in which a zero starboard
//! value means the port value covers both sides.
use crate::model::{sentinel, SchemaVersion, TimeSpec};
use crate::scale::scaled;
use binrw::binread;
use serde::Serialize;
use time::OffsetDateTime;

/// The model number of the dual-head EM3002, whose snapshots carry a
/// Durotong speed
pub const DUAL_HEAD_MODEL: u16 = 1002;

/// Snapshot presence bits in `run_time_id`
pub(crate) const PRIMARY_RUN_TIME: u32 = 0x01;
pub(crate) const SECONDARY_RUN_TIME: u32 = 0x02;

/// A port/starboard pair with its total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swath {
    /// Port side value
    pub port: f64,
    /// Starboard side value
    pub starboard: f64,
    /// Both sides together
    pub total: f64,
}

impl Swath {
    /// Derive the pair from the raw values
    ///
    /// ```
    /// # use gsf_sensor::parser::runtime::Swath;
    /// let symmetric = Swath::split(40, 0);
    /// assert_eq!((symmetric.port, symmetric.starboard, symmetric.total), (20.0, 20.0, 40.0));
    /// let split = Swath::split(40, 30);
    /// assert_eq!((split.port, split.starboard, split.total), (40.0, 30.0, 70.0));
    /// ```
    pub fn split(port: u16, starboard: u16) -> Swath {
        let port = f64::from(port);
        if starboard == 0 {
            Swath {
                port: port / 2.0,
                starboard: port / 2.0,
                total: port,
            }
        } else {
            let starboard = f64::from(starboard);
            Swath {
                port,
                starboard,
                total: port + starboard,
            }
        }
    }
}

/// EM3 series run-time snapshot, shared by the EM3 and EM3 raw layouts
#[binread]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[br(big, import { version: SchemaVersion })]
pub struct Em3RunTime {
    /// Sonar model number
    pub model_number: u16,
    /// Time of the datagram the snapshot was taken from
    #[br(try_map = |t: TimeSpec| t.to_datetime())]
    #[serde(with = "time::serde::rfc3339")]
    pub dg_time: OffsetDateTime,
    /// Ping number
    pub ping_number: u16,
    /// Sonar head serial number
    pub serial_number: u16,
    /// System status bits
    pub system_status: u32,
    /// Ping mode
    pub mode: u8,
    /// Filter identifier
    pub filter_id: u8,
    /// Minimum depth in m
    pub min_depth: u16,
    /// Maximum depth in m
    pub max_depth: u16,
    /// Absorption coefficient in dB/km
    #[br(map = |x: u16| scaled(x, 100.0))]
    pub absorption: f64,
    /// Transmit pulse length in microseconds
    pub pulse_length: u16,
    /// Transmit beam width in degrees
    #[br(map = |x: u16| scaled(x, 10.0))]
    pub transmit_beam_width: f64,
    /// Transmit power reduction in dB
    pub power_reduction: u8,
    /// Receive beam width in degrees
    #[br(map = |x: u8| scaled(x, 10.0))]
    pub receive_beam_width: f64,
    /// Receive bandwidth in Hz
    #[br(map = |x: u8| u32::from(x) * 50)]
    pub receive_bandwidth: u32,
    /// Receiver fixed gain in dB
    pub receive_gain: u8,
    /// Time varied gain cross-over angle in degrees
    pub cross_over_angle: u8,
    /// Source of the surface sound speed
    pub ssv_source: u8,
    #[br(temp)]
    port_swath_width: u16,
    /// Beam spacing mode
    pub beam_spacing: u8,
    #[br(temp)]
    port_coverage_sector: u8,
    /// Yaw and pitch stabilization mode
    pub stabilization: u8,
    #[br(temp)]
    stbd_coverage_sector: u8,
    #[br(temp)]
    stbd_swath_width: u16,
    /// Maximum swath width in m
    #[br(calc = Swath::split(port_swath_width, stbd_swath_width))]
    pub swath_width: Swath,
    /// Maximum coverage sector in degrees
    #[br(calc = Swath::split(port_coverage_sector.into(), stbd_coverage_sector.into()))]
    pub coverage_sector: Swath,
    #[br(temp)]
    model_field: u16,
    /// Durotong speed in m/s, written only by the dual-head model
    #[br(calc = (model_number == DUAL_HEAD_MODEL).then(|| scaled(model_field, 10.0)))]
    #[serde(serialize_with = "sentinel::nan")]
    pub durotong_speed: Option<f64>,
    #[br(temp, pad_after = 3)]
    hilo_field: u8,
    /// High/low frequency absorption coefficient ratio, written from GSF 2.08
    #[br(calc = version.at_least(2, 8).then_some(hilo_field))]
    #[serde(serialize_with = "sentinel::zero")]
    pub hilo_freq_absorp_ratio: Option<u8>,
}

/// EM4 series run-time snapshot
#[binread]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct EmRunTime {
    /// Sonar model number
    pub model_number: u16,
    /// Time of the datagram the snapshot was taken from
    #[br(try_map = |t: TimeSpec| t.to_datetime())]
    #[serde(with = "time::serde::rfc3339")]
    pub dg_time: OffsetDateTime,
    /// Ping counter
    pub ping_counter: u16,
    /// Sonar head serial number
    pub serial_number: u16,
    /// Operator station status bits
    pub operator_station_status: u8,
    /// Processing unit status bits
    pub processing_unit_status: u8,
    /// Beam-forming and signal processor status bits
    pub bsp_status: u8,
    /// Sonar head or transceiver status bits
    pub head_transceiver_status: u8,
    /// Ping mode
    pub mode: u8,
    /// Filter identifier
    pub filter_id: u8,
    /// Minimum depth in m
    pub min_depth: u16,
    /// Maximum depth in m
    pub max_depth: u16,
    /// Absorption coefficient in dB/km
    #[br(map = |x: u16| scaled(x, 100.0))]
    pub absorption: f64,
    /// Transmit pulse length in microseconds
    pub tx_pulse_length: u16,
    /// Transmit beam width in degrees
    #[br(map = |x: u16| scaled(x, 10.0))]
    pub tx_beam_width: f64,
    /// Transmit power relative to maximum in dB
    pub tx_power_re_max: u8,
    /// Receive beam width in degrees
    #[br(map = |x: u8| scaled(x, 10.0))]
    pub rx_beam_width: f64,
    /// Receive bandwidth in Hz
    #[br(map = |x: u8| u32::from(x) * 50)]
    pub rx_bandwidth: u32,
    /// Receiver fixed gain in dB
    pub rx_fixed_gain: u8,
    /// Time varied gain cross-over angle in degrees
    pub tvg_cross_over_angle: u8,
    /// Source of the surface sound speed
    pub ssv_source: u8,
    #[br(temp)]
    port_swath_width: u16,
    /// Beam spacing mode
    pub beam_spacing: u8,
    #[br(temp)]
    port_coverage_sector: u8,
    /// Yaw and pitch stabilization mode
    pub stabilization: u8,
    #[br(temp)]
    stbd_coverage_sector: u8,
    #[br(temp)]
    stbd_swath_width: u16,
    /// Maximum swath width in m
    #[br(calc = Swath::split(port_swath_width, stbd_swath_width))]
    pub swath_width: Swath,
    /// Maximum coverage sector in degrees
    #[br(calc = Swath::split(port_coverage_sector.into(), stbd_coverage_sector.into()))]
    pub coverage_sector: Swath,
    #[br(temp)]
    model_field: u16,
    /// Durotong speed in m/s, written only by the dual-head model
    #[br(calc = (model_number == DUAL_HEAD_MODEL).then(|| scaled(model_field, 10.0)))]
    #[serde(serialize_with = "sentinel::nan")]
    pub durotong_speed: Option<f64>,
    /// Along-track transmit tilt in degrees, written by every other model
    #[br(calc = (model_number != DUAL_HEAD_MODEL).then(|| scaled(model_field as i16, 100.0)))]
    #[serde(serialize_with = "sentinel::nan")]
    pub tx_along_tilt: Option<f64>,
    /// Second filter identifier
    #[br(pad_after = 16)]
    pub filter_id_2: u8,
}
