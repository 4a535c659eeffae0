//! GeoSwath Plus interferometric layout
use crate::model::columnar_record;
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

columnar_record! {
    /// GeoSwath Plus (sensor id 136)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct GeoSwathPlus => GeoSwathPlusBatch {
        /// 0 for processed (CBF) data, 1 for raw (RDF) data
        pub data_source: u16,
        /// 0 for the port transducer, 1 for starboard
        pub side: u16,
        /// Transducer model (100, 250 or 500 kHz)
        pub model_number: u16,
        /// Acoustic frequency in Hz
        #[br(map = |x: u16| f64::from(x) * 10.0)]
        pub frequency: f64,
        /// Echosounder type
        pub echosounder_type: u16,
        /// Ping number
        pub ping_number: u32,
        /// Navigation samples recorded in the ping
        pub num_nav_samples: u16,
        /// Attitude samples recorded in the ping
        pub num_attitude_samples: u16,
        /// Heading samples recorded in the ping
        pub num_heading_samples: u16,
        /// Mini sound velocity sensor samples recorded in the ping
        pub num_mini_svs_samples: u16,
        /// Echosounder samples recorded in the ping
        pub num_echosounder_samples: u16,
        /// Range/angle/amplitude samples in the ping
        pub num_raa_samples: u16,
        /// Mean sound velocity in m/s
        #[br(map = |x: u16| scaled(x, 20.0))]
        pub mean_sv: f64,
        /// Sound velocity at the transducer in m/s
        #[br(map = |x: u16| scaled(x, 20.0))]
        pub surface_velocity: f64,
        /// Number of valid beams
        pub valid_beams: u16,
        /// Sample rate in Hz
        #[br(map = |x: u16| f64::from(x) * 10.0)]
        pub sample_rate: f64,
        /// Pulse length in microseconds
        pub pulse_length: u16,
        /// Ping length in m
        pub ping_length: u16,
        /// Transmit power setting
        pub transmit_power: u16,
        /// Sidescan gain channel
        pub sidescan_gain_channel: u16,
        /// Stabilization flag
        pub stabilization: u16,
        /// GPS fix quality
        pub gps_quality: u16,
        /// Range uncertainty in m
        #[br(map = |x: u16| scaled(x, 1000.0))]
        pub range_uncertainty: f64,
        /// Angle uncertainty in degrees
        #[br(map = |x: u16| scaled(x, 100.0), pad_after = 32)]
        pub angle_uncertainty: f64,
    }
}
