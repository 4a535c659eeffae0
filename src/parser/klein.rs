//! Klein 5410 bathymetric sidescan layout
use crate::model::columnar_record;
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

columnar_record! {
    /// Klein 5410 bathymetric sidescan (sensor id 137)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct Klein5410Bss => Klein5410BssBatch {
        /// 0 for processed data, 1 for raw data
        pub data_source: u16,
        /// 0 for port, 1 for starboard
        pub side: u16,
        /// Sonar model number
        pub model_number: u16,
        /// Acoustic frequency in Hz
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub acoustic_frequency: f64,
        /// Sampling frequency in Hz
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub sampling_frequency: f64,
        /// Ping number
        pub ping_number: u32,
        /// Samples per channel
        pub num_samples: u32,
        /// Samples per channel in the range-adjusted channels
        pub num_raa_samples: u32,
        /// Error flags
        pub error_flags: u32,
        /// Range setting in m
        pub range: u32,
        /// Towfish depth in m
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub fish_depth: f64,
        /// Towfish altitude in m
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub fish_altitude: f64,
        /// Sound speed at the towfish in m/s
        #[br(map = |x: u32| scaled(x, 1e3))]
        pub sound_speed: f64,
        /// Transmit waveform
        pub tx_waveform: u16,
        /// Altimeter status
        pub altimeter: u16,
        /// Raw data configuration
        #[br(pad_after = 32)]
        pub raw_data_config: u32,
    }
}
