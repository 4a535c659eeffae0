//! SeaMap sidescan layout
use crate::model::columnar_record;
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

fn tenths(x: u16) -> f64 {
    scaled(x, 10.0)
}

columnar_record! {
    /// SeaMap (sensor id 109)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct Seamap => SeamapBatch {
        /// Port transmitter settings for the two frequencies
        #[br(map = |x: [u16; 2]| x.map(tenths))]
        pub port_transmitter: [f64; 2],
        /// Starboard transmitter settings for the two frequencies
        #[br(map = |x: [u16; 2]| x.map(tenths))]
        pub stbd_transmitter: [f64; 2],
        /// Port receiver gain in dB
        #[br(map = tenths)]
        pub port_gain: f64,
        /// Starboard receiver gain in dB
        #[br(map = tenths)]
        pub stbd_gain: f64,
        /// Port pulse length in ms
        #[br(map = tenths)]
        pub port_pulse_length: f64,
        /// Starboard pulse length in ms
        #[br(map = tenths)]
        pub stbd_pulse_length: f64,
        /// Depth from the pressure sensor in m
        #[br(map = tenths)]
        pub pressure_depth: f64,
        /// Altitude above the sea floor in m
        #[br(map = tenths)]
        pub altitude: f64,
        /// Water temperature in degrees Celsius
        #[br(map = tenths)]
        pub temperature: f64,
    }
}
