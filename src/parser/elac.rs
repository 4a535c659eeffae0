//! ELAC Bottomchart Mk II layout
use crate::model::columnar_record;
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

columnar_record! {
    /// ELAC Bottomchart Mk II (sensor id 117)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct ElacMkII => ElacMkIIBatch {
        /// Operating mode
        pub mode: u8,
        /// Ping number
        pub ping_num: u16,
        /// Sound velocity in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub sound_vel: f64,
        /// Pulse length in ms
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub pulse_length: f64,
        /// Starboard receiver gain in dB
        pub receiver_gain_stbd: u8,
        /// Port receiver gain in dB
        #[br(pad_after = 2)]
        pub receiver_gain_port: u8,
    }
}
