//! Early Simrad EM series layouts (EM12, EM100, EM950/EM1000, EM121A)
use crate::model::columnar_record;
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

columnar_record! {
    /// EM12 (sensor id 103)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct Em12 => Em12Batch {
        /// Ping number
        pub ping_number: u16,
        /// Resolution mode
        pub resolution: u8,
        /// Number of good beams
        pub ping_quality: u8,
        /// Sound velocity at the transducer in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub sound_velocity: f64,
        /// Operating mode
        #[br(pad_after = 32)]
        pub mode: u8,
    }
}

columnar_record! {
    /// EM100 (sensor id 104)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct Em100 => Em100Batch {
        /// Ship pitch in degrees
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub ship_pitch: f64,
        /// Transducer pitch in degrees
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub transducer_pitch: f64,
        /// Operating mode
        pub mode: u8,
        /// Transmit power
        pub power: u8,
        /// Receiver attenuation
        pub attenuation: u8,
        /// Time varied gain setting
        pub tvg: u8,
        /// Pulse length
        pub pulse_length: u8,
        /// Output counter
        pub counter: u16,
    }
}

columnar_record! {
    /// EM950 (sensor id 105) and EM1000 (sensor id 111)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct Em950 => Em950Batch {
        /// Ping number
        pub ping_number: u16,
        /// Operating mode
        pub mode: u8,
        /// Ping quality indicator
        pub ping_quality: u8,
        /// Ship pitch in degrees
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub ship_pitch: f64,
        /// Transducer pitch in degrees
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub transducer_pitch: f64,
        /// Sound velocity at the surface in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub surface_velocity: f64,
    }
}

columnar_record! {
    /// EM121A (sensor id 106) and EM121 (sensor id 107)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct Em121A => Em121ABatch {
        /// Ping number
        pub ping_number: u16,
        /// Operating mode
        pub mode: u8,
        /// Number of valid beams
        pub valid_beams: u8,
        /// Pulse length
        pub pulse_length: u8,
        /// Beam width
        pub beam_width: u8,
        /// Transmit power
        pub tx_power: u8,
        /// Transmitter status
        pub tx_status: u8,
        /// Receiver status
        pub rx_status: u8,
        /// Sound velocity at the surface in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub surface_velocity: f64,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cursor::Cursor;
    use crate::testutil::Buf;

    #[test]
    fn em950_pitch_and_velocity() {
        let bytes = Buf::new()
            .u16(77)
            .u8(2)
            .u8(9)
            .i16(-250)
            .i16(125)
            .u16(14995)
            .build();
        let rec: Em950 = Cursor::new(&bytes).read().unwrap();
        assert_eq!(rec.ping_number, 77);
        assert_eq!(rec.ship_pitch, -2.5);
        assert_eq!(rec.transducer_pitch, 1.25);
        assert_eq!(rec.surface_velocity, 1499.5);
    }

    #[test]
    fn em12_skips_trailing_spare() {
        let bytes = Buf::new().u16(1).u8(2).u8(3).u16(15000).u8(4).zeros(32).build();
        let mut c = Cursor::new(&bytes);
        let rec: Em12 = c.read().unwrap();
        assert_eq!(rec.sound_velocity, 1500.0);
        assert_eq!(rec.mode, 4);
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn em121a_layout() {
        let bytes = Buf::new()
            .u16(500)
            .bytes(&[1, 121, 3, 4, 5, 6, 7])
            .u16(15005)
            .build();
        let rec: Em121A = Cursor::new(&bytes).read().unwrap();
        assert_eq!(rec.valid_beams, 121);
        assert_eq!(rec.rx_status, 7);
        assert_eq!(rec.surface_velocity, 1500.5);
    }
}
