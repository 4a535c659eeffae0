//! Imagenex Delta T layout
use crate::model::{columnar_record, text, TimeSpec};
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;
use time::OffsetDateTime;

columnar_record! {
    /// Imagenex Delta T (sensor id 150)
    ///
    /// Mirrors the header of the `.83P` file the sonar writes.
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct DeltaT => DeltaTBatch {
        /// File type the ping was decoded from, e.g. `83P`
        #[br(map = |x: [u8; 4]| text(&x))]
        pub decode_file_type: String,
        /// File format version
        pub version: u8,
        /// Size of the sonar's ping record in bytes
        pub ping_byte_size: u16,
        /// Time the sonar head was interrogated
        #[br(try_map = |t: TimeSpec| t.to_datetime())]
        #[serde(with = "time::serde::rfc3339")]
        pub interrogation_time: OffsetDateTime,
        /// Samples per beam
        pub samples_per_beam: u16,
        /// Sector size in degrees
        pub sector_size: u16,
        /// Angle of the first beam in degrees
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub start_angle: f64,
        /// Angle between beams in degrees
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub angle_increment: f64,
        /// Acoustic range in m
        pub acoustic_range: u16,
        /// Acoustic frequency in kHz
        pub acoustic_frequency: u16,
        /// Sound velocity in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub sound_velocity: f64,
        /// Range resolution in m
        #[br(map = |x: u16| scaled(x, 1000.0))]
        pub range_resolution: f64,
        /// Profile tilt angle in degrees
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub profile_tilt_angle: f64,
        /// Time between pings in s
        #[br(map = |x: u16| scaled(x, 1000.0))]
        pub repetition_rate: f64,
        /// Ping number
        pub ping_number: u32,
        /// Set when the ping carries intensity samples
        pub intensity_flag: u8,
        /// Latency of the ping in s
        #[br(map = |x: u16| scaled(x, 10000.0))]
        pub ping_latency: f64,
        /// Latency of the data in s
        #[br(map = |x: u16| scaled(x, 10000.0))]
        pub data_latency: f64,
        /// Sample rate flag
        pub sample_rate_flag: u8,
        /// Option flags
        pub option_flags: u8,
        /// Number of pings averaged
        pub num_pings_avg: u16,
        /// Offset of the center ping time in s
        #[br(map = |x: u16| scaled(x, 10000.0))]
        pub center_ping_time_offset: f64,
        /// A byte reserved for the user
        pub user_defined_byte: u8,
        /// Altitude in m
        #[br(map = |x: u16| scaled(x, 100.0))]
        pub altitude: f64,
        /// External sensor flags
        pub external_sensor_flags: u8,
        /// Pulse length in s
        #[br(map = |x: u32| scaled(x, 1e6))]
        pub pulse_length: f64,
        /// Fore/aft beam width in degrees
        #[br(map = |x: u8| scaled(x, 10.0))]
        pub fore_aft_beamwidth: f64,
        /// Athwartships beam width in degrees
        #[br(map = |x: u8| scaled(x, 10.0), pad_after = 32)]
        pub athwartships_beamwidth: f64,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cursor::Cursor;
    use crate::testutil::Buf;
    use time::macros::datetime;

    #[test]
    fn delta_t_layout() {
        let bytes = Buf::new()
            .bytes(b"83P\0")
            .u8(1)
            .u16(8192)
            .u32(1_600_000_000)
            .u32(250_000_000)
            .u16(1000)
            .u16(120)
            .u16(30000)
            .u16(25)
            .u16(50)
            .u16(260)
            .u16(15000)
            .u16(50)
            .u16(0)
            .u16(100)
            .u32(77)
            .u8(1)
            .u16(125)
            .u16(0)
            .u8(0)
            .u8(0)
            .u16(1)
            .u16(0)
            .u8(9)
            .u16(1234)
            .u8(0)
            .u32(100)
            .u8(30)
            .u8(15)
            .zeros(32)
            .build();
        let mut c = Cursor::new(&bytes);
        let rec: DeltaT = c.read().unwrap();
        assert_eq!(c.remaining(), 0);
        assert_eq!(rec.decode_file_type, "83P");
        assert_eq!(rec.interrogation_time, datetime!(2020-09-13 12:26:40.25 UTC));
        assert_eq!(rec.start_angle, 300.0);
        assert_eq!(rec.angle_increment, 0.25);
        assert_eq!(rec.range_resolution, 0.05);
        assert_eq!(rec.repetition_rate, 0.1);
        assert_eq!(rec.ping_latency, 0.0125);
        assert_eq!(rec.altitude, 12.34);
        assert_eq!(rec.pulse_length, 0.0001);
        assert_eq!(rec.fore_aft_beamwidth, 3.0);
        assert_eq!(rec.athwartships_beamwidth, 1.5);
    }
}
