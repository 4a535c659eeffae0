//! Reson SeaBat layouts (SeaBat, SeaBat II, 8101 and the 8100 series)
use crate::model::columnar_record;
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

columnar_record! {
    /// SeaBat (sensor id 110)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct SeaBat => SeaBatBatch {
        /// Ping number
        pub ping_number: u16,
        /// Sound velocity at the surface in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub surface_velocity: f64,
        /// Operating mode
        pub mode: u8,
        /// Range setting in m
        pub sonar_range: u16,
        /// Transmit power
        pub transmit_power: u16,
        /// Receive gain
        pub receive_gain: u16,
    }
}

columnar_record! {
    /// SeaBat II (sensor id 114)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct SeaBatII => SeaBatIIBatch {
        /// Ping number
        pub ping_number: u16,
        /// Sound velocity at the surface in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub surface_velocity: f64,
        /// Operating mode
        pub mode: u16,
        /// Range setting in m
        pub sonar_range: u16,
        /// Transmit power
        pub transmit_power: u16,
        /// Receive gain
        pub receive_gain: u16,
        /// Fore/aft beam width in degrees
        #[br(map = |x: u8| scaled(x, 10.0))]
        pub fore_aft_bw: f64,
        /// Athwartships beam width in degrees
        #[br(map = |x: u8| scaled(x, 10.0), pad_after = 4)]
        pub athwart_bw: f64,
    }
}

columnar_record! {
    /// SeaBat 8101 (sensor id 115)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct SeaBat8101 => SeaBat8101Batch {
        /// Ping number
        pub ping_number: u16,
        /// Sound velocity at the surface in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub surface_velocity: f64,
        /// Operating mode
        pub mode: u16,
        /// Range setting in m
        pub range: u16,
        /// Transmit power
        pub power: u16,
        /// Receive gain
        pub gain: u16,
        /// Transmit pulse width in microseconds
        pub pulse_width: u16,
        /// Spreading coefficient for the time varied gain
        pub tvg_spreading: u8,
        /// Absorption coefficient for the time varied gain
        pub tvg_absorption: u8,
        /// Fore/aft beam width in degrees
        #[br(map = |x: u8| scaled(x, 10.0))]
        pub fore_aft_bw: f64,
        /// Athwartships beam width in degrees
        #[br(map = |x: u8| scaled(x, 10.0))]
        pub athwart_bw: f64,
        /// Minimum range filter in m
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub range_filt_min: f64,
        /// Maximum range filter in m
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub range_filt_max: f64,
        /// Minimum depth filter in m
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub depth_filt_min: f64,
        /// Maximum depth filter in m
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub depth_filt_max: f64,
        /// Projector type
        #[br(pad_after = 4)]
        pub projector: u8,
    }
}

columnar_record! {
    /// Reson 8100 series (sensor ids 122 to 127)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct Reson8100 => Reson8100Batch {
        /// Latency between ping and output in ms
        pub latency: u16,
        /// Ping number
        pub ping_number: u32,
        /// Sonar identifier
        pub sonar_id: u32,
        /// Sonar model
        pub sonar_model: u16,
        /// Sonar frequency in kHz
        pub frequency: u16,
        /// Sound velocity at the surface in m/s
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub surface_velocity: f64,
        /// Sample rate in Hz
        pub sample_rate: u16,
        /// Ping rate in pings per second
        pub ping_rate: u16,
        /// Operating mode
        pub mode: u16,
        /// Range setting in m
        pub range: u16,
        /// Transmit power
        pub power: u16,
        /// Receive gain
        pub gain: u16,
        /// Spreading coefficient for the time varied gain
        pub tvg_spreading: u8,
        /// Absorption coefficient for the time varied gain
        pub tvg_absorption: u8,
        /// Fore/aft beam width in degrees
        #[br(map = |x: u8| scaled(x, 10.0))]
        pub fore_aft_bw: f64,
        /// Athwartships beam width in degrees
        #[br(map = |x: u8| scaled(x, 10.0))]
        pub athwart_bw: f64,
        /// Projector type
        pub projector_type: u8,
        /// Projector steering angle in degrees
        #[br(map = |x: i16| scaled(x, 100.0))]
        pub projector_angle: f64,
        /// Minimum range filter in m
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub range_filt_min: f64,
        /// Maximum range filter in m
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub range_filt_max: f64,
        /// Minimum depth filter in m
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub depth_filt_min: f64,
        /// Maximum depth filter in m
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub depth_filt_max: f64,
        /// Bit mask of the active filters
        pub filters_active: u8,
        /// Temperature at the sonar head in degrees Celsius
        #[br(map = |x: u16| scaled(x, 10.0))]
        pub temperature: f64,
        /// Across-track beam spacing in degrees
        #[br(map = |x: u16| scaled(x, 10000.0), pad_after = 2)]
        pub beam_spacing: f64,
    }
}
