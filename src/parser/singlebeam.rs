//! Single-beam echosounder layouts
//!
//! These come from the single-beam sensor-specific subrecord rather than
//! the swath one, but share its id space (201 and up).
use crate::model::columnar_record;
use crate::scale::scaled;
use binrw::BinRead;
use serde::Serialize;

columnar_record! {
    /// Echotrac, Bathy2000 and generic single-beam (sensor ids 201, 202, 206)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct SbEchotrac => SbEchotracBatch {
        /// Navigation error in m
        pub navigation_error: u16,
        /// Source of the most probable position
        pub mpp_source: u8,
        /// Source of the tide correction
        pub tide_source: u8,
        /// Dynamic draft in m
        #[br(map = |x: i16| scaled(x, 100.0), pad_after = 4)]
        pub dynamic_draft: f64,
    }
}

columnar_record! {
    /// MGD77 (sensor id 203)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct SbMgd77 => SbMgd77Batch {
        /// Time zone correction in hours
        pub time_zone_corr: u16,
        /// How the position was obtained
        pub position_type_code: u16,
        /// Sound velocity correction applied to the depth
        pub correction_code: u16,
        /// How the depth was obtained
        pub bathy_type_code: u16,
        /// Quality of the navigation
        pub quality_code: u16,
        /// Two-way travel time in s
        #[br(map = |x: u32| scaled(x, 10000.0), pad_after = 4)]
        pub travel_time: f64,
    }
}

columnar_record! {
    /// US Navy Bathymetric Database (sensor id 204)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct SbBdb => SbBdbBatch {
        /// Source document number
        pub doc_no: u32,
        /// Evaluation flag
        pub eval: u8,
        /// Classification flag
        pub classification: u8,
        /// Track adjustment flag
        pub track_adj_flag: u8,
        /// Source flag
        pub source_flag: u8,
        /// Discrete point or track line flag
        pub pt_or_track_ln: u8,
        /// Datum flag
        #[br(pad_after = 4)]
        pub datum_flag: u8,
    }
}

columnar_record! {
    /// NOS Hydrographic Database (sensor id 205)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct SbNosHdb => SbNosHdbBatch {
        /// Depth type code
        pub type_code: u16,
        /// Cartographic code
        #[br(pad_after = 4)]
        pub carto_code: u16,
    }
}

columnar_record! {
    /// Navisound (sensor id 207)
    #[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
    #[br(big)]
    pub struct SbNavisound => SbNavisoundBatch {
        /// Pulse length in cm
        #[br(map = |x: u16| scaled(x, 100.0), pad_after = 8)]
        pub pulse_length: f64,
    }
}
