//! Sensor-specific subrecord decoders
//!
//! Each sonar family has its own module declaring its layouts. This module
//! maps GSF sensor ids onto those families, runs the matching decoder and
//! folds the decoded records into per-family batches.
use crate::cursor::Cursor;
use crate::error::Error;
use crate::model::{Accumulate, Batch, DecodeOptions};
use binrw::BinResult;
use log::{debug, trace};
use serde::Serialize;
use std::fmt;

pub mod delta_t;
pub mod elac;
pub mod em3;
pub mod em4;
pub mod geoswath;
pub mod klein;
pub mod kmall;
pub mod r2sonic;
pub mod reson;
pub mod reson7k;
pub mod runtime;
pub mod seabeam;
pub mod seamap;
pub mod simrad;
pub mod singlebeam;

use delta_t::{DeltaT, DeltaTBatch};
use elac::{ElacMkII, ElacMkIIBatch};
use em3::{Em3, Em3Batch, Em3Raw, Em3RawBatch};
use em4::{Em4, Em4Batch};
use geoswath::{GeoSwathPlus, GeoSwathPlusBatch};
use klein::{Klein5410Bss, Klein5410BssBatch};
use kmall::{Kmall, KmallBatch};
use r2sonic::{R2Sonic, R2SonicBatch};
use reson::{Reson8100, Reson8100Batch, SeaBat, SeaBat8101, SeaBat8101Batch, SeaBatBatch, SeaBatII, SeaBatIIBatch};
use reson7k::{Reson7100, Reson7100Batch, ResonTSeries, ResonTSeriesBatch};
use seabeam::{CmpSass, CmpSassBatch, Sass, SassBatch, SbAmp, SbAmpBatch, SeaBeam, SeaBeam2112, SeaBeam2112Batch, SeaBeamBatch};
use seamap::{Seamap, SeamapBatch};
use simrad::{Em100, Em100Batch, Em12, Em121A, Em121ABatch, Em12Batch, Em950, Em950Batch};
use singlebeam::{
    SbBdb, SbBdbBatch, SbEchotrac, SbEchotracBatch, SbMgd77, SbMgd77Batch, SbNavisound,
    SbNavisoundBatch, SbNosHdb, SbNosHdbBatch,
};

/// A sensor id that was reserved without ever being given a layout
pub const UNDEFINED_SENSOR_ID: u32 = 154;

/// Read one family's layout from the cursor
trait ReadRecord: Sized {
    fn read_record(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> BinResult<Self>;
}

macro_rules! read_plain {
    ($($record:ty),* $(,)?) => {
        $(
            impl ReadRecord for $record {
                fn read_record(cursor: &mut Cursor<'_>, _options: &DecodeOptions) -> BinResult<Self> {
                    cursor.read()
                }
            }
        )*
    };
}

macro_rules! read_with_options {
    ($($record:ty),* $(,)?) => {
        $(
            impl ReadRecord for $record {
                fn read_record(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> BinResult<Self> {
                    cursor.read_args((*options,))
                }
            }
        )*
    };
}

read_plain!(
    SeaBeam, Em12, Em100, Em950, Em121A, Sass, Seamap, SeaBat, SbAmp, SeaBatII, SeaBat8101,
    SeaBeam2112, ElacMkII, CmpSass, Reson8100, GeoSwathPlus, Klein5410Bss, Reson7100, DeltaT,
    R2Sonic, ResonTSeries, Kmall, SbEchotrac, SbMgd77, SbBdb, SbNosHdb, SbNavisound,
);
read_with_options!(Em3, Em3Raw, Em4);

macro_rules! sensor_families {
    (
        $(
            $(#[$doc:meta])*
            $family:ident($record:ty, $batch:ty) = [$($id:literal),+]
        ),* $(,)?
    ) => {
        /// The sonar families with a sensor-specific layout
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum SensorFamily {
            $( $(#[$doc])* $family, )*
        }

        impl SensorFamily {
            /// Every family, in sensor id order of first appearance
            pub const ALL: &'static [SensorFamily] = &[$(SensorFamily::$family),*];

            /// The family's name
            pub fn name(self) -> &'static str {
                match self {
                    $( SensorFamily::$family => stringify!($family), )*
                }
            }

            /// The sensor ids decoded with this family's layout
            pub fn sensor_ids(self) -> &'static [u32] {
                match self {
                    $( SensorFamily::$family => &[$($id),+], )*
                }
            }

            fn read(self, cursor: &mut Cursor<'_>, options: &DecodeOptions) -> BinResult<SensorRecord> {
                match self {
                    $(
                        SensorFamily::$family => {
                            <$record as ReadRecord>::read_record(cursor, options).map(SensorRecord::$family)
                        }
                    )*
                }
            }
        }

        /// Look up the family decoding a sensor id
        ///
        /// Returns `None` for ids without a layout, including
        /// [`UNDEFINED_SENSOR_ID`].
        pub fn sensor_family(sensor_id: u32) -> Option<SensorFamily> {
            match sensor_id {
                $( $($id)|+ => Some(SensorFamily::$family), )*
                _ => None,
            }
        }

        /// One decoded sensor-specific subrecord
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "family")]
        pub enum SensorRecord {
            $( $(#[$doc])* $family($record), )*
        }

        impl SensorRecord {
            /// The family the record was decoded as
            pub fn family(&self) -> SensorFamily {
                match self {
                    $( SensorRecord::$family(_) => SensorFamily::$family, )*
                }
            }
        }

        /// Records of one family folded over a run of pings
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "family")]
        pub enum SensorBatch {
            $( $(#[$doc])* $family($batch), )*
        }

        impl SensorBatch {
            /// The family of every record in the batch
            pub fn family(&self) -> SensorFamily {
                match self {
                    $( SensorBatch::$family(_) => SensorFamily::$family, )*
                }
            }

            /// The number of pings in the batch
            pub fn pings(&self) -> usize {
                match self {
                    $( SensorBatch::$family(batch) => batch.pings(), )*
                }
            }

            /// Fold one more record into the batch
            ///
            /// Fails with [`Error::SensorMismatch`] if the record belongs to
            /// another family. The batch is left untouched in that case.
            pub fn push(&mut self, record: SensorRecord) -> Result<(), Error> {
                match (self, record) {
                    $(
                        (SensorBatch::$family(batch), SensorRecord::$family(record)) => {
                            record.push_into(batch);
                            Ok(())
                        }
                    )*
                    (batch, record) => Err(Error::SensorMismatch {
                        expected: batch.family(),
                        found: record.family(),
                    }),
                }
            }

            /// Concatenate another batch of the same family onto this one
            pub fn append(&mut self, other: SensorBatch) -> Result<(), Error> {
                match (self, other) {
                    $(
                        (SensorBatch::$family(batch), SensorBatch::$family(other)) => {
                            Batch::append(batch, other);
                            Ok(())
                        }
                    )*
                    (batch, other) => Err(Error::SensorMismatch {
                        expected: batch.family(),
                        found: other.family(),
                    }),
                }
            }
        }

        impl From<SensorRecord> for SensorBatch {
            fn from(record: SensorRecord) -> Self {
                match record {
                    $( SensorRecord::$family(record) => SensorBatch::$family(record.into_batch()), )*
                }
            }
        }
    };
}

sensor_families! {
    /// Sea Beam
    SeaBeam(SeaBeam, SeaBeamBatch) = [102],
    /// Simrad EM12
    Em12(Em12, Em12Batch) = [103],
    /// Simrad EM100
    Em100(Em100, Em100Batch) = [104],
    /// Simrad EM950
    Em950(Em950, Em950Batch) = [105],
    /// Simrad EM121A
    Em121A(Em121A, Em121ABatch) = [106],
    /// Simrad EM121
    Em121(Em121A, Em121ABatch) = [107],
    /// SASS
    Sass(Sass, SassBatch) = [108],
    /// SeaMap
    Seamap(Seamap, SeamapBatch) = [109],
    /// Reson SeaBat
    SeaBat(SeaBat, SeaBatBatch) = [110],
    /// Simrad EM1000
    Em1000(Em950, Em950Batch) = [111],
    /// Type III Sea Beam
    TypeIIISeaBeam(Sass, SassBatch) = [112],
    /// Sea Beam with amplitudes
    SbAmp(SbAmp, SbAmpBatch) = [113],
    /// Reson SeaBat II
    SeaBatII(SeaBatII, SeaBatIIBatch) = [114],
    /// Reson SeaBat 8101
    SeaBat8101(SeaBat8101, SeaBat8101Batch) = [115],
    /// Sea Beam 2112/2136
    SeaBeam2112(SeaBeam2112, SeaBeam2112Batch) = [116],
    /// ELAC Bottomchart Mk II
    ElacMkII(ElacMkII, ElacMkIIBatch) = [117],
    /// Kongsberg EM3 series
    Em3(Em3, Em3Batch) = [118, 119, 120, 128, 129, 130, 131, 132, 139],
    /// Compressed SASS
    CmpSass(CmpSass, CmpSassBatch) = [121],
    /// Reson 8100 series
    Reson8100(Reson8100, Reson8100Batch) = [122, 123, 124, 125, 126, 127],
    /// Kongsberg EM4 series
    Em4(Em4, Em4Batch) = [133, 134, 135, 149],
    /// GeoSwath Plus
    GeoSwathPlus(GeoSwathPlus, GeoSwathPlusBatch) = [136],
    /// Klein 5410 bathymetric sidescan
    Klein5410Bss(Klein5410Bss, Klein5410BssBatch) = [137],
    /// Reson 7100 series
    Reson7100(Reson7100, Reson7100Batch) = [138],
    /// Kongsberg EM3 series raw range and angle
    Em3Raw(Em3Raw, Em3RawBatch) = [140, 141, 142, 143, 144, 145, 146, 147, 148],
    /// Imagenex Delta T
    DeltaT(DeltaT, DeltaTBatch) = [150],
    /// R2Sonic
    R2Sonic(R2Sonic, R2SonicBatch) = [151, 152, 153],
    /// Reson T-Series
    ResonTSeries(ResonTSeries, ResonTSeriesBatch) = [155],
    /// Kongsberg KMALL
    Kmall(Kmall, KmallBatch) = [156],
    /// Echotrac and other single-beam echosounders
    SbEchotrac(SbEchotrac, SbEchotracBatch) = [201, 202, 206],
    /// MGD77 single-beam
    SbMgd77(SbMgd77, SbMgd77Batch) = [203],
    /// US Navy Bathymetric Database single-beam
    SbBdb(SbBdb, SbBdbBatch) = [204],
    /// NOS Hydrographic Database single-beam
    SbNosHdb(SbNosHdb, SbNosHdbBatch) = [205],
    /// Navisound single-beam
    SbNavisound(SbNavisound, SbNavisoundBatch) = [207],
}

impl fmt::Display for SensorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every sensor id with a decoder, in ascending order
pub fn supported_sensor_ids() -> Vec<u32> {
    let mut ids: Vec<u32> = SensorFamily::ALL
        .iter()
        .flat_map(|family| family.sensor_ids().iter().copied())
        .collect();
    ids.sort_unstable();
    ids
}

/// Decode the sensor-specific subrecord at the cursor
///
/// The cursor must be positioned at the start of the subrecord. On success
/// it is left just past the layout; on failure it is left where it was.
///
/// # Errors
///
/// [`Error::UnsupportedSensor`] if no decoder exists for `sensor_id`,
/// [`Error::TruncatedRecord`] if the subrecord is shorter than its layout,
/// and [`Error::MalformedRecord`] if a field holds an impossible value.
///
/// # Panics
///
/// Panics on [`UNDEFINED_SENSOR_ID`]. That id was reserved without a layout,
/// so no byte count or field list can be trusted for it.
pub fn decode(
    sensor_id: u32,
    cursor: &mut Cursor<'_>,
    options: &DecodeOptions,
) -> Result<SensorRecord, Error> {
    if sensor_id == UNDEFINED_SENSOR_ID {
        panic!("sensor id {UNDEFINED_SENSOR_ID} has no defined subrecord layout");
    }
    let family = sensor_family(sensor_id).ok_or_else(|| {
        debug!("no decoder for sensor id {sensor_id}");
        Error::UnsupportedSensor(sensor_id)
    })?;
    let start = cursor.position();
    let record = family
        .read(cursor, options)
        .map_err(|err| Error::from_binrw(family, err))?;
    trace!(
        "decoded {family} subrecord for sensor id {sensor_id} ({} bytes)",
        cursor.position() - start
    );
    Ok(record)
}

/// Decode a subrecord held in its own buffer
pub fn decode_bytes(
    sensor_id: u32,
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<SensorRecord, Error> {
    decode(sensor_id, &mut Cursor::new(bytes), options)
}

/// Fold a run of records into one batch
///
/// Returns `None` for an empty run.
pub fn accumulate<I>(records: I) -> Result<Option<SensorBatch>, Error>
where
    I: IntoIterator<Item = SensorRecord>,
{
    let mut records = records.into_iter();
    let Some(first) = records.next() else {
        return Ok(None);
    };
    let mut batch = SensorBatch::from(first);
    for record in records {
        batch.push(record)?;
    }
    Ok(Some(batch))
}
