//! Intensity (backscatter) subrecord decoding
//!
//! The intensity subrecord carries a time series of backscatter samples for
//! every beam of a ping. It starts with a short prefix giving the sample bit
//! depth, then a sonar-dependent header ([`SensorImagery`]), then one block
//! per beam:
//!
//! ```text
//! sample_count u16 | detect_sample u16 | start_range_samples u16 | spare[6] | samples
//! ```
//!
//! Samples are unsigned big-endian integers of 8, 12, 16 or 32 bits. 12-bit
//! samples are packed two to three bytes, see [`unpack_12bit`].
//!
//! Decoding can happen in one call ([`decode_imagery`]) or in two, reading
//! the header first to learn the scale and offset
//! ([`decode_imagery_header`], then [`decode_time_series`]).
use crate::cursor::Cursor;
use crate::error::Error;
use crate::model::{columnar_record, DecodeOptions};
use crate::parser::{sensor_family, SensorFamily, UNDEFINED_SENSOR_ID};
use crate::scale::ScaleOffset;
use binrw::{BinRead, BinResult};
use log::{debug, trace};
use serde::Serialize;

pub mod imagery;

pub use imagery::SensorImagery;

/// The packing of the samples of one intensity subrecord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BitDepth {
    /// One byte per sample
    Bits8,
    /// Two samples per three bytes
    Bits12,
    /// Two bytes per sample
    Bits16,
    /// Four bytes per sample
    Bits32,
}

impl BitDepth {
    /// Look up the depth for a `bits_per_sample` value
    pub fn from_bits(bits: u8) -> Option<BitDepth> {
        match bits {
            8 => Some(BitDepth::Bits8),
            12 => Some(BitDepth::Bits12),
            16 => Some(BitDepth::Bits16),
            32 => Some(BitDepth::Bits32),
            _ => None,
        }
    }

    /// The number of bytes holding `count` samples
    ///
    /// An odd trailing 12-bit sample takes two bytes.
    pub fn packed_len(self, count: usize) -> usize {
        match self {
            BitDepth::Bits8 => count,
            BitDepth::Bits12 => (3 * count + 1) / 2,
            BitDepth::Bits16 => 2 * count,
            BitDepth::Bits32 => 4 * count,
        }
    }

    /// Widen the packed samples in `bytes`
    pub fn unpack(self, bytes: &[u8]) -> Vec<u32> {
        match self {
            BitDepth::Bits8 => bytes.iter().map(|&b| u32::from(b)).collect(),
            BitDepth::Bits12 => unpack_12bit(bytes),
            BitDepth::Bits16 => bytes
                .chunks_exact(2)
                .map(|c| u32::from(u16::from_be_bytes([c[0], c[1]])))
                .collect(),
            BitDepth::Bits32 => bytes
                .chunks_exact(4)
                .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        }
    }
}

/// Unpack 12-bit samples stored two to every three bytes
///
/// For bytes `b0 b1 b2` the samples are `b0:b1[hi]` and `b1[lo]:b2`. A
/// trailing pair of bytes holds one last sample in its high 12 bits.
///
/// ```
/// # use gsf_sensor::intensity::unpack_12bit;
/// assert_eq!(unpack_12bit(&[0xAB, 0xCD, 0xEF]), vec![0xABC, 0xDEF]);
/// assert_eq!(unpack_12bit(&[0xAB, 0xCD]), vec![0xABC]);
/// ```
pub fn unpack_12bit(bytes: &[u8]) -> Vec<u32> {
    let high = |b0: u8, b1: u8| (u32::from(b0) << 4) | (u32::from(b1) >> 4);
    let mut samples = Vec::with_capacity(bytes.len() * 2 / 3 + 1);
    for chunk in bytes.chunks(3) {
        match *chunk {
            [b0, b1, b2] => {
                samples.push(high(b0, b1));
                samples.push(((u32::from(b1) & 0x0F) << 8) | u32::from(b2));
            }
            [b0, b1] => samples.push(high(b0, b1)),
            // a lone byte is never a complete sample
            _ => {}
        }
    }
    samples
}

columnar_record! {
    /// The backscatter time series of every beam of one ping
    ///
    /// `samples` holds the beams end to end. A beam that recorded no
    /// samples contributes a single NaN so that it still has a mean.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct IntensityTimeSeries => IntensityTimeSeriesBatch {
        /// Calibrated samples of all beams
        pub samples: Vec<f32>,
        /// Samples recorded for each beam
        pub sample_count: Vec<u16>,
        /// Index of the sample at the bottom detection, per beam
        pub detect_sample: Vec<u16>,
        /// Samples between transmit and the first recorded sample, per beam
        pub start_range_samples: Vec<u16>,
        /// Mean of each beam's samples, ignoring NaN
        pub mean: Vec<f32>,
    }
}

/// The common prefix and sonar header of an intensity subrecord
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageryHeader {
    /// The family of the enclosing ping's sonar
    pub family: SensorFamily,
    /// Bit depth of every sample
    pub bits_per_sample: u8,
    /// Bit mask of the corrections applied by the sonar
    pub applied_corrections: u32,
    /// The sonar-dependent header
    pub sensor: SensorImagery,
}

/// A fully decoded intensity subrecord
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageryRecord {
    /// The header
    pub header: ImageryHeader,
    /// The scale and offset resolved from the header
    pub scale_offset: ScaleOffset,
    /// The per-beam samples
    pub time_series: IntensityTimeSeries,
}

#[derive(BinRead, Debug)]
#[br(big)]
struct ImageryPrefix {
    bits_per_sample: u8,
    #[br(pad_after = 16)]
    applied_corrections: u32,
}

#[derive(BinRead, Debug)]
#[br(big)]
struct BeamHeader {
    sample_count: u16,
    detect_sample: u16,
    #[br(pad_after = 6)]
    start_range_samples: u16,
}

/// Decode the prefix and sonar header of an intensity subrecord
///
/// Returns the header with the scale and offset its samples are stored
/// with: the pair embedded in the header when there is one, otherwise the
/// default of the sonar generation.
///
/// # Errors
///
/// [`Error::UnsupportedSensor`] if the sonar has no imagery layout,
/// otherwise as for [`crate::parser::decode`].
///
/// # Panics
///
/// Panics on [`UNDEFINED_SENSOR_ID`], as [`crate::parser::decode`] does.
pub fn decode_imagery_header(
    sensor_id: u32,
    cursor: &mut Cursor<'_>,
) -> Result<(ImageryHeader, ScaleOffset), Error> {
    if sensor_id == UNDEFINED_SENSOR_ID {
        panic!("sensor id {UNDEFINED_SENSOR_ID} has no defined imagery layout");
    }
    let family = sensor_family(sensor_id)
        .filter(|&family| SensorImagery::supports(family))
        .ok_or_else(|| {
            debug!("no imagery decoder for sensor id {sensor_id}");
            Error::UnsupportedSensor(sensor_id)
        })?;

    let mut work = cursor.clone();
    let prefix: ImageryPrefix = work.read().map_err(|err| Error::from_binrw(family, err))?;
    let sensor = SensorImagery::read(family, &mut work)
        .map_err(|err| Error::from_binrw(family, err))?
        .ok_or(Error::UnsupportedSensor(sensor_id))?;
    *cursor = work;

    let scale_offset = sensor.scale_offset();
    let header = ImageryHeader {
        family,
        bits_per_sample: prefix.bits_per_sample,
        applied_corrections: prefix.applied_corrections,
        sensor,
    };
    Ok((header, scale_offset))
}

/// Decode the per-beam time series that follow an imagery header
///
/// `beams` is the beam count of the enclosing ping. Samples are converted
/// with `(raw - offset) / divisor`. The offset is always the one in
/// `scale_offset`. The divisor is the sonar generation's default scale
/// (see [`SensorImagery::default_scale`]), which is what the deployed
/// encoders expect, unless `options.strict` is set, in which case it is the
/// scale in `scale_offset`.
///
/// # Errors
///
/// [`Error::MalformedRecord`] for a bit depth other than 8, 12, 16 or 32,
/// and [`Error::TruncatedRecord`] if the beams run past the end of the
/// subrecord.
pub fn decode_time_series(
    header: &ImageryHeader,
    scale_offset: ScaleOffset,
    cursor: &mut Cursor<'_>,
    beams: usize,
    options: &DecodeOptions,
) -> Result<IntensityTimeSeries, Error> {
    let family = header.family;
    let depth = BitDepth::from_bits(header.bits_per_sample).ok_or_else(|| {
        debug!(
            "{family} imagery has unsupported bits per sample {}",
            header.bits_per_sample
        );
        Error::malformed(
            family,
            format!("unsupported bits per sample {}", header.bits_per_sample),
        )
    })?;
    let conversion = if options.strict {
        scale_offset
    } else {
        ScaleOffset::new(header.sensor.default_scale().scale, scale_offset.offset)
    };

    let mut work = cursor.clone();
    let series = read_beams(&mut work, depth, conversion, beams)
        .map_err(|err| Error::from_binrw(family, err))?;
    *cursor = work;
    trace!(
        "decoded {} beams of {family} imagery, {} samples",
        beams,
        series.samples.len()
    );
    Ok(series)
}

/// Decode a whole intensity subrecord
pub fn decode_imagery(
    sensor_id: u32,
    cursor: &mut Cursor<'_>,
    beams: usize,
    options: &DecodeOptions,
) -> Result<ImageryRecord, Error> {
    let mut work = cursor.clone();
    let (header, scale_offset) = decode_imagery_header(sensor_id, &mut work)?;
    let time_series = decode_time_series(&header, scale_offset, &mut work, beams, options)?;
    *cursor = work;
    Ok(ImageryRecord {
        header,
        scale_offset,
        time_series,
    })
}

fn read_beams(
    cursor: &mut Cursor<'_>,
    depth: BitDepth,
    conversion: ScaleOffset,
    beams: usize,
) -> BinResult<IntensityTimeSeries> {
    // every beam needs at least its 12 byte header
    let capacity = beams.min(cursor.remaining() / 12);
    let mut series = IntensityTimeSeries {
        samples: Vec::new(),
        sample_count: Vec::with_capacity(capacity),
        detect_sample: Vec::with_capacity(capacity),
        start_range_samples: Vec::with_capacity(capacity),
        mean: Vec::with_capacity(capacity),
    };
    for _ in 0..beams {
        let beam: BeamHeader = cursor.read()?;
        let count = usize::from(beam.sample_count);
        let packed = cursor.take(depth.packed_len(count))?;
        if count == 0 {
            series.samples.push(f32::NAN);
            series.mean.push(f32::NAN);
        } else {
            let first = series.samples.len();
            series.samples.extend(
                depth
                    .unpack(packed)
                    .into_iter()
                    .map(|raw| conversion.apply(raw) as f32),
            );
            series.mean.push(mean(&series.samples[first..]));
        }
        series.sample_count.push(beam.sample_count);
        series.detect_sample.push(beam.detect_sample);
        series.start_range_samples.push(beam.start_range_samples);
    }
    Ok(series)
}

fn mean(samples: &[f32]) -> f32 {
    let (sum, n) = samples
        .iter()
        .filter(|s| !s.is_nan())
        .fold((0.0f64, 0usize), |(sum, n), &s| (sum + f64::from(s), n + 1));
    if n == 0 {
        f32::NAN
    } else {
        (sum / n as f64) as f32
    }
}
