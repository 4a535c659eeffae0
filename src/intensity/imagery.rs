//! Sensor-specific imagery headers
//!
//! An intensity subrecord starts with a header whose layout depends on the
//! sonar, in the same way the sensor-specific subrecord does. Kongsberg
//! EM3 and EM4 headers embed the scale and offset their encoders applied to
//! the samples.
use crate::cursor::Cursor;
use crate::parser::em4::sampling_frequency;
use crate::parser::r2sonic::{signed_micro, R2SonicSettings};
use crate::parser::SensorFamily;
use crate::scale::{scaled, ScaleOffset};
use binrw::{BinRead, BinResult};
use serde::Serialize;

/// EM3 series imagery header, shared by the processed and raw layouts
#[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct Em3Imagery {
    /// Range of normal incidence in samples
    pub range_norm: u16,
    /// Start of the time varied gain ramp in samples
    pub start_tvg_ramp: u16,
    /// End of the time varied gain ramp in samples
    pub stop_tvg_ramp: u16,
    /// Normal incidence backscatter in dB
    pub bsn: i8,
    /// Oblique incidence backscatter in dB
    pub bso: i8,
    /// Mean absorption in dB/km
    #[br(map = |x: u16| scaled(x, 100.0))]
    pub mean_absorption: f64,
    /// Offset the encoder added to each sample
    pub offset: i16,
    /// Scale the encoder multiplied each sample by
    #[br(pad_after = 4)]
    pub scale: i16,
}

/// EM4 series imagery header
#[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct Em4Imagery {
    /// Sampling frequency in Hz
    #[br(map = sampling_frequency)]
    pub sampling_frequency: f64,
    /// Mean absorption in dB/km
    #[br(map = |x: u16| scaled(x, 100.0))]
    pub mean_absorption: f64,
    /// Transmit pulse length in microseconds
    pub tx_pulse_length: u16,
    /// Range of normal incidence in samples
    pub range_norm: u16,
    /// Start of the time varied gain ramp in samples
    pub start_tvg_ramp: u16,
    /// End of the time varied gain ramp in samples
    pub stop_tvg_ramp: u16,
    /// Normal incidence backscatter in dB
    #[br(map = |x: i16| scaled(x, 10.0))]
    pub bsn: f64,
    /// Oblique incidence backscatter in dB
    #[br(map = |x: i16| scaled(x, 10.0))]
    pub bso: f64,
    /// Transmit beam width in degrees
    #[br(map = |x: u16| scaled(x, 10.0))]
    pub tx_beam_width: f64,
    /// Time varied gain cross-over angle in degrees
    #[br(map = |x: u16| scaled(x, 10.0))]
    pub tvg_cross_over: f64,
    /// Offset the encoder added to each sample
    pub offset: i16,
    /// Scale the encoder multiplied each sample by
    #[br(pad_after = 20)]
    pub scale: i16,
}

/// Reson 7100 and T-Series imagery header
#[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct Reson7kImagery {
    /// Size of the sonar's own snippet header in bytes
    #[br(pad_after = 64)]
    pub size: u16,
}

/// Klein 5410 imagery header
#[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct KleinImagery {
    /// Resolution mode
    pub res_mode: u16,
    /// Time varied gain page
    pub tvg_page: u16,
    /// Identifiers of the beams the samples came from
    #[br(pad_after = 4)]
    pub beam_id: [u16; 5],
}

/// R2Sonic imagery header
///
/// Repeats the sonar settings of the sensor-specific subrecord as they
/// stood when the snippets were recorded.
#[derive(BinRead, Debug, Clone, PartialEq, Serialize)]
#[br(big)]
pub struct R2SonicImagery {
    /// Sonar settings
    #[serde(flatten)]
    pub settings: R2SonicSettings,
    /// Snippet settings from the sonar's M0 packet
    #[br(map = |x: [i32; 6]| x.map(signed_micro), pad_after = 32)]
    pub more_info: [f64; 6],
}

/// The sonar-dependent part of an imagery header
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum SensorImagery {
    /// EM3 series, processed or raw
    Em3(Em3Imagery),
    /// EM4 series
    Em4(Em4Imagery),
    /// KMALL, whose header is entirely spare
    Kmall,
    /// Reson 7100 series
    Reson7100(Reson7kImagery),
    /// Reson T-Series
    ResonTSeries(Reson7kImagery),
    /// Reson 8100 series, whose header is entirely spare
    Reson8100,
    /// Klein 5410
    Klein5410Bss(KleinImagery),
    /// R2Sonic
    R2Sonic(R2SonicImagery),
}

impl SensorImagery {
    /// True if intensity subrecords of this family can be decoded
    pub fn supports(family: SensorFamily) -> bool {
        use SensorFamily::*;
        matches!(
            family,
            Em3 | Em3Raw | Em4 | Kmall | Reson7100 | ResonTSeries | Reson8100 | Klein5410Bss | R2Sonic
        )
    }

    /// Read the header for `family`
    ///
    /// Returns `None` if the family has no imagery layout.
    pub fn read(family: SensorFamily, cursor: &mut Cursor<'_>) -> BinResult<Option<SensorImagery>> {
        let imagery = match family {
            SensorFamily::Em3 | SensorFamily::Em3Raw => SensorImagery::Em3(cursor.read()?),
            SensorFamily::Em4 => SensorImagery::Em4(cursor.read()?),
            SensorFamily::Kmall => {
                cursor.skip(64)?;
                SensorImagery::Kmall
            }
            SensorFamily::Reson7100 => SensorImagery::Reson7100(cursor.read()?),
            SensorFamily::ResonTSeries => SensorImagery::ResonTSeries(cursor.read()?),
            SensorFamily::Reson8100 => {
                cursor.skip(8)?;
                SensorImagery::Reson8100
            }
            SensorFamily::Klein5410Bss => SensorImagery::Klein5410Bss(cursor.read()?),
            SensorFamily::R2Sonic => SensorImagery::R2Sonic(cursor.read()?),
            _ => return Ok(None),
        };
        Ok(Some(imagery))
    }

    /// The scale and offset the sonar generation's samples are stored with
    ///
    /// The scale doubles as the divisor applied to every sample unless
    /// strict decoding is requested.
    pub fn default_scale(&self) -> ScaleOffset {
        match self {
            SensorImagery::Em3(_) => ScaleOffset::new(2.0, 0.0),
            SensorImagery::Em4(_) | SensorImagery::Kmall => ScaleOffset::new(10.0, 0.0),
            _ => ScaleOffset::new(1.0, 0.0),
        }
    }

    /// The scale and offset written into the header, if any
    pub fn embedded_scale(&self) -> Option<ScaleOffset> {
        match self {
            SensorImagery::Em3(h) => ScaleOffset::embedded(h.scale, h.offset),
            SensorImagery::Em4(h) => ScaleOffset::embedded(h.scale, h.offset),
            _ => None,
        }
    }

    /// The embedded pair when there is one, otherwise the default
    pub fn scale_offset(&self) -> ScaleOffset {
        ScaleOffset::resolve(self.embedded_scale(), self.default_scale())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::parser::r2sonic::test::{check_settings, settings_bytes};
    use crate::testutil::Buf;

    pub(crate) fn em3_imagery(offset: i16, scale: i16) -> Buf {
        Buf::new()
            .u16(120)
            .u16(10)
            .u16(200)
            .i8(-20)
            .i8(-30)
            .u16(4150)
            .i16(offset)
            .i16(scale)
            .zeros(4)
    }

    pub(crate) fn em4_imagery(offset: i16, scale: i16) -> Buf {
        Buf::new()
            .u32(14_000)
            .u32(1_000_000_000)
            .u16(6250)
            .u16(500)
            .u16(80)
            .u16(20)
            .u16(400)
            .i16(-215)
            .i16(-305)
            .u16(15)
            .u16(250)
            .i16(offset)
            .i16(scale)
            .zeros(20)
    }

    #[test]
    fn em3_embedded_scale() {
        let bytes = em3_imagery(-64, 4).build();
        let mut c = Cursor::new(&bytes);
        let imagery = SensorImagery::read(SensorFamily::Em3Raw, &mut c).unwrap().unwrap();
        assert_eq!(c.remaining(), 0);
        assert_eq!(imagery.default_scale(), ScaleOffset::new(2.0, 0.0));
        assert_eq!(imagery.scale_offset(), ScaleOffset::new(4.0, -64.0));
        match imagery {
            SensorImagery::Em3(h) => {
                assert_eq!(h.bsn, -20);
                assert_eq!(h.mean_absorption, 41.5);
            }
            other => panic!("unexpected header {other:?}"),
        }
    }

    #[test]
    fn zero_scale_falls_back_to_default() {
        let bytes = em3_imagery(5, 0).build();
        let imagery = SensorImagery::read(SensorFamily::Em3, &mut Cursor::new(&bytes))
            .unwrap()
            .unwrap();
        assert_eq!(imagery.embedded_scale(), None);
        assert_eq!(imagery.scale_offset(), ScaleOffset::new(2.0, 0.0));
    }

    #[test]
    fn spare_only_headers() {
        let bytes = [0u8; 64];
        let mut c = Cursor::new(&bytes);
        let imagery = SensorImagery::read(SensorFamily::Kmall, &mut c).unwrap().unwrap();
        assert_eq!(imagery, SensorImagery::Kmall);
        assert_eq!(imagery.scale_offset(), ScaleOffset::new(10.0, 0.0));
        assert_eq!(c.remaining(), 0);

        let mut c = Cursor::new(&bytes[..7]);
        assert!(SensorImagery::read(SensorFamily::Reson8100, &mut c).is_err());
    }

    #[test]
    fn families_without_imagery() {
        let bytes = [0u8; 16];
        let mut c = Cursor::new(&bytes);
        assert!(!SensorImagery::supports(SensorFamily::Em100));
        assert_eq!(SensorImagery::read(SensorFamily::Em100, &mut c).unwrap(), None);
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn klein_beam_ids() {
        let bytes = Buf::new()
            .u16(1)
            .u16(2)
            .u16(10)
            .u16(11)
            .u16(12)
            .u16(13)
            .u16(14)
            .zeros(4)
            .build();
        let imagery = SensorImagery::read(SensorFamily::Klein5410Bss, &mut Cursor::new(&bytes))
            .unwrap()
            .unwrap();
        match imagery {
            SensorImagery::Klein5410Bss(h) => assert_eq!(h.beam_id, [10, 11, 12, 13, 14]),
            other => panic!("unexpected header {other:?}"),
        }
    }

    #[test]
    fn em4_header_fields() {
        let bytes = em4_imagery(-64, 4).build();
        let mut c = Cursor::new(&bytes);
        let imagery = SensorImagery::read(SensorFamily::Em4, &mut c).unwrap().unwrap();
        assert_eq!(c.remaining(), 0);
        assert_eq!(imagery.default_scale(), ScaleOffset::new(10.0, 0.0));
        assert_eq!(imagery.scale_offset(), ScaleOffset::new(4.0, -64.0));
        match imagery {
            SensorImagery::Em4(h) => {
                assert_eq!(h.sampling_frequency, 14_000.25);
                assert_eq!(h.mean_absorption, 62.5);
                assert_eq!(h.tx_pulse_length, 500);
                assert_eq!(h.stop_tvg_ramp, 400);
                assert_eq!(h.bsn, -21.5);
                assert_eq!(h.bso, -30.5);
                assert_eq!(h.tx_beam_width, 1.5);
                assert_eq!(h.tvg_cross_over, 25.0);
            }
            other => panic!("unexpected header {other:?}"),
        }
    }

    #[test]
    fn reson_7100_snippet_size() {
        let bytes = Buf::new().u16(88).zeros(64).build();
        let mut c = Cursor::new(&bytes);
        let imagery = SensorImagery::read(SensorFamily::Reson7100, &mut c).unwrap().unwrap();
        assert_eq!(c.remaining(), 0);
        assert_eq!(imagery, SensorImagery::Reson7100(Reson7kImagery { size: 88 }));
        assert_eq!(imagery.scale_offset(), ScaleOffset::new(1.0, 0.0));

        let mut c = Cursor::new(&bytes[..65]);
        assert!(SensorImagery::read(SensorFamily::Reson7100, &mut c).is_err());
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn r2sonic_repeats_the_settings() {
        let bytes = settings_bytes()
            .i32(2_500_000)
            .i32(-1_000_000)
            .zeros(4 * 4)
            .zeros(32)
            .build();
        let mut c = Cursor::new(&bytes);
        let imagery = SensorImagery::read(SensorFamily::R2Sonic, &mut c).unwrap().unwrap();
        assert_eq!(c.remaining(), 0);
        assert_eq!(imagery.embedded_scale(), None);
        match imagery {
            SensorImagery::R2Sonic(h) => {
                check_settings(&h.settings);
                assert_eq!(h.more_info, [2.5, -1.0, 0.0, 0.0, 0.0, 0.0]);
            }
            other => panic!("unexpected header {other:?}"),
        }
    }
}
