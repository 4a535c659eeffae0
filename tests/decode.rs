mod common;

use common::{em3_head, em3_run_time, em4, Buf};
use gsf_sensor::error::{Error, ErrorCategory};
use gsf_sensor::model::{DecodeOptions, SchemaVersion};
use gsf_sensor::parser::{self, SensorBatch, SensorFamily, SensorRecord};

#[test]
fn em100_exact_values() -> Result<(), Box<dyn std::error::Error>> {
    let bytes = Buf::new()
        .i16(500)
        .i16(-250)
        .bytes(&[1, 2, 3, 4, 5])
        .u16(42)
        .build();
    let record = parser::decode_bytes(104, &bytes, &DecodeOptions::default())?;
    match record {
        SensorRecord::Em100(em100) => {
            assert_eq!(em100.ship_pitch, 5.0);
            assert_eq!(em100.transducer_pitch, -2.5);
            assert_eq!(em100.pulse_length, 5);
            assert_eq!(em100.counter, 42);
        }
        other => panic!("decoded as {}", other.family()),
    }
    Ok(())
}

#[test]
fn seabeam_2112_surface_velocity() -> Result<(), Box<dyn std::error::Error>> {
    // stored as (velocity * 100) - 130000
    let bytes = Buf::new()
        .u8(1)
        .u16(20000)
        .u8(2)
        .u8(3)
        .u8(4)
        .u8(5)
        .u8(2)
        .bytes(b"WD\0\0\0")
        .zeros(2)
        .build();
    match parser::decode_bytes(116, &bytes, &DecodeOptions::default())? {
        SensorRecord::SeaBeam2112(rec) => {
            assert_eq!(rec.surface_velocity, 1500.0);
            assert_eq!(rec.algorithm_order, "WD");
        }
        other => panic!("decoded as {}", other.family()),
    }
    Ok(())
}

#[test]
fn dispatch_covers_every_id_once() {
    let ids = parser::supported_sensor_ids();
    for family in SensorFamily::ALL {
        for id in family.sensor_ids() {
            assert_eq!(parser::sensor_family(*id), Some(*family), "sensor id {id}");
        }
    }
    let listed: usize = SensorFamily::ALL.iter().map(|f| f.sensor_ids().len()).sum();
    assert_eq!(ids.len(), listed);
    for id in (0..400).filter(|id| !ids.contains(id) && *id != parser::UNDEFINED_SENSOR_ID) {
        let err = parser::decode_bytes(id, &[0; 2048], &DecodeOptions::default()).unwrap_err();
        assert_eq!(err, Error::UnsupportedSensor(id));
    }
}

#[test]
fn em3_ids_share_one_decoder() -> Result<(), Box<dyn std::error::Error>> {
    let bytes = em3_head(0).build();
    for id in [118, 119, 120, 128, 129, 130, 131, 132, 139] {
        let record = parser::decode_bytes(id, &bytes, &DecodeOptions::default())?;
        assert_eq!(record.family(), SensorFamily::Em3);
    }
    Ok(())
}

#[test]
fn swath_and_coverage_derivation() -> Result<(), Box<dyn std::error::Error>> {
    let bytes = em3_head(0x03)
        .bytes(&em3_run_time(300, 40, 0, 0, 0).build())
        .bytes(&em3_run_time(300, 40, 30, 0, 0).build())
        .build();
    let SensorRecord::Em3(em3) = parser::decode_bytes(118, &bytes, &DecodeOptions::default())?
    else {
        panic!("not decoded as EM3");
    };
    let symmetric = em3.run_time_primary.ok_or("missing primary")?;
    assert_eq!(symmetric.swath_width.port, 20.0);
    assert_eq!(symmetric.swath_width.starboard, 20.0);
    assert_eq!(symmetric.swath_width.total, 40.0);
    assert_eq!(symmetric.coverage_sector.total, 40.0);

    let split = em3.run_time_secondary.ok_or("missing secondary")?;
    assert_eq!(split.swath_width.port, 40.0);
    assert_eq!(split.swath_width.starboard, 30.0);
    assert_eq!(split.swath_width.total, 70.0);
    Ok(())
}

#[test]
fn absorption_ratio_is_version_gated() -> Result<(), Box<dyn std::error::Error>> {
    let bytes = em3_head(0x01)
        .bytes(&em3_run_time(300, 40, 0, 0, 12).build())
        .build();
    let ratio = |version: SchemaVersion| -> Result<Option<u8>, Error> {
        match parser::decode_bytes(118, &bytes, &DecodeOptions::new(version))? {
            SensorRecord::Em3(em3) => Ok(em3.run_time_primary.and_then(|r| r.hilo_freq_absorp_ratio)),
            other => panic!("decoded as {}", other.family()),
        }
    };
    assert_eq!(ratio("GSF-v02.07".parse()?)?, None);
    assert_eq!(ratio("GSF-v02.08".parse()?)?, Some(12));
    assert_eq!(ratio(SchemaVersion::CURRENT)?, Some(12));
    Ok(())
}

#[test]
fn durotong_speed_needs_dual_head_model() -> Result<(), Box<dyn std::error::Error>> {
    for (model, expected) in [(1002, Some(1480.0)), (3000, None)] {
        let bytes = em3_head(0x01)
            .bytes(&em3_run_time(model, 40, 0, 14800, 0).build())
            .build();
        let SensorRecord::Em3(em3) = parser::decode_bytes(118, &bytes, &DecodeOptions::default())?
        else {
            panic!("not decoded as EM3");
        };
        assert_eq!(em3.run_time_primary.ok_or("missing")?.durotong_speed, expected);
    }
    Ok(())
}

#[test]
fn strict_transducer_depth() -> Result<(), Box<dyn std::error::Error>> {
    let bytes = em4(1, 0xFFFF_FFEC, &[]);
    let depth = |strict: bool| -> Result<f64, Error> {
        let options = DecodeOptions::default().strict(strict);
        match parser::decode_bytes(133, &bytes, &options)? {
            SensorRecord::Em4(em4) => Ok(em4.transducer_depth),
            other => panic!("decoded as {}", other.family()),
        }
    };
    assert_eq!(depth(false)?, 4_294_967_276.0 / 20000.0);
    assert_eq!(depth(true)?, -0.001);
    Ok(())
}

#[test]
fn accumulation_is_associative() -> Result<(), Box<dyn std::error::Error>> {
    let options = DecodeOptions::default();
    let pings: Vec<Vec<u8>> = vec![
        em4(1, 20000, &[-100, 100]),
        em4(2, 40000, &[]),
        em4(3, 60000, &[50]),
    ];
    let decode = |i: usize| parser::decode_bytes(134, &pings[i], &options);

    let mut left = SensorBatch::from(decode(0)?);
    left.push(decode(1)?)?;
    left.push(decode(2)?)?;

    let mut tail = SensorBatch::from(decode(1)?);
    tail.push(decode(2)?)?;
    let mut right = SensorBatch::from(decode(0)?);
    right.append(tail)?;

    assert_eq!(left, right);
    assert_eq!(left.pings(), 3);

    let SensorBatch::Em4(batch) = left else {
        panic!("not an EM4 batch");
    };
    assert_eq!(batch.ping_counter, vec![1, 2, 3]);
    assert_eq!(batch.transducer_depth, vec![1.0, 2.0, 3.0]);
    assert_eq!(batch.sectors.offsets(), &[0, 2, 2, 3]);
    assert_eq!(batch.sectors.row(1).map(|r| r.len()), Some(0));
    assert_eq!(batch.sectors.row(2).map(|r| r[0].tilt_angle), Some(0.5));
    assert_eq!(batch.run_time_primary, vec![None, None, None]);
    Ok(())
}

#[test]
fn mismatch_is_reported_when_folding() -> Result<(), Box<dyn std::error::Error>> {
    let options = DecodeOptions::default();
    let em4_ping = parser::decode_bytes(133, &em4(1, 0, &[]), &options)?;
    let seabeam_ping = parser::decode_bytes(102, &[0, 1], &options)?;

    let mut batch = SensorBatch::from(em4_ping.clone());
    let err = batch.push(seabeam_ping.clone()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::SensorMismatch);
    assert_eq!(
        err,
        Error::SensorMismatch {
            expected: SensorFamily::Em4,
            found: SensorFamily::SeaBeam
        }
    );

    let err = batch.append(SensorBatch::from(seabeam_ping)).unwrap_err();
    assert_eq!(err.family(), Some(SensorFamily::Em4));
    assert_eq!(batch.pings(), 1);

    let err = parser::accumulate(vec![em4_ping, parser::decode_bytes(102, &[0, 2], &options)?])
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::SensorMismatch);
    Ok(())
}

#[test]
fn records_serialize_with_sentinels() -> Result<(), Box<dyn std::error::Error>> {
    let bytes = em3_head(0x01)
        .bytes(&em3_run_time(300, 40, 0, 0, 3).build())
        .build();
    let record = parser::decode_bytes(118, &bytes, &DecodeOptions::new(SchemaVersion::new(2, 0)))?;
    let json: serde_json::Value = serde_json::to_value(&record)?;
    assert_eq!(json["family"], "Em3");
    let primary = &json["run_time_primary"];
    assert_eq!(primary["hilo_freq_absorp_ratio"], 0);
    assert!(primary["durotong_speed"].is_null());
    assert_eq!(primary["dg_time"], "2001-09-09T01:46:40Z");
    assert!(json["run_time_secondary"].is_null());
    Ok(())
}
