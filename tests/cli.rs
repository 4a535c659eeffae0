use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::io::Write;
use std::process::Command; // Run programs
use tempfile::NamedTempFile;

fn subrecord(bytes: &[u8]) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}

#[test]
fn list_sensors() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("gsf-sensor")?;

    cmd.arg("sensors");
    cmd.assert().success().stdout(
        predicate::str::contains("104\tEm100\n")
            .and(predicate::str::contains("118\tEm3\timagery"))
            .and(predicate::str::contains("156\tKmall\timagery"))
            .and(predicate::str::contains("154\t").not()),
    );

    Ok(())
}

#[test]
fn decode_em100() -> Result<(), Box<dyn std::error::Error>> {
    let file = subrecord(&[0x01, 0xf4, 0xff, 0x9c, 1, 2, 3, 4, 5, 0x00, 0x2a])?;
    let mut cmd = Command::cargo_bin("gsf-sensor")?;

    cmd.arg("decode").arg(file.path()).arg("--sensor-id").arg("104");
    cmd.assert().success().stdout(
        predicate::str::contains("\"family\": \"Em100\"")
            .and(predicate::str::contains("\"ship_pitch\": 5.0"))
            .and(predicate::str::contains("\"counter\": 42")),
    );

    Ok(())
}

#[test]
fn decode_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let file = subrecord(&[0x00, 0x07])?;
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("seabeam.json");
    let mut cmd = Command::cargo_bin("gsf-sensor")?;

    cmd.arg("decode")
        .arg(file.path())
        .args(["-s", "102", "-o"])
        .arg(&out);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out)?)?;
    assert_eq!(json["family"], "SeaBeam");
    assert_eq!(json["eclipse_time"], 7);

    Ok(())
}

#[test]
fn decode_unsupported_sensor() -> Result<(), Box<dyn std::error::Error>> {
    let file = subrecord(&[0; 64])?;
    let mut cmd = Command::cargo_bin("gsf-sensor")?;

    cmd.arg("decode").arg(file.path()).args(["-s", "99"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("UnsupportedSensor(99)"));

    Ok(())
}

#[test]
fn decode_truncated() -> Result<(), Box<dyn std::error::Error>> {
    let file = subrecord(&[0; 4])?;
    let mut cmd = Command::cargo_bin("gsf-sensor")?;

    cmd.arg("decode").arg(file.path()).args(["-s", "104"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("TruncatedRecord { family: Em100 }"));

    Ok(())
}

#[test]
fn decode_bad_version() -> Result<(), Box<dyn std::error::Error>> {
    let file = subrecord(&[0; 64])?;
    let mut cmd = Command::cargo_bin("gsf-sensor")?;

    cmd.arg("decode")
        .arg(file.path())
        .args(["-s", "118", "--gsf-version", "three"]);
    cmd.assert().failure();

    Ok(())
}

#[test]
fn imagery_reson_8100() -> Result<(), Box<dyn std::error::Error>> {
    let mut bytes = vec![8, 0, 0, 0, 0];
    bytes.extend_from_slice(&[0; 16 + 8]);
    bytes.extend_from_slice(&[0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 10, 20]);
    let file = subrecord(&bytes)?;
    let mut cmd = Command::cargo_bin("gsf-sensor")?;

    cmd.arg("imagery").arg(file.path()).args(["-s", "122", "-b", "1"]);
    cmd.assert().success().stdout(
        predicate::str::contains("\"kind\": \"Reson8100\"")
            .and(predicate::str::contains("15.0")),
    );

    Ok(())
}

#[test]
fn decode_no_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("gsf-sensor")?;

    cmd.arg("decode").arg("missing.bin").args(["-s", "104"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No such file or directory"));

    Ok(())
}
