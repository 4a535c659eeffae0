//! Decode one sensor-specific subrecord
use crate::model::{DecodeOptions, SchemaVersion};
use crate::parser;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Decode the subrecord stored in `path` and write it as pretty JSON to
/// `output`, or to stdout
pub fn decode(
    path: &Path,
    sensor_id: u32,
    version: SchemaVersion,
    strict: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let options = DecodeOptions::new(version).strict(strict);
    let record = parser::decode_bytes(sensor_id, &bytes, &options)?;

    let mut writer = super::writer(output.as_deref())?;
    serde_json::to_writer_pretty(&mut writer, &record)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
