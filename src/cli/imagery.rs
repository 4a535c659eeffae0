//! Decode one intensity subrecord
use crate::cursor::Cursor;
use crate::intensity;
use crate::model::DecodeOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Decode the intensity subrecord stored in `path`, holding `beams` beams,
/// and write it as pretty JSON
///
/// Trailing bytes after the last beam are logged and ignored.
pub fn imagery(
    path: &Path,
    sensor_id: u32,
    beams: usize,
    strict: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let options = DecodeOptions::default().strict(strict);
    let mut cursor = Cursor::new(&bytes);
    let record = intensity::decode_imagery(sensor_id, &mut cursor, beams, &options)?;
    if cursor.remaining() > 0 {
        log::warn!(
            "{} bytes left after {} beams of imagery",
            cursor.remaining(),
            beams
        );
    }

    let mut writer = super::writer(output.as_deref())?;
    serde_json::to_writer_pretty(&mut writer, &record)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
