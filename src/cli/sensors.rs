//! Print the sensor id dispatch table
use crate::intensity::SensorImagery;
use crate::parser::{self, sensor_family};
use std::io::Write;
use std::path::PathBuf;

/// Write one line per supported sensor id: the id, its family, and
/// `imagery` if intensity subrecords can be decoded for it
pub fn sensors(output: Option<PathBuf>) -> std::io::Result<()> {
    let mut writer = super::writer(output.as_deref())?;
    for id in parser::supported_sensor_ids() {
        if let Some(family) = sensor_family(id) {
            let imagery = if SensorImagery::supports(family) {
                "\timagery"
            } else {
                ""
            };
            writeln!(writer, "{}\t{}{}", id, family, imagery)?;
        }
    }
    writer.flush()
}
