//! The `gsf-sensor` command line interface
use crate::model::SchemaVersion;
use clap::Parser;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Decode GSF sensor-specific and intensity subrecords
#[derive(Parser, Debug)]
#[command(name = "gsf-sensor", version)]
pub struct Args {
    /// The subcommand to run
    #[command(subcommand)]
    pub cmd: Action,
}

/// The subcommands
#[derive(clap::Subcommand, Debug)]
pub enum Action {
    /// Decode a dumped sensor-specific subrecord and print it as JSON
    Decode {
        /// File holding the subrecord bytes
        path: PathBuf,
        /// Sensor id of the ping the subrecord came from
        #[arg(short, long)]
        sensor_id: u32,
        /// GSF version of the file the subrecord came from
        #[arg(long, default_value_t = SchemaVersion::CURRENT)]
        gsf_version: SchemaVersion,
        /// Follow the documented field types where encoders deviate
        #[arg(long)]
        strict: bool,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode a dumped intensity subrecord and print it as JSON
    Imagery {
        /// File holding the subrecord bytes
        path: PathBuf,
        /// Sensor id of the ping the subrecord came from
        #[arg(short, long)]
        sensor_id: u32,
        /// Number of beams in the ping
        #[arg(short, long)]
        beams: usize,
        /// Divide samples by the embedded scale instead of the default
        #[arg(long)]
        strict: bool,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the supported sensor ids and their families
    Sensors {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run a parsed command line
pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.cmd {
        Action::Decode {
            path,
            sensor_id,
            gsf_version,
            strict,
            output,
        } => {
            decode::decode(&path, sensor_id, gsf_version, strict, output)?;
        }
        Action::Imagery {
            path,
            sensor_id,
            beams,
            strict,
            output,
        } => {
            imagery::imagery(&path, sensor_id, beams, strict, output)?;
        }
        Action::Sensors { output } => {
            sensors::sensors(output)?;
        }
    };
    Ok(())
}

/// Open the output file, or stdout if there is none
fn writer(output: Option<&Path>) -> std::io::Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(stdout().lock()),
    })
}

pub mod decode;
pub mod imagery;
pub mod sensors;
