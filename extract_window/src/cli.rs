//! extract all oligos in a given genomic window
//!
//! This tool reads a unique-oligo sqlite database and writes every probe
//! lying inside a chromosomal window to a tab-separated file.

use clap::{ArgAction, Parser};
use log::Level;

use std::{fmt, path::PathBuf};

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Args {
    /// Sqlite3 database path
    #[arg(value_name = "DB")]
    pub db: PathBuf,

    /// Table name
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Chromosome name (e.g., 1, 2, X)
    #[arg(value_name = "CHR")]
    pub chr: String,

    /// Start coordinate
    #[arg(value_name = "START")]
    pub start: i64,

    /// Stop coordinate
    #[arg(value_name = "STOP")]
    pub stop: i64,

    /// Output directory path
    #[arg(long, value_name = "OD", default_value = ".")]
    pub outdir: PathBuf,

    /// Input database from transcriptome pipeline, uses GSTART/GSTOP as positional columns
    #[arg(short = 'r', long, default_value = "false", action = ArgAction::SetTrue)]
    pub rna: bool,

    /// Logging verbosity level
    #[arg(short = 'L', long, default_value = "info")]
    pub level: Level,
}

/// Formats the Args struct as a comma-separated string of key=value pairs.
///
/// # Example
///
/// ```rust,ignore
/// use extract_window::Args;
/// let args = Args::parse();
/// println!("{}", args);
/// ```
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "db={}, table={}, chr={}, start={}, stop={}, outdir={}, rna={}, level={}",
            self.db.display(),
            self.table,
            self.chr,
            self.start,
            self.stop,
            self.outdir.display(),
            self.rna,
            self.level,
        )
    }
}

/// Which pipeline produced the database, and therefore which columns hold
/// the genomic position of each oligo.
///
/// # Variants
///
/// - `Standard`: positions in `START`/`STOP`
/// - `Transcriptome`: positions in `GSTART`/`GSTOP`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Standard,
    Transcriptome,
}

/// Names of the start/stop coordinate columns for a given [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionColumns {
    pub start: &'static str,
    pub stop: &'static str,
}

impl Mode {
    pub fn from_rna(rna: bool) -> Self {
        if rna {
            Mode::Transcriptome
        } else {
            Mode::Standard
        }
    }

    pub fn columns(self) -> PositionColumns {
        match self {
            Mode::Standard => PositionColumns {
                start: "START",
                stop: "STOP",
            },
            Mode::Transcriptome => PositionColumns {
                start: "GSTART",
                stop: "GSTOP",
            },
        }
    }
}

/// Immutable parameters of a single window extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db: PathBuf,
    pub table: String,
    pub chrom: String,
    pub start: i64,
    pub stop: i64,
    pub outdir: PathBuf,
    pub mode: Mode,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let Args {
            db,
            table,
            chr,
            start,
            stop,
            outdir,
            rna,
            ..
        } = args;

        Config {
            db,
            table,
            chrom: chr,
            start,
            stop,
            outdir,
            mode: Mode::from_rna(rna),
        }
    }
}
