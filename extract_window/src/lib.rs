//! extract all oligos in a given genomic window
//!
//! This tool reads a unique-oligo sqlite database and writes every probe
//! lying inside a chromosomal window to a tab-separated file at
//! `{outdir}/{table}/chr{chr}_{start}_{stop}.tsv`.
//!
//! # Usage
//!
//! ```bash
//! Usage: extract_window [OPTIONS] <DB> <TABLE> <CHR> <START> <STOP>
//!
//! Arguments:
//!   <DB>     Sqlite3 database path
//!   <TABLE>  Table name
//!   <CHR>    Chromosome name (e.g., 1, 2, X)
//!   <START>  Start coordinate
//!   <STOP>   Stop coordinate
//!
//! Options:
//!       --outdir <OD>     Output directory path [default: .]
//!   -r, --rna             Input database from transcriptome pipeline, uses GSTART/GSTOP as positional columns
//!   -L, --level <LEVEL>   Logging verbosity level [default: info]
//!   -h, --help            Print help
//!   -V, --version         Print version
//! ```

pub mod cli;
pub mod consts;
pub mod core;
pub mod error;

pub use cli::{Args, Config, Mode, PositionColumns};
pub use core::{Summary, extract_window};
pub use error::{ExtractError, ExtractResult};
