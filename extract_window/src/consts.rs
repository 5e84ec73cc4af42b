//! extract all oligos in a given genomic window
//!
//! This tool reads a unique-oligo sqlite database and writes every probe
//! lying inside a chromosomal window to a tab-separated file.

/// Output header, identical for both position modes.
pub const HEADER: [&str; 8] = ["CHR", "START", "STOP", "SEQ", "NAME", "GC", "TM", "DG"];

pub const TABLE_LISTING_QUERY: &str = "SELECT name FROM sqlite_master WHERE type='table'";

pub const FIELD_SEP: &str = "\t";
pub const LINE_SEP: &str = "\n";

pub const FILE_PREFIX: &str = "chr";
pub const FILE_EXT: &str = "tsv";

// rendering of sqlite NULL values in the output
pub const NULL_TEXT: &str = "None";
