//! extract all oligos in a given genomic window
//!
//! This tool reads a unique-oligo sqlite database and writes every probe
//! lying inside a chromosomal window to a tab-separated file.

use thiserror::Error;

use std::{io, path::PathBuf};

/// Every way a window extraction can fail. All variants are terminal.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("cannot list tables: {0}")]
    ListTables(#[source] rusqlite::Error),

    #[error(
        "the provided table does not exist: {table}. Available tables: [{}]",
        available.join(", ")
    )]
    UnknownTable {
        table: String,
        available: Vec<String>,
    },

    #[error("cannot create output folder {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot remove previous output {}: {source}", path.display())]
    RemoveStale {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot query table {table}: {source}")]
    Query {
        table: String,
        #[source]
        source: rusqlite::Error,
    },
}

pub type ExtractResult<T> = Result<T, ExtractError>;
