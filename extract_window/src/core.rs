use crate::{
    cli::{Config, PositionColumns},
    consts::{
        FIELD_SEP, FILE_EXT, FILE_PREFIX, HEADER, LINE_SEP, NULL_TEXT, TABLE_LISTING_QUERY,
    },
    error::{ExtractError, ExtractResult},
};

use log::{debug, info};
use rusqlite::{Connection, OpenFlags, params, types::ValueRef};

use std::{
    fs::{File, create_dir_all, remove_file},
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Outcome of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub path: PathBuf,
    pub records: usize,
}

/// Main processing function: validates the table, then writes every oligo
/// inside the configured window to `{outdir}/{table}/chr{chrom}_{start}_{stop}.tsv`.
pub fn extract_window(config: &Config) -> ExtractResult<Summary> {
    let Config {
        db,
        table,
        chrom,
        start,
        stop,
        outdir,
        mode,
    } = config;

    info!("Extracting information from unique oligo databases.");
    info!("Database: {}", db.display());
    info!("Table: {}", table);
    info!("Region: chr{}:{}-{}", chrom, start, stop);

    info!("Connecting to database...");
    let conn = open_database(db)?;
    ensure_table(&conn, table)?;

    info!("Creating output folder...");
    let dir = output_dir(outdir, table);
    create_dir_all(&dir).map_err(|source| ExtractError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    info!(
        "Extracting oligos from region {}:{}-{}...",
        chrom, start, stop
    );
    let path = output_path(&dir, chrom, *start, *stop);
    remove_stale(&path)?;

    let file = File::create(&path).map_err(|source| ExtractError::CreateFile {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    // the header reaches disk even when the query fails
    let written = write_window(&conn, config, mode.columns(), &path, &mut writer);
    writer.flush().map_err(|source| ExtractError::Write {
        path: path.clone(),
        source,
    })?;
    let records = written?;

    info!("Wrote {} oligos to {}", records, path.display());

    Ok(Summary { path, records })
}

/// Opens the database read-only; a missing file is an error, never a new database.
pub fn open_database(path: &Path) -> ExtractResult<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Connection::open_with_flags(path, flags).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Names of all tables in the database schema catalog.
pub fn list_tables(conn: &Connection) -> ExtractResult<Vec<String>> {
    let mut statement = conn
        .prepare(TABLE_LISTING_QUERY)
        .map_err(ExtractError::ListTables)?;

    let tables = statement
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(ExtractError::ListTables)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(ExtractError::ListTables)?;

    debug!("Available tables: {:?}", tables);

    Ok(tables)
}

/// Fails with [`ExtractError::UnknownTable`] unless `table` is in the catalog.
pub fn ensure_table(conn: &Connection, table: &str) -> ExtractResult<()> {
    let available = list_tables(conn)?;

    if available.iter().any(|name| name == table) {
        Ok(())
    } else {
        Err(ExtractError::UnknownTable {
            table: table.to_string(),
            available,
        })
    }
}

/// Folder holding every window extracted from `table`: `{outdir}/{table}`.
///
/// # Arguments
///
/// - `outdir`: Base output directory
/// - `table`: Name of the queried table
pub fn output_dir(outdir: &Path, table: &str) -> PathBuf {
    outdir.join(table)
}

/// Output file for a window inside `dir`: `chr{chrom}_{start}_{stop}.tsv`.
pub fn output_path(dir: &Path, chrom: &str, start: i64, stop: i64) -> PathBuf {
    dir.join(format!(
        "{}{}_{}_{}.{}",
        FILE_PREFIX, chrom, start, stop, FILE_EXT
    ))
}

/// Removes a previous output at `path`. A missing file is not an error.
pub fn remove_stale(path: &Path) -> ExtractResult<()> {
    match remove_file(path) {
        Ok(()) => {
            debug!("Removed previous output {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ExtractError::RemoveStale {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Builds the window query for `table`, filtering and ordering on `columns`.
///
/// The chromosome, start and stop are bound as `?1`, `?2` and `?3`.
pub fn select_query(table: &str, columns: PositionColumns) -> String {
    let PositionColumns { start, stop } = columns;

    format!(
        "SELECT CHR, {start}, {stop}, SEQ, NAME, GC, TM, DG FROM {} \
         WHERE CHR = ?1 AND {start} >= ?2 AND {stop} <= ?3 ORDER BY {start}",
        quote_identifier(table)
    )
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Runs the window query and streams the header plus one line per row into `writer`.
fn write_window<W: Write>(
    conn: &Connection,
    config: &Config,
    columns: PositionColumns,
    path: &Path,
    writer: &mut W,
) -> ExtractResult<usize> {
    let query_err = |source: rusqlite::Error| ExtractError::Query {
        table: config.table.clone(),
        source,
    };
    let write_err = |source: std::io::Error| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    };

    writer
        .write_all(HEADER.join(FIELD_SEP).as_bytes())
        .and_then(|_| writer.write_all(LINE_SEP.as_bytes()))
        .map_err(write_err)?;

    let sql = select_query(&config.table, columns);
    debug!("Running query: {}", sql);

    let mut statement = conn.prepare(&sql).map_err(query_err)?;
    let column_count = statement.column_count();

    let mut rows = statement
        .query(params![config.chrom, config.start, config.stop])
        .map_err(query_err)?;

    let mut records = 0;
    let mut line = String::new();
    while let Some(row) = rows.next().map_err(query_err)? {
        line.clear();
        for idx in 0..column_count {
            if idx > 0 {
                line.push_str(FIELD_SEP);
            }
            line.push_str(&format_value(row.get_ref(idx).map_err(query_err)?));
        }
        line.push_str(LINE_SEP);

        writer.write_all(line.as_bytes()).map_err(write_err)?;
        records += 1;
    }

    Ok(records)
}

/// Converts a sqlite value to the text written in the output table.
pub fn format_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => NULL_TEXT.to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => format_real(r),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    }
}

/// Shortest round-trip rendering of a float, always carrying a fraction
/// (`55.0`), switching to exponent form (`1e+16`, `1.5e-05`) outside `[1e-4, 1e16)`.
fn format_real(r: f64) -> String {
    if r.is_nan() {
        return "nan".to_string();
    }
    if r.is_infinite() {
        let text = if r > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let magnitude = r.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", r);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => formatted,
        };
    }

    let formatted = r.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}
