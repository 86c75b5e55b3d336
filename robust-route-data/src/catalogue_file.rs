//! JSON persistence for path catalogues.
//!
//! A catalogue file is a JSON array of
//! `{ "origin", "destination", "planned": [path], "deviation": path }`
//! entries, where each path is `{ "nodes": [..], "arc_lengths": [..] }`.
//! A ranked file is an array of `{ "origin", "destination", "paths": [path] }`
//! with paths ordered shortest first.

use std::io::{self, BufReader, BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use robust_route_core::PathCatalogue;
use robust_route_fs::{create_utf8_file, ensure_parent_dir, open_utf8_file};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{RankedCatalogue, RankedPaths, catalogue_from_ranked};

/// Errors raised while reading or writing catalogue files.
#[derive(Debug, Error)]
pub enum CatalogueFileError {
    /// The file could not be opened.
    #[error("failed to open catalogue file at {path}")]
    Open {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// File that was requested.
        path: Utf8PathBuf,
    },
    /// The file is not a valid catalogue document.
    #[error("failed to parse catalogue file at {path}")]
    Parse {
        /// Underlying JSON or validation failure.
        #[source]
        source: serde_json::Error,
        /// File that was read.
        path: Utf8PathBuf,
    },
    /// The parent directory could not be created.
    #[error("failed to create parent directory for catalogue file at {path}")]
    CreateParent {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// File that was being written.
        path: Utf8PathBuf,
    },
    /// The file could not be created or flushed.
    #[error("failed to write catalogue file at {path}")]
    Write {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// File that was being written.
        path: Utf8PathBuf,
    },
    /// The catalogue could not be encoded.
    #[error("failed to serialise catalogue for {path}")]
    Serialise {
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
        /// File that was being written.
        path: Utf8PathBuf,
    },
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CatalogueFileError> {
    let file = open_utf8_file(path).map_err(|source| CatalogueFileError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogueFileError::Parse {
        source,
        path: path.to_path_buf(),
    })
}

/// Load a catalogue file.
///
/// Every path is validated while parsing. When a leg appears more than once
/// the later entry wins.
///
/// # Errors
/// Returns [`CatalogueFileError::Open`] when the file cannot be opened and
/// [`CatalogueFileError::Parse`] for malformed JSON or invalid path data.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use robust_route_data::load_catalogue;
///
/// # fn main() -> Result<(), robust_route_data::CatalogueFileError> {
/// let catalogue = load_catalogue(Utf8Path::new("catalogue.json"))?;
/// println!("{} legs", catalogue.len());
/// # Ok(())
/// # }
/// ```
pub fn load_catalogue(path: &Utf8Path) -> Result<PathCatalogue, CatalogueFileError> {
    read_json(path)
}

/// Load a ranked-path file and split it into a catalogue.
///
/// # Errors
/// Returns [`CatalogueFileError::Open`] or [`CatalogueFileError::Parse`] as
/// for [`load_catalogue`].
pub fn load_ranked_catalogue(path: &Utf8Path) -> Result<RankedCatalogue, CatalogueFileError> {
    let ranked: Vec<RankedPaths> = read_json(path)?;
    Ok(catalogue_from_ranked(ranked))
}

/// Write `catalogue` as pretty-printed JSON, creating parent directories.
///
/// Entries are written sorted by leg so output is stable across runs.
///
/// # Errors
/// Returns [`CatalogueFileError::CreateParent`], [`CatalogueFileError::Write`]
/// or [`CatalogueFileError::Serialise`] naming the target path.
pub fn write_catalogue(path: &Utf8Path, catalogue: &PathCatalogue) -> Result<(), CatalogueFileError> {
    ensure_parent_dir(path).map_err(|source| CatalogueFileError::CreateParent {
        source,
        path: path.to_path_buf(),
    })?;
    let file = create_utf8_file(path).map_err(|source| CatalogueFileError::Write {
        source,
        path: path.to_path_buf(),
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, catalogue).map_err(|source| {
        CatalogueFileError::Serialise {
            source,
            path: path.to_path_buf(),
        }
    })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| CatalogueFileError::Write {
            source,
            path: path.to_path_buf(),
        })
}
