//! JSONL (JSON Lines) storage.
//!
//! Roster rows, result submissions and exported sheets are all stored as
//! JSONL: each line is one JSON object.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use super::StorageError;
use crate::export::LeagueExport;
use crate::ingest::RosterRow;
use crate::models::ResultSubmission;

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists.
    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single entity to the file.
    pub fn append(&self, entity: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entity)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended entity to {:?}", self.path);
        Ok(())
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
        }

        writer.flush()?;
        debug!("Wrote {} entities to {:?}", entities.len(), self.path);

        Ok(entities.len())
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Iterate entries, surfacing parse errors instead of skipping them.
    pub fn iter(&self) -> Result<JsonlIterator<T>, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::PathNotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        Ok(JsonlIterator {
            reader: BufReader::new(file),
            _marker: PhantomData,
        })
    }
}

/// Iterator over JSONL file entries.
pub struct JsonlIterator<T> {
    reader: BufReader<File>,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> Iterator for JsonlIterator<T> {
    type Item = Result<T, StorageError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    return Some(serde_json::from_str(&line).map_err(StorageError::Json));
                }
                Err(e) => return Some(Err(StorageError::Io(e))),
            }
        }
    }
}

/// Read roster rows. The roster must exist.
pub fn read_roster(path: &Path) -> Result<Vec<RosterRow>, StorageError> {
    let reader = JsonlReader::<RosterRow>::new(path.to_path_buf());
    if !reader.exists() {
        return Err(StorageError::PathNotFound(path.to_path_buf()));
    }
    reader.iter()?.collect()
}

/// Read the results log in submission order. A missing log is empty.
///
/// A malformed line is an error: skipping a result would shift every later
/// replay.
pub fn read_results(path: &Path) -> Result<Vec<ResultSubmission>, StorageError> {
    let reader = JsonlReader::<ResultSubmission>::new(path.to_path_buf());
    if !reader.exists() {
        return Ok(Vec::new());
    }
    reader.iter()?.collect()
}

/// Append one accepted submission to the results log.
pub fn append_result(path: &Path, submission: &ResultSubmission) -> Result<(), StorageError> {
    JsonlWriter::new(path.to_path_buf()).append(submission)
}

/// Write every export table as `<sheet>.jsonl` under `dir`.
pub fn write_export(dir: &Path, export: &LeagueExport) -> Result<Vec<PathBuf>, StorageError> {
    fn sheet<T: Serialize>(dir: &Path, name: &str, rows: &[T]) -> Result<PathBuf, StorageError> {
        let writer = JsonlWriter::new(dir.join(format!("{}.jsonl", name)));
        writer.write_all(rows)?;
        Ok(writer.path().to_path_buf())
    }

    let mut written = vec![
        sheet(dir, crate::export::TEAMS_SHEET, &export.teams)?,
        sheet(dir, crate::export::MATCHES_SHEET, &export.matches)?,
    ];
    for pool in &export.pools {
        written.push(sheet(dir, &pool.standings_sheet(), &pool.standings)?);
        written.push(sheet(dir, &pool.players_sheet(), &pool.players)?);
    }

    info!("Exported {} sheets to {:?}", written.len(), dir);
    Ok(written)
}
