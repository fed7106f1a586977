// crates/sync-engine/src/songs.rs
//! Song list reader
//!
//! The song list is a header-less CSV with positional columns
//! `slug, lyrics, name, author`. Parsing is tolerant: short rows fall back to
//! defaults and rows without a slug are skipped rather than reported.

use crate::error::{SyncError, SyncResult};
use crate::types::SongRow;
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const SLUG_COLUMN: usize = 0;
const LYRICS_COLUMN: usize = 1;
const NAME_COLUMN: usize = 2;
const AUTHOR_COLUMN: usize = 3;

/// A song list on disk
///
/// Each call to [`SongList::rows`] reopens the file, so the sequence can be
/// walked any number of times.
#[derive(Debug, Clone)]
pub struct SongList {
    path: PathBuf,
}

impl SongList {
    /// Creates a song list backed by the CSV file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the CSV file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file and returns a lazy iterator over its songs
    pub fn rows(&self) -> SyncResult<SongRows<File>> {
        let file = File::open(&self.path).map_err(|e| SyncError::SongList {
            path: self.path.clone(),
            source: csv::Error::from(e),
        })?;
        Ok(SongRows::new(file, self.path.clone()))
    }

    /// Parses songs from an arbitrary reader
    pub fn from_reader<R: Read>(reader: R) -> SongRows<R> {
        SongRows::new(reader, PathBuf::from("<reader>"))
    }
}

/// Lazy iterator over the songs of a song list
pub struct SongRows<R> {
    records: StringRecordsIntoIter<R>,
    origin: PathBuf,
}

impl<R: Read> SongRows<R> {
    fn new(reader: R, origin: PathBuf) -> Self {
        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();
        Self { records, origin }
    }
}

impl<R: Read> Iterator for SongRows<R> {
    type Item = SyncResult<SongRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => {
                    return Some(Err(SyncError::SongList {
                        path: self.origin.clone(),
                        source: e,
                    }))
                }
            };

            match parse_record(&record) {
                Some(song) => return Some(Ok(song)),
                None => log::debug!(
                    "Skipping song list row {} without a slug",
                    record.position().map_or(0, |p| p.line())
                ),
            }
        }
    }
}

/// Converts one CSV record into a song, or `None` if the row should be skipped
pub fn parse_record(record: &StringRecord) -> Option<SongRow> {
    if record.iter().all(|cell| cell.trim().is_empty()) {
        return None;
    }

    let slug = record.get(SLUG_COLUMN)?.trim();
    if slug.is_empty() {
        return None;
    }

    let lyrics = record.get(LYRICS_COLUMN).map(clean).unwrap_or_default();
    let name = record
        .get(NAME_COLUMN)
        .filter(|cell| !cell.trim().is_empty())
        .map(clean)
        .unwrap_or_else(|| slug.to_string());
    let author = record.get(AUTHOR_COLUMN).map(clean).unwrap_or_default();

    Some(SongRow {
        slug: slug.to_string(),
        name,
        author,
        lyrics,
    })
}

/// Trims a cell and straightens curly double quotes
pub fn clean(value: &str) -> String {
    value.trim().replace(['\u{201C}', '\u{201D}'], "\"")
}
