//! Append-only round history log

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::HISTORY_HEADER;
use crate::types::{HistoryReason, RoundRecord};

/// Destination for resolved rounds
pub trait HistorySink {
    fn append(&mut self, record: &RoundRecord) -> Result<(), HistoryReason>;
}

/// In-memory history
impl HistorySink for Vec<RoundRecord> {
    fn append(&mut self, record: &RoundRecord) -> Result<(), HistoryReason> {
        self.push(record.clone());
        Ok(())
    }
}

/// CSV file history: `timestamp,player,ai,result`
#[derive(Debug)]
pub struct CsvHistory {
    path: PathBuf,
    file: File,
}

impl CsvHistory {
    /// Open for appending, writing the header row if the file is empty
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HistoryReason> {
        let path = path.as_ref().to_path_buf();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|_| HistoryReason::R301_HISTORY_OPEN_ERROR)?;

        let len = file
            .metadata()
            .map_err(|_| HistoryReason::R301_HISTORY_OPEN_ERROR)?
            .len();
        if len == 0 {
            writeln!(file, "{}", HISTORY_HEADER)
                .and_then(|_| file.flush())
                .map_err(|_| HistoryReason::R302_HISTORY_HEADER_ERROR)?;
        }

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistorySink for CsvHistory {
    fn append(&mut self, record: &RoundRecord) -> Result<(), HistoryReason> {
        writeln!(self.file, "{}", record.to_csv_row())
            .and_then(|_| self.file.flush())
            .map_err(|_| HistoryReason::R303_HISTORY_WRITE_ERROR)
    }
}

/// Open the history log, or None (with a warning) if it cannot be used
pub fn open_history(path: impl AsRef<Path>) -> Option<CsvHistory> {
    match CsvHistory::open(&path) {
        Ok(history) => {
            log::info!("history log: {}", history.path().display());
            Some(history)
        }
        Err(reason) => {
            log::warn!("history disabled ({}): {}", path.as_ref().display(), reason);
            None
        }
    }
}
