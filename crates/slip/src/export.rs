//! File naming and save targets

use crate::{Result, SlipError};
use std::fs;
use std::path::{Path, PathBuf};

/// `prescription-slip-<id>.pdf`
pub fn slip_filename(prescription_id: &str) -> String {
    format!("prescription-slip-{prescription_id}.pdf")
}

/// Destination for a finished PDF
pub trait SaveTarget {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes files into a directory, creating it when missing
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path a file would be written to
    pub fn path_for(&self, filename: &str) -> Result<PathBuf> {
        validate_filename(filename)?;
        Ok(self.dir.join(filename))
    }
}

impl SaveTarget for DirectoryTarget {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(filename)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "saved prescription slip");
        Ok(())
    }
}

/// Keeps saved files in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    files: Vec<(String, Vec<u8>)>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every saved file in save order
    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }

    /// The most recently saved file
    pub fn last(&self) -> Option<(&str, &[u8])> {
        self.files
            .last()
            .map(|(name, bytes)| (name.as_str(), bytes.as_slice()))
    }
}

impl SaveTarget for MemoryTarget {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<()> {
        validate_filename(filename)?;
        self.files.push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}

/// A plain file name: non-empty, no separators, no parent references
fn validate_filename(filename: &str) -> Result<()> {
    let invalid = filename.trim().is_empty()
        || filename.contains(['/', '\\', '\0'])
        || filename == "."
        || filename == "..";
    if invalid {
        return Err(SlipError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}
