use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::domain::setup::models::params::{DotenvEntry, SetupError};
use crate::domain::setup::ports::DotenvRepository;

/// Env file on disk, appended to and never rewritten.
#[derive(Debug, Clone)]
pub struct DotenvFile {
    path: PathBuf,
}

impl DotenvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DotenvRepository for DotenvFile {
    fn append(&self, entries: &[DotenvEntry]) -> Result<(), SetupError> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;

        let separate = ends_mid_line(&mut file)
            .with_context(|| format!("failed to inspect {}", self.path.display()))?;

        let mut writer = BufWriter::new(file);
        if separate {
            writeln!(writer).with_context(|| format!("failed to write {}", self.path.display()))?;
        }
        for entry in entries {
            writeln!(writer, "{}", entry)
                .with_context(|| format!("failed to write {}", self.path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), lines = entries.len(), "appended to env file");
        Ok(())
    }
}

// True when the file has content that does not end with a newline.
fn ends_mid_line(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
