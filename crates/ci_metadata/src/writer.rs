use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{config, error::Error, format::MetadataFormat};

pub const CI_ERROR_MESSAGE_KEY: &str = "CI_ERROR_MESSAGE";
pub const CI_ERROR_CODE_KEY: &str = "CI_ERROR_CODE";

/// An append-only metadata file with a known line format.
///
/// Holds no file handle; every write opens, appends, and closes the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFile {
    path: PathBuf,
    format: MetadataFormat,
}

impl MetadataFile {
    /// Fails if the extension of `path` does not name a [`MetadataFormat`]. The file
    /// itself is not touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let format = MetadataFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    /// Resolves the metadata file from `CI_ERROR_METADATA`.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(config::metadata_path_from_env()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> MetadataFormat {
        self.format
    }

    /// Appends one `key`/`value` entry, creating the file if it does not exist.
    pub fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        let line = self.format.format_line(key, value);

        let mut fi = open_for_append(&self.path).map_err(|source| Error::Open {
            path: self.path.clone(),
            source,
        })?;
        fi.write_all(line.as_bytes()).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(key, path = ?self.path, format = ?self.format, "appended metadata entry");

        Ok(())
    }

    /// Appends the error message entry, then the error code entry.
    ///
    /// Not atomic: if the code entry fails to write, the message entry stays.
    pub fn set_error(&self, message: &str, code: &str) -> Result<(), Error> {
        self.write(CI_ERROR_MESSAGE_KEY, message)?;
        self.write(CI_ERROR_CODE_KEY, code)
    }
}

fn open_for_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}

/// Records an error message and code in the metadata file named by `CI_ERROR_METADATA`.
///
/// Stops at the first failed entry, so a failure may leave the message without its code.
pub fn set_error(message: &str, code: &str) -> Result<(), Error> {
    write_env_to_metadata_file(CI_ERROR_MESSAGE_KEY, message)?;
    write_env_to_metadata_file(CI_ERROR_CODE_KEY, code)
}

/// Appends one entry to the metadata file named by `CI_ERROR_METADATA`.
///
/// The variable is read on every call.
pub fn write_env_to_metadata_file(key: &str, value: &str) -> Result<(), Error> {
    MetadataFile::from_env()?.write(key, value)
}
