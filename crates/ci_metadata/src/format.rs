use std::path::Path;

use crate::error::Error;

/// Line format of a metadata file, chosen by the file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    /// `.env` files: `KEY=VALUE`.
    Env,
    /// `.out` files: `KEY "VALUE"`, an export statement without the `export`.
    Export,
}

impl MetadataFormat {
    /// Picks the format from the extension of `path`, ignoring case.
    ///
    /// The extension is everything from the last `.` after the last path separator,
    /// so a bare `.env` file is an `Env` file and `dir.env/` has no extension.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let extension = extension_of(path);

        match extension.to_ascii_lowercase().as_str() {
            ".env" => Ok(Self::Env),
            ".out" => Ok(Self::Export),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    /// Neither format escapes `value`. An `Export` value holding `"` or a newline
    /// produces a line a shell cannot source back.
    pub fn format_line(&self, key: &str, value: &str) -> String {
        match self {
            Self::Env => format!("{key}={value}\n"),
            Self::Export => format!("{key} \"{value}\"\n"),
        }
    }
}

fn extension_of(path: &Path) -> String {
    let path = path.as_os_str().to_string_lossy();
    let last_element = match path.rfind(std::path::is_separator) {
        Some(sep) => &path[sep + 1..],
        None => &path[..],
    };
    match last_element.rfind('.') {
        Some(dot) => last_element[dot..].to_owned(),
        None => String::new(),
    }
}
