use std::ffi::OsString;

use ci_metadata::config::CI_METADATA_FILE_ENV;
use clap::{Parser, Subcommand};

/// Records CI error metadata
///
/// Appends entries to the metadata file a CI harness collects after the job exits.
/// The file's extension selects the format: `.env` files get `KEY=VALUE` lines,
/// `.out` files get `KEY "VALUE"` lines.
#[derive(Parser)]
#[clap(version)]
pub struct Cli {
    /// Metadata file to append to.
    ///
    /// Empty values parse here and are rejected when the file is resolved.
    #[clap(long, global = true, env = CI_METADATA_FILE_ENV)]
    pub metadata_file: Option<OsString>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Records an error message and an error code, in that order.
    SetError {
        /// Human-readable description of the failure.
        #[clap(long, required = true)]
        message: String,

        /// Machine-readable error code.
        #[clap(long, required = true)]
        code: String,
    },
    /// Appends a single entry.
    Write {
        /// Entry key, written unquoted.
        key: String,

        /// Entry value, written without escaping.
        value: String,
    },
}
