//! Records error metadata for a CI harness by appending `KEY`/`VALUE` entries to a
//! metadata file. The harness reads the file after the job finishes; this crate only
//! ever appends to it.
//!
//! The file's extension picks the line format, see [`MetadataFormat`].

pub mod config;
pub mod error;
pub mod format;
pub mod writer;

pub use error::Error;
pub use format::MetadataFormat;
pub use writer::{
    set_error, write_env_to_metadata_file, MetadataFile, CI_ERROR_CODE_KEY, CI_ERROR_MESSAGE_KEY,
};
