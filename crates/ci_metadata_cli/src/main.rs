mod args;
mod exit;
mod logging;

use std::{ffi::OsString, path::PathBuf};

use anyhow::{anyhow, Context};
use ci_metadata::{config::CI_METADATA_FILE_ENV, MetadataFile};
use clap::Parser;

use args::{Cli, Command};
use exit::ExitCode;

fn main() -> std::process::ExitCode {
    logging::init();

    let Cli {
        metadata_file,
        command,
    } = Cli::parse();

    let exit_code = match run(metadata_file, command) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::ToolError
        }
    };

    exit_code.into()
}

fn run(metadata_file: Option<OsString>, command: Command) -> anyhow::Result<()> {
    let file = resolve_metadata_file(metadata_file)?;

    match command {
        Command::SetError { message, code } => file
            .set_error(&message, &code)
            .with_context(|| format!("failed to record error {code}")),
        Command::Write { key, value } => file
            .write(&key, &value)
            .with_context(|| format!("failed to record {key}")),
    }
}

fn resolve_metadata_file(metadata_file: Option<OsString>) -> anyhow::Result<MetadataFile> {
    let path = match metadata_file {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => {
            return Err(anyhow!(
                "no metadata file given: pass --metadata-file or set {CI_METADATA_FILE_ENV}"
            ))
        }
    };
    tracing::debug!(?path, "resolved metadata file");

    Ok(MetadataFile::new(path)?)
}
