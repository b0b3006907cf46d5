//! The environment boundary. Nothing else in the crate reads the process environment.

use std::path::PathBuf;

use crate::error::Error;

/// Names the metadata file the CI harness collects once the job exits.
pub const CI_METADATA_FILE_ENV: &str = "CI_ERROR_METADATA";

pub fn metadata_path_from_env() -> Result<PathBuf, Error> {
    metadata_path_from_var(CI_METADATA_FILE_ENV)
}

/// Reads a metadata file path from `var`. An empty value counts as unset.
pub fn metadata_path_from_var(var: &str) -> Result<PathBuf, Error> {
    match std::env::var_os(var) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(Error::missing_config(var)),
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use serial_test::serial;

    use super::{metadata_path_from_env, metadata_path_from_var, CI_METADATA_FILE_ENV};
    use crate::Error;

    #[test]
    #[serial]
    fn reads_path_from_env() {
        std::env::set_var(CI_METADATA_FILE_ENV, "/tmp/ci/metadata.env");

        let path = metadata_path_from_env().unwrap();
        assert_eq!(path, PathBuf::from("/tmp/ci/metadata.env"));

        std::env::remove_var(CI_METADATA_FILE_ENV);
    }

    #[test]
    #[serial]
    fn unset_var_is_missing_config() {
        std::env::remove_var(CI_METADATA_FILE_ENV);

        let err = metadata_path_from_env().unwrap_err();
        assert!(
            matches!(&err, Error::MissingConfig { var } if var == CI_METADATA_FILE_ENV),
            "{err:?}"
        );
    }

    #[test]
    #[serial]
    fn empty_var_is_missing_config() {
        std::env::set_var(CI_METADATA_FILE_ENV, "");

        let err = metadata_path_from_env().unwrap_err();
        assert!(matches!(err, Error::MissingConfig { .. }), "{err:?}");

        std::env::remove_var(CI_METADATA_FILE_ENV);
    }

    #[test]
    #[serial]
    fn custom_var_name() {
        std::env::set_var("CI_METADATA_TEST_PATH", "relative/metadata.out");

        let path = metadata_path_from_var("CI_METADATA_TEST_PATH").unwrap();
        assert_eq!(path, PathBuf::from("relative/metadata.out"));

        std::env::remove_var("CI_METADATA_TEST_PATH");
        let err = metadata_path_from_var("CI_METADATA_TEST_PATH").unwrap_err();
        assert!(
            matches!(&err, Error::MissingConfig { var } if var == "CI_METADATA_TEST_PATH"),
            "{err:?}"
        );
    }
}
