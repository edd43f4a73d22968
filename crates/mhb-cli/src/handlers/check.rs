//! Check command handler.
//!
//! Validates a config document with the same rules as the built-in registry.

use std::path::Path;

use mhb_core::{ConfigLocation, load_config, resolve_config_path};

use crate::error::CliError;

/// Validate the document at `location`, returning its command count.
pub fn check(location: &ConfigLocation) -> Result<usize, CliError> {
    let registry = load_config(&location.path)?;
    Ok(registry.len())
}

/// Resolve the config document and report whether it is valid.
pub fn execute(path: Option<&Path>) -> Result<(), CliError> {
    let location = resolve_config_path(path);
    tracing::debug!(source = ?location.source, "checking config document");

    let count = check(&location)?;
    println!("OK: {count} command(s) in {}", location.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhb_core::ConfigSource;
    use tempfile::tempdir;

    fn location(path: &Path) -> ConfigLocation {
        ConfigLocation {
            path: path.to_path_buf(),
            source: ConfigSource::Explicit,
        }
    }

    #[test]
    fn test_check_valid_document() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        mhb_core::write_config(&mhb_core::registry().unwrap(), &path).unwrap();

        assert_eq!(check(&location(&path)).unwrap(), 2);
    }

    #[test]
    fn test_check_duplicate_names() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"commands":[
                {"name":"echo","description":"a","commandToExecute":"echo.bash"},
                {"name":"echo","description":"b","commandToExecute":"echo.bash"}
            ]}"#,
        )
        .unwrap();

        let err = check(&location(&path)).unwrap_err();
        assert!(matches!(err, CliError::Registry(_)));
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_check_missing_file() {
        let temp = tempdir().unwrap();
        let err = check(&location(&temp.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_check_invalid_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = check(&location(&path)).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
