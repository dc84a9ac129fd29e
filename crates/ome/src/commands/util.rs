//! Shared helpers for command handlers.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|_| CliError::NonInteractiveRequiresYes {
            action: message.into(),
        })?;
    Ok(confirmed)
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("{}: {e}", path.display()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use ome_core::AttributeRef;

    use super::*;

    #[test]
    fn reads_typed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"display_name": "iDRAC,Time Zone", "attribute_id": 300}}]"#
        )
        .unwrap();

        let refs: Vec<AttributeRef> = read_json_file(file.path()).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].attribute_id, 300);
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_json_file::<Vec<AttributeRef>>(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Validation { ref field, .. } if field == "from-file"));
    }

    #[test]
    fn yes_flag_skips_prompt() {
        assert!(confirm("Push?", true).unwrap());
    }
}
