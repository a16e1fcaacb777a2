//! Loader for the RON tuning file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{TUNING_SCHEMA_VERSION, TuningFile};
use super::validation::validate_tuning;

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate tuning text. `file` only labels errors.
pub fn parse_tuning(contents: &str, file: &str) -> Result<TuningFile, TuningLoadError> {
    let tuning: TuningFile = ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if tuning.schema_version != TUNING_SCHEMA_VERSION {
        return Err(TuningLoadError {
            file: file.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                tuning.schema_version, TUNING_SCHEMA_VERSION
            ),
        });
    }

    let issues = validate_tuning(&tuning);
    if !issues.is_empty() {
        let listed: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
        return Err(TuningLoadError {
            file: file.to_string(),
            message: format!("Invalid tunables: {}", listed.join(", ")),
        });
    }

    Ok(tuning)
}

/// Load the tuning file at `path`.
pub fn load_tuning(path: &Path) -> Result<TuningFile, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}
