//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LocomotionDef;
use super::validation::validate_locomotion;
use crate::movement::MovementTuning;

pub const LOCOMOTION_FILE: &str = "locomotion.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from `contents`; `file` names it in errors.
fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct (not wrapped in a list).
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&file_name, &contents)
}

fn validated(file: &str, def: LocomotionDef) -> Result<MovementTuning, ContentLoadError> {
    let errors = validate_locomotion(&def);
    if errors.is_empty() {
        return Ok(def.into());
    }

    let message = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(ContentLoadError {
        file: file.to_string(),
        message: format!("Validation error: {}", message),
    })
}

/// Parse and validate locomotion tuning from RON text.
pub fn parse_locomotion(file: &str, contents: &str) -> Result<MovementTuning, ContentLoadError> {
    let def: LocomotionDef = parse_single(file, contents)?;
    validated(file, def)
}

/// Load and validate `locomotion.ron` from `base_path`.
pub fn load_locomotion(base_path: &Path) -> Result<MovementTuning, ContentLoadError> {
    let path = base_path.join(LOCOMOTION_FILE);
    let def: LocomotionDef = load_single_file(&path)?;
    validated(&path.display().to_string(), def)
}
