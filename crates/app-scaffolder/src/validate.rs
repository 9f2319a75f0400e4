//! Ordered, fail-fast input checks
//!
//! Checks are read-only: they get the config by shared reference and report
//! a `Validation` failure describing the offending value. `run_checks` stops
//! at the first failure, so later checks never run.

use crate::config::ProjectConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use std::path::Path;

/// A single predicate over the project config
pub type Check<'a> = Box<dyn Fn(&ProjectConfig) -> ScaffoldResult<()> + Send + Sync + 'a>;

const APP_ID_HINT: &str = "Must be in Java package form with no dashes (ex: com.example.app)";

/// Run checks in order, returning the first failure
pub fn run_checks(config: &ProjectConfig, checks: &[Check<'_>]) -> ScaffoldResult<()> {
    for check in checks {
        check(config)?;
    }
    Ok(())
}

/// Build the check list for whichever caller-supplied inputs are present.
///
/// These run before any config holds the values, so each check closes over
/// its candidate input and ignores the config it is handed. Order is
/// directory, app id, app name; absent inputs are skipped.
pub fn input_checks<'a>(
    dir: Option<&'a str>,
    app_name: Option<&'a str>,
    app_id: Option<&'a str>,
) -> Vec<Check<'a>> {
    let mut checks: Vec<Check<'a>> = Vec::new();
    if let Some(dir) = dir {
        checks.push(Box::new(move |_: &ProjectConfig| check_app_dir(dir)));
    }
    if let Some(id) = app_id {
        checks.push(Box::new(move |_: &ProjectConfig| check_app_id(id)));
    }
    if let Some(name) = app_name {
        checks.push(Box::new(move |_: &ProjectConfig| check_app_name(name)));
    }
    checks
}

/// Checks over the identity fields of a populated config, same order as `input_checks`
pub fn config_checks() -> Vec<Check<'static>> {
    let mut checks: Vec<Check<'static>> = Vec::new();
    checks.push(Box::new(|config: &ProjectConfig| {
        check_app_dir(&config.working_directory.to_string_lossy())
    }));
    checks.push(Box::new(|config: &ProjectConfig| {
        check_app_id(config.app_id())
    }));
    checks.push(Box::new(|config: &ProjectConfig| {
        check_app_name(config.app_name())
    }));
    checks
}

/// The target directory must be given, must not exist, and must have an existing parent
pub fn check_app_dir(dir: &str) -> ScaffoldResult<()> {
    if dir.trim().is_empty() {
        return Err(ScaffoldError::validation("Must provide a directory"));
    }

    let path = Path::new(dir);
    if path.exists() {
        return Err(ScaffoldError::validation(format!(
            "Directory {} already exists. Choose a new directory",
            dir
        )));
    }

    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.exists() {
            return Err(ScaffoldError::validation(format!(
                "Parent directory does not exist: {}",
                parent.display()
            )));
        }
    }

    Ok(())
}

/// The app id must be a reverse-domain identifier
pub fn check_app_id(id: &str) -> ScaffoldResult<()> {
    if id.is_empty() {
        return Err(ScaffoldError::validation(format!(
            "Invalid App ID. {}",
            APP_ID_HINT
        )));
    }
    if !is_valid_app_id(id) {
        return Err(ScaffoldError::validation(format!(
            "Invalid App ID \"{}\". {}",
            id, APP_ID_HINT
        )));
    }
    Ok(())
}

/// The app name must not be blank
pub fn check_app_name(name: &str) -> ScaffoldResult<()> {
    if name.trim().is_empty() {
        return Err(ScaffoldError::validation("Must provide an app name"));
    }
    Ok(())
}

/// `segment(.segment)+`, letters/digits/underscore only, first segment starting with a letter
pub fn is_valid_app_id(id: &str) -> bool {
    let segments: Vec<&str> = id.split('.').collect();
    if segments.len() < 2 {
        return false;
    }

    let starts_with_letter = segments[0]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());

    starts_with_letter
        && segments.iter().all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
