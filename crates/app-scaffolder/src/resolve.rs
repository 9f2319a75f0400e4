//! Fill in missing inputs through a prompt capability
//!
//! Supplied values are used verbatim. Missing ones are asked for; a blank
//! answer falls back to the field's default, except for the directory which
//! has none and stays blank (it is rejected by validation afterwards).

use crate::error::ScaffoldResult;
use std::fmt;

pub const DEFAULT_APP_NAME: &str = "App";
pub const DEFAULT_APP_ID: &str = "com.example.app";

/// An input the resolver may need to ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Directory,
    AppName,
    AppId,
}

impl Field {
    pub fn question(&self) -> &'static str {
        match self {
            Field::Directory => "What directory should be used for your app?",
            Field::AppName => "What is the name of your app?",
            Field::AppId => "What should be the Package ID for your app?",
        }
    }

    /// Value substituted for a blank answer
    pub fn default_value(&self) -> Option<&'static str> {
        match self {
            Field::Directory => None,
            Field::AppName => Some(DEFAULT_APP_NAME),
            Field::AppId => Some(DEFAULT_APP_ID),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Directory => "my-app",
            Field::AppName => DEFAULT_APP_NAME,
            Field::AppId => DEFAULT_APP_ID,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Directory => "directory",
            Field::AppName => "app name",
            Field::AppId => "app id",
        };
        write!(f, "{}", name)
    }
}

/// Asks the user for a missing field and returns the raw answer
pub trait Prompter {
    fn prompt(&mut self, field: Field) -> anyhow::Result<String>;
}

/// Answers every prompt with a blank response (non-interactive mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankPrompter;

impl Prompter for BlankPrompter {
    fn prompt(&mut self, _field: Field) -> anyhow::Result<String> {
        Ok(String::new())
    }
}

/// Caller-supplied inputs; blank values count as missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub directory: Option<String>,
    pub app_name: Option<String>,
    pub app_id: Option<String>,
}

impl Inputs {
    pub fn new(
        directory: Option<String>,
        app_name: Option<String>,
        app_id: Option<String>,
    ) -> Self {
        Self {
            directory: directory.filter(|v| !v.is_empty()),
            app_name: app_name.filter(|v| !v.is_empty()),
            app_id: app_id.filter(|v| !v.is_empty()),
        }
    }
}

/// Every field after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub directory: String,
    pub app_name: String,
    pub app_id: String,
}

/// Resolve one field: supplied value, else prompt answer, else default.
///
/// Supplied values are taken verbatim; prompt answers are trimmed.
pub fn resolve_field(
    supplied: Option<&str>,
    field: Field,
    prompter: &mut dyn Prompter,
) -> ScaffoldResult<String> {
    if let Some(value) = supplied.filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }

    let answer = prompter.prompt(field)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(field
            .default_value()
            .map(str::to_string)
            .unwrap_or_default());
    }
    Ok(answer.to_string())
}

/// Resolve directory, app name, and app id, in that order
pub fn resolve_inputs(
    inputs: &Inputs,
    prompter: &mut dyn Prompter,
) -> ScaffoldResult<ResolvedInputs> {
    let directory = resolve_field(inputs.directory.as_deref(), Field::Directory, prompter)?;
    let app_name = resolve_field(inputs.app_name.as_deref(), Field::AppName, prompter)?;
    let app_id = resolve_field(inputs.app_id.as_deref(), Field::AppId, prompter)?;

    Ok(ResolvedInputs {
        directory,
        app_name,
        app_id,
    })
}
