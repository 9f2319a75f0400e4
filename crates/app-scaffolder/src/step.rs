//! Labeled execution of pipeline steps
//!
//! `StepRunner` announces a step, awaits it, and announces success. Failures
//! pass through untouched apart from conversion into `ScaffoldError`, so the
//! runner decorates output without ever swallowing an error.

use crate::error::{ScaffoldError, ScaffoldResult};
use colored::Colorize;
use std::future::Future;

/// Sink for progress output
pub trait Reporter: Send + Sync {
    fn step_started(&self, description: &str);
    fn step_succeeded(&self, description: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}

/// Colored line-per-event output for non-interactive runs
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainReporter;

impl Reporter for PlainReporter {
    fn step_started(&self, description: &str) {
        println!("{} {}...", "->".blue(), description);
    }

    fn step_succeeded(&self, description: &str) {
        println!("{} {}", "done".green(), description);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "Warning:".yellow(), message);
    }
}

/// Runs actions between start and success reports
pub struct StepRunner<'r> {
    reporter: &'r dyn Reporter,
}

impl<'r> StepRunner<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Report `description`, await `action`, report success or pass the failure on
    pub async fn run<T, E, Fut>(&self, description: &str, action: Fut) -> ScaffoldResult<T>
    where
        Fut: Future<Output = Result<T, E>>,
        E: Into<ScaffoldError>,
    {
        self.reporter.step_started(description);
        let value = action.await.map_err(Into::<ScaffoldError>::into)?;
        self.reporter.step_succeeded(description);
        Ok(value)
    }
}
