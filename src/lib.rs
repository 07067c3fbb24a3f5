//! skelly: one-shot interactive configurator for freshly scaffolded
//! application skeletons.
//!
//! A single run collects the operator's answers, assembles the ordered
//! pipeline of installation steps, executes it with a progress bar, and
//! finally deletes the installer executable regardless of outcome.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;
pub mod templates;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use app::finalizer::SelfDelete;
use app::{InstallContext, collector, executor, steps};
use services::{CommandProcessRunner, HttpTemplateFetcher, IndicatifReporter};

pub use domain::AppError;

/// Options for one installer run.
#[derive(Clone, Debug)]
pub struct InstallOptions {
    /// Root of the scaffolded project to configure.
    pub project_root: PathBuf,
    /// Skip self-deletion of the installer executable.
    pub keep_installer: bool,
}

/// How the run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every assembled step completed.
    Completed { steps: usize },
    /// The operator cancelled before any step ran.
    Cancelled,
}

/// Run the whole installer: collect, assemble, execute.
///
/// The self-deletion guard is armed before the first prompt, so the
/// installer removes itself on success, abort, and cancellation alike.
pub fn install(options: InstallOptions) -> Result<RunOutcome, AppError> {
    let _cleanup =
        if options.keep_installer { SelfDelete::disarmed() } else { SelfDelete::arm() };

    let Some(config) = collector::collect()? else {
        return Ok(RunOutcome::Cancelled);
    };

    let ctx = InstallContext::new(
        options.project_root,
        Box::new(CommandProcessRunner::new()),
        Box::new(HttpTemplateFetcher::new()?),
    );
    let pipeline = steps::assemble(&config);
    let mut reporter = IndicatifReporter::new();
    executor::execute(&pipeline, &ctx, &mut reporter)?;

    Ok(RunOutcome::Completed { steps: pipeline.len() })
}
