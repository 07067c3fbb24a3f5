use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::{ProcessRunner, TemplateFetcher};

/// Base URL of the static template repository.
const TEMPLATE_BASE_URL: &str =
    "https://raw.githubusercontent.com/skelly-hq/skeleton-templates/main";

/// Execution context handed read-only to every step's perform phase.
///
/// Holds the project root and the external collaborators. Steps never talk
/// to subprocesses or the network directly; they go through the ports so the
/// pipeline stays testable with fakes.
pub struct InstallContext {
    root: PathBuf,
    runner: Box<dyn ProcessRunner>,
    fetcher: Box<dyn TemplateFetcher>,
}

impl InstallContext {
    pub fn new(
        root: PathBuf,
        runner: Box<dyn ProcessRunner>,
        fetcher: Box<dyn TemplateFetcher>,
    ) -> Self {
        Self { root, runner, fetcher }
    }

    /// Resolve a project-relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Run composer with the given arguments in the project root.
    pub fn composer(&self, args: &[&str]) -> Result<(), AppError> {
        self.runner.run("composer", args, &self.root)
    }

    /// Fetch a template file from the remote repository and write it to a
    /// project-relative destination, overwriting any existing file.
    pub fn fetch_template(&self, remote: &str, dest: &str) -> Result<(), AppError> {
        let url = format!("{TEMPLATE_BASE_URL}/{remote}");
        let bytes = self.fetcher.fetch(&url)?;
        fs::write(self.path(dest), bytes)?;
        Ok(())
    }
}
