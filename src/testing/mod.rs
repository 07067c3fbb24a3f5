//! Shared fixtures and fakes for unit tests.

use std::path::Path;
use std::path::PathBuf;

use crate::app::InstallContext;
use crate::domain::{AppError, Author, BaseFile, ComposerSettings, Configuration, Tool};
use crate::ports::{ProcessRunner, ProgressReporter, TemplateFetcher};

/// A fully-populated configuration: every optional feature enabled.
pub(crate) fn sample_config() -> Configuration {
    Configuration {
        application_name: "MyApp".to_string(),
        base_files: BaseFile::ALL.to_vec(),
        tools: Tool::ALL.to_vec(),
        composer: ComposerSettings {
            name: "acme/my-app".to_string(),
            description: "The MyApp application".to_string(),
            license: "MIT".to_string(),
            authors: vec![Author {
                name: "Jane Developer".to_string(),
                email: "jane@example.com".to_string(),
                role: "Developer".to_string(),
                homepage: "https://example.com".to_string(),
            }],
        },
        move_tinker: true,
        remove_frontend: true,
    }
}

struct NoopRunner;

impl ProcessRunner for NoopRunner {
    fn run(&self, _program: &str, _args: &[&str], _cwd: &Path) -> Result<(), AppError> {
        Ok(())
    }
}

struct NoopFetcher;

impl TemplateFetcher for NoopFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, AppError> {
        Ok(Vec::new())
    }
}

/// A context whose collaborators succeed without doing anything.
pub(crate) fn noop_context() -> InstallContext {
    InstallContext::new(PathBuf::from("."), Box::new(NoopRunner), Box::new(NoopFetcher))
}

/// Reporter that records the executor's calls as rendered strings.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    pub events: Vec<String>,
}

impl ProgressReporter for RecordingReporter {
    fn begin(&mut self, total: usize) {
        self.events.push(format!("begin {total}"));
    }

    fn announce(&mut self, index: usize, total: usize, label: &str) {
        self.events.push(format!("{index}/{total} {label}"));
    }

    fn finish(&mut self) {
        self.events.push("finish".to_string());
    }
}
