//! Steps that install a static config file from the template repository.

use crate::app::InstallContext;
use crate::app::steps::Step;
use crate::domain::AppError;

/// Fetches one remote template and writes it to a fixed local path.
///
/// Unlike the rename step, a failed fetch is fatal: the skeleton is expected
/// to end up with these files in place.
pub struct FetchTemplate {
    label: &'static str,
    remote: &'static str,
    dest: &'static str,
}

impl FetchTemplate {
    pub fn gitignore() -> Self {
        Self { label: "Configuring .gitignore", remote: ".gitignore", dest: ".gitignore" }
    }

    pub fn phpunit() -> Self {
        Self { label: "Configuring PHPUnit", remote: "phpunit.xml", dest: "phpunit.xml" }
    }
}

impl Step for FetchTemplate {
    fn announce(&self) -> &str {
        self.label
    }

    fn perform(&self, ctx: &InstallContext) -> Result<(), AppError> {
        ctx.fetch_template(self.remote, self.dest)
    }
}
