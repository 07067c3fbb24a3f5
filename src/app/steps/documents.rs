//! Base document creation (CHANGELOG.md, README.md).

use std::fs;

use chrono::Local;

use crate::app::InstallContext;
use crate::app::steps::Step;
use crate::domain::{AppError, Configuration};
use crate::templates;

enum DocumentKind {
    Changelog,
    Readme,
}

/// Writes one rendered base document, unconditionally overwriting.
pub struct CreateDocument {
    label: &'static str,
    dest: &'static str,
    kind: DocumentKind,
    application_name: String,
}

impl CreateDocument {
    pub fn changelog(config: &Configuration) -> Self {
        Self {
            label: "Creating CHANGELOG.md",
            dest: "CHANGELOG.md",
            kind: DocumentKind::Changelog,
            application_name: config.application_name.clone(),
        }
    }

    pub fn readme(config: &Configuration) -> Self {
        Self {
            label: "Creating README.md",
            dest: "README.md",
            kind: DocumentKind::Readme,
            application_name: config.application_name.clone(),
        }
    }
}

impl Step for CreateDocument {
    fn announce(&self) -> &str {
        self.label
    }

    fn perform(&self, ctx: &InstallContext) -> Result<(), AppError> {
        let content = match self.kind {
            DocumentKind::Changelog => {
                let date = Local::now().format("%Y-%m-%d").to_string();
                templates::render_changelog(&self.application_name, &date)?
            }
            DocumentKind::Readme => templates::render_readme(&self.application_name)?,
        };
        fs::write(ctx.path(self.dest), content)?;
        Ok(())
    }
}
