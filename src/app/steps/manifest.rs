//! The composer.json rewrite step.

use crate::app::InstallContext;
use crate::app::steps::Step;
use crate::domain::{AppError, ComposerManifest, Configuration};

/// Rewrites `composer.json` from the configuration record.
///
/// A missing or unparsable manifest aborts the pipeline; this asymmetry with
/// the rename step's silent skip is deliberate.
pub struct ConfigureManifest {
    config: Configuration,
}

impl ConfigureManifest {
    pub fn new(config: &Configuration) -> Self {
        Self { config: config.clone() }
    }
}

impl Step for ConfigureManifest {
    fn announce(&self) -> &str {
        "Configuring composer.json"
    }

    fn perform(&self, ctx: &InstallContext) -> Result<(), AppError> {
        let path = ctx.path("composer.json");
        let mut manifest = ComposerManifest::load(&path)?;
        manifest.configure(&self.config);
        manifest.save(&path)
    }
}
