//! Frontend scaffolding removal.

use std::fs;

use crate::app::InstallContext;
use crate::app::steps::Step;
use crate::domain::{AppError, Configuration};

/// Version string served by the replacement root route.
pub const APP_VERSION: &str = "1.0.0";

const FRONTEND_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "vite.config.js",
    "tailwind.config.js",
    "postcss.config.js",
    "resources/views/welcome.blade.php",
];

const FRONTEND_DIRS: &[&str] = &["resources/css", "resources/js"];

/// Strips the frontend build files and sources, leaves an empty views
/// marker, and rewrites the web route to a minimal JSON endpoint.
pub struct RemoveFrontend {
    application_name: String,
}

impl RemoveFrontend {
    pub fn new(config: &Configuration) -> Self {
        Self { application_name: config.application_name.clone() }
    }

    fn web_route(&self) -> String {
        format!(
            "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\nRoute::get('/', static fn (): array => ['{}' => '{}']);\n",
            self.application_name, APP_VERSION
        )
    }
}

impl Step for RemoveFrontend {
    fn announce(&self) -> &str {
        "Removing frontend scaffolding"
    }

    fn perform(&self, ctx: &InstallContext) -> Result<(), AppError> {
        for file in FRONTEND_FILES {
            let path = ctx.path(file);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }

        for dir in FRONTEND_DIRS {
            let path = ctx.path(dir);
            if path.exists() {
                fs::remove_dir_all(path)?;
            }
        }

        let views = ctx.path("resources/views");
        fs::create_dir_all(&views)?;
        fs::write(views.join(".gitkeep"), "")?;

        let routes = ctx.path("routes");
        fs::create_dir_all(&routes)?;
        fs::write(routes.join("web.php"), self.web_route())?;

        Ok(())
    }
}
