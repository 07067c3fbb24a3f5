//! Literal placeholder substitution across the skeleton's config files.

use std::fs;

use crate::app::InstallContext;
use crate::app::steps::Step;
use crate::domain::{AppError, Configuration};

#[derive(Clone, Copy)]
enum Casing {
    Pascal,
    Lower,
}

/// One literal search-and-replace: `search` is swapped for `template` with
/// `{}` filled by the application name in the given casing.
struct Substitution {
    search: &'static str,
    template: &'static str,
    casing: Casing,
}

const fn sub(search: &'static str, template: &'static str, casing: Casing) -> Substitution {
    Substitution { search, template, casing }
}

/// Placeholder occurrences enumerated per target file. Substitution is
/// literal substring replacement, never pattern-based.
const TARGETS: &[(&str, &[Substitution])] = &[
    (
        ".env",
        &[
            sub("APP_NAME=Laravel", "APP_NAME={}", Casing::Pascal),
            sub("DB_DATABASE=laravel", "DB_DATABASE={}", Casing::Lower),
        ],
    ),
    (
        ".env.example",
        &[
            sub("APP_NAME=Laravel", "APP_NAME={}", Casing::Pascal),
            sub("DB_DATABASE=laravel", "DB_DATABASE={}", Casing::Lower),
        ],
    ),
    ("config/app.php", &[sub("env('APP_NAME', 'Laravel')", "env('APP_NAME', '{}')", Casing::Pascal)]),
    ("config/cache.php", &[sub("env('APP_NAME', 'laravel')", "env('APP_NAME', '{}')", Casing::Lower)]),
    (
        "config/database.php",
        &[sub("env('DB_DATABASE', 'laravel')", "env('DB_DATABASE', '{}')", Casing::Lower)],
    ),
    (
        "config/session.php",
        &[sub("env('APP_NAME', 'laravel')", "env('APP_NAME', '{}')", Casing::Lower)],
    ),
];

/// Substitutes the application name into the skeleton's placeholder files.
///
/// A missing target file is skipped silently; a skeleton variant without,
/// say, a session config is still fine to rename.
pub struct RenameApplication {
    name: String,
    lower: String,
}

impl RenameApplication {
    pub fn new(config: &Configuration) -> Self {
        Self { name: config.application_name.clone(), lower: config.application_name_lower() }
    }
}

impl Step for RenameApplication {
    fn announce(&self) -> &str {
        "Renaming application"
    }

    fn perform(&self, ctx: &InstallContext) -> Result<(), AppError> {
        for (file, substitutions) in TARGETS {
            let path = ctx.path(file);
            if !path.exists() {
                continue;
            }

            let mut contents = fs::read_to_string(&path)?;
            for substitution in *substitutions {
                let value = match substitution.casing {
                    Casing::Pascal => self.name.as_str(),
                    Casing::Lower => self.lower.as_str(),
                };
                contents = contents
                    .replace(substitution.search, &substitution.template.replace("{}", value));
            }
            fs::write(&path, contents)?;
        }

        Ok(())
    }
}
