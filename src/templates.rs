//! Embedded document templates rendered during installation.

use minijinja::{Environment, context};

use crate::domain::AppError;

static CHANGELOG: &str = include_str!("templates/CHANGELOG.md.j2");
static README: &str = include_str!("templates/README.md.j2");

fn render(name: &str, source: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.add_template(name, source).map_err(|e| AppError::Template(e.to_string()))?;
    let template = env.get_template(name).map_err(|e| AppError::Template(e.to_string()))?;
    template.render(ctx).map_err(|e| AppError::Template(e.to_string()))
}

/// Render the CHANGELOG.md document.
pub fn render_changelog(application_name: &str, date: &str) -> Result<String, AppError> {
    render("changelog", CHANGELOG, context! { application_name, date })
}

/// Render the README.md document.
pub fn render_readme(application_name: &str) -> Result<String, AppError> {
    render("readme", README, context! { application_name })
}
