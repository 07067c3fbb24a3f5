//! Composer manifest model.
//!
//! The rewrite preserves every key this tool does not own, defaults the
//! well-known ones when absent, overwrites the identity fields from the
//! configuration, and merges the generated scripts after any pre-existing
//! entries.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};

use crate::domain::{AppError, Configuration, Tool};

/// In-memory representation of `composer.json`.
#[derive(Clone, Debug)]
pub struct ComposerManifest {
    root: Map<String, Value>,
}

impl ComposerManifest {
    /// Load the manifest from disk.
    ///
    /// Unlike the rename step, a missing manifest is fatal: the skeleton is
    /// unusable without one, so there is nothing sensible to skip to.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::ManifestParse(format!("{}: {e}", path.display())))?;
        let root: Map<String, Value> =
            serde_json::from_str(&raw).map_err(|e| AppError::ManifestParse(e.to_string()))?;
        Ok(Self { root })
    }

    #[cfg(test)]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            _ => Self { root: Map::new() },
        }
    }

    /// Rewrite the manifest from the configuration.
    ///
    /// Identity fields are overwritten, non-owned keys are preserved (with
    /// defaults when absent), and the scripts block is regenerated with
    /// pre-existing entries kept first so generated keys win on collision.
    pub fn configure(&mut self, config: &Configuration) {
        let mut out = Map::new();

        out.insert(
            "$schema".into(),
            self.take_or("$schema", json!("https://getcomposer.org/schema.json")),
        );
        self.root.remove("name");
        out.insert("name".into(), json!(config.composer.name));
        out.insert("type".into(), self.take_or("type", json!("project")));
        self.root.remove("description");
        out.insert("description".into(), json!(config.composer.description));
        self.root.remove("license");
        out.insert("license".into(), json!(config.composer.license));
        self.root.remove("authors");
        out.insert(
            "authors".into(),
            serde_json::to_value(&config.composer.authors).unwrap_or_else(|_| json!([])),
        );
        out.insert("require".into(), self.take_or("require", json!({})));
        out.insert("require-dev".into(), self.take_or("require-dev", json!({})));
        out.insert("autoload".into(), self.take_or("autoload", json!({})));
        out.insert("autoload-dev".into(), self.take_or("autoload-dev", json!({})));

        let existing_scripts = match self.take_or("scripts", json!({})) {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        out.insert("scripts".into(), Value::Object(merged_scripts(existing_scripts, config)));

        out.insert("extra".into(), self.take_or("extra", json!({})));
        out.insert("config".into(), self.take_or("config", json!({})));
        out.insert("minimum-stability".into(), self.take_or("minimum-stability", json!("stable")));
        out.insert("prefer-stable".into(), self.take_or("prefer-stable", json!(true)));

        // Anything else in the original manifest is not ours; carry it over.
        for (key, value) in std::mem::take(&mut self.root) {
            out.insert(key, value);
        }
        self.root = out;
    }

    /// Write the manifest pretty-printed with a trailing newline.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let mut rendered = serde_json::to_string_pretty(&Value::Object(self.root.clone()))
            .map_err(|e| AppError::ManifestParse(e.to_string()))?;
        rendered.push('\n');
        fs::write(path, rendered)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    fn take_or(&mut self, key: &str, default: Value) -> Value {
        self.root.remove(key).unwrap_or(default)
    }
}

/// Build the scripts block: pre-existing entries first, generated entries
/// second (last-write-wins on key collision).
fn merged_scripts(existing: Map<String, Value>, config: &Configuration) -> Map<String, Value> {
    let mut scripts = existing;
    for (key, value) in generated_scripts(config) {
        scripts.insert(key, value);
    }
    scripts
}

/// Generate the tool-dependent scripts block.
///
/// `code:check` references the other script names in a fixed order: lint,
/// sniff, analyze, test, mutate. Only `test` is unconditional.
pub fn generated_scripts(config: &Configuration) -> Map<String, Value> {
    let mut scripts = Map::new();
    let mut check: Vec<Value> = Vec::new();

    if config.wants_tool(Tool::Pint) {
        scripts.insert("lint".into(), json!("pint --test"));
        scripts.insert("lint:fix".into(), json!("pint"));
        scripts.insert("lint:dirty".into(), json!("pint --test --dirty"));
        scripts.insert("lint:dirty:fix".into(), json!("pint --dirty"));
        check.push(json!("@lint"));
    }
    if config.wants_tool(Tool::PhpCodeSniffer) {
        scripts.insert("sniff".into(), json!("phpcs"));
        scripts.insert("sniff:fix".into(), json!("phpcbf"));
        check.push(json!("@sniff"));
    }
    if config.wants_tool(Tool::Phpstan) {
        scripts.insert("analyze:phpstan".into(), json!("phpstan analyse"));
        check.push(json!("@analyze:phpstan"));
    }
    scripts.insert("test".into(), json!("phpunit"));
    check.push(json!("@test"));
    if config.wants_tool(Tool::Infection) {
        scripts.insert(
            "test:mutate".into(),
            json!(["@putenv XDEBUG_MODE=coverage", "infection --threads=max"]),
        );
        check.push(json!("@test:mutate"));
    }
    scripts.insert("code:check".into(), Value::Array(check));
    scripts
}
