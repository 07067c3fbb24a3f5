//! The immutable configuration record produced by the collector.
//!
//! Every installation step reads the same snapshot; nothing mutates it after
//! the prompts complete.

use serde::Serialize;

/// Optional base documents the operator can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseFile {
    Changelog,
    Readme,
}

impl BaseFile {
    pub const ALL: [BaseFile; 2] = [BaseFile::Changelog, BaseFile::Readme];

    pub fn label(self) -> &'static str {
        match self {
            BaseFile::Changelog => "CHANGELOG.md",
            BaseFile::Readme => "README.md",
        }
    }
}

/// Development tooling the installer can wire into the skeleton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Pint,
    Phpstan,
    PhpCodeSniffer,
    Infection,
    Psl,
    Safe,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Pint,
        Tool::Phpstan,
        Tool::PhpCodeSniffer,
        Tool::Infection,
        Tool::Psl,
        Tool::Safe,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Pint => "Pint (code style fixer)",
            Tool::Phpstan => "PHPStan (static analysis)",
            Tool::PhpCodeSniffer => "PHP_CodeSniffer (coding standard)",
            Tool::Infection => "Infection (mutation testing)",
            Tool::Psl => "PSL (standard library)",
            Tool::Safe => "Safe (exception-throwing stdlib wrappers)",
        }
    }
}

/// One entry of the manifest `authors` list.
#[derive(Clone, Debug, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub role: String,
    pub homepage: String,
}

/// Composer-specific answers destined for the manifest rewrite.
#[derive(Clone, Debug)]
pub struct ComposerSettings {
    /// Package name in `vendor/package` form.
    pub name: String,
    pub description: String,
    pub license: String,
    pub authors: Vec<Author>,
}

/// Immutable snapshot of all operator answers.
///
/// Constructed once by the collector and handed read-only to every step
/// factory. There is no state beyond the single run.
#[derive(Clone, Debug)]
pub struct Configuration {
    /// Application name, strict letters-only PascalCase.
    pub application_name: String,
    /// Base documents to create, in catalog order.
    pub base_files: Vec<BaseFile>,
    /// Tools to install, in catalog order.
    pub tools: Vec<Tool>,
    pub composer: ComposerSettings,
    /// Move the tinker dev-tool into `require-dev`.
    pub move_tinker: bool,
    /// Strip the frontend scaffolding entirely.
    pub remove_frontend: bool,
}

impl Configuration {
    /// Lowercased application name used by placeholder substitutions.
    pub fn application_name_lower(&self) -> String {
        self.application_name.to_lowercase()
    }

    pub fn wants_base_file(&self, file: BaseFile) -> bool {
        self.base_files.contains(&file)
    }

    pub fn wants_tool(&self, tool: Tool) -> bool {
        self.tools.contains(&tool)
    }
}
