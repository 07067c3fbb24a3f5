//! Tool installation steps: composer packages plus companion config files.

use crate::app::InstallContext;
use crate::app::steps::Step;
use crate::domain::{AppError, Configuration, Tool};

/// Installs one development tool.
///
/// Runs the composer invocations in order, then fetches the companion config
/// file when the tool has one. Some tools grow an extra invocation when
/// PHPStan is also selected (its PSL extension and Safe rule).
pub struct InstallTool {
    label: &'static str,
    commands: Vec<Vec<&'static str>>,
    template: Option<(&'static str, &'static str)>,
}

impl InstallTool {
    pub fn new(tool: Tool, config: &Configuration) -> Self {
        let with_phpstan = config.wants_tool(Tool::Phpstan);

        match tool {
            Tool::Pint => Self {
                label: "Installing Pint",
                commands: vec![vec!["require", "--dev", "laravel/pint"]],
                template: Some(("pint.json", "pint.json")),
            },
            Tool::Phpstan => Self {
                label: "Installing PHPStan",
                commands: vec![vec!["require", "--dev", "phpstan/phpstan"]],
                template: Some(("phpstan.neon", "phpstan.neon")),
            },
            Tool::PhpCodeSniffer => Self {
                label: "Installing PHP_CodeSniffer",
                commands: vec![vec!["require", "--dev", "squizlabs/php_codesniffer"]],
                template: Some(("phpcs.xml", "phpcs.xml")),
            },
            Tool::Infection => Self {
                label: "Installing Infection",
                // The extension-installer plugin must be allowed before the
                // package itself is required.
                commands: vec![
                    vec![
                        "config",
                        "--no-plugins",
                        "allow-plugins.infection/extension-installer",
                        "true",
                    ],
                    vec!["require", "--dev", "infection/infection"],
                ],
                template: Some(("infection.json5", "infection.json5")),
            },
            Tool::Psl => {
                let mut commands = vec![vec!["require", "azjezz/psl"]];
                if with_phpstan {
                    commands.push(vec![
                        "require",
                        "--dev",
                        "php-standard-library/phpstan-extension",
                    ]);
                }
                Self { label: "Installing PSL", commands, template: None }
            }
            Tool::Safe => {
                let mut commands = vec![vec!["require", "thecodingmachine/safe"]];
                if with_phpstan {
                    commands.push(vec!["require", "--dev", "thecodingmachine/phpstan-safe-rule"]);
                }
                Self { label: "Installing Safe", commands, template: None }
            }
        }
    }
}

impl Step for InstallTool {
    fn announce(&self) -> &str {
        self.label
    }

    fn perform(&self, ctx: &InstallContext) -> Result<(), AppError> {
        for command in &self.commands {
            ctx.composer(command)?;
        }
        if let Some((remote, dest)) = self.template {
            ctx.fetch_template(remote, dest)?;
        }
        Ok(())
    }
}

/// Re-requires tinker with the dev flag; composer owns the move semantics.
pub struct MoveTinker;

impl Step for MoveTinker {
    fn announce(&self) -> &str {
        "Moving tinker to require-dev"
    }

    fn perform(&self, ctx: &InstallContext) -> Result<(), AppError> {
        ctx.composer(&["require", "--dev", "laravel/tinker"])
    }
}
