//! Process runner backed by `std::process::Command`.

use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::ProcessRunner;

/// Runs external programs (composer, mostly) as blocking subprocesses.
///
/// No timeout is enforced: a hung subprocess hangs the installer, which is
/// acceptable for a one-shot interactive tool.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandProcessRunner;

impl CommandProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for CommandProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), AppError> {
        let rendered = if args.is_empty() {
            program.to_string()
        } else {
            format!("{program} {}", args.join(" "))
        };

        let output = Command::new(program).args(args).current_dir(cwd).output().map_err(|e| {
            AppError::Process { command: rendered.clone(), details: e.to_string() }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Process {
                command: rendered,
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(())
    }
}
