use std::path::Path;

use crate::domain::AppError;

/// Abstraction over external program execution.
///
/// The pipeline only needs "run this argument vector in this directory and
/// tell me whether it succeeded"; a non-zero exit maps to
/// `AppError::Process`. Tests substitute a recording fake.
pub trait ProcessRunner {
    /// Execute `program` with `args` in `cwd`, blocking until it exits.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), AppError>;
}
