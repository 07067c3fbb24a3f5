/// Abstraction over user-visible pipeline progress.
///
/// The executor calls `begin` once, `announce` before each step's perform
/// phase, and `finish` only after every step succeeded.
pub trait ProgressReporter {
    fn begin(&mut self, total: usize);

    /// Report that step `index` (zero-based) of `total` is about to run.
    fn announce(&mut self, index: usize, total: usize, label: &str);

    fn finish(&mut self);
}
