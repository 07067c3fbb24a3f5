mod process_runner;
mod progress;
mod template_fetcher;

pub use process_runner::ProcessRunner;
pub use progress::ProgressReporter;
pub use template_fetcher::TemplateFetcher;
