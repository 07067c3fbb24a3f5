mod composer_command;
mod progress_indicatif;
mod template_fetcher_http;

pub use composer_command::CommandProcessRunner;
pub use progress_indicatif::IndicatifReporter;
pub use template_fetcher_http::HttpTemplateFetcher;
