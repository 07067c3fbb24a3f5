use crate::domain::AppError;

/// Abstraction over retrieval of static template files.
///
/// Transport failures and non-success statuses map to `AppError::Fetch`.
pub trait TemplateFetcher {
    /// Fetch the resource at `url` and return its raw bytes.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError>;
}
