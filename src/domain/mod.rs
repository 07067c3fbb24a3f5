pub mod config;
pub mod error;
pub mod manifest;
pub mod validation;

pub use config::{Author, BaseFile, ComposerSettings, Configuration, Tool};
pub use error::AppError;
pub use manifest::{ComposerManifest, generated_scripts};
