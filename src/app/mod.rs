pub mod collector;
pub mod context;
pub mod executor;
pub mod finalizer;
pub mod steps;

pub use context::InstallContext;
