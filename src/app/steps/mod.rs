//! The step catalog and the pipeline assembler.
//!
//! Every step is a value with two ordered phases: a fast announce phase that
//! only yields a label, and a perform phase that may do I/O or shell out.
//! Assembly is a single filter-then-map pass over a fixed catalog table, so
//! the step list for any configuration is enumerable without running
//! anything.

mod documents;
mod fetch_template;
mod frontend;
mod manifest;
mod rename_app;
mod tooling;

pub use documents::CreateDocument;
pub use fetch_template::FetchTemplate;
pub use frontend::{APP_VERSION, RemoveFrontend};
pub use manifest::ConfigureManifest;
pub use rename_app::RenameApplication;
pub use tooling::{InstallTool, MoveTinker};

use crate::app::InstallContext;
use crate::domain::{AppError, BaseFile, Configuration, Tool};

/// One unit of the installation pipeline.
///
/// Not reentrant and not retryable; the executor runs each step at most
/// once. A failure mid-perform may leave partial writes behind — there is no
/// rollback.
pub trait Step {
    /// Short label describing what is about to happen. No I/O beyond that.
    fn announce(&self) -> &str;

    /// Do the work. May block on subprocesses or the network.
    fn perform(&self, ctx: &InstallContext) -> Result<(), AppError>;
}

/// Catalog row: a named step with an inclusion predicate and a factory.
pub struct CatalogEntry {
    pub name: &'static str,
    included: fn(&Configuration) -> bool,
    build: fn(&Configuration) -> Box<dyn Step>,
}

/// The full catalog in execution order. The first four rows are
/// unconditional; the rest are gated on the configuration.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "rename-application",
        included: |_| true,
        build: |c| Box::new(RenameApplication::new(c)),
    },
    CatalogEntry {
        name: "configure-gitignore",
        included: |_| true,
        build: |_| Box::new(FetchTemplate::gitignore()),
    },
    CatalogEntry {
        name: "configure-phpunit",
        included: |_| true,
        build: |_| Box::new(FetchTemplate::phpunit()),
    },
    CatalogEntry {
        name: "configure-manifest",
        included: |_| true,
        build: |c| Box::new(ConfigureManifest::new(c)),
    },
    CatalogEntry {
        name: "create-changelog",
        included: |c| c.wants_base_file(BaseFile::Changelog),
        build: |c| Box::new(CreateDocument::changelog(c)),
    },
    CatalogEntry {
        name: "create-readme",
        included: |c| c.wants_base_file(BaseFile::Readme),
        build: |c| Box::new(CreateDocument::readme(c)),
    },
    CatalogEntry {
        name: "install-pint",
        included: |c| c.wants_tool(Tool::Pint),
        build: |c| Box::new(InstallTool::new(Tool::Pint, c)),
    },
    CatalogEntry {
        name: "install-phpstan",
        included: |c| c.wants_tool(Tool::Phpstan),
        build: |c| Box::new(InstallTool::new(Tool::Phpstan, c)),
    },
    CatalogEntry {
        name: "install-phpcodesniffer",
        included: |c| c.wants_tool(Tool::PhpCodeSniffer),
        build: |c| Box::new(InstallTool::new(Tool::PhpCodeSniffer, c)),
    },
    CatalogEntry {
        name: "install-infection",
        included: |c| c.wants_tool(Tool::Infection),
        build: |c| Box::new(InstallTool::new(Tool::Infection, c)),
    },
    CatalogEntry {
        name: "install-psl",
        included: |c| c.wants_tool(Tool::Psl),
        build: |c| Box::new(InstallTool::new(Tool::Psl, c)),
    },
    CatalogEntry {
        name: "install-safe",
        included: |c| c.wants_tool(Tool::Safe),
        build: |c| Box::new(InstallTool::new(Tool::Safe, c)),
    },
    CatalogEntry {
        name: "move-tinker",
        included: |c| c.move_tinker,
        build: |_| Box::new(MoveTinker),
    },
    CatalogEntry {
        name: "remove-frontend",
        included: |c| c.remove_frontend,
        build: |c| Box::new(RemoveFrontend::new(c)),
    },
];

/// Build the ordered pipeline for a configuration.
///
/// Deterministic: the same configuration always yields the same steps in the
/// same order.
pub fn assemble(config: &Configuration) -> Vec<Box<dyn Step>> {
    CATALOG.iter().filter(|entry| (entry.included)(config)).map(|entry| (entry.build)(config)).collect()
}

/// The step names `assemble` would produce, without building anything.
pub fn step_names(config: &Configuration) -> Vec<&'static str> {
    CATALOG.iter().filter(|entry| (entry.included)(config)).map(|entry| entry.name).collect()
}
