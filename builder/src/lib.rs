//! Ntfly site builder: static site generation, project index and packaging

pub mod error;
pub mod generator;
pub mod packager;
pub mod preview;
pub mod project;

pub use error::{BuilderError, Result};
pub use generator::{generate_files, Category, ProjectDescription};
pub use packager::{archive_file_name, build_archive, ArchiveExporter};
pub use preview::render_preview;
pub use project::{GeneratedProject, ProjectRepository, ProjectSummary};
